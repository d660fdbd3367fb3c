//! Splitting matched text into highlighted and plain runs for rendering.

/// A run of text that is either all matched or all unmatched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub highlight: bool,
}

/// Split `text` into alternating runs using matched char `indices`.
///
/// Adjacent highlighted chars merge into one segment. Indices past the end
/// of the text are ignored. The result always holds at least one segment, so
/// empty text yields a single empty plain run.
pub fn highlight_segments(text: &str, indices: &[usize]) -> Vec<Segment> {
    if text.is_empty() || indices.is_empty() {
        return vec![Segment {
            text: text.to_string(),
            highlight: false,
        }];
    }
    let mut segments: Vec<Segment> = Vec::new();
    for (i, c) in text.chars().enumerate() {
        let highlight = indices.contains(&i);
        match segments.last_mut() {
            Some(last) if last.highlight == highlight => last.text.push(c),
            _ => segments.push(Segment {
                text: c.to_string(),
                highlight,
            }),
        }
    }
    segments
}
