//! Plain-text renderings for snapshot assertions.
//!
//! Functions for turning highlight segments, ranked matches, and cheatsheets
//! into stable strings that read well in a failing assertion.

use std::fmt::Write as _;

use crate::dispatch::CheatsheetGroup;
use crate::fuzzy::{highlight_segments, FuzzyMatch, Segment};

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Render segments with highlighted runs in brackets.
///
/// # Examples
///
/// ```
/// use keyscope::fuzzy::highlight_segments;
/// use keyscope::testing::segments_to_string;
///
/// let segments = highlight_segments("Go to File", &[0, 6]);
/// assert_eq!(segments_to_string(&segments), "[G]o to [F]ile");
/// ```
pub fn segments_to_string(segments: &[Segment]) -> String {
    let mut out = String::new();
    for segment in segments {
        if segment.highlight {
            out.push('[');
            out.push_str(&segment.text);
            out.push(']');
        } else {
            out.push_str(&segment.text);
        }
    }
    out
}

/// Render ranked matches one per line as `score text`.
///
/// Scores print with three decimals and the matched chars are bracketed.
/// Lines are separated by `'\n'` with no trailing newline.
pub fn matches_to_string<T, F, S>(matches: &[FuzzyMatch<T>], get_text: F) -> String
where
    F: Fn(&T) -> S,
    S: AsRef<str>,
{
    matches
        .iter()
        .map(|m| {
            let text = get_text(&m.item);
            let segments = highlight_segments(text.as_ref(), &m.indices);
            format!("{:.3} {}", m.score, segments_to_string(&segments))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a cheatsheet as an indented listing.
///
/// Each group opens with `priority N`, followed by one line per shortcut:
/// its label, then its description or the raw combo.
pub fn cheatsheet_to_string(groups: &[CheatsheetGroup]) -> String {
    let mut out = String::new();
    for group in groups {
        if !out.is_empty() {
            out.push('\n');
        }
        // Writing to a String cannot fail.
        let _ = write!(out, "priority {}", group.priority);
        for shortcut in &group.shortcuts {
            let text = shortcut.description.as_deref().unwrap_or(&shortcut.combo);
            let _ = write!(out, "\n  {}  {}", shortcut.label, text);
        }
    }
    out
}

// ===========================================================================
// Tests
// ===========================================================================
