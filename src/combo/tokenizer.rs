//! logos-based combo tokenizer.
//!
//! A combo string is a `+`-separated list of segments (`cmd+shift+p`).
//! Whitespace between segments is ignored, so `"cmd + k"` lexes the same as
//! `"cmd+k"`.

use logos::Logos;

/// Combo token produced by the lexer.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\n\r\f]+")]
pub enum Token {
    /// `+` separator (or a literal plus key when it follows another `+`).
    #[token("+")]
    Plus,

    /// A modifier or key name: `cmd`, `shift`, `k`, `arrowup`, `/`.
    #[regex(r"[^+ \t\n\r\f]+")]
    Segment,
}

/// Tokenize a combo string into `(Token, text)` pairs.
///
/// Characters that fail to lex are skipped.
pub fn tokenize(input: &str) -> Vec<(Token, String)> {
    let lexer = Token::lexer(input);
    lexer
        .spanned()
        .filter_map(|(result, span)| result.ok().map(|token| (token, input[span].to_string())))
        .collect()
}
