//! Key combos: tokenizing, parsing, matching and display.

pub mod format;
pub mod matcher;
pub mod parser;
pub mod tokenizer;

pub use format::{format_combo, modifier_label};
pub use matcher::{code_to_key, expected_modifiers, matches};
pub use parser::{canonical_key, ComboError, ParsedCombo};
