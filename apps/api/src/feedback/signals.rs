//! Signal extraction — boolean features derived from a raw response.
//!
//! Matching rules:
//! - the pronoun `"I"` is matched case-sensitively (a lowercase `i` appears in
//!   almost every English sentence and would make the check vacuous)
//! - every other keyword is matched case-insensitively
//! - lengths are counted in chars, not bytes

use serde::{Deserialize, Serialize};

/// Minimum length (exclusive) for a response to count as structured.
pub const STRUCTURE_MIN_CHARS: usize = 200;
/// Minimum length (exclusive) for a response to count as detailed.
pub const DETAIL_MIN_CHARS: usize = 500;

const EXAMPLE_KEYWORDS: &[&str] = &["example", "instance", "situation"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseSignals {
    pub has_structure: bool,
    pub has_detail: bool,
    pub has_example: bool,
}

pub fn extract_signals(response: &str) -> ResponseSignals {
    let lower = response.to_lowercase();
    let char_len = response.chars().count();

    ResponseSignals {
        has_structure: response.contains('I')
            && lower.contains("we")
            && char_len > STRUCTURE_MIN_CHARS,
        has_detail: char_len > DETAIL_MIN_CHARS,
        has_example: EXAMPLE_KEYWORDS.iter().any(|kw| lower.contains(kw)),
    }
}
