use crate::feedback::signals::ResponseSignals;

pub const BASE_SCORE: u32 = 65;
pub const STRUCTURE_BONUS: u32 = 10;
pub const DETAIL_BONUS: u32 = 10;
pub const EXAMPLE_BONUS: u32 = 15;
pub const MAX_SCORE: u32 = 100;

/// Additive rubric: base 65 plus a fixed bonus per present signal, clamped at 100.
///
/// There are no deductions, so a response with no signals still scores 65.
pub fn compose_score(signals: &ResponseSignals) -> u32 {
    let mut score = BASE_SCORE;
    if signals.has_structure {
        score += STRUCTURE_BONUS;
    }
    if signals.has_detail {
        score += DETAIL_BONUS;
    }
    if signals.has_example {
        score += EXAMPLE_BONUS;
    }
    score.min(MAX_SCORE)
}
