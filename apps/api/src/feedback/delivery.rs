//! Delivery analysis — pace, clarity, tone and confidence derived from the
//! word and sentence counts of a transcript.
//!
//! The formulas are transparent and deterministic:
//!
//! ```text
//! pace       = clamp(70 + words / 10,     60, 100)
//! clarity    = clamp(75 + sentences / 3,  60, 100)
//! tone       = clamp(75 + words mod 10,   65, 100)
//! confidence = clamp(70 + sentences * 2,  55, 100)
//! overall    = floor(mean of the four)
//! ```

use serde::{Deserialize, Serialize};

const PACE_MIN: f64 = 60.0;
const CLARITY_MIN: f64 = 60.0;
const TONE_MIN: f64 = 65.0;
const CONFIDENCE_MIN: f64 = 55.0;
const METRIC_MAX: f64 = 100.0;

const PACE_TIER: f64 = 85.0;
const METRIC_TIER: f64 = 80.0;
/// Transcripts with more words than this earn the detail line.
const DETAILED_WORD_COUNT: usize = 50;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryAnalysis {
    pub pace: f64,
    pub clarity: f64,
    pub tone: f64,
    pub confidence: f64,
    pub overall_score: u32,
    pub feedback: Vec<String>,
}

/// Whitespace-delimited token count.
pub fn word_count(transcript: &str) -> usize {
    transcript.split_whitespace().count()
}

/// Number of segments between runs of `.`, `!` and `?` that carry text.
pub fn sentence_count(transcript: &str) -> usize {
    transcript
        .split(['.', '!', '?'])
        .filter(|segment| !segment.trim().is_empty())
        .count()
}

pub fn analyze_delivery_from_transcript(transcript: &str) -> DeliveryAnalysis {
    let words = word_count(transcript);
    let sentences = sentence_count(transcript);

    let pace = (70.0 + words as f64 / 10.0).clamp(PACE_MIN, METRIC_MAX);
    let clarity = (75.0 + sentences as f64 / 3.0).clamp(CLARITY_MIN, METRIC_MAX);
    let tone = (75.0 + (words % 10) as f64).clamp(TONE_MIN, METRIC_MAX);
    let confidence = (70.0 + sentences as f64 * 2.0).clamp(CONFIDENCE_MIN, METRIC_MAX);

    let overall_score = ((pace + clarity + tone + confidence) / 4.0).floor() as u32;

    let mut feedback = vec![
        tiered(
            pace > PACE_TIER,
            "Your speaking pace was well balanced and easy to follow",
            "Try to keep a steadier pace so the listener can follow each point",
        ),
        tiered(
            clarity > METRIC_TIER,
            "Your points were clearly articulated",
            "Work on articulating each point more clearly and concisely",
        ),
        tiered(
            tone > METRIC_TIER,
            "Your tone was engaging and professional",
            "Vary your tone to sound more engaged and keep the listener's attention",
        ),
        tiered(
            confidence > METRIC_TIER,
            "You projected confidence throughout your answer",
            "Project more confidence by avoiding hedging and filler words",
        ),
    ];
    if words > DETAILED_WORD_COUNT {
        feedback.push("Good level of detail in your response".to_string());
    }

    DeliveryAnalysis {
        pace,
        clarity,
        tone,
        confidence,
        overall_score,
        feedback,
    }
}

fn tiered(strong: bool, strong_text: &str, weak_text: &str) -> String {
    let text = if strong { strong_text } else { weak_text };
    text.to_string()
}
