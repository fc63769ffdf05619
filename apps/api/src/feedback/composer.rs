//! Feedback Composer — turns signals and a category into an ordered list of
//! feedback items and a one-line overview.
//!
//! Ordering contract: every positive item precedes every improvement item.
//! Within each group the base signals come first (structure → detail →
//! example) and the category sentence, when present, comes last.
//!
//! A known category contributes exactly one sentence: its positive sentence
//! when the score reaches `CATEGORY_IMPROVEMENT_THRESHOLD`, its improvement
//! sentence otherwise.

use serde::{Deserialize, Serialize};

use crate::feedback::category::QuestionCategory;
use crate::feedback::scoring::compose_score;
use crate::feedback::signals::{extract_signals, ResponseSignals};

/// Scores below this threshold get the category improvement sentence instead
/// of the category positive sentence.
pub const CATEGORY_IMPROVEMENT_THRESHOLD: u32 = 85;

pub const OVERVIEW_EXCELLENT: &str = "Excellent response! You communicated clearly, stayed on topic and backed your answer with a relevant example.";
pub const OVERVIEW_STRONG: &str = "Strong response with good substance. A few refinements would make it even more compelling.";
pub const OVERVIEW_GOOD: &str = "Good response that addresses the question. Adding more specific details and examples would strengthen it.";
pub const OVERVIEW_SATISFACTORY: &str = "Satisfactory response. Focus on structuring your answer and supporting it with a concrete example.";

struct SignalSentences {
    positive: &'static str,
    improvement: &'static str,
}

const STRUCTURE: SignalSentences = SignalSentences {
    positive: "Your answer is well structured and balances your own contribution with the team's.",
    improvement: "Structure your answer so it shows both what you did personally and how you worked with others.",
};

const DETAIL: SignalSentences = SignalSentences {
    positive: "You provided a good level of detail.",
    improvement: "Add more detail to fully develop your answer.",
};

const EXAMPLE: SignalSentences = SignalSentences {
    positive: "Great use of a specific example to support your answer.",
    improvement: "Include a specific example or situation to illustrate your point.",
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FeedbackItem {
    Positive { text: String },
    Improvement { text: String },
}

impl FeedbackItem {
    pub fn text(&self) -> &str {
        match self {
            FeedbackItem::Positive { text } | FeedbackItem::Improvement { text } => text,
        }
    }

    pub fn is_positive(&self) -> bool {
        matches!(self, FeedbackItem::Positive { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub score: u32,
    pub overview: String,
    pub items: Vec<FeedbackItem>,
    pub transcription: String,
}

/// Scores a response and composes its feedback.
pub fn score_response(response: &str, category: Option<QuestionCategory>) -> ScoreRecord {
    let signals = extract_signals(response);
    let score = compose_score(&signals);

    ScoreRecord {
        score,
        overview: overview_for_score(score).to_string(),
        items: compose_items(&signals, score, category),
        transcription: response.to_string(),
    }
}

pub fn compose_items(
    signals: &ResponseSignals,
    score: u32,
    category: Option<QuestionCategory>,
) -> Vec<FeedbackItem> {
    let checks = [
        (signals.has_structure, &STRUCTURE),
        (signals.has_detail, &DETAIL),
        (signals.has_example, &EXAMPLE),
    ];

    let mut positives = Vec::new();
    let mut improvements = Vec::new();

    for (present, sentences) in checks {
        if present {
            positives.push(FeedbackItem::Positive {
                text: sentences.positive.to_string(),
            });
        } else {
            improvements.push(FeedbackItem::Improvement {
                text: sentences.improvement.to_string(),
            });
        }
    }

    if let Some(category) = category {
        let fb = category.feedback();
        if score >= CATEGORY_IMPROVEMENT_THRESHOLD {
            positives.push(FeedbackItem::Positive {
                text: fb.positive.to_string(),
            });
        } else {
            improvements.push(FeedbackItem::Improvement {
                text: fb.improvement.to_string(),
            });
        }
    }

    positives.extend(improvements);
    positives
}

pub fn overview_for_score(score: u32) -> &'static str {
    match score {
        s if s >= 90 => OVERVIEW_EXCELLENT,
        s if s >= 80 => OVERVIEW_STRONG,
        s if s >= 70 => OVERVIEW_GOOD,
        _ => OVERVIEW_SATISFACTORY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_marks_text() -> String {
        let mut text = String::from(
            "For example, when I joined the platform group we had a failing release process. ",
        );
        while text.chars().count() <= 500 {
            text.push_str("We rebuilt the pipeline together and I owned the rollout plan. ");
        }
        text
    }

    fn positives_precede_improvements(items: &[FeedbackItem]) -> bool {
        let first_improvement = items.iter().position(|i| !i.is_positive());
        match first_improvement {
            Some(idx) => items[idx..].iter().all(|i| !i.is_positive()),
            None => true,
        }
    }

    #[test]
    fn test_empty_behavioral_scores_base_with_four_improvements() {
        let record = score_response("", Some(QuestionCategory::Behavioral));
        assert_eq!(record.score, 65);
        assert_eq!(record.overview, OVERVIEW_SATISFACTORY);
        assert_eq!(record.items.len(), 4);
        assert!(record.items.iter().all(|i| !i.is_positive()));
        assert_eq!(
            record.items[3].text(),
            QuestionCategory::Behavioral.feedback().improvement
        );
    }

    #[test]
    fn test_full_marks_technical_is_all_positive() {
        let text = full_marks_text();
        let record = score_response(&text, Some(QuestionCategory::Technical));
        assert_eq!(record.score, 100);
        assert_eq!(record.overview, OVERVIEW_EXCELLENT);
        assert_eq!(record.items.len(), 4);
        assert!(record.items.iter().all(FeedbackItem::is_positive));
        assert_eq!(
            record.items[3].text(),
            QuestionCategory::Technical.feedback().positive
        );
        assert_eq!(record.transcription, text);
    }

    #[test]
    fn test_unknown_category_yields_three_base_items() {
        let category = QuestionCategory::from_tag("unknown");
        let record = score_response("short answer", category);
        assert_eq!(record.items.len(), 3);
        assert!(record.items.iter().all(|i| !i.is_positive()));
    }

    #[test]
    fn test_category_positive_at_85_and_above() {
        let signals = ResponseSignals {
            has_structure: false,
            has_detail: true,
            has_example: true,
        };
        let items = compose_items(&signals, 85, Some(QuestionCategory::Case));
        assert_eq!(items.len(), 4);
        // detail, example, category positive, then the structure improvement
        assert_eq!(items[2].text(), QuestionCategory::Case.feedback().positive);
        assert_eq!(items[3].text(), STRUCTURE.improvement);
        assert!(!items
            .iter()
            .any(|i| i.text() == QuestionCategory::Case.feedback().improvement));
    }

    #[test]
    fn test_category_improvement_added_below_85() {
        let signals = ResponseSignals {
            has_structure: false,
            has_detail: false,
            has_example: true,
        };
        let items = compose_items(&signals, 80, Some(QuestionCategory::Leadership));
        assert_eq!(items.len(), 4);
        assert!(!items
            .iter()
            .any(|i| i.text() == QuestionCategory::Leadership.feedback().positive));
        assert_eq!(
            items.last().map(FeedbackItem::text),
            Some(QuestionCategory::Leadership.feedback().improvement)
        );
        assert!(positives_precede_improvements(&items));
    }

    #[test]
    fn test_base_items_follow_signal_order() {
        let signals = ResponseSignals {
            has_structure: true,
            has_detail: false,
            has_example: true,
        };
        let items = compose_items(&signals, 90, None);
        assert_eq!(items[0].text(), STRUCTURE.positive);
        assert_eq!(items[1].text(), EXAMPLE.positive);
        assert_eq!(items[2].text(), DETAIL.improvement);
    }

    #[test]
    fn test_items_always_three_or_four() {
        let samples = [
            "",
            "   ",
            "short",
            "For instance I led the migration and we finished early.",
        ];
        for text in samples {
            for category in QuestionCategory::ALL.map(Some).into_iter().chain([None]) {
                let record = score_response(text, category);
                let expected = if category.is_some() { 4 } else { 3 };
                assert_eq!(record.items.len(), expected, "text {text:?}");
                assert!(positives_precede_improvements(&record.items));
            }
        }
    }

    #[test]
    fn test_overview_tiers() {
        assert_eq!(overview_for_score(100), OVERVIEW_EXCELLENT);
        assert_eq!(overview_for_score(90), OVERVIEW_EXCELLENT);
        assert_eq!(overview_for_score(89), OVERVIEW_STRONG);
        assert_eq!(overview_for_score(80), OVERVIEW_STRONG);
        assert_eq!(overview_for_score(75), OVERVIEW_GOOD);
        assert_eq!(overview_for_score(70), OVERVIEW_GOOD);
        assert_eq!(overview_for_score(65), OVERVIEW_SATISFACTORY);
    }

    #[test]
    fn test_score_response_is_deterministic() {
        let text = "In one instance I worked with my team and we fixed an outage.";
        let a = score_response(text, Some(QuestionCategory::Performance));
        let b = score_response(text, Some(QuestionCategory::Performance));
        assert_eq!(a, b);
    }

    #[test]
    fn test_feedback_item_serializes_as_tagged() {
        let item = FeedbackItem::Improvement {
            text: "Add detail".to_string(),
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["kind"], "improvement");
        assert_eq!(json["text"], "Add detail");
    }
}
