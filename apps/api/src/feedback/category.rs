//! Question categories — select the category-specific feedback sentences.

use serde::{Deserialize, Serialize};

/// Interview-question type attached to a submitted response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionCategory {
    Behavioral,
    Technical,
    Leadership,
    Industry,
    Case,
    Performance,
}

/// Fixed positive / improvement sentence pair for one category.
#[derive(Debug, Clone, Copy)]
pub struct CategoryFeedback {
    pub positive: &'static str,
    pub improvement: &'static str,
}

impl QuestionCategory {
    pub const ALL: [QuestionCategory; 6] = [
        QuestionCategory::Behavioral,
        QuestionCategory::Technical,
        QuestionCategory::Leadership,
        QuestionCategory::Industry,
        QuestionCategory::Case,
        QuestionCategory::Performance,
    ];

    /// Parses a category tag case-insensitively. Unknown tags yield `None`,
    /// which callers treat as "no category-specific feedback".
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_lowercase().as_str() {
            "behavioral" => Some(Self::Behavioral),
            "technical" => Some(Self::Technical),
            "leadership" => Some(Self::Leadership),
            "industry" => Some(Self::Industry),
            "case" => Some(Self::Case),
            "performance" => Some(Self::Performance),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Behavioral => "behavioral",
            Self::Technical => "technical",
            Self::Leadership => "leadership",
            Self::Industry => "industry",
            Self::Case => "case",
            Self::Performance => "performance",
        }
    }

    pub fn feedback(&self) -> CategoryFeedback {
        match self {
            Self::Behavioral => CategoryFeedback {
                positive: "Good use of personal experience to show how you handle real workplace situations.",
                improvement: "Use the STAR method (Situation, Task, Action, Result) to structure behavioral answers more clearly.",
            },
            Self::Technical => CategoryFeedback {
                positive: "You demonstrated solid technical knowledge and explained it in accessible terms.",
                improvement: "Go deeper on the technical reasoning behind your approach and the trade-offs you considered.",
            },
            Self::Leadership => CategoryFeedback {
                positive: "You showed a clear sense of how to guide, support and motivate a team.",
                improvement: "Highlight specific moments where you led others toward an outcome.",
            },
            Self::Industry => CategoryFeedback {
                positive: "You showed good awareness of industry trends and how they affect the role.",
                improvement: "Reference current industry developments to show that you stay informed.",
            },
            Self::Case => CategoryFeedback {
                positive: "You approached the problem in a logical and structured way.",
                improvement: "Walk through your assumptions and framework step by step before giving a conclusion.",
            },
            Self::Performance => CategoryFeedback {
                positive: "You connected your work to measurable outcomes.",
                improvement: "Quantify your achievements with concrete metrics such as percentages, time saved or revenue.",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag_known_values() {
        for category in QuestionCategory::ALL {
            assert_eq!(QuestionCategory::from_tag(category.as_str()), Some(category));
        }
    }

    #[test]
    fn test_from_tag_is_case_insensitive() {
        assert_eq!(
            QuestionCategory::from_tag(" Technical "),
            Some(QuestionCategory::Technical)
        );
        assert_eq!(
            QuestionCategory::from_tag("LEADERSHIP"),
            Some(QuestionCategory::Leadership)
        );
    }

    #[test]
    fn test_from_tag_unknown_is_none() {
        assert_eq!(QuestionCategory::from_tag("unknown"), None);
        assert_eq!(QuestionCategory::from_tag(""), None);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&QuestionCategory::Case).unwrap();
        assert_eq!(json, r#""case""#);
        let parsed: QuestionCategory = serde_json::from_str(r#""performance""#).unwrap();
        assert_eq!(parsed, QuestionCategory::Performance);
    }

    #[test]
    fn test_every_category_has_distinct_sentences() {
        for category in QuestionCategory::ALL {
            let fb = category.feedback();
            assert!(!fb.positive.is_empty());
            assert!(!fb.improvement.is_empty());
            assert_ne!(fb.positive, fb.improvement);
        }
    }
}
