use serde::Serialize;

use crate::feedback::category::QuestionCategory;
use crate::feedback::category::QuestionCategory::*;

/// A practice question served to the simulator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PracticeQuestion {
    pub id: &'static str,
    pub category: QuestionCategory,
    pub text: &'static str,
}

const fn q(id: &'static str, category: QuestionCategory, text: &'static str) -> PracticeQuestion {
    PracticeQuestion { id, category, text }
}

pub const QUESTION_BANK: &[PracticeQuestion] = &[
    q("behavioral-1", Behavioral, "Tell me about a time you disagreed with a teammate. How did you resolve it?"),
    q("behavioral-2", Behavioral, "Describe a situation where you had to meet a tight deadline."),
    q("behavioral-3", Behavioral, "Give an example of a mistake you made and what you learned from it."),
    q("technical-1", Technical, "Walk me through how you would design a URL shortening service."),
    q("technical-2", Technical, "Explain a technical concept you know well to someone without a technical background."),
    q("technical-3", Technical, "How do you approach debugging a problem you have never seen before?"),
    q("leadership-1", Leadership, "Tell me about a time you led a team through a difficult change."),
    q("leadership-2", Leadership, "How do you motivate a team member who is struggling?"),
    q("leadership-3", Leadership, "Describe a decision you made that was unpopular with your team."),
    q("industry-1", Industry, "What trends do you think will shape our industry over the next five years?"),
    q("industry-2", Industry, "Which company in our space do you admire, and why?"),
    q("case-1", Case, "Our client's profits have fallen 20% this year. How would you find out why?"),
    q("case-2", Case, "Estimate the number of coffee cups sold in a large city each day."),
    q("performance-1", Performance, "What is the accomplishment you are most proud of in your current role?"),
    q("performance-2", Performance, "Tell me about a goal you set for yourself and how you measured progress."),
];

/// All questions, or only those in `category`, in bank order.
pub fn questions_for(category: Option<QuestionCategory>) -> Vec<&'static PracticeQuestion> {
    QUESTION_BANK
        .iter()
        .filter(|question| category.map_or(true, |c| question.category == c))
        .collect()
}

pub fn find_question(id: &str) -> Option<&'static PracticeQuestion> {
    QUESTION_BANK.iter().find(|question| question.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_category_has_questions() {
        for category in QuestionCategory::ALL {
            assert!(
                questions_for(Some(category)).len() >= 2,
                "{} has too few questions",
                category.as_str()
            );
        }
    }

    #[test]
    fn test_no_filter_returns_whole_bank() {
        assert_eq!(questions_for(None).len(), QUESTION_BANK.len());
    }

    #[test]
    fn test_filter_only_returns_requested_category() {
        let technical = questions_for(Some(QuestionCategory::Technical));
        assert!(technical
            .iter()
            .all(|q| q.category == QuestionCategory::Technical));
    }

    #[test]
    fn test_ids_are_unique_and_prefixed_by_category() {
        let mut seen = HashSet::new();
        for question in QUESTION_BANK {
            assert!(seen.insert(question.id), "duplicate id {}", question.id);
            assert!(question.id.starts_with(question.category.as_str()));
        }
    }

    #[test]
    fn test_find_question() {
        assert_eq!(
            find_question("case-2").map(|q| q.category),
            Some(QuestionCategory::Case)
        );
        assert!(find_question("nope").is_none());
    }
}
