//! STAR breakdown — scores Situation, Task, Action and Result independently.
//!
//! Each dimension is a keyword trigger with two fixed outcomes. There is no
//! aggregate STAR score; the four records stand on their own.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StarDimension {
    Situation,
    Task,
    Action,
    Result,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarDimensionScore {
    pub dimension: StarDimension,
    /// 1 – 5, rendered as dots by the client.
    pub score: u8,
    pub feedback: String,
}

pub type StarBreakdown = [StarDimensionScore; 4];

struct DimensionRule {
    dimension: StarDimension,
    triggers: &'static [&'static str],
    matched: (u8, &'static str),
    missing: (u8, &'static str),
}

const RULES: [DimensionRule; 4] = [
    DimensionRule {
        dimension: StarDimension::Situation,
        triggers: &["situation", "context"],
        matched: (4, "You clearly described the situation"),
        missing: (
            2,
            "Try to begin with a clear description of the situation or context",
        ),
    },
    DimensionRule {
        dimension: StarDimension::Task,
        triggers: &["task", "goal", "challenge"],
        matched: (4, "You outlined the task or challenge well"),
        missing: (1, "Make sure to explain what task you were responsible for"),
    },
    DimensionRule {
        dimension: StarDimension::Action,
        triggers: &["action", "i did", "steps"],
        matched: (5, "Your actions were well articulated"),
        missing: (2, "Expand on the specific actions you took"),
    },
    DimensionRule {
        dimension: StarDimension::Result,
        triggers: &["result", "outcome", "accomplishment"],
        matched: (4, "You highlighted the results effectively"),
        missing: (2, "End with the results and impact of your actions"),
    },
];

/// Evaluates the four STAR dimensions with case-insensitive keyword triggers.
pub fn compute_star_breakdown(response: &str) -> StarBreakdown {
    let lower = response.to_lowercase();
    RULES.map(|rule| {
        let hit = rule.triggers.iter().any(|t| lower.contains(t));
        let (score, feedback) = if hit { rule.matched } else { rule.missing };
        StarDimensionScore {
            dimension: rule.dimension,
            score,
            feedback: feedback.to_string(),
        }
    })
}
