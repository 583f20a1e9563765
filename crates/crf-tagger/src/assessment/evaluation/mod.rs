mod rules;
mod tiers;

pub use rules::{score, score_breakdown, SCORE_FLOOR};
pub use tiers::classify;

use serde::{Deserialize, Serialize};

/// Questionnaire factor that contributes points to the screening score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFactor {
    Age,
    Activity,
    Breathlessness,
    Stairs,
}

/// Discrete contribution to a score, so a result can show how it was reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: ScoreFactor,
    pub points: i32,
    pub notes: String,
}

/// Per-factor components plus the unclamped and floored totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub components: Vec<ScoreComponent>,
    pub raw_total: i32,
    pub score: i32,
}
