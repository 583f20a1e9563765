use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::evaluation::ScoreComponent;

/// Self-reported sex. Recorded alongside the answers but never scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Sex {
    Female,
    Male,
    Other,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Female => "female",
            Sex::Male => "male",
            Sex::Other => "other",
        }
    }

    pub fn from_answer(raw: &str) -> Option<Self> {
        match raw.trim() {
            "female" => Some(Sex::Female),
            "male" => Some(Sex::Male),
            "other" => Some(Sex::Other),
            _ => None,
        }
    }
}

/// Weekly movement or exercise habit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActivityLevel {
    /// Mostly inactive: short walks only, rare exercise.
    Low,
    /// Active one or two days per week.
    Some,
    /// Active most days, roughly meeting standard guidelines.
    Guidelines,
    /// Trains intensely several days per week.
    High,
    #[serde(other)]
    Unrecognized,
}

impl ActivityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Low => "low",
            ActivityLevel::Some => "some",
            ActivityLevel::Guidelines => "guidelines",
            ActivityLevel::High => "high",
            ActivityLevel::Unrecognized => "unrecognized",
        }
    }

    /// Unknown text maps to `Unrecognized` rather than failing.
    pub fn from_answer(raw: &str) -> Self {
        match raw.trim() {
            "low" => ActivityLevel::Low,
            "some" => ActivityLevel::Some,
            "guidelines" => ActivityLevel::Guidelines,
            "high" => ActivityLevel::High,
            _ => ActivityLevel::Unrecognized,
        }
    }
}

/// How a 10 to 15 minute brisk walk feels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Breathlessness {
    Comfortable,
    SomewhatHard,
    VeryHard,
    #[serde(other)]
    Unrecognized,
}

impl Breathlessness {
    pub fn as_str(&self) -> &'static str {
        match self {
            Breathlessness::Comfortable => "comfortable",
            Breathlessness::SomewhatHard => "somewhatHard",
            Breathlessness::VeryHard => "veryHard",
            Breathlessness::Unrecognized => "unrecognized",
        }
    }

    pub fn from_answer(raw: &str) -> Self {
        match raw.trim() {
            "comfortable" => Breathlessness::Comfortable,
            "somewhatHard" => Breathlessness::SomewhatHard,
            "veryHard" => Breathlessness::VeryHard,
            _ => Breathlessness::Unrecognized,
        }
    }
}

/// Tolerance for one flight of stairs (about 10 to 15 steps).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StairTolerance {
    Easy,
    Ok,
    Struggle,
    #[serde(other)]
    Unrecognized,
}

impl StairTolerance {
    pub fn as_str(&self) -> &'static str {
        match self {
            StairTolerance::Easy => "easy",
            StairTolerance::Ok => "ok",
            StairTolerance::Struggle => "struggle",
            StairTolerance::Unrecognized => "unrecognized",
        }
    }

    pub fn from_answer(raw: &str) -> Self {
        match raw.trim() {
            "easy" => StairTolerance::Easy,
            "ok" => StairTolerance::Ok,
            "struggle" => StairTolerance::Struggle,
            _ => StairTolerance::Unrecognized,
        }
    }
}

/// Age exactly as the caller collected it, before validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AgeInput {
    Number(f64),
    Text(String),
}

impl From<u32> for AgeInput {
    fn from(value: u32) -> Self {
        AgeInput::Number(f64::from(value))
    }
}

impl From<&str> for AgeInput {
    fn from(value: &str) -> Self {
        AgeInput::Text(value.to_string())
    }
}

impl From<String> for AgeInput {
    fn from(value: String) -> Self {
        AgeInput::Text(value)
    }
}

impl fmt::Display for AgeInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgeInput::Number(value) => write!(f, "{value}"),
            AgeInput::Text(value) => f.write_str(value),
        }
    }
}

/// Caller-constructed questionnaire answers awaiting validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerSubmission {
    pub age: AgeInput,
    pub sex: Sex,
    pub activity: ActivityLevel,
    pub breath: Breathlessness,
    pub stairs: StairTolerance,
}

/// Validated answers. Immutable once produced by [`AnswerSubmission::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSet {
    pub age: u32,
    pub sex: Sex,
    pub activity: ActivityLevel,
    pub breath: Breathlessness,
    pub stairs: StairTolerance,
}

/// Tier buckets, ordered from best to worst fitness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FitnessLevel {
    VeryHigh,
    High,
    Moderate,
    Low,
}

impl FitnessLevel {
    pub const ALL: [FitnessLevel; 4] = [
        FitnessLevel::VeryHigh,
        FitnessLevel::High,
        FitnessLevel::Moderate,
        FitnessLevel::Low,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FitnessLevel::VeryHigh => "veryHigh",
            FitnessLevel::High => "high",
            FitnessLevel::Moderate => "moderate",
            FitnessLevel::Low => "low",
        }
    }

    /// Inclusive score bounds that classify into this level. `None` marks an open end.
    pub fn score_range(&self) -> (Option<i32>, Option<i32>) {
        match self {
            FitnessLevel::VeryHigh => (None, Some(0)),
            FitnessLevel::High => (Some(1), Some(4)),
            FitnessLevel::Moderate => (Some(5), Some(8)),
            FitnessLevel::Low => (Some(9), None),
        }
    }
}

impl fmt::Display for FitnessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown fitness level '{0}'")]
pub struct UnknownFitnessLevel(pub String);

impl FromStr for FitnessLevel {
    type Err = UnknownFitnessLevel;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        FitnessLevel::ALL
            .into_iter()
            .find(|level| level.as_str() == raw.trim())
            .ok_or_else(|| UnknownFitnessLevel(raw.to_string()))
    }
}

/// Classified tier with its display label and one-sentence description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FitnessTier {
    pub level: FitnessLevel,
    pub label: &'static str,
    pub description: &'static str,
}

/// Output of a single evaluation, owned by the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationResult {
    pub tier: FitnessTier,
    pub score: i32,
    pub interpretation: String,
    pub lifestyle_tips: Vec<String>,
    pub answers: AnswerSet,
    pub components: Vec<ScoreComponent>,
}
