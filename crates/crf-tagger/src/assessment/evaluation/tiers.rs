use super::super::domain::{FitnessLevel, FitnessTier};

/// Map a screening score onto its tier. Total over every `i32`.
pub fn classify(score: i32) -> FitnessTier {
    let level = match score {
        i32::MIN..=0 => FitnessLevel::VeryHigh,
        1..=4 => FitnessLevel::High,
        5..=8 => FitnessLevel::Moderate,
        _ => FitnessLevel::Low,
    };

    FitnessTier::for_level(level)
}

impl FitnessTier {
    pub fn for_level(level: FitnessLevel) -> Self {
        let (label, description) = match level {
            FitnessLevel::VeryHigh => (
                "Very High / Excellent CRF",
                "Your answers suggest strong everyday stamina and a generally high cardiorespiratory fitness level for your age.",
            ),
            FitnessLevel::High => (
                "Good CRF",
                "You report a fairly active lifestyle with manageable breathlessness, suggesting a good level of fitness.",
            ),
            FitnessLevel::Moderate => (
                "Moderate CRF",
                "There are signs your current fitness is in a moderate range, with room to build more stamina over time.",
            ),
            FitnessLevel::Low => (
                "Lower CRF Indication",
                "Your answers show several indicators of lower cardiorespiratory fitness. Building gradual activity could be especially helpful.",
            ),
        };

        Self {
            level,
            label,
            description,
        }
    }
}
