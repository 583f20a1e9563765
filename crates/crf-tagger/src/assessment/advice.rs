use super::domain::FitnessLevel;

/// Advice shared by every tier, always appended after the tier-specific bullets.
pub const GENERAL_ADVICE: [&str; 4] = [
    "If you are unsure what intensity is safe, ask a healthcare professional before starting a new program.",
    "Use the “talk test”: during moderate activity you can talk in full sentences; during vigorous activity you can say only a few words at a time.",
    "Warm up gently and cool down after exercise, especially if you have been mostly inactive.",
    "Spread activity across the week instead of doing everything on one day.",
];

/// Interpretation paragraph for a tier.
pub fn interpret(level: FitnessLevel) -> &'static str {
    match level {
        FitnessLevel::VeryHigh => concat!(
            "You seem to have strong day-to-day endurance, good recovery during walking, ",
            "and relatively few signs of breathlessness with basic exertion. Keeping this up can support heart, lung, and metabolic health."
        ),
        FitnessLevel::High => concat!(
            "Your current habits and responses suggest generally good cardiorespiratory fitness. ",
            "You may still benefit from gently progressing your weekly activity or adding variety (intervals, hills, different sports) if safe for you."
        ),
        FitnessLevel::Moderate => concat!(
            "Your fitness may sit around the middle range: you can likely manage everyday tasks but may notice breathlessness ",
            "with faster walking, stairs, or hills. Consistent, gradual increases in movement can slowly nudge you toward a higher fitness level."
        ),
        FitnessLevel::Low => concat!(
            "Your answers indicate that even modest exertion (such as brisk walking or stairs) may feel quite demanding. ",
            "This does not diagnose any condition, but it suggests that talking to a healthcare professional about safe ways ",
            "to build up activity—and checking that there is no underlying heart or lung issue—could be useful."
        ),
    }
}

/// Tier-specific lifestyle bullets followed by [`GENERAL_ADVICE`].
pub fn advise_lifestyle(level: FitnessLevel) -> Vec<&'static str> {
    let specific: [&'static str; 3] = match level {
        FitnessLevel::VeryHigh => [
            "Keep mixing in a variety of activities (walking, cycling, swimming, sports, etc.) to stay engaged.",
            "Add in some structured easier days so you do not overtrain or burn out.",
            "Consider occasional fitness checks (like a timed walk or step test) to track progress safely.",
        ],
        FitnessLevel::High => [
            "Aim to meet or slightly exceed standard activity guidelines if safe: about 150–300 minutes per week of moderate activity, or 75–150 minutes vigorous, plus strength work.",
            "Try adding short intervals (slightly faster bursts followed by easier pace) once or twice a week to gently challenge your heart and lungs.",
            "Keep one or two rest or light-activity days weekly for recovery.",
        ],
        FitnessLevel::Moderate => [
            "If cleared for exercise, start with short bouts of walking (5–10 minutes) and slowly build up time and pace.",
            "Try to move on most days—frequency matters more than intensity at first.",
            "Use landmarks (e.g., one more flight of stairs, a slightly longer loop) as simple, safe progression goals.",
        ],
        FitnessLevel::Low => [
            "Discuss your current breathlessness and any chest pain, dizziness, or unusual fatigue with a clinician before making big changes.",
            "If you get medical clearance, start with very short, gentle walks or chair-based movements and increase by just a few minutes at a time.",
            "Consider supervised programs (cardiac rehab, pulmonary rehab, or physiotherapy) if they are recommended and available.",
        ],
    };

    specific.into_iter().chain(GENERAL_ADVICE).collect()
}

/// Interpretation for a level given as text. Unknown levels yield an empty string.
pub fn interpret_level(raw: &str) -> &'static str {
    match raw.parse::<FitnessLevel>() {
        Ok(level) => interpret(level),
        Err(err) => {
            tracing::warn!(%err, "no interpretation for fitness level");
            ""
        }
    }
}

/// Lifestyle advice for a level given as text. Unknown levels get the general advice only.
pub fn advise_lifestyle_for(raw: &str) -> Vec<&'static str> {
    match raw.parse::<FitnessLevel>() {
        Ok(level) => advise_lifestyle(level),
        Err(err) => {
            tracing::warn!(%err, "falling back to general lifestyle advice");
            GENERAL_ADVICE.to_vec()
        }
    }
}
