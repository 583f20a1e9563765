//! Cardiorespiratory fitness screening.
//!
//! A submission flows through four pure stages: the age validator, the point scorer, the tier
//! classifier and the advisor. Nothing is retained between calls, so evaluations can run from
//! any number of callers without coordination.

pub mod advice;
pub mod batch;
pub mod domain;
pub mod evaluation;
pub mod validation;

#[cfg(test)]
mod tests;

pub use advice::{
    advise_lifestyle, advise_lifestyle_for, interpret, interpret_level, GENERAL_ADVICE,
};
pub use batch::{
    AnswerSheetImporter, BatchEntry, BatchReport, BatchSummary, ImportError, RowRejection,
    REQUIRED_COLUMNS,
};
pub use domain::{
    ActivityLevel, AgeInput, AnswerSet, AnswerSubmission, Breathlessness, EvaluationResult,
    FitnessLevel, FitnessTier, Sex, StairTolerance, UnknownFitnessLevel,
};
pub use evaluation::{
    classify, score, score_breakdown, ScoreBreakdown, ScoreComponent, ScoreFactor, SCORE_FLOOR,
};
pub use validation::{validate_age, ValidationError, MINIMUM_AGE};

/// Validate, score, classify and advise on one questionnaire submission.
pub fn evaluate(submission: AnswerSubmission) -> Result<EvaluationResult, ValidationError> {
    let answers = submission.validate()?;
    let breakdown = score_breakdown(&answers);
    let tier = classify(breakdown.score);

    tracing::debug!(
        level = %tier.level,
        score = breakdown.score,
        raw_total = breakdown.raw_total,
        "questionnaire evaluated"
    );

    Ok(EvaluationResult {
        tier,
        score: breakdown.score,
        interpretation: interpret(tier.level).to_string(),
        lifestyle_tips: advise_lifestyle(tier.level)
            .into_iter()
            .map(str::to_string)
            .collect(),
        answers,
        components: breakdown.components,
    })
}
