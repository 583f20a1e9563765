use super::domain::{AgeInput, AnswerSet, AnswerSubmission};

/// Youngest age the questionnaire accepts.
pub const MINIMUM_AGE: u32 = 16;

/// The single recoverable failure surfaced to callers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter a valid age (16+).")]
    InvalidAge { raw: String },
}

/// Convert a raw age into whole years, rejecting blanks, non-numbers and anything below 16.
pub fn validate_age(raw: &AgeInput) -> Result<u32, ValidationError> {
    let value = match raw {
        AgeInput::Number(value) => *value,
        AgeInput::Text(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                trimmed.parse::<f64>().unwrap_or(f64::NAN)
            }
        }
    };

    if !value.is_finite() || value < f64::from(MINIMUM_AGE) {
        tracing::debug!(reason = "invalid_age", "rejected questionnaire age");
        return Err(ValidationError::InvalidAge {
            raw: raw.to_string(),
        });
    }

    // brackets use integer thresholds, so flooring keeps the same bracket
    Ok(value.floor() as u32)
}

impl AnswerSubmission {
    pub fn validate(self) -> Result<AnswerSet, ValidationError> {
        let age = validate_age(&self.age)?;

        Ok(AnswerSet {
            age,
            sex: self.sex,
            activity: self.activity,
            breath: self.breath,
            stairs: self.stairs,
        })
    }
}
