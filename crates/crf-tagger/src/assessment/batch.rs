use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::domain::{
    AgeInput, ActivityLevel, AnswerSubmission, Breathlessness, EvaluationResult, FitnessLevel,
    Sex, StairTolerance,
};
use super::evaluate;
use super::validation::ValidationError;

/// Columns every answer sheet header must name.
pub const REQUIRED_COLUMNS: [&str; 5] = ["age", "sex", "activity", "breath", "stairs"];

#[derive(Debug)]
pub enum ImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    MissingColumn(&'static str),
}

impl std::fmt::Display for ImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImportError::Io(err) => write!(f, "failed to read answer sheet: {}", err),
            ImportError::Csv(err) => write!(f, "invalid answer sheet CSV data: {}", err),
            ImportError::MissingColumn(column) => {
                write!(f, "answer sheet header is missing the '{}' column", column)
            }
        }
    }
}

impl std::error::Error for ImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ImportError::Io(err) => Some(err),
            ImportError::Csv(err) => Some(err),
            ImportError::MissingColumn(_) => None,
        }
    }
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Why a single sheet row produced no result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RowRejection {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("unknown sex '{0}' (expected female, male or other)")]
    UnknownSex(String),
    #[error("row has {found} cells but the header has {expected}")]
    ColumnMismatch { expected: usize, found: usize },
}

impl RowRejection {
    /// Rejection kind without any of the row's answer text.
    pub fn reason(&self) -> &'static str {
        match self {
            RowRejection::Validation(ValidationError::InvalidAge { .. }) => "invalid_age",
            RowRejection::UnknownSex(_) => "unknown_sex",
            RowRejection::ColumnMismatch { .. } => "column_mismatch",
        }
    }
}

/// Outcome for one data row; `line` is the 1-based line in the source file.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchEntry {
    pub line: u64,
    pub outcome: Result<EvaluationResult, RowRejection>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BatchReport {
    pub entries: Vec<BatchEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct BatchSummary {
    pub evaluated: usize,
    pub rejected: usize,
    pub tier_counts: BTreeMap<FitnessLevel, usize>,
}

impl BatchReport {
    pub fn summary(&self) -> BatchSummary {
        let mut summary = BatchSummary::default();

        for entry in &self.entries {
            match &entry.outcome {
                Ok(result) => {
                    summary.evaluated += 1;
                    *summary.tier_counts.entry(result.tier.level).or_insert(0) += 1;
                }
                Err(_) => summary.rejected += 1,
            }
        }

        summary
    }
}

/// Screens every row of a CSV answer sheet (`age,sex,activity,breath,stairs`).
pub struct AnswerSheetImporter;

impl AnswerSheetImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<BatchReport, ImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<BatchReport, ImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);
        let headers = csv_reader.headers()?.clone();
        if let Some(column) = REQUIRED_COLUMNS
            .into_iter()
            .find(|column| !headers.iter().any(|header| header == *column))
        {
            return Err(ImportError::MissingColumn(column));
        }
        let mut report = BatchReport::default();

        for record in csv_reader.records() {
            let record = record?;
            let line = record
                .position()
                .map(|position| position.line())
                .unwrap_or_default();

            let outcome = if record.len() != headers.len() {
                Err(RowRejection::ColumnMismatch {
                    expected: headers.len(),
                    found: record.len(),
                })
            } else {
                let row: AnswerRow = record.deserialize(Some(&headers))?;
                row.into_submission()
                    .and_then(|submission| evaluate(submission).map_err(RowRejection::from))
            };

            if let Err(rejection) = &outcome {
                tracing::info!(line, reason = rejection.reason(), "answer sheet row rejected");
            }

            report.entries.push(BatchEntry { line, outcome });
        }

        tracing::debug!(rows = report.entries.len(), "answer sheet screened");
        Ok(report)
    }
}

#[derive(Debug, Deserialize)]
struct AnswerRow {
    age: String,
    sex: String,
    activity: String,
    breath: String,
    stairs: String,
}

impl AnswerRow {
    fn into_submission(self) -> Result<AnswerSubmission, RowRejection> {
        let sex = Sex::from_answer(&self.sex).ok_or(RowRejection::UnknownSex(self.sex))?;

        Ok(AnswerSubmission {
            age: AgeInput::Text(self.age),
            sex,
            activity: ActivityLevel::from_answer(&self.activity),
            breath: Breathlessness::from_answer(&self.breath),
            stairs: StairTolerance::from_answer(&self.stairs),
        })
    }
}
