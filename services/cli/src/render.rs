use crf_tagger::assessment::{
    advise_lifestyle_for, interpret_level, BatchReport, BatchSummary, EvaluationResult,
    FitnessLevel, FitnessTier,
};
use crf_tagger::config::OutputFormat;
use crf_tagger::error::AppError;
use serde::Serialize;
use std::io::Write;

const DISCLAIMER: &str = "This tool cannot diagnose any heart, lung, or metabolic condition and does not replace professional evaluation. If you experience chest pain, severe breathlessness, dizziness, or fainting with activity, seek medical advice promptly and before pushing your exercise intensity.";

#[derive(Debug, Serialize)]
struct TierView {
    level: FitnessLevel,
    label: &'static str,
    description: &'static str,
    min_score: Option<i32>,
    max_score: Option<i32>,
}

#[derive(Debug, Serialize)]
struct AdviceView<'a> {
    level: &'a str,
    interpretation: &'static str,
    lifestyle_tips: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
struct BatchEntryView<'a> {
    line: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<&'a EvaluationResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Debug, Serialize)]
struct BatchView<'a> {
    entries: Vec<BatchEntryView<'a>>,
    summary: BatchSummary,
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<(), AppError> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

fn write_tips<W: Write>(out: &mut W, tips: &[impl AsRef<str>]) -> Result<(), AppError> {
    if tips.is_empty() {
        return Ok(());
    }

    writeln!(out, "\nHeart- and lung-friendly ideas:")?;
    for tip in tips {
        writeln!(out, "- {}", tip.as_ref())?;
    }
    Ok(())
}

pub(crate) fn assessment<W: Write>(
    out: &mut W,
    result: &EvaluationResult,
    format: OutputFormat,
) -> Result<(), AppError> {
    if format == OutputFormat::Json {
        return write_json(out, result);
    }

    writeln!(out, "Your CRF Level Tag: {}", result.tier.label)?;
    writeln!(
        out,
        "Screening score (higher = more signs of lower fitness): {}",
        result.score
    )?;

    writeln!(out, "\nScore breakdown")?;
    for component in &result.components {
        writeln!(
            out,
            "- {:?}: {:+} ({})",
            component.factor, component.points, component.notes
        )?;
    }

    writeln!(out, "\n{}", result.tier.description)?;
    writeln!(out, "\n{}", result.interpretation)?;
    write_tips(out, &result.lifestyle_tips)?;
    writeln!(out, "\n{DISCLAIMER}")?;
    Ok(())
}

pub(crate) fn tiers<W: Write>(out: &mut W, format: OutputFormat) -> Result<(), AppError> {
    let views: Vec<TierView> = FitnessLevel::ALL
        .into_iter()
        .map(|level| {
            let tier = FitnessTier::for_level(level);
            let (min_score, max_score) = level.score_range();
            TierView {
                level,
                label: tier.label,
                description: tier.description,
                min_score,
                max_score,
            }
        })
        .collect();

    if format == OutputFormat::Json {
        return write_json(out, &views);
    }

    writeln!(out, "CRF tiers (higher score = more signs of lower fitness)")?;
    for view in &views {
        let range = match (view.min_score, view.max_score) {
            (None, Some(max)) => format!("score <= {max}"),
            (Some(min), None) => format!("score >= {min}"),
            (Some(min), Some(max)) => format!("score {min}-{max}"),
            (None, None) => "any score".to_string(),
        };
        writeln!(out, "- {} [{}]: {}", view.label, range, view.description)?;
    }
    Ok(())
}

pub(crate) fn advice<W: Write>(out: &mut W, level: &str, format: OutputFormat) -> Result<(), AppError> {
    let view = AdviceView {
        level,
        interpretation: interpret_level(level),
        lifestyle_tips: advise_lifestyle_for(level),
    };

    if format == OutputFormat::Json {
        return write_json(out, &view);
    }

    match level.parse::<FitnessLevel>() {
        Ok(parsed) => writeln!(out, "{}", FitnessTier::for_level(parsed).label)?,
        Err(_) => writeln!(out, "Unknown level '{level}': showing general advice only")?,
    }

    if !view.interpretation.is_empty() {
        writeln!(out, "\n{}", view.interpretation)?;
    }
    write_tips(out, &view.lifestyle_tips)?;
    Ok(())
}

pub(crate) fn batch<W: Write>(
    out: &mut W,
    report: &BatchReport,
    format: OutputFormat,
) -> Result<(), AppError> {
    let summary = report.summary();

    if format == OutputFormat::Json {
        let entries = report
            .entries
            .iter()
            .map(|entry| match &entry.outcome {
                Ok(result) => BatchEntryView {
                    line: entry.line,
                    result: Some(result),
                    error: None,
                },
                Err(rejection) => BatchEntryView {
                    line: entry.line,
                    result: None,
                    error: Some(rejection.to_string()),
                },
            })
            .collect();
        return write_json(out, &BatchView { entries, summary });
    }

    writeln!(out, "Answer sheet screening")?;
    for entry in &report.entries {
        match &entry.outcome {
            Ok(result) => writeln!(
                out,
                "- line {}: {} (score {})",
                entry.line, result.tier.label, result.score
            )?,
            Err(rejection) => writeln!(out, "- line {}: rejected ({})", entry.line, rejection)?,
        }
    }

    writeln!(
        out,
        "\nEvaluated {} | Rejected {}",
        summary.evaluated, summary.rejected
    )?;
    for (level, count) in &summary.tier_counts {
        writeln!(out, "- {}: {}", FitnessTier::for_level(*level).label, count)?;
    }
    Ok(())
}
