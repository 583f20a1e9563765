use crate::render;
use clap::{Args, Parser, Subcommand, ValueEnum};
use crf_tagger::assessment::{
    evaluate, ActivityLevel, AgeInput, AnswerSheetImporter, AnswerSubmission, Breathlessness,
    Sex, StairTolerance,
};
use crf_tagger::config::{AppConfig, OutputFormat};
use crf_tagger::error::AppError;
use crf_tagger::telemetry;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "crf-tagger",
    about = "Tag your likely cardiorespiratory fitness level from a few self-report answers. Informational only, not a medical test or diagnosis.",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Tag a fitness level from questionnaire answers
    Assess(AssessArgs),
    /// List every tier with its score range and description
    Tiers(FormatArgs),
    /// Show the interpretation and lifestyle ideas for a tier
    Advice(AdviceArgs),
    /// Screen every row of a CSV answer sheet (age,sex,activity,breath,stairs)
    Batch(BatchArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct FormatArgs {
    /// Output format (defaults to APP_OUTPUT_FORMAT, then text)
    #[arg(long, value_enum)]
    pub(crate) format: Option<FormatArg>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// Age in years (16 or older)
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) age: String,
    /// Sex, recorded with the result but not scored
    #[arg(long, value_enum, default_value_t = SexArg::Female)]
    pub(crate) sex: SexArg,
    /// Weekly movement: mostly inactive, 1-2 days, most days, or intense training
    #[arg(long, value_enum, default_value_t = ActivityArg::Some)]
    pub(crate) activity: ActivityArg,
    /// How a 10-15 minute brisk walk feels
    #[arg(long, value_enum, default_value_t = BreathArg::SomewhatHard)]
    pub(crate) breath: BreathArg,
    /// One flight of stairs (about 10-15 steps)
    #[arg(long, value_enum, default_value_t = StairsArg::Ok)]
    pub(crate) stairs: StairsArg,
    #[command(flatten)]
    pub(crate) output: FormatArgs,
}

impl AssessArgs {
    pub(crate) fn submission(&self) -> AnswerSubmission {
        AnswerSubmission {
            age: AgeInput::Text(self.age.clone()),
            sex: self.sex.into(),
            activity: self.activity.into(),
            breath: self.breath.into(),
            stairs: self.stairs.into(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum SexArg {
    Female,
    Male,
    Other,
}

impl From<SexArg> for Sex {
    fn from(value: SexArg) -> Self {
        match value {
            SexArg::Female => Sex::Female,
            SexArg::Male => Sex::Male,
            SexArg::Other => Sex::Other,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum ActivityArg {
    Low,
    Some,
    Guidelines,
    High,
}

impl From<ActivityArg> for ActivityLevel {
    fn from(value: ActivityArg) -> Self {
        match value {
            ActivityArg::Low => ActivityLevel::Low,
            ActivityArg::Some => ActivityLevel::Some,
            ActivityArg::Guidelines => ActivityLevel::Guidelines,
            ActivityArg::High => ActivityLevel::High,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum BreathArg {
    Comfortable,
    #[value(name = "somewhatHard")]
    SomewhatHard,
    #[value(name = "veryHard")]
    VeryHard,
}

impl From<BreathArg> for Breathlessness {
    fn from(value: BreathArg) -> Self {
        match value {
            BreathArg::Comfortable => Breathlessness::Comfortable,
            BreathArg::SomewhatHard => Breathlessness::SomewhatHard,
            BreathArg::VeryHard => Breathlessness::VeryHard,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum StairsArg {
    Easy,
    Ok,
    Struggle,
}

impl From<StairsArg> for StairTolerance {
    fn from(value: StairsArg) -> Self {
        match value {
            StairsArg::Easy => StairTolerance::Easy,
            StairsArg::Ok => StairTolerance::Ok,
            StairsArg::Struggle => StairTolerance::Struggle,
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct AdviceArgs {
    /// Tier level: veryHigh, high, moderate or low
    pub(crate) level: String,
    #[command(flatten)]
    pub(crate) output: FormatArgs,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV answer sheet with a header row
    #[arg(long)]
    pub(crate) input: PathBuf,
    #[command(flatten)]
    pub(crate) output: FormatArgs,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    info!(?config.environment, format = ?config.output.format, "configuration loaded");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(cli.command, &config, &mut out)?;
    out.flush()?;
    Ok(())
}

fn execute<W: Write>(command: Command, config: &AppConfig, out: &mut W) -> Result<(), AppError> {
    let resolve = |args: &FormatArgs| {
        args.format
            .map(OutputFormat::from)
            .unwrap_or(config.output.format)
    };

    match command {
        Command::Assess(args) => {
            let format = resolve(&args.output);
            let result = evaluate(args.submission())?;
            info!(level = %result.tier.level, score = result.score, "assessment complete");
            render::assessment(out, &result, format)
        }
        Command::Tiers(args) => render::tiers(out, resolve(&args)),
        Command::Advice(args) => render::advice(out, &args.level, resolve(&args.output)),
        Command::Batch(args) => {
            let format = resolve(&args.output);
            let report = AnswerSheetImporter::from_path(&args.input)?;
            info!(input = %args.input.display(), rows = report.entries.len(), "answer sheet screened");
            render::batch(out, &report, format)
        }
    }
}
