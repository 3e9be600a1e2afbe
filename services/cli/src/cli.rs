use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use interview_eval::{evaluate_answer, InterviewType};
use serde::Deserialize;

use crate::config::AppConfig;
use crate::error::AppError;
use crate::{output, telemetry};

#[derive(Parser, Debug)]
#[command(
    name = "interview-eval",
    about = "Score interview practice answers with the rule-based evaluator",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score a single answer and print the feedback report (default command)
    Evaluate(EvaluateArgs),
    /// Score a CSV of answers, emitting one JSON report per row
    Batch(BatchArgs),
}

#[derive(Args, Debug, Default)]
struct EvaluateArgs {
    /// Answer text; reads stdin when omitted and --file is not set
    answer: Option<String>,
    /// Read the answer from a file instead of the command line
    #[arg(long, conflicts_with = "answer")]
    file: Option<PathBuf>,
    /// Interview type: general, technical, or behavioral
    #[arg(long, short = 't', default_value = "general")]
    interview_type: String,
    /// Emit the raw evaluation as JSON instead of the readable report
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct BatchArgs {
    /// CSV file with an `answer` column and an optional `interview_type` column
    input: PathBuf,
}

pub(crate) fn run() -> Result<(), AppError> {
    let config = AppConfig::load();
    telemetry::init(&config.telemetry)?;

    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Evaluate(EvaluateArgs::default()));

    match command {
        Command::Evaluate(args) => run_evaluate(args),
        Command::Batch(args) => run_batch(args),
    }
}

/// Missing or unrecognized tags fall back to `general`; defaulting is the
/// caller's job, the evaluator only accepts the three valid types.
fn resolve_interview_type(tag: &str) -> InterviewType {
    if tag.trim().is_empty() {
        return InterviewType::General;
    }
    tag.parse().unwrap_or_else(|err| {
        tracing::warn!(%err, "falling back to the general interview type");
        InterviewType::General
    })
}

fn read_answer(args: &EvaluateArgs) -> Result<String, AppError> {
    if let Some(text) = &args.answer {
        return Ok(text.clone());
    }
    if let Some(path) = &args.file {
        return Ok(fs::read_to_string(path)?);
    }
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let answer = read_answer(&args)?;
    let interview_type = resolve_interview_type(&args.interview_type);
    // Strip the trailing newline that stdin and text files usually carry so
    // it does not skew the length and paragraph checks.
    let evaluation = evaluate_answer(answer.trim_end_matches('\n'), interview_type);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&evaluation)?);
    } else {
        println!("{}", output::render_report(&evaluation));
    }
    Ok(())
}

#[derive(Debug, Deserialize)]
struct BatchRow {
    answer: String,
    #[serde(default)]
    interview_type: String,
}

fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let mut reader = csv::Reader::from_path(&args.input)?;
    for record in reader.deserialize() {
        let row: BatchRow = record?;
        let interview_type = resolve_interview_type(&row.interview_type);
        let evaluation = evaluate_answer(&row.answer, interview_type);
        println!("{}", serde_json::to_string(&evaluation)?);
    }
    Ok(())
}
