use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use spoon_baseline::{
    BaselineEngine, Calculator, Catalog, Status, builtin_catalog, load_catalog_from_json,
};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "spoon_baseline=warn";

#[derive(Parser, Debug)]
#[command(version, about = "Spoon theory baseline calculator", long_about = None)]
struct Args {
    /// JSON file to load the questions from (defaults to the built-in set)
    #[arg(short, long, global = true)]
    questions: Option<PathBuf>,

    /// Write logs to this file during the interactive session
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score answers without the interactive UI and print the result as JSON
    Score {
        /// An answer as QUESTION_ID=VALUE; repeat for each question
        #[arg(short, long = "answer", value_name = "ID=VALUE")]
        answers: Vec<String>,

        /// Current status: optimal, stressed or burnout
        #[arg(short, long, default_value = "optimal")]
        status: Status,

        /// Manual baseline adjustment applied after the answers
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        adjust: i32,
    },

    /// Print the active question catalog as JSON
    Catalog,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let catalog = load_catalog(args.questions.as_deref())?;

    match args.command {
        None => {
            init_file_logging(args.log_file.as_deref())?;
            Calculator::new(catalog)
                .run()
                .context("error running calculator")?;
        }
        Some(Command::Score {
            answers,
            status,
            adjust,
        }) => {
            init_stderr_logging();
            let engine = score(catalog, &answers, status, adjust)?;
            println!("{}", serde_json::to_string_pretty(&engine.snapshot())?);
        }
        Some(Command::Catalog) => {
            init_stderr_logging();
            println!("{}", serde_json::to_string_pretty(&catalog)?);
        }
    }

    Ok(())
}

fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => Ok(load_catalog_from_json(path)?),
        None => Ok(builtin_catalog()),
    }
}

fn score(
    catalog: Catalog,
    answers: &[String],
    status: Status,
    adjust: i32,
) -> Result<BaselineEngine> {
    let mut engine = BaselineEngine::new(catalog);
    engine.start();

    for raw in answers {
        let (question_id, value) = parse_answer(raw)?;
        engine
            .answer(question_id, value)
            .with_context(|| format!("rejected answer '{}'", raw))?;
    }

    if adjust != 0 {
        engine.adjust_baseline(adjust);
    }
    engine.set_status(status);
    Ok(engine)
}

fn parse_answer(raw: &str) -> Result<(&str, u32)> {
    let Some((question_id, value)) = raw.split_once('=') else {
        bail!("answer '{}' must look like QUESTION_ID=VALUE", raw);
    };

    let question_id = question_id.trim();
    if question_id.is_empty() {
        bail!("answer '{}' is missing a question id", raw);
    }

    let value = value
        .trim()
        .parse()
        .with_context(|| format!("answer '{}' has a non-numeric value", raw))?;
    Ok((question_id, value))
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// The UI owns stdout, so interactive logs only go to a file.
fn init_file_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn init_stderr_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .init();
}
