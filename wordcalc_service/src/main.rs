//! # Wordcalc CLI
//!

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use serde::Serialize;
use wordcalc_service::{CliConfig, QuestionRequest, QuestionService};

#[derive(Parser)]
#[command(
    name = "wordcalc",
    version,
    about = "Answers natural-language arithmetic questions"
)]
struct Cli {
    /// Optional TOML configuration file
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Evaluate a question and print the result
    Evaluate {
        /// Question text, e.g. "What is 2 plus 3?"
        #[arg(required_unless_present = "file")]
        question: Vec<String>,

        /// JSON request file with an "expression" field
        #[arg(long, value_name = "FILE", conflicts_with = "question")]
        file: Option<PathBuf>,
    },
    /// Check a question against the grammar
    Validate {
        /// Question text, e.g. "What is 2 plus 3?"
        #[arg(required_unless_present = "file")]
        question: Vec<String>,

        /// JSON request file with an "expression" field
        #[arg(long, value_name = "FILE", conflicts_with = "question")]
        file: Option<PathBuf>,
    },
    /// Interactive loop: one question per line, "errors" dumps failures,
    /// "exit" leaves
    Repl,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => CliConfig::load(path)?,
        None => CliConfig::default(),
    };
    init_logging(&config);
    log::info!("wordcalc starting");

    let service = QuestionService::new();

    match cli.command {
        Command::Evaluate { question, file } => {
            let request = build_request(&question, file.as_deref())?;
            print_json(&service.evaluate(&request), config.pretty)?;
        }
        Command::Validate { question, file } => {
            let request = build_request(&question, file.as_deref())?;
            print_json(&service.validate(&request), config.pretty)?;
        }
        Command::Repl => {
            repl(&service, &config)?;
        }
    }

    Ok(())
}

fn init_logging(config: &CliConfig) {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_filter.as_str()),
    )
    .init();
}

/// Assemble a request from inline question words or a JSON request file.
fn build_request(
    question: &[String],
    file: Option<&Path>,
) -> Result<QuestionRequest, Box<dyn std::error::Error>> {
    match file {
        Some(path) => {
            let text = std::fs::read_to_string(path)?;
            Ok(serde_json::from_str(&text)?)
        }
        None => Ok(QuestionRequest::from_text(question.join(" "))),
    }
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<(), serde_json::Error> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{rendered}");
    Ok(())
}

/// Interactive front end over stdin. Failures accumulate in the service's
/// store for the lifetime of the loop, so "errors" reflects everything the
/// session has rejected.
fn repl(service: &QuestionService, config: &CliConfig) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("question> ");
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        let input = line.trim();

        if input.is_empty() {
            println!("Try again..");
            continue;
        }
        if input == "exit" {
            break;
        }
        if input == "errors" {
            print_json(&service.errors(), config.pretty)?;
            continue;
        }
        if let Some(question) = input.strip_prefix("validate ") {
            print_json(&service.validate(&QuestionRequest::from_text(question)), config.pretty)?;
            continue;
        }

        print_json(&service.evaluate(&QuestionRequest::from_text(input)), config.pretty)?;
    }

    Ok(())
}
