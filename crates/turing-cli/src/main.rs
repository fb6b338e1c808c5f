//! turing CLI — grade short-answer questions from the command line.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "turing", version, about = "Short-answer grading client")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Grade an answer against a question file
    Grade {
        /// Path to a .toml or .json question file
        #[arg(long)]
        question: PathBuf,

        /// The answer to grade
        #[arg(long)]
        answer: String,

        /// API key (overrides config and TURING_API_KEY)
        #[arg(long)]
        api_key: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Check a question file without contacting the grading service
    Validate {
        /// Path to a .toml or .json question file
        #[arg(long)]
        question: PathBuf,
    },

    /// List rubric presets and their default criteria
    Rubrics {
        /// Show a single preset (e.g. "factual")
        #[arg(long)]
        preset: Option<String>,
    },

    /// Create a starter question file
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("turing=info".parse().expect("static directive")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Grade {
            question,
            answer,
            api_key,
            config,
            format,
        } => commands::grade::execute(question, answer, api_key, config, format).await,
        Commands::Validate { question } => commands::validate::execute(question),
        Commands::Rubrics { preset } => commands::rubrics::execute(preset),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
