//! formgen CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "formgen", version, about = "Form builder: infer questions from text, grade and analyze responses")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Infer structured questions from free text
    Parse {
        /// Text file with one question per line
        #[arg(long)]
        input: PathBuf,

        /// Parsing mode: simple, classifying
        #[arg(long, default_value = "simple")]
        mode: String,

        /// Title for the generated form
        #[arg(long, default_value = "Untitled form")]
        title: String,

        /// Mark the generated form as a quiz
        #[arg(long)]
        quiz: bool,

        /// Write the generated form as JSON
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Validate a form definition
    Validate {
        /// Form JSON file
        #[arg(long)]
        form: PathBuf,
    },

    /// Aggregate response analytics for a form
    Summarize {
        /// Form JSON file
        #[arg(long)]
        form: PathBuf,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Export responses as CSV
    Export {
        /// Form JSON file
        #[arg(long)]
        form: PathBuf,

        /// CSV output path (stdout when omitted)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("formgen=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Parse {
            input,
            mode,
            title,
            quiz,
            output,
        } => commands::parse::execute(input, mode, title, quiz, output),
        Commands::Validate { form } => commands::validate::execute(form),
        Commands::Summarize { form, format } => commands::summarize::execute(form, format),
        Commands::Export { form, output } => commands::export::execute(form, output),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
