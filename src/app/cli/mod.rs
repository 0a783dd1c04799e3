//! CLI Adapter.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::app::api;
use crate::app::commands::demo::DemoReport;
use crate::app::commands::sample;
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "roster")]
#[command(version)]
#[command(about = "Clone an employee roster and show that the copy is independent", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load sample data, clone it, edit the clone, and print both rosters
    #[clap(visible_alias = "d")]
    Demo {
        /// Config file (defaults to ./roster.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Name to append to the clone (repeatable)
        #[arg(short, long = "append", value_name = "NAME")]
        append: Vec<String>,
        /// Name to remove from the clone (repeatable)
        #[arg(short, long = "remove", value_name = "NAME")]
        remove: Vec<String>,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Print the sample roster
    #[clap(visible_alias = "s")]
    Sample {
        /// How many times to load the sample data
        #[arg(
            short,
            long,
            default_value_t = 1,
            value_parser = clap::value_parser!(u32).range(0..=i64::from(sample::MAX_TIMES))
        )]
        times: u32,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Demo { config, append, remove, format } => {
            run_demo(config, append, remove, format)
        }
        Commands::Sample { times, format } => run_sample(times, format),
    };

    if let Err(e) = result {
        log::debug!("command failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_demo(
    config: Option<PathBuf>,
    append: Vec<String>,
    remove: Vec<String>,
    format: OutputFormat,
) -> Result<(), AppError> {
    let cwd = std::env::current_dir()?;
    let report = api::demo_with_config(config.as_deref(), &cwd, append, remove)?;

    match format {
        OutputFormat::Text => print!("{}", render_report(&report)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}

fn run_sample(times: u32, format: OutputFormat) -> Result<(), AppError> {
    let names = api::sample(times)?;

    match format {
        OutputFormat::Text => println!("{}", join_names(&names)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&names)?),
    }
    Ok(())
}

fn render_report(report: &DemoReport) -> String {
    format!(
        "Original: {}\nClone:    {}\n",
        join_names(&report.original),
        join_names(&report.clone)
    )
}

fn join_names(names: &[String]) -> String {
    if names.is_empty() { "(empty)".to_string() } else { names.join(", ") }
}
