use anyhow::Context;
use balance_config::Config;
use clap::{Parser, Subcommand};
use std::process;

mod scan;
mod score;
mod timing;

#[derive(Parser)]
#[command(name = "balance")]
#[command(about = "Dip and balanced-span scans, timings, and rubric scoring", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score googletest XML results against a JSON rubric
    Score(score::ScoreArgs),

    /// Time both scans over a reproducible pseudo-random sequence
    Time(timing::TimingArgs),

    /// Find the last dip in the given values
    Dip {
        #[arg(allow_negative_numbers = true)]
        values: Vec<i32>,
    },

    /// Find the longest zero-sum span in the given values
    Span {
        #[arg(allow_negative_numbers = true)]
        values: Vec<i32>,
    },
}

impl Commands {
    /// Prefix for error messages, matching the tool each command replaces.
    fn program(&self) -> &'static str {
        match self {
            Commands::Score(_) => "rubricscore",
            _ => "balance",
        }
    }
}

fn load_config() -> anyhow::Result<Config> {
    Config::load_or_default().with_context(|| {
        format!(
            "failed to load config file (fix or remove {})",
            Config::config_path().display()
        )
    })
}

/// Runs one command. Only `score` and `time` read the config file.
fn execute(
    command: &Commands,
    load_config: impl FnOnce() -> anyhow::Result<Config>,
) -> anyhow::Result<String> {
    match command {
        Commands::Score(args) => score::run(args, &load_config()?.rubric),
        Commands::Time(args) => timing::run(args, &load_config()?.timing),
        Commands::Dip { values } => Ok(scan::describe_dip(values)),
        Commands::Span { values } => Ok(scan::describe_span(values)),
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let program = cli.command.program();

    let result = execute(&cli.command, load_config);

    match result {
        Ok(output) => print!("{output}"),
        Err(e) => {
            eprintln!("{program}: {e:#}");
            process::exit(1);
        }
    }
}
