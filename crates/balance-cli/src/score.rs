use anyhow::{Context, Result, bail};
use balance_config::RubricConfig;
use balance_rubric::{Rubric, RubricScore, TestResults, evaluate};
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ScoreArgs {
    /// Rubric JSON mapping test suite names to points
    pub rubric: Option<PathBuf>,

    /// googletest XML report
    pub results: Option<PathBuf>,

    /// Print the score as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

const USAGE: &str = "usage: balance score <RUBRIC-JSON-PATH> <GTEST-XML-PATH>\n\
                     (or set rubric_path and results_path under [rubric] in the config file)";

/// Picks input paths from the command line, falling back to the config file.
pub fn resolve_paths(args: &ScoreArgs, config: &RubricConfig) -> Result<(PathBuf, PathBuf)> {
    let rubric = args.rubric.clone().or_else(|| config.rubric_path.clone());
    let results = args.results.clone().or_else(|| config.results_path.clone());
    match (rubric, results) {
        (Some(rubric), Some(results)) => Ok((rubric, results)),
        _ => bail!(USAGE),
    }
}

/// Loads both inputs and scores them. Nothing is rendered unless every step
/// succeeds.
pub fn score(args: &ScoreArgs, config: &RubricConfig) -> Result<RubricScore> {
    let (rubric_path, results_path) = resolve_paths(args, config)?;
    log::info!(
        "scoring {} against {}",
        results_path.display(),
        rubric_path.display()
    );

    let rubric = Rubric::load_from_path(&rubric_path).with_context(|| {
        format!("error loading rubric JSON '{}'", rubric_path.display())
    })?;
    let results = TestResults::load_from_path(&results_path).with_context(|| {
        format!("error loading googletest XML '{}'", results_path.display())
    })?;

    Ok(evaluate(&rubric, &results)?)
}

pub fn run(args: &ScoreArgs, config: &RubricConfig) -> Result<String> {
    let score = score(args, config)?;
    if args.json {
        let mut json = serde_json::to_string_pretty(&score)?;
        json.push('\n');
        Ok(json)
    } else {
        Ok(score.render(config.rule_width))
    }
}
