use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::*;
use log::info;
use serde_json::json;

use pctl::fixtures::run_self_test;
use pctl::stats::calculate_percentile_at;
use pctl::utils::{calculate_summary, log_fixture_outcome, log_info, log_summary};
use pctl::Percentile;

#[derive(Parser, Debug)]
#[command(name = "pctl", version, about = "Interpolated rank-based percentiles")]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute one percentile of a sample
    Calc {
        /// Target percentile, as a fraction (0.25) or a percentage (25%)
        #[arg(short, long)]
        percentile: Percentile,

        #[command(flatten)]
        input: Input,
    },
    /// Describe a sample: range and quartiles
    Summary {
        #[command(flatten)]
        input: Input,
    },
    /// Run the built-in known-answer fixtures
    SelfTest,
}

#[derive(Args, Debug)]
struct Input {
    /// Sample values, separated by commas or whitespace
    values: Vec<String>,

    /// Read the sample from a JSON array of numbers
    #[arg(short, long, conflicts_with = "values")]
    file: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

impl Input {
    fn load(&self) -> Result<Vec<f64>> {
        let sample = match &self.file {
            Some(path) => read_sample_file(path)?,
            None => parse_values(&self.values)?,
        };
        info!("loaded {} sample values", sample.len());
        Ok(sample)
    }
}

fn parse_values(args: &[String]) -> Result<Vec<f64>> {
    args.iter()
        .flat_map(|arg| arg.split(|c: char| c == ',' || c.is_whitespace()))
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<f64>()
                .with_context(|| format!("invalid sample value '{}'", token))
        })
        .collect()
}

fn read_sample_file(path: &Path) -> Result<Vec<f64>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let sample: Vec<f64> = serde_json::from_str(&data)
        .with_context(|| format!("{} is not a JSON array of numbers", path.display()))?;
    Ok(sample)
}

fn init_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match cli.command {
        Command::Calc { percentile, input } => {
            let sample = input.load()?;
            let value = calculate_percentile_at(&sample, percentile)
                .with_context(|| format!("cannot compute the {} percentile", percentile))?;

            if input.json {
                let out = json!({ "percentile": percentile, "value": value });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                log_info(
                    &format!("{} percentile", percentile),
                    &format!("{}", value).magenta().to_string(),
                );
            }
        }
        Command::Summary { input } => {
            let sample = input.load()?;
            let summary = calculate_summary(&sample)?;

            if input.json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                log_summary(&summary);
            }
        }
        Command::SelfTest => {
            let outcomes = run_self_test();
            for (index, outcome) in outcomes.iter().enumerate() {
                log_fixture_outcome(index, outcome);
            }

            let failed = outcomes.iter().filter(|o| !o.passed).count();
            if failed > 0 {
                bail!("{} of {} fixtures failed", failed, outcomes.len());
            }
            println!("{}", format!("All {} fixtures passed", outcomes.len()).green());
        }
    }

    Ok(())
}
