use colored::*;
use serde::Serialize;

use crate::error::Result;
use crate::fixtures::FixtureOutcome;
use crate::stats::{calculate_percentile, sorted_copy};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub count: usize,
    pub low: f64,
    pub high: f64,
    pub p25: Option<f64>,
    pub median: Option<f64>,
    pub p75: Option<f64>,
}

/// Describes a sample by its range and quartiles. Quartiles whose rank
/// falls outside the sample are left as `None`.
pub fn calculate_summary<T>(sample: &[T]) -> Result<Summary>
where
    T: Copy + Into<f64>,
{
    let sorted = sorted_copy(sample)?;
    let quartile = |p: f64| calculate_percentile(&sorted, p).ok();

    Ok(Summary {
        count: sorted.len(),
        low: sorted[0],
        high: sorted[sorted.len() - 1],
        p25: quartile(0.25),
        median: quartile(0.5),
        p75: quartile(0.75),
    })
}

pub fn log_info(label: &str, value: &str) {
    println!("{:>20}: {}", label.bold(), value);
}

fn format_value(value: Option<f64>) -> ColoredString {
    match value {
        Some(v) => format!("{:.2}", v).magenta(),
        None => "--.--".dimmed(),
    }
}

pub fn log_summary(summary: &Summary) {
    log_info("Count", &summary.count.to_string());
    log_info(
        "Range",
        &format!(
            "{} .. {}",
            format_value(Some(summary.low)),
            format_value(Some(summary.high))
        ),
    );
    log_info(
        "Quartiles",
        &format!(
            "p25: {}, median: {}, p75: {}",
            format_value(summary.p25),
            format_value(summary.median),
            format_value(summary.p75)
        ),
    );
}

pub fn log_fixture_outcome(index: usize, outcome: &FixtureOutcome) {
    let actual = match &outcome.actual {
        Ok(value) => value.to_string().magenta(),
        Err(err) => err.to_string().red(),
    };
    let passed = if outcome.passed {
        "true".green()
    } else {
        "false".red()
    };

    println!("{:>20}", format!("Fixture #{}", index + 1).bold());
    log_info("List", &format!("{:?}", outcome.fixture.sample));
    log_info("Percentile", &outcome.fixture.percentile.to_string());
    log_info("Correct value", &outcome.fixture.expected.to_string());
    log_info("Function value", &actual.to_string());
    log_info("Test passed", &passed.to_string());
}
