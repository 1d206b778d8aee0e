//! Known-answer fixtures for the percentile calculator and the harness that
//! checks them.

use serde::Serialize;

use crate::error::PercentileError;
use crate::stats::calculate_percentile;

const SCORES: &[f64] = &[
    4.0, 4.0, 5.0, 5.0, 5.0, 5.0, 6.0, 6.0, 6.0, 7.0, 7.0, 7.0, 8.0, 8.0, 9.0, 9.0, 9.0, 10.0,
    10.0, 10.0,
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Fixture {
    pub sample: &'static [f64],
    pub percentile: f64,
    pub expected: f64,
}

pub const FIXTURES: [Fixture; 5] = [
    Fixture {
        sample: &[3.0, 5.0, 7.0, 8.0, 9.0, 11.0, 13.0, 15.0],
        percentile: 0.25,
        expected: 5.5,
    },
    Fixture {
        sample: SCORES,
        percentile: 0.25,
        expected: 5.0,
    },
    Fixture {
        sample: SCORES,
        percentile: 0.85,
        expected: 9.85,
    },
    Fixture {
        sample: &[2.0, 3.0, 5.0, 9.0],
        percentile: 0.5,
        expected: 4.0,
    },
    Fixture {
        sample: &[2.0, 3.0, 5.0, 9.0, 11.0],
        percentile: 0.5,
        expected: 5.0,
    },
];

#[derive(Debug, Clone, Serialize)]
pub struct FixtureOutcome {
    pub fixture: Fixture,
    pub actual: Result<f64, PercentileError>,
    pub passed: bool,
}

pub fn check(fixture: Fixture) -> FixtureOutcome {
    let actual = calculate_percentile(fixture.sample, fixture.percentile);
    let passed = matches!(&actual, Ok(value) if *value == fixture.expected);

    FixtureOutcome {
        fixture,
        actual,
        passed,
    }
}

pub fn run_self_test() -> Vec<FixtureOutcome> {
    FIXTURES.iter().copied().map(check).collect()
}
