//! Rank-based percentile with linear interpolation between closest ranks.
//!
//! The rank of a percentile `p` over `n` sorted values is `p * (n + 1)`,
//! counted from 1. An integer rank selects that element directly. A
//! fractional rank blends the two neighbouring elements and the blend is
//! rounded to two decimals.
//!
//! Ranks that fall outside `1..=n` are reported as errors and never clamped.

use log::debug;

use crate::error::{PercentileError, Result};
use crate::percentile::Percentile;

/// Rounds to two decimal places, ties to even.
///
/// Values too large to carry a hundredths digit are returned unchanged.
pub fn round2(value: f64) -> f64 {
    let scaled = value * 100.0;
    if !(scaled.abs() < MAX_EXACT_INTEGER) {
        return value;
    }
    scaled.round_ties_even() / 100.0
}

// 2^53: every double at or above this magnitude is already an integer.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Returns a sorted ascending copy of `sample`, rejecting empty samples and
/// non-finite values.
pub fn sorted_copy<T>(sample: &[T]) -> Result<Vec<f64>>
where
    T: Copy + Into<f64>,
{
    if sample.is_empty() {
        return Err(PercentileError::invalid("sample must not be empty"));
    }

    let mut values: Vec<f64> = sample.iter().map(|&v| v.into()).collect();
    if let Some(bad) = values.iter().find(|v| !v.is_finite()) {
        return Err(PercentileError::invalid(format!(
            "sample contains a non-finite value ({})",
            bad
        )));
    }

    values.sort_by(f64::total_cmp);
    Ok(values)
}

/// Resolves a 1-indexed `rank` against an ascending `sorted` sample.
pub fn value_at_rank(sorted: &[f64], rank: usize) -> Result<f64> {
    if rank == 0 {
        return Err(PercentileError::invalid(
            "rank must resolve to a positive value",
        ));
    }

    sorted
        .get(rank - 1)
        .copied()
        .ok_or(PercentileError::OutOfRange {
            rank,
            len: sorted.len(),
        })
}

/// Blends `lower` and `upper` by `fraction` without forming `upper - lower`,
/// which overflows for neighbours of extreme opposite sign.
fn interpolate(lower: f64, upper: f64, fraction: f64) -> f64 {
    if lower == upper {
        return lower;
    }
    // may land one ulp outside the neighbours
    ((1.0 - fraction) * lower + fraction * upper).clamp(lower, upper)
}

/// Computes the interpolated percentile of `sample`.
///
/// `percentile` is a fraction in `[0, 1]`. The caller's sample is left
/// untouched; a sorted copy is used for rank resolution.
///
/// # Errors
/// - [`PercentileError::InvalidInput`] for an empty sample, a non-finite
///   sample value, a percentile outside `[0, 1]`, or a rank below one.
/// - [`PercentileError::OutOfRange`] when the rank (or the upper neighbour
///   of a fractional rank) lies past the last element, e.g. `percentile = 1`.
///
/// # Examples
/// ```
/// use pctl::stats::calculate_percentile;
/// let scores = [3, 5, 7, 8, 9, 11, 13, 15];
/// assert_eq!(calculate_percentile(&scores, 0.25).unwrap(), 5.5);
/// ```
pub fn calculate_percentile<T>(sample: &[T], percentile: f64) -> Result<f64>
where
    T: Copy + Into<f64>,
{
    let percentile = Percentile::from_fraction(percentile)?;
    calculate_percentile_at(sample, percentile)
}

/// Same as [`calculate_percentile`], taking an already validated [`Percentile`].
pub fn calculate_percentile_at<T>(sample: &[T], percentile: Percentile) -> Result<f64>
where
    T: Copy + Into<f64>,
{
    let sorted = sorted_copy(sample)?;
    let rank = percentile.fraction() * (sorted.len() + 1) as f64;
    debug!(
        "percentile {} over {} values resolves to rank {}",
        percentile,
        sorted.len(),
        rank
    );

    if rank <= 0.0 {
        return Err(PercentileError::invalid(
            "rank must resolve to a positive value",
        ));
    }

    if rank.fract() == 0.0 {
        return value_at_rank(&sorted, rank as usize);
    }

    let integer_rank = rank.floor();
    let fractional_rank = rank - integer_rank;
    let lower = value_at_rank(&sorted, integer_rank as usize)?;
    let upper = value_at_rank(&sorted, integer_rank as usize + 1)?;

    Ok(round2(interpolate(lower, upper, fractional_rank)))
}
