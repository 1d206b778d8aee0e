//! # pctl
//!
//! Interpolated rank-based percentiles.
//!
//! The percentile `p` of a sample of `n` values sits at rank `p * (n + 1)`
//! of the sorted sample. Fractional ranks interpolate linearly between the
//! two closest ranks and are rounded to two decimals.
//!
//! ## Modules
//!
//! - [`stats`] — the calculator and rank resolution
//! - [`percentile`] — validated percentile values (fraction or percentage)
//! - [`fixtures`] — known-answer fixtures and the self-test harness
//! - [`utils`] — sample summaries and console reporting

pub mod error;
pub mod fixtures;
pub mod percentile;
pub mod stats;
pub mod utils;

pub use error::PercentileError;
pub use percentile::Percentile;
pub use stats::{calculate_percentile, calculate_percentile_at, value_at_rank};
