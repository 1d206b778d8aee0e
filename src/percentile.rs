use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{PercentileError, Result};

/// A target percentile held as a fraction in `[0, 1]`.
///
/// Can be built from a fraction (`0.25`) or a percentage (`25`), and parsed
/// from either form (`"0.25"`, `"25%"`).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Percentile(f64);

impl Percentile {
    pub fn from_fraction(fraction: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&fraction) {
            return Err(PercentileError::invalid(format!(
                "percentile must be a fraction between 0 and 1, got {}",
                fraction
            )));
        }
        Ok(Percentile(fraction))
    }

    pub fn from_percentage(percentage: f64) -> Result<Self> {
        if !(0.0..=100.0).contains(&percentage) {
            return Err(PercentileError::invalid(format!(
                "percentage must be between 0 and 100, got {}",
                percentage
            )));
        }
        Ok(Percentile(percentage / 100.0))
    }

    pub fn fraction(self) -> f64 {
        self.0
    }

    pub fn percentage(self) -> f64 {
        self.0 * 100.0
    }
}

impl TryFrom<f64> for Percentile {
    type Error = PercentileError;

    fn try_from(fraction: f64) -> Result<Self> {
        Percentile::from_fraction(fraction)
    }
}

impl FromStr for Percentile {
    type Err = PercentileError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let parse = |text: &str| {
            text.trim()
                .parse::<f64>()
                .map_err(|_| PercentileError::invalid(format!("cannot parse percentile '{}'", s)))
        };

        match s.strip_suffix('%') {
            Some(percentage) => Percentile::from_percentage(parse(percentage)?),
            None => Percentile::from_fraction(parse(s)?),
        }
    }
}

impl fmt::Display for Percentile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // trims float noise such as 7.000000000000001
        write!(f, "{}%", (self.percentage() * 1e9).round() / 1e9)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fraction() {
        assert_eq!(Percentile::from_fraction(0.25).unwrap().fraction(), 0.25);
        assert_eq!(Percentile::from_fraction(0.0).unwrap().fraction(), 0.0);
        assert_eq!(Percentile::from_fraction(1.0).unwrap().fraction(), 1.0);
        assert!(Percentile::from_fraction(1.01).is_err());
        assert!(Percentile::from_fraction(-0.5).is_err());
        assert!(Percentile::from_fraction(f64::NAN).is_err());
    }

    #[test]
    fn test_from_percentage() {
        assert_eq!(Percentile::from_percentage(50.0).unwrap().fraction(), 0.5);
        assert_eq!(Percentile::from_percentage(100.0).unwrap().fraction(), 1.0);
        assert!(Percentile::from_percentage(120.0).is_err());
    }

    #[test]
    fn test_parse() {
        assert_eq!("0.25".parse::<Percentile>().unwrap().fraction(), 0.25);
        assert_eq!("25%".parse::<Percentile>().unwrap().fraction(), 0.25);
        assert_eq!(" 50 % ".parse::<Percentile>().unwrap().fraction(), 0.5);
        assert!("25".parse::<Percentile>().is_err());
        assert!("abc".parse::<Percentile>().is_err());
        assert!("%".parse::<Percentile>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Percentile::from_fraction(0.5).unwrap().to_string(), "50%");
        assert_eq!(Percentile::from_fraction(0.07).unwrap().to_string(), "7%");
        assert_eq!(Percentile::from_fraction(0.255).unwrap().to_string(), "25.5%");
        assert_eq!("85%".parse::<Percentile>().unwrap().to_string(), "85%");
    }
}
