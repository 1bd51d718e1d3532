//! One-decimal fixed-point values.
//!
//! Percentages, CGPA and pass rates are rounded half-up to one decimal. They
//! are computed in integer tenths from the exact ratio so a value such as
//! `x.x5` always rounds the same way regardless of binary float error.

use std::fmt;

use serde::{Serialize, Serializer};

/// A non-negative value with one decimal place, stored as a count of tenths.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tenths(u64);

impl Tenths {
    /// Zero, used as the sentinel for undefined ratios.
    pub const ZERO: Tenths = Tenths(0);

    /// Create from a raw count of tenths (`853` is `85.3`).
    pub const fn from_tenths(tenths: u64) -> Self {
        Tenths(tenths)
    }

    /// `part / whole × 100`, rounded half-up to one decimal.
    ///
    /// Returns `None` when `whole` is zero.
    pub fn percent(part: u64, whole: u64) -> Option<Self> {
        if whole == 0 {
            return None;
        }
        // round(part * 1000 / whole) == floor((2 * part * 1000 + whole) / (2 * whole))
        Some(Tenths((part * 2000 + whole) / (whole * 2)))
    }

    /// `self / 10`, rounded half-up to one decimal.
    pub fn div10(self) -> Self {
        Tenths((self.0 + 5) / 10)
    }

    /// Raw count of tenths.
    pub const fn tenths(self) -> u64 {
        self.0
    }

    /// Nearest `f64` value.
    pub fn as_f64(self) -> f64 {
        self.0 as f64 / 10.0
    }
}

impl fmt::Display for Tenths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.0 / 10, self.0 % 10)
    }
}

impl Serialize for Tenths {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_rounds_half_up() {
        // 512 / 600 = 85.333..
        assert_eq!(Tenths::percent(512, 600), Some(Tenths(853)));
        // 341 / 400 = 85.25 exactly
        assert_eq!(Tenths::percent(341, 400), Some(Tenths(853)));
        // 2 / 3 = 66.666..
        assert_eq!(Tenths::percent(2, 3), Some(Tenths(667)));
        assert_eq!(Tenths::percent(0, 5), Some(Tenths::ZERO));
        assert_eq!(Tenths::percent(5, 5), Some(Tenths(1000)));
    }

    #[test]
    fn test_percent_zero_whole() {
        assert_eq!(Tenths::percent(0, 0), None);
        assert_eq!(Tenths::percent(10, 0), None);
    }

    #[test]
    fn test_div10() {
        assert_eq!(Tenths(853).div10(), Tenths(85));
        assert_eq!(Tenths(855).div10(), Tenths(86));
        assert_eq!(Tenths(854).div10(), Tenths(85));
        assert_eq!(Tenths(1000).div10(), Tenths(100));
        assert_eq!(Tenths::ZERO.div10(), Tenths::ZERO);
    }

    #[test]
    fn test_display_and_json() {
        assert_eq!(Tenths(853).to_string(), "85.3");
        assert_eq!(Tenths(5).to_string(), "0.5");
        assert_eq!(Tenths::ZERO.to_string(), "0.0");
        assert_eq!(serde_json::to_string(&Tenths(853)).unwrap(), "85.3");
        assert_eq!(serde_json::to_string(&Tenths::ZERO).unwrap(), "0.0");
    }
}
