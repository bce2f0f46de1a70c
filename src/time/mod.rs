//! Astronomical instant type
//!
//! The classifier is agnostic to civil time: callers are expected to parse,
//! localize and convert timestamps to a uniform astronomical scale before
//! invoking the ephemeris seam. Only the instant itself is modeled here.

use crate::constants::J2000;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An instant expressed as a Julian date in a uniform astronomical time scale.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct JulianDate(pub f64);

impl JulianDate {
    /// The J2000.0 reference epoch.
    pub const J2000: JulianDate = JulianDate(J2000);

    /// Days elapsed since J2000.0 (negative before the epoch).
    pub fn days_since_j2000(&self) -> f64 {
        self.0 - J2000
    }
}

impl fmt::Display for JulianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JD {}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_j2000_offset() {
        assert_eq!(JulianDate::J2000.days_since_j2000(), 0.0);
        let jd = JulianDate(2_451_546.5);
        assert_eq!(jd.days_since_j2000(), 1.5);
    }

    #[test]
    fn test_display() {
        assert_eq!(JulianDate(2451545.0).to_string(), "JD 2451545");
    }
}
