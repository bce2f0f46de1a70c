//! Coordinate types for equatorial and ecliptic positions
//!
//! Angles are carried in degrees throughout, matching the ephemeris
//! collaborators this crate is layered on. Longitudes are semantically
//! circular: normalize with [`normalize_degrees`] before any interval
//! comparison.

pub mod ecliptic;

pub use ecliptic::ecliptic_from_equatorial;

use crate::constants::FULL_CIRCLE_DEG;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reduce an angle in degrees into [0, 360).
pub fn normalize_degrees(deg: f64) -> f64 {
    deg.rem_euclid(FULL_CIRCLE_DEG)
}

/// Equatorial coordinates (RA/Dec) of a body, in degrees.
///
/// Right ascension is normalized into [0, 360) on construction. Declination
/// is stored as supplied: nominally [-90, 90], but the ecliptic transform
/// also tolerates the full [0, 360) extended range, so no reduction is
/// applied here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Equatorial {
    /// Right ascension in degrees, [0, 360)
    pub ra_deg: f64,
    /// Declination in degrees
    pub dec_deg: f64,
}

impl Equatorial {
    pub fn new(ra_deg: f64, dec_deg: f64) -> Self {
        Equatorial {
            ra_deg: normalize_degrees(ra_deg),
            dec_deg,
        }
    }
}

impl fmt::Display for Equatorial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RA {:.4} deg, Dec {:.4} deg", self.ra_deg, self.dec_deg)
    }
}

/// Ecliptic coordinates derived from an equatorial position, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ecliptic {
    /// Ecliptic latitude in degrees
    pub lat_deg: f64,
    /// Ecliptic longitude in degrees
    pub lon_deg: f64,
}

impl fmt::Display for Ecliptic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "lat {:.4} deg, lon {:.4} deg", self.lat_deg, self.lon_deg)
    }
}

/// Degrees/arcminutes/arcseconds decomposition of an angle.
///
/// Sector boundaries are traditionally quoted in degree-arcminute form
/// (the default ayanamsa is 23°46′); this type carries that presentation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dms {
    /// Whole degrees
    pub degrees: u16,
    /// Arcminutes (0..59)
    pub minutes: u8,
    /// Arcseconds (0.0..60.0), may include a fractional part
    pub seconds: f64,
}

impl Dms {
    /// Decompose a decimal angle in degrees. Negative input is folded to its
    /// absolute value.
    pub fn from_degrees(deg: f64) -> Self {
        // Split via total arcseconds, rounded at the micro-arcsecond, so that
        // values like 23°46′ do not decompose as 23°45′59.999…″.
        let mut arcsec = (deg.abs() * 3600.0 * 1e6).round() / 1e6;
        let degrees = (arcsec / 3600.0).floor() as u16;
        arcsec -= degrees as f64 * 3600.0;
        let minutes = (arcsec / 60.0).floor() as u8;
        let seconds = arcsec - minutes as f64 * 60.0;
        Dms {
            degrees,
            minutes,
            seconds,
        }
    }

    /// Recompose into decimal degrees.
    pub fn to_degrees(&self) -> f64 {
        self.degrees as f64 + self.minutes as f64 / 60.0 + self.seconds / 3600.0
    }
}

impl fmt::Display for Dms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\u{00b0}{:02}\u{2032}{:02.0}\u{2033}",
            self.degrees, self.minutes, self.seconds
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(725.0), 5.0);
        assert_eq!(normalize_degrees(-10.0), 350.0);
        assert_relative_eq!(normalize_degrees(-0.25), 359.75, epsilon = 1e-12);
    }

    #[test]
    fn test_equatorial_normalizes_ra_only() {
        let eq = Equatorial::new(370.0, 95.0);
        assert_relative_eq!(eq.ra_deg, 10.0, epsilon = 1e-12);
        // Declination is left untouched, including the extended range
        assert_eq!(eq.dec_deg, 95.0);
    }

    #[test]
    fn test_dms_from_degrees() {
        let d = Dms::from_degrees(23.0 + 46.0 / 60.0);
        assert_eq!(d.degrees, 23);
        assert_eq!(d.minutes, 46);
        assert!(d.seconds.abs() < 1e-9);
    }

    #[test]
    fn test_dms_round_trip() {
        let original = 90.43333333333333;
        let d = Dms::from_degrees(original);
        assert_relative_eq!(d.to_degrees(), original, epsilon = 1e-10);
    }

    #[test]
    fn test_dms_display() {
        let d = Dms::from_degrees(23.0 + 46.0 / 60.0);
        assert_eq!(d.to_string(), "23\u{00b0}46\u{2032}00\u{2033}");
    }
}
