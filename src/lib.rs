//! Moonsign: sidereal nakshatra and rashi classification
//!
//! This crate determines which of the 27 nakshatras (lunar mansions) and
//! which of the 12 rashis (sidereal zodiac signs) a celestial body occupies,
//! for use in traditional Hindu calendrical computation. It is a pure,
//! stateless geometric classifier layered on an externally supplied
//! ephemeris: the caller obtains the body's equatorial position, the crate
//! converts it to ecliptic coordinates and classifies the longitude against
//! two equal-width sidereal sector tables offset by an ayanamsa constant.
//!
//! ```rust
//! use moonsign::{Equatorial, Zodiac};
//!
//! let zodiac = Zodiac::new();
//! // Moon position from an external ephemeris, in degrees
//! let moon = Equatorial::new(95.4471, 23.3457);
//! let sectors = zodiac.sectors_for(&moon).unwrap();
//! assert_eq!(sectors.nakshatra.name(), "Ardra");
//! assert_eq!(sectors.rashi.name(), "Mithuna");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod celestial;
pub mod constants;
pub mod coordinates;
pub mod sectors;
pub mod time;

// Re-export commonly used types
pub use celestial::{Body, EphemerisSource, FixedEphemeris};
pub use coordinates::{ecliptic_from_equatorial, Dms, Ecliptic, Equatorial};
pub use sectors::{Nakshatra, Rashi, Sector, SectorTable};
pub use time::JulianDate;

use constants::{DEFAULT_AYANAMSA_DEG, MEAN_OBLIQUITY_DEG};

/// Main error type for the moonsign library
#[derive(Debug, Error)]
pub enum MoonsignError {
    /// An inverse-trigonometric argument left [-1, 1] by more than rounding
    /// noise, so the coordinate is undefined
    #[error("{context}: inverse-trig argument {value} outside [-1, 1]")]
    NumericOutOfRange { context: &'static str, value: f64 },

    /// The sector scan found no owner for a normalized longitude; the table
    /// violates the equal-partition invariant
    #[error("no sector of the {sectors}-fold table owns longitude {longitude_deg} deg")]
    NoSectorOwnsLongitude { longitude_deg: f64, sectors: usize },

    /// A caller-supplied angle was malformed
    #[error("invalid input: {name} = {value}")]
    InvalidInput { name: &'static str, value: f64 },

    /// The external ephemeris collaborator failed
    #[error("ephemeris error: {0}")]
    Ephemeris(String),
}

/// Result type for moonsign operations
pub type Result<T> = std::result::Result<T, MoonsignError>;

/// Sidereal classification of one body position.
///
/// Carries the derived ecliptic coordinates together with both sector
/// labels; it is only ever produced whole, never partially.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SiderealSectors {
    /// Ecliptic position the classification was derived from
    pub ecliptic: Ecliptic,
    /// Owning sector of the 27-fold table
    pub nakshatra: Nakshatra,
    /// Owning sector of the 12-fold table
    pub rashi: Rashi,
}

/// Entry point tying the coordinate converter to the sector tables.
///
/// Both tables are built once at construction and reused for every
/// classification; a `Zodiac` carries no mutable state and is safe to share
/// across threads.
#[derive(Debug, Clone)]
pub struct Zodiac {
    obliquity_deg: f64,
    nakshatra_table: SectorTable<Nakshatra>,
    rashi_table: SectorTable<Rashi>,
}

impl Zodiac {
    /// Create a zodiac with the default ayanamsa (23°46′) and the
    /// conventional mean obliquity.
    pub fn new() -> Self {
        Self::with_ayanamsa(DEFAULT_AYANAMSA_DEG)
    }

    /// Create a zodiac with a custom ayanamsa offset in degrees.
    pub fn with_ayanamsa(ayanamsa_deg: f64) -> Self {
        Zodiac {
            obliquity_deg: MEAN_OBLIQUITY_DEG,
            nakshatra_table: SectorTable::new(Nakshatra::all(), ayanamsa_deg),
            rashi_table: SectorTable::new(Rashi::all(), ayanamsa_deg),
        }
    }

    /// Override the obliquity of the ecliptic in degrees.
    pub fn with_obliquity(mut self, obliquity_deg: f64) -> Self {
        self.obliquity_deg = obliquity_deg;
        self
    }

    /// Obliquity used by the coordinate conversion, in degrees.
    pub fn obliquity_deg(&self) -> f64 {
        self.obliquity_deg
    }

    /// The 27-fold nakshatra table.
    pub fn nakshatra_table(&self) -> &SectorTable<Nakshatra> {
        &self.nakshatra_table
    }

    /// The 12-fold rashi table.
    pub fn rashi_table(&self) -> &SectorTable<Rashi> {
        &self.rashi_table
    }

    /// Classify an ecliptic longitude against both tables.
    pub fn classify_longitude(&self, longitude_deg: f64) -> Result<(Nakshatra, Rashi)> {
        let nakshatra = self.nakshatra_table.classify_label(longitude_deg)?;
        let rashi = self.rashi_table.classify_label(longitude_deg)?;
        Ok((nakshatra, rashi))
    }

    /// Convert an equatorial position to ecliptic coordinates and classify
    /// its longitude against both tables.
    pub fn sectors_for(&self, equatorial: &Equatorial) -> Result<SiderealSectors> {
        let ecliptic = ecliptic_from_equatorial(equatorial, self.obliquity_deg)?;
        let (nakshatra, rashi) = self.classify_longitude(ecliptic.lon_deg)?;
        Ok(SiderealSectors {
            ecliptic,
            nakshatra,
            rashi,
        })
    }

    /// Look a body up in an ephemeris source and classify its position.
    pub fn sectors_at(
        &self,
        source: &impl EphemerisSource,
        body: Body,
        instant: JulianDate,
    ) -> Result<SiderealSectors> {
        let equatorial = source.equatorial_position(body, instant)?;
        self.sectors_for(&equatorial)
    }
}

impl Default for Zodiac {
    fn default() -> Self {
        Self::new()
    }
}
