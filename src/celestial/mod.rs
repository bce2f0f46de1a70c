//! Celestial body identifiers and the ephemeris seam
//!
//! Obtaining a body's equatorial position at an instant is an external
//! concern: implement [`EphemerisSource`] over whatever ephemeris service or
//! library the application uses and the classifier consumes it through this
//! trait.

use crate::coordinates::Equatorial;
use crate::time::JulianDate;
use crate::{MoonsignError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// The nine grahas of traditional panchanga computation.
///
/// The classifier itself is body-agnostic; the identifier is only carried
/// through to the ephemeris source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    /// Ascending lunar node
    Rahu,
    /// Descending lunar node
    Ketu,
}

impl Body {
    /// Get the body's name as a string
    pub const fn name(self) -> &'static str {
        match self {
            Body::Sun => "Sun",
            Body::Moon => "Moon",
            Body::Mercury => "Mercury",
            Body::Venus => "Venus",
            Body::Mars => "Mars",
            Body::Jupiter => "Jupiter",
            Body::Saturn => "Saturn",
            Body::Rahu => "Rahu",
            Body::Ketu => "Ketu",
        }
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Supplies equatorial positions for celestial bodies at a given instant.
///
/// The instant is expected to already be in a uniform astronomical time
/// scale; civil-time handling belongs to the caller.
pub trait EphemerisSource {
    /// Equatorial position of `body` at `instant`, in degrees.
    fn equatorial_position(&self, body: Body, instant: JulianDate) -> Result<Equatorial>;
}

/// An ephemeris backed by a fixed set of precomputed positions.
///
/// Useful for tests and for callers that look positions up out-of-process
/// and feed them in.
#[derive(Debug, Clone, Default)]
pub struct FixedEphemeris {
    positions: HashMap<Body, Equatorial>,
}

impl FixedEphemeris {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the position to return for `body`, replacing any previous one.
    pub fn set(&mut self, body: Body, position: Equatorial) -> &mut Self {
        self.positions.insert(body, position);
        self
    }
}

impl EphemerisSource for FixedEphemeris {
    fn equatorial_position(&self, body: Body, _instant: JulianDate) -> Result<Equatorial> {
        self.positions
            .get(&body)
            .copied()
            .ok_or_else(|| MoonsignError::Ephemeris(format!("no position recorded for {body}")))
    }
}
