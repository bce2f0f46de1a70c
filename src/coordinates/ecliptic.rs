//! Equatorial to ecliptic conversion
//!
//! Rotation about the vernal-equinox axis by the obliquity angle, carried
//! out as branch-corrected spherical trigonometry rather than a rotation
//! matrix: `asin`/`acos` alone only cover half the circle, so the longitude
//! and latitude quadrants are selected explicitly from the input angles.

use crate::constants::{DEG2RAD, RAD2DEG};
use crate::coordinates::{Ecliptic, Equatorial};
use crate::{MoonsignError, Result};
use std::f64::consts::{FRAC_PI_2, PI};

/// Absolute slack allowed on inverse-trig arguments before the value is
/// treated as a genuine domain violation rather than rounding noise.
const TRIG_DOMAIN_SLACK: f64 = 1e-9;

/// `asin` with an explicit domain check.
///
/// Arguments inside the slack band around [-1, 1] are clamped; anything
/// further out (including NaN from an upstream division by ~zero) is an
/// error, so a non-finite coordinate can never reach the classifier.
pub(crate) fn checked_asin(value: f64, context: &'static str) -> Result<f64> {
    if !(-1.0 - TRIG_DOMAIN_SLACK..=1.0 + TRIG_DOMAIN_SLACK).contains(&value) {
        return Err(MoonsignError::NumericOutOfRange { context, value });
    }
    Ok(value.clamp(-1.0, 1.0).asin())
}

/// `acos` with an explicit domain check; same contract as [`checked_asin`].
pub(crate) fn checked_acos(value: f64, context: &'static str) -> Result<f64> {
    if !(-1.0 - TRIG_DOMAIN_SLACK..=1.0 + TRIG_DOMAIN_SLACK).contains(&value) {
        return Err(MoonsignError::NumericOutOfRange { context, value });
    }
    Ok(value.clamp(-1.0, 1.0).acos())
}

/// Convert an equatorial position to ecliptic coordinates.
///
/// `obliquity_deg` is the inclination of the ecliptic to the celestial
/// equator (conventionally about 23.44 degrees, see
/// [`crate::constants::MEAN_OBLIQUITY_DEG`]).
///
/// Declination is accepted over the full [0, 360) extended range, not just
/// the nominal [-90, 90]: upstream position sources feed it through a branch
/// test against that range, and the transform stays finite there.
///
/// # Errors
///
/// - [`MoonsignError::InvalidInput`] for non-finite angles or an obliquity
///   outside (0, 90) degrees.
/// - [`MoonsignError::NumericOutOfRange`] when an inverse-trig argument
///   leaves [-1, 1] by more than rounding noise, in practice when the
///   position sits at an ecliptic pole and the longitude step divides by
///   `cos(lat) ~ 0`. No partial result is returned.
pub fn ecliptic_from_equatorial(eq: &Equatorial, obliquity_deg: f64) -> Result<Ecliptic> {
    for (name, value) in [
        ("ra_deg", eq.ra_deg),
        ("dec_deg", eq.dec_deg),
        ("obliquity_deg", obliquity_deg),
    ] {
        if !value.is_finite() {
            return Err(MoonsignError::InvalidInput { name, value });
        }
    }
    if obliquity_deg <= 0.0 || obliquity_deg >= 90.0 {
        return Err(MoonsignError::InvalidInput {
            name: "obliquity_deg",
            value: obliquity_deg,
        });
    }

    let ra = eq.ra_deg * DEG2RAD;
    let dec = eq.dec_deg * DEG2RAD;
    let obliquity = obliquity_deg * DEG2RAD;

    let sin_lat = dec.sin() * obliquity.cos() - dec.cos() * obliquity.sin() * ra.sin();
    let lat = checked_asin(sin_lat, "ecliptic latitude")?;

    // acos only resolves longitudes in [0, 180]; for RA in [180, 360) the
    // point lies in the other half of the circle and the reflected argument
    // is used instead.
    let cos_lon = ra.cos() * dec.cos() / lat.cos();
    let lon = if ra < PI {
        checked_acos(cos_lon, "ecliptic longitude")?
    } else {
        PI + checked_acos(-cos_lon, "ecliptic longitude")?
    };

    // Quadrant correction for declinations in [90, 270) degrees. Nominal
    // declinations never land here; the branch covers the extended domain
    // accepted above. Rarely exercised for real lunar positions.
    let lat = if (FRAC_PI_2..3.0 * FRAC_PI_2).contains(&dec) {
        FRAC_PI_2 + checked_acos(sin_lat, "ecliptic latitude")?
    } else {
        lat
    };

    Ok(Ecliptic {
        lat_deg: lat * RAD2DEG,
        lon_deg: lon * RAD2DEG,
    })
}
