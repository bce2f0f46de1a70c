//! Sidereal sector tables and circular-interval classification
//!
//! The ecliptic circle is divided into N equal-width sectors whose starts
//! are all offset from 0° by a single ayanamsa constant. A table is built
//! once and reused for every classification; classifying a longitude is a
//! scan for the one sector whose half-open arc owns it, with an explicit
//! wraparound rule for the sector that straddles 0°.

pub mod nakshatra;
pub mod rashi;

pub use nakshatra::Nakshatra;
pub use rashi::Rashi;

use crate::constants::{DEFAULT_AYANAMSA_DEG, FULL_CIRCLE_DEG};
use crate::coordinates::{normalize_degrees, Dms};
use crate::{MoonsignError, Result};
use once_cell::sync::Lazy;

static DEFAULT_NAKSHATRA_TABLE: Lazy<SectorTable<Nakshatra>> =
    Lazy::new(|| SectorTable::new(Nakshatra::all(), DEFAULT_AYANAMSA_DEG));

static DEFAULT_RASHI_TABLE: Lazy<SectorTable<Rashi>> =
    Lazy::new(|| SectorTable::new(Rashi::all(), DEFAULT_AYANAMSA_DEG));

/// The 27-fold nakshatra table at the default ayanamsa offset.
pub fn nakshatra_table() -> &'static SectorTable<Nakshatra> {
    &DEFAULT_NAKSHATRA_TABLE
}

/// The 12-fold rashi table at the default ayanamsa offset.
pub fn rashi_table() -> &'static SectorTable<Rashi> {
    &DEFAULT_RASHI_TABLE
}

/// One labeled arc of a sector table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sector<L> {
    /// The label carried by this arc
    pub label: L,
    /// Start of the arc in degrees, normalized into [0, 360)
    pub start_deg: f64,
}

impl<L> Sector<L> {
    /// Start of the arc in degree/arcminute/arcsecond form.
    pub fn start_dms(&self) -> Dms {
        Dms::from_degrees(self.start_deg)
    }
}

/// An ordered sequence of equal-width sectors covering the full circle.
///
/// Sector `i` starts at `ayanamsa + i * (360 / N)`, reduced into [0, 360).
/// The starts partition the circle into N contiguous, non-overlapping arcs;
/// exactly one sector owns any given longitude.
#[derive(Debug, Clone)]
pub struct SectorTable<L> {
    sectors: Vec<Sector<L>>,
    extent_deg: f64,
    ayanamsa_deg: f64,
}

impl<L: Copy> SectorTable<L> {
    /// Build an N-fold table from an ordered label list and an ayanamsa
    /// offset in degrees.
    ///
    /// The default offset used by the bundled tables is
    /// [`DEFAULT_AYANAMSA_DEG`] (23°46′); pass a different value to
    /// substitute another ayanamsa system.
    pub fn new(labels: &[L], ayanamsa_deg: f64) -> Self {
        assert!(!labels.is_empty(), "sector table needs at least one label");
        let extent_deg = FULL_CIRCLE_DEG / labels.len() as f64;
        let sectors = labels
            .iter()
            .enumerate()
            .map(|(i, &label)| Sector {
                label,
                start_deg: normalize_degrees(ayanamsa_deg + i as f64 * extent_deg),
            })
            .collect();
        log::debug!(
            "built {}-fold sidereal table, extent {:.4} deg, offset {:.4} deg",
            labels.len(),
            extent_deg,
            ayanamsa_deg
        );
        SectorTable {
            sectors,
            extent_deg,
            ayanamsa_deg,
        }
    }

    /// Number of sectors in the table.
    pub fn len(&self) -> usize {
        self.sectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sectors.is_empty()
    }

    /// Angular extent of each sector in degrees (360 / N).
    pub fn extent_deg(&self) -> f64 {
        self.extent_deg
    }

    /// The ayanamsa offset this table was built with, in degrees.
    pub fn ayanamsa_deg(&self) -> f64 {
        self.ayanamsa_deg
    }

    /// The sectors in index order.
    pub fn sectors(&self) -> &[Sector<L>] {
        &self.sectors
    }

    /// Find the sector owning a longitude.
    ///
    /// The longitude is reduced into [0, 360) and tested against each
    /// sector's half-open arc `[start, start + extent)`; a sector whose arc
    /// extends past 360° also owns the longitude when `longitude + 360`
    /// falls inside the arc.
    ///
    /// # Errors
    ///
    /// [`MoonsignError::InvalidInput`] for a non-finite longitude, and
    /// [`MoonsignError::NoSectorOwnsLongitude`] if the scan finds no owner;
    /// the latter signals a malformed table, not bad input.
    pub fn classify(&self, longitude_deg: f64) -> Result<Sector<L>> {
        if !longitude_deg.is_finite() {
            return Err(MoonsignError::InvalidInput {
                name: "longitude_deg",
                value: longitude_deg,
            });
        }
        let lon = normalize_degrees(longitude_deg);
        self.sectors
            .iter()
            .find(|s| {
                let end = s.start_deg + self.extent_deg;
                (s.start_deg <= lon && lon < end)
                    || (s.start_deg <= lon + FULL_CIRCLE_DEG && lon + FULL_CIRCLE_DEG < end)
            })
            .copied()
            .ok_or_else(|| {
                log::warn!(
                    "no sector of the {}-fold table owns longitude {lon} deg",
                    self.sectors.len()
                );
                MoonsignError::NoSectorOwnsLongitude {
                    longitude_deg: lon,
                    sectors: self.sectors.len(),
                }
            })
    }

    /// Like [`classify`](Self::classify), returning just the label.
    pub fn classify_label(&self, longitude_deg: f64) -> Result<L> {
        Ok(self.classify(longitude_deg)?.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_table_construction() {
        let table = nakshatra_table();
        assert_eq!(table.len(), 27);
        assert_relative_eq!(table.extent_deg(), 360.0 / 27.0, epsilon = 1e-12);
        assert_relative_eq!(
            table.sectors()[0].start_deg,
            23.0 + 46.0 / 60.0,
            epsilon = 1e-12
        );
        // All starts are reduced into [0, 360)
        for s in table.sectors() {
            assert!((0.0..360.0).contains(&s.start_deg));
        }
    }

    #[test]
    fn test_starts_partition_the_circle() {
        // Sorted starts must be one extent apart, and the wrap from the
        // largest start back to the smallest must close the circle
        for (starts, extent) in [
            (
                nakshatra_table()
                    .sectors()
                    .iter()
                    .map(|s| s.start_deg)
                    .collect::<Vec<_>>(),
                nakshatra_table().extent_deg(),
            ),
            (
                rashi_table()
                    .sectors()
                    .iter()
                    .map(|s| s.start_deg)
                    .collect::<Vec<_>>(),
                rashi_table().extent_deg(),
            ),
        ] {
            let mut sorted = starts.clone();
            sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
            for pair in sorted.windows(2) {
                assert_relative_eq!(pair[1] - pair[0], extent, epsilon = 1e-9);
            }
            let wrap = sorted[0] + 360.0 - sorted[sorted.len() - 1];
            assert_relative_eq!(wrap, extent, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_exactly_one_owner_everywhere() {
        // Uniform sweep: every longitude is owned by exactly one sector in
        // both tables. The grid offset keeps probes clear of the float fuzz
        // allowed right at sector boundaries.
        for i in 0..3600 {
            let lon = i as f64 * 0.1 + 0.037;
            for (owners, n) in [
                (count_owners(nakshatra_table(), lon), 27),
                (count_owners(rashi_table(), lon), 12),
            ] {
                assert_eq!(owners, 1, "longitude {lon} in {n}-fold table");
            }
        }
    }

    fn count_owners<L: Copy>(table: &SectorTable<L>, lon: f64) -> usize {
        let lon = normalize_degrees(lon);
        table
            .sectors()
            .iter()
            .filter(|s| {
                let end = s.start_deg + table.extent_deg();
                (s.start_deg <= lon && lon < end)
                    || (s.start_deg <= lon + 360.0 && lon + 360.0 < end)
            })
            .count()
    }

    #[test]
    fn test_boundary_continuity() {
        // Approaching a sector start from either side yields adjacent
        // sectors by index, modulo N. Probes sit 1e-6 deg off the boundary,
        // outside the fuzz band the partition invariant allows there.
        let table = nakshatra_table();
        let n = table.len();
        for (i, sector) in table.sectors().iter().enumerate() {
            let above = table.classify(sector.start_deg + 1e-6).unwrap();
            assert_eq!(above.label.index(), i, "just above start of sector {i}");
            let below = table.classify(sector.start_deg - 1e-6).unwrap();
            assert_eq!(
                below.label.index(),
                (i + n - 1) % n,
                "just below start of sector {i}"
            );
        }
    }

    #[test]
    fn test_boundary_ownership_is_half_open() {
        // With a zero offset the 12-fold starts are exactly representable,
        // so the boundary itself can be probed: a start belongs to the
        // sector it opens, not the one it closes
        let table = SectorTable::new(Rashi::all(), 0.0);
        assert_eq!(table.classify(30.0).unwrap().label, Rashi::Vrishabha);
        assert_eq!(table.classify(330.0).unwrap().label, Rashi::Meena);
    }

    #[test]
    fn test_wraparound_sector_owns_both_sides_of_zero() {
        // Uttara Bhadrapada starts at 23°46′ + 25·13°20′ = 357°06′ and its
        // arc crosses 0°: it owns longitudes just below 360 and just above 0
        let table = nakshatra_table();
        let straddler = table
            .sectors()
            .iter()
            .find(|s| s.start_deg + table.extent_deg() > 360.0)
            .expect("one sector must straddle 0 deg");
        assert_eq!(straddler.label, Nakshatra::UttaraBhadrapada);

        assert_eq!(
            table.classify(359.5).unwrap().label,
            Nakshatra::UttaraBhadrapada
        );
        assert_eq!(
            table.classify(0.5).unwrap().label,
            Nakshatra::UttaraBhadrapada
        );

        // Same for the rashi table: Meena starts at 353°46′
        assert_eq!(rashi_table().classify(355.0).unwrap().label, Rashi::Meena);
        assert_eq!(rashi_table().classify(0.0).unwrap().label, Rashi::Meena);
        assert_eq!(rashi_table().classify(10.0).unwrap().label, Rashi::Meena);
    }

    #[test]
    fn test_classify_normalizes_longitude() {
        let table = rashi_table();
        let a = table.classify(95.0).unwrap();
        let b = table.classify(95.0 + 360.0).unwrap();
        let c = table.classify(95.0 - 720.0).unwrap();
        assert_eq!(a.label, b.label);
        assert_eq!(a.label, c.label);
    }

    #[test]
    fn test_classify_rejects_non_finite_longitude() {
        let err = nakshatra_table().classify(f64::NAN).unwrap_err();
        assert!(matches!(err, MoonsignError::InvalidInput { .. }));
    }

    #[test]
    fn test_malformed_table_is_a_classification_error() {
        // A gapped table (a construction defect) must surface as
        // NoSectorOwnsLongitude, distinct from any input error
        let mut table = SectorTable::new(Rashi::all(), 0.0);
        table.sectors.remove(3);
        let err = table.classify(95.0).unwrap_err();
        match err {
            MoonsignError::NoSectorOwnsLongitude {
                longitude_deg,
                sectors,
            } => {
                assert_eq!(sectors, 11);
                assert_relative_eq!(longitude_deg, 95.0);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_custom_ayanamsa_shifts_the_table() {
        let table = SectorTable::new(Nakshatra::all(), 0.0);
        assert_eq!(table.classify(0.0).unwrap().label, Nakshatra::Ashwini);
        // With a zero offset, 95 deg falls in sector 7 (95 / 13.333 = 7.12)
        assert_eq!(table.classify(95.0).unwrap().label, Nakshatra::Pushya);
    }

    #[test]
    fn test_sector_start_dms() {
        let dms = nakshatra_table().sectors()[0].start_dms();
        assert_eq!((dms.degrees, dms.minutes), (23, 46));
        // Ardra (index 5) starts at 23°46′ + 5·13°20′ = 90°26′
        let dms = nakshatra_table().sectors()[5].start_dms();
        assert_eq!((dms.degrees, dms.minutes), (90, 26));
    }
}
