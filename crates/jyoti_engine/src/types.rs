//! Position result record.

use serde::{Deserialize, Serialize};

use crate::body::Body;

/// Geocentric position of a body at one instant.
///
/// Plain value record with no back-references; serializable for the
/// durable cache tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyPosition {
    pub body: Body,
    /// Tropical ecliptic longitude, always normalized to [0, 360).
    pub longitude_deg: f64,
    /// Ecliptic latitude in degrees.
    pub latitude_deg: f64,
    /// Geocentric distance in astronomical units.
    pub distance_au: f64,
    /// Rate of change of longitude, degrees per day. Analytic for Sun and
    /// Moon, a mean rate for everything else.
    pub speed_deg_per_day: f64,
    /// Apparent backward motion as seen from Earth.
    pub retrograde: bool,
    /// Equatorial declination in degrees.
    pub declination_deg: f64,
    /// Equatorial right ascension in degrees, [0, 360).
    pub right_ascension_deg: f64,
}
