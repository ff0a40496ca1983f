use serde::{Deserialize, Serialize};

use crate::constants::FIELDS_PER_BODY;

/// How a field behaves between two samples.
///
/// * `Linear`: plain scalar (distances, latitudes), interpolated directly.
/// * `Circular`: angle in degrees wrapping at 360°, interpolated along the shortest arc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldKind {
    Linear,
    Circular,
}

/// The per-body fields of a sample row, in storage order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BodyField {
    /// Geocentric right ascension (deg)
    RightAscension,
    /// Geocentric declination (deg)
    Declination,
    /// Distance from the Earth (AU)
    GeocentricDistance,
    /// Distance from the Sun (AU)
    HeliocentricDistance,
    /// Heliocentric ecliptic longitude (deg)
    HeliocentricLongitude,
    /// Heliocentric ecliptic latitude (deg)
    HeliocentricLatitude,
}

impl BodyField {
    pub const ALL: [BodyField; FIELDS_PER_BODY] = [
        BodyField::RightAscension,
        BodyField::Declination,
        BodyField::GeocentricDistance,
        BodyField::HeliocentricDistance,
        BodyField::HeliocentricLongitude,
        BodyField::HeliocentricLatitude,
    ];

    /// Position of the field inside a body block.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Right ascension and heliocentric longitude wrap at 360°.
    pub fn kind(self) -> FieldKind {
        match self {
            BodyField::RightAscension | BodyField::HeliocentricLongitude => FieldKind::Circular,
            BodyField::Declination
            | BodyField::GeocentricDistance
            | BodyField::HeliocentricDistance
            | BodyField::HeliocentricLatitude => FieldKind::Linear,
        }
    }

    /// Suffix used in the tabular header (`Mercury_RA`, `Mercury_Dec`, ...).
    pub fn column_suffix(self) -> &'static str {
        match self {
            BodyField::RightAscension => "RA",
            BodyField::Declination => "Dec",
            BodyField::GeocentricDistance => "GeoDist",
            BodyField::HeliocentricDistance => "HelioDist",
            BodyField::HeliocentricLongitude => "HelioLon",
            BodyField::HeliocentricLatitude => "HelioLat",
        }
    }
}
