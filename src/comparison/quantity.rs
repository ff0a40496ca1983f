use std::fmt;

use crate::constants::{
    DISTANCE_TOLERANCE, ECLIPTIC_TOLERANCE, HORIZONTAL_TOLERANCE, RADEC_TOLERANCE,
};

/// A quantity reported by a rendering client and by the reference service.
///
/// The declaration order is the report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Quantity {
    RightAscension,
    Declination,
    /// Apparent topocentric RA, reported for the Moon where parallax matters
    TopocentricRightAscension,
    TopocentricDeclination,
    Azimuth,
    Altitude,
    Distance,
    EclipticLongitude,
    EclipticLatitude,
}

impl Quantity {
    pub const ALL: [Quantity; 9] = [
        Quantity::RightAscension,
        Quantity::Declination,
        Quantity::TopocentricRightAscension,
        Quantity::TopocentricDeclination,
        Quantity::Azimuth,
        Quantity::Altitude,
        Quantity::Distance,
        Quantity::EclipticLongitude,
        Quantity::EclipticLatitude,
    ];

    /// Largest accepted absolute difference, in the unit of the quantity.
    pub fn tolerance(self) -> f64 {
        match self {
            Quantity::RightAscension
            | Quantity::Declination
            | Quantity::TopocentricRightAscension
            | Quantity::TopocentricDeclination => RADEC_TOLERANCE,
            Quantity::EclipticLongitude | Quantity::EclipticLatitude => ECLIPTIC_TOLERANCE,
            Quantity::Azimuth | Quantity::Altitude => HORIZONTAL_TOLERANCE,
            Quantity::Distance => DISTANCE_TOLERANCE,
        }
    }

    /// Angles that wrap at 360° and are compared along the shortest arc.
    pub fn is_circular(self) -> bool {
        matches!(
            self,
            Quantity::RightAscension
                | Quantity::TopocentricRightAscension
                | Quantity::EclipticLongitude
                | Quantity::Azimuth
        )
    }

    pub fn unit(self) -> &'static str {
        match self {
            Quantity::Distance => "AU",
            _ => "deg",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Quantity::RightAscension => "RA (geocentric)",
            Quantity::Declination => "Dec (geocentric)",
            Quantity::TopocentricRightAscension => "RA (topocentric)",
            Quantity::TopocentricDeclination => "Dec (topocentric)",
            Quantity::Azimuth => "Azimuth",
            Quantity::Altitude => "Altitude",
            Quantity::Distance => "Distance (AU)",
            Quantity::EclipticLongitude => "Ecliptic Lon",
            Quantity::EclipticLatitude => "Ecliptic Lat",
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod quantity_test {
    use super::*;

    #[test]
    fn test_tolerances() {
        assert_eq!(Quantity::RightAscension.tolerance(), 0.01);
        assert_eq!(Quantity::EclipticLatitude.tolerance(), 0.01);
        assert_eq!(Quantity::TopocentricRightAscension.tolerance(), 0.01);
        assert_eq!(Quantity::TopocentricDeclination.tolerance(), 0.01);
        assert_eq!(Quantity::Altitude.tolerance(), 0.05);
        assert_eq!(Quantity::Distance.tolerance(), 0.0001);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Quantity::TopocentricRightAscension.label(), "RA (topocentric)");
        assert_eq!(Quantity::TopocentricDeclination.to_string(), "Dec (topocentric)");
        assert_eq!(Quantity::TopocentricDeclination.unit(), "deg");
    }

    #[test]
    fn test_circular() {
        let circular: Vec<_> = Quantity::ALL
            .into_iter()
            .filter(|q| q.is_circular())
            .collect();
        assert_eq!(
            circular,
            [
                Quantity::RightAscension,
                Quantity::TopocentricRightAscension,
                Quantity::Azimuth,
                Quantity::EclipticLongitude
            ]
        );
    }
}
