//! Interpolated record of one body.
//!
//! Units
//! -----------------
//! * angles (`right_ascension`, `declination`, heliocentric longitude/latitude): degrees,
//!   right ascension and longitude in `[0, 360)`
//! * distances: astronomical units

use crate::{
    constants::{AstronomicalUnit, Degree, FIELDS_PER_BODY, JD},
    schema::BodyField,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyPosition {
    pub julian_date: JD,
    pub right_ascension: Degree,
    pub declination: Degree,
    pub geocentric_distance: AstronomicalUnit,
    pub heliocentric_distance: AstronomicalUnit,
    pub heliocentric_longitude: Degree,
    pub heliocentric_latitude: Degree,
}

impl BodyPosition {
    /// Build a position from the 6 fields of a body block, in [`BodyField`] order.
    pub fn from_fields(julian_date: JD, fields: [f64; FIELDS_PER_BODY]) -> Self {
        let [
            right_ascension,
            declination,
            geocentric_distance,
            heliocentric_distance,
            heliocentric_longitude,
            heliocentric_latitude,
        ] = fields;
        BodyPosition {
            julian_date,
            right_ascension,
            declination,
            geocentric_distance,
            heliocentric_distance,
            heliocentric_longitude,
            heliocentric_latitude,
        }
    }

    pub fn fields(&self) -> [f64; FIELDS_PER_BODY] {
        [
            self.right_ascension,
            self.declination,
            self.geocentric_distance,
            self.heliocentric_distance,
            self.heliocentric_longitude,
            self.heliocentric_latitude,
        ]
    }

    pub fn get(&self, field: BodyField) -> f64 {
        self.fields()[field.index()]
    }
}
