//! Dataset schemas.
//!
//! A [`Schema`] describes one dataset (e.g. `"planets"`, `"moon"`): the ordered list of
//! bodies and the fixed set of [`BodyField`]s stored for each one. Every sample row of the
//! dataset has the same layout:
//!
//! ```text
//! +-----+--------------------------------+--------------------------------+-----+
//! | JD  | body 0: RA Dec GD HD HLon HLat | body 1: RA Dec GD HD HLon HLat | ... |
//! +-----+--------------------------------+--------------------------------+-----+
//!   0     1 ..= 6                          7 ..= 12
//! ```
//!
//! so that the record width is `W = 1 + 6 * n_bodies`.
//!
//! Schemas are plain data: they can be deserialized from a configuration file, and two
//! presets reproduce the shipped datasets ([`Schema::planets`], [`Schema::moon`]).

use serde::{Deserialize, Serialize};

use crate::constants::{FIELDS_PER_BODY, TIMESTAMP_COLUMNS};
use crate::ephem_errors::EphemError;

pub mod body;
pub mod field;

pub use body::BodyDescriptor;
pub use field::{BodyField, FieldKind};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SchemaDef")]
pub struct Schema {
    dataset_name: String,
    bodies: Vec<BodyDescriptor>,
}

/// Unvalidated form of a [`Schema`] as read from configuration.
#[derive(Deserialize)]
struct SchemaDef {
    dataset_name: String,
    bodies: Vec<BodyDescriptor>,
}

impl TryFrom<SchemaDef> for Schema {
    type Error = EphemError;

    fn try_from(def: SchemaDef) -> Result<Self, Self::Error> {
        Schema::new(def.dataset_name, def.bodies)
    }
}

impl Schema {
    /// Build a schema, rejecting empty body lists and duplicated body names.
    pub fn new(
        dataset_name: impl Into<String>,
        bodies: Vec<BodyDescriptor>,
    ) -> Result<Self, EphemError> {
        let dataset_name = dataset_name.into();
        if bodies.is_empty() {
            return Err(EphemError::SchemaMismatch(format!(
                "dataset '{dataset_name}' declares no body"
            )));
        }

        for (i, body) in bodies.iter().enumerate() {
            if bodies[..i].iter().any(|other| other.matches(&body.name)) {
                return Err(EphemError::SchemaMismatch(format!(
                    "body '{}' declared twice in dataset '{dataset_name}'",
                    body.name
                )));
            }
        }

        Ok(Schema {
            dataset_name,
            bodies,
        })
    }

    /// Sun, the seven other planets and comet Halley (width 55).
    pub fn planets() -> Self {
        Schema {
            dataset_name: "planets".into(),
            bodies: vec![
                BodyDescriptor::new("Sun", "10"),
                BodyDescriptor::new("Mercury", "199"),
                BodyDescriptor::new("Venus", "299"),
                BodyDescriptor::new("Mars", "499"),
                BodyDescriptor::new("Jupiter", "599"),
                BodyDescriptor::new("Saturn", "699"),
                BodyDescriptor::new("Uranus", "799"),
                BodyDescriptor::new("Neptune", "899"),
                BodyDescriptor::new("Halley", "90000030"),
            ],
        }
    }

    /// The Moon alone (width 7).
    pub fn moon() -> Self {
        Schema {
            dataset_name: "moon".into(),
            bodies: vec![BodyDescriptor::new("Moon", "301")],
        }
    }

    pub fn dataset_name(&self) -> &str {
        &self.dataset_name
    }

    pub fn bodies(&self) -> &[BodyDescriptor] {
        &self.bodies
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn fields_per_body(&self) -> usize {
        FIELDS_PER_BODY
    }

    /// Number of values in a full record, timestamp included.
    pub fn record_width(&self) -> usize {
        TIMESTAMP_COLUMNS + FIELDS_PER_BODY * self.bodies.len()
    }

    /// Number of body values in a record (`W - 1`).
    pub fn value_width(&self) -> usize {
        self.record_width() - TIMESTAMP_COLUMNS
    }

    /// Kind of the per-body field at `field_index` (0 = right ascension, ..., 5 = latitude).
    pub fn field_kind(&self, field_index: usize) -> Result<FieldKind, EphemError> {
        BodyField::from_index(field_index)
            .map(BodyField::kind)
            .ok_or_else(|| {
                EphemError::SchemaMismatch(format!(
                    "field index {field_index} outside 0..{FIELDS_PER_BODY}"
                ))
            })
    }

    /// Column of the first field of `body_index` in a full record (the timestamp is column 0).
    pub fn body_field_offset(&self, body_index: usize) -> Result<usize, EphemError> {
        self.check_body_index(body_index)?;
        Ok(TIMESTAMP_COLUMNS + body_index * FIELDS_PER_BODY)
    }

    pub fn body(&self, body_index: usize) -> Result<&BodyDescriptor, EphemError> {
        self.check_body_index(body_index)?;
        Ok(&self.bodies[body_index])
    }

    /// Case-insensitive lookup of a body by name.
    pub fn body_index(&self, name: &str) -> Result<usize, EphemError> {
        self.bodies
            .iter()
            .position(|body| body.matches(name))
            .ok_or_else(|| EphemError::UnknownBody(name.to_string()))
    }

    pub fn contains_body(&self, name: &str) -> bool {
        self.bodies.iter().any(|body| body.matches(name))
    }

    /// Header of the tabular form: `JD` followed by `<Body>_<Field>` for every column.
    pub fn column_names(&self) -> Vec<String> {
        std::iter::once("JD".to_string())
            .chain(self.bodies.iter().flat_map(|body| {
                BodyField::ALL
                    .iter()
                    .map(move |field| format!("{}_{}", body.name, field.column_suffix()))
            }))
            .collect()
    }

    /// Fail with [`EphemError::SchemaMismatch`] unless the record width equals `expected`.
    pub fn check_width(&self, expected: usize) -> Result<(), EphemError> {
        if self.record_width() != expected {
            return Err(EphemError::SchemaMismatch(format!(
                "schema '{}' has record width {}, expected {expected}",
                self.dataset_name,
                self.record_width()
            )));
        }
        Ok(())
    }

    fn check_body_index(&self, body_index: usize) -> Result<(), EphemError> {
        if body_index >= self.bodies.len() {
            return Err(EphemError::SchemaMismatch(format!(
                "body index {body_index} outside 0..{} for dataset '{}'",
                self.bodies.len(),
                self.dataset_name
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod schema_test {
    use super::*;

    #[test]
    fn test_preset_widths() {
        let planets = Schema::planets();
        assert_eq!(planets.body_count(), 9);
        assert_eq!(planets.record_width(), 55);
        assert_eq!(planets.value_width(), 54);

        let moon = Schema::moon();
        assert_eq!(moon.body_count(), 1);
        assert_eq!(moon.record_width(), 7);
    }

    #[test]
    fn test_body_field_offset() {
        let planets = Schema::planets();
        assert_eq!(planets.body_field_offset(0), Ok(1));
        assert_eq!(planets.body_field_offset(1), Ok(7));
        assert_eq!(planets.body_field_offset(8), Ok(49));
        assert!(matches!(
            planets.body_field_offset(9),
            Err(EphemError::SchemaMismatch(_))
        ));
    }

    #[test]
    fn test_field_kind_bounds() {
        let moon = Schema::moon();
        assert_eq!(moon.field_kind(0), Ok(FieldKind::Circular));
        assert_eq!(moon.field_kind(1), Ok(FieldKind::Linear));
        assert_eq!(moon.field_kind(4), Ok(FieldKind::Circular));
        assert!(matches!(
            moon.field_kind(6),
            Err(EphemError::SchemaMismatch(_))
        ));
    }

    #[test]
    fn test_body_lookup() {
        let planets = Schema::planets();
        assert_eq!(planets.body_index("Mercury"), Ok(1));
        assert_eq!(planets.body_index("halley"), Ok(8));
        assert_eq!(
            planets.body_index("Pluto"),
            Err(EphemError::UnknownBody("Pluto".into()))
        );
        assert_eq!(planets.body(2).unwrap().horizons_id.as_deref(), Some("299"));
    }

    #[test]
    fn test_column_names() {
        let names = Schema::moon().column_names();
        assert_eq!(
            names,
            vec![
                "JD",
                "Moon_RA",
                "Moon_Dec",
                "Moon_GeoDist",
                "Moon_HelioDist",
                "Moon_HelioLon",
                "Moon_HelioLat"
            ]
        );
        assert_eq!(Schema::planets().column_names().len(), 55);
    }

    #[test]
    fn test_invalid_schemas() {
        assert!(matches!(
            Schema::new("empty", vec![]),
            Err(EphemError::SchemaMismatch(_))
        ));
        assert!(matches!(
            Schema::new(
                "twice",
                vec![BodyDescriptor::named("Io"), BodyDescriptor::named("io")]
            ),
            Err(EphemError::SchemaMismatch(_))
        ));
    }

    #[test]
    fn test_check_width() {
        assert!(Schema::planets().check_width(55).is_ok());
        assert!(matches!(
            Schema::moon().check_width(55),
            Err(EphemError::SchemaMismatch(_))
        ));
    }
}
