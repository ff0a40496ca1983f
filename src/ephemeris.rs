//! # Ephemeris
//!
//! Entry point for position queries by body name.
//!
//! An [`Ephemeris`] holds one slot per configured dataset (e.g. `"planets"` and `"moon"`).
//! A slot knows its [`Schema`] up front, so a body name can be routed to its dataset
//! without touching the disk; the dataset itself is loaded on first use via
//! [`OnceCell`](once_cell::sync::OnceCell), then reused by every later query.
//!
//! ## Example
//!
//! ```rust, no_run
//! use orrery_ephem::{config::EphemerisConfig, ephemeris::Ephemeris};
//!
//! let ephem = Ephemeris::from_config(EphemerisConfig::default())?;
//! let mercury = ephem.position("Mercury", 2459215.5)?;
//! println!("RA = {:.6}°  Dec = {:.6}°", mercury.right_ascension, mercury.declination);
//! # Ok::<(), orrery_ephem::ephem_errors::EphemError>(())
//! ```
//!
//! ## Errors
//! - [`EphemError::UnknownBody`] / [`EphemError::UnknownDataset`] for names in no schema.
//! - Load errors of the dataset ([`EphemError::IoError`], [`EphemError::EmptySource`], ...)
//!   on the first query touching it. A failed load is retried by the next query.
//! - [`EphemError::OutOfRange`] when the query time is outside the loaded grid.

use std::sync::Arc;

use log::info;
use once_cell::sync::OnceCell;

use crate::{
    config::{DatasetSource, EphemerisConfig},
    constants::JD,
    dataset::Dataset,
    ephem_errors::EphemError,
    interpolation::{interpolate, BodyPosition, TimeIndexedStore},
    schema::Schema,
};

#[derive(Debug)]
struct DatasetSlot {
    schema: Arc<Schema>,
    source: Option<DatasetSource>,
    data: OnceCell<Dataset>,
}

impl DatasetSlot {
    fn name(&self) -> &str {
        self.schema.dataset_name()
    }

    fn get(&self) -> Result<&Dataset, EphemError> {
        self.data.get_or_try_init(|| {
            let source = self.source.as_ref().ok_or_else(|| {
                EphemError::InvalidConfig(format!("dataset '{}' has no source", self.name()))
            })?;
            info!("Loading dataset '{}' from {source}", self.name());
            source.load(Arc::clone(&self.schema))
        })
    }
}

#[derive(Debug)]
pub struct Ephemeris {
    slots: Vec<DatasetSlot>,
}

impl Ephemeris {
    /// Build an ephemeris over the configured datasets. Nothing is read yet.
    pub fn from_config(config: EphemerisConfig) -> Result<Self, EphemError> {
        let slots = config
            .datasets
            .into_iter()
            .map(|dataset| DatasetSlot {
                schema: Arc::new(dataset.schema),
                source: Some(dataset.source),
                data: OnceCell::new(),
            })
            .collect();
        Self::from_slots(slots)
    }

    /// Build an ephemeris over already loaded datasets.
    pub fn from_datasets(datasets: impl IntoIterator<Item = Dataset>) -> Result<Self, EphemError> {
        let slots = datasets
            .into_iter()
            .map(|dataset| DatasetSlot {
                schema: dataset.shared_schema(),
                source: None,
                data: OnceCell::with_value(dataset),
            })
            .collect();
        Self::from_slots(slots)
    }

    fn from_slots(slots: Vec<DatasetSlot>) -> Result<Self, EphemError> {
        if slots.is_empty() {
            return Err(EphemError::InvalidConfig("no dataset configured".into()));
        }
        for (i, slot) in slots.iter().enumerate() {
            if slots[..i].iter().any(|other| other.name() == slot.name()) {
                return Err(EphemError::InvalidConfig(format!(
                    "dataset '{}' configured twice",
                    slot.name()
                )));
            }
            // a body name must route to a single dataset
            if let Some((other, body)) = slots[..i].iter().find_map(|other| {
                slot.schema
                    .bodies()
                    .iter()
                    .find(|body| other.schema.contains_body(&body.name))
                    .map(|body| (other, body))
            }) {
                return Err(EphemError::InvalidConfig(format!(
                    "body '{}' declared by both datasets '{}' and '{}'",
                    body.name,
                    other.name(),
                    slot.name()
                )));
            }
        }
        Ok(Ephemeris { slots })
    }

    /// Dataset names, in configuration order.
    pub fn dataset_names(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().map(DatasetSlot::name)
    }

    /// Schema of the dataset `name`, without loading it.
    pub fn schema(&self, name: &str) -> Result<&Schema, EphemError> {
        Ok(&self.slot(name)?.schema)
    }

    /// The dataset `name`, loaded on first access.
    pub fn dataset(&self, name: &str) -> Result<&Dataset, EphemError> {
        self.slot(name)?.get()
    }

    /// Force the loading of every dataset.
    pub fn load_all(&self) -> Result<(), EphemError> {
        self.slots.iter().try_for_each(|slot| slot.get().map(|_| ()))
    }

    /// First and last Julian date of the dataset `name`.
    pub fn coverage(&self, name: &str) -> Result<(JD, JD), EphemError> {
        let dataset = self.dataset(name)?;
        Ok((dataset.first_jd(), dataset.last_jd()))
    }

    /// Name of the dataset holding `body` (case-insensitive).
    pub fn dataset_of(&self, body: &str) -> Result<&str, EphemError> {
        self.locate(body).map(|(slot, _)| slot.name())
    }

    /// Position of `body` at `jd`.
    ///
    /// Arguments
    /// ---------
    /// * `body`: body name, matched case-insensitively against every schema
    /// * `jd`: query time (Julian Date)
    ///
    /// Return
    /// ------
    /// * The interpolated [`BodyPosition`], or one of the errors listed in the module docs.
    pub fn position(&self, body: &str, jd: JD) -> Result<BodyPosition, EphemError> {
        let (slot, body_index) = self.locate(body)?;
        let store = TimeIndexedStore::new(slot.get()?);
        interpolate(&store, &slot.schema, jd, body_index)
    }

    /// Position of every known body at `jd`, in configuration then schema order.
    ///
    /// Return
    /// ------
    /// * One entry per body; bodies whose dataset does not cover `jd` carry their
    ///   [`EphemError::OutOfRange`].
    /// * An error if a dataset cannot be loaded.
    pub fn positions(
        &self,
        jd: JD,
    ) -> Result<Vec<(String, Result<BodyPosition, EphemError>)>, EphemError> {
        let mut positions = Vec::new();
        for slot in &self.slots {
            let store = TimeIndexedStore::new(slot.get()?);
            for (body_index, body) in slot.schema.bodies().iter().enumerate() {
                positions.push((
                    body.name.clone(),
                    interpolate(&store, &slot.schema, jd, body_index),
                ));
            }
        }
        Ok(positions)
    }

    fn slot(&self, name: &str) -> Result<&DatasetSlot, EphemError> {
        self.slots
            .iter()
            .find(|slot| slot.name() == name)
            .ok_or_else(|| EphemError::UnknownDataset(name.to_string()))
    }

    fn locate(&self, body: &str) -> Result<(&DatasetSlot, usize), EphemError> {
        self.slots
            .iter()
            .find_map(|slot| {
                slot.schema
                    .body_index(body)
                    .ok()
                    .map(|body_index| (slot, body_index))
            })
            .ok_or_else(|| EphemError::UnknownBody(body.to_string()))
    }
}
