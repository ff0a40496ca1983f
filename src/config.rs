//! Runtime configuration: which datasets to load, from where, with which schema.
//!
//! A dataset source is written `"<kind>:<path>"`:
//!
//! | Source            | Meaning                                   |
//! |-------------------|-------------------------------------------|
//! | `csv:<path>`      | comma-separated table, see [`crate::tabular`] |
//! | `bin:<path>`      | binary records, see [`crate::binary`]      |
//!
//! The configuration file is TOML:
//!
//! ```toml
//! [[datasets]]
//! source = "bin:ephemeris_moon.bin"
//!
//! [datasets.schema]
//! dataset_name = "moon"
//! bodies = [{ name = "Moon", horizons_id = "301" }]
//! ```
//!
//! [`EphemerisConfig::default`] points to the two shipped binary files with the preset
//! schemas.

use std::{fmt, fs, str::FromStr, sync::Arc};

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};

use crate::{
    binary::read_binary_file, dataset::Dataset, ephem_errors::EphemError, schema::Schema,
    tabular::read_table_file,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DatasetSource {
    Table(Utf8PathBuf),
    Binary(Utf8PathBuf),
}

impl DatasetSource {
    pub fn path(&self) -> &Utf8Path {
        match self {
            DatasetSource::Table(path) | DatasetSource::Binary(path) => path,
        }
    }

    /// Load the dataset behind this source with `schema`.
    pub fn load(&self, schema: impl Into<Arc<Schema>>) -> Result<Dataset, EphemError> {
        match self {
            DatasetSource::Table(path) => read_table_file(path, schema),
            DatasetSource::Binary(path) => read_binary_file(path, schema),
        }
    }
}

impl FromStr for DatasetSource {
    type Err = EphemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || {
            EphemError::InvalidDatasetSource(format!(
                "'{s}', expected 'csv:<path>' or 'bin:<path>'"
            ))
        };

        let (kind, path) = s.trim().split_once(':').ok_or_else(invalid)?;
        let path = path.trim();
        if path.is_empty() {
            return Err(invalid());
        }

        match kind.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(DatasetSource::Table(path.into())),
            "bin" => Ok(DatasetSource::Binary(path.into())),
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<&str> for DatasetSource {
    type Error = EphemError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for DatasetSource {
    type Error = EphemError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetSource::Table(path) => write!(f, "csv:{path}"),
            DatasetSource::Binary(path) => write!(f, "bin:{path}"),
        }
    }
}

impl From<DatasetSource> for String {
    fn from(source: DatasetSource) -> Self {
        source.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetConfig {
    pub schema: Schema,
    pub source: DatasetSource,
}

impl DatasetConfig {
    pub fn new(schema: Schema, source: DatasetSource) -> Self {
        DatasetConfig { schema, source }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EphemerisConfig {
    pub datasets: Vec<DatasetConfig>,
}

impl Default for EphemerisConfig {
    fn default() -> Self {
        EphemerisConfig {
            datasets: vec![
                DatasetConfig::new(
                    Schema::planets(),
                    DatasetSource::Binary("ephemeris_planets.bin".into()),
                ),
                DatasetConfig::new(
                    Schema::moon(),
                    DatasetSource::Binary("ephemeris_moon.bin".into()),
                ),
            ],
        }
    }
}

impl EphemerisConfig {
    /// Parse a TOML configuration.
    ///
    /// Return
    /// ------
    /// * [`EphemError::InvalidConfig`] on syntax errors, invalid schemas, invalid sources,
    ///   or when two datasets share a name.
    pub fn from_toml_str(input: &str) -> Result<Self, EphemError> {
        let config: EphemerisConfig = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse the TOML configuration at `path`.
    pub fn from_file(path: &Utf8Path) -> Result<Self, EphemError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    fn validate(&self) -> Result<(), EphemError> {
        if self.datasets.is_empty() {
            return Err(EphemError::InvalidConfig("no dataset configured".into()));
        }
        for (i, dataset) in self.datasets.iter().enumerate() {
            let name = dataset.schema.dataset_name();
            if self.datasets[..i]
                .iter()
                .any(|other| other.schema.dataset_name() == name)
            {
                return Err(EphemError::InvalidConfig(format!(
                    "dataset '{name}' configured twice"
                )));
            }
        }
        Ok(())
    }
}
