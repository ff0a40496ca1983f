use std::{
    fs::{self, File},
    io::Write,
    sync::Arc,
};

use camino::Utf8Path;
use log::info;

use crate::{
    dataset::Dataset,
    ephem_errors::EphemError,
    schema::Schema,
    tabular::TabularReader,
};

use super::codec::{decode, encode};

/// Result of an offline table → binary conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionSummary {
    /// Number of records written
    pub rows: usize,
    /// Size of the written file in bytes
    pub bytes: usize,
    /// Number of table lines dropped as malformed
    pub skipped: usize,
}

/// Load a binary dataset file.
///
/// Arguments
/// ---------
/// * `path`: file produced by [`write_binary_file`] or [`convert_table_to_binary`]
/// * `schema`: the schema the file was written with
pub fn read_binary_file(
    path: &Utf8Path,
    schema: impl Into<Arc<Schema>>,
) -> Result<Dataset, EphemError> {
    let bytes = fs::read(path)?;
    let dataset = decode(&bytes, schema)?;
    info!(
        "Loaded {} records ({} bytes) of dataset '{}' from {path}",
        dataset.len(),
        bytes.len(),
        dataset.schema().dataset_name()
    );
    Ok(dataset)
}

/// Encode `dataset` and write it to `path`.
///
/// The whole buffer is encoded before the file is created.
///
/// Return
/// ------
/// * The number of bytes written
pub fn write_binary_file(dataset: &Dataset, path: &Utf8Path) -> Result<usize, EphemError> {
    let bytes = encode(dataset);
    let mut file = File::create(path)?;
    file.write_all(&bytes)?;
    file.flush()?;
    Ok(bytes.len())
}

/// Offline conversion of an ephemeris table into its binary form.
///
/// Arguments
/// ---------
/// * `table_path`: comma-separated source table
/// * `binary_path`: destination file, overwritten if present
/// * `schema`: schema shared by both forms
///
/// Return
/// ------
/// * A [`ConversionSummary`], or the load error of the table. Nothing is written when the
///   table cannot be loaded.
pub fn convert_table_to_binary(
    table_path: &Utf8Path,
    binary_path: &Utf8Path,
    schema: impl Into<Arc<Schema>>,
) -> Result<ConversionSummary, EphemError> {
    let (dataset, read_summary) = TabularReader::default().read_file(table_path, schema)?;

    info!("Writing {binary_path}...");
    let bytes = write_binary_file(&dataset, binary_path)?;

    info!(
        "Wrote {} rows to {binary_path}. Size: {:.1} KB",
        dataset.len(),
        bytes as f64 / 1024.0
    );

    Ok(ConversionSummary {
        rows: dataset.len(),
        bytes,
        skipped: read_summary.skipped_lines.len(),
    })
}
