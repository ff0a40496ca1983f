use std::{fs::File, io::Write};

use camino::Utf8Path;
use log::info;

use crate::{dataset::Dataset, ephem_errors::EphemError};

/// Write `dataset` as a comma-separated table: the schema header followed by one line
/// per sample.
///
/// Values are printed with the shortest representation that parses back to the same
/// double, so reading the table again gives a bit-identical dataset.
pub fn write_table<W: Write>(dataset: &Dataset, writer: W) -> Result<(), EphemError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(dataset.schema().column_names())?;

    for row in dataset.rows() {
        csv_writer.write_record(
            std::iter::once(row.julian_date)
                .chain(row.values.iter().copied())
                .map(|value| value.to_string()),
        )?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Write `dataset` as a table file at `path`.
pub fn write_table_file(dataset: &Dataset, path: &Utf8Path) -> Result<(), EphemError> {
    let mut buffer = Vec::new();
    write_table(dataset, &mut buffer)?;
    File::create(path)?.write_all(&buffer)?;
    info!(
        "Wrote {} rows of dataset '{}' to {path}",
        dataset.len(),
        dataset.schema().dataset_name()
    );
    Ok(())
}
