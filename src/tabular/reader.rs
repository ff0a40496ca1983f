use std::{fs::File, io::Read, sync::Arc};

use camino::Utf8Path;
use log::{debug, info, warn};

use crate::{
    dataset::{Dataset, SampleRow},
    ephem_errors::EphemError,
    schema::Schema,
};

/// What to do with a data line that does not parse as `W` floating-point values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowPolicy {
    /// Drop the line and keep loading. Only an empty result is an error.
    #[default]
    SkipMalformed,
    /// Abort the load on the first malformed line.
    Strict,
}

/// Outcome of a tabular load besides the dataset itself.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReadSummary {
    /// Number of rows kept in the dataset
    pub rows: usize,
    /// 1-based line numbers of the dropped lines
    pub skipped_lines: Vec<u64>,
}

/// Reader for the comma-separated ephemeris tables.
///
/// The first line is a header. Its column count is compared with the schema width and a
/// mismatch is only reported in the logs: the header is informational. Every other line must
/// hold exactly `W` numbers, the first one being the Julian date.
#[derive(Debug, Clone, Copy, Default)]
pub struct TabularReader {
    policy: RowPolicy,
}

impl TabularReader {
    pub fn new(policy: RowPolicy) -> Self {
        TabularReader { policy }
    }

    pub fn policy(&self) -> RowPolicy {
        self.policy
    }

    /// Load a dataset from `source`.
    ///
    /// Arguments
    /// ---------
    /// * `source`: any byte stream holding the table
    /// * `schema`: the schema the table was produced with
    ///
    /// Return
    /// ------
    /// * The validated dataset and a [`ReadSummary`] listing dropped lines.
    /// * [`EphemError::EmptySource`] if no line survived,
    ///   [`EphemError::UnsortedInput`] if the kept rows are not strictly ascending,
    ///   [`EphemError::MalformedRow`] under [`RowPolicy::Strict`].
    pub fn read<R: Read>(
        &self,
        source: R,
        schema: impl Into<Arc<Schema>>,
    ) -> Result<(Dataset, ReadSummary), EphemError> {
        let schema = schema.into();
        let width = schema.record_width();

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(source);

        // only the column count of the header matters, its text may not even be UTF-8
        let header_width = reader.byte_headers()?.len();
        if header_width != 0 && header_width != width {
            warn!(
                "Header of dataset '{}' has {header_width} columns, expected {width}",
                schema.dataset_name()
            );
        }

        let mut rows = Vec::new();
        let mut summary = ReadSummary::default();

        for result in reader.records() {
            let record = match result {
                Ok(record) => record,
                Err(err) if err.is_io_error() => return Err(err.into()),
                Err(err) => {
                    let line = err.position().map(|p| p.line()).unwrap_or_default();
                    self.reject(line, err.to_string(), &mut summary)?;
                    continue;
                }
            };
            let line = record.position().map(|p| p.line()).unwrap_or_default();

            match parse_record(&record, width) {
                Ok(values) => {
                    if let Some(row) = SampleRow::from_record(&values) {
                        rows.push(row);
                    }
                }
                Err(reason) => self.reject(line, reason, &mut summary)?,
            }
        }

        if rows.is_empty() {
            return Err(EphemError::EmptySource(format!(
                "no valid row for dataset '{}' ({} malformed lines)",
                schema.dataset_name(),
                summary.skipped_lines.len()
            )));
        }

        if !summary.skipped_lines.is_empty() {
            warn!(
                "Dropped {} malformed lines while reading dataset '{}'",
                summary.skipped_lines.len(),
                schema.dataset_name()
            );
        }

        let dataset = Dataset::new(schema, rows)?;
        summary.rows = dataset.len();
        info!(
            "Read {} rows for dataset '{}'",
            summary.rows,
            dataset.schema().dataset_name()
        );

        Ok((dataset, summary))
    }

    /// Same as [`TabularReader::read`] on the file at `path`.
    pub fn read_file(
        &self,
        path: &Utf8Path,
        schema: impl Into<Arc<Schema>>,
    ) -> Result<(Dataset, ReadSummary), EphemError> {
        info!("Reading {path}...");
        let file = File::open(path)?;
        self.read(file, schema)
    }

    fn reject(
        &self,
        line: u64,
        reason: String,
        summary: &mut ReadSummary,
    ) -> Result<(), EphemError> {
        match self.policy {
            RowPolicy::Strict => Err(EphemError::MalformedRow { line, reason }),
            RowPolicy::SkipMalformed => {
                debug!("Skipping line {line}: {reason}");
                summary.skipped_lines.push(line);
                Ok(())
            }
        }
    }
}

/// Parse one data line into exactly `width` values with a finite leading Julian date.
fn parse_record(record: &csv::StringRecord, width: usize) -> Result<Vec<f64>, String> {
    if record.len() != width {
        return Err(format!("{} columns, expected {width}", record.len()));
    }

    let values = record
        .iter()
        .enumerate()
        .map(|(column, token)| {
            token
                .parse::<f64>()
                .map_err(|_| format!("column {column}: '{token}' is not a number"))
        })
        .collect::<Result<Vec<f64>, String>>()?;

    if !values[0].is_finite() {
        return Err(format!("non-finite Julian date '{}'", values[0]));
    }

    Ok(values)
}

/// Read a table with the tolerant [`RowPolicy::SkipMalformed`] policy.
pub fn read_table<R: Read>(
    source: R,
    schema: impl Into<Arc<Schema>>,
) -> Result<Dataset, EphemError> {
    TabularReader::default()
        .read(source, schema)
        .map(|(dataset, _)| dataset)
}

/// Read a table file with the tolerant [`RowPolicy::SkipMalformed`] policy.
pub fn read_table_file(
    path: &Utf8Path,
    schema: impl Into<Arc<Schema>>,
) -> Result<Dataset, EphemError> {
    TabularReader::default()
        .read_file(path, schema)
        .map(|(dataset, _)| dataset)
}
