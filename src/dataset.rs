//! Immutable, validated time series of sample rows.
//!
//! A [`Dataset`] is only ever built through [`Dataset::new`], which checks that:
//! * there is at least one row,
//! * every row carries exactly `W - 1` values for its [`Schema`],
//! * every Julian date is finite,
//! * Julian dates are strictly ascending (no duplicates).
//!
//! Loaders (tabular reader, binary codec) collect rows first and hand them to
//! [`Dataset::new`], so a failed load never leaves a partially built dataset behind.

use std::sync::Arc;

use itertools::Itertools;

use crate::{
    constants::JD,
    ephem_errors::EphemError,
    schema::{BodyField, Schema},
};

/// One time sample: a Julian date and the values of every body, in schema order.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleRow {
    pub julian_date: JD,
    pub values: Box<[f64]>,
}

impl SampleRow {
    pub fn new(julian_date: JD, values: impl Into<Box<[f64]>>) -> Self {
        SampleRow {
            julian_date,
            values: values.into(),
        }
    }

    /// Build a row from a full record `[jd, v0, v1, ...]`.
    ///
    /// Return
    /// ----------
    /// * `None` if `record` is empty.
    pub fn from_record(record: &[f64]) -> Option<Self> {
        let (julian_date, values) = record.split_first()?;
        Some(SampleRow::new(*julian_date, values))
    }

    /// Values of one body block (6 fields), starting at `value_offset` in `values`.
    pub(crate) fn body_block(&self, value_offset: usize) -> &[f64] {
        &self.values[value_offset..value_offset + BodyField::ALL.len()]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    schema: Arc<Schema>,
    rows: Vec<SampleRow>,
}

impl Dataset {
    /// Validate `rows` against `schema` and build the dataset.
    ///
    /// Errors
    /// ----------
    /// * [`EphemError::EmptySource`]: no row.
    /// * [`EphemError::SchemaMismatch`]: a row does not carry `W - 1` values.
    /// * [`EphemError::InvalidJulianDate`]: NaN or infinite timestamp.
    /// * [`EphemError::UnsortedInput`]: timestamps not strictly ascending.
    pub fn new(schema: impl Into<Arc<Schema>>, rows: Vec<SampleRow>) -> Result<Self, EphemError> {
        let schema = schema.into();

        if rows.is_empty() {
            return Err(EphemError::EmptySource(format!(
                "dataset '{}' has no row",
                schema.dataset_name()
            )));
        }

        let value_width = schema.value_width();
        if let Some((index, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.values.len() != value_width)
        {
            return Err(EphemError::SchemaMismatch(format!(
                "row {index} has {} values, schema '{}' expects {value_width}",
                row.values.len(),
                schema.dataset_name()
            )));
        }

        if let Some((index, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| !row.julian_date.is_finite())
        {
            return Err(EphemError::InvalidJulianDate {
                index,
                value: row.julian_date,
            });
        }

        if let Some((index, (previous, current))) = rows
            .iter()
            .map(|row| row.julian_date)
            .tuple_windows()
            .enumerate()
            .find(|(_, (previous, current))| current <= previous)
        {
            return Err(EphemError::UnsortedInput {
                index: index + 1,
                previous,
                current,
            });
        }

        Ok(Dataset { schema, rows })
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub(crate) fn shared_schema(&self) -> Arc<Schema> {
        Arc::clone(&self.schema)
    }

    pub fn rows(&self) -> &[SampleRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always `false`: a dataset holds at least one row.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn first_jd(&self) -> JD {
        self.rows[0].julian_date
    }

    pub fn last_jd(&self) -> JD {
        self.rows[self.rows.len() - 1].julian_date
    }

    /// Full record `[jd, values...]` of row `index`, as written by the codecs.
    pub fn record(&self, index: usize) -> Option<impl Iterator<Item = f64> + '_> {
        self.rows.get(index).map(|row| {
            std::iter::once(row.julian_date).chain(row.values.iter().copied())
        })
    }
}

#[cfg(test)]
mod dataset_test {
    use super::*;

    fn moon_row(jd: f64) -> SampleRow {
        SampleRow::new(jd, vec![10.0, -5.0, 0.0025, 0.98, 100.0, 0.5])
    }

    #[test]
    fn test_valid_dataset() {
        let dataset = Dataset::new(
            Schema::moon(),
            vec![moon_row(2459000.0), moon_row(2459000.25), moon_row(2459001.0)],
        )
        .unwrap();

        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.first_jd(), 2459000.0);
        assert_eq!(dataset.last_jd(), 2459001.0);
        assert_eq!(
            dataset.record(1).unwrap().collect::<Vec<_>>(),
            vec![2459000.25, 10.0, -5.0, 0.0025, 0.98, 100.0, 0.5]
        );
        assert!(dataset.record(3).is_none());
    }

    #[test]
    fn test_empty_dataset() {
        assert!(matches!(
            Dataset::new(Schema::moon(), vec![]),
            Err(EphemError::EmptySource(_))
        ));
    }

    #[test]
    fn test_wrong_width() {
        let rows = vec![moon_row(1.0), SampleRow::new(2.0, vec![1.0, 2.0])];
        assert!(matches!(
            Dataset::new(Schema::moon(), rows),
            Err(EphemError::SchemaMismatch(_))
        ));
    }

    #[test]
    fn test_unsorted_and_duplicates() {
        let rows = vec![moon_row(1.0), moon_row(3.0), moon_row(2.0)];
        assert_eq!(
            Dataset::new(Schema::moon(), rows).unwrap_err(),
            EphemError::UnsortedInput {
                index: 2,
                previous: 3.0,
                current: 2.0
            }
        );

        let rows = vec![moon_row(1.0), moon_row(1.0)];
        assert_eq!(
            Dataset::new(Schema::moon(), rows).unwrap_err(),
            EphemError::UnsortedInput {
                index: 1,
                previous: 1.0,
                current: 1.0
            }
        );
    }

    #[test]
    fn test_non_finite_jd() {
        let rows = vec![moon_row(f64::NAN)];
        assert!(matches!(
            Dataset::new(Schema::moon(), rows),
            Err(EphemError::InvalidJulianDate { index: 0, .. })
        ));
    }

    #[test]
    fn test_from_record() {
        let row = SampleRow::from_record(&[1.5, 2.0, 3.0]).unwrap();
        assert_eq!(row.julian_date, 1.5);
        assert_eq!(&*row.values, &[2.0, 3.0]);
        assert!(SampleRow::from_record(&[]).is_none());
    }
}
