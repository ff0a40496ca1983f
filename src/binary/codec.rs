use std::sync::Arc;

use nom::{multi::count, number::complete::le_f64, IResult, Parser};

use crate::{
    constants::VALUE_SIZE,
    dataset::{Dataset, SampleRow},
    ephem_errors::EphemError,
    schema::Schema,
};

/// Size in bytes of one encoded record for `schema`.
pub fn record_size(schema: &Schema) -> usize {
    schema.record_width() * VALUE_SIZE
}

/// Encode a dataset as `N` back-to-back records of `W` little-endian doubles.
///
/// The output is fully determined by the dataset: same rows, same bytes.
pub fn encode(dataset: &Dataset) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(dataset.len() * record_size(dataset.schema()));
    for row in dataset.rows() {
        buffer.extend_from_slice(&row.julian_date.to_le_bytes());
        for value in row.values.iter() {
            buffer.extend_from_slice(&value.to_le_bytes());
        }
    }
    buffer
}

/// Parse a single record of `width` doubles.
///
/// Arguments
/// ---------
/// * `input` : bytes starting at a record boundary
/// * `width` : number of doubles per record (`W`)
///
/// Returns
/// -------
/// * A tuple containing the remaining input and the record values
fn parse_record(input: &[u8], width: usize) -> IResult<&[u8], Vec<f64>> {
    count(le_f64, width).parse(input)
}

/// Decode a header-less binary blob with `schema`.
///
/// The blob carries no description of itself: the caller must pass the schema used to
/// encode it. Decoding is all-or-nothing.
///
/// Errors
/// ------
/// * [`EphemError::TruncatedRecord`]: the size is not a multiple of `W * 8`.
/// * [`EphemError::EmptySource`]: no record at all.
/// * [`EphemError::UnsortedInput`] / [`EphemError::InvalidJulianDate`]: the decoded
///   timestamps cannot be indexed.
pub fn decode(bytes: &[u8], schema: impl Into<Arc<Schema>>) -> Result<Dataset, EphemError> {
    let schema = schema.into();
    let record_size = record_size(&schema);

    if bytes.len() % record_size != 0 {
        return Err(EphemError::TruncatedRecord {
            len: bytes.len(),
            record_size,
        });
    }

    let width = schema.record_width();
    let rows = bytes
        .chunks_exact(record_size)
        .enumerate()
        .map(|(i, chunk)| {
            let (_, record) = parse_record(chunk, width).map_err(|_| {
                EphemError::TruncatedRecord {
                    len: bytes.len(),
                    record_size,
                }
            })?;
            SampleRow::from_record(&record).ok_or_else(|| {
                EphemError::SchemaMismatch(format!("record {i} decoded to no value"))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if rows.is_empty() {
        return Err(EphemError::EmptySource(format!(
            "binary blob for dataset '{}' holds no record",
            schema.dataset_name()
        )));
    }

    Dataset::new(schema, rows)
}

/// Decode after checking that `schema` has the record width the caller expects.
///
/// Errors
/// ------
/// * [`EphemError::SchemaMismatch`]: `schema.record_width() != expected_width`.
/// * Every error of [`decode`].
pub fn decode_expecting(
    bytes: &[u8],
    schema: impl Into<Arc<Schema>>,
    expected_width: usize,
) -> Result<Dataset, EphemError> {
    let schema = schema.into();
    schema.check_width(expected_width)?;
    decode(bytes, schema)
}

#[cfg(test)]
mod codec_test {
    use super::*;

    fn moon_dataset() -> Dataset {
        Dataset::new(
            Schema::moon(),
            vec![
                SampleRow::new(2459000.0, vec![359.5, -28.1, 0.0027, 1.01, 250.0, -5.1]),
                SampleRow::new(2459000.5, vec![0.25, -28.3, 0.0026, 1.01, 250.4, -5.0]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_encode_layout() {
        let bytes = encode(&moon_dataset());
        assert_eq!(bytes.len(), 2 * 7 * 8);
        assert_eq!(&bytes[0..8], &2459000.0f64.to_le_bytes());
        assert_eq!(&bytes[8..16], &359.5f64.to_le_bytes());
        assert_eq!(&bytes[56..64], &2459000.5f64.to_le_bytes());
        assert_eq!(&bytes[104..112], &(-5.0f64).to_le_bytes());
    }

    #[test]
    fn test_encode_is_deterministic() {
        assert_eq!(encode(&moon_dataset()), encode(&moon_dataset()));
    }

    #[test]
    fn test_decode_roundtrip() {
        let dataset = moon_dataset();
        let decoded = decode(&encode(&dataset), Schema::moon()).unwrap();
        assert_eq!(decoded, dataset);
    }

    #[test]
    fn test_truncated() {
        let mut bytes = encode(&moon_dataset());
        bytes.pop();
        assert_eq!(
            decode(&bytes, Schema::moon()).unwrap_err(),
            EphemError::TruncatedRecord {
                len: 111,
                record_size: 56
            }
        );
    }

    #[test]
    fn test_wrong_schema_width() {
        let bytes = encode(&moon_dataset());
        assert!(matches!(
            decode_expecting(&bytes, Schema::planets(), 7),
            Err(EphemError::SchemaMismatch(_))
        ));
        assert!(decode_expecting(&bytes, Schema::moon(), 7).is_ok());

        // 112 bytes is not a whole number of 440-byte planet records
        assert!(matches!(
            decode(&bytes, Schema::planets()),
            Err(EphemError::TruncatedRecord { .. })
        ));
    }

    #[test]
    fn test_empty_blob() {
        assert!(matches!(
            decode(&[], Schema::moon()),
            Err(EphemError::EmptySource(_))
        ));
    }

    #[test]
    fn test_unsorted_blob() {
        let dataset = moon_dataset();
        let bytes = encode(&dataset);
        let mut swapped = bytes[56..].to_vec();
        swapped.extend_from_slice(&bytes[..56]);
        assert!(matches!(
            decode(&swapped, Schema::moon()),
            Err(EphemError::UnsortedInput { index: 1, .. })
        ));
    }
}
