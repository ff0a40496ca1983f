use thiserror::Error;

use crate::constants::JD;

#[derive(Error, Debug)]
pub enum EphemError {
    #[error("Schema mismatch: {0}")]
    SchemaMismatch(String),

    #[error("No valid sample row found in source: {0}")]
    EmptySource(String),

    #[error("Truncated record: {len} bytes is not a multiple of the record size ({record_size} bytes)")]
    TruncatedRecord { len: usize, record_size: usize },

    #[error("Julian date {target} outside of the loaded grid [{first}, {last}]")]
    OutOfRange { target: JD, first: JD, last: JD },

    #[error("Rows are not strictly ascending in Julian date: row {index} has JD {current} after JD {previous}")]
    UnsortedInput {
        index: usize,
        previous: JD,
        current: JD,
    },

    #[error("Non-finite Julian date at row {index}: {value}")]
    InvalidJulianDate { index: usize, value: JD },

    #[error("Malformed row at line {line}: {reason}")]
    MalformedRow { line: u64, reason: String },

    #[error("Unknown body: {0}")]
    UnknownBody(String),

    #[error("Unknown dataset: {0}")]
    UnknownDataset(String),

    #[error("Invalid dataset source: {0}")]
    InvalidDatasetSource(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

impl From<toml::de::Error> for EphemError {
    fn from(err: toml::de::Error) -> Self {
        EphemError::InvalidConfig(err.to_string())
    }
}

impl PartialEq for EphemError {
    fn eq(&self, other: &Self) -> bool {
        use EphemError::*;
        match (self, other) {
            (SchemaMismatch(a), SchemaMismatch(b)) => a == b,
            (EmptySource(a), EmptySource(b)) => a == b,
            (
                TruncatedRecord {
                    len: a,
                    record_size: ra,
                },
                TruncatedRecord {
                    len: b,
                    record_size: rb,
                },
            ) => a == b && ra == rb,
            (
                OutOfRange {
                    target: ta,
                    first: fa,
                    last: la,
                },
                OutOfRange {
                    target: tb,
                    first: fb,
                    last: lb,
                },
            ) => ta.to_bits() == tb.to_bits() && fa == fb && la == lb,
            (
                UnsortedInput {
                    index: ia,
                    previous: pa,
                    current: ca,
                },
                UnsortedInput {
                    index: ib,
                    previous: pb,
                    current: cb,
                },
            ) => ia == ib && pa == pb && ca == cb,
            (
                InvalidJulianDate { index: ia, value: va },
                InvalidJulianDate { index: ib, value: vb },
            ) => ia == ib && va.to_bits() == vb.to_bits(),
            (MalformedRow { line: a, reason: ra }, MalformedRow { line: b, reason: rb }) => {
                a == b && ra == rb
            }
            (UnknownBody(a), UnknownBody(b)) => a == b,
            (UnknownDataset(a), UnknownDataset(b)) => a == b,
            (InvalidDatasetSource(a), InvalidDatasetSource(b)) => a == b,
            (InvalidConfig(a), InvalidConfig(b)) => a == b,
            (InvalidDate(a), InvalidDate(b)) => a == b,

            // foreign errors are not comparable: same variant is enough
            (IoError(_), IoError(_)) => true,
            (CsvError(_), CsvError(_)) => true,

            _ => false,
        }
    }
}

impl EphemError {
    /// `true` for errors a caller is expected to handle at query time
    /// (e.g. by clamping or reporting "no data").
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, EphemError::OutOfRange { .. })
    }
}
