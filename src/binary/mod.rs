//! Header-less binary form of the ephemeris datasets.
//!
//! # File layout
//!
//! ```text
//! +----------------------------------------------------------------------------+
//! | RECORD 0   jd | body0.f0 .. body0.f5 | body1.f0 .. body1.f5 | ...          |
//! |            (W little-endian IEEE-754 f64, W * 8 bytes)                     |
//! +----------------------------------------------------------------------------+
//! | RECORD 1   (same layout)                                                   |
//! +----------------------------------------------------------------------------+
//! | ...                                                                        |
//! +----------------------------------------------------------------------------+
//! ```
//!
//! There is no magic number, no version and no record count: `N = len / (W * 8)`, and the
//! reader must know `W` from the schema it asks for. Planets files use `W = 55`
//! (440-byte records), moon files `W = 7` (56-byte records).
//!
//! * [`codec`]: in-memory [`codec::encode`] / [`codec::decode`].
//! * [`file`]: file helpers and the offline table → binary conversion.

pub mod codec;
pub mod file;

pub use codec::{decode, decode_expecting, encode, record_size};
pub use file::{convert_table_to_binary, read_binary_file, write_binary_file, ConversionSummary};
