//! Comma-separated tabular form of the ephemeris datasets.
//!
//! ```text
//! JD,Sun_RA,Sun_Dec,Sun_GeoDist,Sun_HelioDist,Sun_HelioLon,Sun_HelioLat,Mercury_RA,...
//! 2459215.5,281.2837,-23.0348,0.98332,0.0,0.0,0.0,289.9131,...
//! ```
//!
//! * [`reader`]: tolerant loader, see [`reader::RowPolicy`].
//! * [`writer`]: emits the same layout back.

pub mod reader;
pub mod writer;

pub use reader::{read_table, read_table_file, ReadSummary, RowPolicy, TabularReader};
pub use writer::{write_table, write_table_file};
