//! # Constants and type definitions
//!
//! Shared unit aliases, record layout constants and comparison tolerances used by the
//! storage, interpolation and comparison modules.

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Distance in astronomical units
pub type AstronomicalUnit = f64;
/// Julian Date (days)
pub type JD = f64;
/// Modified Julian Date (days)
pub type MJD = f64;

// -------------------------------------------------------------------------------------------------
// Time and angle constants
// -------------------------------------------------------------------------------------------------

/// Conversion factor between Julian Date and Modified Julian Date
pub const JDTOMJD: f64 = 2400000.5;

/// Full turn in degrees
pub const FULL_TURN: Degree = 360.0;

/// Half turn in degrees
pub const HALF_TURN: Degree = 180.0;

// -------------------------------------------------------------------------------------------------
// Record layout
// -------------------------------------------------------------------------------------------------

/// Number of scalar fields stored for every body in a sample row
pub const FIELDS_PER_BODY: usize = 6;

/// Number of leading timestamp columns in a sample row
pub const TIMESTAMP_COLUMNS: usize = 1;

/// Size in bytes of one encoded value (IEEE-754 double)
pub const VALUE_SIZE: usize = std::mem::size_of::<f64>();

// -------------------------------------------------------------------------------------------------
// Comparison tolerances
// -------------------------------------------------------------------------------------------------

/// Tolerance for right ascension / declination (36 arcsec)
pub const RADEC_TOLERANCE: Degree = 0.01;

/// Tolerance for ecliptic longitude / latitude
pub const ECLIPTIC_TOLERANCE: Degree = 0.01;

/// Tolerance for azimuth / altitude
pub const HORIZONTAL_TOLERANCE: Degree = 0.05;

/// Tolerance for distances
pub const DISTANCE_TOLERANCE: AstronomicalUnit = 0.0001;
