//! # orrery-ephem
//!
//! Storage and interpolation of precomputed ephemeris tables.
//!
//! Datasets are tables of equally shaped sample rows (`JD` followed by six fields per body),
//! loaded from a comma-separated table or from a compact binary file, and queried at any
//! Julian date inside the sampled range.
//!
//! * [`schema`]: dataset layouts ([`schema::Schema::planets`], [`schema::Schema::moon`]).
//! * [`tabular`] / [`binary`]: the two storage forms and the offline conversion.
//! * [`interpolation`]: bracketing search and per-field interpolation.
//! * [`ephemeris`]: body-name queries over several datasets.
//! * [`comparison`]: difference report against reference values.

pub mod binary;
pub mod comparison;
pub mod config;
pub mod constants;
pub mod conversion;
pub mod dataset;
pub mod ephem_errors;
pub mod ephemeris;
pub mod interpolation;
pub mod schema;
pub mod tabular;
pub mod time;
