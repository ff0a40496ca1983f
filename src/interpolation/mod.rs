//! Point-in-time queries over a loaded dataset.
//!
//! - [`time_index`]: [`time_index::TimeIndexedStore`], binary search of the bracketing
//!   samples around a Julian date (O(log n), no extrapolation).
//! - [`interpolator`]: per-body interpolation between the bracketing samples.
//! - [`angles`]: shortest-arc and normalization primitives, also used by
//!   [`crate::comparison`].
//! - [`body_position`]: the returned record.
//!
//! # Typical workflow
//! 1. Load a [`crate::dataset::Dataset`] (tabular or binary).
//! 2. Wrap it in a [`time_index::TimeIndexedStore`] (borrow, no copy).
//! 3. Call [`interpolator::interpolate`] with the body index of the schema.
//!
//! # Circular fields
//!
//! Right ascension and heliocentric longitude wrap at 360°. Interpolating `359°` and `1°`
//! linearly would pass through `180°`; the interpolator instead takes the signed shortest
//! arc `d ∈ (-180, 180]` and returns `normalize(v_low + d * frac)`:
//!
//! ```text
//!        359°   0°   1°
//!   ------|-----|-----|------>
//!         low  mid  high
//! ```

pub mod angles;
pub mod body_position;
pub mod interpolator;
pub mod time_index;

pub use angles::{interpolate_angle, interpolate_linear, normalize_degrees, shortest_arc};
pub use body_position::BodyPosition;
pub use interpolator::{interpolate, interpolate_all, interpolate_field};
pub use time_index::{Bracket, TimeIndexedStore};
