//! Angle primitives shared by interpolation and report comparison.

use crate::constants::{Degree, FULL_TURN, HALF_TURN};

/// Map any angle into `[0, 360)`.
pub fn normalize_degrees(angle: Degree) -> Degree {
    let wrapped = angle.rem_euclid(FULL_TURN);
    // rem_euclid rounds tiny negative inputs up to exactly 360.0
    if wrapped >= FULL_TURN {
        wrapped - FULL_TURN
    } else {
        wrapped
    }
}

/// Signed shortest rotation from `from` to `to`, in `(-180, 180]`.
///
/// Arguments
/// ---------
/// * `from`, `to`: angles in degrees, not necessarily normalized
///
/// Return
/// ------
/// * `d` such that `from + d ≡ to (mod 360)` with the smallest `|d|`; a half turn is
///   reported as `+180`.
pub fn shortest_arc(from: Degree, to: Degree) -> Degree {
    let delta = (to - from + HALF_TURN).rem_euclid(FULL_TURN) - HALF_TURN;
    if delta <= -HALF_TURN {
        delta + FULL_TURN
    } else {
        delta
    }
}

/// Linear interpolation `low + (high - low) * frac`, exact at both ends.
pub fn interpolate_linear(low: f64, high: f64, frac: f64) -> f64 {
    if frac >= 1.0 {
        high
    } else {
        low + (high - low) * frac
    }
}

/// Interpolate along the shortest arc between `low` and `high`; result in `[0, 360)`.
pub fn interpolate_angle(low: Degree, high: Degree, frac: f64) -> Degree {
    normalize_degrees(low + shortest_arc(low, high) * frac)
}
