//! Comparison of client-rendered positions against reference values.
//!
//! A rendering client dumps, per body, the quantities it displays (RA/Dec, azimuth/altitude,
//! distance, ecliptic coordinates); a reference service (e.g. JPL Horizons) is queried for
//! the same instant. Fetching and parsing both sides happens outside this crate: it only
//! receives the two value maps and reports the differences against fixed tolerances.
//!
//! Circular quantities are compared along the shortest arc, so `359.995°` against `0.004°`
//! is a `+0.009°` difference and not `-359.991°`.
//!
//! ```text
//! --- Mercury ---
//!   RA (geocentric)            Ours:     262.138040  Reference:     262.137951  diff:    +0.0001 deg
//!   Distance (AU)              Ours:       0.923340  Reference:       0.923115  diff:    +0.0002 AU ***
//! ```

use std::{
    collections::BTreeMap,
    fmt::{self, Write},
};

use crate::interpolation::{shortest_arc, BodyPosition};

pub mod quantity;

pub use quantity::Quantity;

/// Quantities of one body.
pub type QuantityValues = BTreeMap<Quantity, f64>;

/// Quantities of every body, by body name.
pub type BodyValues = BTreeMap<String, QuantityValues>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantityComparison {
    pub ours: f64,
    pub reference: f64,
    /// `ours - reference`, along the shortest arc for circular quantities
    pub diff: f64,
    pub tolerance: f64,
    pub exceeds: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    Compared(QuantityComparison),
    /// The quantity is only known on one side.
    Missing {
        ours: Option<f64>,
        reference: Option<f64>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct BodyComparison {
    pub body: String,
    pub quantity: Quantity,
    pub outcome: Outcome,
}

impl BodyComparison {
    pub fn exceeds(&self) -> bool {
        matches!(self.outcome, Outcome::Compared(QuantityComparison { exceeds: true, .. }))
    }
}

/// Compare one value against its reference.
pub fn compare_value(quantity: Quantity, ours: f64, reference: f64) -> QuantityComparison {
    let diff = if quantity.is_circular() {
        shortest_arc(reference, ours)
    } else {
        ours - reference
    };
    let tolerance = quantity.tolerance();
    QuantityComparison {
        ours,
        reference,
        diff,
        tolerance,
        exceeds: diff.abs() > tolerance,
    }
}

/// Compare every quantity of every body of `ours` against `reference`.
///
/// Arguments
/// ---------
/// * `ours`: values produced by the client, by body name
/// * `reference`: reference values, by body name
///
/// Return
/// ------
/// * One entry per body of `ours` and per quantity known on either side for that body,
///   ordered by body name then [`Quantity`] order. Bodies only present in `reference` are
///   ignored.
pub fn compare_bodies(ours: &BodyValues, reference: &BodyValues) -> Vec<BodyComparison> {
    let empty = QuantityValues::new();
    let mut comparisons = Vec::new();

    for (body, our_values) in ours {
        let reference_values = reference.get(body).unwrap_or(&empty);
        for quantity in Quantity::ALL {
            let outcome = match (our_values.get(&quantity), reference_values.get(&quantity)) {
                (Some(&o), Some(&r)) => Outcome::Compared(compare_value(quantity, o, r)),
                (None, None) => continue,
                (o, r) => Outcome::Missing {
                    ours: o.copied(),
                    reference: r.copied(),
                },
            };
            comparisons.push(BodyComparison {
                body: body.clone(),
                quantity,
                outcome,
            });
        }
    }
    comparisons
}

/// Quantities an interpolated record can answer for: RA, Dec and geocentric distance.
pub fn position_values(position: &BodyPosition) -> QuantityValues {
    QuantityValues::from([
        (Quantity::RightAscension, position.right_ascension),
        (Quantity::Declination, position.declination),
        (Quantity::Distance, position.geocentric_distance),
    ])
}

/// Text report of `comparisons`, one `--- body ---` block per body.
pub fn report(comparisons: &[BodyComparison]) -> String {
    let mut out = String::new();
    let mut current: Option<&str> = None;
    for comparison in comparisons {
        if current != Some(comparison.body.as_str()) {
            if current.is_some() {
                out.push('\n');
            }
            // writing into a String cannot fail
            let _ = writeln!(out, "--- {} ---", comparison.body);
            current = Some(comparison.body.as_str());
        }
        let _ = writeln!(out, "{comparison}");
    }
    out
}

fn fmt_value(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:>14.6}"),
        None => format!("{:>14}", "N/A"),
    }
}

impl fmt::Display for BodyComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = self.quantity.label();
        let unit = self.quantity.unit();
        match self.outcome {
            Outcome::Compared(c) => {
                let flag = if c.exceeds { " ***" } else { "" };
                write!(
                    f,
                    "  {label:25}  Ours: {}  Reference: {}  diff: {:>+10.4} {unit}{flag}",
                    fmt_value(Some(c.ours)),
                    fmt_value(Some(c.reference)),
                    c.diff
                )
            }
            Outcome::Missing { ours, reference } => write!(
                f,
                "  {label:25}  Ours: {}  Reference: {} {unit}",
                fmt_value(ours),
                fmt_value(reference)
            ),
        }
    }
}
