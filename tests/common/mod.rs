#![allow(dead_code)]

use approx::assert_abs_diff_eq;
use orrery_ephem::{
    dataset::{Dataset, SampleRow},
    interpolation::BodyPosition,
    schema::Schema,
};

pub const MERCURY: usize = 1;

/// Planets dataset sampled every `step` days from `start`, with smooth synthetic values.
///
/// Body `b` at row `i`:
/// RA = `(10 b + i) mod 360`, Dec = `b - i / 100`, distances grow linearly,
/// heliocentric longitude = `(30 b + 2 i) mod 360`, latitude = `0.1 b`.
pub fn synthetic_planets(start: f64, step: f64, n_rows: usize) -> Dataset {
    let schema = Schema::planets();
    let rows = (0..n_rows)
        .map(|i| {
            let i_f = i as f64;
            let values: Vec<f64> = (0..schema.body_count())
                .flat_map(|b| {
                    let b_f = b as f64;
                    [
                        (10.0 * b_f + i_f).rem_euclid(360.0),
                        b_f - i_f / 100.0,
                        1.0 + b_f + i_f * 1e-4,
                        0.5 + b_f + i_f * 1e-5,
                        (30.0 * b_f + 2.0 * i_f).rem_euclid(360.0),
                        0.1 * b_f,
                    ]
                })
                .collect();
            SampleRow::new(start + step * i_f, values)
        })
        .collect();
    Dataset::new(schema, rows).unwrap()
}

/// Two-row planets dataset where only Mercury moves: RA 10 → 12, Dec 5 → 5.5.
pub fn mercury_dataset() -> Dataset {
    let schema = Schema::planets();
    let row = |jd: f64, ra: f64, dec: f64| {
        let mut values = vec![0.0; schema.value_width()];
        let offset = schema.body_field_offset(MERCURY).unwrap() - 1;
        values[offset..offset + 6].copy_from_slice(&[ra, dec, 1.2, 0.4, 100.0, 3.0]);
        SampleRow::new(jd, values)
    };
    Dataset::new(
        schema.clone(),
        vec![row(2459000.0, 10.0, 5.0), row(2459001.0, 12.0, 5.5)],
    )
    .unwrap()
}

/// Bit-level equality of two datasets.
pub fn assert_same_bits(actual: &Dataset, expected: &Dataset) {
    assert_eq!(actual.schema(), expected.schema());
    assert_eq!(actual.len(), expected.len());
    for (a, e) in actual.rows().iter().zip(expected.rows()) {
        assert_eq!(a.julian_date.to_bits(), e.julian_date.to_bits());
        assert_eq!(a.values.len(), e.values.len());
        for (va, ve) in a.values.iter().zip(e.values.iter()) {
            assert_eq!(va.to_bits(), ve.to_bits());
        }
    }
}

pub fn assert_position_close(actual: &BodyPosition, expected: &BodyPosition, epsilon: f64) {
    assert_abs_diff_eq!(actual.julian_date, expected.julian_date, epsilon = epsilon);
    for (a, e) in actual.fields().iter().zip(expected.fields()) {
        assert_abs_diff_eq!(*a, e, epsilon = epsilon);
    }
}
