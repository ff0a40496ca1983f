use crate::{
    constants::{FIELDS_PER_BODY, JD, TIMESTAMP_COLUMNS},
    ephem_errors::EphemError,
    schema::{BodyField, FieldKind, Schema},
};

use super::{
    angles::{interpolate_angle, interpolate_linear},
    body_position::BodyPosition,
    time_index::TimeIndexedStore,
};

/// Interpolate one field according to its kind.
pub fn interpolate_field(kind: FieldKind, low: f64, high: f64, frac: f64) -> f64 {
    match kind {
        FieldKind::Linear => interpolate_linear(low, high, frac),
        FieldKind::Circular => interpolate_angle(low, high, frac),
    }
}

/// Position of `body_index` at `target_jd`.
///
/// Arguments
/// ---------
/// * `store` : time index over the dataset holding the body
/// * `schema` : schema the caller expects the dataset to follow
/// * `target_jd` : query time (Julian Date)
/// * `body_index` : index of the body in `schema`
///
/// Returns
/// -------
/// * On an exact timestamp, the stored fields verbatim.
/// * Otherwise each field interpolated between the bracketing samples, circular fields along
///   the shortest arc and normalized into `[0, 360)`.
/// * [`EphemError::OutOfRange`] from the store, unchanged.
/// * [`EphemError::SchemaMismatch`] if `schema` does not describe the stored rows or
///   `body_index` is outside of it.
pub fn interpolate(
    store: &TimeIndexedStore<'_>,
    schema: &Schema,
    target_jd: JD,
    body_index: usize,
) -> Result<BodyPosition, EphemError> {
    schema.check_width(store.dataset().schema().record_width())?;
    let value_offset = schema.body_field_offset(body_index)? - TIMESTAMP_COLUMNS;

    let bracket = store.bracket(target_jd)?;
    let rows = store.dataset().rows();
    let low = &rows[bracket.low];

    if bracket.is_exact() {
        let mut fields = [0.0; FIELDS_PER_BODY];
        fields.copy_from_slice(low.body_block(value_offset));
        return Ok(BodyPosition::from_fields(low.julian_date, fields));
    }

    let high = &rows[bracket.high];
    let frac = (target_jd - low.julian_date) / (high.julian_date - low.julian_date);

    let low_block = low.body_block(value_offset);
    let high_block = high.body_block(value_offset);
    let fields = BodyField::ALL.map(|field| {
        let i = field.index();
        interpolate_field(field.kind(), low_block[i], high_block[i], frac)
    });

    Ok(BodyPosition::from_fields(target_jd, fields))
}

/// Positions of every body of the store's dataset at `target_jd`, in schema order.
pub fn interpolate_all(
    store: &TimeIndexedStore<'_>,
    target_jd: JD,
) -> Result<Vec<BodyPosition>, EphemError> {
    let schema = store.dataset().schema();
    (0..schema.body_count())
        .map(|body_index| interpolate(store, schema, target_jd, body_index))
        .collect()
}
