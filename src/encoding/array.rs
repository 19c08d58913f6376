//! Passthrough reads of numeric array fields.

use crate::error::{Result, TensorMapError};
use crate::record::SampleRecord;
use crate::tensor_map::{Dependents, TensorMap};
use ndarray::{ArrayD, IxDyn};

/// Read `field` from `record` as an `f32` array with the given shape.
///
/// The stored data is reinterpreted in row-major order, so any stored shape
/// with the same element count is accepted. A numeric scalar reads as shape
/// `[]` or `[1]`.
///
/// # Errors
/// - [`TensorMapError::FieldNotFound`] from the record if the field is absent
/// - [`TensorMapError::NotNumeric`] for text or boolean fields
/// - [`TensorMapError::ShapeMismatch`] if the element counts differ
pub fn read_array(record: &dyn SampleRecord, field: &str, shape: &[usize]) -> Result<ArrayD<f32>> {
    let (stored_shape, data) = record.get(field)?.into_numeric(field)?;

    let expected: usize = shape.iter().product();
    if data.len() != expected {
        return Err(TensorMapError::ShapeMismatch {
            name: field.to_string(),
            expected: shape.to_vec(),
            got: stored_shape,
        });
    }

    ArrayD::from_shape_vec(IxDyn(shape), data).map_err(|_| TensorMapError::ShapeMismatch {
        name: field.to_string(),
        expected: shape.to_vec(),
        got: stored_shape.clone(),
    })
}

/// Extractor for continuous tensor maps: reads the source field at the
/// tensor map's declared shape.
pub fn passthrough_array(
    tm: &TensorMap,
    record: &dyn SampleRecord,
    _dependents: &Dependents,
) -> Result<ArrayD<f32>> {
    read_array(record, tm.source_field(), tm.shape())
}
