//! Keyed per-sample records and the sources that open them.
//!
//! A [`SampleRecord`] is one example in a dataset: a container addressed by
//! field name, holding either scalars (a label, a count) or flat numeric
//! arrays with a shape. Extractors only ever read from a record.
//!
//! - [`InMemoryRecord`] — `BTreeMap` backed record
//! - [`RecordCodec`] — on-disk encoding (`bincode` by default, or JSON)
//! - [`DirectorySource`] — opens `<root>/<id>.<ext>` files by identifier

use crate::error::{Result, TensorMapError};
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod codec;
pub mod memory;
pub mod source;

pub use self::codec::{BincodeCodec, JsonCodec, RecordCodec};
pub use self::memory::InMemoryRecord;
pub use self::source::{DirectorySource, RecordSource};

/// A single value stored under a field name.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    /// UTF-8 string scalar (category labels, identifiers).
    Text(String),
    /// Floating point scalar.
    Number(f64),
    /// Integer scalar.
    Integer(i64),
    /// Boolean scalar.
    Bool(bool),
    /// Row-major numeric array. `data.len()` equals the product of `shape`.
    Array { shape: Vec<usize>, data: Vec<f32> },
}

impl FieldValue {
    /// Build an array value from a shape and row-major data.
    pub fn array(shape: impl Into<Vec<usize>>, data: impl Into<Vec<f32>>) -> Self {
        FieldValue::Array {
            shape: shape.into(),
            data: data.into(),
        }
    }

    /// Take the value as numeric `(shape, data)` without copying array data.
    ///
    /// Numeric scalars come back with an empty shape and one element.
    /// `field` is only used for the error message.
    pub fn into_numeric(self, field: &str) -> Result<(Vec<usize>, Vec<f32>)> {
        match self {
            FieldValue::Array { shape, data } => Ok((shape, data)),
            FieldValue::Number(v) => Ok((Vec::new(), vec![v as f32])),
            FieldValue::Integer(v) => Ok((Vec::new(), vec![v as f32])),
            FieldValue::Text(_) | FieldValue::Bool(_) => Err(TensorMapError::NotNumeric {
                field: field.to_string(),
            }),
        }
    }
}

/// Shortest round-trip form of a float as labels are written by upstream
/// tooling: integral values keep `.0` (`1.0`), exponent form with a signed
/// two-digit exponent outside `[1e-4, 1e16)` (`1e+20`, `1.5e-07`).
fn format_float(v: f64) -> String {
    if v.is_nan() {
        return "nan".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let sign = if v.is_sign_negative() { "-" } else { "" };
    // `{:e}` yields the shortest round-trip digits, e.g. `1.2345e2`.
    let sci = format!("{:e}", v.abs());
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    if !(-4..16).contains(&exp) {
        let exp_sign = if exp < 0 { '-' } else { '+' };
        return format!("{sign}{mantissa}e{exp_sign}{:02}", exp.abs());
    }

    if exp < 0 {
        let zeros = "0".repeat((-exp - 1) as usize);
        return format!("{sign}0.{zeros}{digits}");
    }

    let int_len = exp as usize + 1;
    if digits.len() <= int_len {
        let zeros = "0".repeat(int_len - digits.len());
        format!("{sign}{digits}{zeros}.0")
    } else {
        let (int_part, frac_part) = digits.split_at(int_len);
        format!("{sign}{int_part}.{frac_part}")
    }
}

/// String form used for category matching. `Text` is returned as is,
/// floats always carry a fraction or exponent, booleans are `True`/`False`.
impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => write!(f, "{s}"),
            FieldValue::Number(v) => f.write_str(&format_float(*v)),
            FieldValue::Integer(v) => write!(f, "{v}"),
            FieldValue::Bool(true) => f.write_str("True"),
            FieldValue::Bool(false) => f.write_str("False"),
            FieldValue::Array { data, .. } => write!(f, "{data:?}"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::Number(v)
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        FieldValue::Integer(v)
    }
}

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        FieldValue::Bool(v)
    }
}

impl From<Vec<f32>> for FieldValue {
    fn from(data: Vec<f32>) -> Self {
        FieldValue::Array {
            shape: vec![data.len()],
            data,
        }
    }
}

/// Read-only, name-indexed access to one sample's fields.
///
/// Implementations must be `Send + Sync` so independent records can be
/// decoded on several threads.
pub trait SampleRecord: Send + Sync {
    /// Look up a field by name.
    ///
    /// # Errors
    /// Returns [`TensorMapError::FieldNotFound`] if no such field exists.
    fn get(&self, field: &str) -> Result<FieldValue>;

    /// Whether the record contains `field`.
    fn contains(&self, field: &str) -> bool {
        self.get(field).is_ok()
    }

    /// Names of all fields, in a stable order.
    fn fields(&self) -> Vec<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_value_display() {
        assert_eq!(FieldValue::from("SNP").to_string(), "SNP");
        assert_eq!(FieldValue::Integer(3).to_string(), "3");
        assert_eq!(FieldValue::Number(2.0).to_string(), "2.0");
        assert_eq!(FieldValue::Number(0.5).to_string(), "0.5");
        assert_eq!(FieldValue::Bool(true).to_string(), "True");
        assert_eq!(FieldValue::Bool(false).to_string(), "False");
    }

    #[test]
    fn test_format_float_fixed() {
        assert_eq!(format_float(0.0), "0.0");
        assert_eq!(format_float(-0.0), "-0.0");
        assert_eq!(format_float(1.0), "1.0");
        assert_eq!(format_float(-3.25), "-3.25");
        assert_eq!(format_float(123.456), "123.456");
        assert_eq!(format_float(1e15), "1000000000000000.0");
        assert_eq!(format_float(0.0001), "0.0001");
        assert_eq!(format_float(0.00123), "0.00123");
    }

    #[test]
    fn test_format_float_exponent() {
        assert_eq!(format_float(1e16), "1e+16");
        assert_eq!(format_float(1e20), "1e+20");
        assert_eq!(format_float(-2.5e30), "-2.5e+30");
        assert_eq!(format_float(1e-5), "1e-05");
        assert_eq!(format_float(1.5e-7), "1.5e-07");
        assert_eq!(format_float(1e-300), "1e-300");
    }

    #[test]
    fn test_format_float_special() {
        assert_eq!(format_float(f64::NAN), "nan");
        assert_eq!(format_float(f64::INFINITY), "inf");
        assert_eq!(format_float(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn test_field_value_into_numeric() {
        let (shape, data) = FieldValue::array(vec![2, 2], vec![1.0, 2.0, 3.0, 4.0])
            .into_numeric("x")
            .unwrap();
        assert_eq!(shape, vec![2, 2]);
        assert_eq!(data, vec![1.0, 2.0, 3.0, 4.0]);

        let (shape, data) = FieldValue::Integer(7).into_numeric("x").unwrap();
        assert!(shape.is_empty());
        assert_eq!(data, vec![7.0]);
    }

    #[test]
    fn test_field_value_text_not_numeric() {
        let result = FieldValue::from("SNP").into_numeric("variant_label");
        assert!(matches!(
            result,
            Err(TensorMapError::NotNumeric { field }) if field == "variant_label"
        ));
    }

    #[test]
    fn test_field_value_from_vec() {
        let value = FieldValue::from(vec![0.0f32, 1.0, 2.0]);
        assert_eq!(value, FieldValue::array(vec![3], vec![0.0, 1.0, 2.0]));
    }
}
