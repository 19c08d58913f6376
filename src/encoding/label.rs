//! One-hot encoding of categorical labels.
//!
//! A label is read from a record as a scalar, turned into its string form, and
//! matched against the channel map of the owning tensor map. The result must
//! contain exactly one hot channel; anything else is a
//! [`TensorMapError::LabelValidation`] and is never replaced by a default.

use crate::channel_map::ChannelMap;
use crate::error::{Result, TensorMapError};
use crate::record::SampleRecord;
use crate::tensor_map::{Dependents, TensorMap};
use ndarray::{Array1, ArrayD};
use tracing::warn;

/// Encode `value` as a one-hot vector over `channel_map`.
///
/// `name` identifies the encoding in the error if validation fails.
///
/// # Example
/// ```
/// use tensormap::{encode_one_hot, ChannelMap};
///
/// let map = ChannelMap::new([("NOT_SNP", 0), ("NOT_INDEL", 1), ("SNP", 2), ("INDEL", 3)]).unwrap();
/// let one_hot = encode_one_hot("variant_label", &map, "SNP").unwrap();
/// assert_eq!(one_hot.to_vec(), vec![0.0, 0.0, 1.0, 0.0]);
/// ```
///
/// # Errors
/// Returns [`TensorMapError::LabelValidation`] unless exactly one channel matched.
pub fn encode_one_hot(name: &str, channel_map: &ChannelMap, value: &str) -> Result<Array1<f32>> {
    let mut one_hot = Array1::<f32>::zeros(channel_map.len());
    for (channel, index) in channel_map.iter() {
        if channel == value {
            one_hot[index] = 1.0;
        }
    }

    if one_hot.sum() != 1.0 {
        warn!(tensor_map = name, value, "missing or invalid label");
        return Err(TensorMapError::LabelValidation {
            name: name.to_string(),
            value: value.to_string(),
        });
    }
    Ok(one_hot)
}

/// Extractor for categorical tensor maps.
///
/// Reads the tensor map's source field, coerces it to a string and encodes it
/// against the tensor map's channel map. `dependents` is not consulted.
pub fn one_hot_label(
    tm: &TensorMap,
    record: &dyn SampleRecord,
    _dependents: &Dependents,
) -> Result<ArrayD<f32>> {
    let channel_map = tm.channel_map().ok_or_else(|| {
        TensorMapError::InvalidTensorMap(format!("{} has no channel map", tm.name()))
    })?;
    let value = record.get(tm.source_field())?.to_string();
    Ok(encode_one_hot(tm.name(), channel_map, &value)?.into_dyn())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::InMemoryRecord;

    fn variant_channels() -> ChannelMap {
        ChannelMap::new([("NOT_SNP", 0), ("NOT_INDEL", 1), ("SNP", 2), ("INDEL", 3)]).unwrap()
    }

    #[test]
    fn test_encode_one_hot_known_value() {
        let one_hot = encode_one_hot("variant_label", &variant_channels(), "SNP").unwrap();
        assert_eq!(one_hot.to_vec(), vec![0.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_encode_one_hot_every_channel() {
        let map = variant_channels();
        for (name, index) in map.iter() {
            let one_hot = encode_one_hot("variant_label", &map, name).unwrap();
            assert_eq!(one_hot.len(), map.len());
            for (i, &v) in one_hot.iter().enumerate() {
                let expected = if i == index { 1.0 } else { 0.0 };
                assert_eq!(v, expected, "channel {name} slot {i}");
            }
        }
    }

    #[test]
    fn test_encode_one_hot_unknown_value() {
        let result = encode_one_hot("variant_label", &variant_channels(), "UNKNOWN");
        match result {
            Err(TensorMapError::LabelValidation { name, value }) => {
                assert_eq!(name, "variant_label");
                assert_eq!(value, "UNKNOWN");
            }
            other => panic!("expected LabelValidation, got {other:?}"),
        }
    }

    #[test]
    fn test_encode_one_hot_empty_value() {
        let result = encode_one_hot("variant_label", &variant_channels(), "");
        assert!(matches!(result, Err(TensorMapError::LabelValidation { .. })));
    }

    #[test]
    fn test_encode_one_hot_is_case_sensitive() {
        let result = encode_one_hot("variant_label", &variant_channels(), "snp");
        assert!(matches!(result, Err(TensorMapError::LabelValidation { .. })));
    }

    #[test]
    fn test_encode_one_hot_repeatable() {
        let map = variant_channels();
        let first = encode_one_hot("variant_label", &map, "INDEL").unwrap();
        for _ in 0..10 {
            assert_eq!(encode_one_hot("variant_label", &map, "INDEL").unwrap(), first);
        }
    }

    #[test]
    fn test_one_hot_label_integer_field() {
        let map = ChannelMap::new([("0", 0), ("1", 1)]).unwrap();
        let tm = TensorMap::new("genotype", vec![2], one_hot_label).with_channel_map(map);
        let record = InMemoryRecord::new().with_field("genotype", 1i64);

        let one_hot = one_hot_label(&tm, &record, &Dependents::empty()).unwrap();
        assert_eq!(one_hot.shape(), &[2]);
        assert_eq!(one_hot.iter().copied().collect::<Vec<_>>(), vec![0.0, 1.0]);
    }

    #[test]
    fn test_one_hot_label_float_field() {
        let map = ChannelMap::new([("0.0", 0), ("1.0", 1), ("1e+20", 2)]).unwrap();
        let tm = TensorMap::new("ploidy", vec![3], one_hot_label).with_channel_map(map);

        let record = InMemoryRecord::new().with_field("ploidy", 1.0f64);
        let one_hot = one_hot_label(&tm, &record, &Dependents::empty()).unwrap();
        assert_eq!(one_hot.iter().copied().collect::<Vec<_>>(), vec![0.0, 1.0, 0.0]);

        let record = InMemoryRecord::new().with_field("ploidy", 1e20f64);
        let one_hot = one_hot_label(&tm, &record, &Dependents::empty()).unwrap();
        assert_eq!(one_hot.iter().copied().collect::<Vec<_>>(), vec![0.0, 0.0, 1.0]);

        // "1" is not a channel of this map: floats keep their fraction.
        let map = ChannelMap::new([("0", 0), ("1", 1)]).unwrap();
        let tm = TensorMap::new("ploidy", vec![2], one_hot_label).with_channel_map(map);
        let record = InMemoryRecord::new().with_field("ploidy", 1.0f64);
        let result = one_hot_label(&tm, &record, &Dependents::empty());
        assert!(matches!(
            result,
            Err(TensorMapError::LabelValidation { value, .. }) if value == "1.0"
        ));
    }

    #[test]
    fn test_one_hot_label_bool_field() {
        let map = ChannelMap::new([("False", 0), ("True", 1)]).unwrap();
        let tm = TensorMap::new("filtered", vec![2], one_hot_label).with_channel_map(map);

        let record = InMemoryRecord::new().with_field("filtered", true);
        let one_hot = one_hot_label(&tm, &record, &Dependents::empty()).unwrap();
        assert_eq!(one_hot.iter().copied().collect::<Vec<_>>(), vec![0.0, 1.0]);

        let record = InMemoryRecord::new().with_field("filtered", false);
        let one_hot = one_hot_label(&tm, &record, &Dependents::empty()).unwrap();
        assert_eq!(one_hot.iter().copied().collect::<Vec<_>>(), vec![1.0, 0.0]);
    }

    #[test]
    fn test_one_hot_label_missing_field() {
        let tm = TensorMap::new("variant_label", vec![4], one_hot_label)
            .with_channel_map(variant_channels());
        let record = InMemoryRecord::new();

        let result = one_hot_label(&tm, &record, &Dependents::empty());
        assert!(matches!(result, Err(TensorMapError::FieldNotFound { .. })));
    }

    #[test]
    fn test_one_hot_label_without_channel_map() {
        let tm = TensorMap::new("variant_label", vec![4], one_hot_label);
        let record = InMemoryRecord::new().with_field("variant_label", "SNP");

        let result = one_hot_label(&tm, &record, &Dependents::empty());
        assert!(matches!(result, Err(TensorMapError::InvalidTensorMap(_))));
    }
}
