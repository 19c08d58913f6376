//! Built-in tensor maps for variant-calling samples.
//!
//! Each record holds one candidate variant:
//! - `reference` — one-hot reference bases around the site, 128 values
//! - `read_tensor` — pileup of aligned reads, `128 × 128 × 15`
//! - `variant_label` — truth label, one of `NOT_SNP`, `NOT_INDEL`, `SNP`, `INDEL`

use crate::channel_map::ChannelMap;
use crate::encoding::{one_hot_label, passthrough_array};
use crate::error::Result;
use crate::tensor_map::{Interpretation, TensorMap};

pub const REFERENCE_LENGTH: usize = 128;
pub const READ_TENSOR_SHAPE: [usize; 3] = [128, 128, 15];

/// Label vocabulary in channel order.
pub const VARIANT_LABELS: [&str; 4] = ["NOT_SNP", "NOT_INDEL", "SNP", "INDEL"];

/// `{NOT_SNP: 0, NOT_INDEL: 1, SNP: 2, INDEL: 3}`
pub fn variant_label_channel_map() -> Result<ChannelMap> {
    ChannelMap::new(VARIANT_LABELS.iter().enumerate().map(|(i, &name)| (name, i)))
}

pub fn reference() -> TensorMap {
    TensorMap::new("reference", vec![REFERENCE_LENGTH], passthrough_array)
}

pub fn read_tensor() -> TensorMap {
    TensorMap::new("read_tensor", READ_TENSOR_SHAPE.to_vec(), passthrough_array)
}

pub fn variant_label() -> Result<TensorMap> {
    let channel_map = variant_label_channel_map()?;
    Ok(TensorMap::new("variant_label", vec![channel_map.len()], one_hot_label)
        .with_interpretation(Interpretation::Categorical)
        .with_channel_map(channel_map))
}

/// All built-in variant tensor maps.
pub fn all() -> Result<Vec<TensorMap>> {
    Ok(vec![reference(), read_tensor(), variant_label()?])
}
