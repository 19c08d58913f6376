//! Declarative tensor map configuration.
//!
//! Tensor maps can be described in JSON instead of code. The extractor is
//! picked from the interpretation: categorical maps one-hot encode their
//! field, everything else reads the field as a numeric array.
//!
//! ```json
//! [
//!   {"name": "reference", "shape": [128]},
//!   {"name": "variant_label", "shape": [4],
//!    "channel_map": {"NOT_SNP": 0, "NOT_INDEL": 1, "SNP": 2, "INDEL": 3}}
//! ]
//! ```

use crate::channel_map::ChannelMap;
use crate::encoding::{one_hot_label, passthrough_array};
use crate::tensor_map::{Interpretation, TensorFromFile, TensorMap};
use serde::{Deserialize, Serialize};

/// Serializable description of one tensor map.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TensorMapConfig {
    pub name: String,
    /// Record field to read; defaults to `name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Defaults to categorical when a channel map is given, else continuous.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interpretation: Option<Interpretation>,
    pub shape: Vec<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_map: Option<ChannelMap>,
}

impl TensorMapConfig {
    pub fn interpretation(&self) -> Interpretation {
        match (self.interpretation, &self.channel_map) {
            (Some(interpretation), _) => interpretation,
            (None, Some(_)) => Interpretation::Categorical,
            (None, None) => Interpretation::Continuous,
        }
    }

    /// Build the tensor map. The result is not validated here; registering
    /// it in a [`TensorMapRegistry`](crate::TensorMapRegistry) does that.
    pub fn into_tensor_map(self) -> TensorMap {
        let interpretation = self.interpretation();
        let extractor: TensorFromFile = match interpretation {
            Interpretation::Categorical => one_hot_label,
            _ => passthrough_array,
        };

        let mut tm = TensorMap::new(self.name, self.shape, extractor)
            .with_interpretation(interpretation);
        if let Some(field) = self.field {
            tm = tm.with_field(field);
        }
        if let Some(channel_map) = self.channel_map {
            tm = tm.with_channel_map(channel_map);
        }
        tm
    }
}

impl From<&TensorMap> for TensorMapConfig {
    fn from(tm: &TensorMap) -> Self {
        let field = (tm.source_field() != tm.name()).then(|| tm.source_field().to_string());
        Self {
            name: tm.name().to_string(),
            field,
            interpretation: Some(tm.interpretation()),
            shape: tm.shape().to_vec(),
            channel_map: tm.channel_map().cloned(),
        }
    }
}
