//! Tensor maps: named, shaped views of a record field.
//!
//! A [`TensorMap`] pairs a name with a declared output shape, an
//! [`Interpretation`] tag, an optional [`ChannelMap`], and the function that
//! extracts the tensor from a [`SampleRecord`]. The map checks that whatever
//! the extractor produces has the declared shape.

use crate::channel_map::ChannelMap;
use crate::error::{Result, TensorMapError};
use crate::record::SampleRecord;
use ndarray::ArrayD;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Extraction function: builds one tensor from one record.
pub type TensorFromFile = fn(&TensorMap, &dyn SampleRecord, &Dependents) -> Result<ArrayD<f32>>;

/// How the values of a tensor map should be read by a model.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interpretation {
    /// Real-valued data.
    #[default]
    Continuous,
    /// One-hot encoded categories; requires a channel map.
    Categorical,
    /// Dense embedding vectors.
    Embedding,
    /// Token sequences.
    Language,
}

impl fmt::Display for Interpretation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Interpretation::Continuous => "continuous",
            Interpretation::Categorical => "categorical",
            Interpretation::Embedding => "embedding",
            Interpretation::Language => "language",
        };
        f.write_str(s)
    }
}

/// Auxiliary tensors handed to an extractor alongside the record.
///
/// Passed by shared reference on every call; build a fresh one (or use
/// [`Dependents::empty`]) rather than sharing a mutable instance.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dependents {
    tensors: BTreeMap<String, ArrayD<f32>>,
}

impl Dependents {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, tensor: ArrayD<f32>) -> Self {
        self.tensors.insert(name.into(), tensor);
        self
    }

    pub fn get(&self, name: &str) -> Option<&ArrayD<f32>> {
        self.tensors.get(name)
    }

    pub fn len(&self) -> usize {
        self.tensors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tensors.is_empty()
    }
}

/// A named tensor with a fixed shape and an extraction function.
///
/// # Example
/// ```
/// use tensormap::{passthrough_array, Dependents, InMemoryRecord, TensorMap};
///
/// let tm = TensorMap::new("reference", vec![4], passthrough_array);
/// let record = InMemoryRecord::new().with_field("reference", vec![0.0f32, 0.0, 1.0, 0.0]);
///
/// let tensor = tm.tensor_from_file(&record, &Dependents::empty()).unwrap();
/// assert_eq!(tensor.shape(), &[4]);
/// ```
#[derive(Clone)]
pub struct TensorMap {
    name: String,
    field: Option<String>,
    interpretation: Interpretation,
    shape: Vec<usize>,
    channel_map: Option<ChannelMap>,
    tensor_from_file: TensorFromFile,
}

impl TensorMap {
    /// Create a continuous tensor map reading the field named `name`.
    pub fn new(name: impl Into<String>, shape: Vec<usize>, tensor_from_file: TensorFromFile) -> Self {
        Self {
            name: name.into(),
            field: None,
            interpretation: Interpretation::default(),
            shape,
            channel_map: None,
            tensor_from_file,
        }
    }

    pub fn with_interpretation(mut self, interpretation: Interpretation) -> Self {
        self.interpretation = interpretation;
        self
    }

    /// Attach a channel map. Also marks the map categorical if it was
    /// still continuous.
    pub fn with_channel_map(mut self, channel_map: ChannelMap) -> Self {
        if self.interpretation == Interpretation::Continuous {
            self.interpretation = Interpretation::Categorical;
        }
        self.channel_map = Some(channel_map);
        self
    }

    /// Read from `field` instead of the field named after the tensor map.
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Record field the extractor reads from.
    pub fn source_field(&self) -> &str {
        self.field.as_deref().unwrap_or(&self.name)
    }

    pub fn interpretation(&self) -> Interpretation {
        self.interpretation
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Number of elements in one tensor.
    pub fn size(&self) -> usize {
        self.shape.iter().product()
    }

    pub fn channel_map(&self) -> Option<&ChannelMap> {
        self.channel_map.as_ref()
    }

    pub fn is_categorical(&self) -> bool {
        self.interpretation == Interpretation::Categorical
    }

    pub fn is_continuous(&self) -> bool {
        self.interpretation == Interpretation::Continuous
    }

    /// Model input layer name, e.g. `input_reference_continuous`.
    pub fn input_name(&self) -> String {
        format!("input_{}_{}", self.name, self.interpretation)
    }

    /// Model output layer name, e.g. `output_variant_label_categorical`.
    pub fn output_name(&self) -> String {
        format!("output_{}_{}", self.name, self.interpretation)
    }

    /// Check the declaration for consistency.
    ///
    /// # Errors
    /// Returns [`TensorMapError::InvalidTensorMap`] if:
    /// - the name is empty or a dimension is zero
    /// - a categorical map has no channel map or is not one-dimensional
    /// - the channel map size differs from the last dimension
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(TensorMapError::InvalidTensorMap(
                "tensor map name must not be empty".to_string(),
            ));
        }
        if self.shape.contains(&0) {
            return Err(TensorMapError::InvalidTensorMap(format!(
                "{} has a zero-sized dimension in shape {:?}",
                self.name, self.shape
            )));
        }

        if self.is_categorical() {
            if self.channel_map.is_none() {
                return Err(TensorMapError::InvalidTensorMap(format!(
                    "categorical {} needs a channel map",
                    self.name
                )));
            }
            if self.shape.len() != 1 {
                return Err(TensorMapError::InvalidTensorMap(format!(
                    "categorical {} must be one-dimensional, got shape {:?}",
                    self.name, self.shape
                )));
            }
        }

        if let Some(channel_map) = &self.channel_map {
            let channels = self.shape.last().copied().unwrap_or(1);
            if channel_map.len() != channels {
                return Err(TensorMapError::InvalidTensorMap(format!(
                    "{} has {} channels but shape {:?}",
                    self.name,
                    channel_map.len(),
                    self.shape
                )));
            }
        }
        Ok(())
    }

    /// Extract this tensor from `record`.
    ///
    /// # Errors
    /// Propagates the extractor's error unchanged, or returns
    /// [`TensorMapError::ShapeMismatch`] if the produced tensor does not have
    /// the declared shape.
    pub fn tensor_from_file(
        &self,
        record: &dyn SampleRecord,
        dependents: &Dependents,
    ) -> Result<ArrayD<f32>> {
        let tensor = (self.tensor_from_file)(self, record, dependents)?;
        if tensor.shape() != self.shape.as_slice() {
            return Err(TensorMapError::ShapeMismatch {
                name: self.name.clone(),
                expected: self.shape.clone(),
                got: tensor.shape().to_vec(),
            });
        }
        Ok(tensor)
    }
}

impl fmt::Debug for TensorMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TensorMap")
            .field("name", &self.name)
            .field("field", &self.source_field())
            .field("interpretation", &self.interpretation)
            .field("shape", &self.shape)
            .field("channel_map", &self.channel_map)
            .finish_non_exhaustive()
    }
}
