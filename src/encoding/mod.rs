//! Extractors that turn record fields into tensors.
//!
//! ## Passthrough arrays
//! [`read_array`] returns a stored numeric field at a fixed shape.
//!
//! ## One-hot labels
//! [`encode_one_hot`] turns a category string into a one-hot vector over a
//! [`ChannelMap`](crate::ChannelMap):
//!
//! ```ignore
//! // channels: {NOT_SNP: 0, NOT_INDEL: 1, SNP: 2, INDEL: 3}
//! // "SNP"     -> [0, 0, 1, 0]
//! // "UNKNOWN" -> Err(LabelValidation)
//! ```
//!
//! [`passthrough_array`] and [`one_hot_label`] wrap these as
//! [`TensorFromFile`](crate::TensorFromFile) functions for use in a
//! [`TensorMap`](crate::TensorMap).

mod array;
mod label;

pub use array::{passthrough_array, read_array};
pub use label::{encode_one_hot, one_hot_label};
