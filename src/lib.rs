//! # tensormap
//!
//! Tensor maps extract model inputs and labels from keyed per-sample records.
//!
//! ## Core Design Principles
//!
//! - **Records are read-only**: a [`SampleRecord`] is only ever queried by field
//!   name; extractors never mutate it.
//! - **Declared shapes**: every [`TensorMap`] declares its output shape and the
//!   produced tensor is checked against it.
//! - **Hard label failures**: a category outside the [`ChannelMap`] is a
//!   [`TensorMapError::LabelValidation`], never a silent zero vector.
//!
//! ## Quick Start
//!
//! ```rust
//! use tensormap::{Dependents, InMemoryRecord, TensorMapRegistry};
//!
//! let registry = TensorMapRegistry::with_builtins().unwrap();
//! let label = registry.require("variant_label").unwrap();
//!
//! let record = InMemoryRecord::new().with_field("variant_label", "SNP");
//! let one_hot = label.tensor_from_file(&record, &Dependents::empty()).unwrap();
//! assert_eq!(one_hot.iter().copied().collect::<Vec<_>>(), vec![0.0, 0.0, 1.0, 0.0]);
//! ```
//!
//! ## Module Structure
//!
//! - `channel_map` — dense category vocabularies
//! - `encoding` — passthrough array reads and one-hot label encoding
//! - `record` — sample records and record sources
//! - `tensor_map` — tensor map declarations and extraction
//! - `registry` — name lookup with validation
//! - `config` — JSON tensor map declarations
//! - `variant` — built-in variant-calling tensor maps

pub mod channel_map;

/// Tensor map declarations loaded from JSON.
pub mod config;

/// Extractors that turn record fields into tensors.
pub mod encoding;

pub mod error;

/// Sample records and the sources that open them.
pub mod record;

pub mod registry;

pub mod tensor_map;

/// Built-in variant-calling tensor maps.
pub mod variant;

pub use channel_map::ChannelMap;
pub use config::TensorMapConfig;
pub use encoding::{encode_one_hot, one_hot_label, passthrough_array, read_array};
pub use error::{Result, TensorMapError};
pub use record::{
    BincodeCodec, DirectorySource, FieldValue, InMemoryRecord, JsonCodec, RecordCodec,
    RecordSource, SampleRecord,
};
pub use registry::TensorMapRegistry;
pub use tensor_map::{Dependents, Interpretation, TensorFromFile, TensorMap};
