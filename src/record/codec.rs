//! On-disk encodings for [`InMemoryRecord`].

use crate::error::{Result, TensorMapError};
use crate::record::InMemoryRecord;

/// Turns a record into bytes and back.
///
/// A [`DirectorySource`](crate::DirectorySource) is generic over its codec, and
/// the codec also decides the file extension the source looks for.
pub trait RecordCodec: Send + Sync {
    /// File extension (without the leading dot) for records in this encoding.
    fn extension(&self) -> &str;

    fn encode(&self, record: &InMemoryRecord) -> Result<Vec<u8>>;

    /// # Errors
    /// Returns [`TensorMapError::Serialization`] for malformed bytes.
    fn decode(&self, bytes: &[u8]) -> Result<InMemoryRecord>;
}

/// Compact binary records (`.rec`), the default.
#[derive(Clone, Copy, Debug, Default)]
pub struct BincodeCodec;

impl RecordCodec for BincodeCodec {
    fn extension(&self) -> &str {
        "rec"
    }

    fn encode(&self, record: &InMemoryRecord) -> Result<Vec<u8>> {
        Ok(bincode::serialize(record)?)
    }

    fn decode(&self, bytes: &[u8]) -> Result<InMemoryRecord> {
        Ok(bincode::deserialize(bytes)?)
    }
}

/// Human-readable records (`.json`), handy for fixtures.
///
/// NaN and infinite array values cannot be written in this encoding.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonCodec;

impl RecordCodec for JsonCodec {
    fn extension(&self) -> &str {
        "json"
    }

    fn encode(&self, record: &InMemoryRecord) -> Result<Vec<u8>> {
        serde_json::to_vec(record).map_err(|e| TensorMapError::Serialization(e.to_string()))
    }

    fn decode(&self, bytes: &[u8]) -> Result<InMemoryRecord> {
        serde_json::from_slice(bytes).map_err(|e| TensorMapError::Serialization(e.to_string()))
    }
}
