use crate::error::{Result, TensorMapError};
use crate::record::{FieldValue, SampleRecord};
use crate::record::codec::RecordCodec;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Sample record held entirely in memory.
///
/// Records are written to disk and read back through a
/// [`RecordCodec`], see [`save_to_file`](Self::save_to_file).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InMemoryRecord {
    fields: BTreeMap<String, FieldValue>,
}

impl InMemoryRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a field, builder style.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Add or replace a field, returning the previous value.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<FieldValue>,
    ) -> Option<FieldValue> {
        self.fields.insert(name.into(), value.into())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Write the record to `path` in the codec's encoding.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P, codec: &impl RecordCodec) -> Result<()> {
        let bytes = codec.encode(self)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Read a record written by [`save_to_file`](Self::save_to_file).
    pub fn load_from_file<P: AsRef<Path>>(path: P, codec: &impl RecordCodec) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        codec.decode(&bytes)
    }
}

impl SampleRecord for InMemoryRecord {
    fn get(&self, field: &str) -> Result<FieldValue> {
        self.fields
            .get(field)
            .cloned()
            .ok_or_else(|| TensorMapError::FieldNotFound {
                field: field.to_string(),
            })
    }

    fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    fn fields(&self) -> Vec<String> {
        self.fields.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::codec::{BincodeCodec, JsonCodec};

    fn sample() -> InMemoryRecord {
        InMemoryRecord::new()
            .with_field("variant_label", "SNP")
            .with_field("reference", vec![0.0f32, 1.0, 0.0, 0.0])
            .with_field("depth", 31i64)
    }

    #[test]
    fn test_in_memory_record_get() {
        let record = sample();
        assert_eq!(record.len(), 3);
        assert_eq!(record.get("variant_label").unwrap(), FieldValue::from("SNP"));
        assert!(record.contains("depth"));
        assert!(!record.contains("read_tensor"));
    }

    #[test]
    fn test_in_memory_record_missing_field() {
        let record = sample();
        let result = record.get("read_tensor");
        assert!(matches!(result, Err(TensorMapError::FieldNotFound { .. })));
    }

    #[test]
    fn test_in_memory_record_fields_sorted() {
        let record = sample();
        assert_eq!(record.fields(), vec!["depth", "reference", "variant_label"]);
    }

    #[test]
    fn test_in_memory_record_insert_replaces() {
        let mut record = sample();
        let previous = record.insert("variant_label", "INDEL");
        assert_eq!(previous, Some(FieldValue::from("SNP")));
        assert_eq!(record.get("variant_label").unwrap().to_string(), "INDEL");
    }

    #[test]
    fn test_in_memory_record_file() -> Result<()> {
        let record = sample();

        let tmp = tempfile::tempdir()?;
        let path = tmp.path().join("sample.rec");
        record.save_to_file(&path, &BincodeCodec)?;
        assert_eq!(InMemoryRecord::load_from_file(&path, &BincodeCodec)?, record);

        let path = tmp.path().join("sample.json");
        record.save_to_file(&path, &JsonCodec)?;
        assert_eq!(InMemoryRecord::load_from_file(&path, &JsonCodec)?, record);

        Ok(())
    }
}
