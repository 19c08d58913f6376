use crate::error::{Result, TensorMapError};
use crate::record::codec::{BincodeCodec, RecordCodec};
use crate::record::{InMemoryRecord, SampleRecord};
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Opens sample records by identifier.
pub trait RecordSource {
    /// Record type produced by this source.
    type Record: SampleRecord;

    /// Open the record named `id`.
    ///
    /// # Errors
    /// Returns [`TensorMapError::RecordNotFound`] if the source has no such record.
    fn open(&self, id: &str) -> Result<Self::Record>;

    /// Identifiers of all records in the source, sorted.
    fn ids(&self) -> Result<Vec<String>>;
}

/// A directory of record files, one file per sample.
///
/// The identifier of a record is its file stem, so `open("chr1_1234")` reads
/// `<root>/chr1_1234.rec` with the default [`BincodeCodec`]. Identifiers are
/// plain file stems: anything with a path separator, `.` or `..` is rejected.
#[derive(Clone, Debug)]
pub struct DirectorySource<C = BincodeCodec> {
    root: PathBuf,
    codec: C,
}

impl DirectorySource<BincodeCodec> {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_codec(root, BincodeCodec)
    }
}

impl<C: RecordCodec> DirectorySource<C> {
    /// Directory source reading and writing records with `codec`.
    pub fn with_codec(root: impl Into<PathBuf>, codec: C) -> Self {
        Self {
            root: root.into(),
            codec,
        }
    }

    /// Path where the record `id` lives (or would live).
    ///
    /// # Errors
    /// Returns [`TensorMapError::RecordNotFound`] if `id` is not a plain file stem.
    pub fn path_for(&self, id: &str) -> Result<PathBuf> {
        if !is_plain_id(id) {
            return Err(TensorMapError::RecordNotFound(id.to_string()));
        }
        Ok(self.root.join(format!("{id}.{}", self.codec.extension())))
    }

    /// Write `record` under identifier `id`.
    pub fn write(&self, id: &str, record: &InMemoryRecord) -> Result<()> {
        record.save_to_file(self.path_for(id)?, &self.codec)
    }
}

fn is_plain_id(id: &str) -> bool {
    if id.contains(|c| c == '/' || c == '\\') {
        return false;
    }
    let mut components = Path::new(id).components();
    matches!(components.next(), Some(Component::Normal(_))) && components.next().is_none()
}

impl<C: RecordCodec> RecordSource for DirectorySource<C> {
    type Record = InMemoryRecord;

    fn open(&self, id: &str) -> Result<Self::Record> {
        let path = self.path_for(id)?;
        if !path.is_file() {
            return Err(TensorMapError::RecordNotFound(id.to_string()));
        }
        debug!(id, path = %path.display(), "opening record");
        InMemoryRecord::load_from_file(&path, &self.codec)
    }

    fn ids(&self) -> Result<Vec<String>> {
        let extension = self.codec.extension();
        let mut ids = Vec::new();
        for entry in std::fs::read_dir(&self.root)? {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(|e| e.to_str()) != Some(extension) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                ids.push(stem.to_string());
            }
        }
        ids.sort();
        Ok(ids)
    }
}
