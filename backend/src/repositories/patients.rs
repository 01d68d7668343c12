//! Patient collection storage
//!
//! The whole patient collection is the unit of persistence: every read
//! loads the full map, every mutation rewrites it. There is no locking and
//! no transactional isolation between concurrent requests; two racing
//! writes resolve as last-write-wins whole-file overwrites. That is an
//! accepted limitation of this store, not a guarantee.

use async_trait::async_trait;
use carelog_shared::models::StoredPatient;
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

/// The persisted collection: patient id -> stored fields
///
/// A BTreeMap keeps storage order deterministic (lexicographic id order)
/// across load/save cycles, which also makes stable-sort tie-breaking
/// reproducible.
pub type PatientSet = BTreeMap<String, StoredPatient>;

/// Storage collaborator failure
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("patient store I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("patient store is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Whole-collection load/save contract
///
/// Implementations own the file format and access; callers treat the
/// collection as an opaque atomic whole.
#[async_trait]
pub trait PatientStore: Send + Sync {
    /// Load the full collection
    async fn load(&self) -> Result<PatientSet, StorageError>;

    /// Persist the full collection, replacing whatever was stored
    async fn save(&self, patients: &PatientSet) -> Result<(), StorageError>;
}

/// JSON file backed patient store
///
/// One pretty-printed JSON object per file, mapping patient id to the flat
/// stored fields. A missing file loads as the empty collection so a fresh
/// deployment can serve its first create.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[async_trait]
impl PatientStore for JsonFileStore {
    async fn load(&self) -> Result<PatientSet, StorageError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "patient file absent, loading empty collection");
                return Ok(PatientSet::new());
            }
            Err(err) => return Err(err.into()),
        };

        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn save(&self, patients: &PatientSet) -> Result<(), StorageError> {
        let bytes = serde_json::to_vec_pretty(patients)?;
        tokio::fs::write(&self.path, bytes).await?;
        debug!(path = %self.path.display(), count = patients.len(), "patient collection saved");
        Ok(())
    }
}

/// In-memory store for unit tests
#[cfg(test)]
#[derive(Default)]
pub struct MemoryStore {
    patients: std::sync::Mutex<PatientSet>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn with_patients(patients: PatientSet) -> Self {
        Self {
            patients: std::sync::Mutex::new(patients),
        }
    }
}

#[cfg(test)]
#[async_trait]
impl PatientStore for MemoryStore {
    async fn load(&self) -> Result<PatientSet, StorageError> {
        Ok(self.patients.lock().unwrap().clone())
    }

    async fn save(&self, patients: &PatientSet) -> Result<(), StorageError> {
        *self.patients.lock().unwrap() = patients.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carelog_shared::models::Gender;

    fn sample_set() -> PatientSet {
        let mut set = PatientSet::new();
        set.insert(
            "P001".to_string(),
            StoredPatient {
                name: "Asha Rao".to_string(),
                city: "Pune".to_string(),
                age: 34,
                gender: Gender::Female,
                height_m: 1.70,
                weight_kg: 60.0,
            },
        );
        set
    }

    #[tokio::test]
    async fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("patients.json"));

        let set = store.load().await.unwrap();
        assert!(set.is_empty());
    }

    #[tokio::test]
    async fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("patients.json"));

        store.save(&sample_set()).await.unwrap();
        let loaded = store.load().await.unwrap();
        assert_eq!(loaded, sample_set());
    }

    #[tokio::test]
    async fn test_file_is_id_keyed_map() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("patients.json");
        let store = JsonFileStore::new(&path);

        store.save(&sample_set()).await.unwrap();

        let raw: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        let entry = &raw["P001"];
        assert_eq!(entry["name"], "Asha Rao");
        // Derived fields are never persisted
        assert!(entry.get("bmi").is_none());
        assert!(entry.get("health_verdict").is_none());
        assert!(entry.get("id").is_none());
    }

    #[tokio::test]
    async fn test_malformed_file_is_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("patients.json");
        std::fs::write(&path, b"{ not json").unwrap();

        let store = JsonFileStore::new(&path);
        let err = store.load().await.unwrap_err();
        assert!(matches!(err, StorageError::Malformed(_)));
    }
}
