//! Data access layer

mod patients;

pub use patients::{JsonFileStore, PatientSet, PatientStore, StorageError};

#[cfg(test)]
pub use patients::MemoryStore;
