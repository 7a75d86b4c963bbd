//! Artifact storage: named binary blobs, versioned on write.

use crate::context::StoreError;
use std::collections::BTreeMap;

/// A stored blob and the mime type it was saved with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub data: Vec<u8>,
    pub mime_type: Option<String>,
}

impl Artifact {
    pub fn new(data: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            data,
            mime_type: Some(mime_type.into()),
        }
    }
}

/// Host-provided artifact store.
pub trait ArtifactStore {
    /// Store a new version of `name`, returning its version number.
    fn save(&mut self, name: &str, artifact: Artifact) -> Result<u64, StoreError>;

    /// Latest version of `name`, if any.
    fn load(&self, name: &str) -> Result<Option<Artifact>, StoreError>;

    /// Names of all stored artifacts.
    fn list(&self) -> Result<Vec<String>, StoreError>;
}

/// In-process artifact store. Versions start at 0 per name.
#[derive(Debug, Default, Clone)]
pub struct MemoryArtifactStore {
    artifacts: BTreeMap<String, Vec<Artifact>>,
}

impl MemoryArtifactStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of versions stored under `name`.
    pub fn version_count(&self, name: &str) -> usize {
        self.artifacts.get(name).map_or(0, Vec::len)
    }
}

impl ArtifactStore for MemoryArtifactStore {
    fn save(&mut self, name: &str, artifact: Artifact) -> Result<u64, StoreError> {
        let versions = self.artifacts.entry(name.to_string()).or_default();
        versions.push(artifact);
        Ok((versions.len() - 1) as u64)
    }

    fn load(&self, name: &str) -> Result<Option<Artifact>, StoreError> {
        Ok(self
            .artifacts
            .get(name)
            .and_then(|versions| versions.last())
            .cloned())
    }

    fn list(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.artifacts.keys().cloned().collect())
    }
}
