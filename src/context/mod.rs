//! Context module - host collaborators handed to every tool call

mod artifacts;
mod state;

pub use artifacts::{Artifact, ArtifactStore, MemoryArtifactStore};
pub use state::{MemorySessionState, SessionState};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("artifact store unavailable: {0}")]
    Unavailable(String),
    #[error("state entry '{key}' is malformed: {source}")]
    MalformedState {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Borrowed access to the host's artifact store and session state for the
/// duration of one tool call.
pub struct ToolContext<'a> {
    artifacts: &'a mut dyn ArtifactStore,
    state: &'a mut dyn SessionState,
}

impl<'a> ToolContext<'a> {
    pub fn new(artifacts: &'a mut dyn ArtifactStore, state: &'a mut dyn SessionState) -> Self {
        Self { artifacts, state }
    }

    pub fn save_artifact(&mut self, name: &str, artifact: Artifact) -> Result<u64, StoreError> {
        self.artifacts.save(name, artifact)
    }

    pub fn load_artifact(&self, name: &str) -> Result<Option<Artifact>, StoreError> {
        self.artifacts.load(name)
    }

    pub fn list_artifacts(&self) -> Result<Vec<String>, StoreError> {
        self.artifacts.list()
    }

    pub fn state(&self) -> &dyn SessionState {
        &*self.state
    }

    pub fn state_mut(&mut self) -> &mut dyn SessionState {
        &mut *self.state
    }
}
