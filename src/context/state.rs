//! Session state: a mutable string-keyed mapping of JSON values.

use serde_json::{Map, Value};

/// Host-provided per-session key/value state.
pub trait SessionState {
    fn get(&self, key: &str) -> Option<Value>;
    fn set(&mut self, key: &str, value: Value);
}

/// In-process session state.
#[derive(Debug, Default, Clone)]
pub struct MemorySessionState {
    values: Map<String, Value>,
}

impl MemorySessionState {
    pub fn new() -> Self {
        Self::default()
    }
}

impl From<Map<String, Value>> for MemorySessionState {
    fn from(values: Map<String, Value>) -> Self {
        Self { values }
    }
}

impl SessionState for MemorySessionState {
    fn get(&self, key: &str) -> Option<Value> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Value) {
        self.values.insert(key.to_string(), value);
    }
}
