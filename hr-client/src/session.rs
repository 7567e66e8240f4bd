//! Session credential store

use std::sync::{Arc, RwLock};

/// Holds the bearer token for the current sign-in.
///
/// Clones share one slot, so the gateway and any number of UI consumers
/// observe the same credential. An empty slot means unauthenticated.
#[derive(Debug, Clone, Default)]
pub struct Session {
    token: Arc<RwLock<Option<String>>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the token for subsequent requests
    pub fn set(&self, token: impl Into<String>) {
        let mut slot = self.token.write().expect("session lock poisoned");
        *slot = Some(token.into());
    }

    /// Drop the stored token
    pub fn clear(&self) {
        let mut slot = self.token.write().expect("session lock poisoned");
        *slot = None;
    }

    /// Current token, if signed in
    pub fn read(&self) -> Option<String> {
        self.token.read().expect("session lock poisoned").clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.read().expect("session lock poisoned").is_some()
    }
}
