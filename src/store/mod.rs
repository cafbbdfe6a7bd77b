//! Shared session state.
//!
//! The store is constructed once per application session and handed by
//! clone to whichever screens need it. It holds a single field: the
//! player's display name.

use parking_lot::RwLock;
use std::sync::Arc;

#[derive(Default)]
struct Inner {
    name: String,
    version: u64,
}

/// Session-wide store for the player's display name.
///
/// Single writer (the home screen input binding), any number of
/// readers. Change detection is pull-based: [`SessionStore::version`]
/// bumps exactly once per state-changing write, so a consumer re-reads
/// when the version it last saw is stale. Writing the value already
/// held is a no-op.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<Inner>>,
}

impl SessionStore {
    /// Create a store with an empty name.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current name.
    pub fn name(&self) -> String {
        self.inner.read().name.clone()
    }

    /// Counter of state-changing writes since construction.
    pub fn version(&self) -> u64 {
        self.inner.read().version
    }

    /// Assign a new name, returning the assigned value.
    ///
    /// Last write wins. No validation, trimming, or length limit is
    /// applied.
    pub fn set_name(&self, value: impl Into<String>) -> String {
        let value = value.into();
        let mut inner = self.inner.write();
        if inner.name != value {
            inner.name = value.clone();
            inner.version += 1;
            tracing::trace!(version = inner.version, "name updated");
        }
        value
    }
}
