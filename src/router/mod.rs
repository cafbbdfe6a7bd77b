//! In-memory routing between application screens.
//!
//! A [`RouteTable`] is built once at startup and never changes. The
//! [`Router`] resolves paths against it and tracks the live location on
//! a [`MemoryHistory`] stack. Nothing is persisted outside the process,
//! so the location always resets to the start path on the next run.

mod error;
mod history;
mod table;

pub use error::RouterError;
pub use history::MemoryHistory;
pub use table::{Route, RouteTable, ViewId};

/// Resolves paths to views and performs location transitions.
///
/// Only resolvable paths ever enter the history: [`Router::navigate`]
/// and [`Router::replace`] look the path up first and reject unknown
/// paths without touching the current location.
#[derive(Debug)]
pub struct Router {
    table: RouteTable,
    history: MemoryHistory,
}

impl Router {
    /// Create a router positioned at `start_path`.
    ///
    /// Fails with [`RouterError::NotFound`] when the start path is not
    /// in the table.
    pub fn new(table: RouteTable, start_path: &str) -> Result<Self, RouterError> {
        table.resolve(start_path)?;
        Ok(Self {
            history: MemoryHistory::new(start_path),
            table,
        })
    }

    /// The active path.
    pub fn current_path(&self) -> &str {
        self.history.current()
    }

    /// The view bound to the active path.
    pub fn current_view(&self) -> ViewId {
        self.table
            .resolve(self.history.current())
            .expect("history contains only routable paths")
    }

    /// Push a new location and return the view now active.
    ///
    /// An unknown path leaves the location unchanged.
    pub fn navigate(&mut self, path: &str) -> Result<ViewId, RouterError> {
        let view = self.table.resolve(path)?;
        self.history.push(path);
        tracing::debug!(path, ?view, "navigate");
        Ok(view)
    }

    /// Replace the current location in place, without growing the stack.
    pub fn replace(&mut self, path: &str) -> Result<ViewId, RouterError> {
        let view = self.table.resolve(path)?;
        self.history.replace(path);
        tracing::debug!(path, ?view, "replace");
        Ok(view)
    }

    /// Step back one entry. Returns `None` at the oldest entry.
    pub fn back(&mut self) -> Option<ViewId> {
        if self.history.back() {
            Some(self.current_view())
        } else {
            None
        }
    }

    /// Step forward one entry. Returns `None` at the newest entry.
    pub fn forward(&mut self) -> Option<ViewId> {
        if self.history.forward() {
            Some(self.current_view())
        } else {
            None
        }
    }
}
