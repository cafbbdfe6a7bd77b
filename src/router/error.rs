use thiserror::Error;

/// Errors from route table construction and path resolution.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RouterError {
    /// No route is bound to the requested path.
    #[error("no route matches '{path}'")]
    NotFound { path: String },

    /// A path appears more than once in the table.
    #[error("duplicate route path '{path}'")]
    DuplicatePath { path: String },

    /// A declared path is not a normalized absolute path.
    #[error("invalid route path '{path}': {reason}")]
    InvalidPath { path: String, reason: &'static str },
}
