//! Error types for artifact generation

use std::path::PathBuf;
use thiserror::Error;

use crate::stubs::Stub;

/// Failure while generating a single artifact
///
/// None of these abort a run: the orchestrator records them against the
/// artifact that failed and moves on to the next one.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// Destination is already occupied
    #[error("{} already exists", .0.display())]
    AlreadyExists(PathBuf),

    /// Stub is neither customised nor available built-in
    #[error("Template not found: {stub} (looked in {})", .searched.display())]
    TemplateNotFound {
        /// Stub that was requested
        stub: Stub,
        /// Customised stub location that was checked
        searched: PathBuf,
    },

    /// Customised stub exists but could not be read
    #[error("Failed to read template {}: {source}", .path.display())]
    TemplateRead {
        /// Stub file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Parent directory could not be created
    #[error("Failed to create directory {}: {source}", .path.display())]
    DirectoryCreationFailed {
        /// Directory that was being created
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Rendered content could not be written
    #[error("Failed to write {}: {source}", .path.display())]
    WriteFailed {
        /// Destination file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// A model or migration collaborator failed
    #[error("{kind} scaffolder failed: {message}")]
    SubScaffolder {
        /// Which collaborator (`model`, `migration`)
        kind: &'static str,
        /// Collaborator's own message
        message: String,
    },
}

/// Result alias for generator operations
pub type Result<T> = std::result::Result<T, ScaffoldError>;
