//! A single generated file and the shared write skeleton

use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::fs::{already_exists, ensure_parent_dir, write_new};
use super::paths::ArtifactKind;
use super::templates::{StubStore, SubstitutionMap};
use crate::error::{Result, ScaffoldError};
use crate::stubs::Stub;

/// What happened to one artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// File was written
    Created(PathBuf),
    /// Destination was occupied; nothing was written
    AlreadyExists(PathBuf),
    /// Generation failed with the given reason
    Failed(String),
}

impl Outcome {
    /// Path the outcome refers to, if any
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Created(path) | Self::AlreadyExists(path) => Some(path),
            Self::Failed(_) => None,
        }
    }

    /// Returns true for [`Outcome::Created`]
    #[must_use]
    pub const fn is_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }

    /// Returns true for [`Outcome::Failed`]
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

impl From<ScaffoldError> for Outcome {
    fn from(err: ScaffoldError) -> Self {
        match err {
            ScaffoldError::AlreadyExists(path) => Self::AlreadyExists(path),
            other => Self::Failed(other.to_string()),
        }
    }
}

/// Everything needed to produce one file
#[derive(Debug, Clone)]
pub struct ArtifactSpec {
    /// Kind of file
    pub kind: ArtifactKind,
    /// Where it goes
    pub destination: PathBuf,
    /// Stub it renders from
    pub stub: Stub,
    /// Placeholder values
    pub substitutions: SubstitutionMap,
}

impl ArtifactSpec {
    /// Artifact rendered from the kind's default stub
    #[must_use]
    pub fn new(kind: ArtifactKind, destination: PathBuf, substitutions: SubstitutionMap) -> Self {
        Self {
            kind,
            stub: kind.stub(),
            destination,
            substitutions,
        }
    }

    /// Guard, create the parent directory, render, write
    ///
    /// An occupied destination is not an error: it yields
    /// [`Outcome::AlreadyExists`] and leaves the file untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the stub is missing or unreadable, or the
    /// directory or file cannot be written.
    pub fn emit(&self, stubs: &StubStore) -> Result<Outcome> {
        if already_exists(&self.destination) {
            debug!(kind = %self.kind, path = %self.destination.display(), "destination exists");
            return Ok(Outcome::AlreadyExists(self.destination.clone()));
        }

        ensure_parent_dir(&self.destination)?;
        let content = stubs.render(self.stub, &self.substitutions)?;

        match write_new(&self.destination, &content) {
            Ok(()) => {
                info!(kind = %self.kind, path = %self.destination.display(), "created");
                Ok(Outcome::Created(self.destination.clone()))
            }
            Err(ScaffoldError::AlreadyExists(path)) => Ok(Outcome::AlreadyExists(path)),
            Err(err) => Err(err),
        }
    }
}
