//! Module scaffold generator
//!
//! Turns a module name into model, controller, route, migration, view and
//! component files. Names are derived once, paths resolved per artifact kind,
//! and each file is rendered from a stub with literal token substitution.

pub mod artifact;
pub mod collaborators;
pub mod fs;
pub mod generator;
pub mod names;
pub mod paths;
pub mod templates;

pub use artifact::{ArtifactSpec, Outcome};
pub use collaborators::{
    MigrationRequest, MigrationScaffolder, ModelRequest, ModelScaffolder, StubMigrationScaffolder,
    StubModelScaffolder,
};
pub use generator::{ArtifactReport, ArtifactSelection, GenerationReport, ModuleGenerator};
pub use names::{DerivedNames, ModuleName, NameHelpers};
pub use paths::{ArtifactKind, PathResolver, RouteKind, ViewName};
pub use templates::{
    leftover_tokens, Published, StubSource, StubStore, SubstitutionMap, PLACEHOLDER_TOKENS,
};
