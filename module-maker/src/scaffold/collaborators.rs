//! Model and migration scaffolding seams
//!
//! Model and migration files are usually produced by the host framework's own
//! generators. The module generator only talks to these traits; the stub-based
//! adapters below are the defaults and can be swapped for adapters that shell
//! out to real ORM or migration tooling.

use std::path::PathBuf;
use tracing::debug;

use super::artifact::{ArtifactSpec, Outcome};
use super::fs::find_with_suffix;
use super::paths::ArtifactKind;
use super::templates::{StubStore, SubstitutionMap};
use crate::error::Result;

/// Request to create a model class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelRequest {
    /// Fully-qualified class (`App\Modules\Shop\Order\Models\Order`)
    pub fully_qualified_name: String,
    /// Namespace part of the class
    pub namespace: String,
    /// Short class name
    pub class_name: String,
    /// Table backing the model
    pub table_name: String,
    /// File to write
    pub destination: PathBuf,
}

/// Request to create a table migration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationRequest {
    /// Table to create
    pub table_name: String,
    /// Migration name without timestamp (`create_orders_table`)
    pub migration_name: String,
    /// Directory migrations for the module live in
    pub directory: PathBuf,
    /// File to write, timestamp included
    pub destination: PathBuf,
}

/// Produces model classes
pub trait ModelScaffolder {
    /// Create the model described by `request`
    ///
    /// # Errors
    ///
    /// Returns an error if the model cannot be produced.
    fn generate(&self, request: &ModelRequest) -> Result<Outcome>;
}

/// Produces table migrations
pub trait MigrationScaffolder {
    /// Create the migration described by `request`
    ///
    /// # Errors
    ///
    /// Returns an error if the migration cannot be produced.
    fn generate(&self, request: &MigrationRequest) -> Result<Outcome>;
}

/// Model scaffolder rendering `model.stub`
#[derive(Debug, Clone)]
pub struct StubModelScaffolder {
    stubs: StubStore,
}

impl StubModelScaffolder {
    /// Adapter over a stub store
    #[must_use]
    pub const fn new(stubs: StubStore) -> Self {
        Self { stubs }
    }
}

impl ModelScaffolder for StubModelScaffolder {
    fn generate(&self, request: &ModelRequest) -> Result<Outcome> {
        debug!(class = %request.fully_qualified_name, "scaffolding model");
        let substitutions = SubstitutionMap::new()
            .with("DummyNamespace", request.namespace.as_str())
            .with("DummyClass", request.class_name.as_str())
            .with("DummyTable", request.table_name.as_str());

        ArtifactSpec::new(ArtifactKind::Model, request.destination.clone(), substitutions)
            .emit(&self.stubs)
    }
}

/// Migration scaffolder rendering `migration.create.stub`
///
/// A migration counts as existing when any file in the module's migration
/// directory ends in `_<migration_name>.php`, whatever its timestamp.
#[derive(Debug, Clone)]
pub struct StubMigrationScaffolder {
    stubs: StubStore,
}

impl StubMigrationScaffolder {
    /// Adapter over a stub store
    #[must_use]
    pub const fn new(stubs: StubStore) -> Self {
        Self { stubs }
    }
}

impl MigrationScaffolder for StubMigrationScaffolder {
    fn generate(&self, request: &MigrationRequest) -> Result<Outcome> {
        let suffix = format!("_{}.php", request.migration_name);
        if let Some(existing) = find_with_suffix(&request.directory, &suffix) {
            debug!(path = %existing.display(), "migration exists");
            return Ok(Outcome::AlreadyExists(existing));
        }

        let substitutions = SubstitutionMap::new().with("DummyTable", request.table_name.as_str());
        ArtifactSpec::new(ArtifactKind::Migration, request.destination.clone(), substitutions)
            .emit(&self.stubs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScaffoldConfig;
    use std::fs;
    use tempfile::TempDir;

    fn migration_request(root: &std::path::Path, stamp: &str) -> MigrationRequest {
        let directory = root.join("app/Modules/Order/Migrations");
        MigrationRequest {
            table_name: "orders".to_string(),
            migration_name: "create_orders_table".to_string(),
            destination: directory.join(format!("{stamp}_create_orders_table.php")),
            directory,
        }
    }

    #[test]
    fn test_stub_model_scaffolder() {
        let temp_dir = TempDir::new().unwrap();
        let scaffolder =
            StubModelScaffolder::new(StubStore::new(&ScaffoldConfig::for_root(temp_dir.path())));
        let destination = temp_dir.path().join("app/Modules/Order/Models/Order.php");

        let outcome = scaffolder
            .generate(&ModelRequest {
                fully_qualified_name: "App\\Modules\\Order\\Models\\Order".to_string(),
                namespace: "App\\Modules\\Order\\Models".to_string(),
                class_name: "Order".to_string(),
                table_name: "orders".to_string(),
                destination: destination.clone(),
            })
            .unwrap();

        assert_eq!(outcome, Outcome::Created(destination.clone()));
        let content = fs::read_to_string(destination).unwrap();
        assert!(content.contains("namespace App\\Modules\\Order\\Models;"));
        assert!(content.contains("class Order extends Model"));
        assert!(content.contains("protected $table = 'orders';"));
    }

    #[test]
    fn test_migration_detected_across_timestamps() {
        let temp_dir = TempDir::new().unwrap();
        let scaffolder =
            StubMigrationScaffolder::new(StubStore::new(&ScaffoldConfig::for_root(temp_dir.path())));

        let first = migration_request(temp_dir.path(), "2024_01_01_000000");
        assert_eq!(
            scaffolder.generate(&first).unwrap(),
            Outcome::Created(first.destination.clone())
        );

        let second = migration_request(temp_dir.path(), "2024_06_30_235959");
        assert_eq!(
            scaffolder.generate(&second).unwrap(),
            Outcome::AlreadyExists(first.destination.clone())
        );
        assert!(!second.destination.exists());

        let content = fs::read_to_string(&first.destination).unwrap();
        assert!(content.contains("Schema::create('orders'"));
    }
}
