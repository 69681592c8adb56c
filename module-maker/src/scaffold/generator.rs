//! Module generator orchestrator
//!
//! Runs the selected artifact generators in a fixed order:
//! model, controller, migration, Vue component, views, API controller.
//!
//! Every generator follows the same skeleton (derive names, resolve path,
//! guard, create directory, render, write) and records its own outcome. A
//! failing generator never stops the ones after it.

use tracing::{info, warn};

use super::artifact::{ArtifactSpec, Outcome};
use super::collaborators::{
    MigrationRequest, MigrationScaffolder, ModelRequest, ModelScaffolder, StubMigrationScaffolder,
    StubModelScaffolder,
};
use super::names::{DerivedNames, ModuleName};
use super::paths::{migration_name, ArtifactKind, PathResolver, RouteKind, ViewName};
use super::templates::{StubStore, SubstitutionMap};
use crate::config::ScaffoldConfig;
use crate::error::Result;

/// Which artifacts to generate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct ArtifactSelection {
    /// Model class
    pub model: bool,
    /// Web controller and `web` routes
    pub controller: bool,
    /// Create-table migration
    pub migration: bool,
    /// Vue component
    pub vue: bool,
    /// Create/edit/index/show views
    pub view: bool,
    /// API controller and `api` routes
    pub api: bool,
}

impl ArtifactSelection {
    /// Every artifact
    #[must_use]
    pub const fn all() -> Self {
        Self {
            model: true,
            controller: true,
            migration: true,
            vue: true,
            view: true,
            api: true,
        }
    }

    /// Returns true if nothing is selected
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        !(self.model || self.controller || self.migration || self.vue || self.view || self.api)
    }
}

/// Outcome of one artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactReport {
    /// Artifact kind
    pub kind: ArtifactKind,
    /// What happened
    pub outcome: Outcome,
}

/// Outcomes of a whole run, in generation order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    entries: Vec<ArtifactReport>,
}

impl GenerationReport {
    /// Record a generator result, turning errors into [`Outcome::Failed`]
    pub fn record(&mut self, kind: ArtifactKind, result: Result<Outcome>) {
        let outcome = result.unwrap_or_else(|err| {
            warn!(kind = %kind, error = %err, "artifact generation failed");
            Outcome::from(err)
        });
        self.entries.push(ArtifactReport { kind, outcome });
    }

    /// All entries
    #[must_use]
    pub fn entries(&self) -> &[ArtifactReport] {
        &self.entries
    }

    /// First outcome recorded for `kind`
    #[must_use]
    pub fn outcome(&self, kind: ArtifactKind) -> Option<&Outcome> {
        self.entries
            .iter()
            .find(|entry| entry.kind == kind)
            .map(|entry| &entry.outcome)
    }

    /// Number of files written
    #[must_use]
    pub fn created(&self) -> usize {
        self.count(|outcome| matches!(outcome, Outcome::Created(_)))
    }

    /// Number of artifacts skipped because they existed
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.count(|outcome| matches!(outcome, Outcome::AlreadyExists(_)))
    }

    /// Number of failed artifacts
    #[must_use]
    pub fn failed(&self) -> usize {
        self.count(Outcome::is_failed)
    }

    /// Returns true if any artifact failed
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.failed() > 0
    }

    fn count(&self, predicate: impl Fn(&Outcome) -> bool) -> usize {
        self.entries.iter().filter(|entry| predicate(&entry.outcome)).count()
    }
}

/// Generates the files of one module
pub struct ModuleGenerator {
    config: ScaffoldConfig,
    resolver: PathResolver,
    stubs: StubStore,
    models: Box<dyn ModelScaffolder>,
    migrations: Box<dyn MigrationScaffolder>,
}

impl ModuleGenerator {
    /// Generator using the stub-backed model and migration scaffolders
    #[must_use]
    pub fn new(config: ScaffoldConfig) -> Self {
        let stubs = StubStore::new(&config);
        Self {
            resolver: PathResolver::new(&config),
            models: Box::new(StubModelScaffolder::new(stubs.clone())),
            migrations: Box::new(StubMigrationScaffolder::new(stubs.clone())),
            stubs,
            config,
        }
    }

    /// Replace the path resolver (e.g. to pin the migration timestamp)
    #[must_use]
    pub fn with_resolver(mut self, resolver: PathResolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// Replace the model scaffolder
    #[must_use]
    pub fn with_model_scaffolder(mut self, scaffolder: impl ModelScaffolder + 'static) -> Self {
        self.models = Box::new(scaffolder);
        self
    }

    /// Replace the migration scaffolder
    #[must_use]
    pub fn with_migration_scaffolder(
        mut self,
        scaffolder: impl MigrationScaffolder + 'static,
    ) -> Self {
        self.migrations = Box::new(scaffolder);
        self
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &ScaffoldConfig {
        &self.config
    }

    /// Path resolver in use
    #[must_use]
    pub const fn resolver(&self) -> &PathResolver {
        &self.resolver
    }

    /// Run every selected generator
    #[must_use]
    pub fn run(&self, module: &ModuleName, selection: ArtifactSelection) -> GenerationReport {
        info!(module = %module, "generating module");
        let mut report = GenerationReport::default();

        if selection.model {
            self.generate_model(module, &mut report);
        }
        if selection.controller {
            self.generate_controller(module, &mut report);
        }
        if selection.migration {
            self.generate_migration(module, &mut report);
        }
        if selection.vue {
            self.generate_vue_component(module, &mut report);
        }
        if selection.view {
            self.generate_views(module, &mut report);
        }
        if selection.api {
            self.generate_api_controller(module, &mut report);
        }

        report
    }

    /// Model class through the model scaffolder
    pub fn generate_model(&self, module: &ModuleName, report: &mut GenerationReport) {
        let names = DerivedNames::derive(module);
        let namespace = format!("{}\\Models", self.module_namespace(module));
        let request = ModelRequest {
            fully_qualified_name: format!("{namespace}\\{}", names.model_name),
            namespace,
            class_name: names.model_name,
            table_name: names.table_name,
            destination: self.resolver.resolve(module, ArtifactKind::Model),
        };

        report.record(ArtifactKind::Model, self.models.generate(&request));
    }

    /// Web controller plus `web` routes
    pub fn generate_controller(&self, module: &ModuleName, report: &mut GenerationReport) {
        self.make_controller(module, ArtifactKind::Controller, report);
        self.make_routes(module, RouteKind::Web, report);
    }

    /// API controller plus `api` routes
    pub fn generate_api_controller(&self, module: &ModuleName, report: &mut GenerationReport) {
        self.make_controller(module, ArtifactKind::ApiController, report);
        self.make_routes(module, RouteKind::Api, report);
    }

    /// Create-table migration through the migration scaffolder
    pub fn generate_migration(&self, module: &ModuleName, report: &mut GenerationReport) {
        let names = DerivedNames::derive(module);
        let request = MigrationRequest {
            migration_name: migration_name(&names.table_name),
            table_name: names.table_name,
            directory: self.resolver.migrations_dir(module),
            destination: self.resolver.resolve(module, ArtifactKind::Migration),
        };

        report.record(ArtifactKind::Migration, self.migrations.generate(&request));
    }

    /// Vue single-file component
    pub fn generate_vue_component(&self, module: &ModuleName, report: &mut GenerationReport) {
        let names = DerivedNames::derive(module);
        let substitutions = SubstitutionMap::new()
            .with("DummyClass", names.class_name)
            .with("DummyRoutePrefix", names.route_prefix);

        self.emit(module, ArtifactKind::VueComponent, substitutions, report);
    }

    /// The create, edit, index and show views
    pub fn generate_views(&self, module: &ModuleName, report: &mut GenerationReport) {
        let names = DerivedNames::derive(module);

        for view in ViewName::ALL {
            let substitutions = SubstitutionMap::new()
                .with("DummyClass", names.class_name.as_str())
                .with("DummyView", view.as_str())
                .with("DummyRoutePrefix", names.route_prefix.as_str())
                .with("DummyModelVariable", names.variable_name.as_str());

            self.emit(module, ArtifactKind::View(view), substitutions, report);
        }
    }

    fn make_controller(&self, module: &ModuleName, kind: ArtifactKind, report: &mut GenerationReport) {
        let names = DerivedNames::derive(module);
        let module_namespace = self.module_namespace(module);
        let controllers = if kind == ArtifactKind::ApiController {
            format!("{module_namespace}\\Controllers\\Api")
        } else {
            format!("{module_namespace}\\Controllers")
        };

        let substitutions = SubstitutionMap::new()
            .with("DummyNamespace", controllers)
            .with("DummyRootNamespace", self.config.root_namespace.as_str())
            .with("DummyClass", format!("{}Controller", names.class_name))
            .with(
                "DummyFullModelClass",
                format!("{module_namespace}\\Models\\{}", names.model_name),
            )
            .with("DummyModelClass", names.model_name.as_str())
            .with("DummyModelVariable", names.variable_name);

        self.emit(module, kind, substitutions, report);
    }

    fn make_routes(&self, module: &ModuleName, route: RouteKind, report: &mut GenerationReport) {
        let names = DerivedNames::derive(module);
        let substitutions = SubstitutionMap::new()
            .with("DummyClass", format!("{}Controller", names.class_name))
            .with("DummyRoutePrefix", names.route_prefix)
            .with("DummyModelVariable", names.variable_name);

        self.emit(module, ArtifactKind::Routes(route), substitutions, report);
    }

    fn emit(
        &self,
        module: &ModuleName,
        kind: ArtifactKind,
        substitutions: SubstitutionMap,
        report: &mut GenerationReport,
    ) {
        let destination = self.resolver.resolve(module, kind);
        let spec = ArtifactSpec::new(kind, destination, substitutions);
        report.record(kind, spec.emit(&self.stubs));
    }

    fn module_namespace(&self, module: &ModuleName) -> String {
        self.config.module_namespace(&module.namespace())
    }
}
