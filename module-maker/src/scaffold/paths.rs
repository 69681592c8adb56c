//! Destination paths for each artifact kind
//!
//! Pure string computation, no I/O. Nested module names map onto nested
//! directories under the configured roots.

use chrono::{DateTime, Local};
use std::fmt;
use std::path::PathBuf;

use super::names::{DerivedNames, ModuleName};
use crate::config::ScaffoldConfig;
use crate::stubs::Stub;

/// Which route file a controller registers into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteKind {
    /// `Routes/web.php`
    Web,
    /// `Routes/api.php`
    Api,
}

impl RouteKind {
    /// File stem of the routes file
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Api => "api",
        }
    }
}

/// One of the four generated views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewName {
    /// `create.blade.php`
    Create,
    /// `edit.blade.php`
    Edit,
    /// `index.blade.php`
    Index,
    /// `show.blade.php`
    Show,
}

impl ViewName {
    /// The view set, in generation order
    pub const ALL: [Self; 4] = [Self::Create, Self::Edit, Self::Index, Self::Show];

    /// View name as used in file names
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Edit => "edit",
            Self::Index => "index",
            Self::Show => "show",
        }
    }
}

/// Kind of generated file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    /// Eloquent model
    Model,
    /// Web controller
    Controller,
    /// API controller
    ApiController,
    /// Create-table migration
    Migration,
    /// Route registration file
    Routes(RouteKind),
    /// One view of the view set
    View(ViewName),
    /// Vue single-file component
    VueComponent,
}

impl ArtifactKind {
    /// Stub this kind renders from
    #[must_use]
    pub const fn stub(self) -> Stub {
        match self {
            Self::Model => Stub::Model,
            Self::Controller | Self::ApiController => Stub::Controller,
            Self::Migration => Stub::Migration,
            Self::Routes(RouteKind::Web) => Stub::WebRoutes,
            Self::Routes(RouteKind::Api) => Stub::ApiRoutes,
            Self::View(_) => Stub::View,
            Self::VueComponent => Stub::VueComponent,
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Model => f.write_str("Model"),
            Self::Controller => f.write_str("Controller"),
            Self::ApiController => f.write_str("API Controller"),
            Self::Migration => f.write_str("Migration"),
            Self::Routes(kind) => write!(f, "Routes ({})", kind.as_str()),
            Self::View(view) => write!(f, "View ({})", view.as_str()),
            Self::VueComponent => f.write_str("Vue Component"),
        }
    }
}

/// Format of the timestamp prefix on migration file names
pub const MIGRATION_STAMP_FORMAT: &str = "%Y_%m_%d_%H%M%S";

/// Maps a module and artifact kind to a destination file
#[derive(Debug, Clone)]
pub struct PathResolver {
    modules_dir: PathBuf,
    views_dir: PathBuf,
    components_dir: PathBuf,
    migration_stamp: String,
}

impl PathResolver {
    /// Resolver stamping migrations with the current local time
    #[must_use]
    pub fn new(config: &ScaffoldConfig) -> Self {
        Self::at(config, Local::now())
    }

    /// Resolver stamping migrations with a fixed time
    #[must_use]
    pub fn at(config: &ScaffoldConfig, now: DateTime<Local>) -> Self {
        Self {
            modules_dir: config.modules_dir(),
            views_dir: config.views_dir(),
            components_dir: config.components_dir(),
            migration_stamp: now.format(MIGRATION_STAMP_FORMAT).to_string(),
        }
    }

    /// Directory of a module inside the module tree
    #[must_use]
    pub fn module_dir(&self, module: &ModuleName) -> PathBuf {
        module
            .segments()
            .iter()
            .fold(self.modules_dir.clone(), |path, segment| path.join(segment))
    }

    /// Directory holding a module's migrations
    #[must_use]
    pub fn migrations_dir(&self, module: &ModuleName) -> PathBuf {
        self.module_dir(module).join("Migrations")
    }

    /// Timestamp prefix used for migration files
    #[must_use]
    pub fn migration_stamp(&self) -> &str {
        &self.migration_stamp
    }

    /// Destination file for a kind
    ///
    /// # Examples
    ///
    /// ```
    /// # use module_maker::config::ScaffoldConfig;
    /// # use module_maker::scaffold::names::ModuleName;
    /// # use module_maker::scaffold::paths::{ArtifactKind, PathResolver};
    /// # use std::path::PathBuf;
    /// let resolver = PathResolver::new(&ScaffoldConfig::for_root("/srv/app"));
    /// let path = resolver.resolve(&ModuleName::parse("Shop/Order"), ArtifactKind::ApiController);
    /// assert_eq!(
    ///     path,
    ///     PathBuf::from("/srv/app/app/Modules/Shop/Order/Controllers/Api/OrderController.php")
    /// );
    /// ```
    #[must_use]
    pub fn resolve(&self, module: &ModuleName, kind: ArtifactKind) -> PathBuf {
        let names = DerivedNames::derive(module);
        let module_dir = self.module_dir(module);

        match kind {
            ArtifactKind::Model => module_dir
                .join("Models")
                .join(format!("{}.php", names.model_name)),
            ArtifactKind::Controller => module_dir
                .join("Controllers")
                .join(format!("{}Controller.php", names.class_name)),
            ArtifactKind::ApiController => module_dir
                .join("Controllers")
                .join("Api")
                .join(format!("{}Controller.php", names.class_name)),
            ArtifactKind::Migration => self.migrations_dir(module).join(format!(
                "{}_{}.php",
                self.migration_stamp,
                migration_name(&names.table_name)
            )),
            ArtifactKind::Routes(route) => module_dir
                .join("Routes")
                .join(format!("{}.php", route.as_str())),
            ArtifactKind::View(view) => module
                .segments()
                .iter()
                .fold(self.views_dir.clone(), |path, segment| path.join(segment))
                .join(format!("{}.blade.php", view.as_str())),
            ArtifactKind::VueComponent => self
                .components_dir
                .join(format!("{}.vue", module.as_path())),
        }
    }
}

/// Migration name for a table (`create_orders_table`)
#[must_use]
pub fn migration_name(table: &str) -> String {
    format!("create_{table}_table")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn resolver() -> PathResolver {
        let now = Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
        PathResolver::at(&ScaffoldConfig::for_root("/srv/app"), now)
    }

    #[test]
    fn test_controller_path() {
        let path = resolver().resolve(&ModuleName::parse("invoice_items"), ArtifactKind::Controller);
        assert_eq!(
            path,
            PathBuf::from("/srv/app/app/Modules/invoice_items/Controllers/InvoiceItemsController.php")
        );
    }

    #[test]
    fn test_model_path_uses_singular() {
        let path = resolver().resolve(&ModuleName::parse("Invoices"), ArtifactKind::Model);
        assert_eq!(path, PathBuf::from("/srv/app/app/Modules/Invoices/Models/Invoice.php"));
    }

    #[test]
    fn test_routes_paths() {
        let module = ModuleName::parse("Shop/Order");
        assert_eq!(
            resolver().resolve(&module, ArtifactKind::Routes(RouteKind::Web)),
            PathBuf::from("/srv/app/app/Modules/Shop/Order/Routes/web.php")
        );
        assert_eq!(
            resolver().resolve(&module, ArtifactKind::Routes(RouteKind::Api)),
            PathBuf::from("/srv/app/app/Modules/Shop/Order/Routes/api.php")
        );
    }

    #[test]
    fn test_migration_stamp() {
        assert_eq!(resolver().migration_stamp(), "2024_03_09_140507");
    }

    #[test]
    fn test_migration_path() {
        let path = resolver().resolve(&ModuleName::parse("Shop/Order"), ArtifactKind::Migration);
        assert_eq!(
            path,
            PathBuf::from(
                "/srv/app/app/Modules/Shop/Order/Migrations/2024_03_09_140507_create_orders_table.php"
            )
        );
    }

    #[test]
    fn test_view_paths() {
        let module = ModuleName::parse("Shop\\Order");
        let paths: Vec<_> = ViewName::ALL
            .iter()
            .map(|view| resolver().resolve(&module, ArtifactKind::View(*view)))
            .collect();

        assert_eq!(
            paths,
            [
                PathBuf::from("/srv/app/resources/views/Shop/Order/create.blade.php"),
                PathBuf::from("/srv/app/resources/views/Shop/Order/edit.blade.php"),
                PathBuf::from("/srv/app/resources/views/Shop/Order/index.blade.php"),
                PathBuf::from("/srv/app/resources/views/Shop/Order/show.blade.php"),
            ]
        );
    }

    #[test]
    fn test_vue_component_path() {
        let path = resolver().resolve(&ModuleName::parse("Shop/Order"), ArtifactKind::VueComponent);
        assert_eq!(path, PathBuf::from("/srv/app/resources/js/components/Shop/Order.vue"));
    }

    #[test]
    fn test_nested_is_one_level_deeper() {
        let flat = resolver().resolve(&ModuleName::parse("Order"), ArtifactKind::Controller);
        let nested = resolver().resolve(&ModuleName::parse("Shop/Order"), ArtifactKind::Controller);

        assert_eq!(nested.components().count(), flat.components().count() + 1);
        assert_eq!(flat.file_name(), nested.file_name());
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let resolver = resolver();
        let module = ModuleName::parse("shop/Order");
        assert_eq!(
            resolver.resolve(&module, ArtifactKind::Controller),
            resolver.resolve(&module, ArtifactKind::Controller)
        );
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(ArtifactKind::ApiController.to_string(), "API Controller");
        assert_eq!(ArtifactKind::Routes(RouteKind::Api).to_string(), "Routes (api)");
        assert_eq!(ArtifactKind::View(ViewName::Edit).to_string(), "View (edit)");
    }
}
