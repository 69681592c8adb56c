//! Generator configuration
//!
//! Replaces the host framework's ambient path and namespace lookups with one
//! explicit struct. Sources, highest priority first:
//!
//! 1. Environment variables (`MODULE_MAKER_` prefix, e.g. `MODULE_MAKER_VIEWS_ROOT`)
//! 2. The file given with `--config`, otherwise `<root>/module-maker.toml`
//! 3. Hardcoded defaults
//!
//! # Example Configuration
//!
//! ```toml
//! # module-maker.toml
//! modules_root = "app/Modules"
//! views_root = "resources/views"
//! components_root = "resources/js/components"
//! stubs_dir = "resources/stubs"
//! builtin_stubs = true
//! root_namespace = "App\\"
//! modules_namespace = "App\\Modules"
//! ```

use anyhow::Context;
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the per-project configuration file
pub const CONFIG_FILE_NAME: &str = "module-maker.toml";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "MODULE_MAKER_";

/// Where generated files go and how they are namespaced
///
/// Directory fields are relative to [`ScaffoldConfig::project_root`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaffoldConfig {
    /// Project the generator writes into; set from `--root`, never from a file
    #[serde(skip)]
    pub project_root: PathBuf,

    /// Root of the module tree
    pub modules_root: PathBuf,

    /// Root of the Blade view tree
    pub views_root: PathBuf,

    /// Root of the front-end component tree
    pub components_root: PathBuf,

    /// Directory holding customised stubs
    pub stubs_dir: PathBuf,

    /// Fall back to the stubs compiled into the binary
    pub builtin_stubs: bool,

    /// Application root namespace, with trailing separator (`App\`)
    pub root_namespace: String,

    /// Namespace the module tree lives under (`App\Modules`)
    pub modules_namespace: String,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            project_root: PathBuf::from("."),
            modules_root: PathBuf::from("app/Modules"),
            views_root: PathBuf::from("resources/views"),
            components_root: PathBuf::from("resources/js/components"),
            stubs_dir: PathBuf::from("resources/stubs"),
            builtin_stubs: true,
            root_namespace: "App\\".to_string(),
            modules_namespace: "App\\Modules".to_string(),
        }
    }
}

impl ScaffoldConfig {
    /// Defaults anchored at `root`
    #[must_use]
    pub fn for_root(root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: root.into(),
            ..Self::default()
        }
    }

    /// Load configuration for the project at `root`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - An explicit config file was given but does not exist
    /// - A config file contains invalid TOML or mistyped values
    /// - An environment override cannot be converted
    pub fn load(root: &Path, explicit: Option<&Path>) -> anyhow::Result<Self> {
        let figment = Self::figment(root, explicit)?.merge(Env::prefixed(ENV_PREFIX));
        Self::from_figment(root, &figment)
    }

    /// Defaults merged with the project's config file, without environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if the defaults cannot be serialised or an explicit
    /// config file is missing.
    pub fn figment(root: &Path, explicit: Option<&Path>) -> anyhow::Result<Figment> {
        let defaults = toml::to_string(&Self::default()).context("Failed to serialise default config")?;
        let mut figment = Figment::new().merge(Toml::string(&defaults));

        if let Some(path) = explicit {
            if !path.exists() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            figment = figment.merge(Toml::file(path));
        } else {
            let local = root.join(CONFIG_FILE_NAME);
            if local.exists() {
                figment = figment.merge(Toml::file(local));
            }
        }

        Ok(figment)
    }

    /// Extract a config from an assembled figment and anchor it at `root`
    ///
    /// # Errors
    ///
    /// Returns an error if the merged values do not fit the schema.
    pub fn from_figment(root: &Path, figment: &Figment) -> anyhow::Result<Self> {
        let mut config: Self = figment.extract().context("Invalid module-maker configuration")?;
        config.project_root = root.to_path_buf();
        Ok(config)
    }

    /// Module tree under the project root
    #[must_use]
    pub fn modules_dir(&self) -> PathBuf {
        self.project_root.join(&self.modules_root)
    }

    /// View tree under the project root
    #[must_use]
    pub fn views_dir(&self) -> PathBuf {
        self.project_root.join(&self.views_root)
    }

    /// Component tree under the project root
    #[must_use]
    pub fn components_dir(&self) -> PathBuf {
        self.project_root.join(&self.components_root)
    }

    /// Stubs directory under the project root
    #[must_use]
    pub fn stubs_path(&self) -> PathBuf {
        self.project_root.join(&self.stubs_dir)
    }

    /// Namespace of a module (`App\Modules\Shop\Order`)
    #[must_use]
    pub fn module_namespace(&self, module_namespace: &str) -> String {
        let base = self.modules_namespace.trim_end_matches('\\');
        if module_namespace.is_empty() {
            base.to_string()
        } else {
            format!("{base}\\{module_namespace}")
        }
    }
}
