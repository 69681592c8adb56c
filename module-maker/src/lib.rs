//! module-maker library
//!
//! Scaffolds modules for a modular PHP application: models, controllers,
//! route files, migrations, Blade views and Vue components, all rendered from
//! stubs.
//!
//! ```rust,no_run
//! use module_maker::config::ScaffoldConfig;
//! use module_maker::scaffold::{ArtifactSelection, ModuleGenerator, ModuleName};
//!
//! let generator = ModuleGenerator::new(ScaffoldConfig::for_root("."));
//! let report = generator.run(&ModuleName::parse("Shop/Order"), ArtifactSelection::all());
//! println!("{} files created", report.created());
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

pub mod commands;
pub mod config;
pub mod error;
pub mod observability;
pub mod scaffold;
pub mod stubs;

pub use config::ScaffoldConfig;
pub use error::ScaffoldError;
pub use scaffold::{ArtifactSelection, GenerationReport, ModuleGenerator, ModuleName, Outcome};
