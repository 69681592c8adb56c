//! `make` command: scaffold a module
//!
//! ```bash
//! module-maker make Shop/Order --all
//! module-maker make invoice_items --controller --model
//! ```

use anyhow::Result;
use clap::Args;
use console::{style, Emoji};
use std::path::Path;
use std::process::ExitCode;

use crate::config::ScaffoldConfig;
use crate::scaffold::{ArtifactSelection, GenerationReport, ModuleGenerator, ModuleName, Outcome};

static CHECK: Emoji<'_, '_> = Emoji("✓ ", "+ ");
static SKIP: Emoji<'_, '_> = Emoji("• ", "= ");
static CROSS: Emoji<'_, '_> = Emoji("✗ ", "x ");

/// Arguments of `module-maker make`
#[derive(Debug, Clone, Default, Args)]
#[allow(clippy::struct_excessive_bools)]
pub struct MakeCommand {
    /// Module name; use `/` or `\` for nested modules (e.g. `Shop/Order`)
    pub name: String,

    /// Generate every artifact
    #[arg(long)]
    pub all: bool,

    /// Create-table migration
    #[arg(long)]
    pub migration: bool,

    /// Vue component
    #[arg(long)]
    pub vue: bool,

    /// Create, edit, index and show views
    #[arg(long)]
    pub view: bool,

    /// Controller and web routes
    #[arg(long)]
    pub controller: bool,

    /// Model class
    #[arg(long)]
    pub model: bool,

    /// API controller and api routes
    #[arg(long)]
    pub api: bool,

    /// Exit with status 1 if any artifact failed
    #[arg(long)]
    pub strict: bool,
}

impl MakeCommand {
    /// Artifacts requested by the flags; `--all` implies every other flag
    #[must_use]
    pub const fn selection(&self) -> ArtifactSelection {
        if self.all {
            return ArtifactSelection::all();
        }

        ArtifactSelection {
            model: self.model,
            controller: self.controller,
            migration: self.migration,
            vue: self.vue,
            view: self.view,
            api: self.api,
        }
    }

    /// Generate the module and print one line per artifact
    ///
    /// Per-artifact failures are reported, not returned; the exit code only
    /// reflects them with `--strict`.
    ///
    /// # Errors
    ///
    /// Returns an error if the module name is empty or contains a `.`, `..`
    /// or drive-prefixed segment.
    pub fn execute(&self, config: ScaffoldConfig) -> Result<ExitCode> {
        let module = ModuleName::parse(&self.name);
        if module.is_empty() {
            anyhow::bail!("Module name must not be empty");
        }
        if let Some(segment) = module.escaping_segment() {
            anyhow::bail!("Invalid module name '{}': segment '{segment}' is not allowed", self.name);
        }

        let selection = self.selection();
        if selection.is_empty() {
            println!(
                "Nothing to generate. Pass {} or one of {}.",
                style("--all").yellow(),
                style("--model --controller --migration --vue --view --api").yellow()
            );
            return Ok(ExitCode::SUCCESS);
        }

        println!(
            "\n{} {}",
            style("Making module").cyan().bold(),
            style(&module).green().bold()
        );

        let root = config.project_root.clone();
        let report = ModuleGenerator::new(config).run(&module, selection);
        print_report(&report, &root);

        if self.strict && report.has_failures() {
            return Ok(ExitCode::FAILURE);
        }
        Ok(ExitCode::SUCCESS)
    }
}

/// Print a report with paths shown relative to `root`
pub fn print_report(report: &GenerationReport, root: &Path) {
    println!();
    for entry in report.entries() {
        match &entry.outcome {
            Outcome::Created(path) => println!(
                "  {CHECK}Created {}: {}",
                style(entry.kind).green(),
                style(relative(path, root).display()).dim()
            ),
            Outcome::AlreadyExists(path) => println!(
                "  {SKIP}{} already exists! {}",
                style(entry.kind).yellow(),
                style(relative(path, root).display()).dim()
            ),
            Outcome::Failed(reason) => println!(
                "  {CROSS}Failed {}: {}",
                style(entry.kind).red(),
                reason
            ),
        }
    }

    println!(
        "\n{} created, {} already existed, {} failed",
        style(report.created()).green().bold(),
        style(report.skipped()).yellow(),
        style(report.failed()).red()
    );
}

fn relative<'a>(path: &'a Path, root: &Path) -> &'a Path {
    path.strip_prefix(root).unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_implies_everything() {
        let command = MakeCommand {
            name: "Order".to_string(),
            all: true,
            ..MakeCommand::default()
        };
        assert_eq!(command.selection(), ArtifactSelection::all());
    }

    #[test]
    fn test_individual_flags() {
        let command = MakeCommand {
            name: "Order".to_string(),
            controller: true,
            api: true,
            ..MakeCommand::default()
        };
        let selection = command.selection();
        assert!(selection.controller && selection.api);
        assert!(!selection.model && !selection.migration && !selection.vue && !selection.view);
    }

    #[test]
    fn test_empty_name_rejected() {
        let command = MakeCommand {
            name: " / ".to_string(),
            all: true,
            ..MakeCommand::default()
        };
        assert!(command.execute(ScaffoldConfig::default()).is_err());
    }

    #[test]
    fn test_parent_segments_rejected() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let project = temp_dir.path().join("project");
        let command = MakeCommand {
            name: "../../../../escaped".to_string(),
            vue: true,
            ..MakeCommand::default()
        };

        let err = command.execute(ScaffoldConfig::for_root(&project)).unwrap_err();
        assert!(err.to_string().contains("segment '..' is not allowed"));
        assert!(!temp_dir.path().join("escaped.vue").exists());
        assert!(!project.exists());
    }

    #[test]
    fn test_relative() {
        assert_eq!(
            relative(Path::new("/srv/app/app/Modules/X.php"), Path::new("/srv/app")),
            Path::new("app/Modules/X.php")
        );
        assert_eq!(relative(Path::new("/other/X.php"), Path::new("/srv/app")), Path::new("/other/X.php"));
    }
}
