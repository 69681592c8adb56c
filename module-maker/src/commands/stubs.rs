//! `stubs` command: manage customised stubs
//!
//! - `list` - Show every stub and whether it is customised
//! - `publish` - Copy the built-in stubs into the stubs directory
//! - `diff` - Show changes from the built-in copy
//! - `reset` - Delete a customised copy

use anyhow::{Context, Result};
use clap::Subcommand;
use console::{style, Emoji};
use dialoguer::Confirm;
use similar::{ChangeTag, TextDiff};
use std::fs;

use crate::config::ScaffoldConfig;
use crate::scaffold::{Published, StubSource, StubStore};
use crate::stubs::Stub;

static CHECK: Emoji<'_, '_> = Emoji("✓ ", "");
static FOLDER: Emoji<'_, '_> = Emoji("📁 ", "");
static FILE: Emoji<'_, '_> = Emoji("📄 ", "");
static CUSTOM: Emoji<'_, '_> = Emoji("✨ ", "* ");
static DEFAULT: Emoji<'_, '_> = Emoji("  ", "  ");

/// Stub management subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum StubsCommand {
    /// List stubs and their customisation status
    List,
    /// Copy built-in stubs into the stubs directory for editing
    Publish {
        /// Overwrite stubs that were already published
        #[arg(long)]
        force: bool,
    },
    /// Show the difference between a customised stub and the built-in one
    Diff {
        /// Stub name (e.g. `model.stub`); all customised stubs when omitted
        stub: Option<String>,
    },
    /// Delete a customised stub so the built-in one is used again
    Reset {
        /// Stub name (e.g. `routes.api.stub`)
        stub: String,
        /// Do not ask for confirmation
        #[arg(long, short)]
        yes: bool,
    },
}

impl StubsCommand {
    /// Execute the stubs command
    ///
    /// # Errors
    ///
    /// Returns error if a stub name is unknown or a file operation fails.
    pub fn execute(self, config: &ScaffoldConfig) -> Result<()> {
        let store = StubStore::new(config);
        match self {
            Self::List => {
                list_stubs(&store);
                Ok(())
            }
            Self::Publish { force } => publish_stubs(&store, force),
            Self::Diff { stub } => diff_stubs(&store, stub.as_deref()),
            Self::Reset { stub, yes } => reset_stub(&store, &stub, yes),
        }
    }
}

/// Parse a stub name given on the command line
///
/// # Errors
///
/// Returns an error naming the available stubs if `name` is unknown.
pub fn parse_stub(name: &str) -> Result<Stub> {
    Stub::from_file_name(name).with_context(|| {
        let available: Vec<_> = Stub::ALL.iter().map(|stub| stub.file_name()).collect();
        format!("Unknown stub: {name}. Available: {}", available.join(", "))
    })
}

/// Line diff from the built-in copy to the customised one
///
/// Each line is prefixed with `-`, `+` or a space.
#[must_use]
pub fn diff_lines(builtin: &str, customized: &str) -> Vec<String> {
    TextDiff::from_lines(builtin, customized)
        .iter_all_changes()
        .map(|change| {
            let sign = match change.tag() {
                ChangeTag::Delete => '-',
                ChangeTag::Insert => '+',
                ChangeTag::Equal => ' ',
            };
            format!("{sign}{}", change.value().trim_end_matches('\n'))
        })
        .collect()
}

fn list_stubs(store: &StubStore) {
    println!("{FOLDER}Stubs");
    println!();
    println!("  Directory: {}", style(store.stubs_dir().display()).cyan());
    println!();

    let mut customized = 0;
    for stub in Stub::ALL {
        match store.source(stub) {
            Some(StubSource::Customized(_)) => {
                println!("  {CUSTOM}{}", style(stub).yellow());
                customized += 1;
            }
            Some(StubSource::Builtin) => println!("  {DEFAULT}{}", style(stub).dim()),
            None => println!("  {DEFAULT}{} {}", style(stub).red(), style("(missing)").red()),
        }
    }

    println!();
    println!(
        "  {} customised, {} built-in",
        style(customized).yellow(),
        style(Stub::ALL.len() - customized).dim()
    );
}

fn publish_stubs(store: &StubStore, force: bool) -> Result<()> {
    for stub in Stub::ALL {
        match store.publish(stub, force)? {
            Published::Written(path) => println!("  {CHECK}{}", style(path.display()).green()),
            Published::Kept(path) => println!(
                "  {DEFAULT}{} {}",
                style(path.display()).dim(),
                style("(kept, use --force to overwrite)").dim()
            ),
        }
    }
    Ok(())
}

fn diff_stubs(store: &StubStore, name: Option<&str>) -> Result<()> {
    let selected = match name {
        Some(name) => {
            let stub = parse_stub(name)?;
            if !store.is_customized(stub) {
                anyhow::bail!("Stub '{stub}' is not customised");
            }
            vec![stub]
        }
        None => Stub::ALL
            .into_iter()
            .filter(|stub| store.is_customized(*stub))
            .collect(),
    };

    if selected.is_empty() {
        println!("No customised stubs found.");
        return Ok(());
    }

    for stub in selected {
        let path = store.customized_path(stub);
        let customized = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        println!("{FILE}{}", style(stub).bold());
        println!();
        for line in diff_lines(stub.builtin(), &customized) {
            match line.chars().next() {
                Some('-') => println!("{}", style(line).red()),
                Some('+') => println!("{}", style(line).green()),
                _ => println!("{line}"),
            }
        }
        println!();
    }

    Ok(())
}

fn reset_stub(store: &StubStore, name: &str, yes: bool) -> Result<()> {
    let stub = parse_stub(name)?;
    let path = store.customized_path(stub);

    if !store.is_customized(stub) {
        println!("Stub '{stub}' is not customised (using built-in)");
        return Ok(());
    }

    let confirmed = yes
        || Confirm::new()
            .with_prompt(format!("Delete {}?", path.display()))
            .default(false)
            .interact()
            .context("Failed to read confirmation")?;

    if !confirmed {
        println!("Aborted.");
        return Ok(());
    }

    fs::remove_file(&path).with_context(|| format!("Failed to delete {}", path.display()))?;
    println!("{CHECK}Reset {stub} to built-in");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_stub() {
        assert_eq!(parse_stub("view.stub").unwrap(), Stub::View);
        let err = parse_stub("nope").unwrap_err().to_string();
        assert!(err.contains("Unknown stub: nope"));
        assert!(err.contains("model.stub"));
    }

    #[test]
    fn test_diff_lines() {
        let lines = diff_lines("a\nb\nc\n", "a\nB\nc\n");
        assert_eq!(lines, [" a", "-b", "+B", " c"]);
    }

    #[test]
    fn test_reset_with_yes_removes_copy() {
        let temp_dir = TempDir::new().unwrap();
        let config = ScaffoldConfig::for_root(temp_dir.path());

        StubsCommand::Publish { force: false }.execute(&config).unwrap();
        let store = StubStore::new(&config);
        assert!(store.is_customized(Stub::View));

        StubsCommand::Reset {
            stub: "view".to_string(),
            yes: true,
        }
        .execute(&config)
        .unwrap();

        assert!(!store.is_customized(Stub::View));
        assert!(store.is_customized(Stub::Model));
    }

    #[test]
    fn test_diff_requires_customised_stub() {
        let temp_dir = TempDir::new().unwrap();
        let config = ScaffoldConfig::for_root(temp_dir.path());

        let result = StubsCommand::Diff {
            stub: Some("model.stub".to_string()),
        }
        .execute(&config);
        assert!(result.is_err());
    }
}
