//! Mutating commands: set, add, rename, duplicate, delete, copy, default

use std::path::Path;

use colored::Colorize;
use tagstyle_core::{EditOutcome, TagPath};

use crate::cli::StyleArgs;
use crate::commands::resolve::describe;
use crate::context::open_store;
use crate::error::{CliError, Result};

/// Run the set command
///
/// Overlays the given fields on the tag's current style and saves the
/// result, clearing the entry if it ends up matching the default.
pub fn run_set(settings: &Path, tag: &str, style: &StyleArgs) -> Result<()> {
    let path = TagPath::parse(tag)?;
    let mut store = open_store(settings)?;

    let record = style.apply_to(store.get(path.as_str()));
    let outcome = store.update(path.as_str(), &record)?;
    report_outcome(&outcome);
    Ok(())
}

/// Run the add command
///
/// Creates an entry for a tag that has none, starting from the style it
/// currently resolves to.
pub fn run_add(settings: &Path, tag: &str, style: &StyleArgs) -> Result<()> {
    let path = TagPath::parse(tag)?;
    let mut store = open_store(settings)?;

    let record = style.apply_to(store.get(path.as_str()));
    let added = store.add(tag, &record)?;

    println!(
        "{} Added {} {}",
        "OK".green().bold(),
        added.as_str().cyan(),
        describe(&record, record.display_text(added.as_str(), false))
    );
    Ok(())
}

/// Run the rename command
pub fn run_rename(settings: &Path, from: &str, to: &str, style: &StyleArgs) -> Result<()> {
    let mut store = open_store(settings)?;
    let from = TagPath::normalize(from);

    let current = store.entry(&from).ok_or_else(|| {
        CliError::user(format!(
            "Tag '{}' is not configured. Use 'tagstyle list' to see configured tags.",
            from
        ))
    })?;
    let record = style.apply_to(current);

    match store.rename(&from, to, &record)? {
        EditOutcome::Saved(path) => println!(
            "{} Renamed {} to {}",
            "OK".green().bold(),
            from.cyan(),
            path.as_str().cyan()
        ),
        EditOutcome::Cleared(path) => println!(
            "{} Removed {} ({} matches the default style)",
            "OK".green().bold(),
            from.cyan(),
            path.as_str().cyan()
        ),
    }
    Ok(())
}

/// Run the duplicate command
pub fn run_duplicate(settings: &Path, tag: &str) -> Result<()> {
    let mut store = open_store(settings)?;
    let source = TagPath::normalize(tag);

    let created = store.duplicate(&source)?;

    println!(
        "{} Duplicated {} as {}",
        "OK".green().bold(),
        source.cyan(),
        created.cyan()
    );
    Ok(())
}

/// Run the delete command
pub fn run_delete(settings: &Path, tag: &str) -> Result<()> {
    let mut store = open_store(settings)?;
    let path = TagPath::normalize(tag);

    store.delete(&path)?;

    let fallback = match store.inherited_ancestor(&path) {
        Some(ancestor) => format!("now inherits from {}", ancestor.cyan()),
        None => "now uses the default style".to_string(),
    };
    println!(
        "{} Deleted {} ({})",
        "OK".green().bold(),
        path.cyan(),
        fallback
    );
    Ok(())
}

/// Run the copy command
pub fn run_copy(settings: &Path, from: &str, to: &str) -> Result<()> {
    let target = TagPath::parse(to)?;
    let mut store = open_store(settings)?;
    let source = TagPath::normalize(from);

    let outcome = store.copy_style(&source, target.as_str())?;
    report_outcome(&outcome);
    Ok(())
}

/// Run the default command
///
/// Without style flags, prints the default style.
pub fn run_default(settings: &Path, style: &StyleArgs) -> Result<()> {
    let mut store = open_store(settings)?;

    if style.is_empty() {
        println!(
            "  {:<24} {}",
            "(default)".dimmed(),
            describe(store.default_record(), &store.default_record().alias)
        );
        return Ok(());
    }

    let record = style.apply_to(store.default_record());
    store.set_default(&record)?;

    println!(
        "{} Default style is now {}",
        "OK".green().bold(),
        describe(&record, &record.alias)
    );
    Ok(())
}

fn report_outcome(outcome: &EditOutcome) {
    match outcome {
        EditOutcome::Saved(path) => {
            println!("{} Saved {}", "OK".green().bold(), path.as_str().cyan())
        }
        EditOutcome::Cleared(path) => println!(
            "{} {} matches the default style; no entry kept",
            "OK".green().bold(),
            path.as_str().cyan()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn folder_args() -> StyleArgs {
        StyleArgs {
            icon: Some("folder".into()),
            background_color: Some("#333".into()),
            ..StyleArgs::default()
        }
    }

    #[test]
    fn set_then_delete() {
        let temp = TempDir::new().unwrap();
        let settings = temp.path().join("settings.json");

        run_set(&settings, "#project", &folder_args()).unwrap();
        assert_eq!(open_store(&settings).unwrap().configured_paths(), vec!["project"]);

        run_delete(&settings, "project").unwrap();
        assert!(open_store(&settings).unwrap().is_empty());
    }

    #[test]
    fn set_without_changes_keeps_store_empty() {
        let temp = TempDir::new().unwrap();
        let settings = temp.path().join("settings.json");

        run_set(&settings, "plain", &StyleArgs::default()).unwrap();

        assert!(open_store(&settings).unwrap().is_empty());
        assert!(!settings.exists());
    }

    #[test]
    fn add_rejects_whitespace() {
        let temp = TempDir::new().unwrap();
        let settings = temp.path().join("settings.json");

        let err = run_add(&settings, "tag name", &folder_args()).unwrap_err();
        assert!(matches!(
            err,
            CliError::Core(tagstyle_core::Error::InvalidArgument { .. })
        ));
    }

    #[test]
    fn rename_unknown_tag_is_user_error() {
        let temp = TempDir::new().unwrap();
        let settings = temp.path().join("settings.json");

        let err = run_rename(&settings, "ghost", "new", &StyleArgs::default()).unwrap_err();
        assert!(matches!(err, CliError::User { .. }));
    }

    #[test]
    fn duplicate_and_copy() {
        let temp = TempDir::new().unwrap();
        let settings = temp.path().join("settings.json");
        run_add(&settings, "project", &folder_args()).unwrap();

        run_duplicate(&settings, "#project").unwrap();
        run_copy(&settings, "project/sub", "other").unwrap();

        let store = open_store(&settings).unwrap();
        assert_eq!(
            store.configured_paths(),
            vec!["other", "project", "project-copy"]
        );
    }

    #[test]
    fn default_updates_fallback() {
        let temp = TempDir::new().unwrap();
        let settings = temp.path().join("settings.json");
        let args = StyleArgs {
            icon: Some("tag".into()),
            ..StyleArgs::default()
        };

        run_default(&settings, &args).unwrap();

        let store = open_store(&settings).unwrap();
        assert_eq!(store.get("anything").icon, "tag");
    }
}
