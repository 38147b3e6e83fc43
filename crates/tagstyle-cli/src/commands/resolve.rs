//! Read-only commands: resolve and list

use std::path::Path;

use colored::Colorize;
use serde::Serialize;
use tagstyle_core::{Resolution, StyleRecord};

use crate::context::open_store;
use crate::error::Result;

/// One resolved tag, as emitted by `resolve --json`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ResolvedOutput<'a> {
    tag: &'a str,
    label: &'a str,
    #[serde(flatten)]
    style: &'a StyleRecord,
    source: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    inherited_from: Option<&'a str>,
}

/// Run the resolve command
///
/// Prints the style that applies to each tag, in the order given.
pub fn run_resolve(settings: &Path, tags: &[String], full_path: bool, json: bool) -> Result<()> {
    let store = open_store(settings)?;
    let resolver = store.resolver();
    let resolved = resolver.resolve_tags(tags.iter().map(String::as_str));

    if json {
        let output: Vec<_> = resolved
            .iter()
            .map(|tag| ResolvedOutput {
                tag: &tag.path,
                label: tag.style.display_text(&tag.path, full_path),
                style: tag.style,
                source: source_name(resolver.resolution(&tag.path)),
                inherited_from: tag.inherited_from,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if resolved.is_empty() {
        println!("{}", "(no tags)".dimmed());
        return Ok(());
    }

    for tag in &resolved {
        let origin = match resolver.resolution(&tag.path) {
            Resolution::Exact => "configured".green().to_string(),
            Resolution::Inherited { ancestor } => {
                format!("inherited from {}", ancestor.cyan())
            }
            Resolution::Default => "default".dimmed().to_string(),
        };
        println!(
            "  {:<24} {}  {}",
            tag.path.bold(),
            describe(tag.style, tag.style.display_text(&tag.path, full_path)),
            origin
        );
    }

    Ok(())
}

/// Run the list command
///
/// Lists every configured tag with its explicit style.
pub fn run_list(settings: &Path, json: bool) -> Result<()> {
    let store = open_store(settings)?;

    if json {
        let output = serde_json::json!({
            "default": store.default_record(),
            "tags": &store.settings().tag_configs,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", "Tag Styles".bold());
    println!();
    println!(
        "  {:<24} {}",
        "(default)".dimmed(),
        describe(store.default_record(), "")
    );

    let paths = store.configured_paths();
    if paths.is_empty() {
        println!("  {}", "(no configured tags)".dimmed());
        return Ok(());
    }

    for path in paths {
        let record = store.get(path);
        println!(
            "  {:<24} {}",
            path.cyan(),
            describe(record, record.display_text(path, false))
        );
    }

    Ok(())
}

/// One-line summary of a record.
pub(crate) fn describe(record: &StyleRecord, label: &str) -> String {
    let icon = if record.icon.is_empty() {
        "-".to_string()
    } else {
        record.icon.clone()
    };
    let mut line = format!(
        "[{}] {} on {}",
        icon, record.text_color, record.background_color
    );
    if !label.is_empty() {
        line.push_str(&format!("  \"{}\"", label));
    }
    line
}

fn source_name(resolution: Resolution<'_>) -> &'static str {
    match resolution {
        Resolution::Exact => "configured",
        Resolution::Inherited { .. } => "inherited",
        Resolution::Default => "default",
    }
}
