//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tagstyle_core::StyleRecord;

/// tagstyle - Resolve and manage display styles for namespaced tags
#[derive(Parser, Debug)]
#[command(name = "tagstyle")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Settings file (defaults to <config dir>/tagstyle/settings.json)
    #[arg(long, global = true, env = "TAGSTYLE_SETTINGS", value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Show the style that applies to each tag
    ///
    /// Examples:
    ///   tagstyle resolve project/task        # inherited from "project" if configured
    ///   tagstyle resolve '#work' personal    # several tags, in order
    Resolve {
        /// Tags to resolve (a leading '#' is ignored)
        #[arg(required = true)]
        tags: Vec<String>,

        /// Show the full path instead of the last segment when no alias is set
        #[arg(long)]
        full_path: bool,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// List configured tags
    List {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Set style fields for a tag
    ///
    /// Unspecified fields keep the style the tag currently resolves to.
    /// If the result matches the default style, the tag's entry is removed.
    Set {
        /// Tag to style
        tag: String,

        #[command(flatten)]
        style: StyleArgs,
    },

    /// Add a configuration for a new tag
    ///
    /// Starts from the style the tag currently resolves to.
    Add {
        /// Tag name (a leading '#' is ignored; no whitespace allowed)
        tag: String,

        #[command(flatten)]
        style: StyleArgs,
    },

    /// Rename a configured tag
    Rename {
        /// Currently configured tag
        from: String,

        /// New tag name
        to: String,

        #[command(flatten)]
        style: StyleArgs,
    },

    /// Duplicate a configured tag under a "-copy" name
    Duplicate {
        /// Configured tag to copy
        tag: String,
    },

    /// Delete a tag's configuration
    Delete {
        /// Configured tag to delete
        tag: String,
    },

    /// Copy the style that applies to one tag onto another
    Copy {
        /// Tag whose current style is copied
        from: String,

        /// Tag receiving the style
        to: String,
    },

    /// Show or change the default style
    Default {
        #[command(flatten)]
        style: StyleArgs,
    },
}

/// Style field overrides shared by editing commands
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleArgs {
    /// Icon identifier
    #[arg(long)]
    pub icon: Option<String>,

    /// Text color
    #[arg(long)]
    pub text_color: Option<String>,

    /// Background color
    #[arg(long)]
    pub background_color: Option<String>,

    /// Display alias (empty string clears it)
    #[arg(long)]
    pub alias: Option<String>,
}

impl StyleArgs {
    /// Check if no field was given.
    pub fn is_empty(&self) -> bool {
        self.icon.is_none()
            && self.text_color.is_none()
            && self.background_color.is_none()
            && self.alias.is_none()
    }

    /// Overlay the given fields on `base`.
    pub fn apply_to(&self, base: &StyleRecord) -> StyleRecord {
        let mut record = base.clone();
        if let Some(icon) = &self.icon {
            record.icon = icon.clone();
        }
        if let Some(color) = &self.text_color {
            record.text_color = color.clone();
        }
        if let Some(color) = &self.background_color {
            record.background_color = color.clone();
        }
        if let Some(alias) = &self.alias {
            record.alias = alias.clone();
        }
        record
    }
}
