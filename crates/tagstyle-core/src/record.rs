//! Style records

use serde::{Deserialize, Serialize};

use crate::path;

/// Visual style for a tag.
///
/// Colors are stored verbatim; no color-format validation happens here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleRecord {
    /// Glyph identifier (may be empty)
    pub icon: String,

    /// Text color specification
    pub text_color: String,

    /// Background color specification
    pub background_color: String,

    /// Display alias; blank means "show the tag path instead"
    #[serde(default)]
    pub alias: String,
}

impl StyleRecord {
    pub fn new(
        icon: impl Into<String>,
        text_color: impl Into<String>,
        background_color: impl Into<String>,
    ) -> Self {
        Self {
            icon: icon.into(),
            text_color: text_color.into(),
            background_color: background_color.into(),
            alias: String::new(),
        }
    }

    /// Set the display alias (builder pattern).
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = alias.into();
        self
    }

    /// Alias with surrounding whitespace removed, or `None` if blank.
    pub fn alias(&self) -> Option<&str> {
        let trimmed = self.alias.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    /// Compare against another record the way the default record is compared.
    ///
    /// All fields must match exactly, except that a blank alias counts the
    /// same as an unset one.
    pub fn is_equivalent_to(&self, other: &StyleRecord) -> bool {
        let aliases_match = self.alias == other.alias
            || (self.alias.trim().is_empty() && other.alias.trim().is_empty());

        self.icon == other.icon
            && self.text_color == other.text_color
            && self.background_color == other.background_color
            && aliases_match
    }

    /// Text a renderer should show for `tag_path` styled with this record.
    ///
    /// The alias wins when set. Otherwise the final path segment is used,
    /// or the whole path when `full_path` is true.
    pub fn display_text<'a>(&'a self, tag_path: &'a str, full_path: bool) -> &'a str {
        match self.alias() {
            Some(alias) => alias,
            None if full_path => tag_path,
            None => path::leaf(tag_path),
        }
    }
}

impl Default for StyleRecord {
    /// The compiled-in default record.
    fn default() -> Self {
        Self::new("hash", "#fff", "#6b7280")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_record_matches_builtin_values() {
        let record = StyleRecord::default();
        assert_eq!(record.icon, "hash");
        assert_eq!(record.text_color, "#fff");
        assert_eq!(record.background_color, "#6b7280");
        assert!(record.alias.is_empty());
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let record = StyleRecord::new("folder", "#fff", "#333").with_alias("Proj");
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            json!({
                "icon": "folder",
                "textColor": "#fff",
                "backgroundColor": "#333",
                "alias": "Proj"
            })
        );
    }

    #[test]
    fn deserialize_fills_missing_alias() {
        let record: StyleRecord = serde_json::from_value(
            json!({"icon": "folder", "textColor": "#fff", "backgroundColor": "#333"}),
        )
        .unwrap();
        assert_eq!(record.alias, "");
    }

    #[test]
    fn blank_alias_is_equivalent_to_unset() {
        let base = StyleRecord::default();
        let spaced = StyleRecord::default().with_alias("   ");
        assert!(spaced.is_equivalent_to(&base));
        assert!(base.is_equivalent_to(&spaced));
    }

    #[test]
    fn padded_alias_is_not_equivalent_to_trimmed_alias() {
        let trimmed = StyleRecord::default().with_alias("Work");
        let padded = StyleRecord::default().with_alias(" Work ");
        assert!(!padded.is_equivalent_to(&trimmed));
        assert!(padded.is_equivalent_to(&padded));
    }

    #[test]
    fn any_field_change_breaks_equivalence() {
        let base = StyleRecord::default();

        let mut icon = base.clone();
        icon.icon = "star".into();
        let mut text = base.clone();
        text.text_color = "#000".into();
        let mut background = base.clone();
        background.background_color = "#fff".into();
        let aliased = base.clone().with_alias("Named");

        for changed in [icon, text, background, aliased] {
            assert!(!changed.is_equivalent_to(&base), "{changed:?}");
        }
    }

    #[test]
    fn display_text_prefers_alias() {
        let record = StyleRecord::default().with_alias("  Work  ");
        assert_eq!(record.display_text("project/task", false), "Work");
    }

    #[test]
    fn display_text_falls_back_to_leaf_or_full_path() {
        let record = StyleRecord::default();
        assert_eq!(record.display_text("project/task", false), "task");
        assert_eq!(record.display_text("project/task", true), "project/task");
    }
}
