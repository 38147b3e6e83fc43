//! Persisted settings shape and load-time validation
//!
//! The host persists one JSON object. This crate owns two keys in it:
//!
//! ```text
//! {
//!   "defaultConfig": { "icon": "hash", "textColor": "#fff", ... },
//!   "tagConfigs": { "project": { ... }, "project/task": { ... } }
//! }
//! ```
//!
//! Any other top-level keys belong to the host and are carried through
//! unchanged.

use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::{Result, StyleRecord};

const DEFAULT_CONFIG_KEY: &str = "defaultConfig";
const TAG_CONFIGS_KEY: &str = "tagConfigs";

/// Complete persisted state of the style store.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleSettings {
    /// Record applied when neither the tag nor any ancestor is configured
    pub default_config: StyleRecord,

    /// Explicit per-path records
    pub tag_configs: BTreeMap<String, StyleRecord>,

    /// Host-owned keys, preserved verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// What load-time validation had to repair.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoadReport {
    /// Keys of `tagConfigs` entries dropped because their value was malformed
    pub dropped_entries: Vec<String>,

    /// Default record fields filled in from compiled-in defaults
    pub backfilled_fields: Vec<&'static str>,

    /// Top-level sections that had the wrong JSON type and were ignored
    pub invalid_sections: Vec<&'static str>,
}

impl LoadReport {
    /// True when the loaded data needed no repair at all.
    pub fn is_clean(&self) -> bool {
        self.dropped_entries.is_empty()
            && self.backfilled_fields.is_empty()
            && self.invalid_sections.is_empty()
    }
}

impl StyleSettings {
    /// Settings with the given default record and no tag entries.
    pub fn new(default_config: StyleRecord) -> Self {
        Self {
            default_config,
            tag_configs: BTreeMap::new(),
            extra: Map::new(),
        }
    }

    /// Validate a persisted settings blob.
    ///
    /// Never fails: missing default fields are backfilled from
    /// [`StyleRecord::default`], malformed tag entries are dropped, and a
    /// non-object blob is treated as empty. Everything repaired is listed in
    /// the returned [`LoadReport`].
    pub fn from_value(value: Value) -> (Self, LoadReport) {
        let mut report = LoadReport::default();

        let mut root = match value {
            Value::Object(map) => map,
            Value::Null => Map::new(),
            other => {
                tracing::warn!(
                    kind = json_kind(&other),
                    "Persisted settings are not an object; ignoring them"
                );
                report.invalid_sections.push("root");
                Map::new()
            }
        };

        let default_config = match root.remove(DEFAULT_CONFIG_KEY) {
            Some(Value::Object(fields)) => backfill_default(Some(&fields), &mut report),
            None | Some(Value::Null) => backfill_default(None, &mut report),
            Some(other) => {
                tracing::warn!(
                    kind = json_kind(&other),
                    "defaultConfig is not an object; using built-in default"
                );
                report.invalid_sections.push(DEFAULT_CONFIG_KEY);
                backfill_default(None, &mut report)
            }
        };

        let mut tag_configs = BTreeMap::new();
        match root.remove(TAG_CONFIGS_KEY) {
            Some(Value::Object(entries)) => {
                for (key, raw) in entries {
                    if key.trim().is_empty() {
                        tracing::warn!("Dropping tag configuration with an empty path");
                        report.dropped_entries.push(key);
                        continue;
                    }
                    match serde_json::from_value::<StyleRecord>(raw) {
                        Ok(record) => {
                            tag_configs.insert(key, record);
                        }
                        Err(e) => {
                            tracing::warn!(
                                path = %key,
                                error = %e,
                                "Dropping malformed tag configuration"
                            );
                            report.dropped_entries.push(key);
                        }
                    }
                }
            }
            None | Some(Value::Null) => {}
            Some(other) => {
                tracing::warn!(
                    kind = json_kind(&other),
                    "tagConfigs is not an object; ignoring it"
                );
                report.invalid_sections.push(TAG_CONFIGS_KEY);
            }
        }

        let settings = Self {
            default_config,
            tag_configs,
            extra: root,
        };
        (settings, report)
    }

    /// Serialize to the persisted JSON shape.
    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

impl Default for StyleSettings {
    fn default() -> Self {
        Self::new(StyleRecord::default())
    }
}

/// Build the default record from whatever string fields were persisted.
fn backfill_default(fields: Option<&Map<String, Value>>, report: &mut LoadReport) -> StyleRecord {
    let mut record = StyleRecord::default();
    let mut take = |name: &'static str, slot: &mut String| {
        match fields.and_then(|f| f.get(name)) {
            Some(Value::String(s)) => *slot = s.clone(),
            _ => report.backfilled_fields.push(name),
        }
    };

    take("icon", &mut record.icon);
    take("textColor", &mut record.text_color);
    take("backgroundColor", &mut record.background_color);
    take("alias", &mut record.alias);

    record
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
