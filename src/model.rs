use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Deserializer, Serialize};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

pub const SQLITE_PATH_KEY: &str = "sqlite_path";
pub const SQLITE_PATH_DESCRIPTION: &str = "SQLite database file path";

// Nullable TEXT columns come back as `null`; the client treats them as empty.
fn null_as_empty<'de, D>(d: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(d)?.unwrap_or_default())
}

/// An app as stored by the backend.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct App {
    #[serde(default)]
    pub id: Option<i64>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,

    /// Comma-separated tag names.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,

    /// JSON object text handed to the code at run time; may be empty or invalid.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub params: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub code: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub note: String,

    #[serde(default)]
    pub position: Option<i64>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl App {
    pub fn tag_names(&self) -> Vec<&str> {
        crate::tags::split_tags(&self.tags).collect()
    }
}

/// Body of `POST /api/apps` and `PUT /api/apps/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppPayload {
    pub id: Option<i64>,
    pub name: String,
    pub tags: String,
    pub description: String,
    pub params: String,
    pub code: String,
    pub note: String,
}

/// Read-only snapshot of an app taken on every save.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub id: i64,

    #[serde(default)]
    pub app_id: Option<i64>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub app_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub params: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub code: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub note: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub created_at: String,
}

/// A backend setting. Older backends return the bare value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Entry {
        value: String,
        #[serde(default)]
        description: Option<String>,
    },
    Plain(String),
}

impl SettingValue {
    pub fn value(&self) -> &str {
        match self {
            SettingValue::Entry { value, .. } => value,
            SettingValue::Plain(value) => value,
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            SettingValue::Entry { description, .. } => description.as_deref(),
            SettingValue::Plain(_) => None,
        }
    }
}

pub type Settings = BTreeMap<String, SettingValue>;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ClientConfig {
    pub version: u32,

    pub base_url: String,

    /// Log file path; defaults to `appdeck.log` next to the config file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,

    /// One of error|warn|info|debug|trace.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            version: 1,
            base_url: DEFAULT_BASE_URL.to_string(),
            log_file: None,
            log_level: None,
        }
    }
}
