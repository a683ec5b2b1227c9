//! Wire payloads that are not part of the app model.

use std::collections::BTreeMap;

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ApiStatus {
    pub success: bool,

    #[serde(default)]
    pub message: Option<String>,
}

/// Result of `POST /api/apps/{id}/execute`. `success` reflects the exit code
/// of the run; transport failures never produce one of these.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ExecuteResponse {
    pub success: bool,

    #[serde(default)]
    pub output: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub console_output: Option<String>,
    #[serde(default)]
    pub exit_code: Option<i64>,
}

#[derive(Debug, serde::Serialize)]
pub(super) struct ReorderRequest<'a> {
    pub(super) order: &'a [i64],
}

#[derive(Debug, serde::Serialize)]
pub(super) struct SettingUpdate<'a> {
    pub(super) value: &'a str,
    pub(super) description: &'a str,
}

pub(super) type SettingsUpdate<'a> = BTreeMap<&'a str, SettingUpdate<'a>>;
