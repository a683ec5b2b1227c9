use anyhow::Result;

use super::AppsBackend;
use crate::model::{SQLITE_PATH_KEY, Settings};
use crate::remote::ApiStatus;

pub fn sqlite_path(settings: &Settings) -> Option<&str> {
    settings.get(SQLITE_PATH_KEY).map(|s| s.value())
}

#[derive(Debug)]
pub struct SettingsSaveReport {
    pub saved: ApiStatus,
    /// The backend may go away mid-request while restarting, so a failed
    /// restart call is reported but does not undo the save.
    pub restart: Result<ApiStatus>,
}

/// Saves the database path and asks the backend to restart. A save failure
/// skips the restart.
pub fn save_settings_and_restart(
    backend: &dyn AppsBackend,
    sqlite_path: &str,
) -> Result<SettingsSaveReport> {
    let sqlite_path = sqlite_path.trim();
    if sqlite_path.is_empty() {
        anyhow::bail!("database path must not be empty");
    }
    let saved = backend.save_sqlite_path(sqlite_path)?;
    let restart = backend.restart();
    if let Err(err) = &restart {
        log::warn!("restart after settings save failed: {:#}", err);
    }
    Ok(SettingsSaveReport { saved, restart })
}

#[cfg(test)]
#[path = "../tests/catalog/settings_tests.rs"]
mod tests;
