use anyhow::{Context, Result};

use crate::catalog::AppsBackend;
use crate::model::{App, AppPayload, HistoryRecord, Settings};

mod http_client;

mod types;
pub use self::types::*;
mod apps;
mod history;
mod system;

/// Blocking client for the apps backend. Cheap to clone; clones share the
/// connection pool.
#[derive(Clone, Debug)]
pub struct RemoteClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl RemoteClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            anyhow::bail!("backend url is empty");
        }
        // Execution can legitimately take as long as the backend allows.
        let client = reqwest::blocking::Client::builder()
            .user_agent("appdeck")
            .timeout(None)
            .build()
            .context("build reqwest client")?;
        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl AppsBackend for RemoteClient {
    fn list_apps(&self) -> Result<Vec<App>> {
        RemoteClient::list_apps(self)
    }

    fn get_app(&self, id: i64) -> Result<App> {
        RemoteClient::get_app(self, id)
    }

    fn save_app(&self, payload: &AppPayload) -> Result<ApiStatus> {
        match payload.id {
            Some(id) => self.update_app(id, payload),
            None => self.create_app(payload),
        }
    }

    fn delete_app(&self, id: i64) -> Result<ApiStatus> {
        RemoteClient::delete_app(self, id)
    }

    fn reorder_apps(&self, order: &[i64]) -> Result<ApiStatus> {
        RemoteClient::reorder_apps(self, order)
    }

    fn execute_app(&self, id: i64) -> Result<ExecuteResponse> {
        RemoteClient::execute_app(self, id)
    }

    fn list_history(&self, app_id: i64) -> Result<Vec<HistoryRecord>> {
        RemoteClient::list_history(self, app_id)
    }

    fn get_settings(&self) -> Result<Settings> {
        RemoteClient::get_settings(self)
    }

    fn save_sqlite_path(&self, path: &str) -> Result<ApiStatus> {
        RemoteClient::save_sqlite_path(self, path)
    }

    fn restart(&self) -> Result<ApiStatus> {
        RemoteClient::restart(self)
    }
}
