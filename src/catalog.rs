//! Client-side behavior of the apps console: filtering, ordering, running,
//! editing and history restore. Everything talks to the backend through
//! [`AppsBackend`] so the flows can run against a fake in tests.

use anyhow::Result;

use crate::model::{App, AppPayload, HistoryRecord, Settings};
use crate::remote::{ApiStatus, ExecuteResponse};

mod draft;
mod execute;
mod filter;
mod history_store;
mod list;
mod params;
mod settings;

pub use self::draft::{AppDraft, restore_note};
pub use self::execute::{ConsoleLog, ExecuteFlow, RunOutcome, RunState};
pub use self::filter::{CardListFilter, rendered_tag_text};
pub use self::history_store::{HistoryField, HistoryStore};
pub use self::list::Catalog;
pub use self::params::{ParamsView, format_params};
pub use self::settings::{SettingsSaveReport, save_settings_and_restart, sqlite_path};

pub trait AppsBackend {
    fn list_apps(&self) -> Result<Vec<App>>;
    fn get_app(&self, id: i64) -> Result<App>;
    /// Creates when `payload.id` is `None`, updates otherwise.
    fn save_app(&self, payload: &AppPayload) -> Result<ApiStatus>;
    fn delete_app(&self, id: i64) -> Result<ApiStatus>;
    fn reorder_apps(&self, order: &[i64]) -> Result<ApiStatus>;
    fn execute_app(&self, id: i64) -> Result<ExecuteResponse>;
    fn list_history(&self, app_id: i64) -> Result<Vec<HistoryRecord>>;
    fn get_settings(&self) -> Result<Settings>;
    fn save_sqlite_path(&self, path: &str) -> Result<ApiStatus>;
    fn restart(&self) -> Result<ApiStatus>;
}

#[cfg(test)]
#[path = "tests/catalog/fake_backend.rs"]
pub(crate) mod fake_backend;
