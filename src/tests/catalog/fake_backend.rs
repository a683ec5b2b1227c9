//! In-memory `AppsBackend` for exercising catalog flows without HTTP.

use std::cell::RefCell;
use std::collections::HashMap;

use anyhow::Result;

use super::AppsBackend;
use crate::model::{App, AppPayload, HistoryRecord, SettingValue, Settings};
use crate::remote::{ApiStatus, ExecuteResponse};

#[derive(Default)]
pub(crate) struct FakeState {
    pub(crate) apps: Vec<App>,
    pub(crate) history: HashMap<i64, Vec<HistoryRecord>>,
    pub(crate) settings: Settings,
    pub(crate) reject_reorder: bool,
    pub(crate) reject_restart: bool,
    pub(crate) execute: Option<ExecuteResponse>,
    pub(crate) calls: Vec<String>,
    pub(crate) saved: Vec<AppPayload>,
}

#[derive(Default)]
pub(crate) struct FakeBackend {
    pub(crate) state: RefCell<FakeState>,
}

pub(crate) fn app(id: i64, name: &str, tags: &str, created_at: &str) -> App {
    App {
        id: Some(id),
        name: name.to_string(),
        tags: tags.to_string(),
        code: format!("print('{}')", name),
        created_at: Some(created_at.to_string()),
        ..App::default()
    }
}

fn ok() -> ApiStatus {
    ApiStatus {
        success: true,
        message: None,
    }
}

impl FakeBackend {
    pub(crate) fn with_apps(apps: Vec<App>) -> Self {
        let backend = Self::default();
        backend.state.borrow_mut().apps = apps;
        backend
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.state.borrow().calls.clone()
    }

    fn record(&self, call: String) {
        self.state.borrow_mut().calls.push(call);
    }
}

impl AppsBackend for FakeBackend {
    fn list_apps(&self) -> Result<Vec<App>> {
        self.record("list".to_string());
        Ok(self.state.borrow().apps.clone())
    }

    fn get_app(&self, id: i64) -> Result<App> {
        self.record(format!("get {}", id));
        let st = self.state.borrow();
        match st.apps.iter().find(|a| a.id == Some(id)) {
            Some(app) => Ok(app.clone()),
            None => anyhow::bail!("app {} not found", id),
        }
    }

    fn save_app(&self, payload: &AppPayload) -> Result<ApiStatus> {
        self.record(format!("save {:?}", payload.id));
        self.state.borrow_mut().saved.push(payload.clone());
        Ok(ok())
    }

    fn delete_app(&self, id: i64) -> Result<ApiStatus> {
        self.record(format!("delete {}", id));
        self.state.borrow_mut().apps.retain(|a| a.id != Some(id));
        Ok(ok())
    }

    fn reorder_apps(&self, order: &[i64]) -> Result<ApiStatus> {
        self.record(format!("reorder {:?}", order));
        let mut st = self.state.borrow_mut();
        if st.reject_reorder {
            anyhow::bail!("reorder apps: ordering data is invalid");
        }
        let mut next = Vec::new();
        for id in order {
            if let Some(app) = st.apps.iter().find(|a| a.id == Some(*id)) {
                next.push(app.clone());
            }
        }
        st.apps = next;
        Ok(ok())
    }

    fn execute_app(&self, id: i64) -> Result<ExecuteResponse> {
        self.record(format!("execute {}", id));
        match self.state.borrow().execute.clone() {
            Some(resp) => Ok(resp),
            None => anyhow::bail!("execute app {}: connection refused", id),
        }
    }

    fn list_history(&self, app_id: i64) -> Result<Vec<HistoryRecord>> {
        self.record(format!("history {}", app_id));
        Ok(self
            .state
            .borrow()
            .history
            .get(&app_id)
            .cloned()
            .unwrap_or_default())
    }

    fn get_settings(&self) -> Result<Settings> {
        self.record("settings".to_string());
        Ok(self.state.borrow().settings.clone())
    }

    fn save_sqlite_path(&self, path: &str) -> Result<ApiStatus> {
        self.record(format!("save-settings {}", path));
        self.state.borrow_mut().settings.insert(
            crate::model::SQLITE_PATH_KEY.to_string(),
            SettingValue::Entry {
                value: path.to_string(),
                description: Some(crate::model::SQLITE_PATH_DESCRIPTION.to_string()),
            },
        );
        Ok(ok())
    }

    fn restart(&self) -> Result<ApiStatus> {
        self.record("restart".to_string());
        if self.state.borrow().reject_restart {
            anyhow::bail!("restart backend: not supported");
        }
        Ok(ok())
    }
}
