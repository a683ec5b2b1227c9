//! Backend settings and restart.

use super::*;
use crate::model::{SQLITE_PATH_DESCRIPTION, SQLITE_PATH_KEY};

impl RemoteClient {
    pub fn get_settings(&self) -> Result<Settings> {
        log::debug!("GET /api/settings");
        let resp = self
            .client
            .get(self.url("/api/settings"))
            .send()
            .context("get settings")?;
        let settings: Settings = self
            .ensure_ok(resp, "get settings")?
            .json()
            .context("parse settings")?;
        Ok(settings)
    }

    pub fn save_sqlite_path(&self, path: &str) -> Result<ApiStatus> {
        log::info!("saving {} = {}", SQLITE_PATH_KEY, path);
        let mut body = SettingsUpdate::new();
        body.insert(
            SQLITE_PATH_KEY,
            SettingUpdate {
                value: path,
                description: SQLITE_PATH_DESCRIPTION,
            },
        );
        let resp = self
            .client
            .post(self.url("/api/settings"))
            .json(&body)
            .send()
            .context("save settings")?;
        self.expect_success(resp, "save settings")
    }

    pub fn restart(&self) -> Result<ApiStatus> {
        log::info!("requesting backend restart");
        let resp = self
            .client
            .post(self.url("/api/restart"))
            .send()
            .context("restart backend")?;
        self.expect_success(resp, "restart backend")
    }
}
