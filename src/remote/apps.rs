//! App CRUD, ordering and execution.

use super::*;

impl RemoteClient {
    pub fn list_apps(&self) -> Result<Vec<App>> {
        log::debug!("GET /api/apps");
        let resp = self
            .client
            .get(self.url("/api/apps"))
            .send()
            .context("list apps")?;
        let apps: Vec<App> = self
            .ensure_ok(resp, "list apps")?
            .json()
            .context("parse apps")?;
        Ok(apps)
    }

    pub fn get_app(&self, id: i64) -> Result<App> {
        log::debug!("GET /api/apps/{}", id);
        let resp = self
            .client
            .get(self.url(&format!("/api/apps/{}", id)))
            .send()
            .with_context(|| format!("get app {}", id))?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            anyhow::bail!("app {} not found", id);
        }

        let app: App = self
            .ensure_ok(resp, "get app")?
            .json()
            .context("parse app")?;
        Ok(app)
    }

    pub fn create_app(&self, payload: &AppPayload) -> Result<ApiStatus> {
        log::debug!("POST /api/apps name={}", payload.name);
        let resp = self
            .client
            .post(self.url("/api/apps"))
            .json(payload)
            .send()
            .context("create app")?;
        self.expect_success(resp, "create app")
    }

    pub fn update_app(&self, id: i64, payload: &AppPayload) -> Result<ApiStatus> {
        log::debug!("PUT /api/apps/{}", id);
        let resp = self
            .client
            .put(self.url(&format!("/api/apps/{}", id)))
            .json(payload)
            .send()
            .with_context(|| format!("update app {}", id))?;
        self.expect_success(resp, "update app")
    }

    pub fn delete_app(&self, id: i64) -> Result<ApiStatus> {
        log::debug!("DELETE /api/apps/{}", id);
        let resp = self
            .client
            .delete(self.url(&format!("/api/apps/{}", id)))
            .send()
            .with_context(|| format!("delete app {}", id))?;
        self.expect_success(resp, "delete app")
    }

    pub fn reorder_apps(&self, order: &[i64]) -> Result<ApiStatus> {
        log::debug!("PUT /api/apps/reorder order={:?}", order);
        let resp = self
            .client
            .put(self.url("/api/apps/reorder"))
            .json(&ReorderRequest { order })
            .send()
            .context("reorder apps")?;
        self.expect_success(resp, "reorder apps")
    }

    /// Runs an app. A failed run is still `Ok`; only transport and HTTP
    /// errors are `Err`.
    pub fn execute_app(&self, id: i64) -> Result<ExecuteResponse> {
        log::debug!("POST /api/apps/{}/execute", id);
        let resp = self
            .client
            .post(self.url(&format!("/api/apps/{}/execute", id)))
            .send()
            .with_context(|| format!("execute app {}", id))?;
        let out: ExecuteResponse = self
            .ensure_ok(resp, "execute app")?
            .json()
            .context("parse execute response")?;
        Ok(out)
    }
}
