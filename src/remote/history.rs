use super::*;

impl RemoteClient {
    pub fn list_history(&self, app_id: i64) -> Result<Vec<HistoryRecord>> {
        log::debug!("GET /api/apps/{}/history", app_id);
        let resp = self
            .client
            .get(self.url(&format!("/api/apps/{}/history", app_id)))
            .send()
            .with_context(|| format!("list history for app {}", app_id))?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            anyhow::bail!("app {} not found", app_id);
        }

        let records: Vec<HistoryRecord> = self
            .ensure_ok(resp, "list history")?
            .json()
            .context("parse history")?;
        Ok(records)
    }
}
