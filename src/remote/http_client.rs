use super::*;

impl RemoteClient {
    /// Passes 2xx responses through. Error bodies that carry the backend's
    /// `{success, message}` shape surface that message.
    pub(super) fn ensure_ok(
        &self,
        resp: reqwest::blocking::Response,
        label: &str,
    ) -> Result<reqwest::blocking::Response> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body = resp.text().unwrap_or_default();
        log::warn!("{} failed with {}: {}", label, status, body.trim());
        anyhow::bail!(error_message(label, status, &body))
    }

    /// Decodes an `ApiStatus` body and turns `success: false` into an error.
    pub(super) fn expect_success(
        &self,
        resp: reqwest::blocking::Response,
        label: &str,
    ) -> Result<ApiStatus> {
        let status: ApiStatus = self
            .ensure_ok(resp, label)?
            .json()
            .with_context(|| format!("parse {} response", label))?;
        if !status.success {
            log::warn!("{} rejected: {:?}", label, status.message);
            anyhow::bail!(rejected_message(label, &status));
        }
        Ok(status)
    }

    pub(super) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

pub(super) fn error_message(label: &str, status: reqwest::StatusCode, body: &str) -> String {
    match serde_json::from_str::<ApiStatus>(body) {
        Ok(ApiStatus {
            message: Some(msg), ..
        }) if !msg.trim().is_empty() => format!("{}: {}", label, msg.trim()),
        _ => format!("{}: server returned {}", label, status),
    }
}

pub(super) fn rejected_message(label: &str, status: &ApiStatus) -> String {
    match status.message.as_deref().map(str::trim) {
        Some(msg) if !msg.is_empty() => format!("{}: {}", label, msg),
        _ => format!("{} failed", label),
    }
}

#[cfg(test)]
#[path = "../tests/remote/http_client_tests.rs"]
mod tests;
