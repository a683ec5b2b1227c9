use anyhow::Result;

use super::AppsBackend;
use crate::model::{App, AppPayload, HistoryRecord};
use crate::remote::ApiStatus;
use crate::tags::TagChipEditor;

/// Pending contents of the create/edit form.
#[derive(Clone, Debug, Default)]
pub struct AppDraft {
    pub id: Option<i64>,
    pub name: String,
    pub tags: TagChipEditor,
    pub description: String,
    pub params: String,
    pub code: String,
    pub note: String,
}

impl AppDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_app(app: &App) -> Self {
        Self {
            id: app.id,
            name: app.name.clone(),
            tags: TagChipEditor::from_csv(&app.tags),
            description: app.description.clone(),
            params: app.params.clone(),
            code: app.code.clone(),
            note: String::new(),
        }
    }

    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    /// Copies a history snapshot into the form. The id stays, so saving
    /// updates the same app.
    pub fn apply_history(&mut self, record: &HistoryRecord) {
        self.name = record.app_name.clone();
        self.tags.load_csv(&record.tags);
        self.description = record.description.clone();
        self.params = record.params.clone();
        self.code = record.code.clone();
        self.note = restore_note(record);
    }

    /// Commits pending tag text and validates; nothing is sent when this fails.
    pub fn submit(&mut self) -> Result<AppPayload> {
        self.tags.commit_pending();
        if self.note.trim().is_empty() {
            anyhow::bail!("a note is required to save");
        }
        Ok(AppPayload {
            id: self.id,
            name: self.name.clone(),
            tags: self.tags.csv().to_string(),
            description: self.description.clone(),
            params: self.params.clone(),
            code: self.code.clone(),
            note: self.note.clone(),
        })
    }

    pub fn save(&mut self, backend: &dyn AppsBackend) -> Result<ApiStatus> {
        let payload = self.submit()?;
        log::info!(
            "saving app {} ({})",
            payload.name,
            payload
                .id
                .map(|id| format!("id {}", id))
                .unwrap_or_else(|| "new".to_string())
        );
        backend.save_app(&payload)
    }
}

pub fn restore_note(record: &HistoryRecord) -> String {
    format!(
        "Restored from history (id: {}, time: {})",
        record.id, record.created_at
    )
}

#[cfg(test)]
#[path = "../tests/catalog/draft_tests.rs"]
mod tests;
