use std::collections::HashMap;

use anyhow::{Context, Result};

use super::AppsBackend;
use crate::model::HistoryRecord;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HistoryField {
    Params,
    Code,
}

impl HistoryField {
    pub fn label(self) -> &'static str {
        match self {
            HistoryField::Params => "Params",
            HistoryField::Code => "Code",
        }
    }
}

/// History records of one app, keyed by record id, in server order.
#[derive(Clone, Debug, Default)]
pub struct HistoryStore {
    app_id: i64,
    order: Vec<i64>,
    records: HashMap<i64, HistoryRecord>,
}

impl HistoryStore {
    /// Fails for drafts that were never saved: they have no history yet.
    pub fn load(backend: &dyn AppsBackend, app_id: Option<i64>) -> Result<Self> {
        let Some(app_id) = app_id else {
            anyhow::bail!("save the app before viewing history");
        };
        let records = backend
            .list_history(app_id)
            .with_context(|| format!("load history for app {}", app_id))?;
        Ok(Self::from_records(app_id, records))
    }

    pub fn from_records(app_id: i64, records: Vec<HistoryRecord>) -> Self {
        let mut order = Vec::with_capacity(records.len());
        let mut map = HashMap::with_capacity(records.len());
        for record in records {
            if map.contains_key(&record.id) {
                continue;
            }
            order.push(record.id);
            map.insert(record.id, record);
        }
        Self {
            app_id,
            order,
            records: map,
        }
    }

    pub fn app_id(&self) -> i64 {
        self.app_id
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&HistoryRecord> {
        self.records.get(&id)
    }

    /// Record at list position `idx`.
    pub fn nth(&self, idx: usize) -> Option<&HistoryRecord> {
        self.order.get(idx).and_then(|id| self.records.get(id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryRecord> {
        self.order.iter().filter_map(|id| self.records.get(id))
    }

    pub fn field_text(&self, id: i64, field: HistoryField) -> Option<String> {
        let record = self.get(id)?;
        Some(match field {
            HistoryField::Params if record.params.is_empty() => "{}".to_string(),
            HistoryField::Params => record.params.clone(),
            HistoryField::Code => record.code.clone(),
        })
    }
}

#[cfg(test)]
#[path = "../tests/catalog/history_store_tests.rs"]
mod tests;
