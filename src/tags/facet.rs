use std::collections::HashMap;

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};

use crate::model::App;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FacetEntry {
    pub tag: String,
    /// Newest `created_at` among the apps carrying this tag.
    pub most_recent: Option<OffsetDateTime>,
}

/// Distinct tags across the loaded apps, newest first, plus the current
/// filter selection.
#[derive(Clone, Debug, Default)]
pub struct TagFacetIndex {
    entries: Vec<FacetEntry>,
    selected: Option<String>,
}

impl TagFacetIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_apps(apps: &[App]) -> Self {
        let mut facet = Self::new();
        facet.rebuild(apps);
        facet
    }

    /// Recomputes every entry from scratch. The selection survives only if its
    /// tag is still present.
    pub fn rebuild(&mut self, apps: &[App]) {
        let mut entries: Vec<FacetEntry> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for app in apps {
            let ts = app.created_at.as_deref().and_then(parse_timestamp);
            for tag in crate::tags::split_tags(&app.tags) {
                match index.get(tag) {
                    Some(&i) => {
                        // `>=` so the later app wins a tie.
                        if ts >= entries[i].most_recent {
                            entries[i].most_recent = ts;
                        }
                    }
                    None => {
                        index.insert(tag.to_string(), entries.len());
                        entries.push(FacetEntry {
                            tag: tag.to_string(),
                            most_recent: ts,
                        });
                    }
                }
            }
        }

        // Stable: equal timestamps keep first-seen order; `None` sorts last.
        entries.sort_by(|a, b| b.most_recent.cmp(&a.most_recent));

        self.entries = entries;
        if let Some(sel) = &self.selected
            && !self.entries.iter().any(|e| &e.tag == sel)
        {
            log::debug!("facet selection '{}' dropped after rebuild", sel);
            self.selected = None;
        }
    }

    pub fn entries(&self) -> &[FacetEntry] {
        &self.entries
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.tag.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Selects `tag`, or clears the filter with `None`. Unknown tags are refused.
    pub fn select(&mut self, tag: Option<&str>) -> bool {
        match tag {
            None => {
                self.selected = None;
                true
            }
            Some(t) if self.entries.iter().any(|e| e.tag == t) => {
                self.selected = Some(t.to_string());
                true
            }
            Some(_) => false,
        }
    }

    /// Cycles "no filter" -> newest tag -> ... -> oldest tag -> "no filter".
    pub fn select_next(&mut self) {
        let next = match self.selected_pos() {
            None => 0,
            Some(i) => i + 1,
        };
        self.selected = self.entries.get(next).map(|e| e.tag.clone());
    }

    pub fn select_prev(&mut self) {
        self.selected = match self.selected_pos() {
            None => self.entries.last().map(|e| e.tag.clone()),
            Some(0) => None,
            Some(i) => Some(self.entries[i - 1].tag.clone()),
        };
    }

    fn selected_pos(&self) -> Option<usize> {
        let sel = self.selected.as_deref()?;
        self.entries.iter().position(|e| e.tag == sel)
    }
}

/// Parses RFC 3339 or the backend's `YYYY-MM-DD HH:MM:SS` form (taken as UTC).
pub fn parse_timestamp(raw: &str) -> Option<OffsetDateTime> {
    let raw = raw.trim();
    if let Ok(ts) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(ts);
    }
    PrimitiveDateTime::parse(
        raw,
        format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"),
    )
    .or_else(|_| {
        PrimitiveDateTime::parse(
            raw,
            format_description!("[year]-[month]-[day] [hour]:[minute]:[second].[subsecond]"),
        )
    })
    .or_else(|_| {
        PrimitiveDateTime::parse(
            raw,
            format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
        )
    })
    .ok()
    .map(PrimitiveDateTime::assume_utc)
}

#[cfg(test)]
#[path = "../tests/tags/facet_tests.rs"]
mod tests;
