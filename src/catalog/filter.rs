use crate::model::App;

/// Keyword + tag visibility predicate for list cards.
#[derive(Clone, Copy, Debug, Default)]
pub struct CardListFilter<'a> {
    pub keyword: &'a str,
    pub tag: Option<&'a str>,
}

impl<'a> CardListFilter<'a> {
    pub fn new(keyword: &'a str, tag: Option<&'a str>) -> Self {
        Self { keyword, tag }
    }

    pub fn is_active(&self) -> bool {
        !self.keyword.is_empty() || self.tag.is_some()
    }

    pub fn is_visible(&self, app: &App) -> bool {
        let keyword = self.keyword.to_lowercase();
        if !app.name.to_lowercase().contains(&keyword) {
            return false;
        }
        match self.tag {
            None => true,
            // Substring over the concatenated chip text, so "ab" matches a
            // card tagged "a,b" and "lab".
            Some(tag) => rendered_tag_text(&app.tags)
                .to_lowercase()
                .contains(&tag.to_lowercase()),
        }
    }

    pub fn visible_indices(&self, apps: &[App]) -> Vec<usize> {
        apps.iter()
            .enumerate()
            .filter(|(_, app)| self.is_visible(app))
            .map(|(i, _)| i)
            .collect()
    }
}

/// Text of a card's tag chips as displayed: each tag trimmed, no separator.
pub fn rendered_tag_text(tags: &str) -> String {
    if tags.is_empty() {
        return String::new();
    }
    tags.split(',').map(str::trim).collect()
}

#[cfg(test)]
#[path = "../tests/catalog/filter_tests.rs"]
mod tests;
