/// Characters that commit the pending input as a tag. Both the ASCII and the
/// full-width comma are accepted; neither ever lands in the input buffer.
pub const TAG_SEPARATORS: [char; 2] = [',', '，'];

/// Ordered, duplicate-free tag set kept in sync with its CSV serialization.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TagChipEditor {
    tags: Vec<String>,
    csv: String,
    pending: String,
}

impl TagChipEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_csv(csv: &str) -> Self {
        let mut editor = Self::new();
        editor.load_csv(csv);
        editor
    }

    /// Replaces all chips with the segments of `csv`, in order.
    pub fn load_csv(&mut self, csv: &str) {
        self.tags.clear();
        self.pending.clear();
        for segment in csv.split(',') {
            self.add_tag(segment);
        }
        self.sync_csv();
    }

    /// Returns true when a chip was added.
    pub fn add_tag(&mut self, raw: &str) -> bool {
        let name = raw.trim();
        if name.is_empty() || self.contains(name) {
            return false;
        }
        self.tags.push(name.to_string());
        self.sync_csv();
        true
    }

    /// Removes the first chip named exactly `name`. Returns true when one was removed.
    pub fn remove_tag(&mut self, name: &str) -> bool {
        let Some(pos) = self.tags.iter().position(|t| t == name) else {
            return false;
        };
        self.tags.remove(pos);
        self.sync_csv();
        true
    }

    pub fn remove_last(&mut self) -> Option<String> {
        let last = self.tags.last()?.clone();
        self.remove_tag(&last);
        Some(last)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tags.iter().any(|t| t == name)
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn csv(&self) -> &str {
        &self.csv
    }

    pub fn pending(&self) -> &str {
        &self.pending
    }

    /// Feeds one typed character. A separator commits the pending text instead
    /// of being inserted; returns true when that produced a new chip.
    pub fn input_char(&mut self, c: char) -> bool {
        if TAG_SEPARATORS.contains(&c) {
            return self.commit_pending();
        }
        self.pending.push(c);
        false
    }

    /// Deletes the last pending character, or the last chip when nothing is pending.
    pub fn backspace(&mut self) -> Option<String> {
        if self.pending.pop().is_some() {
            return None;
        }
        self.remove_last()
    }

    /// Commits the pending text (focus loss / submit). The buffer is only
    /// cleared when the text became a chip, so a rejected duplicate stays visible.
    pub fn commit_pending(&mut self) -> bool {
        let pending = std::mem::take(&mut self.pending);
        if self.add_tag(&pending) {
            true
        } else {
            self.pending = pending;
            false
        }
    }

    fn sync_csv(&mut self) {
        self.csv = self.tags.join(",");
    }
}

#[cfg(test)]
#[path = "../tests/tags/chip_editor_tests.rs"]
mod tests;
