use crate::catalog::AppDraft;
use crate::model::HistoryRecord;

use super::super::input::Input;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) enum FormField {
    Name,
    Tags,
    Description,
    Params,
    Code,
    Note,
}

impl FormField {
    pub(in crate::tui_shell) const ALL: [FormField; 6] = [
        FormField::Name,
        FormField::Tags,
        FormField::Description,
        FormField::Params,
        FormField::Code,
        FormField::Note,
    ];

    pub(in crate::tui_shell) fn label(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Tags => "tags",
            FormField::Description => "description",
            FormField::Params => "params",
            FormField::Code => "code",
            FormField::Note => "note",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    fn prev(self) -> Self {
        let n = Self::ALL.len();
        Self::ALL[(self.index() + n - 1) % n]
    }
}

/// Create/edit form: single-line fields are edited through [`Input`]s and
/// copied into the draft before saving.
#[derive(Clone, Debug)]
pub(in crate::tui_shell) struct FormState {
    pub(in crate::tui_shell) draft: AppDraft,
    pub(in crate::tui_shell) focus: FormField,
    pub(in crate::tui_shell) name: Input,
    pub(in crate::tui_shell) description: Input,
    pub(in crate::tui_shell) params: Input,
    pub(in crate::tui_shell) note: Input,
    pub(in crate::tui_shell) code: String,
    /// Chip under the cursor in the tags field; `None` means the pending text.
    pub(in crate::tui_shell) chip: Option<usize>,
}

impl FormState {
    pub(in crate::tui_shell) fn from_draft(draft: AppDraft) -> Self {
        let mut form = Self {
            draft,
            focus: FormField::Name,
            name: Input::default(),
            description: Input::default(),
            params: Input::default(),
            note: Input::default(),
            code: String::new(),
            chip: None,
        };
        form.load_from_draft();
        form
    }

    fn load_from_draft(&mut self) {
        self.name = Input::with_text(&self.draft.name);
        self.description = Input::with_text(&self.draft.description);
        self.params = Input::with_text(&self.draft.params);
        self.note = Input::with_text(&self.draft.note);
        self.code = self.draft.code.clone();
        self.chip = None;
    }

    pub(in crate::tui_shell) fn sync_to_draft(&mut self) {
        self.draft.name = self.name.buf.clone();
        self.draft.description = self.description.buf.clone();
        self.draft.params = self.params.buf.clone();
        self.draft.note = self.note.buf.clone();
        self.draft.code = self.code.clone();
    }

    pub(in crate::tui_shell) fn title(&self) -> String {
        match self.draft.id {
            Some(id) => format!("Edit app {}", id),
            None => "New app".to_string(),
        }
    }

    pub(in crate::tui_shell) fn focused_input(&self) -> Option<&Input> {
        match self.focus {
            FormField::Name => Some(&self.name),
            FormField::Description => Some(&self.description),
            FormField::Params => Some(&self.params),
            FormField::Note => Some(&self.note),
            FormField::Tags | FormField::Code => None,
        }
    }

    fn focused_input_mut(&mut self) -> Option<&mut Input> {
        match self.focus {
            FormField::Name => Some(&mut self.name),
            FormField::Description => Some(&mut self.description),
            FormField::Params => Some(&mut self.params),
            FormField::Note => Some(&mut self.note),
            FormField::Tags | FormField::Code => None,
        }
    }

    fn leave_focus(&mut self) {
        if self.focus == FormField::Tags {
            self.draft.tags.commit_pending();
            self.chip = None;
        }
    }

    pub(in crate::tui_shell) fn selected_chip(&self) -> Option<&str> {
        let idx = self.chip?;
        self.draft.tags.tags().get(idx).map(String::as_str)
    }

    /// Removes the chip under the cursor and keeps the cursor on its neighbour.
    fn remove_selected_chip(&mut self) -> bool {
        let Some(idx) = self.chip else {
            return false;
        };
        let Some(name) = self.selected_chip().map(str::to_string) else {
            self.chip = None;
            return false;
        };
        self.draft.tags.remove_tag(&name);
        let n = self.draft.tags.tags().len();
        self.chip = if n == 0 { None } else { Some(idx.min(n - 1)) };
        true
    }

    pub(in crate::tui_shell) fn focus_next(&mut self) {
        self.leave_focus();
        self.focus = self.focus.next();
    }

    pub(in crate::tui_shell) fn focus_prev(&mut self) {
        self.leave_focus();
        self.focus = self.focus.prev();
    }

    pub(in crate::tui_shell) fn input_char(&mut self, c: char) {
        match self.focus {
            FormField::Tags => {
                self.chip = None;
                self.draft.tags.input_char(c);
            }
            FormField::Code => self.code.push(c),
            _ => {
                if let Some(input) = self.focused_input_mut() {
                    input.insert_char(c);
                }
            }
        }
    }

    /// Enter: a line break in the code field, otherwise the tag commit or
    /// a move to the next field.
    pub(in crate::tui_shell) fn enter(&mut self) {
        match self.focus {
            FormField::Code => self.code.push('\n'),
            FormField::Tags if !self.draft.tags.pending().trim().is_empty() => {
                self.draft.tags.commit_pending();
            }
            _ => self.focus_next(),
        }
    }

    pub(in crate::tui_shell) fn backspace(&mut self) {
        match self.focus {
            FormField::Tags => {
                if !self.remove_selected_chip() {
                    self.draft.tags.backspace();
                }
            }
            FormField::Code => {
                self.code.pop();
            }
            _ => {
                if let Some(input) = self.focused_input_mut() {
                    input.backspace();
                }
            }
        }
    }

    /// Delete: drops the selected chip in the tags field.
    pub(in crate::tui_shell) fn delete(&mut self) {
        match self.focus {
            FormField::Tags => {
                self.remove_selected_chip();
            }
            FormField::Code => {}
            _ => {
                if let Some(input) = self.focused_input_mut() {
                    input.delete();
                }
            }
        }
    }

    pub(in crate::tui_shell) fn move_left(&mut self) {
        if self.focus == FormField::Tags {
            let n = self.draft.tags.tags().len();
            self.chip = match self.chip {
                _ if n == 0 => None,
                None => Some(n - 1),
                Some(i) => Some(i.saturating_sub(1)),
            };
            return;
        }
        if let Some(input) = self.focused_input_mut() {
            input.move_left();
        }
    }

    pub(in crate::tui_shell) fn move_right(&mut self) {
        if self.focus == FormField::Tags {
            let n = self.draft.tags.tags().len();
            self.chip = match self.chip {
                Some(i) if i + 1 < n => Some(i + 1),
                _ => None,
            };
            return;
        }
        if let Some(input) = self.focused_input_mut() {
            input.move_right();
        }
    }

    /// Fills the form from a history version. Unsaved edits are replaced.
    pub(in crate::tui_shell) fn apply_history(&mut self, record: &HistoryRecord) {
        self.draft.apply_history(record);
        self.load_from_draft();
        self.focus = FormField::Note;
    }
}

#[cfg(test)]
#[path = "../../tests/tui_shell/app/form_tests.rs"]
mod tests;
