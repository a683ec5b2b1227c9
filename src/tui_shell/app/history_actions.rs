use crate::catalog::{AppDraft, HistoryField, HistoryStore};

use super::*;

impl App {
    /// History of the selected card, opened from the list.
    pub(in crate::tui_shell) fn open_history_for_selected(&mut self) {
        let Some(app) = self.apps.selected_app() else {
            return;
        };
        let (id, name) = (app.id, app.name.clone());
        match HistoryStore::load(&self.client, id) {
            Ok(store) => self.show_history(name, store),
            Err(err) => self.alert("History", format!("{:#}", err)),
        }
    }

    /// History of the app in the open form; the form is parked until the
    /// view closes.
    pub(in crate::tui_shell) fn open_history_from_form(&mut self) {
        let Some(Modal {
            kind: ModalKind::Form(mut form),
            ..
        }) = self.modal.take()
        else {
            return;
        };
        form.sync_to_draft();
        match HistoryStore::load(&self.client, form.draft.id) {
            Ok(store) => {
                let name = form.draft.name.clone();
                self.stashed_form = Some(form);
                self.show_history(name, store);
            }
            Err(err) => {
                self.open_form(*form);
                self.alert("History", format!("{:#}", err));
            }
        }
    }

    fn show_history(&mut self, app_name: String, store: HistoryStore) {
        let n = store.len();
        let app_id = store.app_id();
        self.history = Some(HistoryView::new(app_name, store));
        self.push_output(vec![format!("{} history versions for app {}", n, app_id)]);
    }

    /// Leaves the history view, bringing back a parked form.
    pub(in crate::tui_shell) fn close_history(&mut self) {
        self.history = None;
        if let Some(form) = self.stashed_form.take() {
            self.open_form(*form);
        }
    }

    /// Copies the selected version into the edit form. Nothing is saved
    /// until the form is submitted.
    pub(in crate::tui_shell) fn apply_selected_history(&mut self) {
        let Some(view) = &self.history else {
            return;
        };
        let Some(record) = view.selected_record().cloned() else {
            return;
        };
        let app_id = view.store.app_id();

        let mut form = match self.stashed_form.take() {
            Some(form) => form,
            None => match self.client.get_app(app_id) {
                Ok(app) => Box::new(FormState::from_draft(AppDraft::from_app(&app))),
                Err(err) => {
                    self.alert("Restore failed", format!("{:#}", err));
                    return;
                }
            },
        };
        form.apply_history(&record);
        self.history = None;
        self.open_form(*form);
        self.push_output(vec![format!(
            "version {} loaded into the form; save to restore it",
            record.id
        )]);
    }

    pub(in crate::tui_shell) fn view_history_field(&mut self, field: HistoryField) {
        let Some(view) = &self.history else {
            return;
        };
        let Some(record) = view.selected_record() else {
            return;
        };
        let id = record.id;
        let Some(text) = view.store.field_text(id, field) else {
            return;
        };
        let title = format!("{} (version {})", field.label(), id);
        let lines = text.lines().map(str::to_string).collect();
        self.open_viewer(title, lines);
    }
}
