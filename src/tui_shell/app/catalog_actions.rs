use std::thread;
use std::time::Duration;

use crate::catalog::{AppDraft, RunOutcome, format_params, save_settings_and_restart, sqlite_path};
use crate::remote::ApiStatus;

use super::*;

/// Delay between a backend restart and the list reload.
const RESTART_RELOAD_DELAY: Duration = Duration::from_secs(2);

fn status_text(status: &ApiStatus, fallback: &str) -> String {
    status
        .message
        .clone()
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

fn run_summary(app_id: i64, outcome: &RunOutcome) -> (EntryKind, String) {
    match outcome {
        RunOutcome::Succeeded { .. } => (EntryKind::Output, format!("app {} ran successfully", app_id)),
        RunOutcome::Failed { error, .. } => {
            (EntryKind::Error, format!("app {} failed: {}", app_id, error))
        }
        RunOutcome::RequestFailed { message } => (
            EntryKind::Error,
            format!("app {} could not be run: {}", app_id, message),
        ),
    }
}

/// The open run dialog's flow, when that dialog belongs to `app_id`.
fn dialog_flow(modal: Option<&mut Modal>, app_id: i64) -> Option<&mut ExecuteFlow> {
    match modal {
        Some(Modal {
            kind: ModalKind::Run(dialog),
            ..
        }) if dialog.flow.app_id() == app_id => Some(&mut dialog.flow),
        _ => None,
    }
}

impl App {
    pub(in crate::tui_shell) fn reload_apps(&mut self) {
        match self.apps.catalog.reload(&self.client) {
            Ok(()) => {
                self.apps.updated_at = now_ts();
                self.apps.clamp_selection();
                let n = self.apps.catalog.apps().len();
                self.push_output(vec![format!("loaded {} apps", n)]);
            }
            Err(err) => {
                self.apps.clamp_selection();
                self.alert("Load failed", format!("{:#}", err));
            }
        }
    }

    pub(in crate::tui_shell) fn set_keyword_from_input(&mut self) {
        let keyword = self.input.buf.clone();
        self.apps.catalog.set_keyword(keyword);
        self.apps.clamp_selection();
    }

    pub(in crate::tui_shell) fn cycle_facet(&mut self, forward: bool) {
        let facet = self.apps.catalog.facet_mut();
        if forward {
            facet.select_next();
        } else {
            facet.select_prev();
        }
        self.apps.clamp_selection();
    }

    /// Moves the selected card one slot and saves the new order.
    pub(in crate::tui_shell) fn move_selected(&mut self, up: bool) {
        if self.apps.catalog.filter().is_active() {
            self.push_error("clear the search and tag filter before reordering".to_string());
            return;
        }
        let Some(from) = self.apps.selected_index() else {
            return;
        };
        let to = if up {
            match from.checked_sub(1) {
                Some(to) => to,
                None => return,
            }
        } else {
            from + 1
        };
        if to >= self.apps.catalog.apps().len() {
            return;
        }

        match self.apps.catalog.move_and_persist(from, to, &self.client) {
            Ok(true) => {
                self.apps.selected = to;
                self.apps.updated_at = now_ts();
                self.push_output(vec!["card order saved".to_string()]);
            }
            Ok(false) => {}
            Err(err) => {
                self.apps.updated_at = now_ts();
                self.apps.clamp_selection();
                self.alert("Reorder failed", format!("{:#}", err));
            }
        }
    }

    pub(in crate::tui_shell) fn open_run_dialog(&mut self) {
        let Some(app) = self.apps.selected_app() else {
            return;
        };
        let Some(id) = app.id else {
            return;
        };
        let dialog = RunDialog {
            flow: ExecuteFlow::new(id),
            name: app.name.clone(),
            description: app.description.clone(),
            params: format_params(&app.params),
        };
        let title = format!("Run {}", app.name);
        self.open_modal(title, ModalKind::Run(Box::new(dialog)));
    }

    /// Starts the open run dialog's app on a worker thread.
    pub(in crate::tui_shell) fn start_run(&mut self) {
        if let Some(busy) = self.running_app() {
            self.push_error(format!("app {} is still running", busy));
            return;
        }
        let Some(Modal {
            kind: ModalKind::Run(dialog),
            ..
        }) = self.modal.as_mut()
        else {
            return;
        };
        let begun = dialog.flow.begin().map(|()| dialog.flow.app_id());
        let app_id = match begun {
            Ok(id) => id,
            Err(err) => {
                self.push_error(format!("{:#}", err));
                return;
            }
        };

        let client = self.client.clone();
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let _ = tx.send(client.execute_app(app_id));
        });
        self.pending_run = Some(PendingRun { app_id, rx });
    }

    /// Hands a finished run to its dialog, or to the log when the dialog was closed.
    pub(in crate::tui_shell) fn poll_run(&mut self) {
        let Some(pending) = &self.pending_run else {
            return;
        };
        let result = match pending.rx.try_recv() {
            Ok(result) => result,
            Err(mpsc::TryRecvError::Empty) => return,
            Err(mpsc::TryRecvError::Disconnected) => {
                Err(anyhow::anyhow!("execution worker exited"))
            }
        };
        let app_id = pending.app_id;
        self.pending_run = None;

        let (kind, line) = match dialog_flow(self.modal.as_mut(), app_id) {
            Some(flow) => run_summary(app_id, flow.finish(result)),
            None => {
                let mut flow = ExecuteFlow::new(app_id);
                let _ = flow.begin();
                run_summary(app_id, flow.finish(result))
            }
        };
        match kind {
            EntryKind::Output => self.push_output(vec![line]),
            EntryKind::Error => self.push_error(line),
        }
    }

    pub(in crate::tui_shell) fn open_new_form(&mut self) {
        self.open_form(FormState::from_draft(AppDraft::new()));
    }

    pub(in crate::tui_shell) fn open_edit_form(&mut self) {
        let Some(id) = self.apps.selected_app().and_then(|a| a.id) else {
            return;
        };
        match self.client.get_app(id) {
            Ok(app) => self.open_form(FormState::from_draft(AppDraft::from_app(&app))),
            Err(err) => self.alert("Load failed", format!("{:#}", err)),
        }
    }

    pub(in crate::tui_shell) fn submit_form(&mut self) {
        let Some(Modal {
            kind: ModalKind::Form(mut form),
            ..
        }) = self.modal.take()
        else {
            return;
        };
        form.sync_to_draft();
        match form.draft.save(&self.client) {
            Ok(status) => {
                let fallback = if form.draft.is_new() {
                    "app created"
                } else {
                    "app updated"
                };
                self.push_output(vec![status_text(&status, fallback)]);
                self.reload_apps();
            }
            Err(err) => {
                self.open_form(*form);
                self.alert("Save failed", format!("{:#}", err));
            }
        }
    }

    pub(in crate::tui_shell) fn confirm_delete(&mut self) {
        let Some(app) = self.apps.selected_app() else {
            return;
        };
        let Some(app_id) = app.id else {
            return;
        };
        let lines = vec![
            format!("Delete app '{}' (id {})?", app.name, app_id),
            "Its history is deleted with it.".to_string(),
            String::new(),
            "Enter to confirm; Esc to cancel.".to_string(),
        ];
        self.open_modal_with_lines("Delete app", lines, ModalKind::ConfirmDelete { app_id });
    }

    pub(in crate::tui_shell) fn delete_app(&mut self, app_id: i64) {
        self.close_modal();
        match self.client.delete_app(app_id) {
            Ok(status) => {
                self.push_output(vec![status_text(&status, &format!("deleted app {}", app_id))]);
                self.reload_apps();
            }
            Err(err) => self.alert("Delete failed", format!("{:#}", err)),
        }
    }

    pub(in crate::tui_shell) fn open_settings(&mut self) {
        let settings = match self.client.get_settings() {
            Ok(s) => s,
            Err(err) => {
                self.alert("Settings", format!("{:#}", err));
                return;
            }
        };
        let current = sqlite_path(&settings).unwrap_or("").to_string();
        let lines = vec![
            format!("backend: {}", self.client.base_url()),
            format!(
                "current database: {}",
                if current.is_empty() { "(unset)" } else { current.as_str() }
            ),
            String::new(),
            "Saving restarts the backend.".to_string(),
        ];
        self.open_modal_with_lines("Settings", lines, ModalKind::Settings);
        if let Some(m) = self.modal.as_mut() {
            m.input = Input::with_text(&current);
        }
    }

    pub(in crate::tui_shell) fn confirm_settings(&mut self, sqlite_path: String) {
        let lines = vec![
            format!("Set the database path to '{}'?", sqlite_path),
            "The backend restarts and the list reloads.".to_string(),
            String::new(),
            "Enter to confirm; Esc to cancel.".to_string(),
        ];
        self.open_modal_with_lines(
            "Confirm settings",
            lines,
            ModalKind::ConfirmSettings { sqlite_path },
        );
    }

    pub(in crate::tui_shell) fn save_settings(&mut self, path: &str) {
        self.close_modal();
        let report = match save_settings_and_restart(&self.client, path) {
            Ok(report) => report,
            Err(err) => {
                self.alert("Settings not saved", format!("{:#}", err));
                return;
            }
        };
        self.push_output(vec![status_text(&report.saved, "settings saved")]);
        self.reload_at = Some(Instant::now() + RESTART_RELOAD_DELAY);
        match report.restart {
            Ok(status) if status.success => {
                self.push_output(vec![status_text(&status, "backend restarting")]);
            }
            Ok(status) => {
                self.alert("Restart failed", status_text(&status, "restart failed"));
            }
            Err(err) => self.alert("Restart failed", format!("{:#}", err)),
        }
    }

    /// Reloads the list once the post-restart delay has passed.
    pub(in crate::tui_shell) fn poll_reload(&mut self) {
        if let Some(at) = self.reload_at
            && Instant::now() >= at
        {
            self.reload_at = None;
            self.reload_apps();
        }
    }
}

#[cfg(test)]
#[path = "../../tests/tui_shell/app/catalog_actions_tests.rs"]
mod tests;
