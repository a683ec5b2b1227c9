use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::{Modal, ModalKind};

#[derive(Debug, PartialEq, Eq)]
pub(super) enum ModalAction {
    None,
    Close,
    DismissAlert,
    DeleteApp { app_id: i64 },
    StartRun,
    SubmitForm,
    FormHistory,
    SubmitSettings { sqlite_path: String },
    SaveSettings { sqlite_path: String },
}

pub(super) fn map_modal_key(modal: &mut Modal, key: KeyEvent) -> ModalAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match &mut modal.kind {
        ModalKind::Viewer => handle_viewer_like_key(modal, key),

        ModalKind::Alert { .. } => match key.code {
            KeyCode::Esc | KeyCode::Enter => ModalAction::DismissAlert,
            _ => {
                scroll_key(modal, key);
                ModalAction::None
            }
        },

        ModalKind::ConfirmDelete { app_id } => match key.code {
            KeyCode::Esc => ModalAction::Close,
            KeyCode::Enter => ModalAction::DeleteApp { app_id: *app_id },
            _ => ModalAction::None,
        },

        ModalKind::ConfirmSettings { sqlite_path } => match key.code {
            KeyCode::Esc => ModalAction::Close,
            KeyCode::Enter => ModalAction::SaveSettings {
                sqlite_path: sqlite_path.clone(),
            },
            _ => ModalAction::None,
        },

        ModalKind::Run(dialog) => match key.code {
            KeyCode::Esc => ModalAction::Close,
            KeyCode::Enter if !dialog.flow.is_running() => ModalAction::StartRun,
            _ => {
                scroll_key(modal, key);
                ModalAction::None
            }
        },

        ModalKind::Settings => match key.code {
            KeyCode::Esc => ModalAction::Close,
            KeyCode::Enter => {
                let raw = modal.input.buf.trim().to_string();
                if raw.is_empty() {
                    append_modal_error(modal, "database path required".to_string());
                    return ModalAction::None;
                }
                ModalAction::SubmitSettings { sqlite_path: raw }
            }
            _ => {
                apply_input_edit_key(modal, key);
                ModalAction::None
            }
        },

        ModalKind::Form(form) => match key.code {
            KeyCode::Esc => ModalAction::Close,
            KeyCode::Char('s') if ctrl => ModalAction::SubmitForm,
            KeyCode::Char('h') if ctrl => ModalAction::FormHistory,
            KeyCode::F(2) => ModalAction::FormHistory,
            KeyCode::Tab => {
                form.focus_next();
                ModalAction::None
            }
            KeyCode::BackTab => {
                form.focus_prev();
                ModalAction::None
            }
            KeyCode::Enter => {
                form.enter();
                ModalAction::None
            }
            KeyCode::Backspace => {
                form.backspace();
                ModalAction::None
            }
            KeyCode::Delete => {
                form.delete();
                ModalAction::None
            }
            KeyCode::Left => {
                form.move_left();
                ModalAction::None
            }
            KeyCode::Right => {
                form.move_right();
                ModalAction::None
            }
            KeyCode::Char(c) if !ctrl => {
                form.input_char(c);
                ModalAction::None
            }
            _ => ModalAction::None,
        },
    }
}

fn handle_viewer_like_key(modal: &mut Modal, key: KeyEvent) -> ModalAction {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => ModalAction::Close,
        _ => {
            scroll_key(modal, key);
            ModalAction::None
        }
    }
}

fn scroll_key(modal: &mut Modal, key: KeyEvent) {
    let max = modal.lines.len().saturating_sub(1);
    match key.code {
        KeyCode::Up => modal.scroll = modal.scroll.saturating_sub(1),
        KeyCode::Down => modal.scroll = (modal.scroll + 1).min(max),
        KeyCode::PageUp => modal.scroll = modal.scroll.saturating_sub(10),
        KeyCode::PageDown => modal.scroll = (modal.scroll + 10).min(max),
        KeyCode::Home => modal.scroll = 0,
        KeyCode::End => modal.scroll = max,
        _ => {}
    }
}

fn apply_input_edit_key(modal: &mut Modal, key: KeyEvent) {
    match key.code {
        KeyCode::Backspace => modal.input.backspace(),
        KeyCode::Delete => modal.input.delete(),
        KeyCode::Left => modal.input.move_left(),
        KeyCode::Right => modal.input.move_right(),
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            modal.input.clear()
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            modal.input.insert_char(c)
        }
        _ => {}
    }
}

fn append_modal_error(modal: &mut Modal, msg: String) {
    modal.lines.retain(|l| !l.starts_with("error: "));
    modal.lines.push(format!("error: {}", msg));
}

#[cfg(test)]
#[path = "../../tests/tui_shell/modal/keymap_tests.rs"]
mod tests;
