use crossterm::event::KeyEvent;

use self::keymap::{ModalAction, map_modal_key};

mod draw;
mod keymap;

pub(super) use self::draw::draw_modal;

pub(super) fn handle_modal_key(app: &mut super::App, key: KeyEvent) {
    let action = {
        let Some(m) = app.modal.as_mut() else {
            return;
        };
        map_modal_key(m, key)
    };

    match action {
        ModalAction::None => {}
        ModalAction::Close => app.close_modal(),
        ModalAction::DismissAlert => app.dismiss_alert(),
        ModalAction::DeleteApp { app_id } => app.delete_app(app_id),
        ModalAction::StartRun => app.start_run(),
        ModalAction::SubmitForm => app.submit_form(),
        ModalAction::FormHistory => app.open_history_from_form(),
        ModalAction::SubmitSettings { sqlite_path } => app.confirm_settings(sqlite_path),
        ModalAction::SaveSettings { sqlite_path } => app.save_settings(&sqlite_path),
    }
}
