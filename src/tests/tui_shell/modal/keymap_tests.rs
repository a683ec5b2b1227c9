use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::*;
use crate::catalog::{AppDraft, ExecuteFlow, ParamsView};
use crate::tui_shell::input::Input;
use crate::tui_shell::{FormField, FormState, RunDialog};

fn modal(kind: ModalKind, lines: &[&str]) -> Modal {
    Modal {
        title: "t".to_string(),
        lines: lines.iter().map(|s| s.to_string()).collect(),
        scroll: 0,
        kind,
        input: Input::default(),
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

#[test]
fn viewer_scrolls_within_its_lines() {
    let mut m = modal(ModalKind::Viewer, &["a", "b", "c"]);
    assert_eq!(map_modal_key(&mut m, key(KeyCode::Down)), ModalAction::None);
    assert_eq!(map_modal_key(&mut m, key(KeyCode::End)), ModalAction::None);
    assert_eq!(m.scroll, 2);
    map_modal_key(&mut m, key(KeyCode::Down));
    assert_eq!(m.scroll, 2);
    assert_eq!(map_modal_key(&mut m, key(KeyCode::Esc)), ModalAction::Close);
}

#[test]
fn confirm_delete_carries_the_app_id() {
    let mut m = modal(ModalKind::ConfirmDelete { app_id: 12 }, &[]);
    assert_eq!(map_modal_key(&mut m, key(KeyCode::Char('x'))), ModalAction::None);
    assert_eq!(
        map_modal_key(&mut m, key(KeyCode::Enter)),
        ModalAction::DeleteApp { app_id: 12 }
    );
}

#[test]
fn settings_require_a_path() {
    let mut m = modal(ModalKind::Settings, &["current database: x"]);
    assert_eq!(map_modal_key(&mut m, key(KeyCode::Enter)), ModalAction::None);
    assert_eq!(m.lines.last().map(String::as_str), Some("error: database path required"));

    for c in " /data/apps.db ".chars() {
        map_modal_key(&mut m, key(KeyCode::Char(c)));
    }
    assert_eq!(
        map_modal_key(&mut m, key(KeyCode::Enter)),
        ModalAction::SubmitSettings {
            sqlite_path: "/data/apps.db".to_string()
        }
    );
}

#[test]
fn run_dialog_ignores_enter_while_running() {
    let dialog = RunDialog {
        flow: ExecuteFlow::new(5),
        name: "job".to_string(),
        description: String::new(),
        params: ParamsView::Empty,
    };
    let mut m = modal(ModalKind::Run(Box::new(dialog)), &[]);
    assert_eq!(map_modal_key(&mut m, key(KeyCode::Enter)), ModalAction::StartRun);

    if let ModalKind::Run(dialog) = &mut m.kind {
        dialog.flow.begin().expect("begin");
    }
    assert_eq!(map_modal_key(&mut m, key(KeyCode::Enter)), ModalAction::None);
    assert_eq!(map_modal_key(&mut m, key(KeyCode::Esc)), ModalAction::Close);
}

#[test]
fn form_edits_fields_and_maps_shortcuts() {
    let form = FormState::from_draft(AppDraft::new());
    let mut m = modal(ModalKind::Form(Box::new(form)), &[]);

    map_modal_key(&mut m, key(KeyCode::Char('J')));
    map_modal_key(&mut m, key(KeyCode::Tab));
    map_modal_key(&mut m, key(KeyCode::Char('t')));
    map_modal_key(&mut m, key(KeyCode::Char(',')));

    let ModalKind::Form(form) = &m.kind else {
        panic!("expected form");
    };
    assert_eq!(form.name.buf, "J");
    assert_eq!(form.focus, FormField::Tags);
    assert_eq!(form.draft.tags.tags(), ["t"]);

    assert_eq!(map_modal_key(&mut m, ctrl('s')), ModalAction::SubmitForm);
    assert_eq!(map_modal_key(&mut m, ctrl('h')), ModalAction::FormHistory);
    assert_eq!(map_modal_key(&mut m, key(KeyCode::F(2))), ModalAction::FormHistory);
}

#[test]
fn form_removes_a_middle_chip_by_cursor() {
    let app = crate::model::App {
        id: Some(4),
        tags: "a,b,c".to_string(),
        ..Default::default()
    };
    let mut form = FormState::from_draft(AppDraft::from_app(&app));
    form.focus = FormField::Tags;
    let mut m = modal(ModalKind::Form(Box::new(form)), &[]);

    assert_eq!(map_modal_key(&mut m, key(KeyCode::Left)), ModalAction::None);
    assert_eq!(map_modal_key(&mut m, key(KeyCode::Left)), ModalAction::None);
    assert_eq!(map_modal_key(&mut m, key(KeyCode::Delete)), ModalAction::None);

    let ModalKind::Form(form) = &m.kind else {
        panic!("expected form");
    };
    assert_eq!(form.draft.tags.tags(), ["a", "c"]);
    assert_eq!(form.draft.tags.csv(), "a,c");
}
