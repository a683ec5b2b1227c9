use std::sync::mpsc;

use super::super::{App, EntryKind, Modal, ModalKind, PendingRun, RunDialog};
use super::*;
use crate::catalog::{ExecuteFlow, ParamsView, RunOutcome};
use crate::remote::{ExecuteResponse, RemoteClient};

fn console() -> App {
    // poll_run never talks to the backend.
    App::new(RemoteClient::new("http://127.0.0.1:9").unwrap())
}

fn open_run_dialog(app: &mut App, app_id: i64) {
    let mut flow = ExecuteFlow::new(app_id);
    flow.begin().unwrap();
    let dialog = RunDialog {
        flow,
        name: "job".to_string(),
        description: String::new(),
        params: ParamsView::Empty,
    };
    app.open_modal("Run job", ModalKind::Run(Box::new(dialog)));
}

fn finished(app: &mut App, app_id: i64, resp: ExecuteResponse) {
    let (tx, rx) = mpsc::channel();
    tx.send(Ok(resp)).unwrap();
    app.pending_run = Some(PendingRun { app_id, rx });
}

fn ok_response(output: &str) -> ExecuteResponse {
    ExecuteResponse {
        success: true,
        output: Some(output.to_string()),
        ..Default::default()
    }
}

fn status_line(app: &App) -> (EntryKind, String) {
    let entry = app.last_result.as_ref().expect("status entry");
    (entry.kind, entry.lines[0].clone())
}

#[test]
fn finished_run_fills_its_open_dialog() {
    let mut app = console();
    open_run_dialog(&mut app, 7);
    finished(&mut app, 7, ok_response("done"));

    app.poll_run();

    assert_eq!(app.running_app(), None);
    let Some(Modal {
        kind: ModalKind::Run(dialog),
        ..
    }) = &app.modal
    else {
        panic!("run dialog should stay open");
    };
    assert!(!dialog.flow.is_running());
    assert_eq!(
        dialog.flow.outcome(),
        Some(&RunOutcome::Succeeded {
            output: "done".to_string()
        })
    );
    assert_eq!(
        status_line(&app),
        (EntryKind::Output, "app 7 ran successfully".to_string())
    );
}

#[test]
fn run_finishing_after_its_dialog_closed_goes_to_the_status_line() {
    let mut app = console();
    let failed = ExecuteResponse {
        success: false,
        error: Some("boom".to_string()),
        ..Default::default()
    };
    finished(&mut app, 7, failed);

    app.poll_run();

    assert!(app.modal.is_none());
    assert_eq!(app.running_app(), None);
    assert_eq!(
        status_line(&app),
        (EntryKind::Error, "app 7 failed: boom".to_string())
    );
}

#[test]
fn dialog_of_another_app_is_left_running() {
    let mut app = console();
    open_run_dialog(&mut app, 8);
    finished(&mut app, 7, ok_response("done"));

    app.poll_run();

    assert!(dialog_flow(app.modal.as_mut(), 8).is_some_and(|f| f.is_running()));
    assert!(dialog_flow(app.modal.as_mut(), 7).is_none());
    assert_eq!(
        status_line(&app),
        (EntryKind::Output, "app 7 ran successfully".to_string())
    );
}

#[test]
fn pending_run_waits_for_the_worker() {
    let mut app = console();
    let (tx, rx) = mpsc::channel::<anyhow::Result<ExecuteResponse>>();
    app.pending_run = Some(PendingRun { app_id: 3, rx });

    app.poll_run();
    assert_eq!(app.running_app(), Some(3));
    assert!(app.last_result.is_none());

    drop(tx);
    app.poll_run();
    assert_eq!(app.running_app(), None);
    assert_eq!(
        status_line(&app),
        (
            EntryKind::Error,
            "app 3 could not be run: execution worker exited".to_string()
        )
    );
}
