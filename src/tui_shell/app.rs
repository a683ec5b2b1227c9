use std::sync::mpsc;
use std::time::Instant;

use anyhow::Result;

use crate::catalog::{ExecuteFlow, ParamsView};
use crate::remote::{ExecuteResponse, RemoteClient};

use super::input::Input;
use super::view::View;
use super::views::{AppsView, HistoryView};

mod catalog_actions;
mod event_loop;
mod form;
mod history_actions;
mod modal_output;
mod render;
mod runtime;
mod time_utils;

pub(in crate::tui_shell) use self::form::{FormField, FormState};
pub(super) use self::runtime::run;
pub(in crate::tui_shell) use self::time_utils::{fmt_ts_list, fmt_ts_ui, now_ts};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) enum UiMode {
    Apps,
    History,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum EntryKind {
    Output,
    Error,
}

#[derive(Clone, Debug)]
pub(super) struct ScrollEntry {
    pub(super) ts: String,
    pub(super) kind: EntryKind,
    pub(super) lines: Vec<String>,
}

/// The run dialog for one app. Closing it drops the console and result.
#[derive(Debug)]
pub(in crate::tui_shell) struct RunDialog {
    pub(in crate::tui_shell) flow: ExecuteFlow,
    pub(in crate::tui_shell) name: String,
    pub(in crate::tui_shell) description: String,
    pub(in crate::tui_shell) params: ParamsView,
}

#[derive(Debug)]
pub(in crate::tui_shell) enum ModalKind {
    Viewer,
    /// Error notice; dismissing it brings back the modal it covered.
    Alert {
        resume: Option<Box<Modal>>,
    },
    ConfirmDelete {
        app_id: i64,
    },
    Run(Box<RunDialog>),
    Form(Box<FormState>),
    Settings,
    ConfirmSettings {
        sqlite_path: String,
    },
}

#[derive(Debug)]
pub(in crate::tui_shell) struct Modal {
    pub(in crate::tui_shell) title: String,
    pub(in crate::tui_shell) lines: Vec<String>,
    pub(in crate::tui_shell) scroll: usize,
    pub(in crate::tui_shell) kind: ModalKind,
    pub(in crate::tui_shell) input: Input,
}

#[derive(Debug)]
struct PendingRun {
    app_id: i64,
    rx: mpsc::Receiver<Result<ExecuteResponse>>,
}

pub(in crate::tui_shell) struct App {
    pub(super) client: RemoteClient,

    pub(super) apps: AppsView,
    pub(super) history: Option<HistoryView>,

    pub(in crate::tui_shell) modal: Option<Modal>,
    /// The edit form parked while its history is open.
    stashed_form: Option<Box<FormState>>,

    /// Search keyword line.
    pub(super) input: Input,

    log: Vec<ScrollEntry>,
    pub(super) last_result: Option<ScrollEntry>,

    pending_run: Option<PendingRun>,
    /// Set after a backend restart; the list reloads once it passes.
    reload_at: Option<Instant>,

    pub(super) quit: bool,
}

impl App {
    fn load(opts: crate::tui::TuiRunOptions) -> Self {
        let mut app = Self::new(opts.client);
        app.reload_apps();
        app
    }

    /// An empty console; nothing is fetched until [`App::reload_apps`].
    fn new(client: RemoteClient) -> Self {
        Self {
            client,
            apps: AppsView::default(),
            history: None,
            modal: None,
            stashed_form: None,
            input: Input::default(),
            log: Vec::new(),
            last_result: None,
            pending_run: None,
            reload_at: None,
            quit: false,
        }
    }

    pub(super) fn mode(&self) -> UiMode {
        self.view().mode()
    }

    pub(super) fn view(&self) -> &dyn View {
        match &self.history {
            Some(h) => h,
            None => &self.apps,
        }
    }

    pub(super) fn view_mut(&mut self) -> &mut dyn View {
        match &mut self.history {
            Some(h) => h,
            None => &mut self.apps,
        }
    }

    pub(super) fn running_app(&self) -> Option<i64> {
        self.pending_run.as_ref().map(|p| p.app_id)
    }
}
