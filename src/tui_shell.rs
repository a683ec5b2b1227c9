use anyhow::Result;

mod app;

mod input;
mod modal;
mod view;
mod views;

// Make core TUI types/helpers available to submodules via `super::...`.
use app::{App, FormField, FormState, Modal, ModalKind, RunDialog, UiMode, fmt_ts_list, fmt_ts_ui};
use view::{RenderCtx, View, render_view_chrome};

pub(crate) fn run_with_options(opts: crate::tui::TuiRunOptions) -> Result<()> {
    app::run(opts)
}
