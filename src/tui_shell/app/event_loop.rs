use std::io;
use std::time::Duration;

use anyhow::Context;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::catalog::HistoryField;

use super::super::modal;
use super::*;

pub(super) fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        app.poll_run();
        app.poll_reload();

        terminal
            .draw(|f| super::render::draw(f, app))
            .context("draw")?;
        if app.quit {
            log::info!("leaving TUI");
            return Ok(());
        }

        if event::poll(Duration::from_millis(50)).context("poll")? {
            match event::read().context("read event")? {
                Event::Key(k) if k.kind == KeyEventKind::Press => handle_key(app, k),
                _ => {}
            }
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && key.code == KeyCode::Char('c') {
        app.quit = true;
        return;
    }

    if app.modal.is_some() {
        modal::handle_modal_key(app, key);
        return;
    }

    match app.mode() {
        UiMode::History => handle_history_key(app, key),
        UiMode::Apps => handle_apps_key(app, key),
    }
}

fn handle_history_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.close_history(),
        KeyCode::Up => app.view_mut().move_up(),
        KeyCode::Down => app.view_mut().move_down(),
        KeyCode::Enter => app.apply_selected_history(),
        KeyCode::Char('p') => app.view_history_field(HistoryField::Params),
        KeyCode::Char('c') => app.view_history_field(HistoryField::Code),
        _ => {}
    }
}

fn handle_apps_key(app: &mut App, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Esc => {
            if !app.input.buf.is_empty() {
                app.input.clear();
                app.set_keyword_from_input();
            } else {
                app.quit = true;
            }
        }

        KeyCode::Up if alt => app.move_selected(true),
        KeyCode::Down if alt => app.move_selected(false),
        KeyCode::Up => app.view_mut().move_up(),
        KeyCode::Down => app.view_mut().move_down(),

        KeyCode::Tab => app.cycle_facet(true),
        KeyCode::BackTab => app.cycle_facet(false),

        KeyCode::Enter => app.open_run_dialog(),

        KeyCode::Char('n') if ctrl => app.open_new_form(),
        KeyCode::Char('e') if ctrl => app.open_edit_form(),
        KeyCode::Char('d') if ctrl => app.confirm_delete(),
        KeyCode::Char('h') if ctrl => app.open_history_for_selected(),
        // Many terminals deliver Ctrl+H as Backspace.
        KeyCode::F(2) => app.open_history_for_selected(),
        KeyCode::Char('s') if ctrl => app.open_settings(),
        KeyCode::Char('r') if ctrl => app.reload_apps(),
        KeyCode::Char('l') if ctrl => app.open_log_viewer(),
        KeyCode::Char('u') if ctrl => {
            app.input.clear();
            app.set_keyword_from_input();
        }

        KeyCode::Left => app.input.move_left(),
        KeyCode::Right => app.input.move_right(),
        KeyCode::Backspace => {
            app.input.backspace();
            app.set_keyword_from_input();
        }
        KeyCode::Delete => {
            app.input.delete();
            app.set_keyword_from_input();
        }
        KeyCode::Char(c) if !ctrl && !alt => {
            app.input.insert_char(c);
            app.set_keyword_from_input();
        }
        _ => {}
    }
}
