use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use super::{App, event_loop};

type Term = Terminal<CrosstermBackend<io::Stdout>>;

/// Raw mode and the alternate screen, undone on drop so an error or panic
/// in the loop still hands back a usable shell.
struct ScreenSession {
    terminal: Term,
}

impl ScreenSession {
    fn enter() -> Result<Self> {
        enable_raw_mode().context("enable raw mode")?;
        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, EnterAlternateScreen) {
            disable_raw_mode().ok();
            return Err(err).context("enter alternate screen");
        }
        let mut terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(t) => t,
            Err(err) => {
                execute!(io::stdout(), LeaveAlternateScreen).ok();
                disable_raw_mode().ok();
                return Err(err).context("create terminal");
            }
        };
        terminal.clear().ok();
        Ok(Self { terminal })
    }
}

impl Drop for ScreenSession {
    fn drop(&mut self) {
        disable_raw_mode().ok();
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen).ok();
        self.terminal.show_cursor().ok();
    }
}

fn require_tty(stdin_tty: bool, stdout_tty: bool) -> Result<()> {
    match (stdin_tty, stdout_tty) {
        (true, true) => Ok(()),
        (false, _) => anyhow::bail!(
            "the apps console needs an interactive terminal; stdin is not a TTY (use a subcommand such as `appdeck list`)"
        ),
        (true, false) => anyhow::bail!(
            "the apps console needs an interactive terminal; stdout is redirected (use a subcommand such as `appdeck list`)"
        ),
    }
}

pub(in crate::tui_shell) fn run(opts: crate::tui::TuiRunOptions) -> Result<()> {
    require_tty(io::stdin().is_terminal(), io::stdout().is_terminal())?;
    log::info!("opening apps console against {}", opts.client.base_url());

    let mut session = ScreenSession::enter()?;
    let mut app = App::load(opts);
    let res = event_loop::run_loop(&mut session.terminal, &mut app);
    drop(session);

    match &res {
        Ok(()) => log::info!("apps console closed"),
        Err(err) => log::error!("apps console stopped: {:#}", err),
    }
    res
}

#[cfg(test)]
#[path = "../../tests/tui_shell/app/runtime_tests.rs"]
mod tests;
