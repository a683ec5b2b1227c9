use anyhow::{Context, Result};

use appdeck::remote::RemoteClient;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::cli_runtime::Session;
use crate::{Commands, ConfigCommands, SettingsCommands};

mod apps;
mod dispatch;
mod history;
mod system;

pub(super) fn handle_command(session: &Session, command: Commands) -> Result<()> {
    dispatch::handle_command(session, command)
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T, what: &str) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).with_context(|| format!("serialize {} json", what))?
    );
    Ok(())
}

fn fmt_time(ts: Option<OffsetDateTime>) -> String {
    ts.and_then(|t| t.format(&Rfc3339).ok())
        .unwrap_or_else(|| "-".to_string())
}

fn status_line(status: &appdeck::remote::ApiStatus, fallback: &str) -> String {
    status
        .message
        .clone()
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| fallback.to_string())
}
