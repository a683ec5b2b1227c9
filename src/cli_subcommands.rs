use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum SettingsCommands {
    /// Show backend settings
    Show {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Point the backend at another SQLite database file
    SetSqlitePath {
        path: String,
        /// Save only; do not restart the backend
        #[arg(long)]
        no_restart: bool,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigCommands {
    /// Show the client configuration
    Show {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Update the client configuration
    Set {
        /// Backend base URL
        #[arg(long)]
        url: Option<String>,
        /// Log file path
        #[arg(long)]
        log_file: Option<PathBuf>,
        /// off|error|warn|info|debug|trace
        #[arg(long)]
        log_level: Option<String>,
    },
}
