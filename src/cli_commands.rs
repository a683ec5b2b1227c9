use clap::{Args, Subcommand};

use crate::{ConfigCommands, SettingsCommands};

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List apps in display order
    List(ListArgs),

    /// Show one app
    Show(ShowArgs),

    /// List tags, most recently used first
    Tags(JsonArgs),

    /// Create an app
    Add(AddArgs),

    /// Update an app (unset fields keep their value)
    Edit(EditArgs),

    /// Delete an app and its history
    Delete {
        id: i64,
    },

    /// Move the given apps to the front, in the given order
    Reorder {
        #[arg(required = true)]
        ids: Vec<i64>,
    },

    /// Execute an app on the backend
    Run(RunArgs),

    /// List saved versions of an app
    History(HistoryArgs),

    /// Save an app with the fields of one of its history versions
    Restore {
        id: i64,
        record_id: i64,
    },

    /// Show or change backend settings
    Settings {
        #[command(subcommand)]
        command: SettingsCommands,
    },

    /// Ask the backend to restart
    Restart,

    /// Show or change client configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Args)]
pub(crate) struct JsonArgs {
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args)]
pub(crate) struct ListArgs {
    /// Only apps whose tags contain this text
    #[arg(long)]
    pub(crate) tag: Option<String>,
    /// Case-insensitive name search
    #[arg(long)]
    pub(crate) search: Option<String>,
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args)]
pub(crate) struct ShowArgs {
    pub(crate) id: i64,
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args)]
pub(crate) struct AddArgs {
    #[arg(long)]
    pub(crate) name: String,
    /// Comma-separated tags
    #[arg(long)]
    pub(crate) tags: Option<String>,
    #[arg(long)]
    pub(crate) description: Option<String>,
    /// JSON object passed to the code at run time
    #[arg(long)]
    pub(crate) params: Option<String>,
    #[arg(long)]
    pub(crate) code: String,
    /// Change note recorded in history (required)
    #[arg(long)]
    pub(crate) note: String,
}

#[derive(Args)]
pub(crate) struct EditArgs {
    pub(crate) id: i64,
    #[arg(long)]
    pub(crate) name: Option<String>,
    /// Comma-separated tags (replaces all tags)
    #[arg(long)]
    pub(crate) tags: Option<String>,
    #[arg(long)]
    pub(crate) description: Option<String>,
    #[arg(long)]
    pub(crate) params: Option<String>,
    #[arg(long)]
    pub(crate) code: Option<String>,
    /// Change note recorded in history (required)
    #[arg(long)]
    pub(crate) note: String,
}

#[derive(Args)]
pub(crate) struct RunArgs {
    pub(crate) id: i64,
    /// Emit the raw execution response as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args)]
pub(crate) struct HistoryArgs {
    pub(crate) id: i64,
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}
