use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use appdeck::logging::{init_logger, parse_level};
use appdeck::model::ClientConfig;
use appdeck::remote::RemoteClient;
use appdeck::store::ConfigStore;

use crate::Commands;

#[derive(Parser)]
#[command(name = "appdeck")]
#[command(about = "Manage, tag, order and run stored script apps", long_about = None)]
pub(crate) struct Cli {
    /// Backend base URL (overrides the configured one)
    #[arg(long, global = true)]
    url: Option<String>,

    /// Settings directory (defaults to $APPDECK_HOME or ~/.appdeck)
    #[arg(long = "config", value_name = "DIR", global = true)]
    config_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Resolved per-invocation context shared by the command handlers.
pub(crate) struct Session {
    pub(crate) store: ConfigStore,
    pub(crate) config: ClientConfig,
    base_url: String,
}

impl Session {
    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn client(&self) -> Result<RemoteClient> {
        RemoteClient::new(&self.base_url)
    }
}

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();

    let store = match &cli.config_dir {
        Some(dir) => ConfigStore::open(dir),
        None => ConfigStore::open_default()?,
    };
    let config = store.read_config()?;
    start_logging(&store, &config);

    let base_url = cli.url.clone().unwrap_or_else(|| config.base_url.clone());
    let session = Session {
        store,
        config,
        base_url,
    };

    match cli.command {
        None => {
            appdeck::tui::run_with_options(appdeck::tui::TuiRunOptions {
                client: session.client()?,
            })?;
        }
        Some(command) => crate::cli_exec::handle_command(&session, command)?,
    }

    Ok(())
}

/// A logger that cannot start is reported and skipped.
fn start_logging(store: &ConfigStore, config: &ClientConfig) {
    let level = match parse_level(config.log_level.as_deref()) {
        Ok(level) => level,
        Err(err) => {
            eprintln!("warning: {:#}; using info", err);
            log::LevelFilter::Info
        }
    };
    let path = store.log_path(config);
    if let Err(err) = init_logger(&path, level) {
        eprintln!("warning: logging disabled: {:#}", err);
    }
}
