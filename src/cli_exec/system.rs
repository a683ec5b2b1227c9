use appdeck::catalog::save_settings_and_restart;
use appdeck::logging::parse_level;

use super::*;

pub(super) fn handle_settings_command(client: &RemoteClient, command: SettingsCommands) -> Result<()> {
    match command {
        SettingsCommands::Show { json } => {
            let settings = client.get_settings()?;
            if json {
                return print_json(&settings, "settings");
            }
            if settings.is_empty() {
                println!("No settings");
            }
            for (key, setting) in &settings {
                match setting.description() {
                    Some(desc) if !desc.is_empty() => {
                        println!("{}: {}  ({})", key, setting.value(), desc)
                    }
                    _ => println!("{}: {}", key, setting.value()),
                }
            }
        }
        SettingsCommands::SetSqlitePath { path, no_restart } => {
            if no_restart {
                let status = client.save_sqlite_path(path.trim())?;
                println!("{}", status_line(&status, "settings saved"));
                println!("restart the backend for the change to take effect");
                return Ok(());
            }
            let report = save_settings_and_restart(client, &path)?;
            println!("{}", status_line(&report.saved, "settings saved"));
            match report.restart {
                Ok(status) if status.success => {
                    println!("{}", status_line(&status, "backend restarting"))
                }
                Ok(status) => anyhow::bail!("{}", status_line(&status, "restart failed")),
                Err(err) => return Err(err.context("settings saved but restart failed")),
            }
        }
    }
    Ok(())
}

pub(super) fn handle_restart_command(client: &RemoteClient) -> Result<()> {
    let status = client.restart()?;
    if !status.success {
        anyhow::bail!("{}", status_line(&status, "restart failed"));
    }
    println!("{}", status_line(&status, "backend restarting"));
    Ok(())
}

pub(super) fn handle_config_command(session: &Session, command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show { json } => {
            if json {
                return print_json(&session.config, "config");
            }
            println!("config: {}", session.store.config_path().display());
            println!("url: {}", session.config.base_url);
            if session.base_url() != session.config.base_url {
                println!("url (this run): {}", session.base_url());
            }
            println!(
                "log_file: {}",
                session.store.log_path(&session.config).display()
            );
            println!(
                "log_level: {}",
                session.config.log_level.as_deref().unwrap_or("info")
            );
        }
        ConfigCommands::Set {
            url,
            log_file,
            log_level,
        } => {
            let mut cfg = session.config.clone();
            if let Some(url) = url {
                // Validates and normalizes the URL.
                let client = RemoteClient::new(&url)?;
                cfg.base_url = client.base_url().to_string();
            }
            if let Some(path) = log_file {
                cfg.log_file = Some(path);
            }
            if let Some(level) = log_level {
                parse_level(Some(level.as_str()))?;
                cfg.log_level = Some(level.trim().to_ascii_lowercase());
            }
            session.store.write_config(&cfg)?;
            println!("Config saved to {}", session.store.config_path().display());
        }
    }
    Ok(())
}
