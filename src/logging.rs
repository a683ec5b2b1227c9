use std::fs::{self, OpenOptions};
use std::path::Path;

use anyhow::{Context, Result};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

pub fn parse_level(level: Option<&str>) -> Result<LevelFilter> {
    let Some(level) = level else {
        return Ok(LevelFilter::Info);
    };
    match level.trim().to_ascii_lowercase().as_str() {
        "off" => Ok(LevelFilter::Off),
        "error" => Ok(LevelFilter::Error),
        "warn" | "warning" => Ok(LevelFilter::Warn),
        "info" => Ok(LevelFilter::Info),
        "debug" => Ok(LevelFilter::Debug),
        "trace" => Ok(LevelFilter::Trace),
        other => anyhow::bail!("unknown log level '{}' (use error|warn|info|debug|trace)", other),
    }
}

/// Appends log records to `path`. The terminal is never written to, so the
/// logger is safe to run underneath the TUI.
pub fn init_logger(path: &Path, level: LevelFilter) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))?;
    WriteLogger::init(
        level,
        ConfigBuilder::new().set_time_format_rfc3339().build(),
        file,
    )
    .context("install logger")?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/logging_tests.rs"]
mod tests;
