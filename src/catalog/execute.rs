use anyhow::Result;
use time::OffsetDateTime;
use time::macros::format_description;

use super::AppsBackend;
use crate::remote::ExecuteResponse;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    Succeeded { output: String },
    Failed { error: String, details: String },
    RequestFailed { message: String },
}

impl RunOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, RunOutcome::Succeeded { .. })
    }

    /// Text for the result region.
    pub fn result_text(&self) -> String {
        match self {
            RunOutcome::Succeeded { output } => output.clone(),
            RunOutcome::Failed { error, details } => {
                format!("error: {}\n\ndetails:\n{}", error, details)
            }
            RunOutcome::RequestFailed { message } => format!("request error: {}", message),
        }
    }
}

/// Console text shown while an app runs: local progress lines stamped with
/// the wall-clock time, interleaved with the backend's console output.
#[derive(Clone, Debug, Default)]
pub struct ConsoleLog {
    lines: Vec<String>,
}

impl ConsoleLog {
    pub fn progress(&mut self, msg: &str) {
        let now = OffsetDateTime::now_utc();
        let stamp = now
            .format(format_description!("[hour]:[minute]:[second]"))
            .unwrap_or_else(|_| "--:--:--".to_string());
        self.lines.push(format!("[{}] {}", stamp, msg));
    }

    pub fn append_raw(&mut self, text: &str) {
        self.lines.extend(text.lines().map(str::to_string));
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

/// Idle/Running state of the run dialog for one app.
#[derive(Clone, Debug)]
pub struct ExecuteFlow {
    app_id: i64,
    state: RunState,
    console: ConsoleLog,
    outcome: Option<RunOutcome>,
}

impl ExecuteFlow {
    pub fn new(app_id: i64) -> Self {
        Self {
            app_id,
            state: RunState::Idle,
            console: ConsoleLog::default(),
            outcome: None,
        }
    }

    pub fn app_id(&self) -> i64 {
        self.app_id
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    pub fn console(&self) -> &ConsoleLog {
        &self.console
    }

    pub fn outcome(&self) -> Option<&RunOutcome> {
        self.outcome.as_ref()
    }

    /// Enters Running and resets the previous run's output.
    pub fn begin(&mut self) -> Result<()> {
        if self.is_running() {
            anyhow::bail!("app {} is already running", self.app_id);
        }
        self.state = RunState::Running;
        self.outcome = None;
        self.console.clear();
        self.console.progress("starting execution...");
        self.console.progress("preparing execution environment...");
        log::info!("executing app {}", self.app_id);
        Ok(())
    }

    /// Records the response (or transport error) and returns to Idle.
    pub fn finish(&mut self, result: Result<ExecuteResponse>) -> &RunOutcome {
        let outcome = match result {
            Ok(resp) => {
                self.console.progress("processing execution result...");
                if let Some(text) = resp.console_output.as_deref() {
                    self.console.append_raw(text);
                }
                if resp.success {
                    self.console.progress("execution succeeded");
                    RunOutcome::Succeeded {
                        output: resp.output.unwrap_or_default(),
                    }
                } else {
                    self.console.progress("execution failed");
                    RunOutcome::Failed {
                        error: resp.error.unwrap_or_else(|| "unknown error".to_string()),
                        details: resp.details.unwrap_or_default(),
                    }
                }
            }
            Err(err) => {
                self.console.progress("request failed");
                RunOutcome::RequestFailed {
                    message: format!("{:#}", err),
                }
            }
        };

        log::info!(
            "app {} finished: {}",
            self.app_id,
            if outcome.is_success() { "ok" } else { "failed" }
        );
        self.state = RunState::Idle;
        self.console.progress("execution finished");
        self.outcome.insert(outcome)
    }

    /// Runs to completion on the calling thread.
    pub fn run(&mut self, backend: &dyn AppsBackend) -> Result<&RunOutcome> {
        self.begin()?;
        let result = backend.execute_app(self.app_id);
        Ok(self.finish(result))
    }
}

#[cfg(test)]
#[path = "../tests/catalog/execute_tests.rs"]
mod tests;
