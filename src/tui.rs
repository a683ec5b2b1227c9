use anyhow::Result;

use crate::remote::RemoteClient;

#[derive(Clone, Debug)]
pub struct TuiRunOptions {
    pub client: RemoteClient,
}

pub fn run_with_options(opts: TuiRunOptions) -> Result<()> {
    crate::tui_shell::run_with_options(opts)
}
