pub mod catalog;
pub mod logging;
pub mod model;
pub mod remote;
pub mod store;
pub mod tags;
pub mod tui;

mod tui_shell;
