pub(super) mod apps;
pub(super) mod history;

pub(in crate::tui_shell) use apps::AppsView;
pub(in crate::tui_shell) use history::HistoryView;
