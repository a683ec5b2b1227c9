use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

use crate::catalog::HistoryStore;
use crate::model::HistoryRecord;

use super::super::{RenderCtx, UiMode, View, fmt_ts_list, fmt_ts_ui, render_view_chrome};

const CODE_PREVIEW_LINES: usize = 8;

#[derive(Debug)]
pub(in crate::tui_shell) struct HistoryView {
    pub(in crate::tui_shell) updated_at: String,
    pub(in crate::tui_shell) title: String,
    pub(in crate::tui_shell) store: HistoryStore,
    pub(in crate::tui_shell) selected: usize,
}

impl HistoryView {
    pub(in crate::tui_shell) fn new(app_name: String, store: HistoryStore) -> Self {
        Self {
            updated_at: super::super::app::now_ts(),
            title: format!("History: {}", app_name),
            store,
            selected: 0,
        }
    }

    pub(in crate::tui_shell) fn selected_record(&self) -> Option<&HistoryRecord> {
        self.store.nth(self.selected)
    }
}

impl View for HistoryView {
    fn mode(&self) -> UiMode {
        UiMode::History
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn updated_at(&self) -> &str {
        &self.updated_at
    }

    fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn move_down(&mut self) {
        if self.store.is_empty() {
            self.selected = 0;
            return;
        }
        self.selected = (self.selected + 1).min(self.store.len() - 1);
    }

    fn render(&self, frame: &mut ratatui::Frame, area: ratatui::layout::Rect, ctx: &RenderCtx) {
        let inner = render_view_chrome(frame, self.title(), self.updated_at(), area);
        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(inner);

        let mut state = ListState::default();
        if !self.store.is_empty() {
            state.select(Some(self.selected.min(self.store.len() - 1)));
        }

        let mut rows = Vec::new();
        for r in self.store.iter() {
            let note = if r.note.is_empty() { "-" } else { r.note.as_str() };
            rows.push(ListItem::new(format!(
                "#{:<5} {:<12} {}",
                r.id,
                fmt_ts_list(&r.created_at, ctx),
                note
            )));
        }
        if self.store.is_empty() {
            rows.push(ListItem::new("(no history yet)"));
        }

        let list = List::new(rows)
            .block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .title(format!("versions {}", self.store.len())),
            )
            .highlight_style(Style::default().bg(Color::DarkGray));
        frame.render_stateful_widget(list, parts[0], &mut state);

        let details = match self.selected_record() {
            None => vec![Line::from("(no selection)")],
            Some(r) => {
                let mut out = vec![
                    Line::from(format!("version: {}", r.id)),
                    Line::from(format!("saved: {}", fmt_ts_ui(&r.created_at))),
                    Line::from(format!("name: {}", r.app_name)),
                ];
                if !r.tags.is_empty() {
                    out.push(Line::from(format!("tags: {}", r.tags)));
                }
                if !r.description.is_empty() {
                    out.push(Line::from(format!("description: {}", r.description)));
                }
                out.push(Line::from(format!("note: {}", r.note)));
                out.push(Line::from("code:"));
                let total = r.code.lines().count();
                for l in r.code.lines().take(CODE_PREVIEW_LINES) {
                    out.push(Line::from(format!("  {}", l)));
                }
                if total > CODE_PREVIEW_LINES {
                    out.push(Line::from(format!(
                        "  ... {} more lines (c: full code)",
                        total - CODE_PREVIEW_LINES
                    )));
                }
                out
            }
        };
        frame.render_widget(Paragraph::new(details).wrap(Wrap { trim: false }), parts[1]);
    }
}
