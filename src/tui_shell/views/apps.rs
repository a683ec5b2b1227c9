use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

use crate::catalog::{Catalog, format_params};
use crate::model::App;

use super::super::{RenderCtx, UiMode, View, fmt_ts_list, fmt_ts_ui, render_view_chrome};

/// The card list. `selected` indexes the visible (filtered) cards.
#[derive(Debug, Default)]
pub(in crate::tui_shell) struct AppsView {
    pub(in crate::tui_shell) updated_at: String,
    pub(in crate::tui_shell) catalog: Catalog,
    pub(in crate::tui_shell) selected: usize,
}

impl AppsView {
    /// Index into the full list of the selected card.
    pub(in crate::tui_shell) fn selected_index(&self) -> Option<usize> {
        self.catalog.visible_indices().get(self.selected).copied()
    }

    pub(in crate::tui_shell) fn selected_app(&self) -> Option<&App> {
        self.selected_index().map(|i| &self.catalog.apps()[i])
    }

    pub(in crate::tui_shell) fn clamp_selection(&mut self) {
        let n = self.catalog.visible_indices().len();
        self.selected = self.selected.min(n.saturating_sub(1));
    }

    fn facet_line(&self) -> Line<'_> {
        let selected = self.catalog.facet().selected();
        let on = Style::default()
            .fg(Color::Black)
            .bg(Color::Magenta)
            .add_modifier(Modifier::BOLD);
        let off = Style::default().fg(Color::Magenta);

        let mut spans = vec![Span::styled(
            " all ",
            if selected.is_none() { on } else { off },
        )];
        for tag in self.catalog.facet().tags() {
            spans.push(Span::raw(" "));
            let style = if selected == Some(tag) { on } else { off };
            spans.push(Span::styled(format!(" {} ", tag), style));
        }
        Line::from(spans)
    }
}

fn chips(app: &App) -> String {
    app.tag_names()
        .iter()
        .map(|t| format!("[{}]", t))
        .collect::<Vec<_>>()
        .join(" ")
}

impl View for AppsView {
    fn mode(&self) -> UiMode {
        UiMode::Apps
    }

    fn title(&self) -> &str {
        "Apps"
    }

    fn updated_at(&self) -> &str {
        &self.updated_at
    }

    fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn move_down(&mut self) {
        let n = self.catalog.visible_indices().len();
        if n == 0 {
            self.selected = 0;
            return;
        }
        self.selected = (self.selected + 1).min(n - 1);
    }

    fn render(&self, frame: &mut ratatui::Frame, area: ratatui::layout::Rect, ctx: &RenderCtx) {
        let inner = render_view_chrome(frame, self.title(), self.updated_at(), area);
        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Percentage(60),
                Constraint::Min(0),
            ])
            .split(inner);

        frame.render_widget(
            Paragraph::new(self.facet_line())
                .wrap(Wrap { trim: true })
                .block(Block::default().borders(Borders::BOTTOM)),
            parts[0],
        );

        let visible = self.catalog.visible();
        let mut state = ListState::default();
        if !visible.is_empty() {
            state.select(Some(self.selected.min(visible.len() - 1)));
        }

        let mut rows = Vec::new();
        for app in &visible {
            let when = app
                .updated_at
                .as_deref()
                .map(|ts| fmt_ts_list(ts, ctx))
                .unwrap_or_default();
            rows.push(ListItem::new(Line::from(vec![
                Span::styled(app.name.clone(), Style::default().fg(Color::White)),
                Span::raw("  "),
                Span::styled(chips(app), Style::default().fg(Color::Magenta)),
                Span::raw("  "),
                Span::styled(when, Style::default().fg(Color::Gray)),
            ])));
        }
        if visible.is_empty() {
            let msg = if self.catalog.apps().is_empty() {
                "(no apps; Ctrl+N to create one)"
            } else {
                "(no apps match the filter)"
            };
            rows.push(ListItem::new(msg));
        }

        let title = if self.catalog.filter().is_active() {
            format!("apps {}/{}", visible.len(), self.catalog.apps().len())
        } else {
            format!("apps {}", self.catalog.apps().len())
        };
        let list = List::new(rows)
            .block(Block::default().borders(Borders::BOTTOM).title(title))
            .highlight_style(Style::default().bg(Color::DarkGray));
        frame.render_stateful_widget(list, parts[1], &mut state);

        let details = match visible.get(self.selected.min(visible.len().saturating_sub(1))) {
            None => vec![Line::from("(no selection)")],
            Some(app) => {
                let mut out = Vec::new();
                if let Some(id) = app.id {
                    out.push(Line::from(format!("id: {}", id)));
                }
                out.push(Line::from(format!("name: {}", app.name)));
                if !app.tags.is_empty() {
                    out.push(Line::from(format!("tags: {}", app.tags)));
                }
                if !app.description.is_empty() {
                    out.push(Line::from(format!("description: {}", app.description)));
                }
                if let Some(ts) = app.updated_at.as_deref() {
                    out.push(Line::from(format!("updated_at: {}", fmt_ts_ui(ts))));
                }
                let params = format_params(&app.params);
                let style = if params.is_invalid() {
                    Style::default().fg(Color::Red)
                } else {
                    Style::default()
                };
                out.push(Line::from("params:"));
                for l in params.text().lines() {
                    out.push(Line::from(Span::styled(l.to_string(), style)));
                }
                out
            }
        };
        frame.render_widget(Paragraph::new(details).wrap(Wrap { trim: false }), parts[2]);
    }
}

#[cfg(test)]
#[path = "../../tests/tui_shell/views/apps_tests.rs"]
mod tests;
