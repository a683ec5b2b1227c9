use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use time::OffsetDateTime;

use super::super::RenderCtx;
use super::super::modal;
use super::*;

pub(super) fn draw(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(area);

    // Header
    let mut spans = vec![
        Span::styled(
            "AppDeck",
            Style::default().fg(Color::Black).bg(Color::White),
        ),
        Span::raw("  "),
        Span::styled(app.client.base_url(), Style::default().fg(Color::Cyan)),
    ];
    if let Some(id) = app.running_app() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("running app {}", id),
            Style::default().fg(Color::Green),
        ));
    }
    let header = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, chunks[0]);

    let ctx = RenderCtx {
        now: OffsetDateTime::now_utc(),
    };
    app.view().render(frame, chunks[1], &ctx);

    // Status / last result
    {
        let mut lines = Vec::new();
        if let Some(r) = &app.last_result {
            let style = match r.kind {
                EntryKind::Output => Style::default().fg(Color::White),
                EntryKind::Error => Style::default().fg(Color::Red),
            };
            for (i, l) in r.lines.iter().enumerate() {
                if i == 0 {
                    lines.push(Line::from(vec![
                        Span::styled(
                            format!("{} ", fmt_ts_ui(&r.ts)),
                            Style::default().fg(Color::Gray),
                        ),
                        Span::styled(l.as_str(), style),
                    ]));
                } else {
                    lines.push(Line::from(Span::styled(l.as_str(), style)));
                }
            }
        }
        if lines.is_empty() {
            lines.push(Line::from(""));
        }
        frame.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .block(Block::default().borders(Borders::TOP).title("Last")),
            chunks[2],
        );
    }

    // Search input
    let prompt = "search> ";
    let tag = app
        .apps
        .catalog
        .facet()
        .selected()
        .map(|t| format!("tag: {}", t))
        .unwrap_or_else(|| "tag: all".to_string());
    let hint = match app.mode() {
        UiMode::Apps => {
            "Enter run  ^N new  ^E edit  ^D delete  ^H history  ^S settings  Alt+↑/↓ move"
        }
        UiMode::History => "Enter restore  p params  c code  Esc back",
    };
    let input_line = Line::from(vec![
        Span::styled(prompt, Style::default().fg(Color::Yellow)),
        Span::raw(app.input.buf.as_str()),
    ]);
    frame.render_widget(
        Paragraph::new(input_line).block(
            Block::default()
                .borders(Borders::ALL)
                .title(Line::from(vec![
                    Span::styled(tag, Style::default().fg(Color::Magenta)),
                    Span::raw("  "),
                    Span::styled(hint, Style::default().fg(Color::Gray)),
                ])),
        ),
        chunks[3],
    );

    if let Some(m) = &app.modal {
        modal::draw_modal(frame, m);
    } else if app.mode() == UiMode::Apps {
        let x = chunks[3].x + 1 + prompt.len() as u16 + app.input.cursor_col();
        let y = chunks[3].y + 1;
        frame.set_cursor_position((x, y));
    }
}
