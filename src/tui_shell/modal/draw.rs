use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::catalog::RunState;

use super::super::{FormField, FormState, Modal, ModalKind, RunDialog};

const LABEL_W: usize = 13;

fn modal_area(frame: &ratatui::Frame, large: bool) -> Rect {
    let area = frame.area();
    let (max_w, max_h) = if large { (110, 40) } else { (90, 22) };
    let w = area.width.saturating_sub(6).clamp(20, max_w);
    let h = area.height.saturating_sub(4).clamp(8, max_h);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect {
        x,
        y,
        width: w.min(area.width),
        height: h.min(area.height),
    }
}

pub(in crate::tui_shell) fn draw_modal(frame: &mut ratatui::Frame, modal: &Modal) {
    let large = matches!(modal.kind, ModalKind::Run(_) | ModalKind::Form(_));
    let box_area = modal_area(frame, large);

    frame.render_widget(ratatui::widgets::Clear, box_area);

    let border = match modal.kind {
        ModalKind::Alert { .. } => Style::default().fg(Color::Red),
        _ => Style::default(),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(modal_title(modal));
    frame.render_widget(block.clone(), box_area);
    let inner = block.inner(box_area);

    match &modal.kind {
        ModalKind::Viewer
        | ModalKind::Alert { .. }
        | ModalKind::ConfirmDelete { .. }
        | ModalKind::ConfirmSettings { .. } => draw_lines(frame, modal, inner),

        ModalKind::Settings => {
            let parts = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(3)])
                .split(inner);
            draw_lines(frame, modal, parts[0]);

            frame.render_widget(
                Paragraph::new(modal.input.buf.as_str()).block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title("Database path"),
                ),
                parts[1],
            );
            let x = modal.input.cursor_col();
            frame.set_cursor_position((parts[1].x + 1 + x, parts[1].y + 1));
        }

        ModalKind::Run(dialog) => draw_run(frame, modal, dialog, inner),

        ModalKind::Form(form) => draw_form(frame, form, inner),
    }
}

fn draw_lines(frame: &mut ratatui::Frame, modal: &Modal, area: Rect) {
    let lines: Vec<Line> = modal.lines.iter().map(|s| Line::from(s.as_str())).collect();
    let scroll = modal.scroll.min(modal.lines.len().saturating_sub(1)) as u16;
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0)),
        area,
    );
}

fn draw_run(frame: &mut ratatui::Frame, modal: &Modal, dialog: &RunDialog, area: Rect) {
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Percentage(40),
            Constraint::Min(0),
        ])
        .split(area);

    let mut info = vec![Line::from(vec![
        Span::styled("name: ", Style::default().fg(Color::Gray)),
        Span::raw(dialog.name.as_str()),
    ])];
    if !dialog.description.is_empty() {
        info.push(Line::from(vec![
            Span::styled("description: ", Style::default().fg(Color::Gray)),
            Span::raw(dialog.description.as_str()),
        ]));
    }
    info.push(Line::from(Span::styled(
        "params:",
        Style::default().fg(Color::Gray),
    )));
    let params_style = if dialog.params.is_invalid() {
        Style::default().fg(Color::Red)
    } else {
        Style::default()
    };
    for l in dialog.params.text().lines() {
        info.push(Line::from(Span::styled(l.to_string(), params_style)));
    }
    frame.render_widget(Paragraph::new(info).wrap(Wrap { trim: false }), parts[0]);

    // Console, pinned to the newest lines.
    let console = dialog.flow.console().lines();
    let height = parts[1].height.saturating_sub(2) as usize;
    let start = console.len().saturating_sub(height);
    let console_lines: Vec<Line> = console[start..]
        .iter()
        .map(|l| Line::from(l.as_str()))
        .collect();
    let state = match dialog.flow.state() {
        RunState::Idle => Span::styled("idle", Style::default().fg(Color::Gray)),
        RunState::Running => Span::styled("running", Style::default().fg(Color::Green)),
    };
    frame.render_widget(
        Paragraph::new(console_lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(Line::from(vec![Span::raw("console "), state])),
        ),
        parts[1],
    );

    let (title, style, text) = match dialog.flow.outcome() {
        None => ("result", Style::default(), String::new()),
        Some(outcome) if outcome.is_success() => (
            "result: ok",
            Style::default().fg(Color::Green),
            outcome.result_text(),
        ),
        Some(outcome) => (
            "result: failed",
            Style::default().fg(Color::Red),
            outcome.result_text(),
        ),
    };
    let scroll = modal.scroll.min(text.lines().count().saturating_sub(1)) as u16;
    frame.render_widget(
        Paragraph::new(text)
            .style(style)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0))
            .block(Block::default().borders(Borders::ALL).title(title)),
        parts[2],
    );
}

fn label_span(field: FormField, focus: FormField) -> Span<'static> {
    let style = if field == focus {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    Span::styled(format!("{:<w$}", format!("{}:", field.label()), w = LABEL_W), style)
}

fn draw_form(frame: &mut ratatui::Frame, form: &FormState, area: Rect) {
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let chip = Style::default().fg(Color::Black).bg(Color::Magenta);
    let chip_cursor = Style::default()
        .fg(Color::Black)
        .bg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let mut tag_spans = vec![label_span(FormField::Tags, form.focus)];
    for (i, t) in form.draft.tags.tags().iter().enumerate() {
        let style = if form.focus == FormField::Tags && form.chip == Some(i) {
            chip_cursor
        } else {
            chip
        };
        tag_spans.push(Span::styled(format!(" {} ", t), style));
        tag_spans.push(Span::raw(" "));
    }
    tag_spans.push(Span::raw(form.draft.tags.pending()));

    let single = |field: FormField, text: &str| {
        Line::from(vec![label_span(field, form.focus), Span::raw(text.to_string())])
    };
    let lines = vec![
        single(FormField::Name, &form.name.buf),
        Line::from(tag_spans),
        single(FormField::Description, &form.description.buf),
        single(FormField::Params, &form.params.buf),
        single(FormField::Note, &form.note.buf),
    ];
    frame.render_widget(Paragraph::new(lines), parts[0]);

    let code_title = if form.focus == FormField::Code {
        Span::styled(
            "code",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled("code", Style::default().fg(Color::Gray))
    };
    let code_lines: Vec<Line> = form.code.split('\n').map(Line::from).collect();
    let inner_h = parts[1].height.saturating_sub(2) as usize;
    let scroll = code_lines.len().saturating_sub(inner_h) as u16;
    frame.render_widget(
        Paragraph::new(code_lines)
            .scroll((scroll, 0))
            .block(Block::default().borders(Borders::ALL).title(code_title)),
        parts[1],
    );

    let hint = if form.focus == FormField::Tags {
        ", or Enter adds  ←/→ pick chip  Del remove chip  Ctrl+S save"
    } else if form.draft.is_new() {
        "Tab next field  Ctrl+S save  Esc cancel"
    } else {
        "Tab next field  Ctrl+S save  Ctrl+H/F2 history  Esc cancel"
    };
    frame.render_widget(
        Paragraph::new(Span::styled(hint, Style::default().fg(Color::Gray))),
        parts[2],
    );

    // Cursor for the focused single-line field.
    let row = match form.focus {
        FormField::Name => Some(0),
        FormField::Description => Some(2),
        FormField::Params => Some(3),
        FormField::Note => Some(4),
        FormField::Tags | FormField::Code => None,
    };
    if let (Some(row), Some(input)) = (row, form.focused_input()) {
        let x = parts[0].x + LABEL_W as u16 + input.cursor_col();
        frame.set_cursor_position((x, parts[0].y + row));
    }
}

fn modal_title(modal: &Modal) -> Line<'static> {
    let mut spans = vec![
        Span::styled(modal.title.clone(), Style::default().fg(Color::Yellow)),
        Span::raw("  "),
        Span::styled("Esc", Style::default().fg(Color::Gray)),
    ];
    if matches!(
        &modal.kind,
        ModalKind::ConfirmDelete { .. }
            | ModalKind::ConfirmSettings { .. }
            | ModalKind::Settings
            | ModalKind::Run(_)
    ) {
        spans.push(Span::raw("  "));
        spans.push(Span::styled("Enter", Style::default().fg(Color::Gray)));
    }
    Line::from(spans)
}
