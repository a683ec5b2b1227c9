use super::*;

const LOG_CAP: usize = 500;

impl App {
    fn push_entry(&mut self, kind: EntryKind, lines: Vec<String>) {
        let entry = ScrollEntry {
            ts: now_ts(),
            kind,
            lines,
        };
        if self.log.len() >= LOG_CAP {
            self.log.remove(0);
        }
        self.log.push(entry.clone());
        self.last_result = Some(entry);
    }

    pub(in crate::tui_shell) fn push_output(&mut self, lines: Vec<String>) {
        for l in &lines {
            log::info!("{}", l);
        }
        self.push_entry(EntryKind::Output, lines);
    }

    pub(in crate::tui_shell) fn push_error(&mut self, msg: String) {
        log::warn!("{}", msg);
        self.push_entry(EntryKind::Error, vec![msg]);
    }

    /// Output and errors of this session, newest first.
    pub(in crate::tui_shell) fn open_log_viewer(&mut self) {
        let mut lines = Vec::new();
        for entry in self.log.iter().rev() {
            let mark = match entry.kind {
                EntryKind::Output => " ",
                EntryKind::Error => "!",
            };
            for (i, l) in entry.lines.iter().enumerate() {
                if i == 0 {
                    lines.push(format!("{} {} {}", fmt_ts_ui(&entry.ts), mark, l));
                } else {
                    lines.push(format!("    {}", l));
                }
            }
        }
        if lines.is_empty() {
            lines.push("(nothing yet)".to_string());
        }
        self.open_viewer("Log", lines);
    }

    /// Blocking error notice over whatever modal is open.
    pub(in crate::tui_shell) fn alert(&mut self, title: &str, msg: String) {
        self.push_error(msg.clone());
        let resume = self.modal.take().map(Box::new);
        let mut lines: Vec<String> = msg.lines().map(str::to_string).collect();
        lines.push(String::new());
        lines.push("Enter or Esc to dismiss.".to_string());
        self.modal = Some(Modal {
            title: title.to_string(),
            lines,
            scroll: 0,
            kind: ModalKind::Alert { resume },
            input: Input::default(),
        });
    }

    pub(in crate::tui_shell) fn dismiss_alert(&mut self) {
        if let Some(Modal {
            kind: ModalKind::Alert { resume },
            ..
        }) = self.modal.take()
        {
            self.modal = resume.map(|m| *m);
        }
    }

    pub(in crate::tui_shell) fn open_modal(&mut self, title: impl Into<String>, kind: ModalKind) {
        self.open_modal_with_lines(title, Vec::new(), kind);
    }

    pub(in crate::tui_shell) fn open_modal_with_lines(
        &mut self,
        title: impl Into<String>,
        lines: Vec<String>,
        kind: ModalKind,
    ) {
        self.modal = Some(Modal {
            title: title.into(),
            lines,
            scroll: 0,
            kind,
            input: Input::default(),
        });
    }

    pub(in crate::tui_shell) fn open_viewer(&mut self, title: impl Into<String>, lines: Vec<String>) {
        self.open_modal_with_lines(title, lines, ModalKind::Viewer);
    }

    pub(in crate::tui_shell) fn open_form(&mut self, form: FormState) {
        let title = form.title();
        self.open_modal(title, ModalKind::Form(Box::new(form)));
    }

    pub(in crate::tui_shell) fn close_modal(&mut self) {
        self.modal = None;
    }
}
