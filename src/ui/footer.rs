use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR, STATUS_OK, STATUS_PENDING};
use crate::viewmodel::FetchStatus;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const LIST_HINTS: &str = " ↑/↓: Select │ Enter: Open │ R: Reload │ Q: Quit";
const DETAIL_HINTS: &str = " Esc: Back │ R: Reload │ Q: Quit";

pub struct Footer<'a> {
    status: &'a FetchStatus,
    on_details: bool,
}

impl<'a> Footer<'a> {
    pub fn new(status: &'a FetchStatus, on_details: bool) -> Self {
        Self { status, on_details }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let hints = if self.on_details {
            DETAIL_HINTS
        } else {
            LIST_HINTS
        };
        let (status_text, status_color) = status_label(self.status);
        let status_text = format!("  {status_text}");
        let version = format!("v{} ", VERSION);

        // Char count, not bytes: hints contain box-drawing characters.
        let used = hints.chars().count() + status_text.chars().count() + version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width.saturating_sub(used);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(status_text, Style::default().fg(status_color)),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}

pub fn status_label(status: &FetchStatus) -> (String, ratatui::style::Color) {
    match status {
        FetchStatus::Idle => (String::new(), HEADER_TEXT),
        FetchStatus::Loading => ("Loading…".to_string(), STATUS_PENDING),
        FetchStatus::Loaded { count } => (format!("{count} items"), STATUS_OK),
        FetchStatus::Failed { message } => (format!("Error: {message}"), STATUS_ERROR),
    }
}
