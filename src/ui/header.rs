use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Top bar: screen title, with a back marker when the stack can pop.
pub struct Header<'a> {
    title: &'a str,
    can_go_back: bool,
}

impl<'a> Header<'a> {
    pub fn new(title: &'a str, can_go_back: bool) -> Self {
        Self { title, can_go_back }
    }

    pub fn widget(&self) -> Paragraph<'a> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let mut spans = vec![Span::styled("  ", text_style)];
        if self.can_go_back {
            spans.push(Span::styled("←", text_style));
            spans.push(Span::styled("  │  ", separator_style));
        }
        spans.push(Span::styled(
            self.title,
            text_style.add_modifier(Modifier::BOLD),
        ));

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
