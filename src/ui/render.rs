use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::screens::{DetailView, ListView, Screen};
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, ITEM_BUTTON, ITEM_DESCRIPTION, ITEM_TITLE,
};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let screen = app.screen();
    let status = app.status();

    frame.render_widget(Header::new(screen.title(), app.can_go_back()).widget(), header);
    frame.render_widget(Clear, body);
    match &screen {
        Screen::List(view) => draw_list(frame, view, body),
        Screen::Details(Some(view)) => draw_details(frame, view, body),
        // Unknown id: the body stays blank.
        Screen::Details(None) => {}
    }
    let on_details = matches!(screen, Screen::Details(_));
    frame.render_widget(Footer::new(&status, on_details).widget(footer), footer);
}

fn draw_list(frame: &mut Frame<'_>, view: &ListView, area: Rect) {
    let rows: Vec<ListItem> = view
        .rows
        .iter()
        .map(|row| {
            ListItem::new(vec![
                Line::from(Span::styled(
                    row.title.clone(),
                    Style::default().fg(ITEM_TITLE).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    row.description.clone(),
                    Style::default().fg(ITEM_DESCRIPTION),
                )),
                Line::from(vec![
                    Span::raw("  [ "),
                    Span::styled(row.button.clone(), Style::default().fg(ITEM_BUTTON)),
                    Span::raw(" ]"),
                ]),
                Line::from(""),
            ])
        })
        .collect();

    let selected = view.rows.iter().position(|row| row.selected);
    let mut state = ListState::default().with_selected(selected);
    let list = List::new(rows)
        .block(
            Block::default()
                .borders(Borders::LEFT | Borders::RIGHT)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
        .highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT))
        .highlight_symbol("› ");
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_details(frame: &mut Frame<'_>, view: &DetailView, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            view.title.clone(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            view.description.clone(),
            Style::default().fg(HEADER_TEXT),
        )),
    ];
    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::LEFT | Borders::RIGHT)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(paragraph, inset(area, 2, 1));
}

fn inset(area: Rect, horizontal: u16, vertical: u16) -> Rect {
    Rect {
        x: area.x + horizontal.min(area.width / 2),
        y: area.y + vertical.min(area.height / 2),
        width: area.width.saturating_sub(horizontal * 2),
        height: area.height.saturating_sub(vertical * 2),
    }
}
