use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::interactive::app::App;

pub fn draw_overview(frame: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(0)])
        .split(area);

    let cards = app.overview.cards();
    let constraints: Vec<Constraint> = cards
        .iter()
        .map(|_| Constraint::Ratio(1, cards.len().max(1) as u32))
        .collect();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(rows[0]);

    for (card, slot) in cards.iter().zip(columns.iter()) {
        let value_style = if card.value == "Error" {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", card.title))
            .border_style(Style::default().fg(Color::DarkGray));
        let body = Paragraph::new(vec![Line::raw(""), Line::from(Span::styled(card.value.clone(), value_style))])
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(body, *slot);
    }

    let note = if app.overview.is_loading() {
        "Refreshing…"
    } else {
        "Active users were seen in the last 5 minutes. Press r to refresh."
    };
    let footer = Paragraph::new(Line::from(Span::styled(note, Style::default().fg(Color::DarkGray))));
    frame.render_widget(footer, Rect::new(rows[1].x + 1, rows[1].y, rows[1].width.saturating_sub(1), 1.min(rows[1].height)));
}
