use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::formatting::truncate;
use crate::interactive::app::App;

pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let width = area.width as usize;
    let destination = app.current();

    let left = vec![
        Span::styled(
            " Admin Console ",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("{} {}", destination.icon(), destination.title()),
            Style::default().fg(Color::White),
        ),
    ];

    let mut right_parts = Vec::new();
    if let Some(list) = app.current_list() {
        if !list.search().is_empty() {
            right_parts.push(Span::styled(
                format!("search:{} ", truncate(list.search(), 16)),
                Style::default().fg(Color::Yellow),
            ));
        }
        if list.is_loading() {
            right_parts.push(Span::styled("loading… ", Style::default().fg(Color::Yellow)));
        }
    } else if app.overview.is_loading() {
        right_parts.push(Span::styled("loading… ", Style::default().fg(Color::Yellow)));
    }
    right_parts.push(Span::styled(
        format!("{} ", destination.href()),
        Style::default().fg(Color::DarkGray),
    ));

    let right_text_len: usize = right_parts.iter().map(|s| s.content.chars().count()).sum();
    let left_text_len: usize = left.iter().map(|s| s.content.chars().count()).sum();
    let pad = width.saturating_sub(left_text_len + right_text_len);

    let mut spans = left;
    spans.push(Span::raw(" ".repeat(pad)));
    spans.extend(right_parts);

    let header = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Rgb(20, 22, 30)));
    frame.render_widget(header, area);
}
