use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

use crate::formatting::theme::helpers::feedback_status_color;
use crate::formatting::truncate;
use crate::interactive::app::{App, Popup};
use crate::interactive::layout::centered_popup;
use crate::interactive::ui::tui_color;
use crate::models::FeedbackStatus;

/// Draw the feedback status picker.
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let Some(Popup::StatusPicker { email }) = &app.popup else {
        return;
    };

    let current = app.feedback.view.find(email).map(|row| row.status);

    let width: u16 = 40;
    let height: u16 = FeedbackStatus::ALL.len() as u16 + 4;
    let popup_area = centered_popup(width, height, area);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Status: {} ", truncate(email, 26)))
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let items: Vec<ListItem> = FeedbackStatus::ALL
        .iter()
        .enumerate()
        .map(|(i, status)| {
            let marker = if current == Some(*status) { "●" } else { " " };
            let style = if i == app.picker_index {
                Style::default()
                    .fg(Color::Rgb(0, 0, 0))
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(tui_color(feedback_status_color(*status)))
            };
            ListItem::new(Line::from(Span::styled(format!(" {} {} ", marker, status), style)))
        })
        .collect();

    let list_area = Rect::new(inner.x, inner.y, inner.width, inner.height.saturating_sub(1));
    frame.render_widget(List::new(items), list_area);

    // Hints at the bottom
    let hints_area = Rect::new(
        inner.x,
        inner.y + inner.height.saturating_sub(1),
        inner.width,
        1,
    );
    let hints = Paragraph::new(Line::from(Span::styled(
        "\u{2191}/\u{2193} Navigate  Enter: Select  Esc: Cancel",
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(hints, hints_area);
}
