use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem},
    Frame,
};

use crate::interactive::app::App;
use crate::views::Destination;

pub const OVERLAY_WIDTH: u16 = 24;

/// Navigation list. The docked variant follows the collapsed setting; the
/// overlay always shows labels and a cursor.
pub fn draw_sidebar(frame: &mut Frame, area: Rect, app: &App, overlay: bool) {
    let collapsed = app.shell.is_collapsed() && !overlay;

    let border_style = if overlay {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let title = if collapsed { "" } else { " Menu " };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(border_style);

    let items: Vec<ListItem> = Destination::ALL
        .iter()
        .enumerate()
        .map(|(i, destination)| {
            let active = app.shell.is_active(*destination);
            let text = if collapsed {
                format!(" {}", destination.icon())
            } else {
                let marker = if active { "►" } else { " " };
                format!("{} {} {}  {}", marker, destination.icon(), destination.title(), i + 1)
            };

            let style = if overlay && i == app.nav_cursor {
                Style::default()
                    .bg(Color::Rgb(30, 35, 50))
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else if active {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Line::from(Span::styled(text, style)))
        })
        .collect();

    if overlay {
        frame.render_widget(Clear, area);
    }
    frame.render_widget(List::new(items).block(block), area);
}
