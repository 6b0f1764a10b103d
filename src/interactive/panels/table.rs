use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::formatting::truncate;
use crate::interactive::app::ListControl;
use crate::interactive::ui::tui_color;

/// Draws one list page: search line, column header, revealed rows, and
/// the load-more hint while rows remain hidden.
pub fn draw_table(frame: &mut Frame, area: Rect, list: &dyn ListControl, selected: usize, searching: bool) {
    let title = format!(
        " {} ({}/{}) ",
        capitalize(list.plural()),
        list.visible_len(),
        list.filtered_len()
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 {
        return;
    }

    let mut y = inner.y;
    if searching || !list.search().is_empty() {
        let cursor = if searching { "▏" } else { "" };
        let line = Line::from(vec![
            Span::styled(" / ", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::styled(format!("{}{}", list.search(), cursor), Style::default().fg(Color::White)),
        ]);
        frame.render_widget(Paragraph::new(line), Rect::new(inner.x, y, inner.width, 1));
        y += 1;
    }

    let rows = list.rows();
    let body_height = inner.height.saturating_sub(y - inner.y);

    if rows.is_empty() {
        let text = if list.is_loading() && list.total_len() == 0 {
            "Loading…".to_string()
        } else {
            list.empty_message().unwrap_or_default()
        };
        let empty = Paragraph::new(Line::from(Span::styled(format!(" {}", text), Style::default().fg(Color::DarkGray))));
        frame.render_widget(empty, Rect::new(inner.x, y, inner.width, body_height.min(1)));
        return;
    }

    let columns = list.columns();
    let header: Vec<Span> = columns
        .iter()
        .map(|c| {
            Span::styled(
                format!(" {:<width$}", c.title, width = c.width),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )
        })
        .collect();
    frame.render_widget(Paragraph::new(Line::from(header)), Rect::new(inner.x, y, inner.width, 1.min(body_height)));
    y += 1;

    let footer_height: u16 = if list.remaining() > 0 { 1 } else { 0 };
    let list_height = inner.height.saturating_sub(y - inner.y).saturating_sub(footer_height);
    let visible_rows = list_height as usize;
    let scroll_offset = if selected >= visible_rows && visible_rows > 0 {
        selected - visible_rows + 1
    } else {
        0
    };

    let items: Vec<ListItem> = rows
        .iter()
        .enumerate()
        .skip(scroll_offset)
        .take(visible_rows)
        .map(|(i, row)| {
            let base = if i == selected {
                Style::default().bg(Color::Rgb(30, 35, 50)).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let spans: Vec<Span> = row
                .cells
                .iter()
                .zip(columns)
                .enumerate()
                .map(|(index, (cell, column))| {
                    let text = format!(" {:<width$}", truncate(cell, column.width), width = column.width);
                    let fg = match row.badge {
                        _ if row.deleting => Color::DarkGray,
                        Some((badge, color)) if badge == index => tui_color(color),
                        _ => Color::White,
                    };
                    Span::styled(text, base.fg(fg))
                })
                .collect();
            ListItem::new(Line::from(spans))
        })
        .collect();

    frame.render_widget(List::new(items), Rect::new(inner.x, y, inner.width, list_height));

    if footer_height > 0 {
        let hint = Line::from(vec![
            Span::styled(" m ", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::styled(
                format!("load more ({} hidden)", list.remaining()),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        let hint_y = inner.y + inner.height - 1;
        frame.render_widget(Paragraph::new(hint), Rect::new(inner.x, hint_y, inner.width, 1));
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
