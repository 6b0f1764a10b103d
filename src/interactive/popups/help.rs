use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::interactive::app::App;
use crate::interactive::layout::centered_popup;

/// Draw the keyboard shortcuts overlay.
pub fn draw(frame: &mut Frame, area: Rect, _app: &App) {
    let width: u16 = 62;
    let height: u16 = 13;
    let popup_area = centered_popup(width, height, area);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Keyboard Shortcuts ")
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let header_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let key_style = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(Color::White);

    let lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled(format!("{:<30}", "Navigation"), header_style),
            Span::styled("Actions", header_style),
        ]),
        help_row("Tab", "Next page", "/", "Search (Esc clears)", key_style, desc_style),
        help_row("1-5", "Jump to page", "m", "Load more", key_style, desc_style),
        help_row("j/k", "Move up/down", "d", "Delete", key_style, desc_style),
        help_row("[", "Collapse sidebar", "s", "Feedback status", key_style, desc_style),
        help_row("n", "Menu overlay", "r", "Refresh", key_style, desc_style),
        help_row("?", "This help", "x", "Dismiss notification", key_style, desc_style),
        help_row("q", "Quit", "", "", key_style, desc_style),
    ];

    let content_area = Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(2), inner.height.saturating_sub(1));
    frame.render_widget(Paragraph::new(lines), content_area);

    let footer_area = Rect::new(
        inner.x,
        inner.y + inner.height.saturating_sub(1),
        inner.width,
        1,
    );
    let footer = Paragraph::new(Line::from(Span::styled(
        "Press ? or Esc to close",
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(footer, footer_area);
}

fn help_row<'a>(
    nav_key: &'a str,
    nav_desc: &'a str,
    act_key: &'a str,
    act_desc: &'a str,
    key_style: Style,
    desc_style: Style,
) -> Line<'a> {
    let mut spans = vec![
        Span::styled(format!("{:<6}", nav_key), key_style),
        Span::styled(format!("{:<24}", nav_desc), desc_style),
    ];
    if !act_key.is_empty() {
        spans.push(Span::styled(format!("{:<4}", act_key), key_style));
        spans.push(Span::styled(act_desc, desc_style));
    }
    Line::from(spans)
}
