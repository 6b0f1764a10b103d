use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::app::{App, Mode};
use super::layout::{app_layout, body_layout, is_narrow, overlay_area};
use super::panels::{header, overview, sidebar, table};
use super::{notifications, popups};
use crate::formatting::theme::{theme_color, SemanticColor};
use crate::views::Destination;

pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.size();
    let layout = app_layout(area, app.notifications.visible().len());

    header::draw_header(frame, layout.header, app);

    let body = body_layout(layout.body, app.shell.width());
    if body.sidebar.width > 0 {
        sidebar::draw_sidebar(frame, body.sidebar, app, false);
    }

    match app.current() {
        Destination::Dashboard => overview::draw_overview(frame, body.main, app),
        _ => {
            if let Some(list) = app.current_list() {
                table::draw_table(frame, body.main, list, app.selected, app.mode == Mode::Search);
            }
        }
    }

    notifications::draw(frame, layout.notifications, app);
    draw_footer(frame, layout.footer, app);

    if app.shell.is_overlay_open() && is_narrow(area) {
        sidebar::draw_sidebar(frame, overlay_area(sidebar::OVERLAY_WIDTH, layout.body), app, true);
    }

    popups::draw_popup(frame, area, app);
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let hints: &[(&str, &str)] = if app.popup.is_some() {
        &[]
    } else if app.mode == Mode::Search {
        &[("Enter", "keep"), ("Esc", "clear"), ("↑/↓", "move")]
    } else if app.shell.is_overlay_open() {
        &[("j/k", "move"), ("Enter", "open"), ("Esc", "close")]
    } else {
        match app.current() {
            Destination::Dashboard => &[("Tab", "pages"), ("r", "refresh"), ("n", "menu"), ("?", "help"), ("q", "quit")],
            Destination::Feedbacks => &[
                ("/", "search"),
                ("m", "more"),
                ("s", "status"),
                ("d", "delete"),
                ("r", "refresh"),
                ("?", "help"),
                ("q", "quit"),
            ],
            _ => &[
                ("/", "search"),
                ("m", "more"),
                ("d", "delete"),
                ("r", "refresh"),
                ("?", "help"),
                ("q", "quit"),
            ],
        }
    };

    let key_style = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(Color::DarkGray);
    let mut spans = vec![Span::raw(" ")];
    for (key, desc) in hints {
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::styled(format!(" {}  ", desc), desc_style));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Maps a theme color onto the terminal palette so the dashboard and the
/// CLI output agree.
pub fn tui_color(semantic: SemanticColor) -> Color {
    use colored::Color as C;
    match theme_color(semantic) {
        C::Black => Color::Black,
        C::Red => Color::Red,
        C::Green => Color::Green,
        C::Yellow => Color::Yellow,
        C::Blue => Color::Blue,
        C::Magenta => Color::Magenta,
        C::Cyan => Color::Cyan,
        C::White => Color::Gray,
        C::BrightBlack => Color::DarkGray,
        C::BrightRed => Color::LightRed,
        C::BrightGreen => Color::LightGreen,
        C::BrightYellow => Color::LightYellow,
        C::BrightBlue => Color::LightBlue,
        C::BrightMagenta => Color::LightMagenta,
        C::BrightCyan => Color::LightCyan,
        C::BrightWhite => Color::White,
        C::TrueColor { r, g, b } => Color::Rgb(r, g, b),
    }
}
