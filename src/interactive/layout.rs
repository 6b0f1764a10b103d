use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::constants::MAX_VISIBLE_NOTIFICATIONS;

/// Below this width the sidebar only appears as an overlay.
pub const NARROW_WIDTH: u16 = 80;

/// Top-level layout regions
pub struct AppLayout {
    pub header: Rect,
    pub body: Rect,
    pub notifications: Rect,
    pub footer: Rect,
}

/// Sidebar and page split within the body
pub struct BodyLayout {
    pub sidebar: Rect,
    pub main: Rect,
}

/// Calculate the top-level layout
pub fn app_layout(area: Rect, notification_count: usize) -> AppLayout {
    let notif_height = if notification_count > 0 {
        (notification_count.min(MAX_VISIBLE_NOTIFICATIONS) as u16) + 2
    } else {
        0
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(8),
            Constraint::Length(notif_height),
            Constraint::Length(1),
        ])
        .split(area);

    AppLayout {
        header: chunks[0],
        body: chunks[1],
        notifications: chunks[2],
        footer: chunks[3],
    }
}

pub fn is_narrow(area: Rect) -> bool {
    area.width < NARROW_WIDTH
}

/// Docks the sidebar on the left. On narrow terminals the page gets the
/// full width and the sidebar area is empty.
pub fn body_layout(area: Rect, sidebar_width: u16) -> BodyLayout {
    if is_narrow(area) {
        return BodyLayout {
            sidebar: Rect::default(),
            main: area,
        };
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(sidebar_width), Constraint::Min(20)])
        .split(area);

    BodyLayout {
        sidebar: chunks[0],
        main: chunks[1],
    }
}

/// Full-height panel anchored to the left edge, drawn over the page.
pub fn overlay_area(width: u16, area: Rect) -> Rect {
    Rect::new(area.x, area.y, width.min(area.width), area.height)
}

/// Center a popup of given width/height in the area
pub fn centered_popup(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_narrow_terminal_hides_docked_sidebar() {
        let body = body_layout(Rect::new(0, 0, 60, 20), 22);
        assert_eq!(body.sidebar, Rect::default());
        assert_eq!(body.main.width, 60);
    }

    #[test]
    fn test_wide_terminal_docks_sidebar() {
        let body = body_layout(Rect::new(0, 0, 120, 20), 22);
        assert_eq!(body.sidebar.width, 22);
        assert_eq!(body.main.width, 98);
    }

    #[test]
    fn test_notification_strip_is_capped() {
        let layout = app_layout(Rect::new(0, 0, 100, 40), 7);
        assert_eq!(layout.notifications.height, MAX_VISIBLE_NOTIFICATIONS as u16 + 2);
    }

    #[test]
    fn test_centered_popup_fits_small_area() {
        let popup = centered_popup(40, 10, Rect::new(0, 0, 30, 5));
        assert_eq!(popup.width, 30);
        assert_eq!(popup.height, 5);
    }
}
