pub mod confirm;
pub mod help;
pub mod picker;

use ratatui::{layout::Rect, Frame};

use crate::interactive::app::{App, Popup};

/// Draw the active popup, if any. Draws on top of everything.
pub fn draw_popup(frame: &mut Frame, area: Rect, app: &App) {
    let Some(popup) = &app.popup else { return };

    match popup {
        Popup::ConfirmDelete { .. } => confirm::draw(frame, area, app),
        Popup::StatusPicker { .. } => picker::draw(frame, area, app),
        Popup::Help => help::draw(frame, area, app),
    }
}
