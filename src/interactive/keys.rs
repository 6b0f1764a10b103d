use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::interactive::app::{Mode, Popup};
use crate::views::Destination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Navigation
    MoveUp,
    MoveDown,
    NextPage,
    PreviousPage,
    GoTo(Destination),

    // Sidebar
    ToggleCollapse,
    ToggleOverlay,
    NavUp,
    NavDown,

    // Page actions
    Search,
    LoadMore,
    Delete,
    ChangeStatus,
    Refresh,

    // Popups and search input
    Confirm,
    Cancel,
    TypeChar(char),
    Backspace,
    PickerUp,
    PickerDown,

    // General
    Help,
    Quit,
    DismissNotification,

    None,
}

/// Keys are read in order of precedence: popup, search input, overlay
/// sidebar, then the page itself.
pub fn map_key(key: KeyEvent, mode: Mode, popup: Option<&Popup>, overlay_open: bool) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }
    if let Some(popup) = popup {
        return map_popup_key(key, popup);
    }
    if mode == Mode::Search {
        return map_search_key(key);
    }
    if overlay_open {
        return map_overlay_key(key);
    }
    map_page_key(key)
}

fn destination_key(c: char) -> Option<Destination> {
    let index = c.to_digit(10)? as usize;
    index.checked_sub(1).and_then(|i| Destination::ALL.get(i).copied())
}

fn map_page_key(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('j') | KeyCode::Down => Action::MoveDown,
        KeyCode::Char('k') | KeyCode::Up => Action::MoveUp,
        KeyCode::Tab => Action::NextPage,
        KeyCode::BackTab => Action::PreviousPage,
        KeyCode::Char(c @ '1'..='5') => destination_key(c).map(Action::GoTo).unwrap_or(Action::None),
        KeyCode::Char('/') => Action::Search,
        KeyCode::Char('m') => Action::LoadMore,
        KeyCode::Char('d') | KeyCode::Delete => Action::Delete,
        KeyCode::Char('s') => Action::ChangeStatus,
        KeyCode::Char('r') => Action::Refresh,
        KeyCode::Char('[') => Action::ToggleCollapse,
        KeyCode::Char('n') => Action::ToggleOverlay,
        KeyCode::Char('x') => Action::DismissNotification,
        KeyCode::Char('?') => Action::Help,
        _ => Action::None,
    }
}

fn map_overlay_key(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('j') | KeyCode::Down => Action::NavDown,
        KeyCode::Char('k') | KeyCode::Up => Action::NavUp,
        KeyCode::Enter => Action::Confirm,
        KeyCode::Char(c @ '1'..='5') => destination_key(c).map(Action::GoTo).unwrap_or(Action::None),
        KeyCode::Esc | KeyCode::Char('n') => Action::ToggleOverlay,
        _ => Action::None,
    }
}

fn map_search_key(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Enter => Action::Confirm,
        KeyCode::Esc => Action::Cancel,
        KeyCode::Backspace => Action::Backspace,
        KeyCode::Down => Action::MoveDown,
        KeyCode::Up => Action::MoveUp,
        KeyCode::Char(c) => Action::TypeChar(c),
        _ => Action::None,
    }
}

fn map_popup_key(key: KeyEvent, popup: &Popup) -> Action {
    match popup {
        Popup::Help => match key.code {
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => Action::Cancel,
            _ => Action::None,
        },
        Popup::ConfirmDelete { .. } => match key.code {
            KeyCode::Char('y') | KeyCode::Enter => Action::Confirm,
            KeyCode::Char('n') | KeyCode::Esc => Action::Cancel,
            _ => Action::None,
        },
        Popup::StatusPicker { .. } => match key.code {
            KeyCode::Char('j') | KeyCode::Down => Action::PickerDown,
            KeyCode::Char('k') | KeyCode::Up => Action::PickerUp,
            KeyCode::Enter => Action::Confirm,
            KeyCode::Esc | KeyCode::Char('q') => Action::Cancel,
            _ => Action::None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_number_keys_jump_to_destinations() {
        assert_eq!(
            map_key(press(KeyCode::Char('1')), Mode::Normal, None, false),
            Action::GoTo(Destination::Dashboard)
        );
        assert_eq!(
            map_key(press(KeyCode::Char('5')), Mode::Normal, None, false),
            Action::GoTo(Destination::Feedbacks)
        );
    }

    #[test]
    fn test_search_mode_captures_letters() {
        assert_eq!(
            map_key(press(KeyCode::Char('q')), Mode::Search, None, false),
            Action::TypeChar('q')
        );
        assert_eq!(map_key(press(KeyCode::Esc), Mode::Search, None, false), Action::Cancel);
    }

    #[test]
    fn test_popup_takes_precedence() {
        let popup = Popup::ConfirmDelete {
            kind: crate::models::ResourceKind::Users,
            key: "u1".to_string(),
            label: "Ada".to_string(),
        };
        assert_eq!(
            map_key(press(KeyCode::Char('y')), Mode::Search, Some(&popup), true),
            Action::Confirm
        );
    }

    #[test]
    fn test_overlay_escape_closes_it() {
        assert_eq!(
            map_key(press(KeyCode::Esc), Mode::Normal, None, true),
            Action::ToggleOverlay
        );
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(key, Mode::Search, None, false), Action::Quit);
    }
}
