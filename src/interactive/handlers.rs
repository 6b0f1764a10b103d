use std::io;
use std::time::Instant;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use super::app::{App, Mode, Popup, Stores};
use super::event::{Event, EventHandler};
use super::keys::{map_key, Action};
use crate::cli_context::CliContext;
use crate::error::{AdminError, AdminResult};
use crate::logging::{log_debug, log_error, log_info};
use crate::models::FeedbackStatus;
use crate::views::Destination;

type Backend = CrosstermBackend<io::Stdout>;

pub async fn run_interactive_mode(ctx: &mut CliContext) -> AdminResult<()> {
    log_info("Starting interactive mode");

    // Both services must be configured before the terminal is taken over.
    let database = ctx.database_client()?;
    let sheet = ctx.sheet_client()?;
    log_debug("Clients ready");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    log_debug("Terminal initialized");

    let events = EventHandler::new(200);
    let mut app = App::new(Stores::from_clients(database, sheet), events.sender());
    app.mount_current();

    let result = event_loop(&mut terminal, &mut app, &events);
    if let Err(e) = &result {
        log_error(&format!("Interactive mode failed: {}", e));
    }

    log_info("Exiting interactive mode");
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop(terminal: &mut Terminal<Backend>, app: &mut App, events: &EventHandler) -> AdminResult<()> {
    loop {
        terminal.draw(|f| super::ui::draw(f, app))?;

        let event = events
            .recv()
            .map_err(|e| AdminError::TerminalError(format!("event channel closed: {}", e)))?;
        match event {
            Event::Key(key_event) => {
                let action = map_key(
                    key_event,
                    app.mode,
                    app.popup.as_ref(),
                    app.shell.is_overlay_open(),
                );
                if action != Action::None {
                    log_debug(&format!("Key {:?} -> {:?}", key_event.code, action));
                }
                handle_action(app, action);
            }
            Event::Tick => app.tick(Instant::now()),
            Event::Loaded(scoped) => app.handle_message(scoped),
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

pub fn handle_action(app: &mut App, action: Action) {
    if action == Action::Quit {
        app.should_quit = true;
        return;
    }

    if let Some(popup) = app.popup.clone() {
        handle_popup_action(app, popup, action);
        return;
    }

    if app.mode == Mode::Search {
        handle_search_action(app, action);
        return;
    }

    match action {
        Action::MoveUp => app.move_selection(-1),
        Action::MoveDown => app.move_selection(1),
        Action::NextPage => app.navigate(app.current().next()),
        Action::PreviousPage => app.navigate(app.current().previous()),
        Action::GoTo(destination) => app.navigate(destination),
        Action::ToggleCollapse => app.shell.toggle_collapse(),
        Action::ToggleOverlay => {
            app.nav_cursor = app.current().index();
            app.shell.toggle_overlay();
        }
        Action::NavUp => {
            app.nav_cursor = app.nav_cursor.saturating_sub(1);
        }
        Action::NavDown => {
            app.nav_cursor = (app.nav_cursor + 1).min(Destination::ALL.len() - 1);
        }
        Action::Confirm if app.shell.is_overlay_open() => {
            if let Some(destination) = Destination::ALL.get(app.nav_cursor).copied() {
                app.navigate(destination);
            }
        }
        Action::Search => {
            if app.current_list().is_some() {
                app.mode = Mode::Search;
            }
        }
        Action::LoadMore => {
            if let Some(list) = app.current_list_mut() {
                list.load_more();
            }
        }
        Action::Delete => app.request_delete(),
        Action::ChangeStatus => app.request_status_change(),
        Action::Refresh => app.refresh(),
        Action::DismissNotification => {
            app.notifications.dismiss_latest();
        }
        Action::Help => app.popup = Some(Popup::Help),
        _ => {}
    }
}

fn handle_search_action(app: &mut App, action: Action) {
    match action {
        Action::TypeChar(c) => {
            if let Some(list) = app.current_list_mut() {
                list.push_search_char(c);
            }
            app.selected = 0;
        }
        Action::Backspace => {
            if let Some(list) = app.current_list_mut() {
                list.pop_search_char();
            }
            app.selected = 0;
        }
        Action::Confirm => app.mode = Mode::Normal,
        Action::Cancel => {
            if let Some(list) = app.current_list_mut() {
                list.clear_search();
            }
            app.selected = 0;
            app.mode = Mode::Normal;
        }
        Action::MoveUp => app.move_selection(-1),
        Action::MoveDown => app.move_selection(1),
        _ => {}
    }
}

fn handle_popup_action(app: &mut App, popup: Popup, action: Action) {
    match (popup, action) {
        (_, Action::Cancel) => app.popup = None,
        (Popup::ConfirmDelete { kind, key, .. }, Action::Confirm) => app.confirm_delete(kind, key),
        (Popup::StatusPicker { .. }, Action::PickerUp) => {
            app.picker_index = app.picker_index.saturating_sub(1);
        }
        (Popup::StatusPicker { .. }, Action::PickerDown) => {
            app.picker_index = (app.picker_index + 1).min(FeedbackStatus::ALL.len() - 1);
        }
        (Popup::StatusPicker { email }, Action::Confirm) => {
            if let Some(status) = FeedbackStatus::ALL.get(app.picker_index).copied() {
                app.confirm_status(email, status);
            }
        }
        _ => {}
    }
}
