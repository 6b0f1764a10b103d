use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::time::Duration;

use super::fakes::{chat, feedback, team, users, FixedStats, MemoryStore};
use crate::interactive::app::{App, AppMessage, Mode, Popup, Stores};
use crate::interactive::event::Event;
use crate::interactive::handlers::handle_action;
use crate::interactive::keys::Action;
use crate::models::{FeedbackStatus, OverviewStats};
use crate::views::{Destination, NotificationKind, Scoped};

struct Harness {
    app: App,
    events: Receiver<Event>,
    feedback: Arc<MemoryStore<crate::models::Feedback>>,
}

fn harness(feedback_store: MemoryStore<crate::models::Feedback>) -> Harness {
    let (sender, events) = mpsc::channel();
    let feedback = Arc::new(feedback_store);
    let stores = Stores {
        users: Arc::new(MemoryStore::new(users(5))),
        teams: Arc::new(MemoryStore::new(vec![team("t1", "Core"), team("t2", "Infra")])),
        chats: Arc::new(MemoryStore::new(vec![chat("m1", "hello")])),
        feedback: feedback.clone(),
        stats: Arc::new(FixedStats(OverviewStats {
            total_users: Some(5),
            active_users: None,
            total_teams: Some(2),
        })),
    };
    Harness {
        app: App::new(stores, sender),
        events,
        feedback,
    }
}

fn feedback_rows() -> MemoryStore<crate::models::Feedback> {
    MemoryStore::new(vec![
        feedback("ada@example.com", "Love it", FeedbackStatus::Unread),
        feedback("bob@example.com", "Bug report", FeedbackStatus::Resolved),
    ])
}

fn next_loaded(events: &Receiver<Event>) -> Scoped<AppMessage> {
    loop {
        match events.recv_timeout(Duration::from_secs(5)) {
            Ok(Event::Loaded(scoped)) => return scoped,
            Ok(_) => continue,
            Err(e) => panic!("no result arrived: {}", e),
        }
    }
}

fn settle(h: &mut Harness) {
    let scoped = next_loaded(&h.events);
    h.app.handle_message(scoped);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_dashboard_mount_loads_stat_cards() {
    let mut h = harness(feedback_rows());
    h.app.mount_current();
    assert!(h.app.overview.is_loading());

    settle(&mut h);

    let values: Vec<String> = h.app.overview.cards().into_iter().map(|c| c.value).collect();
    assert_eq!(values, vec!["5", "Error", "2"]);
    assert!(!h.app.overview.is_loading());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_navigation_fetches_destination() {
    let mut h = harness(feedback_rows());
    handle_action(&mut h.app, Action::GoTo(Destination::Users));
    assert_eq!(h.app.current(), Destination::Users);

    settle(&mut h);

    assert_eq!(h.app.users.view.len(), 5);
    assert_eq!(h.app.current_list().unwrap().visible_len(), 3);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_results_from_a_left_page_are_discarded() {
    let mut h = harness(feedback_rows());
    h.app.navigate(Destination::Users);
    let stale = next_loaded(&h.events);

    h.app.navigate(Destination::Teams);
    h.app.handle_message(stale);
    assert!(h.app.users.view.is_empty());

    settle(&mut h);
    assert_eq!(h.app.teams.view.len(), 2);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_search_mode_filters_live_and_escape_clears() {
    let mut h = harness(feedback_rows());
    h.app.navigate(Destination::Users);
    settle(&mut h);

    handle_action(&mut h.app, Action::Search);
    assert_eq!(h.app.mode, Mode::Search);
    for c in "user3".chars() {
        handle_action(&mut h.app, Action::TypeChar(c));
    }
    assert_eq!(h.app.current_list().unwrap().filtered_len(), 1);

    handle_action(&mut h.app, Action::Cancel);
    assert_eq!(h.app.mode, Mode::Normal);
    assert_eq!(h.app.current_list().unwrap().filtered_len(), 5);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_load_more_key_reveals_next_step() {
    let mut h = harness(feedback_rows());
    h.app.navigate(Destination::Users);
    settle(&mut h);

    handle_action(&mut h.app, Action::LoadMore);
    assert_eq!(h.app.current_list().unwrap().visible_len(), 5);
    assert_eq!(h.app.current_list().unwrap().remaining(), 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_confirmed_delete_removes_row_after_commit() {
    let mut h = harness(feedback_rows());
    h.app.navigate(Destination::Users);
    settle(&mut h);

    handle_action(&mut h.app, Action::MoveDown);
    handle_action(&mut h.app, Action::Delete);
    let Some(Popup::ConfirmDelete { key, .. }) = h.app.popup.clone() else {
        panic!("expected a confirmation popup");
    };
    assert_eq!(key, "2");

    handle_action(&mut h.app, Action::Confirm);
    assert!(h.app.popup.is_none());
    assert!(h.app.users.is_deleting("2"));
    assert_eq!(h.app.users.view.len(), 5);

    settle(&mut h);
    assert_eq!(h.app.users.view.len(), 4);
    assert!(h.app.users.view.find("2").is_none());
    let latest = h.app.notifications.latest().unwrap();
    assert_eq!(latest.kind, NotificationKind::Success);
    assert_eq!(latest.title, "User deleted successfully");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_cancelled_delete_sends_nothing() {
    let mut h = harness(feedback_rows());
    h.app.navigate(Destination::Feedbacks);
    settle(&mut h);

    handle_action(&mut h.app, Action::Delete);
    handle_action(&mut h.app, Action::Cancel);

    assert!(h.app.popup.is_none());
    assert_eq!(h.feedback.calls(), vec!["list".to_string()]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_status_picker_applies_optimistically_then_rolls_back() {
    let mut h = harness(feedback_rows().failing_writes("sheet is read-only"));
    h.app.navigate(Destination::Feedbacks);
    settle(&mut h);

    handle_action(&mut h.app, Action::ChangeStatus);
    assert_eq!(h.app.picker_index, 0);
    handle_action(&mut h.app, Action::PickerDown);
    handle_action(&mut h.app, Action::PickerDown);
    handle_action(&mut h.app, Action::Confirm);

    let status = |app: &App| app.feedback.view.find("ada@example.com").unwrap().status;
    assert_eq!(status(&h.app), FeedbackStatus::Resolved);

    settle(&mut h);
    assert_eq!(status(&h.app), FeedbackStatus::Unread);
    let latest = h.app.notifications.latest().unwrap();
    assert_eq!(latest.kind, NotificationKind::Error);
    assert_eq!(latest.message(), "Failed to update feedback status: sheet is read-only");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_status_change_outside_feedback_page_is_ignored() {
    let mut h = harness(feedback_rows());
    h.app.navigate(Destination::Users);
    settle(&mut h);

    handle_action(&mut h.app, Action::ChangeStatus);
    assert!(h.app.popup.is_none());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_overlay_closes_when_destination_chosen() {
    let mut h = harness(feedback_rows());
    handle_action(&mut h.app, Action::ToggleOverlay);
    assert!(h.app.shell.is_overlay_open());

    handle_action(&mut h.app, Action::NavDown);
    handle_action(&mut h.app, Action::NavDown);
    handle_action(&mut h.app, Action::Confirm);

    assert!(!h.app.shell.is_overlay_open());
    assert_eq!(h.app.current(), Destination::Teams);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_dismiss_removes_latest_notification() {
    let mut h = harness(feedback_rows());
    h.app.notifications.error("Failed to fetch users", "boom");
    handle_action(&mut h.app, Action::DismissNotification);
    assert!(h.app.notifications.is_empty());
}
