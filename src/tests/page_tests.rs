use std::sync::Arc;

use super::fakes::{feedback, users, MemoryStore};
use crate::client::{FeedbackStore, RecordStore};
use crate::error::AdminError;
use crate::models::{Feedback, FeedbackStatus, User};
use crate::views::{FeedbackPage, ListPage, NotificationKind};

fn user_page(store: Arc<MemoryStore<User>>) -> ListPage<User> {
    let store: Arc<dyn RecordStore<User>> = store;
    ListPage::new(store)
}

fn feedback_page(store: Arc<MemoryStore<Feedback>>) -> FeedbackPage {
    let store: Arc<dyn FeedbackStore> = store;
    FeedbackPage::new(store)
}

fn feedback_rows() -> Vec<Feedback> {
    vec![
        feedback("ada@example.com", "Love the app", FeedbackStatus::Unread),
        feedback("bob@example.com", "Crashes on login", FeedbackStatus::InProgress),
    ]
}

#[tokio::test]
async fn test_mount_loads_records_and_reveals_three() {
    let store = Arc::new(MemoryStore::new(users(7)));
    let mut page = user_page(store);

    page.mount().await;

    assert!(!page.is_loading());
    assert_eq!(page.view.len(), 7);
    assert_eq!(page.view.visible().len(), 3);
    assert!(page.notifications.all().is_empty());
}

#[tokio::test]
async fn test_fetch_failure_leaves_empty_list_and_notifies() {
    let store = Arc::new(MemoryStore::new(users(3)).failing_list("permission denied for table users"));
    let mut page = user_page(store);
    page.view.replace(users(2));

    page.mount().await;

    assert!(page.view.is_empty());
    assert_eq!(page.view.empty_message().as_deref(), Some("No users found"));
    let notes = page.notifications.all();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].kind, NotificationKind::Error);
    assert_eq!(notes[0].title, "Failed to fetch users");
    assert_eq!(notes[0].description.as_deref(), Some("permission denied for table users"));
}

#[tokio::test]
async fn test_delete_success_removes_exactly_one_record() {
    let store = Arc::new(MemoryStore::new(users(4)));
    let mut page = user_page(store.clone());
    page.mount().await;

    page.delete("2").await.unwrap();

    assert_eq!(page.view.len(), 3);
    assert!(page.view.find("2").is_none());
    assert!(!page.is_deleting("2"));
    assert_eq!(store.stored().len(), 3);
    let last = page.notifications.latest().unwrap();
    assert_eq!(last.kind, NotificationKind::Success);
    assert_eq!(last.title, "User deleted successfully");
}

#[tokio::test]
async fn test_delete_failure_keeps_every_record() {
    let store = Arc::new(MemoryStore::new(users(4)).failing_writes("row is referenced"));
    let mut page = user_page(store);
    page.mount().await;

    let result = page.delete("2").await;

    assert!(matches!(result, Err(AdminError::HttpStatus { status: 500, .. })));
    assert_eq!(page.view.len(), 4);
    assert!(page.view.find("2").is_some());
    let last = page.notifications.latest().unwrap();
    assert_eq!(last.kind, NotificationKind::Error);
    assert_eq!(last.title, "Failed to delete user");
    assert_eq!(last.message(), "Failed to delete user: row is referenced");
}

#[tokio::test]
async fn test_second_delete_of_same_key_is_local_no_op() {
    let store = Arc::new(MemoryStore::new(users(3)));
    let mut page = user_page(store);
    page.mount().await;

    page.delete("1").await.unwrap();
    page.delete("1").await.unwrap();

    assert_eq!(page.view.len(), 2);
}

#[tokio::test]
async fn test_empty_key_short_circuits_without_notification() {
    let store = Arc::new(MemoryStore::new(users(3)));
    let mut page = user_page(store.clone());
    page.mount().await;

    let result = page.delete("  ").await;

    assert!(matches!(result, Err(AdminError::MissingKey(_))));
    assert_eq!(page.view.len(), 3);
    assert!(page.notifications.all().is_empty());
    assert_eq!(store.calls(), vec!["list".to_string()]);
}

#[tokio::test]
async fn test_status_change_commits_new_value() {
    let store = Arc::new(MemoryStore::new(feedback_rows()));
    let mut page = feedback_page(store.clone());
    page.mount().await;

    page.change_status("ada@example.com", FeedbackStatus::Resolved).await.unwrap();

    assert_eq!(page.view.find("ada@example.com").unwrap().status, FeedbackStatus::Resolved);
    assert_eq!(store.stored()[0].status, FeedbackStatus::Resolved);
    assert!(store.calls().contains(&"update ada@example.com status=resolved".to_string()));
    assert_eq!(page.notifications.latest().unwrap().title, "Status set to resolved");
}

#[tokio::test]
async fn test_status_change_rolls_back_exactly_on_failure() {
    let store = Arc::new(MemoryStore::new(feedback_rows()).failing_writes("quota exceeded"));
    let mut page = feedback_page(store);
    page.mount().await;

    let result = page.change_status("ada@example.com", FeedbackStatus::Resolved).await;

    assert!(result.is_err());
    assert_eq!(page.view.find("ada@example.com").unwrap().status, FeedbackStatus::Unread);
    assert_eq!(page.view.find("bob@example.com").unwrap().status, FeedbackStatus::InProgress);
    let last = page.notifications.latest().unwrap();
    assert_eq!(last.kind, NotificationKind::Error);
    assert_eq!(last.message(), "Failed to update feedback status: quota exceeded");
}

#[tokio::test]
async fn test_split_status_change_shows_new_value_before_commit() {
    let store = Arc::new(MemoryStore::new(feedback_rows()));
    let mut page = feedback_page(store);
    page.mount().await;

    let pending = page
        .begin_status_change("ada@example.com", FeedbackStatus::Resolved)
        .unwrap();
    assert_eq!(page.view.find("ada@example.com").unwrap().status, FeedbackStatus::Resolved);
    assert_eq!(pending.previous, FeedbackStatus::Unread);

    let failure = Err(AdminError::HttpStatus {
        status: 502,
        message: String::new(),
    });
    assert!(page.settle_status_change(pending, &failure));
    assert_eq!(page.view.find("ada@example.com").unwrap().status, FeedbackStatus::Unread);
    assert_eq!(
        page.notifications.latest().unwrap().description.as_deref(),
        Some("Unknown error")
    );
}

#[tokio::test]
async fn test_status_change_for_unknown_email_touches_nothing() {
    let store = Arc::new(MemoryStore::new(feedback_rows()));
    let mut page = feedback_page(store.clone());
    page.mount().await;

    let result = page.change_status("nobody@example.com", FeedbackStatus::Resolved).await;
    assert!(matches!(result, Err(AdminError::MissingKey(_))));

    let result = page.change_status("", FeedbackStatus::Resolved).await;
    assert!(matches!(result, Err(AdminError::MissingKey(_))));

    assert!(page.notifications.all().is_empty());
    assert_eq!(store.calls(), vec!["list".to_string()]);
}

#[tokio::test]
async fn test_feedback_delete_uses_email_key() {
    let store = Arc::new(MemoryStore::new(feedback_rows()));
    let mut page = feedback_page(store.clone());
    page.mount().await;

    page.delete("bob@example.com").await.unwrap();

    assert_eq!(page.view.len(), 1);
    assert!(store.calls().contains(&"remove bob@example.com".to_string()));
    assert_eq!(page.notifications.latest().unwrap().title, "Feedback deleted successfully");
}

#[tokio::test]
async fn test_unmount_forgets_search_and_pending_deletes() {
    let store = Arc::new(MemoryStore::new(users(6)));
    let mut page = user_page(store);
    page.mount().await;
    page.view.set_search("user");
    page.begin_delete("3").unwrap();
    assert!(page.is_deleting("3"));

    page.unmount();

    assert!(!page.is_deleting("3"));
    assert_eq!(page.view.search(), "");
}

#[tokio::test]
async fn test_unmount_discards_records_until_refetch() {
    let store = Arc::new(MemoryStore::new(feedback_rows()));
    let mut page = feedback_page(store.clone());
    page.mount().await;
    let email = page.view.records()[0].email.clone();
    let before = page.view.records()[0].status;
    let next = FeedbackStatus::ALL
        .into_iter()
        .find(|s| *s != before)
        .unwrap();
    page.begin_status_change(&email, next).unwrap();

    page.unmount();

    assert!(page.view.is_empty());
    assert!(page.view.find(&email).is_none());

    page.mount().await;
    assert_eq!(page.view.find(&email).unwrap().status, before);
    assert_eq!(page.view.len(), store.stored().len());
}
