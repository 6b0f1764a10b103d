use std::collections::HashSet;
use std::sync::Arc;

use super::list::ListView;
use super::notifications::NotificationCenter;
use super::optimistic::{apply_optimistic, PendingWrite};
use crate::client::{FeedbackStore, RecordStore};
use crate::error::{AdminError, AdminResult};
use crate::logging::{log_error, log_info, log_warn};
use crate::models::{Feedback, FeedbackStatus, Resource};

/// One list page: the store it talks to, the fetched records, and the
/// notifications raised by its operations.
///
/// Every remote operation comes in a split form (`begin_*` / `complete_*`)
/// for the event loop, where the call resolves on a later iteration, and
/// an `async` form that awaits in place.
pub struct ListPage<R: Resource, S: RecordStore<R> + ?Sized = dyn RecordStore<R>> {
    store: Arc<S>,
    pub view: ListView<R>,
    pub notifications: NotificationCenter,
    deleting: HashSet<String>,
    loading: bool,
}

pub type FeedbackPage = ListPage<Feedback, dyn FeedbackStore>;

impl<R: Resource, S: RecordStore<R> + ?Sized> ListPage<R, S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            view: ListView::new(),
            notifications: NotificationCenter::new(),
            deleting: HashSet::new(),
            loading: false,
        }
    }

    pub fn store(&self) -> Arc<S> {
        Arc::clone(&self.store)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_deleting(&self, key: &str) -> bool {
        self.deleting.contains(key)
    }

    /// Forgets work whose tasks were aborted when the page was left. The
    /// records go too; nothing is cached across views.
    pub fn unmount(&mut self) {
        self.loading = false;
        self.deleting.clear();
        self.view.reset();
    }

    pub fn begin_fetch(&mut self) {
        self.loading = true;
    }

    /// On failure the list is left empty and an error is raised.
    pub fn complete_fetch(&mut self, result: AdminResult<Vec<R>>) {
        self.loading = false;
        match result {
            Ok(records) => {
                log_info(&format!("Fetched {} {}", records.len(), R::PLURAL));
                self.view.replace(records);
            }
            Err(e) => {
                log_error(&format!("Error fetching {}: {}", R::PLURAL, e));
                self.view.replace(Vec::new());
                self.notifications
                    .error(format!("Failed to fetch {}", R::PLURAL), e.user_message());
            }
        }
    }

    pub async fn mount(&mut self) {
        self.begin_fetch();
        let result = self.store.list().await;
        self.complete_fetch(result);
    }

    /// Validates the key before any network call. An empty key is logged
    /// and nothing else happens.
    pub fn begin_delete(&mut self, key: &str) -> AdminResult<()> {
        if key.trim().is_empty() {
            log_error(&format!("Refusing to delete {} with an empty key", R::SINGULAR.to_lowercase()));
            return Err(AdminError::MissingKey(format!("{} key is empty", R::SINGULAR)));
        }
        self.deleting.insert(key.to_string());
        Ok(())
    }

    /// Local state only changes after the remote delete succeeded. Returns
    /// whether a record was removed.
    pub fn complete_delete(&mut self, key: &str, result: &AdminResult<()>) -> bool {
        self.deleting.remove(key);
        match result {
            Ok(()) => {
                let removed = self.view.remove(key);
                if !removed {
                    log_warn(&format!("{} {} was already gone locally", R::SINGULAR, key));
                }
                log_info(&format!("Deleted {} {}", R::SINGULAR.to_lowercase(), key));
                self.notifications
                    .success(format!("{} deleted successfully", R::SINGULAR));
                removed
            }
            Err(e) => {
                log_error(&format!("Error deleting {} {}: {}", R::SINGULAR.to_lowercase(), key, e));
                self.notifications.error(
                    format!("Failed to delete {}", R::SINGULAR.to_lowercase()),
                    e.user_message(),
                );
                false
            }
        }
    }

    pub async fn delete(&mut self, key: &str) -> AdminResult<()> {
        self.begin_delete(key)?;
        let result = self.store.remove(key).await;
        self.complete_delete(key, &result);
        result
    }
}

impl ListPage<Feedback, dyn FeedbackStore> {
    /// Writes the new status locally and returns the snapshot needed to
    /// undo it. Fails without touching state if the email is empty or
    /// unknown.
    pub fn begin_status_change(
        &mut self,
        email: &str,
        status: FeedbackStatus,
    ) -> AdminResult<PendingWrite<FeedbackStatus>> {
        if email.trim().is_empty() {
            log_error("Refusing to update feedback with an empty email");
            return Err(AdminError::MissingKey("feedback email is empty".to_string()));
        }
        let row = self.view.find_mut(email).ok_or_else(|| {
            AdminError::MissingKey(format!("no feedback from '{}'", email))
        })?;
        Ok(PendingWrite::begin(&mut row.status, email, status))
    }

    /// Reverts the status on failure. Returns true if it rolled back.
    pub fn settle_status_change(
        &mut self,
        pending: PendingWrite<FeedbackStatus>,
        result: &AdminResult<()>,
    ) -> bool {
        let email = pending.key.clone();
        let next = pending.next;
        let previous = pending.previous;
        let slot = self.view.find_mut(&email).map(|row| &mut row.status);
        let rolled_back = pending.settle(slot, result);
        self.report_status_change(&email, next, previous, result);
        rolled_back
    }

    pub async fn change_status(&mut self, email: &str, status: FeedbackStatus) -> AdminResult<()> {
        if email.trim().is_empty() {
            log_error("Refusing to update feedback with an empty email");
            return Err(AdminError::MissingKey("feedback email is empty".to_string()));
        }
        let store = self.store();
        let row = self.view.find_mut(email).ok_or_else(|| {
            AdminError::MissingKey(format!("no feedback from '{}'", email))
        })?;
        let previous = row.status;

        let result = apply_optimistic(&mut row.status, status, move || async move {
            store.update_status(email, status).await
        })
        .await;

        self.report_status_change(email, status, previous, &result);
        result
    }

    fn report_status_change(
        &mut self,
        email: &str,
        next: FeedbackStatus,
        previous: FeedbackStatus,
        result: &AdminResult<()>,
    ) {
        match result {
            Ok(()) => {
                log_info(&format!("Feedback {} status {} -> {}", email, previous, next));
                self.notifications.success(format!("Status set to {}", next));
            }
            Err(e) => {
                log_error(&format!(
                    "Error updating feedback status for {}: {}; rolled back to {}",
                    email, e, previous
                ));
                self.notifications
                    .error("Failed to update feedback status", e.user_message());
            }
        }
    }
}
