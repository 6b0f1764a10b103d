use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::time::Instant;

use super::event::Event;
use crate::client::{DatabaseClient, FeedbackStore, RecordStore, SheetClient, StatsSource};
use crate::error::AdminResult;
use crate::formatting::records::Column;
use crate::formatting::theme::SemanticColor;
use crate::formatting::Tabular;
use crate::logging::{log_debug, log_info};
use crate::models::{
    ChatMessage, Feedback, FeedbackStatus, OverviewStats, Resource, ResourceKind, Team, User,
};
use crate::views::{
    Destination, FeedbackPage, ListPage, NavigationShell, NotificationCenter, OverviewPage,
    PendingWrite, Scoped, ViewLifetime, ViewScope,
};

/// Outcome of a spawned remote call, applied on the UI thread.
pub enum AppMessage {
    Users(AdminResult<Vec<User>>),
    Teams(AdminResult<Vec<Team>>),
    Chats(AdminResult<Vec<ChatMessage>>),
    Feedback(AdminResult<Vec<Feedback>>),
    Overview(OverviewStats),
    Deleted {
        kind: ResourceKind,
        key: String,
        result: AdminResult<()>,
    },
    StatusChanged {
        pending: PendingWrite<FeedbackStatus>,
        result: AdminResult<()>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Search,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Popup {
    ConfirmDelete {
        kind: ResourceKind,
        key: String,
        label: String,
    },
    StatusPicker {
        email: String,
    },
    Help,
}

/// Data access handles for every page.
pub struct Stores {
    pub users: Arc<dyn RecordStore<User>>,
    pub teams: Arc<dyn RecordStore<Team>>,
    pub chats: Arc<dyn RecordStore<ChatMessage>>,
    pub feedback: Arc<dyn FeedbackStore>,
    pub stats: Arc<dyn StatsSource>,
}

impl Stores {
    pub fn from_clients(database: Arc<DatabaseClient>, sheet: Arc<SheetClient>) -> Self {
        Self {
            users: database.clone(),
            teams: database.clone(),
            chats: database.clone(),
            stats: database,
            feedback: sheet,
        }
    }
}

/// A visible row, flattened for drawing.
#[derive(Debug, Clone)]
pub struct RowView {
    pub key: String,
    pub cells: Vec<String>,
    pub badge: Option<(usize, SemanticColor)>,
    pub deleting: bool,
}

/// What the dashboard needs from whichever list page is showing.
pub trait ListControl {
    fn plural(&self) -> &'static str;
    fn columns(&self) -> &'static [Column];
    fn rows(&self) -> Vec<RowView>;
    fn search(&self) -> &str;
    fn push_search_char(&mut self, c: char);
    fn pop_search_char(&mut self);
    fn clear_search(&mut self);
    fn load_more(&mut self) -> bool;
    fn visible_len(&self) -> usize;
    fn filtered_len(&self) -> usize;
    fn total_len(&self) -> usize;
    fn remaining(&self) -> usize;
    fn empty_message(&self) -> Option<String>;
    fn is_loading(&self) -> bool;
    fn unmount(&mut self);
    fn notifications_mut(&mut self) -> &mut NotificationCenter;
}

impl<R: Tabular, S: RecordStore<R> + ?Sized> ListControl for ListPage<R, S> {
    fn plural(&self) -> &'static str {
        R::PLURAL
    }

    fn columns(&self) -> &'static [Column] {
        R::columns()
    }

    fn rows(&self) -> Vec<RowView> {
        self.view
            .visible()
            .into_iter()
            .map(|record| RowView {
                key: record.key().to_string(),
                cells: record.cells(),
                badge: record.badge(),
                deleting: self.is_deleting(record.key()),
            })
            .collect()
    }

    fn search(&self) -> &str {
        self.view.search()
    }

    fn push_search_char(&mut self, c: char) {
        self.view.push_search_char(c);
    }

    fn pop_search_char(&mut self) {
        self.view.pop_search_char();
    }

    fn clear_search(&mut self) {
        self.view.clear_search();
    }

    fn load_more(&mut self) -> bool {
        self.view.load_more()
    }

    fn visible_len(&self) -> usize {
        self.view.visible().len()
    }

    fn filtered_len(&self) -> usize {
        self.view.filtered().len()
    }

    fn total_len(&self) -> usize {
        self.view.len()
    }

    fn remaining(&self) -> usize {
        self.view.remaining()
    }

    fn empty_message(&self) -> Option<String> {
        self.view.empty_message()
    }

    fn is_loading(&self) -> bool {
        ListPage::is_loading(self)
    }

    fn unmount(&mut self) {
        ListPage::unmount(self);
    }

    fn notifications_mut(&mut self) -> &mut NotificationCenter {
        &mut self.notifications
    }
}

pub struct App {
    pub shell: NavigationShell,
    pub users: ListPage<User>,
    pub teams: ListPage<Team>,
    pub chats: ListPage<ChatMessage>,
    pub feedback: FeedbackPage,
    pub overview: OverviewPage,
    pub notifications: NotificationCenter,
    pub lifetime: ViewLifetime,
    pub mode: Mode,
    pub popup: Option<Popup>,
    pub selected: usize,
    pub picker_index: usize,
    pub nav_cursor: usize,
    pub should_quit: bool,
    sender: Sender<Event>,
}

impl App {
    pub fn new(stores: Stores, sender: Sender<Event>) -> Self {
        Self {
            shell: NavigationShell::new(Destination::Dashboard),
            users: ListPage::new(stores.users),
            teams: ListPage::new(stores.teams),
            chats: ListPage::new(stores.chats),
            feedback: FeedbackPage::new(stores.feedback),
            overview: OverviewPage::new(stores.stats),
            notifications: NotificationCenter::new(),
            lifetime: ViewLifetime::new(),
            mode: Mode::Normal,
            popup: None,
            selected: 0,
            picker_index: 0,
            nav_cursor: 0,
            should_quit: false,
            sender,
        }
    }

    pub fn current(&self) -> Destination {
        self.shell.current()
    }

    pub fn current_list(&self) -> Option<&dyn ListControl> {
        match self.current() {
            Destination::Dashboard => None,
            Destination::Users => Some(&self.users as &dyn ListControl),
            Destination::Teams => Some(&self.teams as &dyn ListControl),
            Destination::Chats => Some(&self.chats as &dyn ListControl),
            Destination::Feedbacks => Some(&self.feedback as &dyn ListControl),
        }
    }

    pub fn current_list_mut(&mut self) -> Option<&mut dyn ListControl> {
        let current = self.current();
        self.page_mut(current)
    }

    fn page_mut(&mut self, destination: Destination) -> Option<&mut dyn ListControl> {
        match destination {
            Destination::Dashboard => None,
            Destination::Users => Some(&mut self.users as &mut dyn ListControl),
            Destination::Teams => Some(&mut self.teams as &mut dyn ListControl),
            Destination::Chats => Some(&mut self.chats as &mut dyn ListControl),
            Destination::Feedbacks => Some(&mut self.feedback as &mut dyn ListControl),
        }
    }

    /// Starts the fetch for the page on screen, inside the live view scope.
    pub fn mount_current(&mut self) {
        let scope = self.lifetime.scope_mut();
        match self.shell.current() {
            Destination::Dashboard => {
                self.overview.begin_refresh();
                let source = self.overview.source();
                let sender = self.sender.clone();
                let epoch = scope.epoch();
                log_debug(&format!("Refreshing overview (view epoch {})", epoch));
                scope.spawn(async move {
                    let stats = source.overview().await;
                    let _ = sender.send(Event::Loaded(Scoped {
                        epoch,
                        value: AppMessage::Overview(stats),
                    }));
                });
            }
            Destination::Users => spawn_fetch(&mut self.users, scope, &self.sender, AppMessage::Users),
            Destination::Teams => spawn_fetch(&mut self.teams, scope, &self.sender, AppMessage::Teams),
            Destination::Chats => spawn_fetch(&mut self.chats, scope, &self.sender, AppMessage::Chats),
            Destination::Feedbacks => {
                spawn_fetch(&mut self.feedback, scope, &self.sender, AppMessage::Feedback)
            }
        }
    }

    /// Leaves the current page: its tasks are aborted, its late results
    /// will be discarded, and the destination is mounted fresh.
    pub fn navigate(&mut self, destination: Destination) {
        let previous = self.current();
        self.nav_cursor = destination.index();
        if !self.shell.navigate(destination) {
            return;
        }

        if let Some(page) = self.page_mut(previous) {
            page.unmount();
        }
        let epoch = self.lifetime.remount();
        log_info(&format!("Navigated to {} (view epoch {})", destination.href(), epoch));

        self.mode = Mode::Normal;
        self.popup = None;
        self.selected = 0;
        self.mount_current();
    }

    pub fn refresh(&mut self) {
        self.mount_current();
    }

    /// Applies a finished call if it belongs to the live view.
    pub fn handle_message(&mut self, scoped: Scoped<AppMessage>) {
        let Some(message) = self.lifetime.accept(scoped) else {
            return;
        };

        match message {
            AppMessage::Users(result) => self.users.complete_fetch(result),
            AppMessage::Teams(result) => self.teams.complete_fetch(result),
            AppMessage::Chats(result) => self.chats.complete_fetch(result),
            AppMessage::Feedback(result) => self.feedback.complete_fetch(result),
            AppMessage::Overview(stats) => self.overview.complete_refresh(stats),
            AppMessage::Deleted { kind, key, result } => {
                match kind {
                    ResourceKind::Users => self.users.complete_delete(&key, &result),
                    ResourceKind::Teams => self.teams.complete_delete(&key, &result),
                    ResourceKind::Chats => self.chats.complete_delete(&key, &result),
                    ResourceKind::Feedback => self.feedback.complete_delete(&key, &result),
                };
            }
            AppMessage::StatusChanged { pending, result } => {
                self.feedback.settle_status_change(pending, &result);
            }
        }

        self.collect_notifications();
        self.clamp_selection();
    }

    pub fn tick(&mut self, now: Instant) {
        self.notifications.expire(now);
    }

    /// Pulls page notifications into the shared strip.
    fn collect_notifications(&mut self) {
        for destination in Destination::ALL {
            let mut drained = NotificationCenter::new();
            if let Some(page) = self.page_mut(destination) {
                page.notifications_mut().drain_into(&mut drained);
            }
            drained.drain_into(&mut self.notifications);
        }
    }

    pub fn selected_row(&self) -> Option<RowView> {
        self.current_list()?.rows().into_iter().nth(self.selected)
    }

    pub fn move_selection(&mut self, delta: isize) {
        let len = self.current_list().map(|list| list.visible_len()).unwrap_or(0);
        if len == 0 {
            self.selected = 0;
            return;
        }
        let next = self.selected as isize + delta;
        self.selected = next.clamp(0, len as isize - 1) as usize;
    }

    pub fn clamp_selection(&mut self) {
        let len = self.current_list().map(|list| list.visible_len()).unwrap_or(0);
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    pub fn request_delete(&mut self) {
        let Some(kind) = self.current().resource() else {
            return;
        };
        let Some(row) = self.selected_row() else {
            return;
        };
        if row.deleting {
            return;
        }
        let label = row.cells.first().cloned().unwrap_or_default();
        self.popup = Some(Popup::ConfirmDelete {
            kind,
            key: row.key,
            label,
        });
    }

    pub fn confirm_delete(&mut self, kind: ResourceKind, key: String) {
        self.popup = None;
        let scope = self.lifetime.scope_mut();
        match kind {
            ResourceKind::Users => spawn_delete(&mut self.users, scope, &self.sender, kind, key),
            ResourceKind::Teams => spawn_delete(&mut self.teams, scope, &self.sender, kind, key),
            ResourceKind::Chats => spawn_delete(&mut self.chats, scope, &self.sender, kind, key),
            ResourceKind::Feedback => {
                spawn_delete(&mut self.feedback, scope, &self.sender, kind, key)
            }
        }
    }

    pub fn request_status_change(&mut self) {
        if self.current() != Destination::Feedbacks {
            return;
        }
        let Some(row) = self.selected_row() else {
            return;
        };
        let current = self
            .feedback
            .view
            .find(&row.key)
            .map(|feedback| feedback.status)
            .unwrap_or_default();
        self.picker_index = FeedbackStatus::ALL
            .iter()
            .position(|status| *status == current)
            .unwrap_or(0);
        self.popup = Some(Popup::StatusPicker { email: row.key });
    }

    /// Shows the new status at once; the commit resolves on a later loop
    /// iteration and rolls back if it failed.
    pub fn confirm_status(&mut self, email: String, status: FeedbackStatus) {
        self.popup = None;
        let pending = match self.feedback.begin_status_change(&email, status) {
            Ok(pending) => pending,
            Err(e) => {
                log_debug(&format!("Status change not started: {}", e));
                return;
            }
        };

        let store = self.feedback.store();
        let sender = self.sender.clone();
        let scope = self.lifetime.scope_mut();
        let epoch = scope.epoch();
        scope.spawn(async move {
            let result = store.update_status(&email, status).await;
            let _ = sender.send(Event::Loaded(Scoped {
                epoch,
                value: AppMessage::StatusChanged { pending, result },
            }));
        });
    }
}

fn spawn_fetch<R, S>(
    page: &mut ListPage<R, S>,
    scope: &mut ViewScope,
    sender: &Sender<Event>,
    wrap: fn(AdminResult<Vec<R>>) -> AppMessage,
) where
    R: Resource,
    S: RecordStore<R> + ?Sized + 'static,
{
    page.begin_fetch();
    let store = page.store();
    let sender = sender.clone();
    let epoch = scope.epoch();
    log_debug(&format!("Fetching {} (view epoch {})", R::PLURAL, epoch));
    scope.spawn(async move {
        let result = store.list().await;
        let _ = sender.send(Event::Loaded(Scoped {
            epoch,
            value: wrap(result),
        }));
    });
}

fn spawn_delete<R, S>(
    page: &mut ListPage<R, S>,
    scope: &mut ViewScope,
    sender: &Sender<Event>,
    kind: ResourceKind,
    key: String,
) where
    R: Resource,
    S: RecordStore<R> + ?Sized + 'static,
{
    if page.begin_delete(&key).is_err() {
        return;
    }
    let store = page.store();
    let sender = sender.clone();
    let epoch = scope.epoch();
    scope.spawn(async move {
        let result = store.remove(&key).await;
        let _ = sender.send(Event::Loaded(Scoped {
            epoch,
            value: AppMessage::Deleted { kind, key, result },
        }));
    });
}
