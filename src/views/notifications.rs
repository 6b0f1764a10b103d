use std::time::{Duration, Instant};

use crate::constants::{MAX_VISIBLE_NOTIFICATIONS, NOTIFICATION_TTL_SECS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub title: String,
    pub description: Option<String>,
    pub created_at: Instant,
    pub dismissed: bool,
}

impl Notification {
    /// Title and description on one line.
    pub fn message(&self) -> String {
        match &self.description {
            Some(description) => format!("{}: {}", self.title, description),
            None => self.title.clone(),
        }
    }

    /// Errors stay until dismissed.
    pub fn expires(&self) -> bool {
        matches!(self.kind, NotificationKind::Success | NotificationKind::Info)
    }

    pub fn seconds_left(&self, now: Instant) -> u64 {
        NOTIFICATION_TTL_SECS.saturating_sub(now.saturating_duration_since(self.created_at).as_secs())
    }
}

/// Toast queue owned by a page.
#[derive(Debug, Clone, Default)]
pub struct NotificationCenter {
    items: Vec<Notification>,
    next_id: u64,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: NotificationKind, title: impl Into<String>, description: Option<String>) -> u64 {
        self.next_id += 1;
        self.items.push(Notification {
            id: self.next_id,
            kind,
            title: title.into(),
            description,
            created_at: Instant::now(),
            dismissed: false,
        });
        self.next_id
    }

    pub fn success(&mut self, title: impl Into<String>) -> u64 {
        self.push(NotificationKind::Success, title, None)
    }

    pub fn info(&mut self, title: impl Into<String>) -> u64 {
        self.push(NotificationKind::Info, title, None)
    }

    pub fn error(&mut self, title: impl Into<String>, description: impl Into<String>) -> u64 {
        self.push(NotificationKind::Error, title, Some(description.into()))
    }

    pub fn dismiss(&mut self, id: u64) {
        if let Some(n) = self.items.iter_mut().find(|n| n.id == id) {
            n.dismissed = true;
        }
    }

    /// Dismisses the newest visible notification.
    pub fn dismiss_latest(&mut self) -> bool {
        match self.items.iter_mut().rev().find(|n| !n.dismissed) {
            Some(n) => {
                n.dismissed = true;
                true
            }
            None => false,
        }
    }

    /// Drops dismissed notifications and expired success/info ones.
    pub fn expire(&mut self, now: Instant) {
        let ttl = Duration::from_secs(NOTIFICATION_TTL_SECS);
        self.items.retain(|n| {
            !n.dismissed && !(n.expires() && now.saturating_duration_since(n.created_at) >= ttl)
        });
    }

    /// Newest notifications first, capped for display.
    pub fn visible(&self) -> Vec<&Notification> {
        self.items
            .iter()
            .rev()
            .filter(|n| !n.dismissed)
            .take(MAX_VISIBLE_NOTIFICATIONS)
            .collect()
    }

    pub fn latest(&self) -> Option<&Notification> {
        self.items.iter().rev().find(|n| !n.dismissed)
    }

    pub fn all(&self) -> &[Notification] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.iter().all(|n| n.dismissed)
    }

    /// Moves every notification into `other`, e.g. when a page unmounts.
    pub fn drain_into(&mut self, other: &mut NotificationCenter) {
        for n in self.items.drain(..) {
            if !n.dismissed {
                other.push(n.kind, n.title, n.description);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_do_not_expire() {
        let mut center = NotificationCenter::new();
        center.success("User deleted successfully");
        center.error("Failed to delete user", "timeout");

        center.expire(Instant::now() + Duration::from_secs(NOTIFICATION_TTL_SECS + 1));

        let visible = center.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].kind, NotificationKind::Error);
        assert_eq!(visible[0].message(), "Failed to delete user: timeout");
    }

    #[test]
    fn test_every_kind_but_error_expires() {
        let mut center = NotificationCenter::new();
        center.success("saved");
        center.info("nothing to do");
        center.error("failed", "boom");
        let expiring: Vec<bool> = center.all().iter().map(|n| n.expires()).collect();
        assert_eq!(expiring, vec![true, true, false]);
    }

    #[test]
    fn test_visible_is_capped_and_newest_first() {
        let mut center = NotificationCenter::new();
        for i in 0..5 {
            center.info(format!("n{}", i));
        }
        let titles: Vec<_> = center.visible().iter().map(|n| n.title.clone()).collect();
        assert_eq!(titles, vec!["n4", "n3", "n2"]);
    }

    #[test]
    fn test_dismiss_latest() {
        let mut center = NotificationCenter::new();
        center.error("a", "x");
        center.error("b", "y");
        assert!(center.dismiss_latest());
        assert_eq!(center.latest().map(|n| n.title.as_str()), Some("a"));
        assert!(center.dismiss_latest());
        assert!(!center.dismiss_latest());
        assert!(center.is_empty());
    }
}
