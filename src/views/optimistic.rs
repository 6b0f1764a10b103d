//! Optimistic writes with rollback.
//!
//! The previous value is always captured before the new one is written, so
//! a rollback restores exactly what was on screen before the change.
//! Overlapping writes to the same slot are not sequenced: a late rollback
//! can overwrite a newer optimistic value.

use std::future::Future;

/// An optimistic write that has been applied locally and awaits its
/// remote outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingWrite<T> {
    pub key: String,
    pub previous: T,
    pub next: T,
}

impl<T: Clone> PendingWrite<T> {
    /// Snapshots `slot`, then writes `next` into it.
    pub fn begin(slot: &mut T, key: impl Into<String>, next: T) -> Self {
        let previous = slot.clone();
        *slot = next.clone();
        Self { key: key.into(), previous, next }
    }

    /// Restores the snapshot on failure. `slot` is `None` when the record
    /// vanished while the commit was in flight. Returns true if it rolled
    /// back.
    pub fn settle<E>(self, slot: Option<&mut T>, outcome: &Result<(), E>) -> bool {
        match (outcome, slot) {
            (Err(_), Some(slot)) => {
                *slot = self.previous;
                true
            }
            _ => false,
        }
    }
}

/// Writes `next` into `slot`, awaits `commit`, and reverts `slot` if the
/// commit fails. The commit error is passed through.
pub async fn apply_optimistic<T, E, F, Fut>(slot: &mut T, next: T, commit: F) -> Result<(), E>
where
    T: Clone,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<(), E>>,
{
    let pending = PendingWrite::begin(&mut *slot, "", next);
    let outcome = commit().await;
    pending.settle(Some(slot), &outcome);
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_apply_optimistic_keeps_value_on_success() {
        let mut value = 1;
        let result: Result<(), String> = apply_optimistic(&mut value, 2, || async { Ok(()) }).await;
        assert!(result.is_ok());
        assert_eq!(value, 2);
    }

    #[tokio::test]
    async fn test_apply_optimistic_reverts_on_failure() {
        let mut value = "unread".to_string();
        let result = apply_optimistic(&mut value, "resolved".to_string(), || async {
            Err::<(), _>("boom")
        })
        .await;
        assert_eq!(result, Err("boom"));
        assert_eq!(value, "unread");
    }

    #[test]
    fn test_snapshot_taken_before_write() {
        let mut value = 10;
        let pending = PendingWrite::begin(&mut value, "k", 20);
        assert_eq!(value, 20);
        assert_eq!(pending.previous, 10);
        assert_eq!(pending.next, 20);
    }

    #[test]
    fn test_settle_without_slot_is_noop() {
        let mut value = 1;
        let pending = PendingWrite::begin(&mut value, "k", 2);
        assert!(!pending.settle(None, &Err::<(), _>(())));
    }
}
