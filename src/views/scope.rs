//! Ties in-flight requests to the page that issued them.
//!
//! Each page mount gets a fresh epoch. Leaving the page aborts its tasks,
//! and results still tagged with an older epoch are dropped on arrival.

use std::future::Future;

use tokio::task::JoinHandle;

use crate::logging::log_debug;

/// A value produced by a task spawned inside a `ViewScope`.
#[derive(Debug)]
pub struct Scoped<T> {
    pub epoch: u64,
    pub value: T,
}

/// Tasks belonging to one page mount. Dropping the scope aborts them.
#[derive(Debug)]
pub struct ViewScope {
    epoch: u64,
    tasks: Vec<JoinHandle<()>>,
}

impl ViewScope {
    pub fn new(epoch: u64) -> Self {
        Self { epoch, tasks: Vec::new() }
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Runs `fut` on the tokio runtime; the task dies with this scope.
    pub fn spawn<F>(&mut self, fut: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.tasks.retain(|task| !task.is_finished());
        self.tasks.push(tokio::spawn(fut));
    }

    pub fn in_flight(&self) -> usize {
        self.tasks.iter().filter(|task| !task.is_finished()).count()
    }

    pub fn cancel_all(&mut self) {
        let pending = self.tasks.len();
        for task in self.tasks.drain(..) {
            task.abort();
        }
        if pending > 0 {
            log_debug(&format!("Aborted {} task(s) of view epoch {}", pending, self.epoch));
        }
    }
}

impl Drop for ViewScope {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

/// Hands out a new `ViewScope` per page mount and judges result freshness.
#[derive(Debug)]
pub struct ViewLifetime {
    scope: ViewScope,
}

impl Default for ViewLifetime {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewLifetime {
    pub fn new() -> Self {
        Self { scope: ViewScope::new(1) }
    }

    pub fn epoch(&self) -> u64 {
        self.scope.epoch()
    }

    pub fn scope_mut(&mut self) -> &mut ViewScope {
        &mut self.scope
    }

    /// Tears down the current mount and starts the next one.
    pub fn remount(&mut self) -> u64 {
        let next = self.scope.epoch() + 1;
        // Dropping the old scope aborts its tasks.
        self.scope = ViewScope::new(next);
        next
    }

    pub fn is_current(&self, epoch: u64) -> bool {
        epoch == self.scope.epoch()
    }

    /// Unwraps a result if it belongs to the live mount.
    pub fn accept<T>(&self, scoped: Scoped<T>) -> Option<T> {
        if self.is_current(scoped.epoch) {
            Some(scoped.value)
        } else {
            log_debug(&format!(
                "Discarding result from view epoch {} (current {})",
                scoped.epoch,
                self.epoch()
            ));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_stale_results_are_discarded() {
        let mut lifetime = ViewLifetime::new();
        let first = lifetime.epoch();
        lifetime.remount();

        assert_eq!(lifetime.accept(Scoped { epoch: first, value: 1 }), None);
        assert_eq!(lifetime.accept(Scoped { epoch: lifetime.epoch(), value: 2 }), Some(2));
    }

    #[tokio::test]
    async fn test_remount_aborts_in_flight_tasks() {
        let mut lifetime = ViewLifetime::new();
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel::<u32>();

        lifetime.scope_mut().spawn(async move {
            tokio::time::sleep(Duration::from_millis(200)).await;
            let _ = tx.send(1);
        });
        assert_eq!(lifetime.scope_mut().in_flight(), 1);

        lifetime.remount();

        // The sender was dropped with the aborted task.
        assert_eq!(rx.recv().await, None);
    }
}
