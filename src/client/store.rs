//! Seams between the pages and the hosted services. Pages hold these as
//! trait objects so tests can swap in in-memory stores.

use async_trait::async_trait;

use crate::error::AdminResult;
use crate::models::{Feedback, FeedbackStatus, OverviewStats, Resource};

#[async_trait]
pub trait RecordStore<R: Resource>: Send + Sync {
    /// Whole collection, newest first.
    async fn list(&self) -> AdminResult<Vec<R>>;

    /// Removes the record with the given key.
    async fn remove(&self, key: &str) -> AdminResult<()>;
}

#[async_trait]
pub trait FeedbackStore: RecordStore<Feedback> {
    /// Writes a single cell of the row keyed by `email`.
    async fn update_field(&self, email: &str, field: &str, value: &str) -> AdminResult<()>;

    async fn update_status(&self, email: &str, status: FeedbackStatus) -> AdminResult<()> {
        self.update_field(email, "status", status.as_str()).await
    }
}

#[async_trait]
pub trait StatsSource: Send + Sync {
    async fn overview(&self) -> OverviewStats;
}
