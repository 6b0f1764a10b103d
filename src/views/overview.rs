use std::sync::Arc;

use crate::client::StatsSource;
use crate::models::{OverviewStats, StatCard};

/// Dashboard counters with a manual refresh.
pub struct OverviewPage {
    source: Arc<dyn StatsSource>,
    stats: Option<OverviewStats>,
    loading: bool,
}

impl OverviewPage {
    pub fn new(source: Arc<dyn StatsSource>) -> Self {
        Self { source, stats: None, loading: false }
    }

    pub fn source(&self) -> Arc<dyn StatsSource> {
        Arc::clone(&self.source)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn stats(&self) -> Option<&OverviewStats> {
        self.stats.as_ref()
    }

    pub fn begin_refresh(&mut self) {
        self.loading = true;
    }

    pub fn complete_refresh(&mut self, stats: OverviewStats) {
        self.stats = Some(stats);
        self.loading = false;
    }

    pub async fn refresh(&mut self) {
        self.begin_refresh();
        let stats = self.source.overview().await;
        self.complete_refresh(stats);
    }

    /// Cards to draw; before the first load every value shows as "-".
    pub fn cards(&self) -> Vec<StatCard> {
        match &self.stats {
            Some(stats) => stats.cards(),
            None => OverviewStats::default()
                .cards()
                .into_iter()
                .map(|card| StatCard { value: "-".to_string(), ..card })
                .collect(),
        }
    }
}
