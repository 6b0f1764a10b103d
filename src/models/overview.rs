use serde::Serialize;

/// Counters shown on the dashboard page. `None` marks a count that failed
/// to load.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OverviewStats {
    pub total_users: Option<u64>,
    pub active_users: Option<u64>,
    pub total_teams: Option<u64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: String,
}

impl OverviewStats {
    pub fn cards(&self) -> Vec<StatCard> {
        let render = |count: Option<u64>| {
            count.map(|n| n.to_string()).unwrap_or_else(|| "Error".to_string())
        };
        vec![
            StatCard { title: "Total Users", value: render(self.total_users) },
            StatCard { title: "Active Users", value: render(self.active_users) },
            StatCard { title: "Total Teams", value: render(self.total_teams) },
        ]
    }
}
