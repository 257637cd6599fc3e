pub mod categories;
pub mod goals;
pub mod stats;
pub mod tracker;

use anyhow::Result;

use crate::sample;
use crate::store::categories::WebsiteStore;
use crate::store::goals::GoalStore;
use crate::store::stats::StatsPanel;
use crate::store::tracker::TimeTracker;

#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    pub stats: StatsPanel,
    pub websites: WebsiteStore,
    pub tracker: TimeTracker,
    pub goals: GoalStore,
}

impl DashboardState {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn sample() -> Result<Self> {
        let data = sample::load_sample()?;

        Ok(Self {
            stats: StatsPanel {
                today: data.today,
                weekly_totals: data.weekly_totals,
                daily_hours: data.daily_hours,
                daily_scores: data.daily_scores,
                category_shares: data.category_shares,
                insights: data.insights,
                recent_activity: data.recent_activity,
            },
            websites: WebsiteStore::from_records(data.websites),
            tracker: TimeTracker::with_sessions(data.sessions),
            goals: GoalStore {
                goals: data.goals,
                notifications: data.notifications,
                progress: data.progress,
            },
        })
    }
}
