use anyhow::{Context, Result};
use serde::Deserialize;

use crate::store::categories::WebsiteRecord;
use crate::store::goals::{GoalProgress, GoalSet, NotificationPrefs};
use crate::store::stats::{
    ActivityEntry, CategoryShare, DayHours, DayScore, Insight, TodayStats, WeekTotal,
};
use crate::store::tracker::TrackingSession;

#[derive(Debug, Deserialize)]
pub struct SampleData {
    pub today: TodayStats,
    pub weekly_totals: Vec<WeekTotal>,
    pub daily_hours: Vec<DayHours>,
    pub daily_scores: Vec<DayScore>,
    pub category_shares: Vec<CategoryShare>,
    pub insights: Vec<Insight>,
    pub recent_activity: Vec<ActivityEntry>,
    pub websites: Vec<WebsiteRecord>,
    pub sessions: Vec<TrackingSession>,
    pub goals: GoalSet,
    pub notifications: NotificationPrefs,
    pub progress: GoalProgress,
}

pub fn load_sample() -> Result<SampleData> {
    serde_json::from_str(include_str!("../assets/sample_data.json"))
        .context("Failed to parse embedded sample dataset")
}
