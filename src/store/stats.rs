use crate::store::categories::Category;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TodayStats {
    pub total_hours: f64,
    pub productive_hours: f64,
    pub unproductive_hours: f64,
    pub productivity_score: u32,
    pub trend_vs_yesterday: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekTotal {
    pub week: String,
    pub productive_hours: f64,
    pub unproductive_hours: f64,
}

impl WeekTotal {
    pub fn total_hours(&self) -> f64 {
        self.productive_hours + self.unproductive_hours
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayHours {
    pub day: String,
    pub productive_hours: f64,
    pub unproductive_hours: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayScore {
    pub day: String,
    pub score: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryShare {
    pub name: String,
    pub percent: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Insight {
    pub title: String,
    pub value: String,
    pub description: String,
    pub trend: Trend,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub website: String,
    pub duration_seconds: u64,
    pub category: Category,
    pub minutes_ago: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatsPanel {
    pub today: TodayStats,
    pub weekly_totals: Vec<WeekTotal>,
    pub daily_hours: Vec<DayHours>,
    pub daily_scores: Vec<DayScore>,
    pub category_shares: Vec<CategoryShare>,
    pub insights: Vec<Insight>,
    pub recent_activity: Vec<ActivityEntry>,
}
