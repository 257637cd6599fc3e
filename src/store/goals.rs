use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalSet {
    pub weekly_productive_hours: f64,
    pub daily_productive_hours: f64,
    pub max_unproductive_hours: f64,
    pub productivity_score_target: f64,
}

impl Default for GoalSet {
    fn default() -> Self {
        Self {
            weekly_productive_hours: 35.0,
            daily_productive_hours: 5.0,
            max_unproductive_hours: 2.0,
            productivity_score_target: 70.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationPrefs {
    pub daily_reminders: bool,
    pub unproductive_warnings: bool,
    pub goal_achievements: bool,
    pub weekly_reports: bool,
}

impl Default for NotificationPrefs {
    fn default() -> Self {
        Self {
            daily_reminders: true,
            unproductive_warnings: true,
            goal_achievements: true,
            weekly_reports: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    DailyReminders,
    UnproductiveWarnings,
    GoalAchievements,
    WeeklyReports,
}

impl NotificationKind {
    pub const ALL: [Self; 4] = [
        Self::DailyReminders,
        Self::UnproductiveWarnings,
        Self::GoalAchievements,
        Self::WeeklyReports,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::DailyReminders => "Daily Reminders",
            Self::UnproductiveWarnings => "Unproductive Warnings",
            Self::GoalAchievements => "Goal Achievements",
            Self::WeeklyReports => "Weekly Reports",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::DailyReminders => "Get reminded about your daily goals",
            Self::UnproductiveWarnings => "Alert when exceeding unproductive time",
            Self::GoalAchievements => "Celebrate when you reach your goals",
            Self::WeeklyReports => "Receive weekly productivity summaries",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GoalProgress {
    pub weekly_productive: f64,
    pub daily_productive: f64,
    pub today_unproductive: f64,
    pub current_score: f64,
}

#[derive(Debug, Clone, Default)]
pub struct GoalStore {
    pub goals: GoalSet,
    pub notifications: NotificationPrefs,
    pub progress: GoalProgress,
}

impl GoalStore {
    pub fn set_goals(&mut self, goals: GoalSet) {
        debug!(
            weekly = goals.weekly_productive_hours,
            daily = goals.daily_productive_hours,
            "goals updated"
        );
        self.goals = goals;
    }

    pub fn is_enabled(&self, kind: NotificationKind) -> bool {
        match kind {
            NotificationKind::DailyReminders => self.notifications.daily_reminders,
            NotificationKind::UnproductiveWarnings => self.notifications.unproductive_warnings,
            NotificationKind::GoalAchievements => self.notifications.goal_achievements,
            NotificationKind::WeeklyReports => self.notifications.weekly_reports,
        }
    }

    pub fn toggle(&mut self, kind: NotificationKind) -> bool {
        let flag = match kind {
            NotificationKind::DailyReminders => &mut self.notifications.daily_reminders,
            NotificationKind::UnproductiveWarnings => {
                &mut self.notifications.unproductive_warnings
            }
            NotificationKind::GoalAchievements => &mut self.notifications.goal_achievements,
            NotificationKind::WeeklyReports => &mut self.notifications.weekly_reports,
        };
        *flag = !*flag;
        *flag
    }

    pub fn daily_goal_achieved(&self) -> bool {
        self.progress.daily_productive >= self.goals.daily_productive_hours
    }

    pub fn unproductive_limit_exceeded(&self) -> bool {
        self.progress.today_unproductive > self.goals.max_unproductive_hours
    }

    pub fn progress_items(&self) -> Vec<GoalProgressItem> {
        vec![
            GoalProgressItem {
                title: "Weekly Productive Hours",
                current: self.progress.weekly_productive,
                target: self.goals.weekly_productive_hours,
                unit: "hours",
            },
            GoalProgressItem {
                title: "Daily Productive Hours",
                current: self.progress.daily_productive,
                target: self.goals.daily_productive_hours,
                unit: "hours",
            },
            GoalProgressItem {
                title: "Productivity Score",
                current: self.progress.current_score,
                target: self.goals.productivity_score_target,
                unit: "%",
            },
        ]
    }
}

#[derive(Debug, Clone)]
pub struct GoalProgressItem {
    pub title: &'static str,
    pub current: f64,
    pub target: f64,
    pub unit: &'static str,
}

impl GoalProgressItem {
    pub fn percent_complete(&self) -> u32 {
        crate::analyzer::metrics::completion_percent(self.current, self.target)
    }

    pub fn is_achieved(&self) -> bool {
        self.percent_complete() >= 100
    }
}
