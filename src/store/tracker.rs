use anyhow::{Result, bail};
use chrono::{DateTime, Duration, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionCategory {
    Productive,
    Unproductive,
    Unclassified,
}

impl fmt::Display for SessionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Productive => f.write_str("productive"),
            Self::Unproductive => f.write_str("unproductive"),
            Self::Unclassified => f.write_str("unclassified"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Active,
    Completed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackingSession {
    pub id: u32,
    pub website: String,
    pub duration_seconds: u64,
    pub category: SessionCategory,
    pub status: SessionStatus,
}

#[derive(Debug, Clone)]
pub struct TimeTracker {
    website: String,
    accrued: Duration,
    running_since: Option<DateTime<Local>>,
    sessions: Vec<TrackingSession>,
}

impl Default for TimeTracker {
    fn default() -> Self {
        Self::with_sessions(Vec::new())
    }
}

impl TimeTracker {
    pub fn with_sessions(sessions: Vec<TrackingSession>) -> Self {
        Self {
            website: String::new(),
            accrued: Duration::zero(),
            running_since: None,
            sessions,
        }
    }

    pub fn website(&self) -> &str {
        &self.website
    }

    pub fn is_running(&self) -> bool {
        self.running_since.is_some()
    }

    pub fn sessions(&self) -> &[TrackingSession] {
        &self.sessions
    }

    pub fn start(&mut self, website: &str, clock: &dyn Clock) -> Result<()> {
        let trimmed = website.trim();
        if trimmed.is_empty() {
            bail!("Please enter a website to track");
        }

        self.website = trimmed.to_string();
        if self.running_since.is_none() {
            self.running_since = Some(clock.now());
        }

        debug!(website = %self.website, "tracking started");
        Ok(())
    }

    pub fn pause(&mut self, clock: &dyn Clock) {
        if let Some(started) = self.running_since.take() {
            self.accrued = self.accrued + (clock.now() - started);
            debug!(website = %self.website, seconds = self.accrued.num_seconds(), "tracking paused");
        }
    }

    pub fn stop(&mut self, clock: &dyn Clock) -> Option<TrackingSession> {
        let elapsed_seconds = self.elapsed_seconds(clock);
        let website = std::mem::take(&mut self.website);
        self.accrued = Duration::zero();
        self.running_since = None;

        if website.is_empty() || elapsed_seconds == 0 {
            return None;
        }

        let session = TrackingSession {
            id: self.next_id(),
            website,
            duration_seconds: elapsed_seconds,
            category: SessionCategory::Unclassified,
            status: SessionStatus::Completed,
        };

        debug!(website = %session.website, seconds = session.duration_seconds, "session recorded");
        self.sessions.insert(0, session.clone());

        Some(session)
    }

    pub fn elapsed(&self, clock: &dyn Clock) -> Duration {
        match self.running_since {
            Some(started) => self.accrued + (clock.now() - started),
            None => self.accrued,
        }
    }

    pub fn elapsed_seconds(&self, clock: &dyn Clock) -> u64 {
        self.elapsed(clock).num_seconds().max(0) as u64
    }

    fn next_id(&self) -> u32 {
        self.sessions
            .iter()
            .map(|session| session.id)
            .max()
            .unwrap_or(0)
            + 1
    }
}

#[cfg(test)]
mod tests {
    use super::{Clock, SessionCategory, SessionStatus, TimeTracker, TrackingSession};
    use chrono::{DateTime, Duration, Local, TimeZone};
    use std::cell::Cell;

    struct ManualClock {
        now: Cell<DateTime<Local>>,
    }

    impl ManualClock {
        fn new() -> Self {
            let start = Local
                .with_ymd_and_hms(2026, 2, 18, 9, 0, 0)
                .single()
                .expect("valid local time");

            Self {
                now: Cell::new(start),
            }
        }

        fn advance(&self, duration: Duration) {
            self.now.set(self.now.get() + duration);
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> DateTime<Local> {
            self.now.get()
        }
    }

    fn completed_session(id: u32, website: &str, duration_seconds: u64) -> TrackingSession {
        TrackingSession {
            id,
            website: website.to_string(),
            duration_seconds,
            category: SessionCategory::Productive,
            status: SessionStatus::Completed,
        }
    }

    #[test]
    fn start_requires_a_website() {
        let clock = ManualClock::new();
        let mut tracker = TimeTracker::default();

        assert!(tracker.start("   ", &clock).is_err());
        assert!(!tracker.is_running());
        assert_eq!(tracker.elapsed_seconds(&clock), 0);
    }

    #[test]
    fn elapsed_accrues_while_running() {
        let clock = ManualClock::new();
        let mut tracker = TimeTracker::default();

        tracker.start("github.com", &clock).expect("tracking started");
        clock.advance(Duration::seconds(90));

        assert!(tracker.is_running());
        assert_eq!(tracker.elapsed_seconds(&clock), 90);
    }

    #[test]
    fn pause_preserves_accrued_time() {
        let clock = ManualClock::new();
        let mut tracker = TimeTracker::default();

        tracker.start("github.com", &clock).expect("tracking started");
        clock.advance(Duration::seconds(60));
        tracker.pause(&clock);
        clock.advance(Duration::seconds(300));

        assert!(!tracker.is_running());
        assert_eq!(tracker.elapsed_seconds(&clock), 60);
    }

    #[test]
    fn resume_continues_from_accrued_time() {
        let clock = ManualClock::new();
        let mut tracker = TimeTracker::default();

        tracker.start("github.com", &clock).expect("tracking started");
        clock.advance(Duration::seconds(60));
        tracker.pause(&clock);
        clock.advance(Duration::seconds(300));
        tracker.start("github.com", &clock).expect("tracking resumed");
        clock.advance(Duration::seconds(15));

        assert_eq!(tracker.elapsed_seconds(&clock), 75);
    }

    #[test]
    fn stop_records_an_unclassified_session() {
        let clock = ManualClock::new();
        let mut tracker = TimeTracker::default();

        tracker.start("github.com", &clock).expect("tracking started");
        clock.advance(Duration::seconds(125));

        let session = tracker.stop(&clock).expect("session recorded");
        assert_eq!(session.website, "github.com");
        assert_eq!(session.duration_seconds, 125);
        assert_eq!(session.category, SessionCategory::Unclassified);
        assert_eq!(session.status, SessionStatus::Completed);

        assert!(!tracker.is_running());
        assert!(tracker.website().is_empty());
        assert_eq!(tracker.elapsed_seconds(&clock), 0);
    }

    #[test]
    fn stop_with_nothing_to_record_appends_no_session() {
        let clock = ManualClock::new();
        let mut tracker = TimeTracker::default();

        tracker.start("github.com", &clock).expect("tracking started");
        assert!(tracker.stop(&clock).is_none());

        assert!(tracker.sessions().is_empty());
        assert!(tracker.website().is_empty());
    }

    #[test]
    fn stopping_a_paused_timer_still_records_the_session() {
        let clock = ManualClock::new();
        let mut tracker = TimeTracker::default();

        tracker.start("docs.google.com", &clock).expect("tracking started");
        clock.advance(Duration::seconds(40));
        tracker.pause(&clock);
        clock.advance(Duration::seconds(500));

        let session = tracker.stop(&clock).expect("session recorded");
        assert_eq!(session.duration_seconds, 40);
    }

    #[test]
    fn sessions_are_prepended_newest_first() {
        let clock = ManualClock::new();
        let mut tracker =
            TimeTracker::with_sessions(vec![completed_session(1, "github.com", 9000)]);

        tracker
            .start("docs.google.com", &clock)
            .expect("tracking started");
        clock.advance(Duration::seconds(45));
        tracker.stop(&clock).expect("session recorded");

        let websites = tracker
            .sessions()
            .iter()
            .map(|session| session.website.as_str())
            .collect::<Vec<_>>();
        assert_eq!(websites, vec!["docs.google.com", "github.com"]);
        assert_eq!(tracker.sessions()[0].id, 2);
    }
}
