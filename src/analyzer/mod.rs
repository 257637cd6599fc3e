pub mod metrics;
pub mod report;

use anyhow::Result;
use std::path::Path;
use tracing::info;

use crate::analyzer::report::{SavedReport, WeeklyReport};
use crate::store::stats::StatsPanel;

pub fn export_weekly_report(
    stats: &StatsPanel,
    week: Option<usize>,
    export_dir: &Path,
) -> Result<(WeeklyReport, SavedReport)> {
    let report = report::build_weekly_report(stats, week)?;
    let saved = report::save_report_files(&report, export_dir)?;

    info!(
        week = %report.week,
        path = %saved.markdown_path.display(),
        "weekly report exported"
    );

    Ok((report, saved))
}

#[cfg(test)]
mod tests {
    use super::export_weekly_report;
    use crate::store::DashboardState;

    #[test]
    fn export_writes_markdown_and_json_files() {
        let state = DashboardState::sample().expect("sample state loaded");
        let dir = tempfile::tempdir().expect("temp dir created");

        let (report, saved) =
            export_weekly_report(&state.stats, None, dir.path()).expect("report exported");

        assert_eq!(report.week, "Week 4");
        assert!(saved.markdown_path.exists());
        assert!(saved.json_path.exists());
        assert!(saved.markdown_path.ends_with("week-4.md"));
        assert!(saved.json_path.ends_with("week-4.json"));
    }
}
