use anyhow::{Context, Result, bail};
use chrono::Utc;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::analyzer::metrics::{format_duration_seconds, format_hours, percentage};
use crate::store::stats::{DayScore, Insight, StatsPanel, Trend};

#[derive(Debug, Clone, Serialize)]
pub struct WeeklyReport {
    pub week: String,
    pub generated_at: String,
    pub productive_hours: f64,
    pub unproductive_hours: f64,
    pub total_hours: f64,
    pub productivity_score: u32,
    pub daily_average_hours: f64,
    pub daily_scores: Vec<DayScore>,
    pub insights: Vec<Insight>,
}

#[derive(Debug)]
pub struct SavedReport {
    pub markdown_path: PathBuf,
    pub json_path: PathBuf,
}

pub fn build_weekly_report(stats: &StatsPanel, week: Option<usize>) -> Result<WeeklyReport> {
    if stats.weekly_totals.is_empty() {
        bail!("No weekly data available");
    }

    let index = match week {
        Some(number) if number == 0 || number > stats.weekly_totals.len() => {
            bail!(
                "Week number out of range: {number}. Available weeks: 1-{}",
                stats.weekly_totals.len()
            );
        }
        Some(number) => number - 1,
        None => stats.weekly_totals.len() - 1,
    };

    let totals = &stats.weekly_totals[index];
    let total_hours = totals.total_hours();

    Ok(WeeklyReport {
        week: totals.week.clone(),
        generated_at: Utc::now().to_rfc3339(),
        productive_hours: totals.productive_hours,
        unproductive_hours: totals.unproductive_hours,
        total_hours,
        productivity_score: percentage(totals.productive_hours, total_hours),
        daily_average_hours: total_hours / 7.0,
        daily_scores: stats.daily_scores.clone(),
        insights: stats.insights.clone(),
    })
}

pub fn render_markdown(report: &WeeklyReport) -> String {
    let productive_seconds = (report.productive_hours * 3600.0) as u64;
    let unproductive_seconds = (report.unproductive_hours * 3600.0) as u64;
    let total_seconds = (report.total_hours * 3600.0) as u64;

    let score_rows = if report.daily_scores.is_empty() {
        "| - | - |".to_string()
    } else {
        report
            .daily_scores
            .iter()
            .map(|entry| format!("| {} | {}% |", entry.day, entry.score))
            .collect::<Vec<_>>()
            .join("\n")
    };

    let insight_rows = if report.insights.is_empty() {
        "- No insights recorded".to_string()
    } else {
        report
            .insights
            .iter()
            .map(|insight| {
                let direction = match insight.trend {
                    Trend::Up => "up",
                    Trend::Down => "down",
                };
                format!(
                    "- {}: {} ({}, trending {})",
                    insight.title, insight.value, insight.description, direction
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!(
        "# Weekly Productivity Report - {}\n\n## Summary\n- Productive time: {}\n- Unproductive time: {}\n- Total screen time: {}\n- Productivity score: {}%\n- Daily average: {:.1}h\n\n## Time Distribution\n| Category | Time | Share |\n|----------|------|-------|\n| Productive | {} | {}% |\n| Unproductive | {} | {}% |\n\n## Daily Productivity Scores\n| Day | Score |\n|-----|-------|\n{}\n\n## Insights\n{}\n",
        report.week,
        format_duration_seconds(productive_seconds),
        format_duration_seconds(unproductive_seconds),
        format_duration_seconds(total_seconds),
        report.productivity_score,
        report.daily_average_hours,
        format_hours(report.productive_hours),
        percentage(report.productive_hours, report.total_hours),
        format_hours(report.unproductive_hours),
        percentage(report.unproductive_hours, report.total_hours),
        score_rows,
        insight_rows
    )
}

pub fn save_report_files(report: &WeeklyReport, export_dir: &Path) -> Result<SavedReport> {
    fs::create_dir_all(export_dir).with_context(|| {
        format!(
            "Failed to create export directory: {}",
            export_dir.display()
        )
    })?;

    let slug = week_slug(&report.week);
    let markdown_path = export_dir.join(format!("{slug}.md"));
    let json_path = export_dir.join(format!("{slug}.json"));

    fs::write(&markdown_path, render_markdown(report)).with_context(|| {
        format!(
            "Failed to write Markdown report: {}",
            markdown_path.display()
        )
    })?;

    let json_content =
        serde_json::to_string_pretty(report).context("Failed to serialize report JSON")?;
    fs::write(&json_path, json_content)
        .with_context(|| format!("Failed to write JSON report: {}", json_path.display()))?;

    Ok(SavedReport {
        markdown_path,
        json_path,
    })
}

fn week_slug(week: &str) -> String {
    week.trim().to_lowercase().replace(' ', "-")
}

#[cfg(test)]
mod tests {
    use super::{build_weekly_report, render_markdown, save_report_files, week_slug};
    use crate::store::stats::{StatsPanel, WeekTotal};

    fn sample_panel() -> StatsPanel {
        StatsPanel {
            weekly_totals: vec![
                WeekTotal {
                    week: "Week 1".to_string(),
                    productive_hours: 28.0,
                    unproductive_hours: 14.0,
                },
                WeekTotal {
                    week: "Week 2".to_string(),
                    productive_hours: 32.0,
                    unproductive_hours: 12.0,
                },
                WeekTotal {
                    week: "Week 3".to_string(),
                    productive_hours: 26.0,
                    unproductive_hours: 18.0,
                },
                WeekTotal {
                    week: "Week 4".to_string(),
                    productive_hours: 35.0,
                    unproductive_hours: 10.0,
                },
            ],
            ..StatsPanel::default()
        }
    }

    #[test]
    fn builds_latest_week_by_default() {
        let report = build_weekly_report(&sample_panel(), None).expect("report built");

        assert_eq!(report.week, "Week 4");
        assert_eq!(report.total_hours, 45.0);
        assert_eq!(report.productivity_score, 78);
        assert!((report.daily_average_hours - 45.0 / 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn selects_week_by_one_based_number() {
        let report = build_weekly_report(&sample_panel(), Some(2)).expect("report built");

        assert_eq!(report.week, "Week 2");
        assert_eq!(report.productivity_score, 73);
    }

    #[test]
    fn rejects_out_of_range_week_numbers() {
        assert!(build_weekly_report(&sample_panel(), Some(0)).is_err());
        assert!(build_weekly_report(&sample_panel(), Some(5)).is_err());
    }

    #[test]
    fn rejects_empty_weekly_data() {
        assert!(build_weekly_report(&StatsPanel::default(), None).is_err());
    }

    #[test]
    fn markdown_contains_summary_and_tables() {
        let report = build_weekly_report(&sample_panel(), None).expect("report built");
        let markdown = render_markdown(&report);

        assert!(markdown.starts_with("# Weekly Productivity Report - Week 4"));
        assert!(markdown.contains("- Productivity score: 78%"));
        assert!(markdown.contains("| Productive | 35h | 78% |"));
        assert!(markdown.contains("- Daily average: 6.4h"));
        assert!(markdown.contains("## Daily Productivity Scores"));
    }

    #[test]
    fn saves_markdown_and_json_under_the_export_dir() {
        let dir = tempfile::tempdir().expect("temp dir created");
        let report = build_weekly_report(&sample_panel(), Some(1)).expect("report built");

        let saved = save_report_files(&report, dir.path()).expect("report saved");
        assert!(saved.markdown_path.exists());
        assert!(saved.json_path.exists());

        let markdown = std::fs::read_to_string(&saved.markdown_path).expect("markdown read");
        assert!(markdown.contains("Week 1"));
    }

    #[test]
    fn week_slugs_are_file_friendly() {
        assert_eq!(week_slug("Week 4"), "week-4");
        assert_eq!(week_slug("  Week 10 "), "week-10");
    }
}
