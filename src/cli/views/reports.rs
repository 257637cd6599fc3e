use anyhow::{Context, Result};
use dialoguer::{Select, theme::ColorfulTheme};

use crate::analyzer;
use crate::analyzer::metrics::{format_hours, percentage, progress_bar};
use crate::analyzer::report::build_weekly_report;
use crate::cli::views::{reject, section, toast};
use crate::config::Config;
use crate::store::DashboardState;
use crate::store::stats::Trend;

pub fn run(state: &DashboardState, config: &Config, theme: &ColorfulTheme) -> Result<()> {
    loop {
        render(state)?;

        let choice = Select::with_theme(theme)
            .with_prompt("  Report action")
            .default(0)
            .items(&["Export Report", "Back"])
            .interact()
            .context("Failed to get report action")?;

        match choice {
            0 => export(state, config),
            _ => break,
        }
    }

    Ok(())
}

fn render(state: &DashboardState) -> Result<()> {
    section("Weekly Productivity Report");
    println!("  Analysis of your productivity patterns and insights");

    println!();
    for insight in &state.stats.insights {
        let marker = match insight.trend {
            Trend::Up => "↑",
            Trend::Down => "↓",
        };
        println!(
            "  {} {:<22} {:<10} {}",
            marker, insight.title, insight.value, insight.description
        );
    }

    println!("\n  Weekly Trends");
    for totals in &state.stats.weekly_totals {
        println!(
            "    {:<7} productive {:>4} / unproductive {:>4}  {}",
            totals.week,
            format_hours(totals.productive_hours),
            format_hours(totals.unproductive_hours),
            progress_bar(
                percentage(totals.productive_hours, totals.total_hours()),
                16
            )
        );
    }

    println!("\n  Daily Productivity Scores");
    for entry in &state.stats.daily_scores {
        println!(
            "    {:<4} {:>3}%  {}",
            entry.day,
            entry.score,
            progress_bar(entry.score, 16)
        );
    }

    if state.stats.weekly_totals.is_empty() {
        println!("\n  No weekly data recorded yet");
        return Ok(());
    }

    let report = build_weekly_report(&state.stats, None)?;
    println!("\n  This Week's Summary ({})", report.week);
    println!(
        "    Productive Time     {:>6}  {}",
        format_hours(report.productive_hours),
        progress_bar(report.productivity_score, 16)
    );
    println!(
        "    Unproductive Time   {:>6}  {}",
        format_hours(report.unproductive_hours),
        progress_bar(
            percentage(report.unproductive_hours, report.total_hours),
            16
        )
    );
    println!("    Productivity Score  {:>5}%", report.productivity_score);
    println!(
        "    Total Screen Time   {:>6}",
        format_hours(report.total_hours)
    );
    println!(
        "    Daily Average       {:>6}",
        format!("{:.1}h", report.daily_average_hours)
    );

    println!("\n  Goals & Achievements");
    println!("    ✓ Goal Achieved! Exceeded 30h productive time");
    println!("    ↑ Improvement: +15% from last week");

    Ok(())
}

fn export(state: &DashboardState, config: &Config) {
    match analyzer::export_weekly_report(&state.stats, None, &config.export_dir) {
        Ok((report, saved)) => {
            toast("Report Exported", &report.week);
            println!("  - Markdown: {}", saved.markdown_path.display());
            println!("  - JSON: {}", saved.json_path.display());
        }
        Err(error) => reject("Export Failed", &error.to_string()),
    }
}
