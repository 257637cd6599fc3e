use crate::analyzer::metrics::{
    format_duration_seconds, format_hours, format_relative_minutes, percentage, progress_bar,
};
use crate::cli::views::section;
use crate::store::DashboardState;

pub fn render(state: &DashboardState) {
    section("Dashboard Overview");

    let today = &state.stats.today;
    println!(
        "  Total Time Today     {:>6}   {:+}% from yesterday",
        format_hours(today.total_hours),
        today.trend_vs_yesterday
    );
    println!(
        "  Productive Time      {:>6}   {}% of total time",
        format_hours(today.productive_hours),
        percentage(today.productive_hours, today.total_hours)
    );
    println!(
        "  Productivity Score   {:>5}%   {}",
        today.productivity_score,
        progress_bar(today.productivity_score, 20)
    );

    let weekly_target = state.goals.goals.weekly_productive_hours;
    let weekly_current = state.goals.progress.weekly_productive;
    println!(
        "  Weekly Goal          {:>6}   {}  {} remaining",
        format_hours(weekly_current),
        progress_bar(percentage(weekly_current, weekly_target), 20),
        format_hours(weekly_target - weekly_current)
    );

    println!("\n  Daily Time Distribution");
    if state.stats.daily_hours.is_empty() {
        println!("    No daily data recorded");
    }
    for day in &state.stats.daily_hours {
        let total = day.productive_hours + day.unproductive_hours;
        println!(
            "    {:<4} {:>6} productive / {:>6} unproductive  {}",
            day.day,
            format_hours(day.productive_hours),
            format_hours(day.unproductive_hours),
            progress_bar(percentage(day.productive_hours, total), 16)
        );
    }

    println!("\n  Time by Category");
    for share in &state.stats.category_shares {
        println!(
            "    {:<16} {:>3}%  {}",
            share.name,
            share.percent,
            progress_bar(share.percent, 16)
        );
    }

    println!("\n  Recent Activity");
    if state.stats.recent_activity.is_empty() {
        println!("    No activity recorded yet");
    }
    for entry in &state.stats.recent_activity {
        println!(
            "    {:<20} {:>8}  [{}]  {}",
            entry.website,
            format_duration_seconds(entry.duration_seconds),
            entry.category,
            format_relative_minutes(entry.minutes_ago)
        );
    }
}
