use anyhow::{Context, Result};
use dialoguer::{Input, Select, theme::ColorfulTheme};

use crate::analyzer::metrics::progress_bar;
use crate::cli::views::{section, toast};
use crate::store::DashboardState;
use crate::store::goals::{GoalSet, GoalStore, NotificationKind};

pub fn run(state: &mut DashboardState, theme: &ColorfulTheme) -> Result<()> {
    loop {
        render(&state.goals);

        let choice = Select::with_theme(theme)
            .with_prompt("  Goal action")
            .default(0)
            .items(&["Edit goals", "Toggle notifications", "Back"])
            .interact()
            .context("Failed to get goal action")?;

        match choice {
            0 => edit_goals(state, theme)?,
            1 => toggle_notification(state, theme)?,
            _ => break,
        }
    }

    Ok(())
}

fn render(goals: &GoalStore) {
    section("Goal Settings");

    println!("  Goal Progress");
    for item in goals.progress_items() {
        let percent = item.percent_complete();
        let suffix = if item.is_achieved() { "  ✓ achieved" } else { "" };
        println!(
            "    {:<26} {} / {} {}",
            item.title, item.current, item.target, item.unit
        );
        println!(
            "      {}  {}% Complete{}",
            progress_bar(percent, 20),
            percent,
            suffix
        );
    }

    println!("\n  Notifications");
    for kind in NotificationKind::ALL {
        let marker = if goals.is_enabled(kind) { "on " } else { "off" };
        println!("    [{}] {:<24} {}", marker, kind.label(), kind.description());
    }

    println!("\n  Today's Status");
    let mut alerted = false;
    if goals.unproductive_limit_exceeded() {
        println!("    ! Exceeded unproductive time limit");
        alerted = true;
    }
    if goals.daily_goal_achieved() {
        println!("    ✓ Daily productive goal achieved!");
        alerted = true;
    }
    if !alerted {
        println!("    No alerts for today");
    }
}

fn edit_goals(state: &mut DashboardState, theme: &ColorfulTheme) -> Result<()> {
    let current = state.goals.goals.clone();

    let weekly_productive_hours: f64 = Input::with_theme(theme)
        .with_prompt("  Weekly productive hours")
        .default(current.weekly_productive_hours)
        .interact_text()
        .context("Failed to read weekly goal")?;

    let daily_productive_hours: f64 = Input::with_theme(theme)
        .with_prompt("  Daily productive hours")
        .default(current.daily_productive_hours)
        .interact_text()
        .context("Failed to read daily goal")?;

    let max_unproductive_hours: f64 = Input::with_theme(theme)
        .with_prompt("  Max unproductive hours per day")
        .default(current.max_unproductive_hours)
        .interact_text()
        .context("Failed to read unproductive limit")?;

    let productivity_score_target: f64 = Input::with_theme(theme)
        .with_prompt("  Productivity score target")
        .default(current.productivity_score_target)
        .interact_text()
        .context("Failed to read score target")?;

    state.goals.set_goals(GoalSet {
        weekly_productive_hours,
        daily_productive_hours,
        max_unproductive_hours,
        productivity_score_target,
    });
    toast(
        "Goals Updated",
        "Your productivity goals have been saved successfully",
    );

    Ok(())
}

fn toggle_notification(state: &mut DashboardState, theme: &ColorfulTheme) -> Result<()> {
    let labels = NotificationKind::ALL
        .iter()
        .map(|kind| {
            let marker = if state.goals.is_enabled(*kind) { "on" } else { "off" };
            format!("{} [{}]", kind.label(), marker)
        })
        .collect::<Vec<_>>();

    let choice = Select::with_theme(theme)
        .with_prompt("  Toggle which notification?")
        .default(0)
        .items(&labels)
        .interact()
        .context("Failed to get notification selection")?;

    let kind = NotificationKind::ALL[choice];
    let enabled = state.goals.toggle(kind);
    toast(
        "Notifications Updated",
        &format!(
            "{} is now {}",
            kind.label(),
            if enabled { "on" } else { "off" }
        ),
    );

    Ok(())
}
