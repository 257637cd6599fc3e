use anyhow::{Context, Result};
use dialoguer::{Input, Select, theme::ColorfulTheme};

use crate::analyzer::metrics::{format_clock, format_duration_seconds};
use crate::cli::views::{reject, section, toast};
use crate::store::DashboardState;
use crate::store::tracker::Clock;

pub fn run(state: &mut DashboardState, clock: &dyn Clock, theme: &ColorfulTheme) -> Result<()> {
    loop {
        render(state, clock);

        if state.tracker.is_running() {
            let choice = Select::with_theme(theme)
                .with_prompt("  Tracker action")
                .default(0)
                .items(&["Pause", "Stop", "Refresh", "Back"])
                .interact()
                .context("Failed to get tracker action")?;

            match choice {
                0 => {
                    state.tracker.pause(clock);
                    toast("Tracking Paused", "Time tracking has been paused");
                }
                1 => stop(state, clock),
                2 => {
                    // No background tick; Refresh re-renders the elapsed readout.
                }
                _ => break,
            }
        } else {
            let choice = Select::with_theme(theme)
                .with_prompt("  Tracker action")
                .default(0)
                .items(&["Start", "Stop", "Back"])
                .interact()
                .context("Failed to get tracker action")?;

            match choice {
                0 => start(state, clock, theme)?,
                1 => stop(state, clock),
                _ => break,
            }
        }
    }

    Ok(())
}

fn render(state: &DashboardState, clock: &dyn Clock) {
    section("Active Time Tracker");

    println!(
        "  Elapsed: {}",
        format_clock(state.tracker.elapsed_seconds(clock))
    );
    if state.tracker.is_running() {
        println!("  Currently tracking: {}", state.tracker.website());
    } else if !state.tracker.website().is_empty() {
        println!("  Paused on: {}", state.tracker.website());
    }

    println!("\n  Recent Sessions");
    if state.tracker.sessions().is_empty() {
        println!("    No sessions recorded yet");
        println!("    Start tracking to see your sessions here");
    }
    for session in state.tracker.sessions() {
        println!(
            "    {:<20} {:>8}  [{}]",
            session.website,
            format_duration_seconds(session.duration_seconds),
            session.category
        );
    }
}

fn start(state: &mut DashboardState, clock: &dyn Clock, theme: &ColorfulTheme) -> Result<()> {
    let mut prompt = Input::<String>::with_theme(theme)
        .with_prompt("  Website/Application (e.g., github.com, docs.google.com)")
        .allow_empty(true);
    if !state.tracker.website().is_empty() {
        prompt = prompt.default(state.tracker.website().to_string());
    }

    let website = prompt
        .interact_text()
        .context("Failed to read website input")?;

    match state.tracker.start(&website, clock) {
        Ok(()) => toast(
            "Tracking Started",
            &format!("Now tracking time on {}", state.tracker.website()),
        ),
        Err(error) => reject("Website Required", &error.to_string()),
    }

    Ok(())
}

fn stop(state: &mut DashboardState, clock: &dyn Clock) {
    match state.tracker.stop(clock) {
        Some(session) => toast(
            "Session Saved",
            &format!(
                "Recorded {} on {}",
                format_duration_seconds(session.duration_seconds),
                session.website
            ),
        ),
        None => reject("Nothing Recorded", "Timer reset without saving a session"),
    }
}
