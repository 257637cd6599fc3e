use anyhow::{Context, Result};
use dialoguer::{Select, theme::ColorfulTheme};

use crate::cli::views;
use crate::config::{Config, TAB_NAMES};
use crate::store::DashboardState;
use crate::store::tracker::SystemClock;

const TABS: [&str; 6] = [
    "Dashboard",
    "Time Tracker",
    "Categories",
    "Reports",
    "Goals",
    "Exit",
];

pub fn run_dashboard(mut state: DashboardState, config: &Config) -> Result<()> {
    println!("──────────────────────────────────────────");
    println!("  Productivity Dashboard");
    println!("  Track your time, analyze your habits,");
    println!("  and boost your productivity.");
    println!("──────────────────────────────────────────");

    let theme = ColorfulTheme::default();
    let clock = SystemClock;
    let mut selected = initial_tab_index(&config.default_tab);

    loop {
        println!();
        let choice = Select::with_theme(&theme)
            .with_prompt("Select a tab")
            .default(selected)
            .items(&TABS)
            .interact()
            .context("Failed to get tab selection")?;

        match choice {
            0 => views::overview::render(&state),
            1 => views::tracker::run(&mut state, &clock, &theme)?,
            2 => views::categories::run(&mut state, &theme)?,
            3 => views::reports::run(&state, config, &theme)?,
            4 => views::goals::run(&mut state, &theme)?,
            _ => break,
        }

        selected = choice;
    }

    println!("\nDashboard closed. State is kept in memory only and is now discarded.");

    Ok(())
}

fn initial_tab_index(default_tab: &str) -> usize {
    TAB_NAMES
        .iter()
        .position(|name| *name == default_tab)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::initial_tab_index;

    #[test]
    fn initial_tab_resolves_configured_name() {
        assert_eq!(initial_tab_index("dashboard"), 0);
        assert_eq!(initial_tab_index("tracker"), 1);
        assert_eq!(initial_tab_index("goals"), 4);
    }

    #[test]
    fn unknown_tab_falls_back_to_dashboard() {
        assert_eq!(initial_tab_index("settings"), 0);
    }
}
