use anyhow::{Context, Result};
use dialoguer::{Input, Select, theme::ColorfulTheme};

use crate::cli::views::{reject, section, select_category, toast};
use crate::store::DashboardState;
use crate::store::categories::WebsiteStore;

pub fn run(state: &mut DashboardState, theme: &ColorfulTheme) -> Result<()> {
    loop {
        render(&state.websites);

        let choice = Select::with_theme(theme)
            .with_prompt("  Category action")
            .default(0)
            .items(&["Add website", "Change category", "Remove website", "Back"])
            .interact()
            .context("Failed to get category action")?;

        match choice {
            0 => add(state, theme)?,
            1 => change_category(state, theme)?,
            2 => remove(state, theme)?,
            _ => break,
        }
    }

    Ok(())
}

fn render(store: &WebsiteStore) {
    section("Website Categories");

    println!(
        "  Productive: {}   Unproductive: {}",
        store.productive_count(),
        store.unproductive_count()
    );
    println!();

    if store.records().is_empty() {
        println!("  No websites categorized yet");
        println!("  Add websites to start categorizing your browsing habits");
    }
    for record in store.records() {
        println!(
            "  {:<22} [{}]  {}",
            record.url, record.category, record.description
        );
    }
}

fn add(state: &mut DashboardState, theme: &ColorfulTheme) -> Result<()> {
    let url: String = Input::with_theme(theme)
        .with_prompt("  Website URL (e.g., github.com)")
        .allow_empty(true)
        .interact_text()
        .context("Failed to read website URL")?;

    let category = select_category(theme)?;

    let description: String = Input::with_theme(theme)
        .with_prompt("  Description (optional)")
        .allow_empty(true)
        .interact_text()
        .context("Failed to read description")?;

    match state.websites.add(&url, category, &description) {
        Ok(record) => toast(
            "Website Added",
            &format!("{} has been categorized as {}", record.url, record.category),
        ),
        Err(error) => reject("Missing Information", &error.to_string()),
    }

    Ok(())
}

fn change_category(state: &mut DashboardState, theme: &ColorfulTheme) -> Result<()> {
    let id = match select_record(&state.websites, theme, "  Which website?")? {
        Some(id) => id,
        None => return Ok(()),
    };

    let category = select_category(theme)?;
    if state.websites.update_category(id, category) {
        toast("Category Updated", "Website category has been updated");
    } else {
        reject("Unknown Website", "No website with that id");
    }

    Ok(())
}

fn remove(state: &mut DashboardState, theme: &ColorfulTheme) -> Result<()> {
    let id = match select_record(&state.websites, theme, "  Remove which website?")? {
        Some(id) => id,
        None => return Ok(()),
    };

    if state.websites.remove(id) {
        toast("Website Removed", "Website has been removed from categories");
    } else {
        reject("Unknown Website", "No website with that id");
    }

    Ok(())
}

fn select_record(
    store: &WebsiteStore,
    theme: &ColorfulTheme,
    prompt: &str,
) -> Result<Option<u32>> {
    if store.records().is_empty() {
        println!("  No websites categorized yet");
        return Ok(None);
    }

    let labels = store
        .records()
        .iter()
        .map(|record| format!("{} [{}]", record.url, record.category))
        .collect::<Vec<_>>();

    let choice = Select::with_theme(theme)
        .with_prompt(prompt)
        .default(0)
        .items(&labels)
        .interact()
        .context("Failed to get website selection")?;

    Ok(store.records().get(choice).map(|record| record.id))
}
