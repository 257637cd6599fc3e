pub mod categories;
pub mod goals;
pub mod overview;
pub mod reports;
pub mod tracker;

use anyhow::{Context, Result};
use dialoguer::{Select, theme::ColorfulTheme};

use crate::store::categories::Category;

const DIVIDER: &str = "──────────────────────────────────────────";

pub fn section(title: &str) {
    println!("\n{DIVIDER}");
    println!("  {title}");
    println!("{DIVIDER}");
}

pub fn toast(title: &str, detail: &str) {
    println!("\n  ✓ {title}: {detail}");
}

pub fn reject(title: &str, detail: &str) {
    println!("\n  ! {title}: {detail}");
}

pub fn select_category(theme: &ColorfulTheme) -> Result<Category> {
    let choice = Select::with_theme(theme)
        .with_prompt("  Category")
        .default(0)
        .items(&["Productive", "Unproductive"])
        .interact()
        .context("Failed to get category selection")?;

    Ok(match choice {
        0 => Category::Productive,
        _ => Category::Unproductive,
    })
}
