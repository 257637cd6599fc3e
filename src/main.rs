mod analyzer;
mod cli;
mod config;
mod sample;
mod store;

use crate::cli::{Cli, Commands, ConfigCommands};
use crate::config::{Config, expand_home};
use crate::store::DashboardState;
use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Dashboard { fresh } => handle_dashboard(fresh),
        Commands::Report { week } => handle_report(week),
        Commands::Export { week, dir } => handle_export(week, dir),
        Commands::Config { command } => handle_config_command(command),
    }
}

fn handle_dashboard(fresh: bool) -> Result<()> {
    let config = load_or_default_config()?;
    let state = if fresh {
        DashboardState::empty()
    } else {
        DashboardState::sample()?
    };

    cli::dashboard::run_dashboard(state, &config)
}

fn handle_report(week: Option<usize>) -> Result<()> {
    let state = DashboardState::sample()?;
    let report = analyzer::report::build_weekly_report(&state.stats, week)?;

    print!("{}", analyzer::report::render_markdown(&report));
    Ok(())
}

fn handle_export(week: Option<usize>, dir: Option<String>) -> Result<()> {
    let config = load_or_default_config()?;
    let export_dir = dir
        .as_deref()
        .map(expand_home)
        .unwrap_or(config.export_dir);

    let state = DashboardState::sample()?;
    let (report, saved) = analyzer::export_weekly_report(&state.stats, week, &export_dir)?;

    println!("Report exported: {}", report.week);
    println!("- Markdown: {}", saved.markdown_path.display());
    println!("- JSON: {}", saved.json_path.display());
    Ok(())
}

fn handle_config_command(command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Set { key, value } => {
            let mut config = load_or_default_config()?;
            config.set_value(&key, &value)?;
            config.save()?;

            println!("Config saved: {key} = {value}");
            Ok(())
        }
        ConfigCommands::Get { key } => {
            let config = load_or_default_config()?;
            let value = config
                .get_value(&key)
                .with_context(|| format!("Unsupported config key: {key}"))?;

            println!("{value}");
            Ok(())
        }
    }
}

fn load_or_default_config() -> Result<Config> {
    Config::load().or_else(|_| {
        let config = Config::default();
        config.save()?;
        Ok(config)
    })
}
