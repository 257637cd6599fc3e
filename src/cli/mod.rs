pub mod dashboard;
pub mod views;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "trackboard",
    about = "Terminal productivity-tracking dashboard"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    Dashboard {
        #[arg(long, default_value_t = false)]
        fresh: bool,
    },
    Report {
        #[arg(long)]
        week: Option<usize>,
    },
    Export {
        #[arg(long)]
        week: Option<usize>,
        #[arg(long)]
        dir: Option<String>,
    },
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    Set { key: String, value: String },
    Get { key: String },
}
