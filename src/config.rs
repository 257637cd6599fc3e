use anyhow::{Context, Result, bail};
use dirs::home_dir;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const APP_DIR: &str = ".trackboard";
const CONFIG_FILE: &str = "config.json";

pub const TAB_NAMES: [&str; 5] = ["dashboard", "tracker", "categories", "reports", "goals"];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub export_dir: PathBuf,
    pub default_tab: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            export_dir: default_export_dir(),
            default_tab: "dashboard".to_string(),
        }
    }
}

impl Config {
    pub fn config_path() -> PathBuf {
        default_root_dir().join(CONFIG_FILE)
    }

    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();
        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", config_path.display()))
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let content = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&config_path, content)
            .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;

        Ok(())
    }

    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        match normalize_config_key(key) {
            "export_dir" => {
                self.export_dir = expand_home(value);
                fs::create_dir_all(&self.export_dir).with_context(|| {
                    format!(
                        "Failed to create export directory: {}",
                        self.export_dir.display()
                    )
                })?;
            }
            "default_tab" => {
                let tab = value.trim().to_lowercase();
                if !TAB_NAMES.contains(&tab.as_str()) {
                    bail!(
                        "Unknown tab: {value}. Supported tabs: {}",
                        TAB_NAMES.join(", ")
                    );
                }
                self.default_tab = tab;
            }
            _ => {
                bail!(
                    "Unsupported config key: {key}. Supported keys: export_dir|export.dir, default_tab|dashboard.tab"
                );
            }
        }

        Ok(())
    }

    pub fn get_value(&self, key: &str) -> Option<String> {
        match normalize_config_key(key) {
            "export_dir" => Some(self.export_dir.display().to_string()),
            "default_tab" => Some(self.default_tab.clone()),
            _ => None,
        }
    }
}

fn normalize_config_key(key: &str) -> &str {
    match key {
        "export_dir" | "export.dir" => "export_dir",
        "default_tab" | "dashboard.tab" => "default_tab",
        _ => key,
    }
}

pub fn expand_home(raw: &str) -> PathBuf {
    raw.strip_prefix("~/")
        .and_then(|stripped| home_dir().map(|home| home.join(stripped)))
        .unwrap_or_else(|| PathBuf::from(raw))
}

pub fn default_export_dir() -> PathBuf {
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("Documents")
        .join("trackboard")
        .join("reports")
}

fn default_root_dir() -> PathBuf {
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}
