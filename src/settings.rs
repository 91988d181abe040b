use std::collections::HashMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default = "default_date_delta")]
    pub date_delta: u32,
    #[serde(default = "default_description_aliases")]
    pub description_aliases: Vec<String>,
    #[serde(default)]
    pub filter: FilterSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterSettings {
    #[serde(default = "default_filter_keep")]
    pub keep: Vec<String>,
    #[serde(default = "default_filter_rename")]
    pub rename: HashMap<String, String>,
}

fn default_date_format() -> String {
    "%m/%d/%Y".to_string()
}

fn default_date_delta() -> u32 {
    4
}

/// Column names commonly used for the description field across bank
/// exports, in priority order. Best-effort: a file carrying several of
/// these resolves to whichever appears first in column order.
fn default_description_aliases() -> Vec<String> {
    [
        "Description",
        "Memo",
        "Transaction description",
        "Payee",
        "Name",
        "Memo/Description",
        "Transaction",
        "Transaction Detail",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_filter_keep() -> Vec<String> {
    ["Post Date", "Transaction Detail", "Amount"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_filter_rename() -> HashMap<String, String> {
    HashMap::from([("Post Date".to_string(), "Date".to_string())])
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
            date_delta: default_date_delta(),
            description_aliases: default_description_aliases(),
            filter: FilterSettings::default(),
        }
    }
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            keep: default_filter_keep(),
            rename: default_filter_rename(),
        }
    }
}

fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("tally")
}

fn settings_path() -> PathBuf {
    config_dir().join("settings.json")
}

pub fn load_settings() -> Settings {
    let path = settings_path();
    if path.exists() {
        let content = std::fs::read_to_string(&path).unwrap_or_default();
        serde_json::from_str(&content).unwrap_or_default()
    } else {
        Settings::default()
    }
}
