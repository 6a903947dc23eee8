use serde::Deserialize;
use std::path::{Path, PathBuf};
use directories::ProjectDirs;
use anyhow::{Context, Result};
use std::fs;
use crate::model::DesktopEntry;

#[derive(Deserialize, Debug, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub lookup: LookupConfig,
    #[serde(default)]
    pub entries: Vec<EntryConfig>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct GeneralConfig {
    #[serde(default)]
    pub pins_file: Option<PathBuf>,
    #[serde(default = "default_min_fuzzy_score")]
    pub min_fuzzy_score: u32,
}

fn default_min_fuzzy_score() -> u32 { 50 }

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            pins_file: None,
            min_fuzzy_score: default_min_fuzzy_score(),
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct LookupConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
}

fn default_true() -> bool { true }

impl Default for LookupConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// A desktop entry declared in the config file.
#[derive(Deserialize, Debug, Clone)]
pub struct EntryConfig {
    #[serde(flatten)]
    pub entry: DesktopEntry,
    /// Extra regexes matched against raw ids during heuristic lookup.
    #[serde(default, rename = "match")]
    pub patterns: Vec<String>,
}

pub fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("org", "dockpin", "dockpin")
}

pub fn default_config_path() -> PathBuf {
    match project_dirs() {
        Some(dirs) => dirs.config_dir().join("config.toml"),
        None => PathBuf::from("config.toml"),
    }
}

pub fn load_config() -> Result<Config> {
    load_config_from(&default_config_path())
}

pub fn load_config_from(config_path: &Path) -> Result<Config> {
    if !config_path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(config_path)
        .with_context(|| format!("reading {}", config_path.display()))?;
    parse_config(&content).with_context(|| format!("parsing {}", config_path.display()))
}

pub fn parse_config(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content)?;
    Ok(config)
}
