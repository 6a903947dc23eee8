use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use crate::config::{project_dirs, Config};

/// The pinned list as stored on disk.
#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq, Eq)]
pub struct PinnedApps {
    #[serde(default)]
    pub pinned: Vec<String>,
}

pub fn default_pins_path() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.data_dir().join("pinned.json"))
        .unwrap_or_else(|| PathBuf::from("pinned.json"))
}

pub fn pins_path(config: &Config) -> PathBuf {
    config.general.pins_file.clone().unwrap_or_else(default_pins_path)
}

/// Lenient read for display: a missing or unreadable file is an empty list.
pub fn load_pins(path: &Path) -> PinnedApps {
    match try_load_pins(path) {
        Ok(pins) => pins,
        Err(e) => {
            warn!("Ignoring unreadable pinned list: {:#}", e);
            PinnedApps::default()
        }
    }
}

/// Strict read for updates: only a missing file counts as an empty list.
pub fn try_load_pins(path: &Path) -> Result<PinnedApps> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("No pinned list at {}, starting empty", path.display());
            return Ok(PinnedApps::default());
        }
        Err(e) => return Err(e).with_context(|| format!("reading {}", path.display())),
    };
    serde_json::from_str(&content).with_context(|| format!("parsing {}", path.display()))
}

/// Load, apply `next`, and save if anything changed. Returns the new list.
///
/// A file that exists but cannot be read or parsed is left as it is.
pub fn update_pins(path: &Path, next: impl FnOnce(&[String]) -> Vec<String>) -> Result<PinnedApps> {
    let current = try_load_pins(path)?;
    let updated = PinnedApps { pinned: next(&current.pinned) };

    if updated != current {
        save_pins(path, &updated)?;
    }
    Ok(updated)
}

pub fn save_pins(path: &Path, pins: &PinnedApps) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(pins)?;
    fs::write(path, content)?;
    info!("Saved {} pinned apps to {}", pins.pinned.len(), path.display());
    Ok(())
}
