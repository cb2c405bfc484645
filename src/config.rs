//! Shop profile: the heading block printed at the top of every receipt plus
//! the footer line. Stored as TOML in the platform config directory and
//! seeded from an embedded default on first run.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

const DEFAULT_PROFILE: &str = include_str!("../shop.toml");

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopProfile {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub footer: String,
}

impl Default for ShopProfile {
    fn default() -> Self {
        // The embedded file is part of the build; a parse failure here is a
        // packaging bug, not a runtime condition.
        toml::from_str(DEFAULT_PROFILE).expect("embedded shop.toml is valid")
    }
}

pub fn profile_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "bill-maker", "app") {
        let config_dir = proj_dirs.config_dir();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).ok();
        }
        return config_dir.join("shop.toml");
    }
    PathBuf::from("shop.toml")
}

/// Loads the stored profile, writing the embedded default on first run.
pub fn load_or_init() -> Result<ShopProfile> {
    let path = profile_path();
    if path.exists() {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
    } else {
        log::info!("initializing default shop profile at {}", path.display());
        fs::write(&path, DEFAULT_PROFILE)
            .with_context(|| format!("failed to write {}", path.display()))?;
        Ok(ShopProfile::default())
    }
}

pub fn save(profile: &ShopProfile) -> Result<()> {
    let path = profile_path();
    let toml_str = toml::to_string_pretty(profile).context("failed to serialize shop profile")?;
    fs::write(&path, toml_str).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
