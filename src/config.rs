use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use thiserror::Error;
use tracing::warn;

use crate::loot::LootTable;

pub const DEFAULT_CONFIG_PATH: &str = "config/satchel.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Session setup: slot layout, crate loot and starter items.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SatchelConfig {
    pub layout: LayoutConfig,
    pub loot: LootConfig,
    pub starter: StarterConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub regular_slots: usize,
    pub chemical_slots: usize,
    pub weapon_slots: usize,
    /// Slots in the crate view; these accept any category.
    pub loot_slots: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            regular_slots: 15,
            chemical_slots: 4,
            weapon_slots: 2,
            loot_slots: 15,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LootConfig {
    pub min_items: u32,
    pub max_items: u32,
    /// Fixed RNG seed; `None` seeds from entropy.
    pub seed: Option<u64>,
    pub table: LootTable,
}

impl Default for LootConfig {
    fn default() -> Self {
        Self {
            min_items: 2,
            max_items: 8,
            seed: None,
            table: LootTable::new(
                vec!["bandage".into(), "rag".into()],
                vec!["antidote".into(), "solvent".into()],
                vec!["pistol".into(), "knife".into()],
            ),
        }
    }
}

/// Items handed to the player when the session starts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct StarterConfig {
    pub item: Option<String>,
    pub count: u32,
}

impl SatchelConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Load configuration from the default path.
    pub fn load() -> Self {
        Self::load_from_path(Path::new(DEFAULT_CONFIG_PATH))
    }

    /// Load configuration from an explicit path, falling back to defaults on errors.
    pub fn load_from_path(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match Self::from_toml_str(&contents) {
                Ok(cfg) => cfg,
                Err(err) => {
                    warn!("Failed to parse {}: {err}. Using defaults", path.display());
                    SatchelConfig::default()
                }
            },
            Err(err) => {
                if err.kind() == std::io::ErrorKind::NotFound {
                    warn!("Config not found at {}. Using defaults", path.display());
                } else {
                    warn!("Failed to read {}: {err}. Using defaults", path.display());
                }
                SatchelConfig::default()
            }
        }
    }
}
