use std::collections::HashMap;

use thiserror::Error;
use tracing::{debug, warn};

use super::definition::{ItemCategory, ItemDefinition};

/// Errors raised while building the item catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("item '{0}' already registered")]
    DuplicateItem(String),

    #[error("item '{0}' has a max stack size of zero")]
    InvalidStackLimit(String),

    #[error("failed to parse item catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Central registry of all item definitions
///
/// This is the single source of truth for what items exist in the game.
/// Inventories and loot crates only store IDs that look up definitions
/// here.
#[derive(Debug, Clone, Default)]
pub struct ItemRegistry {
    items: HashMap<String, ItemDefinition>,
}

impl ItemRegistry {
    /// Creates a new empty registry
    pub fn new() -> Self {
        ItemRegistry {
            items: HashMap::new(),
        }
    }

    /// Creates a registry with all built-in items pre-registered
    pub fn create_default() -> Self {
        let mut registry = Self::new();
        for item in base_items() {
            if let Err(err) = registry.register(item) {
                warn!("skipping built-in item: {err}");
            }
        }
        registry
    }

    /// Loads a catalog from a JSON array of item definitions.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let definitions: Vec<ItemDefinition> = serde_json::from_str(json)?;

        let mut registry = Self::new();
        for item in definitions {
            registry.register(item)?;
        }

        debug!(items = registry.len(), "loaded item catalog");
        Ok(registry)
    }

    /// Registers a new item definition
    ///
    /// Returns error if an item with this ID already exists or its
    /// stack limit is zero.
    pub fn register(&mut self, item: ItemDefinition) -> Result<(), CatalogError> {
        if item.max_stack_size == 0 {
            return Err(CatalogError::InvalidStackLimit(item.id));
        }
        if self.items.contains_key(&item.id) {
            return Err(CatalogError::DuplicateItem(item.id));
        }

        self.items.insert(item.id.clone(), item);
        Ok(())
    }

    /// Gets an item definition by ID
    pub fn get(&self, id: &str) -> Option<&ItemDefinition> {
        self.items.get(id)
    }

    /// Returns true if an item with this ID exists
    pub fn exists(&self, id: &str) -> bool {
        self.items.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns all item definitions
    pub fn all_items(&self) -> Vec<&ItemDefinition> {
        self.items.values().collect()
    }
}

// ======================================================================
// Base items
// ======================================================================

fn base_items() -> Vec<ItemDefinition> {
    vec![
        ItemDefinition::new(
            "bandage",
            "Bandage",
            "Stops bleeding.",
            ItemCategory::Regular,
            5,
            true,
        ),
        ItemDefinition::new(
            "rag",
            "Rag",
            "A scrap of cloth. Good for crafting bandages.",
            ItemCategory::Regular,
            10,
            true,
        ),
        ItemDefinition::new(
            "pebble",
            "Pebble",
            "Throw it to make a noise.",
            ItemCategory::Regular,
            20,
            true,
        )
        .as_default_item(),
        ItemDefinition::new(
            "antidote",
            "Antidote",
            "Neutralizes most toxins.",
            ItemCategory::Chemical,
            3,
            true,
        ),
        ItemDefinition::new(
            "solvent",
            "Solvent",
            "Dissolves rust and grime.",
            ItemCategory::Chemical,
            3,
            true,
        ),
        ItemDefinition::new("pistol", "Pistol", "A worn sidearm.", ItemCategory::Weapon, 1, false),
        ItemDefinition::new("knife", "Knife", "Short and sharp.", ItemCategory::Weapon, 1, false),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_contents() {
        let registry = ItemRegistry::create_default();
        assert_eq!(registry.len(), 7);
        assert_eq!(registry.all_items().len(), registry.len());
        assert!(registry.exists("bandage"));
        assert!(registry.get("pebble").unwrap().default_item);
        assert!(!registry.get("rag").unwrap().default_item);
        assert_eq!(registry.get("pistol").unwrap().category, ItemCategory::Weapon);
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let mut registry = ItemRegistry::new();
        let rag = ItemDefinition::new("rag", "Rag", "", ItemCategory::Regular, 10, true);
        registry.register(rag.clone()).unwrap();

        let err = registry.register(rag).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateItem(id) if id == "rag"));
    }

    #[test]
    fn test_zero_stack_limit_rejected() {
        let mut registry = ItemRegistry::new();
        let broken = ItemDefinition::new("dust", "Dust", "", ItemCategory::Regular, 0, true);
        assert!(matches!(
            registry.register(broken),
            Err(CatalogError::InvalidStackLimit(_))
        ));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_catalog_from_json() {
        let json = r#"[
            { "id": "bandage", "max_stack_size": 5, "stackable": true },
            { "id": "pistol", "category": "Weapon", "max_stack_size": 1 }
        ]"#;
        let registry = ItemRegistry::from_json_str(json).unwrap();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("bandage").unwrap().stack_limit(), 5);
        assert_eq!(registry.get("pistol").unwrap().category, ItemCategory::Weapon);
    }

    #[test]
    fn test_catalog_parse_error() {
        assert!(matches!(
            ItemRegistry::from_json_str("{ not json"),
            Err(CatalogError::Parse(_))
        ));
    }
}
