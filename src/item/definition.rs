use serde::{Deserialize, Serialize};

/// Item identifier used for lookups in the [`ItemRegistry`](super::ItemRegistry).
pub type ItemId = String;

/// What kind of slot an item belongs in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemCategory {
    #[default]
    Regular,
    Chemical,
    Weapon,
}

/// The blueprint for an item type
///
/// This defines the static properties of an item that are shared
/// across all instances. Think of it as the "class" and ItemStack
/// as the "instance".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDefinition {
    /// Unique identifier (used for lookups and stacking)
    pub id: ItemId,

    /// Display name shown in UI
    #[serde(default)]
    pub name: String,

    /// Description shown in tooltips
    #[serde(default)]
    pub description: String,

    /// Which slot category this item fits into
    #[serde(default)]
    pub category: ItemCategory,

    /// Maximum stack size (must be at least 1)
    pub max_stack_size: u32,

    /// Whether several units share one slot
    #[serde(default)]
    pub stackable: bool,

    /// Basic items are kept out of the specialized slots entirely
    #[serde(default)]
    pub default_item: bool,
}

impl ItemDefinition {
    /// Creates a new item definition
    pub fn new(
        id: impl Into<ItemId>,
        name: impl Into<String>,
        description: impl Into<String>,
        category: ItemCategory,
        max_stack_size: u32,
        stackable: bool,
    ) -> Self {
        ItemDefinition {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            category,
            max_stack_size,
            stackable,
            default_item: false,
        }
    }

    /// Flags this definition as a default/basic item (Regular slots only).
    pub fn as_default_item(mut self) -> Self {
        self.default_item = true;
        self
    }

    /// How many units one slot may hold.
    ///
    /// Non-stackable items always occupy a slot of their own.
    pub fn stack_limit(&self) -> u32 {
        if self.stackable {
            self.max_stack_size.max(1)
        } else {
            1
        }
    }

    /// Returns true if this item can stack with another
    pub fn can_stack_with(&self, other: &ItemDefinition) -> bool {
        self.id == other.id && self.stack_limit() > 1
    }
}
