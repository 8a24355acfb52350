use serde::{Deserialize, Serialize};

use super::definition::ItemId;

/// An instance of an item with quantity
///
/// This represents a specific amount of an item type. It lives in exactly
/// one inventory slot; a stack that drops to zero is removed from its slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStack {
    /// ID of the item definition in ItemRegistry
    pub item_id: ItemId,

    /// How many of this item (1 to the definition's stack limit)
    pub quantity: u32,
}

impl ItemStack {
    /// Creates a new item stack
    pub fn new(item_id: impl Into<ItemId>, quantity: u32) -> Self {
        ItemStack {
            item_id: item_id.into(),
            quantity,
        }
    }

    /// Returns true if this stack holds the same item type as `other`
    pub fn can_merge_with(&self, other: &ItemStack) -> bool {
        self.item_id == other.item_id
    }

    /// Adds items to this stack
    ///
    /// Returns how many items couldn't fit (overflow)
    pub fn add(&mut self, amount: u32, max_stack_size: u32) -> u32 {
        let total = self.quantity + amount;

        if total <= max_stack_size {
            self.quantity = total;
            0
        } else {
            self.quantity = max_stack_size.max(self.quantity);
            total - self.quantity
        }
    }

    /// Takes up to `amount` items from this stack
    ///
    /// Returns how many items were actually taken (might be less if stack is small)
    pub fn take(&mut self, amount: u32) -> u32 {
        let taken = amount.min(self.quantity);
        self.quantity -= taken;
        taken
    }

    /// Returns true if this stack is empty
    pub fn is_empty(&self) -> bool {
        self.quantity == 0
    }
}
