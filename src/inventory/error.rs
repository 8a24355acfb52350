use thiserror::Error;

use super::slot::SlotCategory;
use crate::item::ItemCategory;

/// Errors that can occur during inventory operations
///
/// Every variant leaves the inventory exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    /// Slot index out of bounds
    #[error("invalid slot index: {0}")]
    InvalidSlot(usize),

    /// Item ID doesn't exist in registry
    #[error("invalid item id: {0}")]
    InvalidItem(String),

    /// Slot already holds a stack
    #[error("slot {0} is occupied")]
    SlotOccupied(usize),

    /// Stack count outside 1..=stack limit
    #[error("stack of {quantity} is outside 1..={limit}")]
    InvalidQuantity { quantity: u32, limit: u32 },

    /// Slot has nothing to move or take
    #[error("slot {0} is empty")]
    EmptySlot(usize),

    /// Item category is not allowed in the target slot
    #[error("{item:?} item cannot go into a {slot:?} slot")]
    CategoryMismatch {
        slot: SlotCategory,
        item: ItemCategory,
    },

    /// Remove/use was requested with nothing selected
    #[error("no slot is selected")]
    NoSelection,

    /// The selected index no longer points at a slot
    #[error("selected slot {0} no longer exists")]
    StaleSelection(usize),
}
