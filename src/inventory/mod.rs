// Inventory system module
//
// This module provides slot-based storage:
// - Categorized slots holding at most one stack each
// - The inventory container with stacking, selection and removal
// - Slot group layouts for player and crate inventories
// - Change notifications for the UI layer

pub mod error;
pub mod events;
pub mod inventory;
pub mod layout;
pub mod slot;

// Re-export main types
pub use error::InventoryError;
pub use events::InventoryEvent;
pub use inventory::{Inventory, InventorySnapshot, SlotSnapshot};
pub use slot::{Slot, SlotCategory};
