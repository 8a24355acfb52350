//! Categorized inventories, item stacking and loot crates.
//!
//! # Architecture
//!
//! - `item`: item definitions, the catalog registry and stacks
//! - `inventory`: slots and the inventory container
//! - `loot`: weighted loot tables and crates
//! - `transfer`: crate sessions and item movement between inventories
//! - `config`: TOML session configuration

pub mod config;
pub mod inventory;
pub mod item;
pub mod loot;
pub mod transfer;

pub use config::SatchelConfig;
pub use inventory::{Inventory, InventoryError, InventoryEvent, Slot, SlotCategory};
pub use item::{ItemCategory, ItemDefinition, ItemRegistry, ItemStack};
pub use loot::{CrateId, CrateState, LootCrate, LootTable};
pub use transfer::{CrateEvent, Interactable, TransferCoordinator, TransferError};
