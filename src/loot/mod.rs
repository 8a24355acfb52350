// Loot module
//
// - Weighted loot tables (regular / chemical / weapon pools)
// - Loot crates that roll their contents once and sync them back
//   from the crate view when closed

pub mod loot_crate;
pub mod table;

pub use loot_crate::{CrateId, CrateState, LootCrate};
pub use table::LootTable;
