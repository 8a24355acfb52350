// Transfer module
//
// Mediates everything that moves items around:
// - Opening and closing loot crates through a shared crate view
// - Moving stacks between the player and an open crate
// - Drag-and-drop reassignment inside one inventory
// - Ownership of the single interaction prompt

pub mod coordinator;
pub mod error;
pub mod focus;

pub use coordinator::{CrateEvent, TransferCoordinator};
pub use error::TransferError;
pub use focus::{Interactable, PromptFocus};
