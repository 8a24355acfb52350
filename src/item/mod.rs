// Item catalog module
//
// This module provides the static side of the item system:
// - Item definitions (category, stack limit, stackability)
// - Item registry loaded once at startup
// - Item stacks for quantity management

pub mod definition;
pub mod registry;
pub mod stack;

// Re-export main types for convenient access
pub use definition::{ItemCategory, ItemDefinition, ItemId};
pub use registry::{CatalogError, ItemRegistry};
pub use stack::ItemStack;
