use crate::item::ItemStack;

/// Notifications for whatever draws the inventory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventoryEvent {
    /// The stack in `index` changed; `None` means the slot is now empty.
    SlotChanged {
        index: usize,
        stack: Option<ItemStack>,
    },
    SelectionChanged {
        old: Option<usize>,
        new: usize,
    },
}
