use serde::{Deserialize, Serialize};

use super::error::InventoryError;
use crate::item::{ItemCategory, ItemDefinition, ItemStack};

/// Which items a slot accepts.
///
/// Variant order is the grouping order used when an inventory sorts its
/// slots. Untagged slots are `Regular`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum SlotCategory {
    #[default]
    Regular,
    Chemical,
    Weapon,
    Any,
}

impl SlotCategory {
    /// Maps a layout group name to its slot category.
    pub fn from_group_name(group: &str) -> Self {
        match group {
            "RegularSlots" => SlotCategory::Regular,
            "ChemicalSlots" => SlotCategory::Chemical,
            "WeaponSlots" => SlotCategory::Weapon,
            "LootSlots" => SlotCategory::Any,
            _ => SlotCategory::Regular,
        }
    }

    pub fn accepts(self, item: ItemCategory) -> bool {
        match self {
            SlotCategory::Any => true,
            SlotCategory::Regular => item == ItemCategory::Regular,
            SlotCategory::Chemical => item == ItemCategory::Chemical,
            SlotCategory::Weapon => item == ItemCategory::Weapon,
        }
    }
}

/// A single storage cell holding at most one stack
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    category: SlotCategory,
    index: u32,
    occupant: Option<ItemStack>,
    selected: bool,
}

impl Slot {
    pub fn new(category: SlotCategory, index: u32) -> Self {
        Slot {
            category,
            index,
            occupant: None,
            selected: false,
        }
    }

    pub fn category(&self) -> SlotCategory {
        self.category
    }

    /// Author-assigned ordering key within the slot's category
    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn occupant(&self) -> Option<&ItemStack> {
        self.occupant.as_ref()
    }

    pub(crate) fn occupant_mut(&mut self) -> Option<&mut ItemStack> {
        self.occupant.as_mut()
    }

    pub fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }

    pub fn can_accept(&self, item: &ItemDefinition) -> bool {
        self.category.accepts(item.category)
    }

    /// Checks whether `item` could be placed here right now.
    ///
    /// `position` is the slot's position in its inventory, used for
    /// error reporting only.
    pub fn check_place(&self, position: usize, item: &ItemDefinition) -> Result<(), InventoryError> {
        if self.occupant.is_some() {
            return Err(InventoryError::SlotOccupied(position));
        }
        if !self.can_accept(item) {
            return Err(InventoryError::CategoryMismatch {
                slot: self.category,
                item: item.category,
            });
        }
        Ok(())
    }

    /// Puts `stack` into this empty slot.
    ///
    /// `item` must be the definition `stack` refers to, and the stack must
    /// hold between one unit and the item's stack limit.
    pub fn place(
        &mut self,
        position: usize,
        stack: ItemStack,
        item: &ItemDefinition,
    ) -> Result<(), InventoryError> {
        if stack.item_id != item.id {
            return Err(InventoryError::InvalidItem(stack.item_id));
        }
        let limit = item.stack_limit();
        if stack.quantity == 0 || stack.quantity > limit {
            return Err(InventoryError::InvalidQuantity {
                quantity: stack.quantity,
                limit,
            });
        }
        self.check_place(position, item)?;
        self.occupant = Some(stack);
        Ok(())
    }

    /// Puts back a stack that was just taken out of this slot.
    pub(crate) fn restore(&mut self, stack: ItemStack) {
        self.occupant = Some(stack);
    }

    /// Empties the slot, returning whatever was in it.
    pub fn take_out(&mut self) -> Option<ItemStack> {
        self.occupant.take()
    }

    pub fn select(&mut self) {
        self.selected = true;
    }

    pub fn deselect(&mut self) {
        self.selected = false;
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }
}
