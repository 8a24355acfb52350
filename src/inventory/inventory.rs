use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::error::InventoryError;
use super::events::InventoryEvent;
use super::slot::{Slot, SlotCategory};
use crate::item::{ItemDefinition, ItemId, ItemRegistry, ItemStack};

/// Ordered collection of categorized slots
///
/// Slot order is allocation priority: `add_item` always fills the
/// earliest eligible slot. When the inventory has slots, exactly one of
/// them is selected.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    slots: Vec<Slot>,
    selected: Option<usize>,
    events: Vec<InventoryEvent>,
}

/// One slot as seen by an external save/replication layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotSnapshot {
    pub category: SlotCategory,
    pub stack: Option<ItemStack>,
}

/// Ordered `(category, stack)` view of an inventory
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InventorySnapshot {
    pub slots: Vec<SlotSnapshot>,
}

/// Default items may only live in Regular slots, everything else goes
/// wherever its category is accepted.
fn is_eligible(slot: &Slot, item: &ItemDefinition) -> bool {
    if item.default_item && slot.category() != SlotCategory::Regular {
        return false;
    }
    slot.can_accept(item)
}

impl Inventory {
    /// Creates an inventory over `slots`, selecting the first one.
    pub fn new(slots: Vec<Slot>) -> Self {
        let mut inventory = Inventory::default();
        inventory.set_slots(slots);
        inventory.events.clear();
        inventory
    }

    /// Replaces the slot list.
    ///
    /// Slots are grouped by category and ordered by their own index inside
    /// a group. An empty list is ignored. The previous selection survives
    /// if it is still in range, otherwise the first slot is selected.
    pub fn set_slots(&mut self, mut new_slots: Vec<Slot>) {
        if new_slots.is_empty() {
            return;
        }

        new_slots.sort_by_key(|slot| (slot.category(), slot.index()));
        for slot in &mut new_slots {
            slot.deselect();
        }

        let old = self.selected;
        let keep = old.filter(|&index| index < new_slots.len()).unwrap_or(0);

        self.slots = new_slots;
        self.slots[keep].select();
        self.selected = Some(keep);
        if old != Some(keep) {
            self.events
                .push(InventoryEvent::SelectionChanged { old, new: keep });
        }
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn slot(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index)
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if the inventory holds no items
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Slot::is_empty)
    }

    /// Returns true if every slot is occupied
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(|slot| !slot.is_empty())
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_stack(&self) -> Option<&ItemStack> {
        self.selected
            .and_then(|index| self.slots.get(index))
            .and_then(Slot::occupant)
    }

    /// Counts how many of a specific item are in the inventory
    pub fn count_item(&self, item_id: &str) -> u32 {
        self.iter_items()
            .filter(|stack| stack.item_id == item_id)
            .map(|stack| stack.quantity)
            .sum()
    }

    /// Returns an iterator over all non-empty item stacks, in slot order
    pub fn iter_items(&self) -> impl Iterator<Item = &ItemStack> {
        self.slots.iter().filter_map(Slot::occupant)
    }

    /// Takes every pending notification, oldest first.
    pub fn drain_events(&mut self) -> Vec<InventoryEvent> {
        std::mem::take(&mut self.events)
    }

    /// Adds one unit of `item`.
    ///
    /// # Strategy
    /// 1. Top up the first eligible stack of the same item that has room
    /// 2. Otherwise start a new stack in the first eligible empty slot
    /// 3. Otherwise report `false` and change nothing
    pub fn add_item(&mut self, item: &ItemDefinition) -> bool {
        let limit = item.stack_limit();

        if item.stackable {
            let stack_slot = self.slots.iter().position(|slot| {
                is_eligible(slot, item)
                    && slot
                        .occupant()
                        .is_some_and(|stack| stack.item_id == item.id && stack.quantity < limit)
            });

            if let Some(index) = stack_slot {
                if let Some(stack) = self.slots[index].occupant_mut() {
                    stack.add(1, limit);
                }
                self.notify_slot(index);
                return true;
            }
        }

        let empty_slot = self
            .slots
            .iter()
            .position(|slot| slot.is_empty() && is_eligible(slot, item));

        if let Some(index) = empty_slot {
            match self.slots[index].place(index, ItemStack::new(item.id.clone(), 1), item) {
                Ok(()) => {
                    self.notify_slot(index);
                    return true;
                }
                Err(err) => warn!(item = %item.id, "placement failed: {err}"),
            }
        }

        debug!(item = %item.id, "no room for item");
        false
    }

    /// Adds `count` units of `item` one at a time, stopping at the first
    /// failure. Returns how many were added.
    pub fn add_starter_items(&mut self, item: &ItemDefinition, count: u32) -> u32 {
        let mut added = 0;
        while added < count && self.add_item(item) {
            added += 1;
        }
        added
    }

    /// Reads (and optionally uses up one unit of) the selected stack.
    ///
    /// Returns the item that was in the slot, even when this call used up
    /// its last unit, or `None` if the selected slot is empty.
    pub fn remove_from_selected(&mut self, consume: bool) -> Result<Option<ItemId>, InventoryError> {
        let index = self.selected.ok_or(InventoryError::NoSelection)?;
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(InventoryError::StaleSelection(index))?;

        let Some(stack) = slot.occupant_mut() else {
            return Ok(None);
        };
        let item_id = stack.item_id.clone();

        if consume {
            stack.take(1);
            if stack.is_empty() {
                slot.take_out();
            }
            self.notify_slot(index);
        }

        Ok(Some(item_id))
    }

    /// Moves the selection to `index`.
    ///
    /// Any previously selected slot is deselected first, slot 0 included.
    pub fn select(&mut self, index: usize) -> Result<(), InventoryError> {
        if index >= self.slots.len() {
            return Err(InventoryError::InvalidSlot(index));
        }

        let old = self.selected;
        if let Some(previous) = old.and_then(|i| self.slots.get_mut(i)) {
            previous.deselect();
        }

        self.slots[index].select();
        self.selected = Some(index);

        if old != Some(index) {
            self.events
                .push(InventoryEvent::SelectionChanged { old, new: index });
        }
        Ok(())
    }

    /// Moves a whole stack into an empty slot of the same inventory.
    ///
    /// The target must accept the item under the same rules `add_item`
    /// uses. Moving a slot onto itself does nothing.
    pub fn move_stack(
        &mut self,
        from: usize,
        to: usize,
        registry: &ItemRegistry,
    ) -> Result<(), InventoryError> {
        let source = self.slots.get(from).ok_or(InventoryError::InvalidSlot(from))?;
        let target = self.slots.get(to).ok_or(InventoryError::InvalidSlot(to))?;
        if from == to {
            return Ok(());
        }

        let item_id = source
            .occupant()
            .map(|stack| stack.item_id.clone())
            .ok_or(InventoryError::EmptySlot(from))?;
        let item = registry
            .get(&item_id)
            .ok_or_else(|| InventoryError::InvalidItem(item_id.clone()))?;

        target.check_place(to, item)?;
        if !is_eligible(target, item) {
            return Err(InventoryError::CategoryMismatch {
                slot: target.category(),
                item: item.category,
            });
        }

        if let Some(stack) = self.slots[from].take_out() {
            if let Err(err) = self.slots[to].place(to, stack.clone(), item) {
                self.slots[from].restore(stack);
                return Err(err);
            }
        }
        self.notify_slot(from);
        self.notify_slot(to);
        Ok(())
    }

    /// Moves the stack in `index` into `other`, one unit at a time.
    ///
    /// Units `other` cannot take stay where they are. Returns how many
    /// units moved.
    pub fn transfer_slot_to(
        &mut self,
        index: usize,
        other: &mut Inventory,
        registry: &ItemRegistry,
    ) -> Result<u32, InventoryError> {
        let stack = self
            .slots
            .get(index)
            .ok_or(InventoryError::InvalidSlot(index))?
            .occupant()
            .cloned()
            .ok_or(InventoryError::EmptySlot(index))?;
        let item = registry
            .get(&stack.item_id)
            .ok_or_else(|| InventoryError::InvalidItem(stack.item_id.clone()))?;

        let mut moved = 0;
        while moved < stack.quantity && other.add_item(item) {
            moved += 1;
        }

        if moved > 0 {
            let slot = &mut self.slots[index];
            if let Some(remaining) = slot.occupant_mut() {
                remaining.take(moved);
                if remaining.is_empty() {
                    slot.take_out();
                }
            }
            self.notify_slot(index);
        }

        Ok(moved)
    }

    /// Clears all items from the inventory
    pub fn clear(&mut self) {
        for index in 0..self.slots.len() {
            if self.slots[index].take_out().is_some() {
                self.notify_slot(index);
            }
        }
    }

    pub fn snapshot(&self) -> InventorySnapshot {
        InventorySnapshot {
            slots: self
                .slots
                .iter()
                .map(|slot| SlotSnapshot {
                    category: slot.category(),
                    stack: slot.occupant().cloned(),
                })
                .collect(),
        }
    }

    fn notify_slot(&mut self, index: usize) {
        let stack = self.slots.get(index).and_then(Slot::occupant).cloned();
        self.events.push(InventoryEvent::SlotChanged { index, stack });
    }
}
