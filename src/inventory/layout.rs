//! Slot group construction for player and loot inventories.

use super::slot::{Slot, SlotCategory};
use crate::config::LayoutConfig;

/// Builds `count` slots for a named group (`RegularSlots`, `LootSlots`, ...).
pub fn slot_group(group: &str, count: usize) -> Vec<Slot> {
    let category = SlotCategory::from_group_name(group);
    (0..count).map(|i| Slot::new(category, i as u32)).collect()
}

/// Regular, chemical and weapon groups of the player inventory.
pub fn player_slots(layout: &LayoutConfig) -> Vec<Slot> {
    let mut slots = slot_group("RegularSlots", layout.regular_slots);
    slots.extend(slot_group("ChemicalSlots", layout.chemical_slots));
    slots.extend(slot_group("WeaponSlots", layout.weapon_slots));
    slots
}

/// Catch-all slots used to display a crate's contents.
pub fn loot_slots(count: usize) -> Vec<Slot> {
    slot_group("LootSlots", count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_layout_counts() {
        let slots = player_slots(&LayoutConfig::default());
        assert_eq!(slots.len(), 21);

        let weapons = slots
            .iter()
            .filter(|s| s.category() == SlotCategory::Weapon)
            .count();
        assert_eq!(weapons, 2);
    }

    #[test]
    fn test_loot_slots_are_any() {
        let slots = loot_slots(3);
        assert!(slots.iter().all(|s| s.category() == SlotCategory::Any));
        assert_eq!(slots[2].index(), 2);
    }
}
