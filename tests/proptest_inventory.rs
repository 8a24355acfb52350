//! Property-based tests for inventory allocation
//!
//! Validates allocation invariants:
//! - Stacks never exceed their item's stack limit
//! - Items only ever sit in slots whose category accepts them
//! - Default items never leave Regular slots
//! - Exactly one slot is selected after any sequence of selections
//! - Loot generation stays within its bounds and is stable once rolled

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use satchel::{
    CrateId, Inventory, ItemCategory, ItemDefinition, ItemRegistry, LootCrate, LootTable, Slot,
    SlotCategory,
};

fn slot_category() -> impl Strategy<Value = SlotCategory> {
    prop_oneof![
        Just(SlotCategory::Regular),
        Just(SlotCategory::Chemical),
        Just(SlotCategory::Weapon),
        Just(SlotCategory::Any),
    ]
}

fn build_slots(categories: &[SlotCategory]) -> Vec<Slot> {
    categories
        .iter()
        .enumerate()
        .map(|(i, &category)| Slot::new(category, i as u32))
        .collect()
}

fn catalog() -> Vec<ItemDefinition> {
    vec![
        ItemDefinition::new("bandage", "Bandage", "", ItemCategory::Regular, 5, true),
        ItemDefinition::new("antidote", "Antidote", "", ItemCategory::Chemical, 3, true),
        ItemDefinition::new("pistol", "Pistol", "", ItemCategory::Weapon, 1, false),
        ItemDefinition::new("pebble", "Pebble", "", ItemCategory::Regular, 4, true)
            .as_default_item(),
    ]
}

fn registry() -> ItemRegistry {
    let mut registry = ItemRegistry::new();
    for item in catalog() {
        registry.register(item).unwrap();
    }
    registry
}

proptest! {
    /// Property: no stack ever holds more than its item's limit
    #[test]
    fn test_stacks_never_exceed_limit(
        categories in prop::collection::vec(slot_category(), 1..12),
        adds in prop::collection::vec(0usize..4, 0..80),
    ) {
        let registry = registry();
        let items = catalog();
        let mut inventory = Inventory::new(build_slots(&categories));

        for pick in adds {
            inventory.add_item(&items[pick]);
        }

        for stack in inventory.iter_items() {
            let limit = registry.get(&stack.item_id).unwrap().stack_limit();
            prop_assert!(stack.quantity >= 1 && stack.quantity <= limit);
        }
    }

    /// Property: occupants always match their slot's category, and
    /// default items only sit in Regular slots
    #[test]
    fn test_category_isolation_holds(
        categories in prop::collection::vec(slot_category(), 1..12),
        adds in prop::collection::vec(0usize..4, 0..60),
    ) {
        let registry = registry();
        let items = catalog();
        let mut inventory = Inventory::new(build_slots(&categories));

        for pick in adds {
            inventory.add_item(&items[pick]);
        }

        for slot in inventory.slots() {
            if let Some(stack) = slot.occupant() {
                let item = registry.get(&stack.item_id).unwrap();
                prop_assert!(slot.can_accept(item));
                if item.default_item {
                    prop_assert_eq!(slot.category(), SlotCategory::Regular);
                }
                if item.category == ItemCategory::Weapon {
                    prop_assert!(matches!(slot.category(), SlotCategory::Weapon | SlotCategory::Any));
                }
            }
        }
    }

    /// Property: a failed add changes nothing
    #[test]
    fn test_failed_add_leaves_inventory_unchanged(
        categories in prop::collection::vec(slot_category(), 1..6),
        adds in prop::collection::vec(0usize..4, 0..40),
        last in 0usize..4,
    ) {
        let items = catalog();
        let mut inventory = Inventory::new(build_slots(&categories));
        for pick in adds {
            inventory.add_item(&items[pick]);
        }

        let before = inventory.snapshot();
        if !inventory.add_item(&items[last]) {
            prop_assert_eq!(inventory.snapshot(), before);
        }
    }

    /// Property: exactly one slot is selected after any selections
    #[test]
    fn test_selection_is_exclusive(
        slot_count in 1usize..10,
        selections in prop::collection::vec(0usize..12, 0..20),
    ) {
        let mut inventory = Inventory::new(build_slots(&vec![SlotCategory::Regular; slot_count]));

        for index in selections {
            let _ = inventory.select(index);
        }

        let selected = inventory.slots().iter().filter(|slot| slot.is_selected()).count();
        prop_assert_eq!(selected, 1);
        let index = inventory.selected_index().unwrap();
        prop_assert!(inventory.slot(index).unwrap().is_selected());
    }

    /// Property: loot size stays in bounds and does not change once rolled
    #[test]
    fn test_loot_count_bounds(
        seed in any::<u64>(),
        regular in prop::collection::vec("[a-c]", 0..3),
        chemical in prop::collection::vec("[d-f]", 0..3),
        weapon in prop::collection::vec("[g-i]", 0..3),
    ) {
        let table = LootTable::new(regular, chemical, weapon);
        let all_empty = table.is_empty();
        let mut rng = StdRng::seed_from_u64(seed);
        let mut loot_crate = LootCrate::new(CrateId(1), table);

        let first = loot_crate.generate(2, 8, &mut rng).to_vec();
        prop_assert!(first.len() <= 8);
        if all_empty {
            prop_assert!(first.is_empty());
        } else {
            prop_assert!(first.len() >= 2);
        }

        let second = loot_crate.generate(2, 8, &mut rng).to_vec();
        prop_assert_eq!(first, second);
    }
}
