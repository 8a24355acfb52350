use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;

use super::table::LootTable;
use crate::config::LootConfig;
use crate::inventory::Inventory;
use crate::item::ItemId;

/// Identifies a crate within a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CrateId(pub u32);

impl fmt::Display for CrateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "crate#{}", self.0)
    }
}

/// Where a crate is in its open/close cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrateState {
    /// Nothing rolled yet
    Unopened,
    /// Contents rolled but never shown
    Generated,
    Open,
    /// Closed again, contents synced from the crate view
    Closed,
}

/// A one-shot loot container
///
/// Contents are rolled the first time they are needed and afterwards only
/// change through [`LootCrate::sync_from_inventory`]. Items are stored
/// flattened, one entry per unit.
#[derive(Debug, Clone)]
pub struct LootCrate {
    id: CrateId,
    table: LootTable,
    min_items: u32,
    max_items: u32,
    items: Vec<ItemId>,
    generated: bool,
    state: CrateState,
}

impl LootCrate {
    pub fn new(id: CrateId, table: LootTable) -> Self {
        LootCrate {
            id,
            table,
            min_items: 2,
            max_items: 8,
            items: Vec::new(),
            generated: false,
            state: CrateState::Unopened,
        }
    }

    pub fn from_config(id: CrateId, config: &LootConfig) -> Self {
        Self::new(id, config.table.clone()).with_bounds(config.min_items, config.max_items)
    }

    /// Sets how many rolls `generate_if_needed` makes.
    pub fn with_bounds(mut self, min_items: u32, max_items: u32) -> Self {
        self.min_items = min_items;
        self.max_items = max_items;
        self
    }

    pub fn id(&self) -> CrateId {
        self.id
    }

    pub fn table(&self) -> &LootTable {
        &self.table
    }

    pub fn items(&self) -> &[ItemId] {
        &self.items
    }

    pub fn is_generated(&self) -> bool {
        self.generated
    }

    pub fn state(&self) -> CrateState {
        self.state
    }

    pub(crate) fn set_state(&mut self, state: CrateState) {
        self.state = state;
    }

    /// Rolls between `min` and `max` items (inclusive).
    ///
    /// Rolls that come up empty are skipped, so the result can be shorter
    /// than the target. Once generated, the stored items are returned
    /// unchanged until [`LootCrate::reset`].
    pub fn generate<R: Rng + ?Sized>(&mut self, min: u32, max: u32, rng: &mut R) -> &[ItemId] {
        if self.generated {
            return &self.items;
        }

        let (low, high) = if min <= max { (min, max) } else { (max, min) };
        let target = rng.gen_range(low..=high);

        self.items.clear();
        for _ in 0..target {
            if let Some(item) = self.table.roll(rng) {
                self.items.push(item.clone());
            }
        }

        self.generated = true;
        if self.state == CrateState::Unopened {
            self.state = CrateState::Generated;
        }

        info!(crate_id = %self.id, target, rolled = self.items.len(), "generated loot");
        &self.items
    }

    /// Rolls with the crate's own bounds unless already generated.
    pub fn generate_if_needed<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &[ItemId] {
        let (min, max) = (self.min_items, self.max_items);
        self.generate(min, max, rng)
    }

    /// Forgets the rolled contents so the next open rolls again.
    pub fn reset(&mut self) {
        self.items.clear();
        self.generated = false;
        self.state = CrateState::Unopened;
    }

    /// Replaces the stored items with whatever `inventory` holds.
    ///
    /// Every unit of every stack becomes one entry, in slot order.
    pub fn sync_from_inventory(&mut self, inventory: &Inventory) -> &[ItemId] {
        self.items = inventory
            .iter_items()
            .flat_map(|stack| std::iter::repeat(stack.item_id.clone()).take(stack.quantity as usize))
            .collect();

        self.generated = true;
        if self.state == CrateState::Unopened {
            self.state = CrateState::Generated;
        }
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::{Slot, SlotCategory};
    use crate::item::{ItemCategory, ItemDefinition};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rag_only() -> LootTable {
        LootTable::new(vec!["rag".into()], Vec::new(), Vec::new())
    }

    #[test]
    fn test_generate_falls_back_to_only_pool() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut loot_crate = LootCrate::new(CrateId(1), rag_only());

        assert_eq!(loot_crate.table(), &rag_only());
        let items = loot_crate.generate(3, 3, &mut rng).to_vec();
        assert_eq!(items, vec!["rag", "rag", "rag"]);
        assert_eq!(loot_crate.state(), CrateState::Generated);
    }

    #[test]
    fn test_generate_is_idempotent() {
        let mut rng = StdRng::seed_from_u64(9);
        let table = LootTable::new(
            vec!["rag".into(), "bandage".into()],
            vec!["antidote".into()],
            vec!["knife".into()],
        );
        let mut loot_crate = LootCrate::new(CrateId(1), table);

        let first = loot_crate.generate(2, 8, &mut rng).to_vec();
        let second = loot_crate.generate(2, 8, &mut rng).to_vec();
        assert_eq!(first, second);
        assert!((2..=8).contains(&first.len()));
    }

    #[test]
    fn test_generate_with_empty_table() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut loot_crate = LootCrate::new(CrateId(2), LootTable::default());

        assert!(loot_crate.generate(2, 8, &mut rng).is_empty());
        assert!(loot_crate.is_generated());
    }

    #[test]
    fn test_swapped_bounds() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut loot_crate = LootCrate::new(CrateId(3), rag_only());
        let len = loot_crate.generate(4, 2, &mut rng).len();
        assert!((2..=4).contains(&len));
    }

    #[test]
    fn test_reset_allows_regeneration() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut loot_crate = LootCrate::new(CrateId(4), rag_only()).with_bounds(1, 1);
        loot_crate.generate_if_needed(&mut rng);

        loot_crate.reset();
        assert!(!loot_crate.is_generated());
        assert_eq!(loot_crate.state(), CrateState::Unopened);

        assert_eq!(loot_crate.generate_if_needed(&mut rng).len(), 1);
    }

    #[test]
    fn test_sync_flattens_stacks_in_slot_order() {
        let item_a = ItemDefinition::new("item_a", "A", "", ItemCategory::Regular, 5, true);
        let item_b = ItemDefinition::new("item_b", "B", "", ItemCategory::Regular, 5, true);
        let mut inventory = Inventory::new(vec![
            Slot::new(SlotCategory::Any, 0),
            Slot::new(SlotCategory::Any, 1),
        ]);
        for _ in 0..3 {
            inventory.add_item(&item_a);
        }
        inventory.add_item(&item_b);

        let mut loot_crate = LootCrate::new(CrateId(5), LootTable::default());
        let items = loot_crate.sync_from_inventory(&inventory).to_vec();
        assert_eq!(items, vec!["item_a", "item_a", "item_a", "item_b"]);
        assert!(loot_crate.is_generated());
    }
}
