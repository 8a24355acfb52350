use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::item::ItemId;

/// Chance that a roll picks from the regular pool.
pub const REGULAR_CHANCE: f32 = 0.6;
/// Chance that a roll picks from the chemical pool.
pub const CHEMICAL_CHANCE: f32 = 0.3;
/// Chance that a roll picks from the weapon pool.
pub const WEAPON_CHANCE: f32 = 0.1;

/// Weighted item pools a crate draws its contents from
///
/// Pools hold item IDs and may repeat an ID to make it more likely
/// within its pool. Any pool may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LootTable {
    pub regular: Vec<ItemId>,
    pub chemical: Vec<ItemId>,
    pub weapon: Vec<ItemId>,
}

impl LootTable {
    pub fn new(regular: Vec<ItemId>, chemical: Vec<ItemId>, weapon: Vec<ItemId>) -> Self {
        LootTable {
            regular,
            chemical,
            weapon,
        }
    }

    /// Returns true if every pool is empty
    pub fn is_empty(&self) -> bool {
        self.regular.is_empty() && self.chemical.is_empty() && self.weapon.is_empty()
    }

    /// Picks the pool a roll in `[0, 1)` lands in.
    pub fn pool_for_roll(&self, roll: f32) -> &[ItemId] {
        if roll <= REGULAR_CHANCE {
            &self.regular
        } else if roll <= REGULAR_CHANCE + CHEMICAL_CHANCE {
            &self.chemical
        } else {
            &self.weapon
        }
    }

    /// Draws a single item.
    ///
    /// When the weighted pick lands on an empty pool, the item is drawn
    /// uniformly from all pools put together, so larger pools win more
    /// often. Returns `None` only when every pool is empty.
    pub fn roll<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&ItemId> {
        let roll: f32 = rng.gen_range(0.0..1.0);
        if let Some(item) = self.pool_for_roll(roll).choose(rng) {
            return Some(item);
        }

        let total = self.regular.len() + self.chemical.len() + self.weapon.len();
        if total == 0 {
            return None;
        }

        let pick = rng.gen_range(0..total);
        self.regular
            .iter()
            .chain(&self.chemical)
            .chain(&self.weapon)
            .nth(pick)
    }
}
