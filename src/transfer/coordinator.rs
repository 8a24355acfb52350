use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

use super::error::TransferError;
use super::focus::{Interactable, PromptFocus};
use crate::config::SatchelConfig;
use crate::inventory::{Inventory, Slot, layout};
use crate::item::{ItemId, ItemRegistry};
use crate::loot::{CrateId, CrateState, LootCrate};

/// Notifications for the crate overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrateEvent {
    Opened { crate_id: CrateId, items: Vec<ItemId> },
    Closed { crate_id: CrateId, items: Vec<ItemId> },
}

/// Moves items between the player, the crates of a scene and their slots
///
/// Owns every crate in the scene plus one shared crate view: a transient
/// inventory that shows the contents of whichever crate is open. At most
/// one crate is open at a time.
#[derive(Debug)]
pub struct TransferCoordinator {
    crates: BTreeMap<CrateId, LootCrate>,
    crate_view: Inventory,
    active: Option<CrateId>,
    focus: PromptFocus,
    rng: StdRng,
    events: Vec<CrateEvent>,
}

impl TransferCoordinator {
    pub fn new(view_slots: Vec<Slot>, rng: StdRng) -> Self {
        TransferCoordinator {
            crates: BTreeMap::new(),
            crate_view: Inventory::new(view_slots),
            active: None,
            focus: PromptFocus::new(),
            rng,
            events: Vec::new(),
        }
    }

    /// Deterministic coordinator, mostly for tests and replays.
    pub fn with_seed(view_slots: Vec<Slot>, seed: u64) -> Self {
        Self::new(view_slots, StdRng::seed_from_u64(seed))
    }

    pub fn from_config(config: &SatchelConfig) -> Self {
        let rng = match config.loot.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(layout::loot_slots(config.layout.loot_slots), rng)
    }

    /// Registers a crate, replacing any crate with the same id.
    pub fn add_crate(&mut self, loot_crate: LootCrate) -> CrateId {
        let id = loot_crate.id();
        if self.crates.insert(id, loot_crate).is_some() {
            warn!(crate_id = %id, "replaced existing crate");
        }
        id
    }

    pub fn loot_crate(&self, id: CrateId) -> Option<&LootCrate> {
        self.crates.get(&id)
    }

    pub fn crate_state(&self, id: CrateId) -> Option<CrateState> {
        self.crates.get(&id).map(LootCrate::state)
    }

    pub fn active_crate(&self) -> Option<CrateId> {
        self.active
    }

    pub fn crate_view(&self) -> &Inventory {
        &self.crate_view
    }

    /// Mutable crate view, for selecting and using items inside an open crate.
    pub fn crate_view_mut(&mut self) -> &mut Inventory {
        &mut self.crate_view
    }

    pub fn drain_events(&mut self) -> Vec<CrateEvent> {
        std::mem::take(&mut self.events)
    }

    /// Opens a crate and fills the crate view with its contents.
    ///
    /// Rolls the crate's loot on first open. Another open crate is closed
    /// (and synced) first; reopening the crate that is already open keeps
    /// the view as it is.
    pub fn open_crate(
        &mut self,
        id: CrateId,
        registry: &ItemRegistry,
    ) -> Result<&Inventory, TransferError> {
        if !self.crates.contains_key(&id) {
            return Err(TransferError::UnknownCrate(id));
        }
        if self.active == Some(id) {
            return Ok(&self.crate_view);
        }
        if self.active.is_some() {
            self.close_crate();
        }

        let loot_crate = self
            .crates
            .get_mut(&id)
            .ok_or(TransferError::UnknownCrate(id))?;
        let items = loot_crate.generate_if_needed(&mut self.rng).to_vec();

        self.crate_view.clear();
        let mut dropped = 0;
        for item_id in &items {
            match registry.get(item_id) {
                Some(item) => {
                    if !self.crate_view.add_item(item) {
                        dropped += 1;
                    }
                }
                None => {
                    warn!(crate_id = %id, item = %item_id, "unknown item in crate");
                    dropped += 1;
                }
            }
        }
        if dropped > 0 {
            warn!(crate_id = %id, dropped, "crate view could not hold every item");
        }

        loot_crate.set_state(CrateState::Open);
        self.active = Some(id);
        info!(crate_id = %id, items = items.len(), "opened crate");
        self.events.push(CrateEvent::Opened {
            crate_id: id,
            items,
        });

        Ok(&self.crate_view)
    }

    /// Closes the open crate, writing the crate view back into it.
    ///
    /// Returns the crate that was closed, or `None` if nothing was open.
    pub fn close_crate(&mut self) -> Option<CrateId> {
        let id = self.active.take()?;

        let items = match self.crates.get_mut(&id) {
            Some(loot_crate) => {
                let items = loot_crate.sync_from_inventory(&self.crate_view).to_vec();
                loot_crate.set_state(CrateState::Closed);
                items
            }
            None => {
                warn!(crate_id = %id, "open crate vanished before close");
                Vec::new()
            }
        };

        self.crate_view.clear();
        info!(crate_id = %id, remaining = items.len(), "closed crate");
        self.events.push(CrateEvent::Closed {
            crate_id: id,
            items,
        });
        Some(id)
    }

    /// Moves the stack in crate-view slot `index` into the player inventory.
    ///
    /// Returns how many units moved; the rest stay in the crate.
    pub fn take_from_crate(
        &mut self,
        index: usize,
        player: &mut Inventory,
        registry: &ItemRegistry,
    ) -> Result<u32, TransferError> {
        if self.active.is_none() {
            return Err(TransferError::NoActiveCrate);
        }
        Ok(self.crate_view.transfer_slot_to(index, player, registry)?)
    }

    /// Moves the stack in player slot `index` into the open crate.
    pub fn store_in_crate(
        &mut self,
        index: usize,
        player: &mut Inventory,
        registry: &ItemRegistry,
    ) -> Result<u32, TransferError> {
        if self.active.is_none() {
            return Err(TransferError::NoActiveCrate);
        }
        Ok(player.transfer_slot_to(index, &mut self.crate_view, registry)?)
    }

    /// Drag-and-drop inside one inventory.
    pub fn reassign(
        inventory: &mut Inventory,
        from: usize,
        to: usize,
        registry: &ItemRegistry,
    ) -> Result<(), TransferError> {
        inventory.move_stack(from, to, registry)?;
        Ok(())
    }

    /// Drag-and-drop inside the open crate.
    pub fn reassign_in_crate(
        &mut self,
        from: usize,
        to: usize,
        registry: &ItemRegistry,
    ) -> Result<(), TransferError> {
        if self.active.is_none() {
            return Err(TransferError::NoActiveCrate);
        }
        Self::reassign(&mut self.crate_view, from, to, registry)
    }

    /// Picks an item up off the ground.
    ///
    /// Returns true if the player had room; the caller then removes the
    /// pickup from the world.
    pub fn pick_up(
        &mut self,
        pickup: u32,
        item_id: &str,
        player: &mut Inventory,
        registry: &ItemRegistry,
    ) -> bool {
        let Some(item) = registry.get(item_id) else {
            warn!(item = %item_id, "pickup holds an unknown item");
            return false;
        };

        if !player.add_item(item) {
            debug!(item = %item_id, "no room for pickup");
            return false;
        }

        self.focus.release(Interactable::Pickup(pickup));
        true
    }

    pub fn prompt_owner(&self) -> Option<Interactable> {
        self.focus.owner()
    }

    /// Gives the interaction prompt to `who`.
    ///
    /// Whatever held the prompt before loses it, and a crate that loses
    /// the prompt while open is closed.
    pub fn focus(&mut self, who: Interactable) -> Option<Interactable> {
        let displaced = self.focus.acquire(who);
        if let Some(previous) = displaced {
            self.lose_focus(previous);
        }
        displaced
    }

    /// Takes the prompt away from `who` (e.g. the player walked away).
    pub fn unfocus(&mut self, who: Interactable) -> bool {
        if !self.focus.release(who) {
            return false;
        }
        self.lose_focus(who);
        true
    }

    fn lose_focus(&mut self, who: Interactable) {
        if let Interactable::Crate(id) = who {
            if self.active == Some(id) {
                self.close_crate();
            }
        }
    }
}
