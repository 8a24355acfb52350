use crate::loot::CrateId;

/// Something in the scene that can show an interaction prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interactable {
    Crate(CrateId),
    Pickup(u32),
}

/// Owner token for the single interaction prompt of a scene
#[derive(Debug, Default)]
pub struct PromptFocus {
    owner: Option<Interactable>,
}

impl PromptFocus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn owner(&self) -> Option<Interactable> {
        self.owner
    }

    /// Hands the prompt to `who`, returning the previous owner if it changed.
    pub fn acquire(&mut self, who: Interactable) -> Option<Interactable> {
        match self.owner.replace(who) {
            Some(previous) if previous != who => Some(previous),
            _ => None,
        }
    }

    /// Gives up the prompt. Only the current owner can release it.
    pub fn release(&mut self, who: Interactable) -> bool {
        if self.owner == Some(who) {
            self.owner = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acquire_displaces_previous_owner() {
        let mut focus = PromptFocus::new();
        assert_eq!(focus.acquire(Interactable::Pickup(1)), None);
        assert_eq!(
            focus.acquire(Interactable::Crate(CrateId(2))),
            Some(Interactable::Pickup(1))
        );
        assert_eq!(focus.owner(), Some(Interactable::Crate(CrateId(2))));
    }

    #[test]
    fn test_reacquire_same_owner() {
        let mut focus = PromptFocus::new();
        focus.acquire(Interactable::Pickup(1));
        assert_eq!(focus.acquire(Interactable::Pickup(1)), None);
    }

    #[test]
    fn test_only_owner_releases() {
        let mut focus = PromptFocus::new();
        focus.acquire(Interactable::Pickup(1));

        assert!(!focus.release(Interactable::Pickup(2)));
        assert!(focus.release(Interactable::Pickup(1)));
        assert_eq!(focus.owner(), None);
    }
}
