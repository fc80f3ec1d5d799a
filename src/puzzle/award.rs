//! Level 1: pick the winner of the "best wife" award
//!
//! Three nominee cards. A pick locks the cards; a wrong pick is cleared
//! after a short pause and the player may try again as often as they like.

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// Nominee card labels, in display order
pub const NOMINEES: [&str; 3] = ["明星女神", "我亲爱的妻子", "邻家美女"];

/// Index of the winning card
pub const CORRECT_NOMINEE: usize = 1;

/// Win predicate for a single pick
pub fn is_correct_nominee(index: usize) -> bool {
    index == CORRECT_NOMINEE
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwardCeremony {
    /// Cards are dealt once the player starts the ceremony
    nominees_shown: bool,
    /// Currently picked card (locks further picks)
    selected: Option<usize>,
}

impl AwardCeremony {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the ceremony; idempotent
    pub fn show_nominees(&mut self) {
        self.nominees_shown = true;
    }

    pub fn nominees_shown(&self) -> bool {
        self.nominees_shown
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Pick a nominee card. Returns whether the pick wins.
    pub fn pick(&mut self, index: usize) -> Result<bool, GameError> {
        if !self.nominees_shown || self.selected.is_some() {
            return Err(GameError::Locked);
        }
        if index >= NOMINEES.len() {
            return Err(GameError::OptionOutOfRange {
                index,
                len: NOMINEES.len(),
            });
        }
        self.selected = Some(index);
        Ok(is_correct_nominee(index))
    }

    /// Drop a wrong pick so the cards unlock. A winning pick stays put.
    pub fn clear_wrong_pick(&mut self) -> bool {
        match self.selected {
            Some(index) if !is_correct_nominee(index) => {
                self.selected = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_solved(&self) -> bool {
        self.selected.is_some_and(is_correct_nominee)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started() -> AwardCeremony {
        let mut award = AwardCeremony::new();
        award.show_nominees();
        award
    }

    #[test]
    fn test_pick_before_start_is_locked() {
        let mut award = AwardCeremony::new();
        assert!(matches!(award.pick(1), Err(GameError::Locked)));
        assert!(!award.is_solved());
    }

    #[test]
    fn test_correct_pick_solves() {
        let mut award = started();
        assert!(award.pick(CORRECT_NOMINEE).unwrap());
        assert!(award.is_solved());
        // Winning pick is never cleared
        assert!(!award.clear_wrong_pick());
        assert!(award.is_solved());
    }

    #[test]
    fn test_wrong_pick_locks_then_clears() {
        let mut award = started();
        assert!(!award.pick(0).unwrap());
        assert!(matches!(award.pick(1), Err(GameError::Locked)));
        assert!(award.clear_wrong_pick());
        assert_eq!(award.selected(), None);
        assert!(award.pick(1).unwrap());
    }

    #[test]
    fn test_out_of_range_pick_is_rejected() {
        let mut award = started();
        assert!(matches!(
            award.pick(3),
            Err(GameError::OptionOutOfRange { index: 3, len: 3 })
        ));
        assert_eq!(award.selected(), None);
    }
}
