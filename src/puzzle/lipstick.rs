//! Level 3: guess the favourite lipstick shade

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// A lipstick option
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shade {
    pub id: u8,
    pub name: &'static str,
    /// Swatch colour as `#RRGGBB`
    pub color: &'static str,
}

pub const SHADES: [Shade; 5] = [
    Shade { id: 1, name: "珊瑚粉", color: "#FF7F70" },
    Shade { id: 2, name: "玫瑰红", color: "#DB2058" },
    Shade { id: 3, name: "莓果紫", color: "#9E5E84" },
    Shade { id: 4, name: "奶茶棕", color: "#C39B8F" },
    Shade { id: 5, name: "朱砂红", color: "#BE002F" },
];

pub const CORRECT_SHADE: u8 = 3;

pub const HINT: &str = "记得我们第一次约会时，我涂的口红让你赞不绝口，说它很衬我的气质...";

pub fn is_correct_shade(id: u8) -> bool {
    id == CORRECT_SHADE
}

pub fn shade(id: u8) -> Option<&'static Shade> {
    SHADES.iter().find(|s| s.id == id)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPick {
    selected: Option<u8>,
    hint_visible: bool,
}

impl ColorPick {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<u8> {
        self.selected
    }

    pub fn hint_visible(&self) -> bool {
        self.hint_visible
    }

    /// Show or hide the hint, returning the new visibility
    pub fn toggle_hint(&mut self) -> bool {
        self.hint_visible = !self.hint_visible;
        self.hint_visible
    }

    /// Pick a shade by id. Returns whether it is the right one.
    pub fn pick(&mut self, id: u8) -> Result<bool, GameError> {
        if self.selected.is_some() {
            return Err(GameError::Locked);
        }
        if shade(id).is_none() {
            return Err(GameError::ItemOutOfRange {
                id,
                max: SHADES.len() as u8,
            });
        }
        self.selected = Some(id);
        Ok(is_correct_shade(id))
    }

    /// Unlock after a wrong pick; the right pick stays selected
    pub fn clear_wrong_pick(&mut self) -> bool {
        match self.selected {
            Some(id) if !is_correct_shade(id) => {
                self.selected = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_solved(&self) -> bool {
        self.selected.is_some_and(is_correct_shade)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shade_lookup() {
        assert_eq!(shade(3).map(|s| s.name), Some("莓果紫"));
        assert!(shade(0).is_none());
        assert!(shade(6).is_none());
    }

    #[test]
    fn test_wrong_then_right() {
        let mut pick = ColorPick::new();
        assert!(!pick.pick(5).unwrap());
        assert!(!pick.is_solved());
        assert!(matches!(pick.pick(3), Err(GameError::Locked)));
        assert!(pick.clear_wrong_pick());
        assert!(pick.pick(3).unwrap());
        assert!(pick.is_solved());
        assert!(!pick.clear_wrong_pick());
    }

    #[test]
    fn test_unknown_id_rejected() {
        let mut pick = ColorPick::new();
        assert!(matches!(
            pick.pick(9),
            Err(GameError::ItemOutOfRange { id: 9, max: 5 })
        ));
        assert_eq!(pick.selected(), None);
    }

    #[test]
    fn test_hint_toggle() {
        let mut pick = ColorPick::new();
        assert!(pick.toggle_hint());
        assert!(!pick.toggle_hint());
    }
}
