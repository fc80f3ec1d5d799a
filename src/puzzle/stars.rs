//! Level 6: tap every star to collect the love messages

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// Message hidden behind each star, star id = index + 1
pub const MESSAGES: [&str; 5] = [
    "就像繁星点缀夜空，你的笑容点亮了我的世界。",
    "每个夜晚入睡前，我都会想着你的温柔和爱意。",
    "愿你的梦境如诗如画，我会在那里等你。",
    "你是我心中最美的风景，是我生命中最甜的梦。",
    "愿每个夜晚都能带给你安宁，愿每个清晨都为你带来希望。",
];

pub const STAR_COUNT: u8 = MESSAGES.len() as u8;

pub const PROMPT: &str = "点击星星，听听我的情话...";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawStarField")]
pub struct StarField {
    /// Revealed star ids, in tap order, no duplicates
    revealed: Vec<u8>,
}

#[derive(Deserialize)]
struct RawStarField {
    revealed: Vec<u8>,
}

impl TryFrom<RawStarField> for StarField {
    type Error = GameError;

    fn try_from(raw: RawStarField) -> Result<Self, Self::Error> {
        let mut field = StarField::new();
        for id in raw.revealed {
            if field.reveal(id)?.is_none() {
                return Err(GameError::InvalidSnapshot("star revealed twice"));
            }
        }
        Ok(field)
    }
}

impl StarField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reveal a star. Returns its message, or `None` if it was already lit.
    pub fn reveal(&mut self, id: u8) -> Result<Option<&'static str>, GameError> {
        if !(1..=STAR_COUNT).contains(&id) {
            return Err(GameError::ItemOutOfRange {
                id,
                max: STAR_COUNT,
            });
        }
        if self.is_revealed(id) {
            return Ok(None);
        }
        self.revealed.push(id);
        Ok(Some(MESSAGES[(id - 1) as usize]))
    }

    pub fn is_revealed(&self, id: u8) -> bool {
        self.revealed.contains(&id)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }

    /// Latest message, or the prompt before the first tap
    pub fn caption(&self) -> &'static str {
        self.revealed
            .last()
            .map(|&id| MESSAGES[(id - 1) as usize])
            .unwrap_or(PROMPT)
    }

    pub fn is_solved(&self) -> bool {
        self.revealed.len() == STAR_COUNT as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_order_solves() {
        let mut field = StarField::new();
        for id in [4, 2, 5, 1] {
            assert!(field.reveal(id).unwrap().is_some());
            assert!(!field.is_solved());
        }
        assert_eq!(field.reveal(3).unwrap(), Some(MESSAGES[2]));
        assert!(field.is_solved());
    }

    #[test]
    fn test_repeat_tap_is_noop() {
        let mut field = StarField::new();
        assert_eq!(field.caption(), PROMPT);
        field.reveal(2).unwrap();
        assert_eq!(field.reveal(2).unwrap(), None);
        assert_eq!(field.revealed_count(), 1);
        assert_eq!(field.caption(), MESSAGES[1]);
    }

    #[test]
    fn test_unknown_star_rejected() {
        let mut field = StarField::new();
        assert!(field.reveal(0).is_err());
        assert!(matches!(
            field.reveal(6),
            Err(GameError::ItemOutOfRange { id: 6, max: 5 })
        ));
        assert_eq!(field.revealed_count(), 0);
    }

    #[test]
    fn test_restore_checks_star_ids() {
        let field: StarField = serde_json::from_str(r#"{"revealed":[3,1]}"#).unwrap();
        assert_eq!(field.caption(), MESSAGES[0]);
        assert!(field.is_revealed(3));

        for bad in [r#"{"revealed":[0]}"#, r#"{"revealed":[6]}"#, r#"{"revealed":[2,2]}"#] {
            assert!(serde_json::from_str::<StarField>(bad).is_err(), "{} loaded", bad);
        }
    }
}
