//! Level 7: choose three chapters for the book of the future

use serde::{Deserialize, Serialize};

use crate::error::GameError;

#[derive(Debug)]
pub struct Chapter {
    pub id: u8,
    pub title: &'static str,
    pub description: &'static str,
}

pub static CHAPTERS: [Chapter; 5] = [
    Chapter {
        id: 1,
        title: "环游世界",
        description: "与你一起探索未知的土地，留下我们的足迹。",
    },
    Chapter {
        id: 2,
        title: "温馨小窝",
        description: "一起装饰我们的理想家，创造属于我们的温馨空间。",
    },
    Chapter {
        id: 3,
        title: "养只宠物",
        description: "一起照顾一个毛茸茸的小生命，让家更有活力。",
    },
    Chapter {
        id: 4,
        title: "浪漫纪念日",
        description: "庆祝我们的每一个重要时刻，创造更多美好回忆。",
    },
    Chapter {
        id: 5,
        title: "烹饪时光",
        description: "一起下厨，品尝彼此精心烹制的美食。",
    },
];

/// Exact number of chapters to pick
pub const PICK_COUNT: usize = 3;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawChapterBook")]
pub struct ChapterBook {
    /// Chosen chapter ids, never more than `PICK_COUNT`
    chosen: Vec<u8>,
    /// Book closed on the final choice
    confirmed: bool,
}

#[derive(Deserialize)]
struct RawChapterBook {
    chosen: Vec<u8>,
    confirmed: bool,
}

impl TryFrom<RawChapterBook> for ChapterBook {
    type Error = GameError;

    /// Replays the choices through `toggle` so a saved book obeys the same rules
    fn try_from(raw: RawChapterBook) -> Result<Self, Self::Error> {
        let mut book = ChapterBook::new();
        for id in raw.chosen {
            if !book.toggle(id)? {
                return Err(GameError::InvalidSnapshot("chapter chosen twice"));
            }
        }
        if raw.confirmed {
            book.confirm()?;
        }
        Ok(book)
    }
}

impl ChapterBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select or deselect a chapter. Returns `true` if it is now selected.
    pub fn toggle(&mut self, id: u8) -> Result<bool, GameError> {
        if self.confirmed {
            return Err(GameError::PuzzleFinished);
        }
        if !CHAPTERS.iter().any(|c| c.id == id) {
            return Err(GameError::ItemOutOfRange {
                id,
                max: CHAPTERS.len() as u8,
            });
        }
        if let Some(pos) = self.chosen.iter().position(|&c| c == id) {
            self.chosen.remove(pos);
            return Ok(false);
        }
        if self.chosen.len() >= PICK_COUNT {
            return Err(GameError::SelectionFull { max: PICK_COUNT });
        }
        self.chosen.push(id);
        Ok(true)
    }

    pub fn chosen(&self) -> &[u8] {
        &self.chosen
    }

    pub fn is_chosen(&self, id: u8) -> bool {
        self.chosen.contains(&id)
    }

    /// Confirm button state
    pub fn can_confirm(&self) -> bool {
        !self.confirmed && self.chosen.len() == PICK_COUNT
    }

    /// Close the book on the current choice
    pub fn confirm(&mut self) -> Result<(), GameError> {
        if self.confirmed {
            return Err(GameError::PuzzleFinished);
        }
        if self.chosen.len() != PICK_COUNT {
            return Err(GameError::SelectionIncomplete {
                needed: PICK_COUNT,
                have: self.chosen.len(),
            });
        }
        self.confirmed = true;
        Ok(())
    }

    pub fn is_confirmed(&self) -> bool {
        self.confirmed
    }

    pub fn is_solved(&self) -> bool {
        self.confirmed && self.chosen.len() == PICK_COUNT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fourth_pick_is_rejected() {
        let mut book = ChapterBook::new();
        for id in [1, 3, 5] {
            assert!(book.toggle(id).unwrap());
        }
        assert!(matches!(
            book.toggle(2),
            Err(GameError::SelectionFull { max: 3 })
        ));
        assert_eq!(book.chosen(), &[1, 3, 5]);
    }

    #[test]
    fn test_confirm_needs_exactly_three() {
        let mut book = ChapterBook::new();
        book.toggle(1).unwrap();
        book.toggle(2).unwrap();
        assert!(!book.can_confirm());
        assert!(matches!(
            book.confirm(),
            Err(GameError::SelectionIncomplete { needed: 3, have: 2 })
        ));
        assert!(!book.is_solved());

        book.toggle(4).unwrap();
        assert!(book.can_confirm());
        book.confirm().unwrap();
        assert!(book.is_solved());
        assert!(!book.can_confirm());
    }

    #[test]
    fn test_deselect_frees_a_slot() {
        let mut book = ChapterBook::new();
        for id in [1, 2, 3] {
            book.toggle(id).unwrap();
        }
        assert!(!book.toggle(2).unwrap());
        assert!(!book.can_confirm());
        assert!(book.toggle(5).unwrap());
        assert_eq!(book.chosen(), &[1, 3, 5]);
    }

    #[test]
    fn test_closed_book_is_frozen() {
        let mut book = ChapterBook::new();
        for id in [1, 2, 3] {
            book.toggle(id).unwrap();
        }
        book.confirm().unwrap();
        assert!(matches!(book.toggle(1), Err(GameError::PuzzleFinished)));
        assert!(matches!(book.confirm(), Err(GameError::PuzzleFinished)));
        assert!(book.is_solved());
    }

    #[test]
    fn test_unknown_chapter_rejected() {
        let mut book = ChapterBook::new();
        assert!(book.toggle(0).is_err());
        assert!(book.toggle(6).is_err());
        assert!(book.chosen().is_empty());
    }

    #[test]
    fn test_restore_checks_choices() {
        let book: ChapterBook =
            serde_json::from_str(r#"{"chosen":[2,4,5],"confirmed":true}"#).unwrap();
        assert!(book.is_solved());
        assert_eq!(book.chosen(), &[2, 4, 5]);

        for bad in [
            r#"{"chosen":[1,2,3,4,5],"confirmed":false}"#,
            r#"{"chosen":[1,1],"confirmed":false}"#,
            r#"{"chosen":[0],"confirmed":false}"#,
            r#"{"chosen":[1,2],"confirmed":true}"#,
        ] {
            assert!(serde_json::from_str::<ChapterBook>(bad).is_err(), "{} loaded", bad);
        }
    }
}
