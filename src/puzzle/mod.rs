//! Per-level puzzles
//!
//! Each level owns its interaction state and a pure win predicate. This
//! module must stay free of timing and sequencing:
//! - No clocks or timers (pauses are scheduled by `game`)
//! - Seeded RNG only
//! - Invalid input is rejected and leaves state untouched

pub mod award;
pub mod chapters;
pub mod jump;
pub mod lipstick;
pub mod quiz;
pub mod stars;
pub mod tiles;

pub use award::AwardCeremony;
pub use chapters::ChapterBook;
pub use jump::JumpCounter;
pub use lipstick::ColorPick;
pub use quiz::Quiz;
pub use stars::StarField;
pub use tiles::TileBoard;

use serde::{Deserialize, Serialize};

use crate::levels::{LevelId, PuzzleKind};

/// Interaction state of the active level, one variant per level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LevelState {
    Award(AwardCeremony),
    Tiles(TileBoard),
    Lipstick(ColorPick),
    Quiz(Quiz),
    Jump(JumpCounter),
    Stars(StarField),
    Chapters(ChapterBook),
}

impl LevelState {
    /// Fresh state for a level. `seed` only matters for the tile shuffle.
    pub fn fresh(level: LevelId, seed: u64) -> Self {
        match level.definition().kind {
            PuzzleKind::AwardSelection => LevelState::Award(AwardCeremony::new()),
            PuzzleKind::TileReassembly => LevelState::Tiles(TileBoard::shuffled(seed)),
            PuzzleKind::ColorChoice => LevelState::Lipstick(ColorPick::new()),
            PuzzleKind::Quiz => LevelState::Quiz(Quiz::new()),
            PuzzleKind::TapCount => LevelState::Jump(JumpCounter::new()),
            PuzzleKind::RevealCollection => LevelState::Stars(StarField::new()),
            PuzzleKind::MultiSelect => LevelState::Chapters(ChapterBook::new()),
        }
    }

    /// Level this state belongs to
    pub fn level(&self) -> LevelId {
        match self {
            LevelState::Award(_) => LevelId::nth(1),
            LevelState::Tiles(_) => LevelId::nth(2),
            LevelState::Lipstick(_) => LevelId::nth(3),
            LevelState::Quiz(_) => LevelId::nth(4),
            LevelState::Jump(_) => LevelId::nth(5),
            LevelState::Stars(_) => LevelId::nth(6),
            LevelState::Chapters(_) => LevelId::nth(7),
        }
    }

    /// Win predicate of the active level
    pub fn is_solved(&self) -> bool {
        match self {
            LevelState::Award(s) => s.is_solved(),
            LevelState::Tiles(s) => s.is_solved(),
            LevelState::Lipstick(s) => s.is_solved(),
            LevelState::Quiz(s) => s.is_solved(),
            LevelState::Jump(s) => s.is_solved(),
            LevelState::Stars(s) => s.is_solved(),
            LevelState::Chapters(s) => s.is_solved(),
        }
    }
}
