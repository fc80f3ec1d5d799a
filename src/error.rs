//! Rejection reasons for game inputs
//!
//! None of these are fatal. The presentation boundary logs and drops them,
//! leaving state unchanged.

use thiserror::Error;

use crate::levels::LevelId;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("level {0} is outside 1..=7")]
    LevelOutOfRange(u8),

    #[error("option {index} is outside 0..{len}")]
    OptionOutOfRange { index: usize, len: usize },

    #[error("item id {id} is outside 1..={max}")]
    ItemOutOfRange { id: u8, max: u8 },

    #[error("cell ({row}, {col}) is off the board")]
    CellOutOfRange { row: i32, col: i32 },

    #[error("input does not apply to the current screen")]
    WrongScreen,

    #[error("input is locked until the pending pause finishes")]
    Locked,

    #[error("puzzle is already finished")]
    PuzzleFinished,

    #[error("no more than {max} selections allowed")]
    SelectionFull { max: usize },

    #[error("confirm needs exactly {needed} selections, have {have}")]
    SelectionIncomplete { needed: usize, have: usize },

    #[error("gift for level {0} is not revealed yet")]
    GiftNotRevealed(LevelId),

    #[error("saved state is inconsistent: {0}")]
    InvalidSnapshot(&'static str),

    #[error("invalid settings: {0}")]
    Settings(#[from] serde_json::Error),
}
