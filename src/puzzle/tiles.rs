//! Level 2: put the greeting card back together
//!
//! A 3x3 board of nine pieces. Piece `i` belongs in cell `i`. Dropping a
//! piece on a cell swaps it with whatever piece sits there.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// Board edge length in cells
pub const GRID_SIZE: usize = 3;
/// Number of pieces (and cells)
pub const PIECE_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Text written on the finished card
pub const CARD_MESSAGE: &str = "每一天与你在一起，都让我感到无比幸福。你的笑容是我最珍贵的宝藏，\
你的爱是我生命中最美好的礼物。愿我们的爱情，如这张贺卡一般，永远完整而美丽。";

/// Win predicate: every piece sits on its own cell
pub fn all_in_place(cells: &[u8; PIECE_COUNT]) -> bool {
    cells.iter().enumerate().all(|(piece, &cell)| piece == cell as usize)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTileBoard")]
pub struct TileBoard {
    /// Current cell of each piece, indexed by piece id
    cells: [u8; PIECE_COUNT],
    /// Set once a solved board has settled; no more drops after that
    locked: bool,
}

#[derive(Deserialize)]
struct RawTileBoard {
    cells: [u8; PIECE_COUNT],
    locked: bool,
}

impl TryFrom<RawTileBoard> for TileBoard {
    type Error = GameError;

    fn try_from(raw: RawTileBoard) -> Result<Self, Self::Error> {
        let mut board = TileBoard::from_cells(raw.cells)?;
        if raw.locked {
            if !board.is_solved() {
                return Err(GameError::InvalidSnapshot("locked board is not solved"));
            }
            board.lock();
        }
        Ok(board)
    }
}

impl TileBoard {
    /// Board with every piece already in place
    pub fn solved() -> Self {
        Self {
            cells: std::array::from_fn(|i| i as u8),
            locked: false,
        }
    }

    /// Deterministically shuffled board that is never already solved
    pub fn shuffled(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut board = Self::solved();
        while board.is_solved() {
            // Fisher-Yates
            for i in (1..PIECE_COUNT).rev() {
                let j = rng.random_range(0..=i);
                board.cells.swap(i, j);
            }
        }
        log::debug!("Shuffled tiles (seed {}): {:?}", seed, board.cells);
        board
    }

    /// Build a board from explicit piece positions (must be a permutation)
    pub fn from_cells(cells: [u8; PIECE_COUNT]) -> Result<Self, GameError> {
        let mut seen = [false; PIECE_COUNT];
        for &cell in &cells {
            let slot = seen
                .get_mut(cell as usize)
                .ok_or(GameError::OptionOutOfRange {
                    index: cell as usize,
                    len: PIECE_COUNT,
                })?;
            if *slot {
                return Err(GameError::OptionOutOfRange {
                    index: cell as usize,
                    len: PIECE_COUNT,
                });
            }
            *slot = true;
        }
        Ok(Self {
            cells,
            locked: false,
        })
    }

    pub fn cells(&self) -> &[u8; PIECE_COUNT] {
        &self.cells
    }

    /// Current cell of a piece
    pub fn position_of(&self, piece: u8) -> Option<u8> {
        self.cells.get(piece as usize).copied()
    }

    /// Piece currently sitting on a cell
    pub fn piece_at(&self, cell: u8) -> Option<u8> {
        self.cells
            .iter()
            .position(|&c| c == cell)
            .map(|piece| piece as u8)
    }

    /// Drop a piece on (row, col). Coordinates come straight from the drag
    /// release, so anything off the board is rejected.
    ///
    /// Returns `true` if two pieces swapped, `false` if the piece was
    /// dropped back on its own cell.
    pub fn drop_at(&mut self, piece: u8, row: i32, col: i32) -> Result<bool, GameError> {
        if self.locked {
            return Err(GameError::PuzzleFinished);
        }
        let from = self.position_of(piece).ok_or(GameError::OptionOutOfRange {
            index: piece as usize,
            len: PIECE_COUNT,
        })?;
        let size = GRID_SIZE as i32;
        if !(0..size).contains(&row) || !(0..size).contains(&col) {
            return Err(GameError::CellOutOfRange { row, col });
        }
        let to = (row * size + col) as u8;
        if to == from {
            return Ok(false);
        }
        // A full board always has an occupant
        if let Some(other) = self.piece_at(to) {
            self.cells[other as usize] = from;
        }
        self.cells[piece as usize] = to;
        Ok(true)
    }

    /// Number of pieces not on their own cell
    pub fn misplaced(&self) -> usize {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(piece, &cell)| piece != cell as usize)
            .count()
    }

    /// Freeze the board once it is solved and the card is on its way
    pub fn lock(&mut self) {
        self.locked = true;
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn is_solved(&self) -> bool {
        all_in_place(&self.cells)
    }
}
