//! Seven Gifts - a seven-level gift hunt
//!
//! Core modules:
//! - `progress`: Session progress store (completed levels, music flag)
//! - `puzzle`: Per-level interaction state and win predicates
//! - `game`: Level sequencing, delayed reveals, input dispatch
//! - `levels`: Static level and gift catalogue
//! - `settings`: Session configuration
//! - `autoplay`: Demo solver that plays any level to completion
//!
//! Rendering, audio playback, routing and gesture recognition live in the
//! host app. The core only consumes discrete inputs and emits events.

pub mod autoplay;
pub mod error;
pub mod game;
pub mod levels;
pub mod progress;
pub mod puzzle;
pub mod settings;

pub use error::GameError;
pub use game::{Game, GameEvent, GameInput, Screen};
pub use levels::{LevelDefinition, LevelId};
pub use progress::Progress;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed logic timestep (60 Hz is plenty for UI pacing)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Ticks per second at `SIM_DT`
    pub const TICKS_PER_SEC: u32 = 60;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Number of levels in a session
    pub const TOTAL_LEVELS: u8 = 7;

    /// Pause before a wrong pick is cleared (levels 1 and 3)
    pub const WRONG_PICK_CLEAR_MS: u32 = 800;
    /// Pause before the next quiz question appears
    pub const QUIZ_ADVANCE_MS: u32 = 1000;
    /// Pause between a tile drop and the completion check
    pub const TILE_SETTLE_MS: u32 = 300;
    /// Pause between a solved board and the card being shown
    pub const CARD_SHOW_MS: u32 = 1000;
}

/// Convert a millisecond pause to whole fixed-timestep ticks (rounded up)
#[inline]
pub fn ms_to_ticks(ms: u32) -> u32 {
    (ms * consts::TICKS_PER_SEC).div_ceil(1000)
}

/// Mix a level number into a session seed so each level gets its own stream
#[inline]
pub fn level_seed(session_seed: u64, level: u8) -> u64 {
    (level as u64)
        .wrapping_mul(2654435761)
        .wrapping_add(session_seed)
}
