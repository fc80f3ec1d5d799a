//! Session progress store
//!
//! Tracks which levels have had their gift revealed and whether background
//! music is on. Lives for one play session; nothing is written anywhere.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::consts::TOTAL_LEVELS;
use crate::error::GameError;
use crate::levels::LevelId;

/// Completed levels plus the music flag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    /// Levels whose gift has been revealed (ordered by level number)
    completed: BTreeSet<LevelId>,
    /// Background music on/off (independent of level progress)
    music_enabled: bool,
}

impl Default for Progress {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Progress {
    /// Create an empty store
    pub fn new(music_enabled: bool) -> Self {
        Self {
            completed: BTreeSet::new(),
            music_enabled,
        }
    }

    /// Mark a level complete.
    ///
    /// Returns `true` if the level was newly added. Completing a level twice
    /// is a no-op. Ids outside `1..=7` are rejected and leave the store as is.
    pub fn complete_level(&mut self, id: u8) -> Result<bool, GameError> {
        let level = LevelId::new(id)?;
        Ok(self.mark(level))
    }

    /// Typed variant of `complete_level`
    pub fn mark(&mut self, level: LevelId) -> bool {
        let added = self.completed.insert(level);
        if added {
            log::info!(
                "Level {} complete ({}/{})",
                level,
                self.completed.len(),
                TOTAL_LEVELS
            );
        }
        added
    }

    /// Forget all completed levels (music flag is left alone)
    pub fn reset_game(&mut self) {
        self.completed.clear();
    }

    /// Flip the music flag, returning the new value
    pub fn toggle_music(&mut self) -> bool {
        self.music_enabled = !self.music_enabled;
        self.music_enabled
    }

    pub fn music_enabled(&self) -> bool {
        self.music_enabled
    }

    /// Check whether a level's gift has been revealed
    pub fn is_completed(&self, id: u8) -> bool {
        LevelId::new(id)
            .map(|level| self.completed.contains(&level))
            .unwrap_or(false)
    }

    /// Completed levels in level order
    pub fn completed_levels(&self) -> impl Iterator<Item = LevelId> + '_ {
        self.completed.iter().copied()
    }

    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    /// Fraction of levels complete, in [0, 1]
    pub fn progress_fraction(&self) -> f32 {
        self.completed.len() as f32 / TOTAL_LEVELS as f32
    }

    /// Progress as a whole percentage (for the progress bar label)
    pub fn progress_percent(&self) -> u32 {
        (self.progress_fraction() * 100.0).round() as u32
    }

    /// One flag per level, in level order (for the progress dots)
    pub fn level_dots(&self) -> [bool; TOTAL_LEVELS as usize] {
        let mut dots = [false; TOTAL_LEVELS as usize];
        for level in &self.completed {
            dots[(level.get() - 1) as usize] = true;
        }
        dots
    }

    /// Level 1 is always reachable; level N needs level N-1 complete
    pub fn is_reachable(&self, level: LevelId) -> bool {
        match level.prev() {
            None => true,
            Some(prev) => self.completed.contains(&prev),
        }
    }

    /// The summary screen needs every level complete
    pub fn final_reachable(&self) -> bool {
        self.completed.len() == TOTAL_LEVELS as usize
    }
}
