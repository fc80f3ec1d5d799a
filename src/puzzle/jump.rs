//! Level 5: make the character jump five times

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// One compliment per jump, in order
pub const COMPLIMENTS: [&str; 5] = [
    "你的笑容如阳光般温暖",
    "你的善良让世界更美好",
    "你的智慧令我钦佩",
    "你是我生命中的奇迹",
    "你的温柔抚慰我的心",
];

pub const TARGET_JUMPS: u8 = COMPLIMENTS.len() as u8;

pub const PROMPT: &str = "点击Q版人物开始跳跃！";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawJumpCounter")]
pub struct JumpCounter {
    jumps: u8,
}

#[derive(Deserialize)]
struct RawJumpCounter {
    jumps: u8,
}

impl TryFrom<RawJumpCounter> for JumpCounter {
    type Error = GameError;

    fn try_from(raw: RawJumpCounter) -> Result<Self, Self::Error> {
        if raw.jumps > TARGET_JUMPS {
            return Err(GameError::InvalidSnapshot("more jumps than compliments"));
        }
        Ok(Self { jumps: raw.jumps })
    }
}

impl JumpCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn jumps(&self) -> u8 {
        self.jumps
    }

    /// Count a finished jump and return its compliment.
    /// The counter saturates; jumps past the target are rejected.
    pub fn jump(&mut self) -> Result<&'static str, GameError> {
        if self.jumps >= TARGET_JUMPS {
            return Err(GameError::PuzzleFinished);
        }
        let compliment = COMPLIMENTS[self.jumps as usize];
        self.jumps += 1;
        Ok(compliment)
    }

    /// Text under the character: the latest compliment, or the prompt
    pub fn caption(&self) -> &'static str {
        match self.jumps {
            0 => PROMPT,
            n => COMPLIMENTS[(n - 1) as usize],
        }
    }

    pub fn is_solved(&self) -> bool {
        self.jumps == TARGET_JUMPS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_jumps_solve() {
        let mut counter = JumpCounter::new();
        assert_eq!(counter.caption(), PROMPT);
        for (i, expected) in COMPLIMENTS.iter().enumerate() {
            assert!(!counter.is_solved());
            assert_eq!(counter.jump().unwrap(), *expected);
            assert_eq!(counter.jumps() as usize, i + 1);
            assert_eq!(counter.caption(), *expected);
        }
        assert!(counter.is_solved());
    }

    #[test]
    fn test_counter_saturates() {
        let mut counter = JumpCounter::new();
        for _ in 0..TARGET_JUMPS {
            counter.jump().unwrap();
        }
        assert!(matches!(counter.jump(), Err(GameError::PuzzleFinished)));
        assert_eq!(counter.jumps(), TARGET_JUMPS);
        assert!(counter.is_solved());
    }

    #[test]
    fn test_restore_checks_jump_count() {
        let counter: JumpCounter = serde_json::from_str(r#"{"jumps":5}"#).unwrap();
        assert!(counter.is_solved());
        assert_eq!(counter.caption(), COMPLIMENTS[4]);
        assert!(serde_json::from_str::<JumpCounter>(r#"{"jumps":9}"#).is_err());
    }
}
