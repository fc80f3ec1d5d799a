//! Static level catalogue
//!
//! One entry per level, in play order. Gift text is display-only.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::TOTAL_LEVELS;
use crate::error::GameError;

/// Level identifier, always in `1..=7`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct LevelId(u8);

impl LevelId {
    pub const FIRST: LevelId = LevelId::nth(1);
    pub const LAST: LevelId = LevelId::nth(TOTAL_LEVELS);

    pub fn new(id: u8) -> Result<Self, GameError> {
        if (1..=TOTAL_LEVELS).contains(&id) {
            Ok(Self(id))
        } else {
            Err(GameError::LevelOutOfRange(id))
        }
    }

    /// Level from a literal known to be in range
    pub(crate) const fn nth(id: u8) -> Self {
        assert!(id >= 1 && id <= TOTAL_LEVELS);
        Self(id)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Following level, `None` after the last one
    pub fn next(self) -> Option<LevelId> {
        (self.0 < TOTAL_LEVELS).then(|| LevelId(self.0 + 1))
    }

    /// Preceding level, `None` for the first one
    pub fn prev(self) -> Option<LevelId> {
        (self.0 > 1).then(|| LevelId(self.0 - 1))
    }

    /// All levels in play order
    pub fn all() -> impl Iterator<Item = LevelId> {
        (1..=TOTAL_LEVELS).map(LevelId)
    }

    /// Catalogue entry for this level
    pub fn definition(self) -> &'static LevelDefinition {
        &LEVELS[(self.0 - 1) as usize]
    }
}

impl TryFrom<u8> for LevelId {
    type Error = GameError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        LevelId::new(id)
    }
}

impl From<LevelId> for u8 {
    fn from(level: LevelId) -> u8 {
        level.0
    }
}

impl fmt::Display for LevelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of mini-puzzle a level plays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PuzzleKind {
    /// Pick the right nominee out of three
    AwardSelection,
    /// Drag 3x3 tiles back into place
    TileReassembly,
    /// Pick the right colour out of five
    ColorChoice,
    /// Four-question quiz, three right to pass
    Quiz,
    /// Tap the character five times
    TapCount,
    /// Reveal all five stars
    RevealCollection,
    /// Choose exactly three chapters
    MultiSelect,
}

/// Static description of one level
#[derive(Debug)]
pub struct LevelDefinition {
    pub id: u8,
    pub title: &'static str,
    pub kind: PuzzleKind,
    pub gift_name: &'static str,
    pub gift_description: &'static str,
    /// Icon shown on the summary screen
    pub gift_icon: &'static str,
    /// Short line shown under the gift on the summary screen
    pub gift_tagline: &'static str,
    /// Pause between the winning move and the gift overlay
    pub reveal_delay_ms: u32,
}

impl LevelDefinition {
    pub fn level(&self) -> LevelId {
        LevelId(self.id)
    }
}

pub static LEVELS: [LevelDefinition; TOTAL_LEVELS as usize] = [
    LevelDefinition {
        id: 1,
        title: "为你颁奖",
        kind: PuzzleKind::AwardSelection,
        gift_name: "最佳老婆锦旗",
        gift_description: "将你最美好的形象永远定格，这枚锦旗是对你无与伦比的肯定和赞美。",
        gift_icon: "🏆",
        gift_tagline: "永远的第一名",
        reveal_delay_ms: 1500,
    },
    LevelDefinition {
        id: 2,
        title: "记忆拼图",
        kind: PuzzleKind::TileReassembly,
        gift_name: "爱的贺卡",
        gift_description: "一封手写情书，记录着我对你说不完的情话，是时光的见证。",
        gift_icon: "💌",
        gift_tagline: "情话永不过时",
        // Counted from the card being shown, not from the last drop
        reveal_delay_ms: 2000,
    },
    LevelDefinition {
        id: 3,
        title: "颜色密码",
        kind: PuzzleKind::ColorChoice,
        gift_name: "莓果紫口红",
        gift_description: "这是属于你的专属色彩，为你的笑容增添一抹独特的风采。",
        gift_icon: "💄",
        gift_tagline: "为你的美丽加分",
        reveal_delay_ms: 1500,
    },
    LevelDefinition {
        id: 4,
        title: "熨平回忆",
        kind: PuzzleKind::Quiz,
        gift_name: "挂烫机",
        gift_description: "用来熨平生活中的小皱褶，让我们的每一天都平整舒适。",
        gift_icon: "👔",
        gift_tagline: "熨平生活小皱褶",
        reveal_delay_ms: crate::consts::QUIZ_ADVANCE_MS,
    },
    LevelDefinition {
        id: 5,
        title: "爱的跳跃",
        kind: PuzzleKind::TapCount,
        gift_name: "弹力袜",
        gift_description: "让你的每一步都轻盈舒适，如同在云端漫步。",
        gift_icon: "🧦",
        gift_tagline: "轻盈每一步",
        reveal_delay_ms: 1000,
    },
    LevelDefinition {
        id: 6,
        title: "梦中情话",
        kind: PuzzleKind::RevealCollection,
        gift_name: "柔软睡衣",
        gift_description: "愿你每晚都能在柔软的怀抱中安然入梦，享受甜蜜的睡眠。",
        gift_icon: "👚",
        gift_tagline: "甜蜜入梦",
        reveal_delay_ms: 2000,
    },
    LevelDefinition {
        id: 7,
        title: "未来之书",
        kind: PuzzleKind::MultiSelect,
        gift_name: "iPad",
        gift_description: "记录我们的爱情故事，创造未来美好回忆的神奇画布。",
        gift_icon: "📱",
        gift_tagline: "记录我们的故事",
        // Book closes (1200 ms), then turns into the gift (1000 ms)
        reveal_delay_ms: 2200,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_id_bounds() {
        assert!(LevelId::new(0).is_err());
        assert!(LevelId::new(8).is_err());
        assert_eq!(LevelId::new(7).unwrap(), LevelId::LAST);
    }

    #[test]
    fn test_next_prev() {
        assert_eq!(LevelId::FIRST.prev(), None);
        assert_eq!(LevelId::LAST.next(), None);
        assert_eq!(LevelId::FIRST.next().map(LevelId::get), Some(2));
    }

    #[test]
    fn test_catalogue_order_matches_ids() {
        for level in LevelId::all() {
            assert_eq!(level.definition().level(), level);
        }
        assert_eq!(LevelId::all().count(), TOTAL_LEVELS as usize);
    }

    #[test]
    fn test_serde_rejects_out_of_range() {
        assert_eq!(serde_json::to_string(&LevelId::FIRST).unwrap(), "1");
        assert!(serde_json::from_str::<LevelId>("9").is_err());
        assert_eq!(serde_json::from_str::<LevelId>("4").unwrap().get(), 4);
    }
}
