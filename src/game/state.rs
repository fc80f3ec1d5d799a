//! Session state and level sequencing
//!
//! Welcome -> Level 1 -> ... -> Level 7 -> Final. Only a revealed gift moves
//! the session forward, and only a reset moves it back to Welcome.

use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::levels::{LEVELS, LevelId};
use crate::progress::Progress;
use crate::puzzle::LevelState;
use crate::settings::Settings;

/// Screen the session is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    /// Title screen; entering it clears progress
    Welcome,
    /// Playing a level
    Level(LevelId),
    /// Gift summary, terminal until reset
    Final,
}

/// Work scheduled to happen after a deliberate pause
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PendingAction {
    /// Unlock the cards after a wrong pick (levels 1 and 3)
    ClearWrongPick,
    /// Show the next quiz question
    AdvanceQuestion,
    /// Check the tile board once the dropped piece has settled
    CheckBoard,
    /// Swap the solved board for the finished card
    ShowCard,
    /// Mark the level complete and show its gift
    RevealGift,
}

/// A pending action counting down in fixed ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTimer")]
pub struct Timer {
    pub ticks_left: u32,
    pub action: PendingAction,
}

#[derive(Deserialize)]
struct RawTimer {
    ticks_left: u32,
    action: PendingAction,
}

impl TryFrom<RawTimer> for Timer {
    type Error = GameError;

    fn try_from(raw: RawTimer) -> Result<Self, Self::Error> {
        if raw.ticks_left == 0 {
            return Err(GameError::InvalidSnapshot("timer already expired"));
        }
        Ok(Self {
            ticks_left: raw.ticks_left,
            action: raw.action,
        })
    }
}

impl Timer {
    /// Zero-length pauses still wait for the next tick
    pub fn new(action: PendingAction, ticks: u32) -> Self {
        Self {
            ticks_left: ticks.max(1),
            action,
        }
    }
}

/// Things the presentation layer may want to animate or play a sound for
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    ScreenEntered(Screen),
    /// A wrong pick was cleared and the options unlocked
    SelectionCleared(LevelId),
    /// The win predicate held; the gift follows after a pause
    LevelSolved(LevelId),
    /// Level 2 board replaced by the finished card
    CardShown,
    /// Quiz moved on to the question with this index
    QuestionAdvanced(usize),
    /// Quiz finished below the pass mark
    QuizFailed { correct: usize },
    /// Level 5 compliment for the latest jump
    Compliment(&'static str),
    /// Level 6 message behind the star just tapped
    MessageRevealed(&'static str),
    GiftRevealed(LevelId),
    MusicToggled(bool),
    GameReset,
}

/// The level being played and everything scheduled against it.
/// Dropping it cancels all of its pending work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveLevel {
    pub level: LevelId,
    pub state: LevelState,
    pub timers: Vec<Timer>,
    /// Level 2 only: finished card on screen
    pub card_shown: bool,
    /// Gift overlay on screen; `Continue` is accepted
    pub gift_revealed: bool,
}

impl ActiveLevel {
    pub fn new(level: LevelId, seed: u64) -> Self {
        Self {
            level,
            state: LevelState::fresh(level, seed),
            timers: Vec::new(),
            card_shown: false,
            gift_revealed: false,
        }
    }

    pub fn schedule(&mut self, action: PendingAction, ticks: u32) {
        self.timers.push(Timer::new(action, ticks));
    }

    /// Restart a pending action's countdown, or schedule it if absent
    pub fn reschedule(&mut self, action: PendingAction, ticks: u32) {
        self.timers.retain(|t| t.action != action);
        self.schedule(action, ticks);
    }

    pub fn is_pending(&self, action: PendingAction) -> bool {
        self.timers.iter().any(|t| t.action == action)
    }
}

/// One line of the summary screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GiftSummary {
    pub level: LevelId,
    pub name: &'static str,
    pub icon: &'static str,
    pub tagline: &'static str,
    pub unlocked: bool,
}

/// A play session: progress, current screen and the active level
#[derive(Debug)]
pub struct Game {
    pub(crate) settings: Settings,
    /// Session seed for reproducible shuffles
    pub(crate) seed: u64,
    pub(crate) progress: Progress,
    pub(crate) screen: Screen,
    pub(crate) active: Option<ActiveLevel>,
    pub(crate) events: Vec<GameEvent>,
    /// Level entries so far; mixed into the shuffle so a restart reshuffles
    pub(crate) entries: u64,
    /// Unconsumed frame time
    pub(crate) accumulator: f32,
    /// Fixed ticks since launch
    pub(crate) time_ticks: u64,
}

impl Game {
    /// Start a session on the welcome screen.
    /// `fallback_seed` is used when the settings don't pin one.
    pub fn new(settings: Settings, fallback_seed: u64) -> Self {
        let seed = settings.effective_seed(fallback_seed);
        let progress = Progress::new(settings.music_enabled);
        log::info!("New session (seed {})", seed);
        Self {
            settings,
            seed,
            progress,
            screen: Screen::Welcome,
            active: None,
            events: Vec::new(),
            entries: 0,
            accumulator: 0.0,
            time_ticks: 0,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    /// Active level, if a level screen is showing
    pub fn active(&self) -> Option<&ActiveLevel> {
        self.active.as_ref()
    }

    /// Interaction state of the active level
    pub fn level_state(&self) -> Option<&LevelState> {
        self.active.as_ref().map(|a| &a.state)
    }

    /// Gift overlay is showing for the active level
    pub fn gift_revealed(&self) -> bool {
        self.active.as_ref().is_some_and(|a| a.gift_revealed)
    }

    /// Whether navigation to a level is allowed
    pub fn is_reachable(&self, level: LevelId) -> bool {
        self.progress.is_reachable(level)
    }

    pub fn final_reachable(&self) -> bool {
        self.progress.final_reachable()
    }

    /// Take all events emitted since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Gift list for the summary screen, in level order
    pub fn gift_summary(&self) -> Vec<GiftSummary> {
        LEVELS
            .iter()
            .map(|def| GiftSummary {
                level: def.level(),
                name: def.gift_name,
                icon: def.gift_icon,
                tagline: def.gift_tagline,
                unlocked: self.progress.is_completed(def.id),
            })
            .collect()
    }

    pub(crate) fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Switch screens, discarding the active level and its timers
    pub(crate) fn enter(&mut self, screen: Screen) {
        self.active = match screen {
            Screen::Level(level) => {
                self.entries += 1;
                let seed = crate::level_seed(self.seed.wrapping_add(self.entries), level.get());
                Some(ActiveLevel::new(level, seed))
            }
            Screen::Welcome => {
                self.progress.reset_game();
                None
            }
            Screen::Final => None,
        };
        self.screen = screen;
        log::info!("Entered {:?}", screen);
        self.emit(GameEvent::ScreenEntered(screen));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restored_timer_must_be_running() {
        let timer: Timer =
            serde_json::from_str(r#"{"ticks_left":3,"action":"RevealGift"}"#).unwrap();
        assert_eq!(timer, Timer::new(PendingAction::RevealGift, 3));
        assert!(
            serde_json::from_str::<Timer>(r#"{"ticks_left":0,"action":"RevealGift"}"#).is_err()
        );
    }

    #[test]
    fn test_new_session_on_welcome() {
        let game = Game::new(Settings::default(), 1);
        assert_eq!(game.screen(), Screen::Welcome);
        assert!(game.active().is_none());
        assert!(game.progress().music_enabled());
        assert_eq!(game.progress().completed_count(), 0);
    }

    #[test]
    fn test_settings_seed_wins() {
        let settings = Settings {
            seed: Some(77),
            ..Default::default()
        };
        assert_eq!(Game::new(settings, 1).seed(), 77);
        assert_eq!(Game::new(Settings::default(), 1).seed(), 1);
    }

    #[test]
    fn test_music_default_from_settings() {
        let settings = Settings {
            music_enabled: false,
            ..Default::default()
        };
        assert!(!Game::new(settings, 1).progress().music_enabled());
    }

    #[test]
    fn test_timer_never_zero() {
        assert_eq!(Timer::new(PendingAction::RevealGift, 0).ticks_left, 1);
        assert_eq!(Timer::new(PendingAction::RevealGift, 5).ticks_left, 5);
    }

    #[test]
    fn test_reschedule_replaces() {
        let mut active = ActiveLevel::new(LevelId::new(2).unwrap(), 3);
        active.schedule(PendingAction::CheckBoard, 10);
        active.reschedule(PendingAction::CheckBoard, 18);
        assert_eq!(active.timers.len(), 1);
        assert_eq!(active.timers[0].ticks_left, 18);
        assert!(active.is_pending(PendingAction::CheckBoard));
    }

    #[test]
    fn test_gift_summary_locked_by_default() {
        let game = Game::new(Settings::default(), 1);
        let summary = game.gift_summary();
        assert_eq!(summary.len(), 7);
        assert!(summary.iter().all(|g| !g.unlocked));
        assert_eq!(summary[6].name, "iPad");
    }
}
