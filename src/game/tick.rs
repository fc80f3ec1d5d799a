//! Input dispatch and fixed timestep tick
//!
//! Inputs mutate the active level synchronously. Anything that should wait
//! for an animation is scheduled as a tick timer on the active level, so
//! leaving or restarting the level cancels it.

use super::state::{Game, GameEvent, PendingAction, Screen, Timer};
use crate::consts::*;
use crate::error::GameError;
use crate::levels::LevelId;
use crate::puzzle::LevelState;

/// Discrete input from the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    /// Leave the welcome screen for level 1
    Start,
    /// Level 1: start the award ceremony
    ShowNominees,
    /// Level 1: pick a nominee card (0-based)
    PickNominee(usize),
    /// Level 2: drag release of a piece over a grid cell
    DropTile { piece: u8, row: i32, col: i32 },
    /// Level 3: show/hide the hint
    ToggleHint,
    /// Level 3: pick a lipstick by id
    PickColor(u8),
    /// Level 4: answer the visible question (0-based option)
    Answer(usize),
    /// Level 5: a finished jump
    Jump,
    /// Level 6: tap a star by id
    RevealStar(u8),
    /// Level 7: select/deselect a chapter by id
    ToggleChapter(u8),
    /// Level 7: close the book on three chapters
    ConfirmChapters,
    /// Gift overlay "next" button
    Continue,
    /// Re-enter the current level from scratch
    RestartLevel,
    ToggleMusic,
    /// Back to the welcome screen, clearing progress
    Reset,
}

/// What a level input asks the session to do next
#[derive(Debug, Default)]
struct Reaction {
    event: Option<GameEvent>,
    schedule: Option<(PendingAction, u32)>,
    solved: bool,
}

impl Reaction {
    fn none() -> Self {
        Self::default()
    }

    fn emit(event: GameEvent) -> Self {
        Self {
            event: Some(event),
            ..Default::default()
        }
    }

    fn after(action: PendingAction, ms: u32) -> Self {
        Self {
            schedule: Some((action, ms)),
            ..Default::default()
        }
    }

    fn solved() -> Self {
        Self {
            solved: true,
            ..Default::default()
        }
    }

    fn solved_if(mut self, solved: bool) -> Self {
        self.solved = solved;
        self
    }
}

impl Game {
    /// Apply an input from the presentation layer. Rejected inputs are
    /// logged and dropped; state is unchanged.
    pub fn handle(&mut self, input: &GameInput) {
        if let Err(err) = apply(self, input) {
            log::debug!("Ignored {:?} on {:?}: {}", input, self.screen, err);
        }
    }

    /// Run fixed ticks for a frame's worth of time. Returns ticks run.
    pub fn update(&mut self, dt: f32) -> u32 {
        // NaN would stick in the accumulator and stall every pending pause
        if !dt.is_finite() || dt < 0.0 {
            return 0;
        }
        let dt = dt.min(0.1);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            tick(self);
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        substeps
    }
}

/// Apply an input, reporting why it was rejected
pub fn apply(game: &mut Game, input: &GameInput) -> Result<(), GameError> {
    match *input {
        GameInput::Start => {
            if game.screen != Screen::Welcome {
                return Err(GameError::WrongScreen);
            }
            game.enter(Screen::Level(LevelId::FIRST));
            Ok(())
        }
        GameInput::Continue => continue_from_gift(game),
        GameInput::RestartLevel => match game.screen {
            Screen::Level(level) => {
                log::info!("Restarting level {}", level);
                game.enter(Screen::Level(level));
                Ok(())
            }
            _ => Err(GameError::WrongScreen),
        },
        GameInput::ToggleMusic => {
            let enabled = game.progress.toggle_music();
            game.emit(GameEvent::MusicToggled(enabled));
            Ok(())
        }
        GameInput::Reset => {
            game.enter(Screen::Welcome);
            game.emit(GameEvent::GameReset);
            Ok(())
        }
        _ => {
            let reaction = play(game, input)?;
            react(game, reaction);
            Ok(())
        }
    }
}

/// Leave the gift overlay for the next level, or the summary after level 7
fn continue_from_gift(game: &mut Game) -> Result<(), GameError> {
    let active = game.active.as_ref().ok_or(GameError::WrongScreen)?;
    let level = active.level;
    if !active.gift_revealed || !game.progress.is_completed(level.get()) {
        return Err(GameError::GiftNotRevealed(level));
    }
    match level.next() {
        Some(next) => game.enter(Screen::Level(next)),
        None => game.enter(Screen::Final),
    }
    Ok(())
}

/// Route a level input to the active puzzle
fn play(game: &mut Game, input: &GameInput) -> Result<Reaction, GameError> {
    let active = game.active.as_mut().ok_or(GameError::WrongScreen)?;
    let level = active.level;
    if active.gift_revealed {
        return Err(GameError::PuzzleFinished);
    }

    let reaction = match (*input, &mut active.state) {
        (GameInput::ShowNominees, LevelState::Award(award)) => {
            award.show_nominees();
            Reaction::none()
        }
        (GameInput::PickNominee(index), LevelState::Award(award)) => {
            if award.pick(index)? {
                Reaction::solved()
            } else {
                Reaction::after(PendingAction::ClearWrongPick, WRONG_PICK_CLEAR_MS)
            }
        }
        (GameInput::DropTile { piece, row, col }, LevelState::Tiles(board)) => {
            board.drop_at(piece, row, col)?;
            // Each drop restarts the settle pause
            Reaction::after(PendingAction::CheckBoard, TILE_SETTLE_MS)
        }
        (GameInput::ToggleHint, LevelState::Lipstick(pick)) => {
            pick.toggle_hint();
            Reaction::none()
        }
        (GameInput::PickColor(id), LevelState::Lipstick(pick)) => {
            if pick.pick(id)? {
                Reaction::solved()
            } else {
                Reaction::after(PendingAction::ClearWrongPick, WRONG_PICK_CLEAR_MS)
            }
        }
        (GameInput::Answer(index), LevelState::Quiz(quiz)) => {
            let outcome = quiz.answer(index)?;
            if !outcome.finished {
                Reaction::after(PendingAction::AdvanceQuestion, QUIZ_ADVANCE_MS)
            } else if quiz.is_solved() {
                Reaction::solved()
            } else {
                Reaction::emit(GameEvent::QuizFailed {
                    correct: quiz.correct_count(),
                })
            }
        }
        (GameInput::Jump, LevelState::Jump(counter)) => {
            let compliment = counter.jump()?;
            Reaction::emit(GameEvent::Compliment(compliment)).solved_if(counter.is_solved())
        }
        (GameInput::RevealStar(id), LevelState::Stars(field)) => match field.reveal(id)? {
            Some(message) => {
                Reaction::emit(GameEvent::MessageRevealed(message)).solved_if(field.is_solved())
            }
            None => Reaction::none(),
        },
        (GameInput::ToggleChapter(id), LevelState::Chapters(book)) => {
            book.toggle(id)?;
            Reaction::none()
        }
        (GameInput::ConfirmChapters, LevelState::Chapters(book)) => {
            book.confirm()?;
            Reaction::solved()
        }
        _ => return Err(GameError::WrongScreen),
    };

    log::debug!("Level {} input {:?}", level, input);
    Ok(reaction)
}

/// Turn a reaction into events and timers on the active level
fn react(game: &mut Game, reaction: Reaction) {
    let Some(active) = game.active.as_mut() else {
        return;
    };
    let level = active.level;

    if let Some((action, ms)) = reaction.schedule {
        active.reschedule(action, game.settings.effective_delay_ticks(ms));
    }
    if reaction.solved {
        active.schedule(
            PendingAction::RevealGift,
            game.settings
                .effective_delay_ticks(level.definition().reveal_delay_ms),
        );
    }

    if let Some(event) = reaction.event {
        game.emit(event);
    }
    if reaction.solved {
        log::info!("Level {} solved", level);
        game.emit(GameEvent::LevelSolved(level));
    }
}

/// Advance the session by one fixed timestep, firing due timers
pub fn tick(game: &mut Game) {
    game.time_ticks += 1;

    let Some(active) = game.active.as_mut() else {
        return;
    };
    let mut due = Vec::new();
    active.timers.retain_mut(|timer| {
        timer.ticks_left -= 1;
        if timer.ticks_left == 0 {
            due.push(timer.action);
            false
        } else {
            true
        }
    });

    for action in due {
        fire(game, action);
    }
}

/// Run a timer that just came due
fn fire(game: &mut Game, action: PendingAction) {
    let Some(active) = game.active.as_mut() else {
        return;
    };
    let level = active.level;
    log::debug!("Level {} timer fired: {:?}", level, action);

    match (action, &mut active.state) {
        (PendingAction::ClearWrongPick, LevelState::Award(award)) => {
            if award.clear_wrong_pick() {
                game.events.push(GameEvent::SelectionCleared(level));
            }
        }
        (PendingAction::ClearWrongPick, LevelState::Lipstick(pick)) => {
            if pick.clear_wrong_pick() {
                game.events.push(GameEvent::SelectionCleared(level));
            }
        }
        (PendingAction::AdvanceQuestion, LevelState::Quiz(quiz)) => {
            if let Some(index) = quiz.advance() {
                game.events.push(GameEvent::QuestionAdvanced(index));
            }
        }
        (PendingAction::CheckBoard, LevelState::Tiles(board)) => {
            if board.is_solved() && !board.is_locked() {
                board.lock();
                let ticks = game.settings.effective_delay_ticks(CARD_SHOW_MS);
                active.timers.push(Timer::new(PendingAction::ShowCard, ticks));
                log::info!("Level {} solved", level);
                game.events.push(GameEvent::LevelSolved(level));
            }
        }
        (PendingAction::ShowCard, LevelState::Tiles(_)) => {
            active.card_shown = true;
            let ticks = game
                .settings
                .effective_delay_ticks(level.definition().reveal_delay_ms);
            active.timers.push(Timer::new(PendingAction::RevealGift, ticks));
            game.events.push(GameEvent::CardShown);
        }
        (PendingAction::RevealGift, _) => {
            active.gift_revealed = true;
            game.progress.mark(level);
            log::info!("Gift unlocked: {}", level.definition().gift_name);
            game.events.push(GameEvent::GiftRevealed(level));
        }
        (action, _) => {
            log::warn!("Timer {:?} does not apply to level {}", action, level);
        }
    }
}
