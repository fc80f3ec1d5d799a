//! Demo player
//!
//! Picks the next winning input for whatever is on screen. Used by the
//! native demo and by tests that need a finished session.

use crate::game::{Game, GameInput, Screen};
use crate::puzzle::tiles::GRID_SIZE;
use crate::puzzle::{LevelState, award, chapters, lipstick, stars};

/// Next input that moves the session toward the summary screen.
/// `None` means wait: a pause is running or the session is finished.
pub fn next_input(game: &Game) -> Option<GameInput> {
    match game.screen() {
        Screen::Welcome => Some(GameInput::Start),
        Screen::Final => None,
        Screen::Level(_) => {
            if game.gift_revealed() {
                return Some(GameInput::Continue);
            }
            level_move(game.level_state()?)
        }
    }
}

fn level_move(state: &LevelState) -> Option<GameInput> {
    match state {
        LevelState::Award(ceremony) => {
            if !ceremony.nominees_shown() {
                Some(GameInput::ShowNominees)
            } else if ceremony.selected().is_none() {
                Some(GameInput::PickNominee(award::CORRECT_NOMINEE))
            } else {
                None
            }
        }
        LevelState::Tiles(board) => {
            if board.is_locked() {
                return None;
            }
            // Put the first misplaced piece home
            board
                .cells()
                .iter()
                .enumerate()
                .find(|&(piece, &cell)| piece != cell as usize)
                .map(|(piece, _)| GameInput::DropTile {
                    piece: piece as u8,
                    row: (piece / GRID_SIZE) as i32,
                    col: (piece % GRID_SIZE) as i32,
                })
        }
        LevelState::Lipstick(pick) => pick
            .selected()
            .is_none()
            .then_some(GameInput::PickColor(lipstick::CORRECT_SHADE)),
        LevelState::Quiz(quiz) => match (quiz.current_question(), quiz.pending_answer()) {
            (Some(question), None) => Some(GameInput::Answer(question.correct)),
            _ => None,
        },
        LevelState::Jump(counter) => (!counter.is_solved()).then_some(GameInput::Jump),
        LevelState::Stars(field) => (1..=stars::STAR_COUNT)
            .find(|&id| !field.is_revealed(id))
            .map(GameInput::RevealStar),
        LevelState::Chapters(book) => {
            if book.can_confirm() {
                Some(GameInput::ConfirmChapters)
            } else if book.chosen().len() < chapters::PICK_COUNT && !book.is_confirmed() {
                chapters::CHAPTERS
                    .iter()
                    .find(|c| !book.is_chosen(c.id))
                    .map(|c| GameInput::ToggleChapter(c.id))
            } else {
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::game::GameEvent;
    use crate::settings::Settings;

    fn play_out(game: &mut Game, max_frames: u32) -> u32 {
        for frame in 0..max_frames {
            if game.screen() == Screen::Final {
                return frame;
            }
            if let Some(input) = next_input(game) {
                game.handle(&input);
            }
            game.update(SIM_DT);
        }
        panic!("session not finished after {} frames", max_frames);
    }

    #[test]
    fn test_autoplay_finishes_session() {
        let mut game = Game::new(Settings::default(), 2024);
        play_out(&mut game, 10_000);
        assert!(game.final_reachable());
        let gifts = game
            .drain_events()
            .into_iter()
            .filter(|e| matches!(e, GameEvent::GiftRevealed(_)))
            .count();
        assert_eq!(gifts, 7);
    }

    #[test]
    fn test_autoplay_reduced_motion_is_faster() {
        let mut slow = Game::new(Settings::default(), 5);
        let mut fast = Game::new(
            Settings {
                reduced_motion: true,
                ..Default::default()
            },
            5,
        );
        assert!(play_out(&mut fast, 10_000) < play_out(&mut slow, 10_000));
    }

    #[test]
    fn test_waits_on_final() {
        let mut game = Game::new(Settings::default(), 9);
        play_out(&mut game, 10_000);
        assert_eq!(next_input(&game), None);
    }
}
