//! Seven Gifts native demo
//!
//! Plays a whole session with the demo player and prints the gift summary.
//! Usage: `seven-gifts [seed]`

use std::time::{SystemTime, UNIX_EPOCH};

use seven_gifts::autoplay::next_input;
use seven_gifts::consts::SIM_DT;
use seven_gifts::{Game, GameEvent, Screen, Settings};

/// Give up if a session somehow never finishes
const MAX_FRAMES: u32 = 60 * 60 * 5;

fn main() {
    env_logger::init();

    let fallback_seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let settings = Settings {
        seed: std::env::args().nth(1).and_then(|s| s.parse().ok()),
        ..Default::default()
    };

    let mut game = Game::new(settings, fallback_seed);
    log::info!("Seven Gifts demo starting (seed {})", game.seed());

    let mut frames = 0;
    while game.screen() != Screen::Final && frames < MAX_FRAMES {
        if let Some(input) = next_input(&game) {
            game.handle(&input);
        }
        game.update(SIM_DT);
        frames += 1;

        for event in game.drain_events() {
            match event {
                GameEvent::Compliment(text) | GameEvent::MessageRevealed(text) => {
                    println!("  {}", text)
                }
                GameEvent::GiftRevealed(level) => {
                    let def = level.definition();
                    println!(
                        "Level {} {} -> {} ({}%)",
                        level,
                        def.title,
                        def.gift_name,
                        game.progress().progress_percent()
                    );
                }
                _ => {}
            }
        }
    }

    if game.screen() != Screen::Final {
        log::warn!("Session did not finish after {} frames", frames);
        return;
    }

    println!(
        "\nAll gifts collected in {:.1}s of play:",
        frames as f32 * SIM_DT
    );
    for gift in game.gift_summary() {
        println!("  {} {} - {}", gift.icon, gift.name, gift.tagline);
    }
}
