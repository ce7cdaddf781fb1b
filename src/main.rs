//! Pika Volley entry point
//!
//! Headless runner: plays a match at the fixed timestep with the autopilot
//! on whichever sides the settings ask for, logging what happens.
//!
//! Usage: `pika-volley [settings.json]`

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use pika_volley::consts::TICKS_PER_SECOND;
use pika_volley::sim::{Autopilot, GameEvent, Side, TickInput, tick};
use pika_volley::{HudSnapshot, Settings};

fn main() {
    env_logger::init();
    log::info!("Pika Volley (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(Path::new(&path)),
        None => Settings::default(),
    };

    let clock_seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let mut game = settings.new_match(clock_seed);
    match settings.to_json() {
        Ok(json) => log::debug!("Settings: {}", json),
        Err(e) => log::warn!("Failed to encode settings: {}", e),
    }
    log::info!("Match seed {}", game.seed);

    let mut pilots = Side::BOTH.map(|side| {
        settings
            .autopilot(side)
            .then(|| Autopilot::new(side, game.seed))
    });

    let mut bounces = 0u64;
    while game.state.is_active && game.time_ticks < settings.max_ticks {
        let [left, right] = pilots
            .each_mut()
            .map(|pilot| pilot.as_mut().map(|p| p.intents(&game)).unwrap_or_default());
        let input = TickInput {
            left,
            right,
            restart: false,
        };
        tick(&mut game, &input);

        for event in game.drain_events() {
            match event {
                GameEvent::Bounce => bounces += 1,
                GameEvent::MatchWon { winner } => {
                    log::info!(
                        "{} takes it after {:.1}s",
                        winner.label(),
                        game.time_ticks as f32 / TICKS_PER_SECOND as f32
                    );
                }
                other => log::debug!("{:?}", other),
            }
        }
    }

    if game.state.is_active {
        log::warn!("Stopped after {} ticks without a winner", game.time_ticks);
    }
    log::info!("{} bounces", bounces);

    let hud = HudSnapshot::from_match(&game);
    match serde_json::to_string_pretty(&hud) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to encode final snapshot: {}", e),
    }
}
