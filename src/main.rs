//! Tile Platformer entry point
//!
//! Headless driver: loads level, tuning and settings, then lets the seeded
//! demo pilot play for a fixed number of frames, feeding game events to the
//! audio dispatcher and logging a summary.
//!
//! Environment:
//! - `PLATFORMER_LEVEL`, `PLATFORMER_TUNING`, `PLATFORMER_SETTINGS`: JSON file paths
//!   (menu music changes are written back to the settings file)
//! - `PLATFORMER_FRAMES`: frames to simulate (default 3600)
//! - `PLATFORMER_SEED`: demo pilot seed (default 1)

#[cfg(not(target_arch = "wasm32"))]
fn env_number<T: std::str::FromStr>(name: &str, default: T) -> T {
    match std::env::var(name) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            log::warn!("Ignoring {name}={raw:?}: not a number");
            default
        }),
        Err(_) => default,
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use tile_platformer::audio::{AudioManager, LogBackend};
    use tile_platformer::demo::DemoPilot;
    use tile_platformer::sim::{GameEvent, GameState, tick};
    use tile_platformer::snapshot::RenderSnapshot;
    use tile_platformer::{LevelData, Settings, Tuning};

    env_logger::init();
    log::info!("Tile Platformer (headless) starting...");

    let level = match std::env::var("PLATFORMER_LEVEL") {
        Ok(path) => LevelData::load_or_default(path),
        Err(_) => LevelData::builtin(),
    };
    let tuning = match std::env::var("PLATFORMER_TUNING") {
        Ok(path) => Tuning::load_or_default(path),
        Err(_) => Tuning::default(),
    };
    let settings_path = std::env::var("PLATFORMER_SETTINGS").ok();
    let mut settings = match &settings_path {
        Some(path) => Settings::load_or_default(path),
        None => Settings::default(),
    };
    let frames: u64 = env_number("PLATFORMER_FRAMES", 3600);
    let seed: u64 = env_number("PLATFORMER_SEED", 1);

    let mut state = GameState::new(&level, tuning);
    state.music_on = settings.music_on;
    let mut audio = AudioManager::with_settings(LogBackend, &settings);
    let mut pilot = DemoPilot::new(seed);

    let mut wins = 0u32;
    let mut losses = 0u32;
    let mut coins = 0u32;
    let mut jumps = 0u32;

    for _ in 0..frames {
        let input = pilot.next_input(&state);
        tick(&mut state, &input);

        for event in state.drain_events() {
            match event {
                GameEvent::Win => wins += 1,
                GameEvent::Lose => losses += 1,
                GameEvent::CoinCollected { .. } => coins += 1,
                GameEvent::Jump => jumps += 1,
                GameEvent::MusicToggled { on } => {
                    settings.music_on = on;
                    if let Some(path) = &settings_path {
                        if let Err(e) = settings.save(path) {
                            log::warn!("{e}, music preference not saved");
                        }
                    }
                }
                _ => {}
            }
            audio.handle(&event);
        }

        if state.exit_requested {
            log::info!("Exit requested");
            break;
        }
    }

    let snapshot = RenderSnapshot::capture(&state);
    log::info!(
        "Done: seed {}, {} wins, {} losses, {} coins, {} jumps; final phase {:?}, {}",
        pilot.seed(),
        wins,
        losses,
        coins,
        jumps,
        snapshot.phase,
        snapshot.coin_text
    );
    println!(
        "wins={wins} losses={losses} coins={coins} jumps={jumps} phase={:?}",
        snapshot.phase
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No browser front end; the library is the product on wasm targets
}
