//! Tron Rider entry point
//!
//! Checks assets, loads settings, and runs the game loop. The native build
//! has no window backend, so it rides in demo mode on simulated time.

use std::path::Path;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use tron_rider::assets::verify_assets;
use tron_rider::platform::{Clock, FixedStepper, InputCollector, Key, ManualClock};
use tron_rider::settings::{DEFAULT_SETTINGS_FILE, Settings};
use tron_rider::sim::{GameEvent, GamePhase, GameSession, tick};
use tron_rider::{FileHighScoreStore, HighScoreStore};

/// Simulated frame time of the demo loop (ms)
const DEMO_FRAME_MS: f64 = 1000.0 / 60.0;

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Tron Rider (native) starting...");

    let settings = Settings::load_or_default(Path::new(DEFAULT_SETTINGS_FILE));
    if let Err(e) = verify_assets(&settings.asset_dir) {
        log::error!("{}", e);
        return ExitCode::FAILURE;
    }

    let seed = settings.seed.unwrap_or_else(seed_from_time);
    let mut store = FileHighScoreStore::new(&settings.high_score_path);
    let mut game = GameSession::new(seed, settings.tuning.clone(), store.read_high_score());
    log::info!(
        "Game initialized with seed: {} (high scores in {})",
        game.seed,
        store.path().display()
    );
    log::info!("Native mode has no renderer - running demo ride");

    run_demo(&mut game, &mut store, settings.demo_max_ticks);
    ExitCode::SUCCESS
}

fn seed_from_time() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

/// Ride one run on autopilot until game over or the tick cap
fn run_demo(game: &mut GameSession, store: &mut impl HighScoreStore, max_ticks: u64) {
    let mut clock = ManualClock::default();
    let mut stepper = FixedStepper::default();
    let mut input = InputCollector::new();
    input.autopilot = true;
    input.key_down(Key::Space);
    stepper.advance(clock.now_ms());

    while game.time_ticks < max_ticks && game.phase != GamePhase::GameOver {
        clock.advance(DEMO_FRAME_MS);
        for _ in 0..stepper.advance(clock.now_ms()) {
            let tick_input = input.take();
            tick(game, &tick_input, stepper.step_ms(), store);

            for event in game.events() {
                match event {
                    GameEvent::SpeedUp { speed } => log::info!("Speed {} MPH", speed),
                    GameEvent::NewHighScore { score } => log::info!("New high score: {}", score),
                    _ => {}
                }
            }
            if game.phase == GamePhase::GameOver {
                break;
            }
        }
    }

    let snapshot = game.snapshot();
    if let Ok(json) = serde_json::to_string(&snapshot) {
        log::debug!("Final snapshot: {}", json);
    }
    log::info!(
        "Demo (seed {}) finished after {} ticks ({:.1} s): score {}, high score {}, phase {:?}",
        game.seed,
        game.time_ticks,
        game.play_time_ms / 1000.0,
        game.score,
        game.high_score,
        game.phase
    );
}
