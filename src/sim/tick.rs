//! Fixed timestep simulation tick
//!
//! Core game loop that advances the session one step. Motion is per tick;
//! the speed ramp and the spawn timer run on playing time in milliseconds
//! so they keep their cadence at any tick rate.

use rand::Rng;

use super::particle;
use super::player::{Axis, Direction, MoveIntent};
use super::rect::Rect;
use super::state::{GameEvent, GamePhase, GameSession};
use crate::consts::*;
use crate::highscores::{HighScoreStore, record_if_higher};

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Movement key presses/releases since the last tick, in order
    pub moves: Vec<MoveIntent>,
    /// Boost key held
    pub boost: bool,
    /// Pause toggle
    pub pause: bool,
    /// Start / restart
    pub start: bool,
    /// Demo mode - AI steers and boosts
    pub autopilot: bool,
}

/// Advance the game by one fixed timestep of `dt_ms` milliseconds
pub fn tick(state: &mut GameSession, input: &TickInput, dt_ms: f64, store: &mut impl HighScoreStore) {
    state.events.clear();
    state.time_ticks += 1;

    if input.start && matches!(state.phase, GamePhase::Menu | GamePhase::GameOver) {
        start_run(state, store);
        return;
    }

    // Handle pause toggle
    if input.pause {
        match state.phase {
            GamePhase::Playing => {
                apply_releases(state, input);
                state.phase = GamePhase::Paused;
                state.emit(GameEvent::Paused);
                log::info!("Paused at score {}", state.score);
                return;
            }
            GamePhase::Paused => {
                state.phase = GamePhase::Playing;
                state.emit(GameEvent::Resumed);
                log::info!("Resumed");
            }
            _ => {}
        }
    }

    match state.phase {
        GamePhase::Playing => tick_playing(state, input, dt_ms, store),
        GamePhase::Dying => tick_dying(state),
        GamePhase::Paused => apply_releases(state, input),
        GamePhase::Menu | GamePhase::GameOver => {}
    }
}

/// Key-ups still count while frozen so the bike does not drift on resume
fn apply_releases(state: &mut GameSession, input: &TickInput) {
    let player_speed = state.tuning.player_speed;
    for &intent in &input.moves {
        if let MoveIntent::Release(_) = intent {
            state.player.apply_intent(intent, player_speed);
        }
    }
}

/// Reset everything and enter Playing. The stored high score is re-read so
/// a record set last run shows up.
fn start_run(state: &mut GameSession, store: &mut impl HighScoreStore) {
    state.reset();
    state.high_score = store.read_high_score();
    state.phase = GamePhase::Playing;
    state.emit(GameEvent::Started);
    log::info!("Run started (high score {})", state.high_score);
}

fn tick_playing(
    state: &mut GameSession,
    input: &TickInput,
    dt_ms: f64,
    store: &mut impl HighScoreStore,
) {
    // Movement intents
    let player_speed = state.tuning.player_speed;
    for &intent in &input.moves {
        state.player.apply_intent(intent, player_speed);
    }
    let mut boost_wanted = input.boost;
    if input.autopilot {
        let (intent, boost) = autopilot(state);
        state.player.apply_intent(intent, player_speed);
        boost_wanted = boost;
    }

    // Speed ramp on playing time
    state.play_time_ms += dt_ms;
    state.ramp_accum_ms += dt_ms;
    let ramp_interval = state.tuning.speed_up_interval_ms;
    let steps = (state.ramp_accum_ms / ramp_interval).floor();
    if steps >= 1.0 {
        state.ramp_accum_ms -= steps * ramp_interval;
        if state.base_speed < state.tuning.max_speed {
            let gain = state.tuning.speed_increment * steps as f32;
            state.base_speed = (state.base_speed + gain).min(state.tuning.max_speed);
            let speed = state.base_speed;
            state.emit(GameEvent::SpeedUp { speed });
            log::debug!("Speed up: {}", speed);
        }
    }

    // Nitro
    state.boost_active = state.nitro.request(boost_wanted);
    let boosting = state.boost_active;
    let speed = state.effective_speed();

    // Scroll background
    state.scroll_x -= speed;
    if state.scroll_x <= -SCREEN_WIDTH {
        state.scroll_x += SCREEN_WIDTH;
    }

    // Move player (nitro shakes the bike)
    let shake = if boosting && state.tuning.boost_jitter > 0 {
        let j = state.tuning.boost_jitter;
        state.rng.random_range(-j..=j) as f32
    } else {
        0.0
    };
    state.player.step(shake);

    // Spawn
    let spawned = state
        .obstacles
        .try_spawn(
            state.play_time_ms,
            state.base_speed,
            boosting,
            &state.tuning,
            &mut state.rng,
        )
        .map(|o| o.id);
    if let Some(id) = spawned {
        state.emit(GameEvent::ObstacleSpawned { id });
    }

    // Advance and reclaim
    state.obstacles.advance(speed);
    let cleared = state.obstacles.reclaim();
    if cleared > 0 {
        let points = state.tuning.points_for_clear(boosting);
        for _ in 0..cleared {
            state.score += points;
            state.emit(GameEvent::ObstacleCleared { points });
        }
        log::debug!("Cleared {} obstacle(s), score {}", cleared, state.score);
    }

    // Collision
    let hit = state
        .obstacles
        .first_collision(&state.player.rect)
        .map(|o| o.id);
    if let Some(id) = hit {
        crash(state, store, id);
    }
}

/// Crash sequence: persist the score if it is a record, burst, start dying
fn crash(state: &mut GameSession, store: &mut impl HighScoreStore, obstacle_id: u32) {
    let score = state.score;
    if record_if_higher(store, score) {
        state.high_score = state.high_score.max(score);
        state.emit(GameEvent::NewHighScore { score });
    }

    let center = state.player.center();
    state.particles = particle::burst(center, state.tuning.burst_per_color, &mut state.rng);
    state.boost_active = false;
    state.phase = GamePhase::Dying;
    state.emit(GameEvent::Crashed { score });
    log::info!(
        "Crashed into obstacle #{} at score {} (speed {})",
        obstacle_id,
        score,
        state.base_speed
    );
}

fn tick_dying(state: &mut GameSession) {
    let decay = state.tuning.particle_decay;
    for p in &mut state.particles {
        p.update(decay);
    }
    if !state.particles_alive() {
        state.phase = GamePhase::GameOver;
        state.emit(GameEvent::GameOver);
        log::info!("Game over: score {}, best {}", state.score, state.high_score);
    }
}

/// Ticks of look-ahead the autopilot scans for obstacles
const AUTOPILOT_LOOKAHEAD_TICKS: f32 = 40.0;
/// Extra clearance the autopilot keeps above/below obstacles
const AUTOPILOT_MARGIN: f32 = 8.0;

/// Pick a vertical move and boost for demo mode.
///
/// Finds the nearest obstacle ahead that shares the bike's lane and steers
/// toward whichever side needs less travel and has room. Boosts only with an
/// open lane and more than half a tank.
fn autopilot(state: &GameSession) -> (MoveIntent, bool) {
    let bike = state.player.rect;
    let reach = bike.right() + state.effective_speed() * AUTOPILOT_LOOKAHEAD_TICKS;
    let lane = Rect::new(
        bike.left(),
        bike.top() - AUTOPILOT_MARGIN,
        reach - bike.left(),
        bike.size.y + AUTOPILOT_MARGIN * 2.0,
    );

    let threat = state
        .obstacles
        .iter()
        .filter(|o| o.rect.right() > bike.left() && o.rect.overlaps(&lane))
        .min_by(|a, b| {
            a.rect
                .left()
                .partial_cmp(&b.rect.left())
                .unwrap_or(std::cmp::Ordering::Equal)
        });

    let Some(threat) = threat else {
        let boost = state.nitro.fraction() > 0.5;
        return (MoveIntent::Release(Axis::Vertical), boost);
    };

    let o = threat.rect;
    let room_above = o.top() - ROAD_TOP >= bike.size.y + AUTOPILOT_MARGIN;
    let room_below = ROAD_BOTTOM - o.bottom() >= bike.size.y + AUTOPILOT_MARGIN;
    let travel_up = bike.bottom() - o.top();
    let travel_down = o.bottom() - bike.top();

    let dir = match (room_above, room_below) {
        (true, true) if travel_up <= travel_down => Direction::Up,
        (true, true) => Direction::Down,
        (true, false) => Direction::Up,
        (false, true) => Direction::Down,
        // Boxed in: head for the wider gap
        (false, false) if o.top() - ROAD_TOP > ROAD_BOTTOM - o.bottom() => Direction::Up,
        (false, false) => Direction::Down,
    };
    (MoveIntent::Press(dir), false)
}
