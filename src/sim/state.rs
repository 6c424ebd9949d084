//! Game session state
//!
//! One `GameSession` owns every entity of a run. Nothing outlives a reset.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::nitro::Nitro;
use super::obstacle::ObstacleSet;
use super::particle::Particle;
use super::player::Player;
use crate::tuning::Tuning;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for start
    Menu,
    /// Active gameplay
    Playing,
    /// Gameplay frozen
    Paused,
    /// Crashed; debris still flying
    Dying,
    /// Run ended, waiting for restart
    GameOver,
}

/// Something that happened during the last tick (HUD, audio)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Started,
    Paused,
    Resumed,
    SpeedUp { speed: f32 },
    ObstacleSpawned { id: u32 },
    ObstacleCleared { points: u64 },
    Crashed { score: u64 },
    NewHighScore { score: u64 },
    GameOver,
}

/// Complete state of one game
#[derive(Debug, Clone)]
pub struct GameSession {
    /// Balance table
    pub tuning: Tuning,
    /// Run seed
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub phase: GamePhase,
    pub player: Player,
    pub obstacles: ObstacleSet,
    /// Crash debris (only populated while Dying / GameOver)
    pub particles: Vec<Particle>,
    pub score: u64,
    /// Last known stored high score
    pub high_score: u64,
    /// Base scroll speed (pixels per tick), before boost
    pub base_speed: f32,
    pub nitro: Nitro,
    /// Boost state of the last playing tick
    pub boost_active: bool,
    /// Background offset in `(-SCREEN_WIDTH, 0]`
    pub scroll_x: f32,
    /// Playing time since the run started (ms); frozen outside Playing
    pub play_time_ms: f64,
    /// Playing time accumulated toward the next speed step (ms)
    pub ramp_accum_ms: f64,
    /// Simulation tick counter (all phases)
    pub time_ticks: u64,
    pub(crate) events: Vec<GameEvent>,
}

impl GameSession {
    /// Create a session on the title screen
    pub fn new(seed: u64, tuning: Tuning, high_score: u64) -> Self {
        let nitro = Nitro::new(tuning.max_fuel, tuning.fuel_drain_rate, tuning.fuel_recharge_rate);
        Self {
            base_speed: tuning.initial_speed,
            tuning,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Menu,
            player: Player::default(),
            obstacles: ObstacleSet::new(0.0),
            particles: Vec::new(),
            score: 0,
            high_score,
            nitro,
            boost_active: false,
            scroll_x: 0.0,
            play_time_ms: 0.0,
            ramp_accum_ms: 0.0,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    /// Fresh run: every entity rebuilt, counters and timers zeroed.
    /// Phase and the cached high score are left to the caller.
    pub fn reset(&mut self) {
        self.player = Player::default();
        self.obstacles = ObstacleSet::new(0.0);
        self.particles.clear();
        self.score = 0;
        self.base_speed = self.tuning.initial_speed;
        self.nitro.refill();
        self.boost_active = false;
        self.scroll_x = 0.0;
        self.play_time_ms = 0.0;
        self.ramp_accum_ms = 0.0;
    }

    /// Events produced by the last tick
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub(crate) fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Scroll speed this tick, boost included
    pub fn effective_speed(&self) -> f32 {
        if self.boost_active {
            self.base_speed * self.tuning.boost_multiplier
        } else {
            self.base_speed
        }
    }

    /// Any debris still visible
    pub fn particles_alive(&self) -> bool {
        self.particles.iter().any(|p| p.is_alive())
    }
}
