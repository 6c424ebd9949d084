//! Tron Rider - an endless runner on a scrolling neon road
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player, obstacles, nitro, particles, game session)
//! - `platform`: Clock and keyboard input adapters
//! - `highscores`: High score persistence
//! - `settings`: Runtime settings (paths, seed, tuning)
//! - `tuning`: Data-driven game balance
//! - `assets`: Startup check for the visual assets the renderer needs

pub mod assets;
pub mod highscores;
pub mod platform;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use highscores::{FileHighScoreStore, HighScoreStore, MemoryHighScoreStore};
pub use settings::{Settings, SettingsError};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Reference tick rate
    pub const TICKS_PER_SECOND: u32 = 60;
    /// Fixed simulation timestep in milliseconds
    pub const SIM_DT_MS: f64 = 1000.0 / TICKS_PER_SECOND as f64;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Screen width; obstacles spawn just past it
    pub const SCREEN_WIDTH: f32 = 1280.0;

    /// Drivable road band (vertical)
    pub const ROAD_TOP: f32 = 420.0;
    pub const ROAD_BOTTOM: f32 = 620.0;

    /// Player bike defaults
    pub const PLAYER_WIDTH: f32 = 100.0;
    pub const PLAYER_HEIGHT: f32 = 60.0;
    pub const PLAYER_START_X: f32 = 100.0;
    pub const PLAYER_START_Y: f32 = 500.0;

    /// Obstacles enter this far past the right edge
    pub const SPAWN_MARGIN: f32 = 50.0;
}
