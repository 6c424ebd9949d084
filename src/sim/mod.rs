//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod nitro;
pub mod obstacle;
pub mod particle;
pub mod player;
pub mod rect;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use nitro::Nitro;
pub use obstacle::{Obstacle, ObstacleKind, ObstacleSet, spawn_interval_ms};
pub use particle::{Particle, ParticleColor};
pub use player::{Axis, Direction, MoveIntent, Player};
pub use rect::Rect;
pub use snapshot::{ObstacleView, ParticleView, Snapshot};
pub use state::{GameEvent, GamePhase, GameSession};
pub use tick::{TickInput, tick};
