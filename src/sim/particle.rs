//! Crash debris particles

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Color group of a particle (renderer maps to RGB)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParticleColor {
    /// Burning fragments
    Ember,
    /// Metal and smoke
    Smoke,
}

impl ParticleColor {
    pub const ALL: [ParticleColor; 2] = [ParticleColor::Ember, ParticleColor::Smoke];

    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            ParticleColor::Ember => (200, 50, 50),
            ParticleColor::Smoke => (200, 200, 200),
        }
    }
}

/// Size range of a particle square (inclusive)
pub const PARTICLE_MIN_SIZE: u32 = 4;
pub const PARTICLE_MAX_SIZE: u32 = 10;
/// Max speed per axis (pixels per tick)
pub const PARTICLE_MAX_SPEED: f32 = 5.0;

/// A square of debris flying away from the crash site
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: u32,
    pub color: ParticleColor,
    /// 1.0 when spawned, 0.0 when gone. Doubles as opacity.
    pub life: f32,
}

impl Particle {
    pub fn spawn(pos: Vec2, color: ParticleColor, rng: &mut impl Rng) -> Self {
        Self {
            pos,
            vel: Vec2::new(
                rng.random_range(-PARTICLE_MAX_SPEED..=PARTICLE_MAX_SPEED),
                rng.random_range(-PARTICLE_MAX_SPEED..=PARTICLE_MAX_SPEED),
            ),
            size: rng.random_range(PARTICLE_MIN_SIZE..=PARTICLE_MAX_SIZE),
            color,
            life: 1.0,
        }
    }

    /// Advance one tick
    pub fn update(&mut self, decay: f32) {
        self.pos += self.vel;
        self.life = (self.life - decay).max(0.0);
    }

    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }
}

/// Spawn `per_color` particles of every color group at `center`.
/// Colors are interleaved so the burst looks mixed even when truncated.
pub fn burst(center: Vec2, per_color: usize, rng: &mut impl Rng) -> Vec<Particle> {
    let mut particles = Vec::with_capacity(per_color * ParticleColor::ALL.len());
    for _ in 0..per_color {
        for color in ParticleColor::ALL {
            particles.push(Particle::spawn(center, color, rng));
        }
    }
    particles
}
