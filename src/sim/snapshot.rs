//! Read-only view of a session for renderers and HUDs
//!
//! Built once per tick after the update, so a renderer never sees a
//! half-updated world.

use glam::Vec2;
use serde::Serialize;

use super::obstacle::ObstacleKind;
use super::particle::ParticleColor;
use super::rect::Rect;
use super::state::{GamePhase, GameSession};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObstacleView {
    pub rect: Rect,
    pub kind: ObstacleKind,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParticleView {
    pub pos: Vec2,
    pub size: u32,
    pub color: ParticleColor,
    pub rgb: (u8, u8, u8),
    /// Opacity in (0, 1]
    pub life: f32,
}

/// Everything a frame needs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub player: Rect,
    pub obstacles: Vec<ObstacleView>,
    /// Visible particles only
    pub particles: Vec<ParticleView>,
    pub score: u64,
    pub high_score: u64,
    pub boost_active: bool,
    /// Fuel as a fraction of the tank
    pub fuel: f32,
    pub base_speed: f32,
    pub scroll_x: f32,
}

impl GameSession {
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            player: self.player.rect,
            obstacles: self
                .obstacles
                .iter()
                .map(|o| ObstacleView {
                    rect: o.rect,
                    kind: o.kind,
                })
                .collect(),
            particles: self
                .particles
                .iter()
                .filter(|p| p.is_alive())
                .map(|p| ParticleView {
                    pos: p.pos,
                    size: p.size,
                    color: p.color,
                    rgb: p.color.rgb(),
                    life: p.life,
                })
                .collect(),
            score: self.score,
            high_score: self.high_score,
            boost_active: self.boost_active,
            fuel: self.nitro.fraction(),
            base_speed: self.base_speed,
            scroll_x: self.scroll_x,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::particle::Particle;
    use crate::tuning::Tuning;

    #[test]
    fn test_snapshot_hides_dead_particles() {
        let mut s = GameSession::new(5, Tuning::default(), 3);
        s.particles.push(Particle {
            pos: Vec2::new(1.0, 2.0),
            vel: Vec2::ZERO,
            size: 6,
            color: ParticleColor::Ember,
            life: 0.5,
        });
        s.particles.push(Particle {
            pos: Vec2::new(3.0, 4.0),
            vel: Vec2::ZERO,
            size: 6,
            color: ParticleColor::Smoke,
            life: 0.0,
        });

        let snap = s.snapshot();
        assert_eq!(snap.particles.len(), 1);
        assert_eq!(snap.particles[0].color, ParticleColor::Ember);
        assert_eq!(snap.particles[0].rgb, (200, 50, 50));
        assert_eq!(snap.high_score, 3);
        assert_eq!(snap.phase, GamePhase::Menu);
        assert_eq!(snap.fuel, 1.0);
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut s = GameSession::new(5, Tuning::default(), 0);
        s.obstacles.push(ObstacleKind::Barrier, 640.0, 500.0);
        let json = serde_json::to_value(s.snapshot()).unwrap();
        assert_eq!(json["phase"], "Menu");
        assert_eq!(json["obstacles"][0]["kind"], "Barrier");
        assert_eq!(json["score"], 0);
    }
}
