//! The player's bike

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;

/// Movement axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Held movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn axis(&self) -> Axis {
        match self {
            Direction::Up | Direction::Down => Axis::Vertical,
            Direction::Left | Direction::Right => Axis::Horizontal,
        }
    }

    /// Unit step on screen (y grows down)
    pub fn unit(&self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, -1.0),
            Direction::Down => Vec2::new(0.0, 1.0),
            Direction::Left => Vec2::new(-1.0, 0.0),
            Direction::Right => Vec2::new(1.0, 0.0),
        }
    }
}

/// A discrete movement event: key down on a direction, or key up on an axis.
/// The latest press on an axis wins; any release on that axis stops it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveIntent {
    Press(Direction),
    Release(Axis),
}

/// Area the bike may occupy: the road band, full screen width
pub fn road_bounds() -> Rect {
    Rect::new(0.0, ROAD_TOP, SCREEN_WIDTH, ROAD_BOTTOM - ROAD_TOP)
}

/// The player's bike
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub rect: Rect,
    /// Velocity intent in pixels per tick
    pub vel: Vec2,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            rect: Rect::new(PLAYER_START_X, PLAYER_START_Y, PLAYER_WIDTH, PLAYER_HEIGHT),
            vel: Vec2::ZERO,
        }
    }
}

impl Player {
    /// Apply a movement event at the given speed
    pub fn apply_intent(&mut self, intent: MoveIntent, speed: f32) {
        match intent {
            MoveIntent::Press(dir) => {
                let step = dir.unit() * speed;
                match dir.axis() {
                    Axis::Horizontal => self.vel.x = step.x,
                    Axis::Vertical => self.vel.y = step.y,
                }
            }
            MoveIntent::Release(Axis::Horizontal) => self.vel.x = 0.0,
            MoveIntent::Release(Axis::Vertical) => self.vel.y = 0.0,
        }
    }

    /// Move by the velocity intent plus a vertical shake, then clamp to the road
    pub fn step(&mut self, shake_y: f32) {
        self.rect.pos.x += self.vel.x;
        self.rect.pos.y += self.vel.y + shake_y;
        self.rect.clamp_inside(&road_bounds());
    }

    pub fn center(&self) -> Vec2 {
        self.rect.center()
    }
}
