//! Keyboard events to tick input
//!
//! Fixed layout: WASD to ride, Shift for nitro, P to pause, Space to start.

use crate::sim::{Direction, MoveIntent, TickInput};

/// Keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    W,
    A,
    S,
    D,
    LeftShift,
    RightShift,
    P,
    Space,
}

impl Key {
    fn direction(&self) -> Option<Direction> {
        match self {
            Key::W => Some(Direction::Up),
            Key::S => Some(Direction::Down),
            Key::A => Some(Direction::Left),
            Key::D => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Collects key events between ticks
#[derive(Debug, Clone, Default)]
pub struct InputCollector {
    moves: Vec<MoveIntent>,
    left_shift: bool,
    right_shift: bool,
    pause: bool,
    start: bool,
    /// Demo mode flag, passed through to every tick
    pub autopilot: bool,
}

impl InputCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: Key) {
        if let Some(dir) = key.direction() {
            self.moves.push(MoveIntent::Press(dir));
            return;
        }
        match key {
            Key::LeftShift => self.left_shift = true,
            Key::RightShift => self.right_shift = true,
            Key::P => self.pause = true,
            Key::Space => self.start = true,
            _ => {}
        }
    }

    pub fn key_up(&mut self, key: Key) {
        if let Some(dir) = key.direction() {
            self.moves.push(MoveIntent::Release(dir.axis()));
            return;
        }
        match key {
            Key::LeftShift => self.left_shift = false,
            Key::RightShift => self.right_shift = false,
            _ => {}
        }
    }

    /// Either shift held
    pub fn boost_held(&self) -> bool {
        self.left_shift || self.right_shift
    }

    /// Input for the next tick. One-shot edges and queued moves are
    /// consumed; held keys carry over.
    pub fn take(&mut self) -> TickInput {
        TickInput {
            moves: std::mem::take(&mut self.moves),
            boost: self.boost_held(),
            pause: std::mem::take(&mut self.pause),
            start: std::mem::take(&mut self.start),
            autopilot: self.autopilot,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Axis;

    #[test]
    fn test_movement_events_in_order() {
        let mut input = InputCollector::new();
        input.key_down(Key::W);
        input.key_down(Key::D);
        input.key_up(Key::W);

        let tick = input.take();
        assert_eq!(
            tick.moves,
            vec![
                MoveIntent::Press(Direction::Up),
                MoveIntent::Press(Direction::Right),
                MoveIntent::Release(Axis::Vertical),
            ]
        );
        assert!(input.take().moves.is_empty());
    }

    #[test]
    fn test_edges_are_one_shot() {
        let mut input = InputCollector::new();
        input.key_down(Key::P);
        input.key_down(Key::Space);
        let tick = input.take();
        assert!(tick.pause && tick.start);
        let tick = input.take();
        assert!(!tick.pause && !tick.start);
    }

    #[test]
    fn test_boost_is_held() {
        let mut input = InputCollector::new();
        input.key_down(Key::LeftShift);
        input.key_down(Key::RightShift);
        assert!(input.take().boost);
        input.key_up(Key::LeftShift);
        assert!(input.take().boost);
        input.key_up(Key::RightShift);
        assert!(!input.take().boost);
    }
}
