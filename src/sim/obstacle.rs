//! Obstacles: archetypes, spawn-rate policy, and the live set

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;
use crate::tuning::Tuning;

/// Obstacle archetypes. Each has a fixed size; the renderer maps the kind to a sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Square light wall
    Wall,
    /// Long, low road barrier
    Barrier,
    /// Tall thin pylon
    Pylon,
}

impl ObstacleKind {
    pub const ALL: [ObstacleKind; 3] = [ObstacleKind::Wall, ObstacleKind::Barrier, ObstacleKind::Pylon];

    /// (width, height) in pixels
    pub const fn size(&self) -> (f32, f32) {
        match self {
            ObstacleKind::Wall => (50.0, 50.0),
            ObstacleKind::Barrier => (90.0, 30.0),
            ObstacleKind::Pylon => (30.0, 80.0),
        }
    }

    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

/// An obstacle on the road
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub kind: ObstacleKind,
    pub rect: Rect,
}

impl Obstacle {
    /// Place an obstacle of `kind` at the spawn line with its top edge at `y`
    pub fn new(id: u32, kind: ObstacleKind, y: f32) -> Self {
        let (w, h) = kind.size();
        Self {
            id,
            kind,
            rect: Rect::new(SCREEN_WIDTH + SPAWN_MARGIN, y, w, h),
        }
    }

    /// Fully past the left edge of the screen
    pub fn is_off_screen(&self) -> bool {
        self.rect.right() < 0.0
    }
}

/// Minimum playing time between two spawns at the given base speed.
///
/// Only base speed feeds the formula. The boost picks between two rate
/// factors, which the default tuning sets equal.
pub fn spawn_interval_ms(base_speed: f32, boosting: bool, tuning: &Tuning) -> f64 {
    let factor = if boosting {
        tuning.boost_spawn_rate_factor
    } else {
        tuning.spawn_rate_factor
    };
    let interval = tuning.base_spawn_interval_ms - base_speed as f64 * factor;
    interval.max(tuning.min_spawn_interval_ms)
}

/// The live obstacles plus the spawn timer
#[derive(Debug, Clone)]
pub struct ObstacleSet {
    /// Live obstacles in spawn order
    obstacles: Vec<Obstacle>,
    /// Playing time of the last spawn (ms)
    last_spawn_ms: f64,
    next_id: u32,
}

impl ObstacleSet {
    pub fn new(now_ms: f64) -> Self {
        Self {
            obstacles: Vec::new(),
            last_spawn_ms: now_ms,
            next_id: 1,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter()
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn last_spawn_ms(&self) -> f64 {
        self.last_spawn_ms
    }

    /// Insert an obstacle directly (scripted layouts, tests)
    pub fn push(&mut self, kind: ObstacleKind, x: f32, y: f32) -> u32 {
        let id = self.next_obstacle_id();
        let mut obstacle = Obstacle::new(id, kind, y);
        obstacle.rect.pos.x = x;
        self.obstacles.push(obstacle);
        id
    }

    fn next_obstacle_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    /// Spawn a random obstacle if more than the spawn interval has passed
    /// since the last one. Returns the new obstacle.
    pub fn try_spawn(
        &mut self,
        now_ms: f64,
        base_speed: f32,
        boosting: bool,
        tuning: &Tuning,
        rng: &mut impl Rng,
    ) -> Option<&Obstacle> {
        let interval = spawn_interval_ms(base_speed, boosting, tuning);
        if now_ms - self.last_spawn_ms <= interval {
            return None;
        }

        let kind = ObstacleKind::random(rng);
        let (_, h) = kind.size();
        let y = rng.random_range(ROAD_TOP..=ROAD_BOTTOM - h);
        let id = self.next_obstacle_id();
        self.obstacles.push(Obstacle::new(id, kind, y));
        self.last_spawn_ms = now_ms;

        log::debug!("Spawned {:?} #{} at y={:.0} (interval {:.0} ms)", kind, id, y, interval);
        self.obstacles.last()
    }

    /// Scroll every obstacle left by `speed`
    pub fn advance(&mut self, speed: f32) {
        for obstacle in &mut self.obstacles {
            obstacle.rect.pos.x -= speed;
        }
    }

    /// Drop obstacles that left the screen. Returns how many were removed.
    pub fn reclaim(&mut self) -> usize {
        let before = self.obstacles.len();
        self.obstacles.retain(|o| !o.is_off_screen());
        before - self.obstacles.len()
    }

    /// First obstacle (spawn order) overlapping `rect`
    pub fn first_collision(&self, rect: &Rect) -> Option<&Obstacle> {
        self.obstacles.iter().find(|o| o.rect.overlaps(rect))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_archetype_sizes_are_distinct() {
        for (i, a) in ObstacleKind::ALL.iter().enumerate() {
            for b in &ObstacleKind::ALL[i + 1..] {
                assert_ne!(a.size(), b.size());
            }
        }
    }

    #[test]
    fn test_spawn_interval() {
        let t = Tuning::default();
        assert_eq!(spawn_interval_ms(5.0, false, &t), 1400.0);
        assert_eq!(spawn_interval_ms(25.0, false, &t), 1000.0);
        // Floor
        assert_eq!(spawn_interval_ms(70.0, false, &t), 300.0);
        // Boost does not change the interval with default tuning
        assert_eq!(spawn_interval_ms(12.5, true, &t), spawn_interval_ms(12.5, false, &t));
    }

    #[test]
    fn test_spawn_interval_uses_boost_factor() {
        let t = Tuning {
            boost_spawn_rate_factor: 40.0,
            ..Default::default()
        };
        assert_eq!(spawn_interval_ms(10.0, true, &t), 1100.0);
        assert_eq!(spawn_interval_ms(10.0, false, &t), 1300.0);
    }

    #[test]
    fn test_spawn_gate_is_strict() {
        let t = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(1);
        let mut set = ObstacleSet::new(0.0);

        assert!(set.try_spawn(1400.0, 5.0, false, &t, &mut rng).is_none());
        assert!(set.try_spawn(1400.5, 5.0, false, &t, &mut rng).is_some());
        assert_eq!(set.len(), 1);
        assert_eq!(set.last_spawn_ms(), 1400.5);

        // Timer restarts from the spawn
        assert!(set.try_spawn(2000.0, 5.0, false, &t, &mut rng).is_none());
    }

    #[test]
    fn test_spawned_obstacle_inside_road_band() {
        let t = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(42);
        let mut set = ObstacleSet::new(0.0);
        let mut now = 0.0;
        for _ in 0..200 {
            now += 1500.0;
            let o = set.try_spawn(now, 5.0, false, &t, &mut rng).cloned();
            let o = o.expect("interval elapsed");
            assert_eq!(o.rect.left(), SCREEN_WIDTH + SPAWN_MARGIN);
            assert!(o.rect.top() >= ROAD_TOP);
            assert!(o.rect.bottom() <= ROAD_BOTTOM);
        }
    }

    #[test]
    fn test_reclaim_only_when_fully_off_screen() {
        let mut set = ObstacleSet::new(0.0);
        set.push(ObstacleKind::Wall, -49.0, 450.0);
        set.push(ObstacleKind::Wall, -50.0, 450.0);
        set.push(ObstacleKind::Wall, -51.0, 450.0);
        set.push(ObstacleKind::Wall, 300.0, 450.0);

        // Right edge exactly at 0 stays
        assert_eq!(set.reclaim(), 1);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_advance_and_collision_order() {
        let mut set = ObstacleSet::new(0.0);
        let first = set.push(ObstacleKind::Wall, 160.0, 500.0);
        set.push(ObstacleKind::Pylon, 150.0, 500.0);
        set.advance(5.0);
        assert_eq!(set.iter().next().map(|o| o.rect.left()), Some(155.0));

        let player = Rect::new(100.0, 500.0, 100.0, 60.0);
        assert_eq!(set.first_collision(&player).map(|o| o.id), Some(first));
        assert!(set.first_collision(&Rect::new(0.0, 0.0, 10.0, 10.0)).is_none());
    }
}
