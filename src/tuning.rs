//! Data-driven game balance
//!
//! Every number that shapes difficulty lives here so it can be tweaked from
//! the settings file without touching the simulation.

use serde::{Deserialize, Serialize};

use crate::consts::SIM_DT_MS;

/// Gameplay tuning table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Speed ramp ===
    /// Base scroll speed at the start of a run (pixels per tick)
    pub initial_speed: f32,
    /// Base scroll speed cap
    pub max_speed: f32,
    /// Added to base speed every ramp interval
    pub speed_increment: f32,
    /// Playing time between ramp steps (ms)
    pub speed_up_interval_ms: f64,

    // === Player ===
    /// Player movement per tick while a direction is held
    pub player_speed: f32,
    /// Max vertical nitro shake (pixels, symmetric)
    pub boost_jitter: i32,

    // === Nitro ===
    pub max_fuel: f32,
    /// Fuel burned per tick while boosting
    pub fuel_drain_rate: f32,
    /// Fuel restored per tick while not boosting
    pub fuel_recharge_rate: f32,
    /// Scroll speed multiplier while boosting
    pub boost_multiplier: f32,

    // === Spawning ===
    /// Spawn interval at zero speed (ms)
    pub base_spawn_interval_ms: f64,
    /// Spawn interval floor (ms)
    pub min_spawn_interval_ms: f64,
    /// Interval shrink per unit of base speed, without boost
    pub spawn_rate_factor: f64,
    /// Interval shrink per unit of base speed, with boost.
    /// Ships equal to `spawn_rate_factor`: boosting does not change spawn density.
    pub boost_spawn_rate_factor: f64,

    // === Scoring ===
    pub points_per_obstacle: u64,
    pub boost_points_per_obstacle: u64,

    // === Death burst ===
    /// Particles per color group
    pub burst_per_color: usize,
    /// Life lost per particle update
    pub particle_decay: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            initial_speed: 5.0,
            max_speed: 25.0,
            speed_increment: 0.5,
            speed_up_interval_ms: 5000.0,

            player_speed: 7.0,
            boost_jitter: 2,

            max_fuel: 100.0,
            fuel_drain_rate: 1.0,
            fuel_recharge_rate: 0.25,
            boost_multiplier: 1.8,

            base_spawn_interval_ms: 1500.0,
            min_spawn_interval_ms: 300.0,
            spawn_rate_factor: 20.0,
            boost_spawn_rate_factor: 20.0,

            points_per_obstacle: 1,
            boost_points_per_obstacle: 2,

            burst_per_color: 30,
            particle_decay: 0.02,
        }
    }
}

impl Tuning {
    /// Check the table for values that would break the simulation.
    /// Returns a description of the first problem found.
    pub fn validate(&self) -> Result<(), String> {
        let positive = [
            ("initial_speed", self.initial_speed),
            ("max_speed", self.max_speed),
            ("max_fuel", self.max_fuel),
            ("fuel_drain_rate", self.fuel_drain_rate),
            ("fuel_recharge_rate", self.fuel_recharge_rate),
            ("boost_multiplier", self.boost_multiplier),
            ("particle_decay", self.particle_decay),
        ];
        for (name, value) in positive {
            if value.is_nan() || value <= 0.0 {
                return Err(format!("{name} must be positive (got {value})"));
            }
        }
        // Sub-tick intervals would step the ramp more than once per tick
        if !self.speed_up_interval_ms.is_finite() || self.speed_up_interval_ms < SIM_DT_MS {
            return Err(format!(
                "speed_up_interval_ms must be at least {SIM_DT_MS:.3} (got {})",
                self.speed_up_interval_ms
            ));
        }
        if !self.speed_increment.is_finite() || self.speed_increment < 0.0 {
            return Err(format!("speed_increment must not be negative (got {})", self.speed_increment));
        }
        if !self.base_spawn_interval_ms.is_finite() || !self.min_spawn_interval_ms.is_finite() {
            return Err("spawn intervals must be finite".to_string());
        }
        if self.initial_speed > self.max_speed {
            return Err("initial_speed exceeds max_speed".to_string());
        }
        if self.min_spawn_interval_ms > self.base_spawn_interval_ms {
            return Err("min_spawn_interval_ms exceeds base_spawn_interval_ms".to_string());
        }
        if self.burst_per_color == 0 {
            return Err("burst_per_color must be at least 1".to_string());
        }
        if self.boost_jitter < 0 {
            return Err("boost_jitter must not be negative".to_string());
        }
        Ok(())
    }

    /// Points for reclaiming one obstacle
    pub fn points_for_clear(&self, boosting: bool) -> u64 {
        if boosting {
            self.boost_points_per_obstacle
        } else {
            self.points_per_obstacle
        }
    }
}
