//! Monotonic clocks and the fixed-step accumulator

use std::time::Instant;

use crate::consts::{MAX_SUBSTEPS, SIM_DT_MS};

/// Monotonic millisecond source
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// Wall clock, zeroed at creation
#[derive(Debug, Clone)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// Clock advanced by hand (tests, headless runs)
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: f64,
}

impl ManualClock {
    pub fn advance(&mut self, ms: f64) {
        self.now += ms.max(0.0);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now
    }
}

/// Turns frame times into a whole number of fixed ticks
#[derive(Debug, Clone)]
pub struct FixedStepper {
    step_ms: f64,
    max_substeps: u32,
    accumulator: f64,
    last_ms: Option<f64>,
}

impl Default for FixedStepper {
    fn default() -> Self {
        Self::new(SIM_DT_MS, MAX_SUBSTEPS)
    }
}

impl FixedStepper {
    pub fn new(step_ms: f64, max_substeps: u32) -> Self {
        Self {
            step_ms,
            max_substeps,
            accumulator: 0.0,
            last_ms: None,
        }
    }

    pub fn step_ms(&self) -> f64 {
        self.step_ms
    }

    /// Feed the current time; returns how many ticks to run this frame.
    /// Time beyond `max_substeps` ticks is dropped to avoid a spiral of death.
    pub fn advance(&mut self, now_ms: f64) -> u32 {
        let elapsed = match self.last_ms.replace(now_ms) {
            Some(last) => (now_ms - last).max(0.0),
            None => 0.0,
        };
        self.accumulator += elapsed;

        let mut ticks = 0;
        while self.accumulator >= self.step_ms && ticks < self.max_substeps {
            self.accumulator -= self.step_ms;
            ticks += 1;
        }
        if ticks == self.max_substeps && self.accumulator >= self.step_ms {
            log::debug!("Dropping {:.1} ms of backlog", self.accumulator);
            self.accumulator = 0.0;
        }
        ticks
    }
}
