//! Nitro fuel gauge

use serde::{Deserialize, Serialize};

/// Depletable boost fuel. Always within `[0, max_fuel]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nitro {
    fuel: f32,
    max_fuel: f32,
    drain_rate: f32,
    recharge_rate: f32,
}

impl Nitro {
    pub fn new(max_fuel: f32, drain_rate: f32, recharge_rate: f32) -> Self {
        Self {
            fuel: max_fuel,
            max_fuel,
            drain_rate,
            recharge_rate,
        }
    }

    pub fn fuel(&self) -> f32 {
        self.fuel
    }

    pub fn max_fuel(&self) -> f32 {
        self.max_fuel
    }

    /// Fuel as a fraction of the tank (HUD gauge)
    pub fn fraction(&self) -> f32 {
        self.fuel / self.max_fuel
    }

    /// Refill the tank
    pub fn refill(&mut self) {
        self.fuel = self.max_fuel;
    }

    /// Run the gauge for one tick. Returns whether the boost is actually on.
    ///
    /// Boost engages only with fuel left in the tank; the tick it engages
    /// burns `drain_rate`. Any tick without boost recharges.
    pub fn request(&mut self, boost_wanted: bool) -> bool {
        if boost_wanted && self.fuel > 0.0 {
            self.fuel = (self.fuel - self.drain_rate).max(0.0);
            true
        } else {
            self.fuel = (self.fuel + self.recharge_rate).min(self.max_fuel);
            false
        }
    }
}
