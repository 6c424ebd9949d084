//! Platform abstraction layer
//!
//! Adapters between the host and the simulation:
//! - Time/ticks
//! - Input events

pub mod clock;
pub mod input;

pub use clock::{Clock, FixedStepper, ManualClock, SystemClock};
pub use input::{InputCollector, Key};
