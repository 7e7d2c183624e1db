//! Temperature schedule: geometric cool-down with a floor, periodic restart.
//!
//! The temperature starts at the configured initial value, shrinks by the
//! `delta` multiplier after every completed round, and is clamped at
//! [`T_MIN`]. Every [`RESTART_INTERVAL`] rounds it snaps back to the initial
//! value to reintroduce exploration and escape local optima.

/// Temperature floor; cooling never goes below this.
pub const T_MIN: f64 = 1e-5;

/// Rounds between temperature restarts. A round whose number is divisible
/// by this starts back at the initial temperature.
pub const RESTART_INTERVAL: usize = 300;

/// Mutable temperature state for one run.
#[derive(Debug, Clone)]
pub struct Temperature {
    current: f64,
    initial: f64,
    delta: f64,
}

impl Temperature {
    pub fn new(initial: f64, delta: f64) -> Self {
        Self {
            current: initial,
            initial,
            delta,
        }
    }

    pub fn value(&self) -> f64 {
        self.current
    }

    /// Geometric cool-down: `T = max(T * delta, T_MIN)`. Invoked once after
    /// every complete round.
    pub fn cool_down(&mut self) {
        self.current = (self.current * self.delta).max(T_MIN);
    }

    /// Resets to the initial temperature.
    pub fn restart(&mut self) {
        self.current = self.initial;
    }
}
