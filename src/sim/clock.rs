//! Session timer and periodic tick
//!
//! Times are in milliseconds, as delivered by the host's frame callback.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct SimulationClock {
    /// Elapsed play time, frozen once the session is over
    pub timer: f64,
    /// Time since the last tick
    pub event_timer: f64,
    pub event_interval: f64,
    /// True only on the frame where `event_timer` wrapped
    pub tick_fired: bool,
}

impl SimulationClock {
    pub fn new(event_interval: f64) -> Self {
        Self {
            timer: 0.0,
            event_timer: 0.0,
            event_interval,
            tick_fired: false,
        }
    }

    /// Accumulate one frame's delta. Returns whether the tick fired.
    pub fn advance(&mut self, dt: f64, game_over: bool) -> bool {
        if !game_over {
            self.timer += dt;
        }

        self.event_timer += dt;
        self.tick_fired = self.event_timer >= self.event_interval;
        if self.tick_fired {
            self.event_timer %= self.event_interval;
        }
        self.tick_fired
    }

    /// Timer as seconds with one decimal place
    pub fn formatted(&self) -> String {
        crate::format_seconds(self.timer)
    }
}
