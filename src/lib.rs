pub mod app;
pub mod components;
pub mod config;
pub mod game;
pub mod menu;
pub mod menu_types;
pub mod particles;
pub mod screenshake;
pub mod spawner;
pub mod systems;
pub mod ui;

#[cfg(test)]
mod tests;

use bevy_ecs::prelude::Resource;
use std::time::{Duration, Instant};

#[derive(Resource, Debug, Clone)]
pub struct Time {
    delta: Duration,
    last_update: Instant,
}

impl Time {
    pub fn new() -> Self {
        Self {
            delta: Duration::default(),
            last_update: Instant::now(),
        }
    }

    pub fn update(&mut self) {
        let now = Instant::now();
        self.delta = now.duration_since(self.last_update);
        self.last_update = now;
    }

    pub fn delta_seconds(&self) -> f32 {
        self.delta.as_secs_f32()
    }
}

impl Default for Time {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixed-interval scheduler for the simulation and render cadences.
///
/// A stopped ticker never fires. `tick` reports the elapsed time since the
/// last fire so a late frame advances the simulation by what actually passed.
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    last_fire: Instant,
    running: bool,
}

impl Ticker {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_fire: Instant::now(),
            running: false,
        }
    }

    pub fn start(&mut self) {
        self.last_fire = Instant::now();
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns the elapsed duration when a full interval has passed, otherwise None.
    pub fn tick(&mut self) -> Option<Duration> {
        if !self.running {
            return None;
        }
        let elapsed = self.last_fire.elapsed();
        if elapsed >= self.interval {
            self.last_fire = Instant::now();
            Some(elapsed)
        } else {
            None
        }
    }
}
