/// Fixed timestep frame clock
///
/// The host feeds the measured duration of every frame; the clock answers
/// how many fixed character updates to run for it. Character logic always
/// steps at the same rate regardless of how fast frames arrive.
use std::time::Duration;

use log::{debug, info};

/// Character update rate (60 updates per second)
pub const FIXED_TIMESTEP: f32 = 1.0 / 60.0;
const FIXED_TIMESTEP_DURATION: Duration = Duration::from_micros(16_667); // ~1/60 second

/// Maximum number of fixed steps per frame to prevent spiral of death
const MAX_STEPS_PER_FRAME: u32 = 5;

pub struct GameLoop {
    /// Time not yet consumed by fixed steps
    accumulator: Duration,

    /// Total simulated time handed to the clock
    elapsed: Duration,

    paused: bool,

    frame_count: u64,

    update_count: u64,
}

impl GameLoop {
    pub fn new() -> Self {
        Self {
            accumulator: Duration::ZERO,
            elapsed: Duration::ZERO,
            paused: false,
            frame_count: 0,
            update_count: 0,
        }
    }

    /// Begin a new frame, returns the number of fixed updates to run
    pub fn advance(&mut self, frame_time: Duration) -> u32 {
        self.frame_count += 1;

        if self.paused {
            return 0;
        }

        self.elapsed += frame_time;
        self.accumulator += frame_time;

        let mut updates = 0;
        while self.accumulator >= FIXED_TIMESTEP_DURATION && updates < MAX_STEPS_PER_FRAME {
            self.accumulator -= FIXED_TIMESTEP_DURATION;
            updates += 1;
        }

        // Drop what could not be simulated instead of carrying the backlog
        if updates == MAX_STEPS_PER_FRAME && self.accumulator >= FIXED_TIMESTEP_DURATION {
            debug!(
                "Frame {} over budget, dropping {:?}",
                self.frame_count, self.accumulator
            );
            self.accumulator = Duration::ZERO;
        }

        self.update_count += updates as u64;
        updates
    }

    /// Fixed timestep in seconds
    pub fn fixed_timestep(&self) -> f32 {
        FIXED_TIMESTEP
    }

    /// Interpolation alpha between the last two fixed steps
    pub fn alpha(&self) -> f32 {
        self.accumulator.as_secs_f32() / FIXED_TIMESTEP
    }

    /// Total simulated time
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn update_count(&self) -> u64 {
        self.update_count
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            info!("Game paused");
        }
    }

    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            // Reset accumulator to prevent update burst
            self.accumulator = Duration::ZERO;
            info!("Game resumed");
        }
    }
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new()
    }
}
