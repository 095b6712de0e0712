use std::time::Duration;

use crate::debounce::CountDebounce;
use crate::pin::PullMode;

/// Construction options of a [`GarageDoorController`](crate::GarageDoorController)
///
/// Pins are not part of the configuration, they are handed to the constructor.
#[derive(Debug, Clone)]
pub struct DoorConfig {
    /// Internal pull-up on both contact inputs
    pub pullup: bool,
    /// Debounce threshold of both contact inputs
    pub required_counts: u32,
    /// Require `required_counts` disagreeing samples in a row instead of one
    pub consecutive_debounce: bool,
    /// Relay level before any command
    pub starting_state: bool,
    /// Physical output level is the complement of the logical one
    pub invert_logic: bool,
    /// How long the relay stays on after "on"
    pub delay_time: Duration,
}

impl Default for DoorConfig {
    fn default() -> Self {
        Self {
            pullup: false,
            required_counts: 0,
            consecutive_debounce: false,
            starting_state: false,
            invert_logic: false,
            delay_time: Duration::from_millis(1000),
        }
    }
}

impl DoorConfig {
    pub fn with_pullup(mut self, pullup: bool) -> Self {
        self.pullup = pullup;
        self
    }

    pub fn with_required_counts(mut self, required_counts: u32) -> Self {
        self.required_counts = required_counts;
        self
    }

    pub fn with_consecutive_debounce(mut self, consecutive: bool) -> Self {
        self.consecutive_debounce = consecutive;
        self
    }

    pub fn with_starting_state(mut self, starting_state: bool) -> Self {
        self.starting_state = starting_state;
        self
    }

    pub fn with_invert_logic(mut self, invert_logic: bool) -> Self {
        self.invert_logic = invert_logic;
        self
    }

    pub fn with_delay_time(mut self, delay_time: Duration) -> Self {
        self.delay_time = delay_time;
        self
    }

    pub fn pull_mode(&self) -> PullMode {
        PullMode::from(self.pullup)
    }

    /// Relay delay in clock ticks, saturating at the widest delay the clock can measure
    pub fn delay_ms(&self) -> u32 {
        self.delay_time.as_millis().min(u32::MAX as u128) as u32
    }

    pub fn debouncer(&self) -> CountDebounce {
        match self.consecutive_debounce {
            true => CountDebounce::consecutive(self.required_counts),
            false => CountDebounce::new(self.required_counts),
        }
    }
}
