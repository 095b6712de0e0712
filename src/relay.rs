use embedded_hal::digital::v2::{OutputPin, PinState};

use crate::pin::elapsed_ms;
use crate::timers::PendingTimers;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayState {
    Idle,
    Pulsing,
}

/// A digital output that is switched on for a fixed time, then turns itself off
pub struct RelayOutput<O: OutputPin> {
    pin: O,
    invert_logic: bool,
    level: bool,
    delay_ms: u32,
    turned_on_at: u32,
    timer_pending: bool,
}

impl<O: OutputPin> RelayOutput<O> {
    /// Create the output and drive it to `starting_state` right away.
    ///
    /// `now` starts the clock for a relay that boots switched on, it will be
    /// turned off `delay_ms` later without ever holding a timer claim.
    pub fn new(
        pin: O,
        starting_state: bool,
        invert_logic: bool,
        delay_ms: u32,
        now: u32,
    ) -> Result<Self, O::Error> {
        let mut this = Self {
            pin,
            invert_logic,
            level: starting_state,
            delay_ms,
            turned_on_at: now,
            timer_pending: false,
        };

        this.write_state()?;

        Ok(this)
    }

    pub fn turn_on(&mut self, now: u32, timers: &PendingTimers) -> Result<(), O::Error> {
        self.level = true;
        self.turned_on_at = now;

        if !self.timer_pending {
            timers.claim();
            self.timer_pending = true;
        }

        self.write_state()
    }

    pub fn turn_off(&mut self, timers: &PendingTimers) -> Result<(), O::Error> {
        self.level = false;

        if self.timer_pending {
            timers.release();
            self.timer_pending = false;
        }

        self.write_state()
    }

    /// Turn the output off if its delay has run out at `now`.
    ///
    /// Returns `true` if the output was switched off by this call.
    pub fn expire(&mut self, now: u32, timers: &PendingTimers) -> Result<bool, O::Error> {
        if !self.level || elapsed_ms(now, self.turned_on_at) < self.delay_ms {
            return Ok(false);
        }

        self.turn_off(timers)?;
        Ok(true)
    }

    /// Write the current level to the pin again without changing it
    pub fn reassert(&mut self) -> Result<(), O::Error> {
        self.write_state()
    }

    fn write_state(&mut self) -> Result<(), O::Error> {
        self.pin
            .set_state(PinState::from(self.level != self.invert_logic))
    }

    /// Logical level, before inversion
    pub fn level(&self) -> bool {
        self.level
    }

    /// `Pulsing` whenever the output is on.
    ///
    /// A relay built with `starting_state = true` is `Pulsing` without a timer
    /// claim: [`is_timer_pending`](Self::is_timer_pending) stays false until an
    /// "on" command, and the pulse still ends `delay_ms` after construction.
    pub fn state(&self) -> RelayState {
        match self.level {
            true => RelayState::Pulsing,
            false => RelayState::Idle,
        }
    }

    pub fn is_timer_pending(&self) -> bool {
        self.timer_pending
    }

    pub fn turned_on_at(&self) -> u32 {
        self.turned_on_at
    }

    /// Time at which a pulse started at `turned_on_at` must end
    pub fn deadline(&self) -> u32 {
        self.turned_on_at.wrapping_add(self.delay_ms)
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    pub fn is_inverted(&self) -> bool {
        self.invert_logic
    }

    pub fn pin(&self) -> &O {
        &self.pin
    }
}
