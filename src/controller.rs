use embedded_hal::digital::v2::OutputPin;

use crate::command::Command;
use crate::config::DoorConfig;
use crate::debounce::CountDebounce;
use crate::door::DoorState;
use crate::monitor::{ChannelHandler, DualChannelMonitor, TraceHandler};
use crate::pin::{Clock, PullConfig};
use crate::relay::RelayOutput;
use crate::report::Reporter;
use crate::timers::PendingTimers;

/// Pins wired to one garage door
pub struct DoorPins<P, O> {
    /// Contact that releases when the door leaves the open position
    pub contact_open: P,
    /// Contact that releases when the door leaves the closed position
    pub contact_closed: P,
    /// Relay pressing the opener button
    pub relay: O,
}

struct DoorStatus<R: Reporter> {
    name: String,
    state: DoorState,
    reporter: R,
}

impl<R: Reporter> DoorStatus<R> {
    fn publish(&mut self) {
        self.reporter.report(&self.name, self.state.as_str());
    }
}

// The two contacts are never reconciled, the last one to change wins.
impl<R: Reporter> ChannelHandler for DoorStatus<R> {
    fn channel_a_changed(&mut self, state: bool) {
        self.state = DoorState::from_channel_a(state);
        self.publish();
    }

    fn channel_b_changed(&mut self, state: bool) {
        self.state = DoorState::from_channel_b(state);
        self.publish();
    }
}

/// Garage door control: two debounced position contacts and a timed relay pulse
///
/// Polled from a cooperative scheduler, nothing here blocks. Every pulse
/// holds one claim on the shared [`PendingTimers`] while it is outstanding.
pub struct GarageDoorController<'t, P, O, C, R>
where
    P: PullConfig,
    O: OutputPin<Error = P::Error>,
    C: Clock,
    R: Reporter,
{
    status: DoorStatus<R>,
    monitor: DualChannelMonitor<P, CountDebounce>,
    relay: RelayOutput<O>,
    clock: C,
    timers: &'t PendingTimers,
}

impl<'t, P, O, C, R> GarageDoorController<'t, P, O, C, R>
where
    P: PullConfig,
    O: OutputPin<Error = P::Error>,
    C: Clock,
    R: Reporter,
{
    /// Configure the pins and drive the relay to its starting level.
    ///
    /// The initial contact levels are only traced here, the door state is
    /// first published by [`init`](Self::init).
    ///
    /// # Example - a door on gpio 4/5 with the relay on gpio 18
    /// ```ignore
    /// use esp_idf_hal::{gpio::*, prelude::Peripherals};
    ///
    /// let pins = Peripherals::take().unwrap().pins;
    /// let timers = PendingTimers::new();
    ///
    /// let mut door = GarageDoorController::new(
    ///     "garageDoor1",
    ///     DoorPins {
    ///         contact_open: pins.gpio4.into_input().unwrap().degrade(),
    ///         contact_closed: pins.gpio5.into_input().unwrap().degrade(),
    ///         relay: pins.gpio18.into_output().unwrap().degrade(),
    ///     },
    ///     &DoorConfig::default().with_pullup(true).with_invert_logic(true),
    ///     EspClock,
    ///     LogReporter,
    ///     &timers,
    /// )?;
    /// door.init()?;
    ///
    /// loop {
    ///     door.update()?;
    /// }
    /// ```
    pub fn new(
        name: impl Into<String>,
        pins: DoorPins<P, O>,
        config: &DoorConfig,
        clock: C,
        reporter: R,
        timers: &'t PendingTimers,
    ) -> Result<Self, P::Error> {
        let name = name.into();
        let monitor = DualChannelMonitor::new(
            pins.contact_open,
            pins.contact_closed,
            config.pull_mode(),
            config.debouncer(),
            config.debouncer(),
            TraceHandler(&name),
        )?;

        let relay = RelayOutput::new(
            pins.relay,
            config.starting_state,
            config.invert_logic,
            config.delay_ms(),
            clock.now_ms(),
        )?;

        Ok(Self {
            status: DoorStatus {
                name,
                state: DoorState::default(),
                reporter,
            },
            monitor,
            relay,
            clock,
            timers,
        })
    }

    /// Sample the contacts and publish the door state they imply
    pub fn init(&mut self) -> Result<(), P::Error> {
        self.monitor.init(&mut self.status)
    }

    /// One scheduler tick: end an expired pulse, then poll both contacts.
    pub fn update(&mut self) -> Result<(), P::Error> {
        if self.relay.expire(self.clock.now_ms(), self.timers)? {
            log::debug!("{} relay timer expired", self.status.name);
        }

        self.monitor.update(&mut self.status)
    }

    /// Publish the last derived door state again
    pub fn refresh(&mut self) {
        self.status.publish();
    }

    /// Handle a command token, `"on"` starts a pulse and `"off"` ends it.
    ///
    /// Any other token leaves the state alone but still rewrites the output pin.
    pub fn handle_command(&mut self, token: &str) -> Result<(), P::Error> {
        log::debug!("{} command {:?}", self.status.name, token);
        self.apply(Command::parse(token))
    }

    /// Handle a raw instruction whose first word selects the device, e.g. `"door1 on"`
    pub fn handle_instruction(&mut self, raw: &str) -> Result<(), P::Error> {
        log::debug!("{} instruction {:?}", self.status.name, raw);
        self.apply(Command::from_instruction(raw))
    }

    fn apply(&mut self, command: Command) -> Result<(), P::Error> {
        match command {
            Command::On => self.relay.turn_on(self.clock.now_ms(), self.timers),
            Command::Off => self.relay.turn_off(self.timers),
            Command::Other => self.relay.reassert(),
        }
    }

    pub fn name(&self) -> &str {
        &self.status.name
    }

    pub fn door_state(&self) -> DoorState {
        self.status.state
    }

    pub fn relay(&self) -> &RelayOutput<O> {
        &self.relay
    }

    pub fn monitor(&self) -> &DualChannelMonitor<P, CountDebounce> {
        &self.monitor
    }

    pub fn reporter(&self) -> &R {
        &self.status.reporter
    }
}
