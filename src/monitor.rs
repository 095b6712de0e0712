use crate::channel::DebouncedChannel;
use crate::debounce::Debounce;
use crate::pin::{PullConfig, PullMode};

/// Receives the stable state changes of a [`DualChannelMonitor`]
///
/// Calls are made synchronously from inside sampling and run to completion
/// before the monitor continues.
pub trait ChannelHandler {
    fn channel_a_changed(&mut self, state: bool);
    fn channel_b_changed(&mut self, state: bool);
}

/// Handler that ignores every change
impl ChannelHandler for () {
    fn channel_a_changed(&mut self, _state: bool) {}

    fn channel_b_changed(&mut self, _state: bool) {}
}

/// Handler that only traces the changes, prefixed with the device name
#[derive(Debug, Clone, Copy)]
pub struct TraceHandler<'n>(pub &'n str);

impl TraceHandler<'_> {
    fn line(&self, pin: u8, state: bool) -> String {
        format!(
            "{} pin{} triggered {}",
            self.0,
            pin,
            if state { "HIGH" } else { "LOW" }
        )
    }
}

impl ChannelHandler for TraceHandler<'_> {
    fn channel_a_changed(&mut self, state: bool) {
        log::debug!("{}", self.line(1, state));
    }

    fn channel_b_changed(&mut self, state: bool) {
        log::debug!("{}", self.line(2, state));
    }
}

/// A pair of callbacks, the first for channel A and the second for channel B
impl<A, B> ChannelHandler for (A, B)
where
    A: FnMut(bool),
    B: FnMut(bool),
{
    fn channel_a_changed(&mut self, state: bool) {
        (self.0)(state)
    }

    fn channel_b_changed(&mut self, state: bool) {
        (self.1)(state)
    }
}

impl<H: ChannelHandler + ?Sized> ChannelHandler for &mut H {
    fn channel_a_changed(&mut self, state: bool) {
        (**self).channel_a_changed(state)
    }

    fn channel_b_changed(&mut self, state: bool) {
        (**self).channel_b_changed(state)
    }
}

/// Two debounced channels polled together, A before B
pub struct DualChannelMonitor<P, D>
where
    P: PullConfig,
    D: Debounce,
{
    channel_a: DebouncedChannel<P, D>,
    channel_b: DebouncedChannel<P, D>,
}

impl<P, D> DualChannelMonitor<P, D>
where
    P: PullConfig,
    D: Debounce,
{
    /// Create both channels, reporting the initial level of A and then B to `handler`.
    pub fn new<H: ChannelHandler>(
        pin_a: P,
        pin_b: P,
        pull: PullMode,
        debounce_a: D,
        debounce_b: D,
        mut handler: H,
    ) -> Result<Self, P::Error> {
        let channel_a = DebouncedChannel::new(pin_a, pull, debounce_a, |state| {
            handler.channel_a_changed(state)
        })?;
        let channel_b = DebouncedChannel::new(pin_b, pull, debounce_b, |state| {
            handler.channel_b_changed(state)
        })?;

        Ok(Self {
            channel_a,
            channel_b,
        })
    }

    /// Read both pins again and report their levels once each, A then B.
    ///
    /// Lets an owner finish its own setup before the states it derives are published.
    pub fn init<H: ChannelHandler>(&mut self, mut handler: H) -> Result<(), P::Error> {
        let state_a = self.channel_a.resync()?;
        handler.channel_a_changed(state_a);

        let state_b = self.channel_b.resync()?;
        handler.channel_b_changed(state_b);

        Ok(())
    }

    /// Sample A then B, dispatching a callback for every flip.
    pub fn update<H: ChannelHandler>(&mut self, mut handler: H) -> Result<(), P::Error> {
        if let Some(state) = self.channel_a.sample()? {
            handler.channel_a_changed(state);
        }

        if let Some(state) = self.channel_b.sample()? {
            handler.channel_b_changed(state);
        }

        Ok(())
    }

    pub fn state_a(&self) -> bool {
        self.channel_a.state()
    }

    pub fn state_b(&self) -> bool {
        self.channel_b.state()
    }

    pub fn channel_a(&self) -> &DebouncedChannel<P, D> {
        &self.channel_a
    }

    pub fn channel_b(&self) -> &DebouncedChannel<P, D> {
        &self.channel_b
    }
}
