use crate::debounce::Debounce;
use crate::pin::{PullConfig, PullMode};

/// One polled digital input and its debounce bookkeeping
pub struct DebouncedChannel<P, D>
where
    P: PullConfig,
    D: Debounce,
{
    pin: P,
    pull: PullMode,
    debouncer: D,
    stable_state: bool,
}

impl<P, D> DebouncedChannel<P, D>
where
    P: PullConfig,
    D: Debounce,
{
    /// Create a new channel
    /// pin: the input to monitor, its pull resistor is configured here
    /// debouncer: the debouncer to use, `NoDebounce` flips on every disagreeing sample
    /// on_change: called once, synchronously, with the initial raw level
    ///
    /// The initial report happens even though nothing changed, so the owner
    /// always learns the starting state.
    pub fn new(
        mut pin: P,
        pull: PullMode,
        debouncer: D,
        on_change: impl FnOnce(bool),
    ) -> Result<Self, P::Error> {
        pin.set_pull_mode(pull)?;
        let stable_state = pin.is_high()?;

        let this = Self {
            pin,
            pull,
            debouncer,
            stable_state,
        };

        on_change(this.stable_state);

        Ok(this)
    }

    /// Take one sample of the pin.
    ///
    /// Returns `Some(new_state)` if the stable state flipped on this sample.
    pub fn sample(&mut self) -> Result<Option<bool>, P::Error> {
        let raw = self.pin.is_high()?;

        if raw == self.stable_state {
            self.debouncer.agree();
            return Ok(None);
        }

        if self.debouncer.disagree() {
            self.stable_state = raw;
            log::trace!("channel flipped to {}", raw);
            return Ok(Some(raw));
        }

        Ok(None)
    }

    /// Read the pin and take its raw level as the stable state, as construction does.
    ///
    /// Restarts the debounce count and returns the level read.
    pub fn resync(&mut self) -> Result<bool, P::Error> {
        self.stable_state = self.pin.is_high()?;
        self.debouncer.agree();

        Ok(self.stable_state)
    }

    /// Last confirmed (debounced) level
    pub fn state(&self) -> bool {
        self.stable_state
    }

    pub fn pull_mode(&self) -> PullMode {
        self.pull
    }

    pub fn debouncer(&self) -> &D {
        &self.debouncer
    }

    pub fn pin(&self) -> &P {
        &self.pin
    }
}
