use embedded_hal::digital::v2::InputPin;

/// Input bias of a monitored pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PullMode {
    Floating,
    PullUp,
}

impl From<bool> for PullMode {
    fn from(pullup: bool) -> Self {
        match pullup {
            true => PullMode::PullUp,
            false => PullMode::Floating,
        }
    }
}

/// An input pin whose pull resistor can be configured at runtime
pub trait PullConfig: InputPin {
    fn set_pull_mode(&mut self, mode: PullMode) -> Result<(), Self::Error>;
}

/// Monotonic millisecond clock.
///
/// The value wraps at `u32::MAX`, elapsed time must be computed with
/// `wrapping_sub`.
pub trait Clock {
    fn now_ms(&self) -> u32;
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now_ms(&self) -> u32 {
        (**self).now_ms()
    }
}

/// Milliseconds elapsed between `since` and `now`, correct across one wrap of the clock
#[inline(always)]
pub fn elapsed_ms(now: u32, since: u32) -> u32 {
    now.wrapping_sub(since)
}
