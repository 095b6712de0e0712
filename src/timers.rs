use core::cell::Cell;

/// Count of relay pulses outstanding across every controller sharing this registry.
///
/// The scheduler consults it to decide whether deferred work exists. It is an
/// aggregate signal, each owner claims at most once per pulse and releases
/// when the pulse ends. Not `Sync`: owners and scheduler run on one thread.
#[derive(Debug, Default)]
pub struct PendingTimers {
    count: Cell<u32>,
}

impl PendingTimers {
    pub const fn new() -> Self {
        Self {
            count: Cell::new(0),
        }
    }

    pub fn claim(&self) {
        self.count.set(self.count.get().saturating_add(1));
    }

    /// Release one claim, never going below zero
    pub fn release(&self) {
        self.count.set(self.count.get().saturating_sub(1));
    }

    pub fn pending(&self) -> u32 {
        self.count.get()
    }

    pub fn any_pending(&self) -> bool {
        self.pending() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claim_and_release() {
        let timers = PendingTimers::new();
        assert!(!timers.any_pending());

        timers.claim();
        timers.claim();
        assert_eq!(timers.pending(), 2);

        timers.release();
        assert_eq!(timers.pending(), 1);
        assert!(timers.any_pending());
    }

    #[test]
    fn release_saturates_at_zero() {
        let timers = PendingTimers::new();
        timers.release();
        timers.release();
        assert_eq!(timers.pending(), 0);

        timers.claim();
        assert_eq!(timers.pending(), 1);
    }
}
