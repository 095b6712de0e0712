/// A debouncer deciding when a disagreeing sample is trusted
///
/// The owning channel calls `agree` for every sample equal to its stable state
/// and `disagree` for every sample that differs from it. A `true` return from
/// `disagree` flips the stable state.
pub trait Debounce {
    fn agree(&mut self);
    fn disagree(&mut self) -> bool;
}

/// A debouncer that does nothing
/// Use this if you don't want to debounce
pub struct NoDebounce;
impl Debounce for NoDebounce {
    fn agree(&mut self) {}

    fn disagree(&mut self) -> bool {
        true
    }
}

/// Sample counting debounce.
///
/// `CountDebounce::new` keeps the historical contract of the door controller:
/// an agreeing sample resets the counter to the threshold itself, so the very
/// next disagreeing sample always passes and the threshold never delays a flip.
///
/// `CountDebounce::consecutive` resets to zero instead and requires
/// `required` disagreeing samples in a row.
#[derive(Debug, Clone, Copy)]
pub struct CountDebounce {
    required: u32,
    current: u32,
    reset_to: u32,
}

impl CountDebounce {
    pub fn new(required: u32) -> Self {
        Self {
            required,
            current: required,
            reset_to: required,
        }
    }

    pub fn consecutive(required: u32) -> Self {
        Self {
            required,
            current: 0,
            reset_to: 0,
        }
    }

    pub fn required(&self) -> u32 {
        self.required
    }

    pub fn current(&self) -> u32 {
        self.current
    }
}

impl Debounce for CountDebounce {
    fn agree(&mut self) {
        self.current = self.reset_to;
    }

    fn disagree(&mut self) -> bool {
        self.current = self.current.saturating_add(1);
        self.current >= self.required
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_debounce_always_passes() {
        let mut d = NoDebounce;
        assert!(d.disagree());
        d.agree();
        assert!(d.disagree());
    }

    #[test]
    fn threshold_never_delays_the_flip() {
        for required in [0, 1, 2, 5, 1000, u32::MAX] {
            let mut d = CountDebounce::new(required);
            d.agree();
            assert!(d.disagree(), "required = {required}");
        }
    }

    #[test]
    fn fresh_counter_passes_first_disagreement() {
        let mut d = CountDebounce::new(10);
        assert_eq!(d.current(), 10);
        assert!(d.disagree());
        assert_eq!(d.current(), 11);
    }

    #[test]
    fn consecutive_requires_n_samples_in_a_row() {
        let mut d = CountDebounce::consecutive(3);
        assert!(!d.disagree());
        assert!(!d.disagree());
        assert!(d.disagree());

        d.agree();
        assert!(!d.disagree());
        d.agree();
        assert!(!d.disagree());
        assert!(!d.disagree());
        assert!(d.disagree());
    }

    #[test]
    fn consecutive_with_zero_or_one_flips_immediately() {
        let mut zero = CountDebounce::consecutive(0);
        assert!(zero.disagree());
        let mut one = CountDebounce::consecutive(1);
        assert!(one.disagree());
    }
}
