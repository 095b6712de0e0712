use core::fmt;

/// Door position derived from the last contact that changed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DoorState {
    Open,
    #[default]
    Closed,
    Opening,
    Closing,
}

impl DoorState {
    /// Channel A watches the contact of the fully open position
    pub fn from_channel_a(state: bool) -> Self {
        match state {
            true => DoorState::Closing,
            false => DoorState::Open,
        }
    }

    /// Channel B watches the contact of the fully closed position
    pub fn from_channel_b(state: bool) -> Self {
        match state {
            true => DoorState::Opening,
            false => DoorState::Closed,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DoorState::Open => "open",
            DoorState::Closed => "closed",
            DoorState::Opening => "opening",
            DoorState::Closing => "closing",
        }
    }
}

impl fmt::Display for DoorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        assert_eq!(DoorState::default(), DoorState::Closed);
        assert_eq!(DoorState::default().to_string(), "closed");
    }

    #[test]
    fn channel_mapping() {
        assert_eq!(DoorState::from_channel_a(true).as_str(), "closing");
        assert_eq!(DoorState::from_channel_a(false).as_str(), "open");
        assert_eq!(DoorState::from_channel_b(true).as_str(), "opening");
        assert_eq!(DoorState::from_channel_b(false).as_str(), "closed");
    }
}
