/// A command for the relay output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    On,
    Off,
    /// Anything else. Accepted, changes nothing.
    Other,
}

impl Command {
    /// Parse a bare command token, matching is exact and case sensitive
    pub fn parse(token: &str) -> Self {
        match token {
            "on" => Command::On,
            "off" => Command::Off,
            _ => Command::Other,
        }
    }

    /// Parse a raw instruction such as `"doorControl1 on"`.
    ///
    /// Everything up to and including the first space is a device selector and
    /// is dropped. Without a space the whole string is the token.
    pub fn from_instruction(raw: &str) -> Self {
        let token = match raw.split_once(' ') {
            Some((_, token)) => token,
            None => raw,
        };

        Self::parse(token)
    }
}

impl From<&str> for Command {
    fn from(token: &str) -> Self {
        Self::parse(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_exact() {
        assert_eq!(Command::parse("on"), Command::On);
        assert_eq!(Command::parse("off"), Command::Off);
        assert_eq!(Command::parse("ON"), Command::Other);
        assert_eq!(Command::parse(" on"), Command::Other);
        assert_eq!(Command::parse(""), Command::Other);
        assert_eq!(Command::parse("toggle"), Command::Other);
    }

    #[test]
    fn selector_is_stripped_at_first_space() {
        assert_eq!(Command::from_instruction("doorControl1 on"), Command::On);
        assert_eq!(Command::from_instruction("doorControl1 off"), Command::Off);
        assert_eq!(Command::from_instruction("off"), Command::Off);
        assert_eq!(Command::from_instruction("a b on"), Command::Other);
    }
}
