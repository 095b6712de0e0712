/// Outbound status transport.
///
/// Fire and forget: no acknowledgement, must not block.
pub trait Reporter {
    fn report(&mut self, name: &str, status: &str);
}

impl<F: FnMut(&str, &str)> Reporter for F {
    fn report(&mut self, name: &str, status: &str) {
        self(name, status)
    }
}

/// Reporter that writes every status to the log
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn report(&mut self, name: &str, status: &str) {
        log::info!("{} {}", name, status);
    }
}
