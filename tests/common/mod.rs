#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::digital::v2::{InputPin, OutputPin};
use esp_garage_door::{Clock, PullConfig, PullMode, Reporter};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Input pin whose level is driven by the test through a shared handle
#[derive(Clone, Default)]
pub struct MockInput {
    level: Rc<Cell<bool>>,
    pull: Rc<Cell<Option<PullMode>>>,
    reads: Rc<Cell<usize>>,
}

impl MockInput {
    pub fn new(level: bool) -> Self {
        let pin = Self::default();
        pin.set(level);
        pin
    }

    pub fn set(&self, level: bool) {
        self.level.set(level);
    }

    pub fn pull(&self) -> Option<PullMode> {
        self.pull.get()
    }

    pub fn reads(&self) -> usize {
        self.reads.get()
    }
}

impl InputPin for MockInput {
    type Error = Infallible;

    fn is_high(&self) -> Result<bool, Infallible> {
        self.reads.set(self.reads.get() + 1);
        Ok(self.level.get())
    }

    fn is_low(&self) -> Result<bool, Infallible> {
        self.is_high().map(|high| !high)
    }
}

impl PullConfig for MockInput {
    fn set_pull_mode(&mut self, mode: PullMode) -> Result<(), Infallible> {
        self.pull.set(Some(mode));
        Ok(())
    }
}

/// Output pin recording the physical level and how often it was written
#[derive(Clone, Default)]
pub struct MockOutput {
    level: Rc<Cell<bool>>,
    writes: Rc<Cell<usize>>,
}

impl MockOutput {
    pub fn level(&self) -> bool {
        self.level.get()
    }

    pub fn writes(&self) -> usize {
        self.writes.get()
    }

    fn write(&mut self, level: bool) -> Result<(), Infallible> {
        self.level.set(level);
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

impl OutputPin for MockOutput {
    type Error = Infallible;

    fn set_low(&mut self) -> Result<(), Infallible> {
        self.write(false)
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.write(true)
    }
}

#[derive(Clone, Default)]
pub struct MockClock {
    now: Rc<Cell<u32>>,
}

impl MockClock {
    pub fn at(now: u32) -> Self {
        let clock = Self::default();
        clock.set(now);
        clock
    }

    pub fn set(&self, now: u32) {
        self.now.set(now);
    }
}

impl Clock for MockClock {
    fn now_ms(&self) -> u32 {
        self.now.get()
    }
}

/// Reporter keeping every `"<name> <status>"` line it was handed
#[derive(Clone, Default)]
pub struct Recorder {
    lines: Rc<RefCell<Vec<String>>>,
}

impl Recorder {
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.lines.borrow().last().cloned()
    }

    pub fn clear(&self) {
        self.lines.borrow_mut().clear();
    }
}

impl Reporter for Recorder {
    fn report(&mut self, name: &str, status: &str) {
        self.lines.borrow_mut().push(format!("{name} {status}"));
    }
}
