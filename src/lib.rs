mod channel;
mod command;
mod config;
mod controller;
mod debounce;
mod door;
mod monitor;
mod pin;
mod relay;
mod report;
mod timers;

#[cfg(target_os = "espidf")]
mod esp;

pub use channel::*;
pub use command::*;
pub use config::*;
pub use controller::*;
pub use debounce::*;
pub use door::*;
pub use monitor::*;
pub use pin::*;
pub use relay::*;
pub use report::*;
pub use timers::*;

#[cfg(target_os = "espidf")]
pub use esp::*;

// Polled two channel contact debouncing with a timed relay pulse on top, for
// driving a garage door opener button and tracking where the door is.
// Nothing runs from interrupts, the owner calls `update` from its main loop.
