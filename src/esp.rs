use esp_idf_hal::gpio::{GpioPin, Input, Pin};
use esp_idf_sys::{
    esp, esp_timer_get_time, gpio_pull_mode_t_GPIO_FLOATING, gpio_pull_mode_t_GPIO_PULLUP_ONLY,
    gpio_set_pull_mode, EspError,
};

use crate::pin::{Clock, PullConfig, PullMode};

impl PullConfig for GpioPin<Input> {
    fn set_pull_mode(&mut self, mode: PullMode) -> Result<(), EspError> {
        let pull = match mode {
            PullMode::Floating => gpio_pull_mode_t_GPIO_FLOATING,
            PullMode::PullUp => gpio_pull_mode_t_GPIO_PULLUP_ONLY,
        };

        esp!(unsafe { gpio_set_pull_mode(self.pin(), pull) })
    }
}

/// Millisecond clock backed by the esp high resolution timer
#[derive(Debug, Default, Clone, Copy)]
pub struct EspClock;

impl Clock for EspClock {
    fn now_ms(&self) -> u32 {
        // truncation wraps the clock at u32::MAX
        (unsafe { esp_timer_get_time() } / 1000) as u32
    }
}
