//! GPIO binding for the debounced push button.
//!
//! The button is active-low with an internal pull-up and is polled from
//! the main loop; no interrupt is involved.

use embassy_rp::gpio::Input;
use embassy_time::{block_for, Duration, Instant};

use crate::config;
use crate::input::debounce::{DebouncedInput, FireMode};
use crate::input::{Clock, RawPin};

/// Millisecond clock backed by the embassy time driver.
pub struct UptimeClock;

impl Clock for UptimeClock {
    fn now_ms(&self) -> u64 {
        Instant::now().as_millis()
    }

    fn block_ms(&self, ms: u64) {
        block_for(Duration::from_millis(ms));
    }
}

impl RawPin for Input<'static> {
    fn is_low(&mut self) -> bool {
        Input::is_low(self)
    }
}

/// Debounced push button with the crate-default settle and dwell times.
pub type Button = DebouncedInput<Input<'static>, UptimeClock>;

/// Bind a pulled-up input to the debouncer.  The fire mode stays an
/// explicit caller decision.
pub fn button(input: Input<'static>, fire_mode: FireMode) -> Button {
    DebouncedInput::new(
        input,
        UptimeClock,
        config::DEBOUNCE_SETTLE_MS,
        config::DEBOUNCE_DWELL_MS,
        fire_mode,
    )
}
