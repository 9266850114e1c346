//! RP2040 bindings for the output contract.
//!
//! A PWM slice output becomes a [`DutyChannel`] for the dimmable LEDs;
//! a push-pull GPIO becomes a plain [`Switch`] for the status LED.
//! Each binding exclusively owns the peripheral it was built from.

use embassy_rp::clocks::clk_sys_freq;
use embassy_rp::gpio::Output;
use embassy_rp::pwm::{Config as PwmConfig, PwmOutput, SetDutyCycle};
use fixed::traits::ToFixed;

use crate::config;
use crate::output::switch::{DimmableOutput, DutyChannel, Switch};

/// Dimmable LED on one RP2040 PWM slice output.
pub type Led = DimmableOutput<LedChannel>;

/// PWM slice configuration for the dimmable outputs: full 16-bit duty
/// range at [`config::PWM_FREQUENCY_HZ`].
pub fn pwm_config() -> PwmConfig {
    let mut cfg = PwmConfig::default();
    cfg.top = u16::MAX;
    // carrier = clk_sys / ((top + 1) * divider)
    let divider =
        clk_sys_freq() as f32 / ((u16::MAX as u32 + 1) as f32 * config::PWM_FREQUENCY_HZ as f32);
    cfg.divider = divider.to_fixed();
    cfg
}

/// One PWM slice output plus the compare level it currently carries.
///
/// The wrapper owns the slice output exclusively, so the cached duty
/// mirrors the hardware compare register at all times.
pub struct LedChannel {
    out: PwmOutput<'static>,
    duty: u16,
}

impl LedChannel {
    /// Wrap a freshly configured slice output (compare level 0 → off).
    pub fn new(out: PwmOutput<'static>) -> Self {
        Self { out, duty: 0 }
    }
}

impl DutyChannel for LedChannel {
    fn set_duty(&mut self, duty: u16) {
        // top is u16::MAX, so every 16-bit duty is in range
        let _ = self.out.set_duty_cycle(duty);
        self.duty = duty;
    }

    fn duty(&self) -> u16 {
        self.duty
    }
}

/// Plain push-pull GPIO exposing the shared on/off contract.
pub struct DigitalOutput {
    pin: Output<'static>,
}

impl DigitalOutput {
    pub fn new(pin: Output<'static>) -> Self {
        Self { pin }
    }
}

impl Switch for DigitalOutput {
    fn on(&mut self) {
        self.pin.set_high();
    }

    fn off(&mut self) {
        self.pin.set_low();
    }

    fn value(&self) -> bool {
        self.pin.is_set_high()
    }
}
