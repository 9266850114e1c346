//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters and queue sizing live
//! here so they can be tuned in one place.

// GPIO pin assignments (Raspberry Pi Pico defaults)
//
// These are logical names; actual `embassy_rp::peripherals::*` types are
// selected in `main.rs`.  Adjust for your wiring.
//
//   Encoder A (step edge)   → GP10
//   Encoder B (direction)   → GP11
//   Push button             → GP12
//   I²C1 SDA                → GP14
//   I²C1 SCL                → GP15
//   LED 1..3 (PWM)          → GP20..GP22
//   Status LED              → GP25 (onboard)

// Debounce

/// Settle delay honoured after every observed level change (ms).
pub const DEBOUNCE_SETTLE_MS: u64 = 50;

/// Minimum time a level must stay unchanged before a press can be
/// reported (ms).
pub const DEBOUNCE_DWELL_MS: u64 = 20;

// Encoder

/// Usable capacity of the interrupt-to-main step queue.
pub const ENCODER_QUEUE_DEPTH: usize = 30;

/// Swap the decoded rotation sense.  Which physical direction reads as
/// clockwise depends on how the encoder phases are wired, so this is a
/// per-deployment fact rather than a software truth.
pub const ENCODER_REVERSE_DIRECTION: bool = false;

// Outputs

/// PWM carrier frequency for the dimmable outputs (Hz).
pub const PWM_FREQUENCY_HZ: u32 = 1_000;

/// Brightness applied to every output at startup (percent).
pub const INITIAL_BRIGHTNESS_PCT: f64 = 1.0;

// Event loop

/// Delay between main-loop iterations (ms).
pub const LOOP_PERIOD_MS: u64 = 20;
