//! picodial - rotary-encoder + push-button input runtime with
//! PWM-dimmable outputs for the Raspberry Pi Pico.
//!
//! The library holds everything that runs on the host: the brightness →
//! duty mapping, the on/off output contract, the debounce state machine,
//! the bounded interrupt-to-main step queue and the view rules applied to
//! encoder steps.  The embedded binaries (enabled by the `embedded`
//! feature) bind these cores to the RP2040's GPIO, PWM slices and I²C.
//!
//! Usage: `cargo test` for the host suites; see README for firmware
//! builds.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod ui;

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests - duty mapping, output contract, debounce, view rules
// ═══════════════════════════════════════════════════════════════════════════
