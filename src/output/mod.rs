//! Output subsystem - PWM-dimmable and plain digital outputs.
//!
//! ## Components
//!
//! - **duty**: pure brightness-percentage → 16-bit duty mapping
//! - **switch**: the on/off contract shared by plain pins and dimmable
//!   outputs, plus the hardware-free `DimmableOutput` core
//! - **led**: RP2040 PWM slice and GPIO bindings (embedded builds only)

pub mod duty;
pub mod switch;

#[cfg(feature = "embedded")]
pub mod led;
