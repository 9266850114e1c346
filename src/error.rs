//! Construction-time error type for picodial.
//!
//! Every operation after construction is total: brightness is clamped
//! rather than rejected, a full step queue applies its overflow policy,
//! and "no event yet" debounce outcomes are ordinary `false` results.
//! The only condition that can fail is an incompatible configuration
//! request at construction time.

use crate::output::switch::PinMode;

/// Raised when a pin or mode request is incompatible with a component's
/// contract.  Fatal to that component's construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// A dimmable output drives a single PWM-capable pin and only accepts
    /// the plain digital-output mode.  The mode parameter exists to keep
    /// the constructor signature compatible with a plain pin's.
    UnsupportedPinMode(PinMode),
}
