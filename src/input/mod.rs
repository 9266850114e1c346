//! Input subsystem - debounced push button and quadrature encoder.
//!
//! ## Components
//!
//! - **debounce**: polling state machine turning a noisy contact level
//!   into clean press events
//! - **steps**: direction steps and the bounded interrupt-to-main queue
//! - **button** / **encoder**: RP2040 GPIO bindings (embedded builds only)
//!
//! The hardware seams below keep the state machines testable on the host:
//! scripted fakes stand in for the GPIO and the time driver.

pub mod debounce;
pub mod steps;

#[cfg(feature = "embedded")]
pub mod button;
#[cfg(feature = "embedded")]
pub mod encoder;

/// Raw logic level of an input pin.
pub trait RawPin {
    /// Whether the pin currently reads low.  The button and both encoder
    /// phases idle high behind pull-ups, so low means active.
    fn is_low(&mut self) -> bool;
}

/// Monotonic millisecond time source with a short blocking delay.
pub trait Clock {
    /// Milliseconds since an arbitrary fixed origin.
    fn now_ms(&self) -> u64;

    /// Block for the given number of milliseconds.  Only used for the
    /// bounded debounce settle pauses, never to wait on I/O.
    fn block_ms(&self, ms: u64);
}
