//! Mechanical contact debouncing.
//!
//! A transition only becomes the new stable level after a fixed settle
//! delay, and a press is only reported once the level has additionally
//! stayed unchanged for a minimum dwell time.  Polling is cheap when the
//! line is quiet; the settle pauses are short bounded blocks.

use crate::input::{Clock, RawPin};

/// What [`DebouncedInput::poll`] reports while the button stays held past
/// the dwell window.
///
/// The classic polling debouncer re-reports a held button on every
/// qualifying poll.  Whether that is a feature (hold-to-repeat) or a bug
/// depends on the caller, so the choice is explicit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FireMode {
    /// Report `true` on every qualifying poll while held.
    RepeatWhileHeld,
    /// Report `true` once per physical press; re-arms on release.
    OncePerPress,
}

/// Debounced active-low input polled from the main loop.
///
/// Tracks the last stable level and the time it last changed.  `poll`
/// returns `true` when a settled, dwelled press is observed; transient
/// noise and "nothing happened" are ordinary `false` results, never
/// errors.
pub struct DebouncedInput<P: RawPin, C: Clock> {
    pin: P,
    clock: C,
    settle_ms: u64,
    dwell_ms: u64,
    fire_mode: FireMode,
    last_stable_low: bool,
    last_change_ms: u64,
    reported: bool,
}

impl<P: RawPin, C: Clock> DebouncedInput<P, C> {
    /// Bind a pin and a clock.  Reads the pin once so the initial level
    /// is not itself treated as a transition.
    pub fn new(mut pin: P, clock: C, settle_ms: u64, dwell_ms: u64, fire_mode: FireMode) -> Self {
        let last_stable_low = pin.is_low();
        let last_change_ms = clock.now_ms();
        Self {
            pin,
            clock,
            settle_ms,
            dwell_ms,
            fire_mode,
            last_stable_low,
            last_change_ms,
            reported: false,
        }
    }

    /// Sample the pin and report whether a debounced press is active.
    ///
    /// A level change starts a transition: the settle delay is honoured,
    /// the new level and timestamp are recorded, and the poll reports
    /// `false` — a change alone is never a press.  Once the level has
    /// stayed unchanged past the dwell time, a low (active) level reports
    /// according to the configured [`FireMode`].
    pub fn poll(&mut self) -> bool {
        let raw_low = self.pin.is_low();

        if raw_low != self.last_stable_low {
            self.clock.block_ms(self.settle_ms);
            self.last_change_ms = self.clock.now_ms();
            self.last_stable_low = raw_low;
            if !raw_low {
                // released: re-arm the once-per-press latch
                self.reported = false;
            }
            return false;
        }

        if self.clock.now_ms().saturating_sub(self.last_change_ms) > self.dwell_ms {
            self.clock.block_ms(self.settle_ms);
            if raw_low {
                return match self.fire_mode {
                    FireMode::RepeatWhileHeld => true,
                    FireMode::OncePerPress => {
                        if self.reported {
                            false
                        } else {
                            self.reported = true;
                            true
                        }
                    }
                };
            }
        }

        false
    }
}
