//! Brightness percentage → PWM duty mapping.
//!
//! Brightness is specified as a percentage in the range 0.5 - 100 %.
//! Values exceeding the range are capped to the range limits, never
//! rejected, so the mapping is total over all finite inputs.

/// Lowest accepted brightness (percent).  Anything dimmer is raised here.
pub const BRIGHTNESS_MIN_PCT: f64 = 0.5;

/// Highest accepted brightness (percent).
pub const BRIGHTNESS_MAX_PCT: f64 = 100.0;

/// Duty value corresponding to 100 % brightness.
pub const DUTY_MAX: u16 = u16::MAX;

/// Cap a brightness request to the supported range.
pub fn clamp_brightness(percent: f64) -> f64 {
    percent.clamp(BRIGHTNESS_MIN_PCT, BRIGHTNESS_MAX_PCT)
}

/// Map a brightness percentage to a 16-bit duty value.
///
/// `duty_for(b) == duty_for(clamp_brightness(b))` for every finite `b`,
/// and the mapping is monotonic non-decreasing.
pub fn duty_for(percent: f64) -> u16 {
    let clamped = clamp_brightness(percent);
    // Round half up; exact on the clamped domain, which keeps the scaled
    // value within [327.675, 65535.0].
    (DUTY_MAX as f64 * clamped / 100.0 + 0.5) as u16
}
