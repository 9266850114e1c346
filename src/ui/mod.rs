//! User interface subsystem - OLED display + selection rules.
//!
//! The display and the menu interpretation are collaborators of the input
//! runtime, kept behind narrow seams: the rendering helpers wrap the
//! SSD1306, and `view_logic` holds the pure rules the event loops apply
//! to encoder steps.

pub mod view_logic;

#[cfg(feature = "embedded")]
pub mod display;
