//! SSD1306 OLED display wrapper.

use core::fmt::Write;

use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::MonoTextStyleBuilder;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;

/// Type alias for the concrete display driver.
///
/// Generic over the I²C implementation so callers pass in their HAL's
/// I²C peripheral.
pub type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Initialise the SSD1306 display and clear the screen.
pub fn init<I2C>(i2c: I2C) -> Display<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    let interface = I2CDisplayInterface::new(i2c);
    let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    let _ = display.init();
    display.clear_buffer();
    let _ = display.flush();
    display
}

fn text_style() -> embedded_graphics::mono_font::MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(&FONT_6X10)
        .text_color(BinaryColor::On)
        .build()
}

/// Render the output menu: one row per item, a cursor on the selection
/// and the selected output's current state.
pub fn draw_menu<I2C>(display: &mut Display<I2C>, labels: &[&str], selected: usize, selected_on: bool)
where
    I2C: embedded_hal::i2c::I2c,
{
    display.clear_buffer();

    for (row, label) in labels.iter().enumerate() {
        let mut line: heapless::String<24> = heapless::String::new();
        if row == selected {
            let state = if selected_on { "ON" } else { "OFF" };
            let _ = write!(line, "-> {} {}", label, state);
        } else {
            let _ = write!(line, "{}", label);
        }
        let y = 10 + (row as i32 * 16);
        let _ = Text::new(line.as_str(), Point::new(0, y), text_style()).draw(display);
    }

    let _ = display.flush();
}

/// Render the scope view: capture bounds on top, the scrolled window of
/// sample values below.
pub fn draw_samples<I2C>(display: &mut Display<I2C>, bounds: (i32, i32), rows: &[i32])
where
    I2C: embedded_hal::i2c::I2c,
{
    display.clear_buffer();

    let mut header: heapless::String<24> = heapless::String::new();
    let _ = write!(header, "Min: {}", bounds.0);
    let _ = Text::new(header.as_str(), Point::new(0, 8), text_style()).draw(display);

    let mut header: heapless::String<24> = heapless::String::new();
    let _ = write!(header, "Max: {}", bounds.1);
    let _ = Text::new(header.as_str(), Point::new(0, 18), text_style()).draw(display);

    for (row, value) in rows.iter().enumerate() {
        let mut line: heapless::String<16> = heapless::String::new();
        let _ = write!(line, "{}", value);
        let y = 30 + (row as i32 * 10);
        let _ = Text::new(line.as_str(), Point::new(0, y), text_style()).draw(display);
    }

    let _ = display.flush();
}
