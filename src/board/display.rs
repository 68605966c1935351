//! SSD1306 OLED display wrapper.

use core::fmt::Write as _;

use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::MonoTextStyleBuilder;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;

use touchstick::ui::JoystickWidget;
use touchstick::{DisplacementSink, Error, Offset};

/// Type alias for the concrete display driver.
///
/// Generic over the I²C implementation so callers pass in their HAL's
/// I²C peripheral.
pub type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Initialise the SSD1306 display and clear the screen.
pub fn init<I2C>(i2c: I2C) -> Result<Display<I2C>, Error>
where
    I2C: embedded_hal::i2c::I2c,
{
    let interface = I2CDisplayInterface::new(i2c);
    let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    display.init().map_err(|_| Error::Display)?;
    display.clear_buffer();
    display.flush().map_err(|_| Error::Display)?;
    Ok(display)
}

fn text_style() -> embedded_graphics::mono_font::MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(&FONT_6X10)
        .text_color(BinaryColor::On)
        .build()
}

/// Render one frame: the stick position readout on the left, the widget
/// wherever its alignment put it.
pub fn draw_frame<I2C, S>(
    display: &mut Display<I2C>,
    widget: &JoystickWidget<BinaryColor, S>,
) -> Result<(), Error>
where
    I2C: embedded_hal::i2c::I2c,
    S: DisplacementSink,
{
    display.clear_buffer();

    let _ = Text::new("stick", Point::new(0, 10), text_style()).draw(display);

    let Offset { x, y } = widget.joystick().position();
    let mut line: heapless::String<16> = heapless::String::new();
    let _ = write!(line, "x:{}", x);
    let _ = Text::new(line.as_str(), Point::new(0, 30), text_style()).draw(display);
    line.clear();
    let _ = write!(line, "y:{}", y);
    let _ = Text::new(line.as_str(), Point::new(0, 44), text_style()).draw(display);

    widget.draw(display).map_err(|_| Error::Display)?;
    display.flush().map_err(|_| Error::Display)
}
