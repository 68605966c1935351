//! Visual styles of the base and stick circles.
//!
//! Defaults are plain values built on request and owned by whoever asked
//! for them; nothing is shared between joysticks.

use embedded_graphics::pixelcolor::{BinaryColor, Rgb565};
use embedded_graphics::prelude::PixelColor;

/// A ring drawn around a circle, `pad` pixels away from its edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Outline<C> {
    pub color: C,
    pub width: u32,
    pub pad: u32,
}

/// Fill and outline of one circle. Either part may be absent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Style<C> {
    pub fill: Option<C>,
    pub outline: Option<Outline<C>>,
}

impl<C: PixelColor> Style<C> {
    pub fn filled(color: C) -> Self {
        Self {
            fill: Some(color),
            outline: None,
        }
    }

    pub fn with_outline(mut self, color: C, width: u32, pad: u32) -> Self {
        self.outline = Some(Outline { color, width, pad });
        self
    }
}

/// Colour types that know how a joystick looks when no style is given.
pub trait DefaultStyles: PixelColor {
    fn default_base() -> Style<Self>;
    fn default_stick() -> Style<Self>;
}

// Material palette: grey lighten-1, blue, green.
const GREY_LIGHT: Rgb565 = Rgb565::new(23, 47, 23);
const BLUE: Rgb565 = Rgb565::new(4, 37, 30);
const GREEN: Rgb565 = Rgb565::new(9, 43, 10);

impl DefaultStyles for Rgb565 {
    fn default_base() -> Style<Self> {
        Style::filled(GREY_LIGHT).with_outline(BLUE, 2, 8)
    }

    fn default_stick() -> Style<Self> {
        Style::filled(BLUE).with_outline(GREEN, 2, 4)
    }
}

// Monochrome: a hollow base ring and a solid stick with a halo.
impl DefaultStyles for BinaryColor {
    fn default_base() -> Style<Self> {
        Style {
            fill: None,
            outline: Some(Outline {
                color: BinaryColor::On,
                width: 2,
                pad: 1,
            }),
        }
    }

    fn default_stick() -> Style<Self> {
        Style::filled(BinaryColor::On).with_outline(BinaryColor::On, 1, 1)
    }
}

/// Styles of one joystick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct JoystickStyles<C> {
    pub base: Style<C>,
    pub stick: Style<C>,
}

impl<C: DefaultStyles> JoystickStyles<C> {
    /// Use the given styles, falling back to the defaults of `C`.
    pub fn or_defaults(base: Option<Style<C>>, stick: Option<Style<C>>) -> Self {
        Self {
            base: base.unwrap_or_else(C::default_base),
            stick: stick.unwrap_or_else(C::default_stick),
        }
    }
}

impl<C: DefaultStyles> Default for JoystickStyles<C> {
    fn default() -> Self {
        Self::or_defaults(None, None)
    }
}
