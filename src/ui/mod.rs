//! Widget rendering - styles and the drawable joystick.
//!
//! The widget draws two circles with `embedded-graphics` primitives:
//! the base around its center and the stick at `base center + position`.
//! Any `DrawTarget` works; the firmware draws into the SSD1306 buffer.

pub mod style;
pub mod widget;

pub use style::{DefaultStyles, JoystickStyles, Outline, Style};
pub use widget::JoystickWidget;
