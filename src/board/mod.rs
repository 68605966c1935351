//! Board peripherals - SSD1306 OLED and FT5x06 touch controller.
//!
//! Only built into the firmware binary.

pub mod display;
pub mod touch;
