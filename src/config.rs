//! Application-wide constants and compile-time configuration.
//!
//! Widget geometry, display parameters and timing constants live here
//! so they can be tuned in one place.

use crate::geometry::{Align, Offset};

// Containment

/// Inset factor applied to the stick radius when computing the
/// containment limit, as a ratio: `limit = base - stick * 6 / 5`.
pub const STICK_INSET_NUM: i64 = 6;
pub const STICK_INSET_DEN: i64 = 5;

// Display (SSD1306 128×64)

pub const DISPLAY_WIDTH: u32 = 128;
pub const DISPLAY_HEIGHT: u32 = 64;

// Touch controller

/// Poll interval while a finger is on the panel (ms).
pub const TOUCH_POLL_MS: u64 = 10;

/// 7-bit I²C address of the FT5x06/FT6x06 touch controller.
pub const TOUCH_I2C_ADDR: u8 = 0x38;

// Demo joystick
//
// The panel is small, so the demo stick sits in the bottom-right corner
// and the left half of the screen shows the last reported delta.

pub const DEMO_JOYSTICK_ID: u8 = 10;
pub const DEMO_BASE_RADIUS: u16 = 28;
pub const DEMO_STICK_RADIUS: u16 = 8;
pub const DEMO_ALIGN: Align = Align::RightMid;
pub const DEMO_OFFSET: Offset = Offset::new(-4, 0);

/// Depth of the displacement channel between the input task and the
/// consumer task. Displacements are dropped when it is full.
pub const DISPLACEMENT_QUEUE_DEPTH: usize = 8;
