//! Unified error type for touchstick.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` for efficient on-target logging.

/// Top-level error type used across the crate and the firmware.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // Widget
    /// A joystick was configured with a zero base or stick radius.
    ZeroRadius,

    // Board
    /// I²C transaction to the display or flush failed.
    Display,

    /// I²C transaction to the touch controller failed.
    Touch,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::ZeroRadius => f.write_str("joystick radius must be positive"),
            Error::Display => f.write_str("display bus error"),
            Error::Touch => f.write_str("touch controller bus error"),
        }
    }
}
