//! Register decoding for FT5x06/FT6x06 capacitive touch controllers.
//!
//! Layout of the block read starting at `TD_STATUS` (0x02):
//! ```text
//! Byte 0: TD_STATUS   bits 3:0 = number of touch points
//! Byte 1: P1_XH       bits 7:6 = event flag, bits 3:0 = X[11:8]
//! Byte 2: P1_XL       X[7:0]
//! Byte 3: P1_YH       bits 7:4 = touch id, bits 3:0 = Y[11:8]
//! Byte 4: P1_YL       Y[7:0]
//! ```

use crate::geometry::Offset;

/// First register of the touch block.
pub const REG_TD_STATUS: u8 = 0x02;

/// Bytes read from [`REG_TD_STATUS`] to get the first touch point.
pub const TOUCH_BLOCK_LEN: usize = 5;

/// Controllers report at most this many points; larger counts are
/// garbage read while the panel is still scanning.
const MAX_POINTS: u8 = 5;

/// Event flag of a touch point (`P1_XH` bits 7:6).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TouchFlag {
    PressDown,
    LiftUp,
    Contact,
    NoEvent,
}

impl From<u8> for TouchFlag {
    fn from(reg: u8) -> Self {
        match reg >> 6 {
            0 => TouchFlag::PressDown,
            1 => TouchFlag::LiftUp,
            2 => TouchFlag::Contact,
            _ => TouchFlag::NoEvent,
        }
    }
}

/// Decode the first touch point, or `None` when nothing touches the panel.
///
/// Only the first point is used: the widget follows a single pointer.
pub fn decode_first_point(block: &[u8; TOUCH_BLOCK_LEN]) -> Option<Offset> {
    let count = block[0] & 0x0F;
    if count == 0 || count > MAX_POINTS {
        return None;
    }

    match TouchFlag::from(block[1]) {
        TouchFlag::PressDown | TouchFlag::Contact => {}
        TouchFlag::LiftUp | TouchFlag::NoEvent => return None,
    }

    let x = (((block[1] & 0x0F) as u16) << 8) | block[2] as u16;
    let y = (((block[3] & 0x0F) as u16) << 8) | block[4] as u16;
    Some(Offset::new(x as i32, y as i32))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_contact_point() {
        // 1 point, contact, x = 0x123, y = 0x045, touch id 1
        let block = [0x01, 0x81, 0x23, 0x10, 0x45];
        assert_eq!(decode_first_point(&block), Some(Offset::new(0x123, 0x45)));
    }

    #[test]
    fn press_down_counts_as_touch() {
        let block = [0x01, 0x00, 0x0A, 0x00, 0x14];
        assert_eq!(decode_first_point(&block), Some(Offset::new(10, 20)));
    }

    #[test]
    fn no_points_or_lift_is_no_touch() {
        assert_eq!(decode_first_point(&[0x00, 0x80, 0x10, 0x00, 0x10]), None);
        assert_eq!(decode_first_point(&[0x01, 0x40, 0x10, 0x00, 0x10]), None);
        assert_eq!(decode_first_point(&[0x01, 0xC0, 0x10, 0x00, 0x10]), None);
    }

    #[test]
    fn garbage_point_count_is_ignored() {
        assert_eq!(decode_first_point(&[0x0F, 0x80, 0x10, 0x00, 0x10]), None);
    }

    #[test]
    fn flag_from_register_bits() {
        assert_eq!(TouchFlag::from(0x3F), TouchFlag::PressDown);
        assert_eq!(TouchFlag::from(0x40), TouchFlag::LiftUp);
        assert_eq!(TouchFlag::from(0x80), TouchFlag::Contact);
        assert_eq!(TouchFlag::from(0xFF), TouchFlag::NoEvent);
    }
}
