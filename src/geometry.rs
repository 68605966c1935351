//! Pixel geometry: offsets, rectangles and named alignment.

use core::ops::{Add, AddAssign, Sub};

/// A pixel vector, used both as a position relative to some origin and as
/// an incremental motion between two pointer samples.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Offset {
    pub x: i32,
    pub y: i32,
}

impl Offset {
    pub const ZERO: Offset = Offset { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Squared euclidean length, widened so it cannot overflow.
    pub fn squared_len(&self) -> i64 {
        let x = self.x as i64;
        let y = self.y as i64;
        (x * x).saturating_add(y * y)
    }
}

impl Add for Offset {
    type Output = Offset;

    fn add(self, other: Offset) -> Offset {
        Offset {
            x: self.x.saturating_add(other.x),
            y: self.y.saturating_add(other.y),
        }
    }
}

impl AddAssign for Offset {
    fn add_assign(&mut self, other: Offset) {
        *self = *self + other;
    }
}

impl Sub for Offset {
    type Output = Offset;

    fn sub(self, other: Offset) -> Offset {
        Offset {
            x: self.x.saturating_sub(other.x),
            y: self.y.saturating_sub(other.y),
        }
    }
}

/// Axis-aligned rectangle in screen pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    pub fn center(&self) -> Offset {
        Offset::new(self.x + (self.w / 2) as i32, self.y + (self.h / 2) as i32)
    }

    pub fn contains(&self, p: Offset) -> bool {
        p.x >= self.x
            && p.x < self.x + self.w as i32
            && p.y >= self.y
            && p.y < self.y + self.h as i32
    }

    /// Clamp a point into the rectangle. An empty rectangle clamps to its
    /// origin.
    pub fn clamp(&self, p: Offset) -> Offset {
        let max_x = self.x + (self.w as i32 - 1).max(0);
        let max_y = self.y + (self.h as i32 - 1).max(0);
        Offset::new(p.x.clamp(self.x, max_x), p.y.clamp(self.y, max_y))
    }
}

/// Where a child is anchored inside its parent before its pixel offset is
/// applied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Align {
    TopLeft,
    TopMid,
    TopRight,
    LeftMid,
    #[default]
    Center,
    RightMid,
    BottomLeft,
    BottomMid,
    BottomRight,
}

impl Align {
    /// Place a `w`×`h` child inside `parent` at this anchor, shifted by
    /// `offset`.
    pub fn place(self, parent: Rect, w: u32, h: u32, offset: Offset) -> Rect {
        let free_x = parent.w as i32 - w as i32;
        let free_y = parent.h as i32 - h as i32;

        let x = match self {
            Align::TopLeft | Align::LeftMid | Align::BottomLeft => 0,
            Align::TopMid | Align::Center | Align::BottomMid => free_x / 2,
            Align::TopRight | Align::RightMid | Align::BottomRight => free_x,
        };
        let y = match self {
            Align::TopLeft | Align::TopMid | Align::TopRight => 0,
            Align::LeftMid | Align::Center | Align::RightMid => free_y / 2,
            Align::BottomLeft | Align::BottomMid | Align::BottomRight => free_y,
        };

        Rect::new(parent.x + x + offset.x, parent.y + y + offset.y, w, h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: Rect = Rect::new(0, 0, 320, 480);

    #[test]
    fn offset_arithmetic() {
        let a = Offset::new(3, -4);
        assert_eq!(a.squared_len(), 25);
        assert_eq!(a + Offset::new(1, 1), Offset::new(4, -3));
        assert_eq!(a - a, Offset::ZERO);

        let mut b = Offset::ZERO;
        b += a;
        assert_eq!(b, a);
    }

    #[test]
    fn squared_len_does_not_overflow() {
        let far = Offset::new(i32::MIN, i32::MIN);
        assert_eq!(far.squared_len(), i64::MAX);
    }

    #[test]
    fn align_bottom_mid_centers_horizontally() {
        let r = Align::BottomMid.place(SCREEN, 200, 200, Offset::ZERO);
        assert_eq!(r, Rect::new(60, 280, 200, 200));
        assert_eq!(r.center(), Offset::new(160, 380));
    }

    #[test]
    fn align_applies_offset_after_anchor() {
        let r = Align::TopLeft.place(SCREEN, 50, 50, Offset::new(10, 20));
        assert_eq!(r, Rect::new(10, 20, 50, 50));

        let r = Align::RightMid.place(SCREEN, 40, 40, Offset::new(-4, 0));
        assert_eq!(r, Rect::new(276, 220, 40, 40));
    }

    #[test]
    fn align_inside_offset_parent() {
        let parent = Rect::new(100, 100, 60, 60);
        let r = Align::Center.place(parent, 20, 20, Offset::ZERO);
        assert_eq!(r, Rect::new(120, 120, 20, 20));
    }

    #[test]
    fn rect_contains_and_clamp() {
        let r = Rect::new(0, 0, 128, 64);
        assert!(r.contains(Offset::new(0, 0)));
        assert!(r.contains(Offset::new(127, 63)));
        assert!(!r.contains(Offset::new(128, 10)));
        assert!(!r.contains(Offset::new(-1, 10)));

        assert_eq!(r.clamp(Offset::new(200, -5)), Offset::new(127, 0));
        assert_eq!(r.clamp(Offset::new(5, 6)), Offset::new(5, 6));
    }
}
