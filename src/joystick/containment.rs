//! Containment test deciding whether a candidate stick position stays
//! inside the base.
//!
//! The accepted region is the open disc `sqrt(x² + y²) < base - stick * 1.2`.
//! Both sides are scaled by 5 and squared so the comparison is exact in
//! integers and needs no `sqrt` on `no_std` targets.

use crate::config::{STICK_INSET_DEN, STICK_INSET_NUM};
use crate::geometry::Offset;

/// Containment limit scaled by [`STICK_INSET_DEN`].
///
/// Zero or negative when the stick is too large for its base; every
/// candidate is rejected then.
pub fn scaled_limit(base_radius: u16, stick_radius: u16) -> i64 {
    base_radius as i64 * STICK_INSET_DEN - stick_radius as i64 * STICK_INSET_NUM
}

/// Returns `true` when `candidate` (relative to the base center) is
/// strictly inside the containment limit.
pub fn accepts(base_radius: u16, stick_radius: u16, candidate: Offset) -> bool {
    let limit = scaled_limit(base_radius, stick_radius);
    if limit <= 0 {
        return false;
    }
    let scaled_sq = candidate
        .squared_len()
        .saturating_mul(STICK_INSET_DEN * STICK_INSET_DEN);
    scaled_sq < limit * limit
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_matches_inset_formula() {
        // 100 - 25 * 1.2 = 70
        assert_eq!(scaled_limit(100, 25), 350);
        // 10 - 10 * 1.2 = -2
        assert_eq!(scaled_limit(10, 10), -10);
    }

    #[test]
    fn boundary_is_rejected() {
        assert!(accepts(100, 25, Offset::new(69, 0)));
        assert!(!accepts(100, 25, Offset::new(70, 0)));
        assert!(!accepts(100, 25, Offset::new(0, -70)));
    }

    #[test]
    fn diagonal_uses_euclidean_distance() {
        // 49² + 49² = 4802 < 4900
        assert!(accepts(100, 25, Offset::new(49, 49)));
        // 50² + 50² = 5000 > 4900
        assert!(!accepts(100, 25, Offset::new(-50, 50)));
    }

    #[test]
    fn fractional_limit_is_exact() {
        // 10 - 3 * 1.2 = 6.4
        assert!(accepts(10, 3, Offset::new(6, 0)));
        assert!(!accepts(10, 3, Offset::new(7, 0)));
        // sqrt(4² + 5²) = 6.40312 > 6.4
        assert!(!accepts(10, 3, Offset::new(4, 5)));
    }

    #[test]
    fn degenerate_pair_rejects_center() {
        assert!(!accepts(10, 10, Offset::ZERO));
        // 12 - 10 * 1.2 == 0 exactly
        assert!(!accepts(12, 10, Offset::ZERO));
    }

    #[test]
    fn far_candidates_saturate_to_reject() {
        assert!(!accepts(u16::MAX, 1, Offset::new(i32::MAX, i32::MIN)));
    }
}
