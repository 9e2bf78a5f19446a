//! Proximity tests between screen-space entities

use crate::foundation::math::Vec2;

/// Axis-aligned proximity test
///
/// Two entities touch when their centers are closer than the summed radii on
/// *both* axes independently. This is a square test, so it reports hits slightly
/// outside the true circles near the corners.
pub fn axis_aligned_overlap(a: Vec2, radius_a: f32, b: Vec2, radius_b: f32) -> bool {
    let too_close = radius_a + radius_b;
    (a.x - b.x).abs() < too_close && (a.y - b.y).abs() < too_close
}

/// Exact circle overlap test
pub fn circles_overlap(a: Vec2, radius_a: f32, b: Vec2, radius_b: f32) -> bool {
    let radius_sum = radius_a + radius_b;
    (a - b).magnitude_squared() < radius_sum * radius_sum
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_requires_both_axes() {
        let origin = Vec2::new(0.0, 0.0);
        assert!(axis_aligned_overlap(origin, 10.0, Vec2::new(15.0, 15.0), 10.0));
        assert!(!axis_aligned_overlap(origin, 10.0, Vec2::new(15.0, 25.0), 10.0));
        assert!(!axis_aligned_overlap(origin, 10.0, Vec2::new(25.0, 0.0), 10.0));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let origin = Vec2::new(0.0, 0.0);
        assert!(!axis_aligned_overlap(origin, 5.0, Vec2::new(10.0, 0.0), 5.0));
    }

    #[test]
    fn test_square_corner_is_wider_than_circle() {
        let origin = Vec2::new(0.0, 0.0);
        let corner = Vec2::new(18.0, 18.0);
        assert!(axis_aligned_overlap(origin, 10.0, corner, 10.0));
        assert!(!circles_overlap(origin, 10.0, corner, 10.0));
    }
}
