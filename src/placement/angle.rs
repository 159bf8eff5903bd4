//! Directional angles for label orientation.
//!
//! Angles are measured from the vertical (`atan2(dx, dy)` with the
//! arguments deliberately swapped) so that an angle of zero means a
//! horizontal, upright label. Directions that would read upside-down are
//! flipped by half a turn during normalization, keeping every result in
//! `[0, 2pi)`.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use crate::geom::Point;

/// Sharpest fold an articulated label may take. Bends beyond a quarter
/// turn are rejected: the two halves would be illegible.
pub(crate) const MAX_CORNER_ANGLE: f32 = FRAC_PI_2;

/// Directional angle of the segment `from -> to`, normalized into `[0, 2pi)`.
pub(crate) fn segment_angle(from: Point, to: Point) -> f32 {
    let d = to - from;
    let mut theta = d.x.atan2(d.y) + FRAC_PI_2;
    if theta >= FRAC_PI_2 {
        theta = (theta + PI) % TAU;
    } else if theta < 0.0 {
        theta += TAU;
    }
    theta
}

/// Angle pair for a corner segment, one per sub-segment.
///
/// When both sub-segments run in the same non-negative x direction the
/// pair is swapped, so that each collapsed width later lands on the side
/// of the kink it belongs to.
pub(crate) fn corner_angles(a: Point, b: Point, c: Point) -> [f32; 2] {
    let first = segment_angle(a, b);
    let second = segment_angle(b, c);
    if (b - a).x >= 0.0 && (c - b).x >= 0.0 {
        [second, first]
    } else {
        [first, second]
    }
}

/// Angular difference of a corner pair, folded to the shorter arc.
pub(crate) fn folded_angle(angles: [f32; 2]) -> f32 {
    let theta = (angles[1] - angles[0]).abs();
    theta.min(TAU - theta)
}

/// True if the corner is open enough to carry an articulated label.
pub(crate) fn corner_is_open(angles: [f32; 2]) -> bool {
    folded_angle(angles) <= MAX_CORNER_ANGLE
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    const EPS: f32 = 1e-5;

    #[test]
    fn horizontal_segment_has_zero_angle() {
        let theta = segment_angle(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0));
        assert!(theta.abs() < EPS, "expected 0, got {theta}");
    }

    #[test]
    fn reversed_horizontal_segment_also_reads_upright() {
        let theta = segment_angle(Vec2::new(10.0, 0.0), Vec2::new(0.0, 0.0));
        assert!(theta.abs() < EPS, "expected flip to 0, got {theta}");
    }

    #[test]
    fn vertical_segments_map_to_quarter_turns() {
        let down = segment_angle(Vec2::new(0.0, 0.0), Vec2::new(0.0, 10.0));
        let up = segment_angle(Vec2::new(0.0, 10.0), Vec2::new(0.0, 0.0));
        assert!((down - 3.0 * FRAC_PI_2).abs() < EPS, "down: {down}");
        assert!((up - FRAC_PI_2).abs() < EPS, "up: {up}");
    }

    #[test]
    fn angles_always_normalized() {
        for i in 0..64 {
            let phi = i as f32 / 64.0 * TAU;
            let d = Vec2::new(phi.cos(), phi.sin());
            let theta = segment_angle(Vec2::ZERO, d);
            assert!(
                (0.0..TAU).contains(&theta),
                "direction {phi} gave angle {theta} outside [0, 2pi)"
            );
        }
    }

    #[test]
    fn right_angle_bend_is_open() {
        let angles = corner_angles(
            Vec2::new(0.0, 0.0),
            Vec2::new(50.0, 0.0),
            Vec2::new(50.0, 50.0),
        );
        assert!((folded_angle(angles) - FRAC_PI_2).abs() < EPS);
        assert!(corner_is_open(angles));
    }

    #[test]
    fn vertical_reversal_is_closed() {
        let angles = corner_angles(
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 50.0),
            Vec2::new(0.0, 1.0),
        );
        assert!(
            !corner_is_open(angles),
            "reversal should exceed the angle bound, folded {}",
            folded_angle(angles)
        );
    }

    #[test]
    fn shallow_bend_is_open() {
        let angles = corner_angles(
            Vec2::new(0.0, 0.0),
            Vec2::new(50.0, 0.0),
            Vec2::new(100.0, 10.0),
        );
        assert!(corner_is_open(angles));
    }

    #[test]
    fn same_x_direction_swaps_angle_order() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(50.0, 0.0);
        let c = Vec2::new(100.0, 10.0);
        let angles = corner_angles(a, b, c);
        assert!(
            (angles[0] - segment_angle(b, c)).abs() < EPS,
            "first slot should carry the outgoing segment's angle"
        );
        assert!((angles[1] - segment_angle(a, b)).abs() < EPS);
    }
}
