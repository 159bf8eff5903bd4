//! Collision box construction for placed labels.
//!
//! Display space is y-down, so boxes rotate by the negated geometric
//! angle, and the configured pixel offset rotates in that same frame
//! before it is converted to map units.

use std::f32::consts::PI;

use glam::Vec2;

use crate::config::LineLayout;
use crate::geom::{OrientedBox, Point, rotate};
use crate::placement::angle;
use crate::placement::types::LabelCandidate;

/// Uniform multiplicative slack applied to every collision box size.
const BOX_SLACK: f32 = 1.0001;

fn buffered_height(size: Vec2, layout: &LineLayout) -> f32 {
    (size.y + 2.0 * layout.buffer[1]) * layout.units_per_pixel * BOX_SLACK
}

/// Build the single candidate for a straight placement.
pub(crate) fn straight_candidate(
    size: Vec2,
    position: Point,
    theta: f32,
    layout: &LineLayout,
) -> LabelCandidate {
    let width = (size.x + 2.0 * layout.buffer[0]) * layout.units_per_pixel * BOX_SLACK;
    let height = buffered_height(size, layout);
    build(size, position, theta, Vec2::from(layout.offset), width, height, layout)
}

/// Build the paired candidates for a corner placement.
///
/// Both pieces anchor at the kink vertex; each is nudged away from the
/// vertex along its own angle by half its width plus a spread that grows
/// with the sharpness of the bend.
pub(crate) fn corner_candidates(
    size: Vec2,
    position: Point,
    angles: [f32; 2],
    collapsed: [f32; 2],
    layout: &LineLayout,
) -> Vec<LabelCandidate> {
    let height = buffered_height(size, layout);
    let theta = angle::folded_angle(angles);
    let spread = layout.spread_factor * (size.y / (0.5 * (PI - theta)).tan()).abs();

    let mut candidates = Vec::with_capacity(2);
    for (i, direction) in [(0usize, -1.0f32), (1, 1.0)] {
        let width = collapsed[i] * layout.units_per_pixel * BOX_SLACK;
        let nudge = collapsed[i] * 0.5 + spread;
        let offset = Vec2::new(layout.offset[0] + direction * nudge, layout.offset[1]);
        candidates.push(build(
            Vec2::new(collapsed[i], size.y),
            position,
            angles[i],
            offset,
            width,
            height,
            layout,
        ));
    }
    candidates
}

fn build(
    size: Vec2,
    position: Point,
    theta: f32,
    offset_px: Vec2,
    width: f32,
    height: f32,
    layout: &LineLayout,
) -> LabelCandidate {
    let shift = rotate(offset_px, -theta) * layout.units_per_pixel;
    let obb = OrientedBox::new(position + shift, width * 0.5, height * 0.5, -theta);
    let aabb = obb.extent();
    LabelCandidate {
        size,
        position,
        angle: theta,
        obb,
        aabb,
        offset: offset_px,
    }
}
