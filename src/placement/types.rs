use glam::Vec2;

use crate::geom::{Aabb, OrientedBox, Point};

/// One placeable label box, ready for collision testing.
///
/// A straight placement produces a single candidate; a corner placement
/// produces a pair sharing the same anchor position. `size` and `offset`
/// are in pixels, `position` in map units.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelCandidate {
    pub size: Vec2,
    pub position: Point,
    pub angle: f32,
    pub obb: OrientedBox,
    pub aabb: Aabb,
    pub offset: Vec2,
}

/// Fully computed placement for one segment. Either every field is valid
/// or the attempt carries no state at all; callers never see a partial
/// record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum PlacementState {
    Straight {
        position: Point,
        angle: f32,
    },
    Corner {
        position: Point,
        angles: [f32; 2],
        kink_index: usize,
        collapsed: [f32; 2],
    },
}

impl PlacementState {
    pub fn position(&self) -> Point {
        match *self {
            PlacementState::Straight { position, .. } => position,
            PlacementState::Corner { position, .. } => position,
        }
    }

    pub fn is_articulated(&self) -> bool {
        matches!(self, PlacementState::Corner { .. })
    }
}
