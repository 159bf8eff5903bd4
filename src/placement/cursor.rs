use crate::config::{LineLayout, Placement};
use crate::geom::Point;

/// Placement mode the cursor is currently evaluating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentMode {
    Straight,
    Corner,
}

/// One logical placement segment pulled from the line: two points for a
/// straight run, three for a corner (the middle point is the kink vertex).
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Segment {
    Straight { a: Point, b: Point },
    Corner { a: Point, b: Point, c: Point },
}

/// Walks a polyline one placement candidate at a time, alternating between
/// corner and straight modes when articulation is enabled.
///
/// The cursor is restricted to the point range `[start, end)` resolved from
/// the layout. `advance` from a corner always falls back to the straight
/// segment at the same index before moving on; `advance` from a straight
/// segment moves to the next index (and to corner mode first, when corners
/// are in play).
#[derive(Debug, Clone)]
pub(crate) struct SegmentCursor<'a> {
    points: &'a [Point],
    start: usize,
    end: usize,
    index: usize,
    mode: SegmentMode,
    corners_enabled: bool,
}

impl<'a> SegmentCursor<'a> {
    pub fn new(points: &'a [Point], layout: &LineLayout) -> Self {
        let (start, end) = layout.segment_range(points.len());
        let corners_enabled = layout.articulated && layout.segment_sizes.len() > 1;
        let (mode, index) = match layout.placement {
            Placement::MidPoint => (SegmentMode::Straight, start),
            // A corner needs a point on each side of the vertex.
            Placement::Corner => (SegmentMode::Corner, start.max(1)),
        };
        Self {
            points,
            start,
            end,
            index,
            mode,
            corners_enabled,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn mode(&self) -> SegmentMode {
        self.mode
    }

    /// Extract the segment at the cursor, or `None` if the current
    /// index/mode cannot produce one inside the allowed range.
    pub fn current(&self) -> Option<Segment> {
        if self.index < self.start || self.index + 1 >= self.end {
            return None;
        }
        match self.mode {
            SegmentMode::Straight => Some(Segment::Straight {
                a: self.points[self.index],
                b: self.points[self.index + 1],
            }),
            SegmentMode::Corner => {
                if self.index == 0 {
                    return None;
                }
                Some(Segment::Corner {
                    a: self.points[self.index - 1],
                    b: self.points[self.index],
                    c: self.points[self.index + 1],
                })
            }
        }
    }

    /// Step to the next placement position. Returns `false` once the line
    /// is exhausted.
    pub fn advance(&mut self) -> bool {
        match self.mode {
            SegmentMode::Corner => {
                // A tried corner falls back to the straight segment at the
                // same index before the cursor moves on.
                self.mode = SegmentMode::Straight;
                true
            }
            SegmentMode::Straight => {
                if self.index + 2 >= self.end {
                    return false;
                }
                if self.corners_enabled {
                    self.mode = SegmentMode::Corner;
                }
                self.index += 1;
                true
            }
        }
    }
}
