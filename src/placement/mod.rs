//! Line label placement.
//!
//! A [`LinePlacement`] is one attempt to anchor a label somewhere on a
//! polyline. Construction immediately walks the line from the configured
//! starting segment until a segment passes the fit and angle tests; if
//! none does, the attempt is discarded. [`LinePlacement::advance`]
//! produces the next placement further along the same line, which is how
//! long roads get labelled repeatedly.

mod angle;
mod boxes;
mod cursor;
mod fit;
mod types;

pub use cursor::SegmentMode;
pub use types::LabelCandidate;

use glam::Vec2;

use crate::config::LineLayout;
use crate::geom::Point;
use cursor::{Segment, SegmentCursor};
use types::PlacementState;

/// One placement attempt along a polyline.
///
/// The polyline is shared by reference across attempts; the layout is
/// copied per attempt. After construction, check [`is_discarded`] before
/// reading any other accessor.
///
/// [`is_discarded`]: LinePlacement::is_discarded
#[derive(Debug, Clone)]
pub struct LinePlacement<'a> {
    points: &'a [Point],
    size: Vec2,
    layout: LineLayout,
    cursor: SegmentCursor<'a>,
    state: Option<PlacementState>,
    candidates: Vec<LabelCandidate>,
}

impl<'a> LinePlacement<'a> {
    /// Start a placement attempt for a label of `size` pixels on `points`.
    ///
    /// The attempt searches from the layout's starting segment and mode.
    /// A discarded attempt is still returned (so the caller can inspect
    /// the flag), it just carries no candidates.
    pub fn new(size: Vec2, points: &'a [Point], layout: LineLayout) -> Self {
        let cursor = SegmentCursor::new(points, &layout);
        Self::seeded(size, points, layout, cursor)
    }

    fn seeded(
        size: Vec2,
        points: &'a [Point],
        layout: LineLayout,
        mut cursor: SegmentCursor<'a>,
    ) -> Self {
        let mut state = None;
        let mut candidates = Vec::new();
        // Each index is visited at most twice (corner, then straight), so
        // this bound covers the whole line with room to spare.
        let max_steps = 2 * points.len() + 2;
        for _ in 0..max_steps {
            let evaluated = cursor
                .current()
                .and_then(|segment| evaluate_segment(segment, size, &layout));
            if let Some((placed, built)) = evaluated {
                crate::log::debug!(
                    index = cursor.index(),
                    articulated = placed.is_articulated(),
                    "label placed"
                );
                state = Some(placed);
                candidates = built;
                break;
            }
            if !cursor.advance() {
                crate::log::debug!("line exhausted without a fitting segment");
                break;
            }
        }
        Self {
            points,
            size,
            layout,
            cursor,
            state,
            candidates,
        }
    }

    /// Produce the next placement along the same line, or `None` once the
    /// line has no further room. The new attempt inherits the label size
    /// and a copy of the layout, and continues from the segment after
    /// this one.
    pub fn advance(&self) -> Option<LinePlacement<'a>> {
        self.state?;
        let mut cursor = self.cursor.clone();
        if !cursor.advance() {
            return None;
        }
        let next = Self::seeded(self.size, self.points, self.layout.clone(), cursor);
        if next.is_discarded() { None } else { Some(next) }
    }

    /// True if no segment in the allowed range could carry the label.
    pub fn is_discarded(&self) -> bool {
        self.state.is_none()
    }

    /// The candidates produced by this attempt: one for a straight
    /// placement, two for an articulated corner, none when discarded.
    pub fn candidates(&self) -> &[LabelCandidate] {
        &self.candidates
    }

    /// Anchor position in map units.
    pub fn position(&self) -> Option<Point> {
        self.state.map(|state| state.position())
    }

    /// Orientation angle(s): one entry for straight placements, two for
    /// corners.
    pub fn angles(&self) -> Vec<f32> {
        match self.state {
            Some(PlacementState::Straight { angle, .. }) => vec![angle],
            Some(PlacementState::Corner { angles, .. }) => angles.to_vec(),
            None => Vec::new(),
        }
    }

    /// First orientation angle, the usual accessor for straight labels.
    pub fn angle(&self) -> Option<f32> {
        self.angles().first().copied()
    }

    /// True if this placement bends the label across a kink.
    pub fn is_articulated(&self) -> bool {
        self.state.map(|state| state.is_articulated()).unwrap_or(false)
    }

    /// Split position within the layout's `segment_sizes`, corner only.
    pub fn kink_index(&self) -> Option<usize> {
        match self.state {
            Some(PlacementState::Corner { kink_index, .. }) => Some(kink_index),
            _ => None,
        }
    }

    /// Aggregated pixel widths on each side of the kink, corner only.
    pub fn collapsed_sizes(&self) -> Option<[f32; 2]> {
        match self.state {
            Some(PlacementState::Corner { collapsed, .. }) => Some(collapsed),
            _ => None,
        }
    }

    /// Line index of the segment carrying this placement.
    pub fn segment_index(&self) -> usize {
        self.cursor.index()
    }

    /// Mode of the segment carrying this placement.
    pub fn segment_mode(&self) -> SegmentMode {
        self.cursor.mode()
    }

    /// Label size in pixels, as given at construction.
    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// The layout this attempt was computed with.
    pub fn layout(&self) -> &LineLayout {
        &self.layout
    }
}

/// Run one segment through the fit, angle, and box stages. Returns the
/// fully populated state and candidates, or `None` if any stage rejects.
fn evaluate_segment(
    segment: Segment,
    size: Vec2,
    layout: &LineLayout,
) -> Option<(PlacementState, Vec<LabelCandidate>)> {
    let excess = fit::excess_ratio(layout.line_exceed);
    match segment {
        Segment::Straight { a, b } => {
            if !fit::fits_straight(size.x, a, b, layout.units_per_pixel, excess) {
                return None;
            }
            let theta = angle::segment_angle(a, b);
            let position = (a + b) * 0.5;
            let candidate = boxes::straight_candidate(size, position, theta, layout);
            Some((
                PlacementState::Straight {
                    position,
                    angle: theta,
                },
                vec![candidate],
            ))
        }
        Segment::Corner { a, b, c } => {
            let angles = angle::corner_angles(a, b, c);
            if !angle::corner_is_open(angles) {
                crate::log::debug!("corner rejected by angle bound");
                return None;
            }
            let fitted = fit::fit_kinked(
                a,
                b,
                c,
                &layout.segment_sizes,
                layout.units_per_pixel,
                excess,
            )?;
            let candidates = boxes::corner_candidates(size, b, angles, fitted.collapsed, layout);
            Some((
                PlacementState::Corner {
                    position: b,
                    angles,
                    kink_index: fitted.kink_index,
                    collapsed: fitted.collapsed,
                },
                candidates,
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Placement;

    fn long_line() -> Vec<Point> {
        vec![Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0)]
    }

    #[test]
    fn straight_placement_lands_on_midpoint() {
        let points = long_line();
        let placement = LinePlacement::new(Vec2::new(10.0, 4.0), &points, LineLayout::default());
        assert!(!placement.is_discarded());
        assert_eq!(placement.position(), Some(Vec2::new(50.0, 0.0)));
        assert_eq!(placement.angle(), Some(0.0));
        assert_eq!(placement.candidates().len(), 1);
        assert!(!placement.is_articulated());
    }

    #[test]
    fn oversized_label_is_discarded() {
        let points = long_line();
        let placement = LinePlacement::new(Vec2::new(200.0, 4.0), &points, LineLayout::default());
        assert!(placement.is_discarded());
        assert!(placement.candidates().is_empty());
        assert_eq!(placement.position(), None);
    }

    #[test]
    fn discarded_attempt_cannot_advance() {
        let points = long_line();
        let placement = LinePlacement::new(Vec2::new(200.0, 4.0), &points, LineLayout::default());
        assert!(placement.advance().is_none());
    }

    #[test]
    fn corner_placement_produces_paired_candidates() {
        let points = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(50.0, 0.0),
            Vec2::new(50.0, 50.0),
        ];
        let layout = LineLayout {
            placement: Placement::Corner,
            segment_sizes: vec![5.0, 5.0],
            ..Default::default()
        };
        let placement = LinePlacement::new(Vec2::new(10.0, 4.0), &points, layout);
        assert!(!placement.is_discarded());
        assert!(placement.is_articulated());
        assert_eq!(placement.candidates().len(), 2);
        assert_eq!(placement.position(), Some(Vec2::new(50.0, 0.0)));
        assert_eq!(placement.kink_index(), Some(1));
        assert_eq!(placement.collapsed_sizes(), Some([5.0, 5.0]));
        assert_eq!(placement.angles().len(), 2);
    }

    #[test]
    fn closed_corner_falls_back_to_straight() {
        // Near-reversal: corner is rejected, the straight segment at the
        // same index still fits.
        let points = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 100.0),
            Vec2::new(0.0, 2.0),
        ];
        let layout = LineLayout {
            placement: Placement::Corner,
            segment_sizes: vec![5.0, 5.0],
            ..Default::default()
        };
        let placement = LinePlacement::new(Vec2::new(10.0, 4.0), &points, layout);
        assert!(!placement.is_discarded());
        assert!(!placement.is_articulated(), "reversal must not articulate");
        assert_eq!(placement.segment_mode(), SegmentMode::Straight);
        assert_eq!(placement.segment_index(), 1);
    }

    #[test]
    fn advance_walks_the_whole_line_then_stops() {
        let points: Vec<Point> = (0..6).map(|i| Vec2::new(i as f32 * 50.0, 0.0)).collect();
        let layout = LineLayout {
            articulated: false,
            ..Default::default()
        };
        let mut count = 0;
        let mut placement = Some(LinePlacement::new(Vec2::new(10.0, 4.0), &points, layout));
        while let Some(current) = placement {
            assert!(!current.is_discarded());
            count += 1;
            placement = current.advance();
        }
        assert_eq!(count, 5, "one placement per straight segment");
    }

    #[test]
    fn advance_inherits_size_and_layout() {
        let points: Vec<Point> = (0..4).map(|i| Vec2::new(i as f32 * 50.0, 0.0)).collect();
        let layout = LineLayout {
            line_exceed: 10.0,
            ..Default::default()
        };
        let first = LinePlacement::new(Vec2::new(10.0, 4.0), &points, layout.clone());
        let second = first.advance().expect("room for a second placement");
        assert_eq!(second.size(), first.size());
        assert_eq!(second.layout(), &layout);
        assert!(second.segment_index() > first.segment_index());
    }

    #[test]
    fn recomputing_from_same_inputs_is_bit_identical() {
        let points = vec![
            Vec2::new(3.0, 7.0),
            Vec2::new(41.0, 13.0),
            Vec2::new(90.0, 55.0),
        ];
        let layout = LineLayout {
            segment_sizes: vec![4.0, 6.0],
            offset: [1.0, -2.0],
            ..Default::default()
        };
        let a = LinePlacement::new(Vec2::new(10.0, 4.0), &points, layout.clone());
        let b = LinePlacement::new(Vec2::new(10.0, 4.0), &points, layout);
        assert_eq!(a.position(), b.position());
        assert_eq!(a.angles(), b.angles());
        assert_eq!(a.candidates(), b.candidates());
    }
}
