//! Geometric fit tests: does a label (or a label split at a kink) have
//! room on its supporting segment(s)?

use crate::geom::Point;

/// Result of the corner split search: where the label breaks and how much
/// pixel width lands on each side of the kink.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct KinkFit {
    pub kink_index: usize,
    pub collapsed: [f32; 2],
}

/// Maps the allowed overrun percentage to a multiplier on segment length.
/// `line_exceed` of 0 requires the label to fit entirely; 50 allows the
/// label to be twice the segment.
pub(crate) fn excess_ratio(line_exceed: f32) -> f32 {
    100.0 / (100.0 - line_exceed)
}

/// True if a label of the given pixel width fits the segment `a -> b`.
pub(crate) fn fits_straight(
    label_width_px: f32,
    a: Point,
    b: Point,
    units_per_pixel: f32,
    excess: f32,
) -> bool {
    label_width_px * units_per_pixel < excess * (b - a).length()
}

/// Greedy split search for a corner segment `a -> b -> c`.
///
/// Starting with every piece on the leading side, pieces move one at a
/// time across the kink until both sides fit their sub-segment, or the
/// split point reaches the front of the label (no split works). Returns
/// `None` both for unsplittable labels and for bends whose direction
/// change would flip one piece upside-down.
pub(crate) fn fit_kinked(
    a: Point,
    b: Point,
    c: Point,
    segment_sizes: &[f32],
    units_per_pixel: f32,
    excess: f32,
) -> Option<KinkFit> {
    let v0 = b - a;
    let v1 = c - b;
    // A direction flip on one axis but not the other reads upside-down.
    let agree_x = v0.x * v1.x >= 0.0;
    let agree_y = v0.y * v1.y >= 0.0;
    if agree_x != agree_y {
        return None;
    }

    let len0 = v0.length();
    let len1 = v1.length();
    let total: f32 = segment_sizes.iter().sum();
    let mut leading = total;
    for kink in (1..segment_sizes.len()).rev() {
        leading -= segment_sizes[kink];
        let trailing = total - leading;
        if leading * units_per_pixel < excess * len0
            && trailing * units_per_pixel < excess * len1
        {
            return Some(KinkFit {
                kink_index: kink,
                collapsed: [leading, trailing],
            });
        }
    }
    None
}
