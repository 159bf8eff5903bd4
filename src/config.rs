use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

/// Where an attempt starts looking for room on the line.
///
/// `MidPoint` walks straight segments first; `Corner` starts at line
/// vertices and tries articulated placement before falling back to the
/// straight segment at the same index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    MidPoint,
    Corner,
}

impl Default for Placement {
    fn default() -> Self {
        Placement::MidPoint
    }
}

/// Layout options for one line label.
///
/// All fields have defaults, so partial JSON configs deserialize cleanly.
/// The struct is a plain value: every placement attempt along a line gets
/// its own copy, and nothing here is mutated during placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineLayout {
    pub placement: Placement,
    /// Per-piece pixel widths used when splitting the label across a kink.
    /// A label that can never articulate may leave this empty.
    pub segment_sizes: Vec<f32>,
    /// Controls the gap pushed between the two pieces at a kink.
    pub spread_factor: f32,
    /// Permits corner (kinked) placement at all.
    pub articulated: bool,
    /// First usable point index of the polyline.
    #[serde(alias = "segment_index")]
    pub segment_start: usize,
    /// One past the last usable point index; `None` means the end of the line.
    pub segment_end: Option<usize>,
    /// Percentage by which the label may overrun its segment, 0-100.
    pub line_exceed: f32,
    /// Conversion factor from label pixels to map units.
    pub units_per_pixel: f32,
    /// Collision padding around the label, in pixels per axis.
    pub buffer: [f32; 2],
    /// Pixel offset applied to the label before rotation.
    pub offset: [f32; 2],
}

impl Default for LineLayout {
    fn default() -> Self {
        Self {
            placement: Placement::default(),
            segment_sizes: Vec::new(),
            spread_factor: 0.5,
            articulated: true,
            segment_start: 0,
            segment_end: None,
            line_exceed: 0.0,
            units_per_pixel: 1.0,
            buffer: [0.0, 0.0],
            offset: [0.0, 0.0],
        }
    }
}

impl LineLayout {
    /// Parse a layout from JSON, then validate it.
    pub fn from_json(source: &str) -> Result<Self, LayoutError> {
        let layout: LineLayout = serde_json::from_str(source)?;
        layout.validate()?;
        Ok(layout)
    }

    /// Check option ranges that would break the fit arithmetic.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if !(0.0..100.0).contains(&self.line_exceed) {
            return Err(LayoutError::InvalidLineExceed(self.line_exceed));
        }
        if !(self.units_per_pixel > 0.0) {
            return Err(LayoutError::InvalidUnitsPerPixel(self.units_per_pixel));
        }
        if self.spread_factor < 0.0 {
            return Err(LayoutError::InvalidSpreadFactor(self.spread_factor));
        }
        if let Some(&bad) = self.segment_sizes.iter().find(|size| **size < 0.0) {
            return Err(LayoutError::InvalidSegmentSize(bad));
        }
        Ok(())
    }

    /// Resolve the usable point range against a concrete polyline.
    /// Returns `(start, end)` with `end` clamped to the point count.
    pub(crate) fn segment_range(&self, point_count: usize) -> (usize, usize) {
        let end = self
            .segment_end
            .map(|end| end.min(point_count))
            .unwrap_or(point_count);
        (self.segment_start, end)
    }

    /// Sum of all articulation piece widths, in pixels.
    pub(crate) fn total_segment_size(&self) -> f32 {
        self.segment_sizes.iter().sum()
    }
}
