use thiserror::Error;

/// Errors raised while building or loading a layout configuration.
///
/// Placement itself never errors: geometry that cannot carry a label is a
/// normal outcome, reported through the attempt's discard flag.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("line_exceed must be in [0, 100), got {0}")]
    InvalidLineExceed(f32),
    #[error("units_per_pixel must be positive, got {0}")]
    InvalidUnitsPerPixel(f32),
    #[error("spread_factor must be non-negative, got {0}")]
    InvalidSpreadFactor(f32),
    #[error("segment_sizes must not contain negative widths, got {0}")]
    InvalidSegmentSize(f32),
    #[error("invalid layout JSON: {0}")]
    Json(#[from] serde_json::Error),
}
