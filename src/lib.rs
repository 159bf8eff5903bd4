//! Label placement along map line features.
//!
//! Given a polyline in map units and a label's pixel size, this crate
//! decides where along the line the label can be anchored and whether it
//! has to articulate (split in two at a kink) to follow a bend. Each
//! accepted placement carries the oriented and axis-aligned bounding
//! boxes that downstream collision testing needs.
//!
//! ```
//! use glam::Vec2;
//! use linelabel::{LineLayout, LinePlacement};
//!
//! let road = [Vec2::new(0.0, 0.0), Vec2::new(120.0, 0.0)];
//! let placement = LinePlacement::new(Vec2::new(40.0, 12.0), &road, LineLayout::default());
//! assert!(!placement.is_discarded());
//! assert_eq!(placement.position(), Some(Vec2::new(60.0, 0.0)));
//! ```

pub mod config;
pub mod error;
pub mod geom;
pub mod group;
pub mod log;
pub mod placement;

pub use config::{LineLayout, Placement};
pub use error::LayoutError;
pub use geom::{Aabb, OrientedBox, Point};
pub use group::CandidateGroup;
pub use placement::{LabelCandidate, LinePlacement, SegmentMode};
