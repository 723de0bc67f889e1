//! Aperture Geometry — value types for image and sensor coordinate spaces.
//!
//! Points, sizes, size ranges and rectangles used by crop negotiation,
//! scaling and stream configuration. Pure values, no device or buffer
//! knowledge.

pub mod error;
pub mod point;
pub mod rectangle;
pub mod size;
pub mod size_range;

// Re-exports for convenience.
pub use error::GeometryError;
pub use point::Point;
pub use rectangle::Rectangle;
pub use size::Size;
pub use size_range::SizeRange;
