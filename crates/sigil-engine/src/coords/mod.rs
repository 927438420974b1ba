//! Coordinate and geometry types shared by the draw list and the primitive layer.
//!
//! Canonical CPU space:
//! - Screen pixels, same units as widget layout
//! - Origin top-left
//! - +X right, +Y down

mod color;
mod rect;
mod vec2;
mod vec3;

pub use color::ColorRgba;
pub use rect::Rect;
pub use vec2::Vec2;
pub use vec3::Vec3;
