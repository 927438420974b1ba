//! Sigil engine crate.
//!
//! Host-side model for the drawing layer: geometry, color packing, texture handles,
//! the [`scene::DrawTarget`] capability with a recording [`scene::DrawList`], and
//! text metrics.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod scene;
pub mod text;
pub mod texture;
