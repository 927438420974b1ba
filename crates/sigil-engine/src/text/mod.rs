//! Text metrics.
//!
//! The primitive layer only needs the rendered extent of a string; it reaches the
//! host's font state through [`MeasureText`].

mod font_system;
mod measure;

pub use font_system::{FontId, FontLoadError, FontSystem};
pub use measure::{FontFace, MeasureText};
