//! Color packing shared between the primitive layer and draw targets.
//!
//! Draw targets only ever see [`PackedColor`]; float colors stay on the caller side.

mod packed;

pub use packed::PackedColor;
