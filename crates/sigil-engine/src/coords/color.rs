use crate::paint::PackedColor;

/// Straight-alpha RGBA color with components in `[0, 1]`.
///
/// The drawing layer treats this as opaque input: it is packed with
/// [`ColorRgba::pack`] right before reaching a draw target and never blended on the CPU.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ColorRgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl ColorRgba {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn transparent() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    #[inline]
    pub const fn black() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    #[inline]
    pub const fn white() -> Self {
        Self::new(1.0, 1.0, 1.0, 1.0)
    }

    /// Converts to the host's packed 32-bit representation.
    #[inline]
    pub fn pack(self) -> PackedColor {
        PackedColor::from(self)
    }
}
