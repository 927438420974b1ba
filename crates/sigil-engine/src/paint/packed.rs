use bytemuck::{Pod, Zeroable};

use crate::coords::ColorRgba;

/// 32-bit packed color, `0xAABBGGRR` (red in the low byte).
///
/// This is the layout GPU vertex buffers consume as `Unorm8x4`.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Pod, Zeroable)]
pub struct PackedColor(pub u32);

impl PackedColor {
    pub const TRANSPARENT: Self = Self(0);
    pub const BLACK: Self = Self(0xFF00_0000);
    pub const WHITE: Self = Self(0xFFFF_FFFF);

    #[inline]
    pub const fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self((a as u32) << 24 | (b as u32) << 16 | (g as u32) << 8 | r as u32)
    }

    #[inline]
    pub const fn r(self) -> u8 {
        self.0 as u8
    }

    #[inline]
    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn b(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn a(self) -> u8 {
        (self.0 >> 24) as u8
    }
}

/// Saturates to `[0, 1]` and rounds to the nearest byte. NaN maps to 0.
#[inline]
fn unit_to_u8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0 + 0.5) as u8
}

impl From<ColorRgba> for PackedColor {
    #[inline]
    fn from(c: ColorRgba) -> Self {
        Self::from_rgba_u8(unit_to_u8(c.r), unit_to_u8(c.g), unit_to_u8(c.b), unit_to_u8(c.a))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_white_packs_to_all_ones() {
        assert_eq!(ColorRgba::white().pack(), PackedColor::WHITE);
    }

    #[test]
    fn red_lands_in_low_byte() {
        let c = ColorRgba::new(1.0, 0.0, 0.0, 1.0).pack();
        assert_eq!(c.0, 0xFF00_00FF);
        assert_eq!((c.r(), c.g(), c.b(), c.a()), (255, 0, 0, 255));
    }

    #[test]
    fn out_of_range_channels_saturate() {
        let c = ColorRgba::new(2.0, -1.0, 0.5, 1.5).pack();
        assert_eq!((c.r(), c.g(), c.b(), c.a()), (255, 0, 128, 255));
    }

    #[test]
    fn nan_channel_packs_to_zero() {
        assert_eq!(ColorRgba::new(f32::NAN, 0.0, 0.0, 0.0).pack(), PackedColor::TRANSPARENT);
    }
}
