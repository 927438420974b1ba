use super::Vec2;

/// 3D position, typically a world-to-screen projection result.
///
/// Only `x`/`y` are meaningful to the 2D draw list; `z` is carried so callers can
/// pass projection output straight through.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Drops the depth component.
    #[inline]
    pub const fn truncate(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}
