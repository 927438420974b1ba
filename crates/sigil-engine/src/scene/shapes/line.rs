use crate::coords::Vec2;
use crate::paint::PackedColor;
use crate::scene::{DrawCmd, DrawList};

/// Straight segment payload.
#[derive(Debug, Clone, PartialEq)]
pub struct LineCmd {
    pub a: Vec2,
    pub b: Vec2,
    pub color: PackedColor,
    pub thickness: f32,
}

impl DrawList {
    /// Records a line segment.
    #[inline]
    pub fn push_line(&mut self, a: Vec2, b: Vec2, color: PackedColor, thickness: f32) {
        self.push(DrawCmd::Line(LineCmd { a, b, color, thickness }));
    }
}
