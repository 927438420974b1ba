use crate::coords::Vec2;
use crate::paint::PackedColor;
use crate::scene::{DrawCmd, DrawList};

/// Filled triangle payload.
#[derive(Debug, Clone, PartialEq)]
pub struct TriangleCmd {
    pub points: [Vec2; 3],
    pub color: PackedColor,
}

impl DrawList {
    #[inline]
    pub fn push_triangle_filled(&mut self, points: [Vec2; 3], color: PackedColor) {
        self.push(DrawCmd::Triangle(TriangleCmd { points, color }));
    }
}
