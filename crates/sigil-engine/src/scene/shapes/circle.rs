use crate::coords::Vec2;
use crate::paint::PackedColor;
use crate::scene::{DrawCmd, DrawList};

/// Polygon-approximated circle payload.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleCmd {
    pub center: Vec2,
    pub radius: f32,
    pub color: PackedColor,
    /// Number of polygon edges used to tessellate the circle.
    pub segments: u32,
    /// Outline thickness. `None` = filled.
    pub stroke: Option<f32>,
}

impl CircleCmd {
    #[inline]
    pub fn is_filled(&self) -> bool {
        self.stroke.is_none()
    }
}

impl DrawList {
    /// Records a circle outline.
    #[inline]
    pub fn push_circle_outline(
        &mut self,
        center: Vec2,
        radius: f32,
        color: PackedColor,
        segments: u32,
        thickness: f32,
    ) {
        self.push(DrawCmd::Circle(CircleCmd { center, radius, color, segments, stroke: Some(thickness) }));
    }

    /// Records a filled circle.
    #[inline]
    pub fn push_circle_filled(
        &mut self,
        center: Vec2,
        radius: f32,
        color: PackedColor,
        segments: u32,
    ) {
        self.push(DrawCmd::Circle(CircleCmd { center, radius, color, segments, stroke: None }));
    }
}
