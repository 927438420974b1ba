use crate::coords::Vec2;
use crate::paint::PackedColor;
use crate::scene::{DrawCmd, DrawList};

/// Rectangle payload, given by its two opposite corners.
#[derive(Debug, Clone, PartialEq)]
pub struct RectCmd {
    pub min: Vec2,
    pub max: Vec2,
    pub color: PackedColor,
    pub rounding: f32,
    /// Outline thickness. `None` = filled.
    pub stroke: Option<f32>,
}

impl RectCmd {
    #[inline]
    pub fn is_filled(&self) -> bool {
        self.stroke.is_none()
    }
}

impl DrawList {
    /// Records a rectangle outline.
    #[inline]
    pub fn push_rect_outline(
        &mut self,
        min: Vec2,
        max: Vec2,
        color: PackedColor,
        rounding: f32,
        thickness: f32,
    ) {
        self.push(DrawCmd::Rect(RectCmd { min, max, color, rounding, stroke: Some(thickness) }));
    }

    /// Records a filled, square-cornered rectangle.
    #[inline]
    pub fn push_rect_filled(&mut self, min: Vec2, max: Vec2, color: PackedColor) {
        self.push(DrawCmd::Rect(RectCmd { min, max, color, rounding: 0.0, stroke: None }));
    }
}
