use crate::coords::Vec2;
use crate::paint::PackedColor;
use crate::texture::TextureId;

use super::DrawList;

/// Per-frame sink for primitive shapes.
///
/// This is the capability the primitive layer is written against. Implementations
/// accumulate geometry for GPU submission; they are borrowed for one frame and must
/// not be retained past it.
///
/// All coordinates are screen pixels, y down. Colors arrive already packed.
pub trait DrawTarget {
    fn add_line(&mut self, a: Vec2, b: Vec2, color: PackedColor, thickness: f32);

    /// Rectangle outline between `min` and `max`.
    fn add_rect(&mut self, min: Vec2, max: Vec2, color: PackedColor, rounding: f32, thickness: f32);

    fn add_rect_filled(&mut self, min: Vec2, max: Vec2, color: PackedColor);

    fn add_triangle_filled(&mut self, a: Vec2, b: Vec2, c: Vec2, color: PackedColor);

    /// Text run with its top-left at `pos`, in the host's current font.
    fn add_text(&mut self, pos: Vec2, color: PackedColor, text: &str);

    fn add_circle(&mut self, center: Vec2, radius: f32, color: PackedColor, segments: u32, thickness: f32);

    fn add_circle_filled(&mut self, center: Vec2, radius: f32, color: PackedColor, segments: u32);

    /// Axis-aligned image; `uv_min`/`uv_max` map onto `min`/`max`.
    fn add_image(&mut self, texture: TextureId, min: Vec2, max: Vec2, uv_min: Vec2, uv_max: Vec2);

    /// Free-form textured quad; `points[i]` samples `uvs[i]`.
    fn add_image_quad(&mut self, texture: TextureId, points: [Vec2; 4], uvs: [Vec2; 4]);
}

impl DrawTarget for DrawList {
    fn add_line(&mut self, a: Vec2, b: Vec2, color: PackedColor, thickness: f32) {
        self.push_line(a, b, color, thickness);
    }

    fn add_rect(&mut self, min: Vec2, max: Vec2, color: PackedColor, rounding: f32, thickness: f32) {
        self.push_rect_outline(min, max, color, rounding, thickness);
    }

    fn add_rect_filled(&mut self, min: Vec2, max: Vec2, color: PackedColor) {
        self.push_rect_filled(min, max, color);
    }

    fn add_triangle_filled(&mut self, a: Vec2, b: Vec2, c: Vec2, color: PackedColor) {
        self.push_triangle_filled([a, b, c], color);
    }

    fn add_text(&mut self, pos: Vec2, color: PackedColor, text: &str) {
        self.push_text(text, color, pos);
    }

    fn add_circle(&mut self, center: Vec2, radius: f32, color: PackedColor, segments: u32, thickness: f32) {
        self.push_circle_outline(center, radius, color, segments, thickness);
    }

    fn add_circle_filled(&mut self, center: Vec2, radius: f32, color: PackedColor, segments: u32) {
        self.push_circle_filled(center, radius, color, segments);
    }

    fn add_image(&mut self, texture: TextureId, min: Vec2, max: Vec2, uv_min: Vec2, uv_max: Vec2) {
        self.push_image(texture, min, max, uv_min, uv_max);
    }

    fn add_image_quad(&mut self, texture: TextureId, points: [Vec2; 4], uvs: [Vec2; 4]) {
        self.push_image_quad(texture, points, uvs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::DrawCmd;

    #[test]
    fn target_calls_record_in_order() {
        let mut list = DrawList::new();
        list.add_rect_filled(Vec2::zero(), Vec2::splat(4.0), PackedColor::BLACK);
        list.add_text(Vec2::new(1.0, 1.0), PackedColor::WHITE, "hp");

        assert_eq!(list.len(), 2);
        assert!(matches!(&list.items()[0], DrawCmd::Rect(r) if r.is_filled()));
        assert!(matches!(&list.items()[1], DrawCmd::Text(t) if t.text == "hp"));
    }

    #[test]
    fn outline_and_fill_share_payload() {
        let mut list = DrawList::new();
        list.add_rect(Vec2::zero(), Vec2::splat(4.0), PackedColor::WHITE, 0.0, 2.0);
        list.add_circle_filled(Vec2::zero(), 3.0, PackedColor::WHITE, 12);

        let mut cmds = list.commands();
        assert!(matches!(cmds.next(), Some(DrawCmd::Rect(r)) if r.stroke == Some(2.0) && !r.is_filled()));
        assert!(matches!(cmds.next(), Some(DrawCmd::Circle(c)) if c.is_filled() && c.segments == 12));
    }
}
