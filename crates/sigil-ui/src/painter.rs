use sigil_engine::coords::{ColorRgba, Rect, Vec2, Vec3};
use sigil_engine::scene::DrawTarget;
use sigil_engine::text::MeasureText;
use sigil_engine::texture::TextureId;

use crate::geometry::{centered_origin, clamp_corner_len, rotated_corners};

/// Default outline thickness in pixels.
pub const DEFAULT_STROKE: f32 = 1.0;
/// Default corner-bracket arm length in pixels.
pub const DEFAULT_CORNER_LEN: f32 = 10.0;
/// Default number of edges for polygon circles.
pub const DEFAULT_CIRCLE_SEGMENTS: u32 = 12;

/// Offset of the one-pixel drop shadow drawn under outlined text.
const TEXT_SHADOW_OFFSET: Vec2 = Vec2::new(1.0, 1.0);

/// UVs for the four corners of a full texture, in corner order.
const FULL_QUAD_UVS: [Vec2; 4] = [
    Vec2::new(0.0, 0.0),
    Vec2::new(1.0, 0.0),
    Vec2::new(1.0, 1.0),
    Vec2::new(0.0, 1.0),
];

/// Stateless drawing helpers over a host [`DrawTarget`].
///
/// A painter borrows the frame's draw target and text metrics; it holds nothing
/// else, so every call's output depends only on its arguments.
///
/// Geometry is never validated: negative sizes and degenerate shapes are forwarded
/// as-is. The only skipped inputs are null textures and triangles with fewer than
/// three points.
///
/// # Example
/// ```rust,ignore
/// let mut painter = Painter::new(&mut draw_list, &face);
/// painter.corner_rect(bbox, ColorRgba::white(), DEFAULT_STROKE, DEFAULT_CORNER_LEN);
/// painter.text_centered(bbox, "target", ColorRgba::white(), true);
/// ```
pub struct Painter<'a> {
    target: &'a mut dyn DrawTarget,
    metrics: &'a dyn MeasureText,
}

impl<'a> Painter<'a> {
    pub fn new(target: &'a mut dyn DrawTarget, metrics: &'a dyn MeasureText) -> Self {
        Self { target, metrics }
    }

    // ── rectangles ────────────────────────────────────────────────────────

    /// Unfilled, square-cornered rectangle.
    pub fn rect(&mut self, rect: Rect, color: ColorRgba, stroke: f32) {
        self.target.add_rect(rect.min(), rect.max(), color.pack(), 0.0, stroke);
    }

    /// Filled rectangle.
    pub fn fill_rect(&mut self, rect: Rect, color: ColorRgba) {
        self.target.add_rect_filled(rect.min(), rect.max(), color.pack());
    }

    /// Draws only the four corners of `rect` as open brackets.
    ///
    /// Emits eight lines, two per corner, each starting at the corner. `corner_len` is
    /// clamped to half the width and half the height.
    pub fn corner_rect(&mut self, rect: Rect, color: ColorRgba, stroke: f32, corner_len: f32) {
        let col = color.pack();
        let len = clamp_corner_len(rect, corner_len);
        let (x1, y1) = (rect.min().x, rect.min().y);
        let (x2, y2) = (rect.max().x, rect.max().y);

        let arms = [
            // top-left
            ((x1, y1), (x1 + len, y1)),
            ((x1, y1), (x1, y1 + len)),
            // top-right
            ((x2, y1), (x2 - len, y1)),
            ((x2, y1), (x2, y1 + len)),
            // bottom-left
            ((x1, y2), (x1 + len, y2)),
            ((x1, y2), (x1, y2 - len)),
            // bottom-right
            ((x2, y2), (x2 - len, y2)),
            ((x2, y2), (x2, y2 - len)),
        ];

        for ((ax, ay), (bx, by)) in arms {
            self.target.add_line(Vec2::new(ax, ay), Vec2::new(bx, by), col, stroke);
        }
    }

    // ── polygons ──────────────────────────────────────────────────────────

    /// Filled triangle from the first three `points`. Fewer than three is a no-op.
    pub fn triangle(&mut self, points: &[Vec2], color: ColorRgba) {
        let [a, b, c, ..] = points else {
            log::trace!("triangle skipped: {} point(s)", points.len());
            return;
        };
        self.target.add_triangle_filled(*a, *b, *c, color.pack());
    }

    pub fn line(&mut self, a: Vec2, b: Vec2, color: ColorRgba, thickness: f32) {
        self.target.add_line(a, b, color.pack(), thickness);
    }

    /// Line between projected points; depth is discarded.
    pub fn line_3d(&mut self, a: Vec3, b: Vec3, color: ColorRgba, thickness: f32) {
        self.line(a.truncate(), b.truncate(), color, thickness);
    }

    pub fn circle(&mut self, center: Vec2, radius: f32, color: ColorRgba, thickness: f32, segments: u32) {
        self.target.add_circle(center, radius, color.pack(), segments, thickness);
    }

    pub fn fill_circle(&mut self, center: Vec2, radius: f32, color: ColorRgba, segments: u32) {
        self.target.add_circle_filled(center, radius, color.pack(), segments);
    }

    // ── text ──────────────────────────────────────────────────────────────

    /// Text with its top-left at `pos`.
    ///
    /// With `outline`, a black copy is drawn first one pixel down-right, which reads
    /// as a drop shadow behind the colored text.
    pub fn text(&mut self, pos: Vec2, text: &str, color: ColorRgba, outline: bool) {
        if outline {
            self.target.add_text(pos + TEXT_SHADOW_OFFSET, ColorRgba::black().pack(), text);
        }
        self.target.add_text(pos, color.pack(), text);
    }

    /// Text centered in `rect` using the host's measured extent.
    pub fn text_centered(&mut self, rect: Rect, text: &str, color: ColorRgba, outline: bool) {
        let size = self.metrics.measure_text(text);
        self.text(centered_origin(rect, size), text, color, outline);
    }

    // ── images ────────────────────────────────────────────────────────────

    /// Whole texture stretched over `rect`. Null textures are skipped.
    pub fn image(&mut self, texture: TextureId, rect: Rect) {
        self.sprite(texture, rect, Vec2::zero(), Vec2::splat(1.0));
    }

    /// Sub-region `uv_min..uv_max` of the texture stretched over `rect`.
    /// Null textures are skipped.
    pub fn sprite(&mut self, texture: TextureId, rect: Rect, uv_min: Vec2, uv_max: Vec2) {
        if texture.is_null() {
            log::trace!("image skipped: null texture");
            return;
        }
        self.target.add_image(texture, rect.min(), rect.max(), uv_min, uv_max);
    }

    /// Whole texture on `rect` rotated by `angle` radians about its center.
    /// Null textures are skipped.
    pub fn image_rotated(&mut self, texture: TextureId, rect: Rect, angle: f32) {
        if texture.is_null() {
            log::trace!("rotated image skipped: null texture");
            return;
        }
        self.target.add_image_quad(texture, rotated_corners(rect, angle), FULL_QUAD_UVS);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f32::consts::FRAC_PI_6;
    use sigil_engine::paint::PackedColor;
    use sigil_engine::scene::{DrawCmd, DrawList};

    use crate::geometry::signed_area2;

    const RED: ColorRgba = ColorRgba::new(1.0, 0.0, 0.0, 1.0);

    fn fixed_metrics(_: &str) -> Vec2 {
        Vec2::new(40.0, 10.0)
    }

    /// Runs `f` against a fresh painter and returns what it recorded.
    fn record(f: impl FnOnce(&mut Painter<'_>)) -> DrawList {
        let mut list = DrawList::new();
        let metrics = fixed_metrics;
        f(&mut Painter::new(&mut list, &metrics));
        list
    }

    fn texts(list: &DrawList) -> Vec<(Vec2, PackedColor)> {
        list.commands()
            .filter_map(|c| match c {
                DrawCmd::Text(t) => Some((t.origin, t.color)),
                _ => None,
            })
            .collect()
    }

    // ── rectangles ────────────────────────────────────────────────────────

    #[test]
    fn rect_emits_single_square_outline() {
        let list = record(|p| p.rect(Rect::new(10.0, 20.0, 30.0, 40.0), RED, 2.0));
        assert_eq!(list.len(), 1);
        let DrawCmd::Rect(r) = &list.items()[0] else { panic!("expected rect") };
        assert_eq!((r.min, r.max), (Vec2::new(10.0, 20.0), Vec2::new(40.0, 60.0)));
        assert_eq!(r.rounding, 0.0);
        assert_eq!(r.stroke, Some(2.0));
        assert_eq!(r.color, RED.pack());
    }

    #[test]
    fn negative_size_is_forwarded() {
        let list = record(|p| p.fill_rect(Rect::new(10.0, 10.0, -5.0, -5.0), RED));
        let DrawCmd::Rect(r) = &list.items()[0] else { panic!("expected rect") };
        assert!(r.is_filled());
        assert_eq!(r.max, Vec2::new(5.0, 5.0));
    }

    #[test]
    fn corner_rect_draws_eight_clamped_arms() {
        let rect = Rect::new(0.0, 0.0, 100.0, 12.0);
        let list = record(|p| p.corner_rect(rect, RED, DEFAULT_STROKE, DEFAULT_CORNER_LEN));
        let lines: Vec<_> = list
            .commands()
            .map(|c| match c {
                DrawCmd::Line(l) => l.clone(),
                other => panic!("unexpected {other:?}"),
            })
            .collect();

        assert_eq!(lines.len(), 8);
        for l in &lines {
            assert!((l.a.distance(l.b) - 6.0).abs() < 1e-5);
            assert_eq!(l.thickness, DEFAULT_STROKE);
        }
        let starts: Vec<Vec2> = lines.iter().map(|l| l.a).collect();
        assert_eq!(starts[0], Vec2::new(0.0, 0.0));
        assert_eq!(starts[2], Vec2::new(100.0, 0.0));
        assert_eq!(starts[4], Vec2::new(0.0, 12.0));
        assert_eq!(starts[7], Vec2::new(100.0, 12.0));
        assert_eq!(lines[7].b, Vec2::new(100.0, 6.0));
    }

    // ── polygons ──────────────────────────────────────────────────────────

    #[test]
    fn triangle_needs_three_points() {
        let pts = [Vec2::new(0.0, 0.0), Vec2::new(4.0, 0.0)];
        assert!(record(|p| p.triangle(&pts, RED)).is_empty());
        assert!(record(|p| p.triangle(&[], RED)).is_empty());
    }

    #[test]
    fn triangle_uses_first_three_points() {
        let pts = [
            Vec2::new(0.0, 0.0),
            Vec2::new(4.0, 0.0),
            Vec2::new(0.0, 4.0),
            Vec2::new(9.0, 9.0),
        ];
        let list = record(|p| p.triangle(&pts, RED));
        assert_eq!(list.len(), 1);
        let DrawCmd::Triangle(t) = &list.items()[0] else { panic!("expected triangle") };
        assert_eq!(t.points, [pts[0], pts[1], pts[2]]);
    }

    #[test]
    fn line_3d_drops_depth() {
        let list = record(|p| {
            p.line_3d(Vec3::new(1.0, 2.0, 50.0), Vec3::new(3.0, 4.0, -7.0), RED, 1.5)
        });
        let DrawCmd::Line(l) = &list.items()[0] else { panic!("expected line") };
        assert_eq!((l.a, l.b, l.thickness), (Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0), 1.5));
    }

    #[test]
    fn circles_forward_segments() {
        let list = record(|p| {
            p.circle(Vec2::new(5.0, 5.0), 3.0, RED, 2.0, DEFAULT_CIRCLE_SEGMENTS);
            p.fill_circle(Vec2::new(5.0, 5.0), 3.0, RED, 32);
        });
        let circles: Vec<_> = list
            .commands()
            .filter_map(|c| match c {
                DrawCmd::Circle(c) => Some((c.segments, c.stroke)),
                _ => None,
            })
            .collect();
        assert_eq!(circles, vec![(12, Some(2.0)), (32, None)]);
    }

    // ── text ──────────────────────────────────────────────────────────────

    #[test]
    fn plain_text_is_one_call() {
        let list = record(|p| p.text(Vec2::new(3.0, 4.0), "ammo", RED, false));
        assert_eq!(texts(&list), vec![(Vec2::new(3.0, 4.0), RED.pack())]);
    }

    #[test]
    fn outlined_text_draws_shadow_first() {
        let list = record(|p| p.text(Vec2::new(3.0, 4.0), "ammo", RED, true));
        assert_eq!(
            texts(&list),
            vec![
                (Vec2::new(4.0, 5.0), PackedColor::BLACK),
                (Vec2::new(3.0, 4.0), RED.pack()),
            ]
        );
    }

    #[test]
    fn centered_text_uses_measured_size() {
        let list = record(|p| p.text_centered(Rect::new(0.0, 0.0, 100.0, 20.0), "label", RED, false));
        assert_eq!(texts(&list), vec![(Vec2::new(30.0, 5.0), RED.pack())]);
    }

    #[test]
    fn centered_outlined_text_offsets_shadow() {
        let list = record(|p| p.text_centered(Rect::new(0.0, 0.0, 100.0, 20.0), "label", RED, true));
        let origins: Vec<Vec2> = texts(&list).into_iter().map(|(o, _)| o).collect();
        assert_eq!(origins, vec![Vec2::new(31.0, 6.0), Vec2::new(30.0, 5.0)]);
    }

    // ── images ────────────────────────────────────────────────────────────

    #[test]
    fn null_texture_draws_nothing() {
        let rect = Rect::new(0.0, 0.0, 16.0, 16.0);
        let list = record(|p| {
            p.image(TextureId::NULL, rect);
            p.sprite(TextureId::NULL, rect, Vec2::zero(), Vec2::splat(0.5));
            p.image_rotated(TextureId::NULL, rect, 1.0);
        });
        assert!(list.is_empty());
    }

    #[test]
    fn image_spans_full_texture() {
        let list = record(|p| p.image(TextureId::new(3), Rect::new(1.0, 2.0, 16.0, 8.0)));
        let DrawCmd::Image(img) = &list.items()[0] else { panic!("expected image") };
        assert_eq!((img.min, img.max), (Vec2::new(1.0, 2.0), Vec2::new(17.0, 10.0)));
        assert_eq!((img.uv_min, img.uv_max), (Vec2::zero(), Vec2::splat(1.0)));
    }

    #[test]
    fn sprite_maps_sub_region() {
        let list = record(|p| {
            p.sprite(
                TextureId::new(3),
                Rect::new(0.0, 0.0, 32.0, 32.0),
                Vec2::new(0.25, 0.5),
                Vec2::new(0.5, 0.75),
            )
        });
        let DrawCmd::Image(img) = &list.items()[0] else { panic!("expected image") };
        assert_eq!((img.uv_min, img.uv_max), (Vec2::new(0.25, 0.5), Vec2::new(0.5, 0.75)));
    }

    #[test]
    fn rotated_image_pairs_corners_with_full_uvs() {
        let rect = Rect::new(10.0, 10.0, 20.0, 10.0);
        let list = record(|p| p.image_rotated(TextureId::new(9), rect, 0.0));
        let DrawCmd::ImageQuad(q) = &list.items()[0] else { panic!("expected quad") };
        assert_eq!(q.points, rect.corners());
        assert_eq!(q.uvs, FULL_QUAD_UVS);
    }

    #[test]
    fn rotated_image_keeps_winding() {
        let rect = Rect::new(10.0, 10.0, 20.0, 10.0);
        let list = record(|p| p.image_rotated(TextureId::new(9), rect, FRAC_PI_6));
        let DrawCmd::ImageQuad(q) = &list.items()[0] else { panic!("expected quad") };
        assert!(signed_area2(&q.points) > 0.0);
        assert!(signed_area2(&q.uvs) > 0.0);
    }
}
