use bytemuck::{Pod, Zeroable};

use crate::coords::Vec2;
use crate::paint::PackedColor;
use crate::scene::{DrawCmd, DrawList};
use crate::texture::TextureId;

/// Axis-aligned textured rectangle payload.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageCmd {
    pub texture: TextureId,
    pub min: Vec2,
    pub max: Vec2,
    /// Texture coordinate mapped onto `min`.
    pub uv_min: Vec2,
    /// Texture coordinate mapped onto `max`.
    pub uv_max: Vec2,
}

/// Arbitrary textured quadrilateral payload.
///
/// `points[i]` samples the texture at `uvs[i]`. Points are expected in a consistent
/// winding; the quad is split into triangles `(0, 1, 2)` and `(0, 2, 3)`.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageQuadCmd {
    pub texture: TextureId,
    pub points: [Vec2; 4],
    pub uvs: [Vec2; 4],
}

/// Index order used to split a quad into two triangles.
pub const QUAD_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

/// Textured vertex ready for upload.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct QuadVertex {
    pub pos: Vec2,
    pub uv: Vec2,
    pub color: PackedColor,
}

impl ImageQuadCmd {
    /// Expands the quad into untinted vertices in point order.
    pub fn vertices(&self) -> [QuadVertex; 4] {
        core::array::from_fn(|i| QuadVertex {
            pos: self.points[i],
            uv: self.uvs[i],
            color: PackedColor::WHITE,
        })
    }
}

impl DrawList {
    /// Records an axis-aligned image.
    #[inline]
    pub fn push_image(
        &mut self,
        texture: TextureId,
        min: Vec2,
        max: Vec2,
        uv_min: Vec2,
        uv_max: Vec2,
    ) {
        self.push(DrawCmd::Image(ImageCmd { texture, min, max, uv_min, uv_max }));
    }

    /// Records a textured quad.
    #[inline]
    pub fn push_image_quad(&mut self, texture: TextureId, points: [Vec2; 4], uvs: [Vec2; 4]) {
        self.push(DrawCmd::ImageQuad(ImageQuadCmd { texture, points, uvs }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quad_vertices_follow_point_order() {
        let quad = ImageQuadCmd {
            texture: TextureId::new(7),
            points: [
                Vec2::new(0.0, 0.0),
                Vec2::new(4.0, 0.0),
                Vec2::new(4.0, 2.0),
                Vec2::new(0.0, 2.0),
            ],
            uvs: [
                Vec2::new(0.0, 0.0),
                Vec2::new(1.0, 0.0),
                Vec2::new(1.0, 1.0),
                Vec2::new(0.0, 1.0),
            ],
        };
        let v = quad.vertices();
        assert_eq!(v[2].pos, Vec2::new(4.0, 2.0));
        assert_eq!(v[2].uv, Vec2::new(1.0, 1.0));
        assert!(v.iter().all(|v| v.color == PackedColor::WHITE));
    }

    #[test]
    fn quad_indices_cover_both_triangles() {
        assert!(QUAD_INDICES.iter().all(|&i| i < 4));
        assert_eq!(QUAD_INDICES[..3], [0, 1, 2]);
        assert_eq!(QUAD_INDICES[3..], [0, 2, 3]);
    }

    #[test]
    fn quad_vertex_is_tightly_packed() {
        let v = [QuadVertex::zeroed(); 4];
        let bytes: &[u8] = bytemuck::cast_slice(&v);
        assert_eq!(bytes.len(), 4 * 20);
    }
}
