//! Opaque texture handles.
//!
//! Textures are created and bound by the host renderer; the drawing layer only
//! forwards their ids.

/// Host-assigned texture identifier. `0` is the null texture.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct TextureId(pub u64);

impl TextureId {
    pub const NULL: Self = Self(0);

    #[inline]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn is_null(self) -> bool {
        self.0 == 0
    }
}
