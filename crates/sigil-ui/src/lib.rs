//! Sigil UI — immediate-mode drawing primitives and theme presets on top of
//! `sigil-engine`.
//!
//! # Drawing
//!
//! ```rust,ignore
//! use sigil_ui::prelude::*;
//!
//! // Every frame:
//! let face = FontFace::new(&fonts, font, 14.0);
//! let mut painter = Painter::new(&mut draw_list, &face);
//! painter.corner_rect(bbox, ColorRgba::white(), DEFAULT_STROKE, DEFAULT_CORNER_LEN);
//! painter.text_centered(bbox, "enemy", ColorRgba::white(), true);
//! painter.image_rotated(icon, Rect::new(10.0, 10.0, 24.0, 24.0), heading);
//! ```
//!
//! # Themes
//!
//! ```rust,ignore
//! let catalog = ThemeCatalog::builtin();
//! catalog.apply("theme.windark", &mut style, rgb_border_enabled)?;
//! ```

pub mod geometry;
pub mod painter;
pub mod style;
pub mod theme;

pub use painter::Painter;

/// Everything needed to draw and theme — import this in overlay code.
pub mod prelude {
    pub use crate::painter::{
        DEFAULT_CIRCLE_SEGMENTS, DEFAULT_CORNER_LEN, DEFAULT_STROKE, Painter,
    };
    pub use crate::style::{Dir, Style, StyleColor, StyleMetrics};
    pub use crate::theme::{ThemeCatalog, ThemeError, ThemePreset};

    // Re-export the engine types every caller needs.
    pub use sigil_engine::coords::{ColorRgba, Rect, Vec2, Vec3};
    pub use sigil_engine::scene::{DrawList, DrawTarget};
    pub use sigil_engine::text::{FontFace, FontSystem, MeasureText};
    pub use sigil_engine::texture::TextureId;
}
