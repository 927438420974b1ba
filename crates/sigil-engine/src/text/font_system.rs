use std::fmt;

use crate::coords::Vec2;

/// Line height used when a run has no glyphs, relative to the font size.
const EMPTY_LINE_HEIGHT: f32 = 1.2;

/// Error returned by [`FontSystem::load_font`].
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// Opaque handle to a font loaded into a [`FontSystem`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FontId(pub(crate) usize);

/// Owns the fonts used to measure text.
///
/// Fonts are immutable after loading.
#[derive(Default)]
pub struct FontSystem {
    fonts: Vec<fontdue::Font>,
}

impl FontSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and stores a TrueType or OpenType font from raw bytes.
    pub fn load_font(&mut self, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        let id = FontId(self.fonts.len());
        self.fonts.push(font);
        log::debug!("loaded font {} ({} glyphs)", id.0, self.fonts[id.0].glyph_count());
        Ok(id)
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    /// Extent of `text` laid out on one line at `size` pixels.
    ///
    /// Unknown fonts and empty strings measure as zero width and one line tall.
    #[must_use]
    pub fn measure_text(&self, text: &str, id: FontId, size: f32) -> Vec2 {
        use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};

        let empty = Vec2::new(0.0, size * EMPTY_LINE_HEIGHT);
        let Some(font) = self.fonts.get(id.0) else {
            return empty;
        };

        let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings::default());
        layout.append(&[font], &TextStyle::new(text, size, 0));

        let glyphs = layout.glyphs();
        if glyphs.is_empty() {
            return empty;
        }

        // Advance extent, not bitmap extent, so trailing spaces count.
        let w = glyphs
            .iter()
            .map(|g| {
                let m = font.metrics_indexed(g.key.glyph_index, size);
                (g.x - m.xmin as f32 + m.advance_width).max(0.0)
            })
            .fold(0.0f32, f32::max);
        let h = layout.height().max(size);
        Vec2::new(w, h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MONO: &[u8] = include_bytes!("../../fixtures/DejaVuSansMono.ttf");

    fn mono() -> (FontSystem, FontId) {
        let mut fonts = FontSystem::new();
        let id = fonts.load_font(MONO).unwrap();
        (fonts, id)
    }

    #[test]
    fn garbage_bytes_fail_to_load() {
        let mut fonts = FontSystem::new();
        let err = fonts.load_font(b"not a font").unwrap_err();
        assert!(err.to_string().starts_with("font load error"));
        assert!(fonts.is_empty());
    }

    #[test]
    fn unknown_font_measures_one_empty_line() {
        let fonts = FontSystem::new();
        let size = fonts.measure_text("hello", FontId(3), 10.0);
        assert_eq!(size, Vec2::new(0.0, 12.0));
    }

    // ── fontdue measurement ───────────────────────────────────────────────

    #[test]
    fn width_grows_with_text() {
        let (fonts, id) = mono();
        let widths: Vec<f32> =
            ["a", "ab", "abcd"].iter().map(|t| fonts.measure_text(t, id, 20.0).x).collect();
        assert!(widths[0] > 0.0);
        assert!(widths.windows(2).all(|w| w[1] > w[0]), "{widths:?}");
    }

    #[test]
    fn trailing_spaces_count_toward_width() {
        let (fonts, id) = mono();
        let bare = fonts.measure_text("ab", id, 20.0);
        let padded = fonts.measure_text("ab  ", id, 20.0);
        let full = fonts.measure_text("abcd", id, 20.0);
        assert!(padded.x > bare.x);
        // Monospace: two spaces advance as far as two letters.
        assert!((padded.x - full.x).abs() < 1e-3, "{padded:?} vs {full:?}");
    }

    #[test]
    fn loaded_font_is_at_least_one_size_tall() {
        let (fonts, id) = mono();
        assert_eq!(fonts.len(), 1);
        assert!(fonts.measure_text("Hg", id, 20.0).y >= 20.0);
        assert_eq!(fonts.measure_text("", id, 20.0), Vec2::new(0.0, 24.0));
    }
}
