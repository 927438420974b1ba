use crate::coords::Vec2;

use super::{FontId, FontSystem};

/// Rendered-extent query for a string in the host's current font.
pub trait MeasureText {
    fn measure_text(&self, text: &str) -> Vec2;
}

/// Closures act as fixed metrics, which is handy for hosts with their own text engine.
impl<F> MeasureText for F
where
    F: Fn(&str) -> Vec2,
{
    #[inline]
    fn measure_text(&self, text: &str) -> Vec2 {
        self(text)
    }
}

/// A font from a [`FontSystem`] at a fixed pixel size.
#[derive(Clone, Copy)]
pub struct FontFace<'a> {
    pub fonts: &'a FontSystem,
    pub font: FontId,
    pub size: f32,
}

impl<'a> FontFace<'a> {
    #[inline]
    pub fn new(fonts: &'a FontSystem, font: FontId, size: f32) -> Self {
        Self { fonts, font, size }
    }
}

impl MeasureText for FontFace<'_> {
    #[inline]
    fn measure_text(&self, text: &str) -> Vec2 {
        self.fonts.measure_text(text, self.font, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closure_metrics_are_used_verbatim() {
        let fixed = |text: &str| Vec2::new(text.len() as f32 * 8.0, 10.0);
        assert_eq!(fixed.measure_text("abcd"), Vec2::new(32.0, 10.0));
    }

    #[test]
    fn font_face_forwards_to_font_system() {
        let fonts = FontSystem::new();
        let face = FontFace::new(&fonts, FontId(0), 20.0);
        assert_eq!(face.measure_text("x"), Vec2::new(0.0, 24.0));
    }
}
