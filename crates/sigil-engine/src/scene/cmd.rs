use crate::scene::shapes::{
    CircleCmd, ImageCmd, ImageQuadCmd, LineCmd, RectCmd, TextCmd, TriangleCmd,
};

/// Renderer-agnostic draw command stream.
///
/// One variant per [`DrawTarget`](super::DrawTarget) entry point. Outline and filled
/// variants of the same shape share a payload and differ by `stroke`.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Line(LineCmd),
    Rect(RectCmd),
    Triangle(TriangleCmd),
    Text(TextCmd),
    Circle(CircleCmd),
    Image(ImageCmd),
    ImageQuad(ImageQuadCmd),
}

impl DrawCmd {
    /// Short lowercase tag, used in trace logs.
    pub fn kind(&self) -> &'static str {
        match self {
            DrawCmd::Line(_) => "line",
            DrawCmd::Rect(_) => "rect",
            DrawCmd::Triangle(_) => "triangle",
            DrawCmd::Text(_) => "text",
            DrawCmd::Circle(_) => "circle",
            DrawCmd::Image(_) => "image",
            DrawCmd::ImageQuad(_) => "image_quad",
        }
    }
}
