use crate::coords::Vec2;
use crate::paint::PackedColor;
use crate::scene::{DrawCmd, DrawList};

/// Text run payload. The host's current font and size apply.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    pub color: PackedColor,
    /// Top-left of the text block in screen pixels.
    pub origin: Vec2,
}

impl DrawList {
    /// Records a text draw command.
    pub fn push_text(
        &mut self,
        text: impl Into<String>,
        color: PackedColor,
        origin: Vec2,
    ) {
        self.push(DrawCmd::Text(TextCmd { text: text.into(), color, origin }));
    }
}
