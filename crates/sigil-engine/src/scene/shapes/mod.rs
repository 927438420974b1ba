mod circle;
mod image;
mod line;
mod rect;
mod text;
mod triangle;

pub use circle::CircleCmd;
pub use image::{ImageCmd, ImageQuadCmd, QUAD_INDICES, QuadVertex};
pub use line::LineCmd;
pub use rect::RectCmd;
pub use text::TextCmd;
pub use triangle::TriangleCmd;
