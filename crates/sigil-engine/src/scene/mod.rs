//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - define the [`DrawTarget`] capability the primitive layer draws into
//! - record renderer-agnostic draw commands in a [`DrawList`]
//! - keep commands in call order

mod cmd;
mod list;
mod target;

pub mod shapes;

pub use cmd::DrawCmd;
pub use list::DrawList;
pub use shapes::{
    CircleCmd, ImageCmd, ImageQuadCmd, LineCmd, QUAD_INDICES, QuadVertex, RectCmd, TextCmd,
    TriangleCmd,
};
pub use target::DrawTarget;
