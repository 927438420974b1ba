use super::DrawCmd;

/// Recorded draw stream for a frame.
///
/// `DrawList` is the reference [`DrawTarget`](super::DrawTarget): every `add_*` call
/// becomes one [`DrawCmd`], kept in call order. Hosts replay [`commands`](Self::commands)
/// front to back when building GPU buffers, so later commands paint over earlier ones.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawCmd>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded commands. Keeps allocated capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Commands in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawCmd] {
        &self.items
    }

    pub fn commands(&self) -> impl Iterator<Item = &DrawCmd> {
        self.items.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        log::trace!("draw list: {} #{}", cmd.kind(), self.items.len());
        self.items.push(cmd);
    }
}
