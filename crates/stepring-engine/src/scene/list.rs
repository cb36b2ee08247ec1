use super::DrawCmd;
use crate::render::Surface;

/// Recorded draw stream for a frame.
///
/// Commands are kept in insertion order, which is also paint order (back-to-front):
/// a filled arc pushed after its track is drawn on top of it.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DrawList {
    items: Vec<DrawCmd>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn items(&self) -> &[DrawCmd] {
        &self.items
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
        self.items.push(cmd);
    }

    /// Replays every command, in paint order, into `surface`.
    pub fn replay<S: Surface + ?Sized>(&self, surface: &mut S) {
        for cmd in &self.items {
            match cmd {
                DrawCmd::Arc(arc) => surface.draw_arc(arc),
            }
        }
    }
}
