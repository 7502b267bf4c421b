use egui::{Context, Id};

/// Something that can take and give up keyboard focus.
///
/// The picker returns focus to its text surface through this when the popup closes.
pub trait FocusTarget {
    fn focus(&mut self);
    fn blur(&mut self);
}

/// Keyboard focus of the text surface of a shown [`crate::WeekPicker`].
///
/// Only meaningful while the picker is shown: once it is no longer laid out, egui drops the
/// focus again on the next frame.
#[derive(Clone, Debug)]
pub struct InputHandle {
    ctx: Context,
    id: Id,
}

impl InputHandle {
    pub fn new(ctx: Context, id: Id) -> Self {
        Self { ctx, id }
    }

    /// The [`Id`] of the text surface.
    pub fn id(&self) -> Id {
        self.id
    }

    pub fn has_focus(&self) -> bool {
        self.ctx.memory(|mem| mem.has_focus(self.id))
    }
}

impl FocusTarget for InputHandle {
    fn focus(&mut self) {
        log::trace!("focusing week picker input {:?}", self.id);
        self.ctx.memory_mut(|mem| mem.request_focus(self.id));
    }

    fn blur(&mut self) {
        log::trace!("blurring week picker input {:?}", self.id);
        self.ctx.memory_mut(|mem| mem.surrender_focus(self.id));
    }
}
