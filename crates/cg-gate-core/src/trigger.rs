use std::rc::Rc;

/// How the "start call" control is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerView {
    /// Not rendered at all.
    Hidden,
    /// Visible but disabled, with the locked styling.
    Locked,
    /// Visible and clickable.
    Ready,
}

impl TriggerView {
    pub fn is_visible(self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn is_enabled(self) -> bool {
        matches!(self, Self::Ready)
    }
}

/// The start control. Rendering must be synchronous: the controller relies on
/// a `Hidden` render taking effect before it awaits anything.
pub trait TriggerControl {
    fn render(&self, view: TriggerView);
}

impl<T: TriggerControl + ?Sized> TriggerControl for &T {
    fn render(&self, view: TriggerView) {
        (**self).render(view);
    }
}

impl<T: TriggerControl + ?Sized> TriggerControl for Rc<T> {
    fn render(&self, view: TriggerView) {
        (**self).render(view);
    }
}
