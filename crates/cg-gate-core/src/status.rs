use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

impl StatusKind {
    /// CSS modifier used by the page stylesheet.
    pub fn as_class(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

/// The single feedback slot on the page.
pub trait StatusSurface {
    /// Replace whatever is shown with `message`.
    fn show(&self, message: &StatusMessage);
}

impl<T: StatusSurface + ?Sized> StatusSurface for &T {
    fn show(&self, message: &StatusMessage) {
        (**self).show(message);
    }
}

impl<T: StatusSurface + ?Sized> StatusSurface for Rc<T> {
    fn show(&self, message: &StatusMessage) {
        (**self).show(message);
    }
}

/// Thin helper over a [`StatusSurface`] so callers don't build messages by hand.
pub struct StatusPresenter<S> {
    surface: S,
}

impl<S: StatusSurface> StatusPresenter<S> {
    pub fn new(surface: S) -> Self {
        Self { surface }
    }

    pub fn info(&self, text: &str) {
        self.show(StatusKind::Info, text);
    }

    pub fn success(&self, text: &str) {
        self.show(StatusKind::Success, text);
    }

    pub fn error(&self, text: &str) {
        self.show(StatusKind::Error, text);
    }

    fn show(&self, kind: StatusKind, text: &str) {
        self.surface.show(&StatusMessage {
            kind,
            text: text.to_owned(),
        });
    }
}
