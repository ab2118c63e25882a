//! `#startCallBtn`.

use cg_gate_core::{TriggerControl, TriggerView};
use web_sys::HtmlButtonElement;

use crate::dom;

const LOCKED_CLASS: &str = "locked";

pub struct DomTrigger {
    button: HtmlButtonElement,
}

impl DomTrigger {
    pub fn new(button: HtmlButtonElement) -> Self {
        Self { button }
    }
}

impl TriggerControl for DomTrigger {
    fn render(&self, view: TriggerView) {
        // `disabled` goes first so a hidden button can never be clicked.
        self.button.set_disabled(!view.is_enabled());
        self.button.set_hidden(!view.is_visible());
        dom::set_display(&self.button, (!view.is_visible()).then_some("none"));
        match view {
            TriggerView::Ready => dom::remove_class(&self.button, LOCKED_CLASS),
            TriggerView::Hidden | TriggerView::Locked => dom::add_class(&self.button, LOCKED_CLASS),
        }
    }
}
