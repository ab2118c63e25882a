//! `#statusMessage` box.

use cg_gate_core::{StatusMessage, StatusSurface};
use web_sys::HtmlElement;

use crate::dom;

const BASE_CLASS: &str = "status-message";

pub struct DomStatus {
    el: Option<HtmlElement>,
}

impl DomStatus {
    pub fn new(el: Option<HtmlElement>) -> Self {
        Self { el }
    }
}

impl StatusSurface for DomStatus {
    fn show(&self, message: &StatusMessage) {
        let Some(el) = &self.el else { return };
        el.set_class_name(&format!("{BASE_CLASS} {}", message.kind.as_class()));
        el.set_text_content(Some(&message.text));
        dom::set_display(el, Some("block"));
    }
}
