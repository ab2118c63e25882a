//! Log-backed page collaborators for running the gate without a browser.

use cg_gate_core::{
    StatusKind, StatusMessage, StatusSurface, TriggerControl, TriggerView, WidgetElement,
    WidgetHost,
};
use std::cell::{Cell, RefCell};
use tracing::{error, info};

#[derive(Debug, Default)]
pub(crate) struct HeadlessPage {
    status: RefCell<Option<StatusMessage>>,
    trigger: Cell<Option<TriggerView>>,
    scripts: RefCell<Vec<String>>,
    widget: RefCell<Option<WidgetElement>>,
}

impl HeadlessPage {
    pub(crate) fn last_status(&self) -> Option<StatusMessage> {
        self.status.borrow().clone()
    }

    pub(crate) fn trigger(&self) -> Option<TriggerView> {
        self.trigger.get()
    }

    pub(crate) fn widget(&self) -> Option<WidgetElement> {
        self.widget.borrow().clone()
    }
}

impl StatusSurface for HeadlessPage {
    fn show(&self, message: &StatusMessage) {
        match message.kind {
            StatusKind::Info | StatusKind::Success => info!(kind = message.kind.as_class(), "{}", message.text),
            StatusKind::Error => error!("{}", message.text),
        }
        *self.status.borrow_mut() = Some(message.clone());
    }
}

impl TriggerControl for HeadlessPage {
    fn render(&self, view: TriggerView) {
        if self.trigger.replace(Some(view)) != Some(view) {
            info!(?view, "start control");
        }
    }
}

impl WidgetHost for HeadlessPage {
    fn has_container(&self) -> bool {
        true
    }

    fn script_present(&self, src: &str) -> bool {
        self.scripts.borrow().iter().any(|s| s == src)
    }

    fn append_script(&self, src: &str) {
        info!(src, "would load widget script");
        self.scripts.borrow_mut().push(src.to_owned());
    }

    fn replace_contents(&self, element: &WidgetElement) {
        *self.widget.borrow_mut() = Some(element.clone());
    }

    fn reveal(&self) {}
}
