//! Mounting the third-party call widget.
//!
//! The widget is a custom element backed by an external script. The script
//! must be requested at most once per page lifetime, no matter how many mount
//! attempts happen (retries replace the element, never the script).

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use tracing::{debug, info};

use crate::config::WidgetConfig;
use crate::error::GateError;

/// Element to insert into the call container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetElement {
    pub tag: String,
    pub attributes: Vec<(String, String)>,
}

impl WidgetElement {
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// The page region that hosts the widget.
pub trait WidgetHost {
    /// `false` when the page has no call container.
    fn has_container(&self) -> bool;
    /// Whether a `<script src=..>` with this URL is already in the document.
    fn script_present(&self, src: &str) -> bool;
    fn append_script(&self, src: &str);
    /// Drop the container's previous contents and insert `element`.
    fn replace_contents(&self, element: &WidgetElement);
    /// Unhide the container and scroll it into view.
    fn reveal(&self);
}

impl<T: WidgetHost + ?Sized> WidgetHost for &T {
    fn has_container(&self) -> bool {
        (**self).has_container()
    }

    fn script_present(&self, src: &str) -> bool {
        (**self).script_present(src)
    }

    fn append_script(&self, src: &str) {
        (**self).append_script(src);
    }

    fn replace_contents(&self, element: &WidgetElement) {
        (**self).replace_contents(element);
    }

    fn reveal(&self) {
        (**self).reveal();
    }
}

impl<T: WidgetHost + ?Sized> WidgetHost for Rc<T> {
    fn has_container(&self) -> bool {
        (**self).has_container()
    }

    fn script_present(&self, src: &str) -> bool {
        (**self).script_present(src)
    }

    fn append_script(&self, src: &str) {
        (**self).append_script(src);
    }

    fn replace_contents(&self, element: &WidgetElement) {
        (**self).replace_contents(element);
    }

    fn reveal(&self) {
        (**self).reveal();
    }
}

/// Scripts already requested during this page lifetime, keyed by URL.
#[derive(Debug, Default)]
pub struct ScriptRegistry {
    requested: RefCell<BTreeSet<String>>,
}

impl ScriptRegistry {
    /// Make sure `src` is loaded. Returns `true` only when this call inserted it.
    pub fn ensure_loaded<H: WidgetHost + ?Sized>(&self, host: &H, src: &str) -> bool {
        if self.requested.borrow().contains(src) {
            return false;
        }
        let inserted = if host.script_present(src) {
            debug!(src, "widget script already present in page");
            false
        } else {
            host.append_script(src);
            true
        };
        self.requested.borrow_mut().insert(src.to_owned());
        inserted
    }
}

pub struct WidgetMounter {
    config: WidgetConfig,
    scripts: ScriptRegistry,
}

impl WidgetMounter {
    pub fn new(config: WidgetConfig) -> Self {
        Self {
            config,
            scripts: ScriptRegistry::default(),
        }
    }

    pub fn element(&self) -> WidgetElement {
        WidgetElement {
            tag: self.config.element.clone(),
            attributes: vec![(
                self.config.id_attribute.clone(),
                self.config.agent_id.clone(),
            )],
        }
    }

    /// Mount the widget into `host`. A missing container is reported, not raised.
    pub fn mount<H: WidgetHost + ?Sized>(&self, host: &H) -> Result<(), GateError> {
        if !host.has_container() {
            return Err(GateError::WidgetMountUnavailable);
        }

        if self.scripts.ensure_loaded(host, &self.config.script_url) {
            info!(src = %self.config.script_url, "widget script requested");
        }
        host.replace_contents(&self.element());
        host.reveal();
        Ok(())
    }
}
