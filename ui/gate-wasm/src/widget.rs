//! `#callContainer` and the widget's backing script.

use cg_gate_core::{WidgetElement, WidgetHost};
use tracing::warn;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, HtmlScriptElement, ScrollBehavior, ScrollIntoViewOptions};

use crate::dom;

pub struct DomWidgetHost {
    container: Option<HtmlElement>,
}

impl DomWidgetHost {
    pub fn new(container: Option<HtmlElement>) -> Self {
        Self { container }
    }

    fn try_append_script(&self, src: &str) -> Result<(), JsValue> {
        let script: HtmlScriptElement = dom::create_element("script")?.dyn_into()?;
        script.set_src(src);
        script.set_async(true);
        script.set_type("text/javascript");
        let parent = dom::document()
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?;
        parent.append_child(&script)?;
        Ok(())
    }

    fn try_replace_contents(&self, container: &HtmlElement, element: &WidgetElement) -> Result<(), JsValue> {
        let widget = dom::create_element(&element.tag)?;
        for (name, value) in &element.attributes {
            widget.set_attribute(name, value)?;
        }
        container.set_inner_html("");
        container.append_child(&widget)?;
        Ok(())
    }
}

impl WidgetHost for DomWidgetHost {
    fn has_container(&self) -> bool {
        self.container.is_some()
    }

    fn script_present(&self, src: &str) -> bool {
        let scripts = dom::document().get_elements_by_tag_name("script");
        (0..scripts.length())
            .filter_map(|i| scripts.item(i))
            .any(|script| script.get_attribute("src").as_deref() == Some(src))
    }

    fn append_script(&self, src: &str) {
        if let Err(err) = self.try_append_script(src) {
            warn!(src, "failed to append widget script: {err:?}");
        }
    }

    fn replace_contents(&self, element: &WidgetElement) {
        let Some(container) = &self.container else { return };
        if let Err(err) = self.try_replace_contents(container, element) {
            warn!(tag = %element.tag, "failed to mount widget element: {err:?}");
        }
    }

    fn reveal(&self) {
        let Some(container) = &self.container else { return };
        container.set_hidden(false);
        let opts = ScrollIntoViewOptions::new();
        opts.set_behavior(ScrollBehavior::Smooth);
        container.scroll_into_view_with_scroll_into_view_options(&opts);
    }
}
