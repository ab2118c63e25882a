//! DOM element bindings.
//!
//! Every element is optional: the same bundle is loaded on pages that don't
//! carry the orientation gate, and the gate degrades when parts are missing.

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlButtonElement, HtmlElement, HtmlVideoElement, Window};

pub const STATUS_ID: &str = "statusMessage";
pub const START_BUTTON_ID: &str = "startCallBtn";
pub const VIDEO_ID: &str = "orientationVideo";
pub const CALL_CONTAINER_ID: &str = "callContainer";
pub const CONFIG_ID: &str = "gateConfig";

// ── Helpers ──

pub fn document() -> Document {
    gloo_utils::document()
}

pub fn window() -> Window {
    gloo_utils::window()
}

pub fn by_id(id: &str) -> Option<Element> {
    document().get_element_by_id(id)
}

pub fn by_id_typed<T: JsCast>(id: &str) -> Option<T> {
    by_id(id).and_then(|e| e.dyn_into::<T>().ok())
}

pub fn add_class(el: &Element, cls: &str) {
    let _ = el.class_list().add_1(cls);
}

pub fn remove_class(el: &Element, cls: &str) {
    let _ = el.class_list().remove_1(cls);
}

pub fn set_display(el: &HtmlElement, value: Option<&str>) {
    let style = el.style();
    let _ = match value {
        Some(v) => style.set_property("display", v),
        None => style.remove_property("display").map(|_| ()),
    };
}

pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    document().create_element(tag)
}

/// Full URL of the current page, including the query string.
pub fn page_href() -> Result<String, JsValue> {
    window().location().href()
}

// ── Elements struct ──

/// DOM references used by the gate, resolved once at startup.
#[derive(Clone)]
pub struct Elements {
    pub status_box: Option<HtmlElement>,
    pub start_btn: Option<HtmlButtonElement>,
    pub video: Option<HtmlVideoElement>,
    pub call_container: Option<HtmlElement>,
    pub config_block: Option<Element>,
}

impl Elements {
    pub fn bind() -> Elements {
        Elements {
            status_box: by_id_typed::<HtmlElement>(STATUS_ID),
            start_btn: by_id_typed::<HtmlButtonElement>(START_BUTTON_ID),
            video: by_id_typed::<HtmlVideoElement>(VIDEO_ID),
            call_container: by_id_typed::<HtmlElement>(CALL_CONTAINER_ID),
            config_block: by_id(CONFIG_ID),
        }
    }

    /// Raw JSON of the `#gateConfig` block, if the page has one.
    pub fn config_json(&self) -> Option<String> {
        self.config_block
            .as_ref()
            .and_then(|el| el.text_content())
            .filter(|text| !text.trim().is_empty())
    }
}
