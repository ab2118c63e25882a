//! Event binding.
//!
//! Wires the start button, the orientation video and page teardown to the
//! gate. Async handlers are spawned with `wasm_bindgen_futures::spawn_local`.

use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::PageGate;
use crate::dom::{self, Elements};

/// Bind all gate listeners. Call once, before the gate starts validating, so
/// a video that ends early is not missed.
pub fn bind_events(els: &Elements, gate: &Rc<PageGate>) -> Result<(), JsValue> {
    // ── Start call ──
    if let Some(btn) = &els.start_btn {
        let gate2 = Rc::clone(gate);
        let cb = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
            let gate3 = Rc::clone(&gate2);
            wasm_bindgen_futures::spawn_local(async move {
                gate3.on_start_requested().await;
            });
        }) as Box<dyn FnMut(_)>);
        btn.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }

    // ── Orientation video: a single `ended` notification ──
    if let Some(video) = &els.video {
        let gate2 = Rc::clone(gate);
        let cb = Closure::wrap(Box::new(move |_: web_sys::Event| {
            gate2.on_video_ended();
        }) as Box<dyn FnMut(_)>);
        let opts = web_sys::AddEventListenerOptions::new();
        opts.set_once(true);
        video.add_event_listener_with_callback_and_add_event_listener_options(
            "ended",
            cb.as_ref().unchecked_ref(),
            &opts,
        )?;
        cb.forget();
    }

    // ── Page teardown ──
    {
        let gate2 = Rc::clone(gate);
        let cb = Closure::wrap(Box::new(move |_: web_sys::Event| {
            gate2.teardown();
        }) as Box<dyn FnMut(_)>);
        dom::window().add_event_listener_with_callback("pagehide", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }

    Ok(())
}
