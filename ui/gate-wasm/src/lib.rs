//! Orientation page front end.
//!
//! Binds the page's status box, start button, orientation video and call
//! container to the gate controller and runs it in the browser.

pub mod api;
pub mod dom;
pub mod events;
pub mod logging;
pub mod status;
pub mod trigger;
pub mod widget;

use std::rc::Rc;

use cg_gate_core::{
    GateConfig, GateController, GateError, StatusPresenter, TriggerControl, TriggerView,
};
use wasm_bindgen::prelude::*;

use crate::api::FetchTransport;
use crate::status::DomStatus;
use crate::trigger::DomTrigger;
use crate::widget::DomWidgetHost;

pub type PageGate = GateController<FetchTransport, DomStatus, DomTrigger, DomWidgetHost>;

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub async fn start() -> Result<(), JsValue> {
    // Improve panic messages in the browser console
    console_error_panic_hook::set_once();
    logging::init(tracing::Level::INFO);

    init().await
}

/// Main initialisation sequence.
async fn init() -> Result<(), JsValue> {
    let els = dom::Elements::bind();

    // No start button: not the orientation page.
    let Some(start_btn) = els.start_btn.clone() else {
        return Ok(());
    };
    let trigger = DomTrigger::new(start_btn);
    let status = DomStatus::new(els.status_box.clone());

    let config = match load_config(&els) {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("{err}");
            trigger.render(TriggerView::Hidden);
            StatusPresenter::new(&status).error(err.user_message());
            return Ok(());
        }
    };

    let gate: Rc<PageGate> = Rc::new(GateController::new(
        config,
        FetchTransport,
        status,
        trigger,
        DomWidgetHost::new(els.call_container.clone()),
        els.video.is_some(),
    ));

    // Listeners first, so a video that ends during validation is remembered.
    events::bind_events(&els, &gate)?;

    let href = dom::page_href()?;
    let state = gate.run(&href).await;
    tracing::info!(?state, mode = ?gate.orientation_mode(), "gate initialised");

    Ok(())
}

fn load_config(els: &dom::Elements) -> Result<GateConfig, GateError> {
    match els.config_json() {
        Some(raw) => GateConfig::from_json(&raw),
        None => {
            let config = GateConfig::default();
            config.validate()?;
            Ok(config)
        }
    }
}
