//! End-to-end gate: credential → validation → orientation → call start → widget.
//!
//! The controller is the only owner of [`GateState`]. Every entry point takes
//! `&self`; state sits in a `Cell` so no borrow is ever held across an
//! `.await`, which keeps re-entrant UI events (double clicks, a video ending
//! mid-validation) safe on a single-threaded event loop.

use std::cell::{Cell, RefCell};

use cg_api_types::{EVENT_CALL_STARTED, TokenRequest};
use tracing::{debug, info, warn};

use crate::config::GateConfig;
use crate::credential::Credential;
use crate::error::GateError;
use crate::messages;
use crate::orientation::{OrientationGate, OrientationMode};
use crate::starter::CallStarter;
use crate::state::GateState;
use crate::status::{StatusPresenter, StatusSurface};
use crate::transport::GateTransport;
use crate::trigger::{TriggerControl, TriggerView};
use crate::validator::{CredentialValidator, ValidationOutcome};
use crate::widget::{WidgetHost, WidgetMounter};

pub struct GateController<T, S, C, H> {
    transport: T,
    status: StatusPresenter<S>,
    trigger: C,
    host: H,
    token_param: String,
    notify_url: Option<String>,
    validator: CredentialValidator,
    orientation: OrientationGate,
    starter: CallStarter,
    mounter: WidgetMounter,
    state: Cell<GateState>,
    credential: RefCell<Option<Credential>>,
    torn_down: Cell<bool>,
}

impl<T, S, C, H> GateController<T, S, C, H>
where
    T: GateTransport,
    S: StatusSurface,
    C: TriggerControl,
    H: WidgetHost,
{
    pub fn new(
        config: GateConfig,
        transport: T,
        status: S,
        trigger: C,
        host: H,
        video_present: bool,
    ) -> Self {
        let controller = Self {
            transport,
            status: StatusPresenter::new(status),
            trigger,
            host,
            validator: CredentialValidator::new(&config.validate_url),
            orientation: OrientationGate::select(video_present),
            starter: CallStarter::new(
                &config.start_url,
                config.start_event.as_deref(),
                config.ack_policy,
            ),
            mounter: WidgetMounter::new(config.widget),
            token_param: config.token_param,
            notify_url: config.notify_url,
            state: Cell::new(GateState::AwaitingCredential),
            credential: RefCell::new(None),
            torn_down: Cell::new(false),
        };
        // The control starts hidden, whatever the markup says.
        controller.trigger.render(TriggerView::Hidden);
        controller
    }

    pub fn state(&self) -> GateState {
        self.state.get()
    }

    pub fn orientation_mode(&self) -> OrientationMode {
        self.orientation.mode()
    }

    /// Extract the credential from `page_url` and run the gate up to the
    /// point where user input is needed.
    pub async fn run(&self, page_url: &str) -> GateState {
        let credential = Credential::from_page_url(page_url, &self.token_param);
        self.run_with_credential(credential).await
    }

    pub async fn run_with_credential(&self, credential: Option<Credential>) -> GateState {
        if self.state.get() != GateState::AwaitingCredential {
            debug!(state = ?self.state.get(), "gate already started; ignoring run");
            return self.state.get();
        }

        let Some(credential) = credential else {
            self.transition(GateState::MissingCredential);
            self.status.error(GateError::MissingCredential.user_message());
            return self.state.get();
        };
        *self.credential.borrow_mut() = Some(credential.clone());

        self.transition(GateState::Validating);
        self.status.info(messages::CHECKING_TOKEN);
        let outcome = self.validator.validate(&self.transport, &credential).await;
        if self.abandoned("validation") {
            return self.state.get();
        }

        match outcome {
            ValidationOutcome::Valid => {
                self.transition(GateState::AwaitingVideo);
                if self.orientation.is_satisfied() {
                    self.unlock();
                } else {
                    self.status.info(messages::WATCH_VIDEO);
                }
            }
            ValidationOutcome::Invalid => {
                self.transition(GateState::Invalid);
                self.status.error(messages::INVALID_TOKEN);
            }
            ValidationOutcome::NetworkError(_) => {
                self.transition(GateState::ValidationFailed);
                self.status.error(messages::VALIDATION_UNAVAILABLE);
            }
        }
        self.state.get()
    }

    /// The orientation video reported `ended`.
    pub fn on_video_ended(&self) {
        if self.torn_down.get() || !self.orientation.record_completion() {
            return;
        }
        if self.state.get() == GateState::AwaitingVideo {
            self.unlock();
        } else {
            debug!(state = ?self.state.get(), "orientation finished before validation; remembered");
        }
    }

    /// The user activated the start control.
    ///
    /// Moving to `Starting` (which hides and disables the control) happens
    /// before the first suspension point, so overlapping activations see a
    /// state that no longer accepts a start and return immediately.
    pub async fn on_start_requested(&self) -> GateState {
        let current = self.state.get();
        if self.torn_down.get() || !current.accepts_start() {
            debug!(state = ?current, "start trigger ignored");
            return current;
        }
        let Some(credential) = self.credential.borrow().clone() else {
            return current;
        };

        self.transition(GateState::Starting);
        self.status.success(messages::CONNECTING);

        let result = self.starter.start_call(&self.transport, &credential).await;
        if self.abandoned("call start") {
            return self.state.get();
        }

        match result {
            Ok(()) => self.activate(&credential).await,
            Err(err) => {
                let err = GateError::from(err);
                warn!("call start failed: {err}");
                self.transition(GateState::StartFailed);
                self.status.error(err.user_message());
            }
        }
        self.state.get()
    }

    /// The page is going away. Replies that arrive later are dropped.
    pub fn teardown(&self) {
        if !self.torn_down.replace(true) {
            debug!(state = ?self.state.get(), "gate torn down");
        }
    }

    fn unlock(&self) {
        self.transition(GateState::Unlocked);
        let text = match self.orientation.mode() {
            OrientationMode::Video => messages::READY_AFTER_VIDEO,
            OrientationMode::NoVideo => messages::READY_NO_VIDEO,
        };
        self.status.success(text);
    }

    async fn activate(&self, credential: &Credential) {
        self.transition(GateState::Active);
        info!("call started");

        match self.mounter.mount(&self.host) {
            Ok(()) => self.status.success(messages::CONNECTED),
            Err(err) => {
                warn!("{err}");
                self.status.error(err.user_message());
            }
        }

        if let Some(url) = &self.notify_url {
            let body = TokenRequest::with_event(credential.as_str(), Some(EVENT_CALL_STARTED));
            match self.transport.post_json(url, &body).await {
                Ok(reply) if reply.is_success() => debug!("call-start notification delivered"),
                Ok(reply) => warn!(status = reply.status, "call-start notification rejected"),
                Err(err) => warn!("call-start notification failed: {err}"),
            }
        }
    }

    fn transition(&self, next: GateState) {
        let current = self.state.get();
        debug_assert!(
            current.can_transition_to(next),
            "illegal gate transition {current:?} -> {next:?}"
        );
        debug!(from = ?current, to = ?next, "gate transition");
        self.state.set(next);
        self.trigger.render(next.trigger_view());
    }

    fn abandoned(&self, stage: &str) -> bool {
        if self.torn_down.get() {
            debug!(stage, "discarding result after teardown");
            return true;
        }
        false
    }
}
