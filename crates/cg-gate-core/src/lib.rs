//! Call gate core.
//!
//! Platform-neutral state machine that unlocks a "start call" control after a
//! one-time credential is validated and the orientation video is watched, then
//! starts the call and mounts the conversational widget. The browser front end
//! and the native probe plug their own collaborators into [`GateController`].

pub mod config;
pub mod controller;
pub mod credential;
pub mod error;
pub mod messages;
pub mod orientation;
pub mod starter;
pub mod state;
pub mod status;
pub mod transport;
pub mod trigger;
pub mod validator;
pub mod widget;

#[cfg(test)]
mod test_support;

pub use config::{AckPolicy, GateConfig, WidgetConfig};
pub use controller::GateController;
pub use credential::Credential;
pub use error::{GateError, StartError, TransportError};
pub use orientation::{OrientationGate, OrientationMode};
pub use starter::{CallStarter, interpret_start};
pub use state::GateState;
pub use status::{StatusKind, StatusMessage, StatusPresenter, StatusSurface};
pub use transport::{GateTransport, HttpReply};
pub use trigger::{TriggerControl, TriggerView};
pub use validator::{CredentialValidator, ValidationOutcome, classify_validation};
pub use widget::{ScriptRegistry, WidgetElement, WidgetHost, WidgetMounter};
