use cg_api_types::StartReason;
use thiserror::Error;

use crate::messages;

/// Failure raised by a [`crate::GateTransport`] before any HTTP status was seen.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("transport error: {0}")]
pub struct TransportError(pub String);

impl TransportError {
    pub fn new(detail: impl Into<String>) -> Self {
        Self(detail.into())
    }
}

/// Outcome of a failed call-start attempt.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StartError {
    #[error("call start rejected (status {status:?}, reason {reason:?})")]
    Rejected {
        status: Option<u16>,
        reason: Option<StartReason>,
    },
    #[error("call start transport failure: {0}")]
    Transport(String),
}

/// Every failure the gate can surface. Each maps to one fixed user message.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GateError {
    #[error("no credential in navigation parameters")]
    MissingCredential,
    #[error("credential rejected by the authorization service")]
    ValidationRejected,
    #[error("credential validation failed: {0}")]
    ValidationTransport(String),
    #[error("call start rejected (status {status:?}, reason {reason:?})")]
    StartRejected {
        status: Option<u16>,
        reason: Option<StartReason>,
    },
    #[error("call start transport failure: {0}")]
    StartTransport(String),
    #[error("widget container is not present on the page")]
    WidgetMountUnavailable,
    #[error("invalid gate configuration: {0}")]
    Config(String),
}

impl GateError {
    /// Friendly text shown in the status surface. Never includes raw detail.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::MissingCredential => messages::MISSING_TOKEN,
            Self::ValidationRejected => messages::INVALID_TOKEN,
            Self::ValidationTransport(_) => messages::VALIDATION_UNAVAILABLE,
            Self::StartRejected {
                reason: Some(StartReason::InvalidOrUsedToken),
                ..
            } => messages::START_TOKEN_USED,
            Self::StartRejected { .. } | Self::StartTransport(_) => messages::START_FAILED,
            Self::WidgetMountUnavailable => messages::WIDGET_UNAVAILABLE,
            Self::Config(_) => messages::CONFIG_INVALID,
        }
    }
}

impl From<StartError> for GateError {
    fn from(err: StartError) -> Self {
        match err {
            StartError::Rejected { status, reason } => Self::StartRejected { status, reason },
            StartError::Transport(detail) => Self::StartTransport(detail),
        }
    }
}
