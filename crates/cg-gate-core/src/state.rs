use crate::trigger::TriggerView;

/// Where the page is in the unlock sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    AwaitingCredential,
    MissingCredential,
    Validating,
    Invalid,
    ValidationFailed,
    AwaitingVideo,
    Unlocked,
    Starting,
    StartFailed,
    Active,
}

impl GateState {
    /// States from which a user trigger may begin a call-start.
    pub fn accepts_start(self) -> bool {
        matches!(self, Self::Unlocked | Self::StartFailed)
    }

    /// States with no outgoing transitions for the rest of the page load.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            Self::MissingCredential | Self::Invalid | Self::ValidationFailed | Self::Active
        )
    }

    /// The control is interactable exactly when a start may begin.
    pub fn trigger_view(self) -> TriggerView {
        match self {
            Self::AwaitingVideo => TriggerView::Locked,
            Self::Unlocked | Self::StartFailed => TriggerView::Ready,
            Self::AwaitingCredential
            | Self::MissingCredential
            | Self::Validating
            | Self::Invalid
            | Self::ValidationFailed
            | Self::Starting
            | Self::Active => TriggerView::Hidden,
        }
    }

    /// Whether the state machine allows moving from `self` to `next`.
    pub fn can_transition_to(self, next: GateState) -> bool {
        use GateState::*;
        matches!(
            (self, next),
            (AwaitingCredential, MissingCredential)
                | (AwaitingCredential, Validating)
                | (Validating, Invalid)
                | (Validating, ValidationFailed)
                | (Validating, AwaitingVideo)
                | (AwaitingVideo, Unlocked)
                | (Unlocked, Starting)
                | (StartFailed, Starting)
                | (Starting, StartFailed)
                | (Starting, Active)
        )
    }
}
