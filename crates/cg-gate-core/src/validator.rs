use cg_api_types::TokenRequest;
use tracing::{debug, warn};

use crate::credential::Credential;
use crate::error::GateError;
use crate::transport::{GateTransport, HttpReply};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid,
    Invalid,
    /// Transport failure or a reply without a usable `ok` field. Carries the
    /// raw detail for logs only.
    NetworkError(String),
}

impl ValidationOutcome {
    pub fn into_error(self) -> Option<GateError> {
        match self {
            Self::Valid => None,
            Self::Invalid => Some(GateError::ValidationRejected),
            Self::NetworkError(detail) => Some(GateError::ValidationTransport(detail)),
        }
    }
}

/// Checks a credential against the remote authorization endpoint.
pub struct CredentialValidator {
    url: String,
}

impl CredentialValidator {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_owned(),
        }
    }

    /// One request, never retried. Reports the outcome only; the caller
    /// decides whether it is still wanted and what the page shows.
    pub async fn validate<T>(&self, transport: &T, credential: &Credential) -> ValidationOutcome
    where
        T: GateTransport + ?Sized,
    {
        let body = TokenRequest::new(credential.as_str());
        let outcome = match transport.post_json(&self.url, &body).await {
            Ok(reply) => classify_validation(&reply),
            Err(err) => ValidationOutcome::NetworkError(err.to_string()),
        };

        match &outcome {
            ValidationOutcome::Valid => debug!("credential validated"),
            ValidationOutcome::Invalid => debug!("credential rejected by authorization service"),
            ValidationOutcome::NetworkError(detail) => warn!("token validation failed: {detail}"),
        }

        outcome
    }
}

/// The body decides; the HTTP status is only used to enrich the diagnostic.
pub fn classify_validation(reply: &HttpReply) -> ValidationOutcome {
    let Some(ack) = reply.ack() else {
        return ValidationOutcome::NetworkError(format!(
            "HTTP {}: unparseable validation body",
            reply.status
        ));
    };

    match ack.ok_flag() {
        Some(true) => ValidationOutcome::Valid,
        Some(false) => ValidationOutcome::Invalid,
        None => ValidationOutcome::NetworkError(format!(
            "HTTP {}: validation body has no usable ok field",
            reply.status
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_follows_the_ok_field() {
        assert_eq!(
            classify_validation(&HttpReply::new(200, r#"{ "ok": true }"#)),
            ValidationOutcome::Valid
        );
        assert_eq!(
            classify_validation(&HttpReply::new(200, r#"{ "ok": false, "reason": "used" }"#)),
            ValidationOutcome::Invalid
        );
        // Some hooks answer 4xx with a structured body; the body still decides.
        assert_eq!(
            classify_validation(&HttpReply::new(403, r#"{ "ok": "false" }"#)),
            ValidationOutcome::Invalid
        );
    }

    #[test]
    fn odd_reason_types_do_not_hide_a_rejection() {
        for body in [
            r#"{ "ok": false, "reason": { "code": "used" } }"#,
            r#"{ "ok": false, "reason": 409 }"#,
        ] {
            assert_eq!(
                classify_validation(&HttpReply::new(200, body)),
                ValidationOutcome::Invalid,
                "{body}"
            );
        }
    }

    #[test]
    fn malformed_bodies_are_network_errors() {
        for body in ["", "Accepted", "<html>oops</html>", r#"{ "status": "fine" }"#, "[true]"] {
            let outcome = classify_validation(&HttpReply::new(200, body));
            assert!(
                matches!(outcome, ValidationOutcome::NetworkError(_)),
                "body {body:?} gave {outcome:?}"
            );
        }
    }

    #[test]
    fn outcome_maps_to_error_taxonomy() {
        assert_eq!(ValidationOutcome::Valid.into_error(), None);
        assert_eq!(
            ValidationOutcome::Invalid.into_error(),
            Some(GateError::ValidationRejected)
        );
        assert!(matches!(
            ValidationOutcome::NetworkError("boom".into()).into_error(),
            Some(GateError::ValidationTransport(_))
        ));
    }
}
