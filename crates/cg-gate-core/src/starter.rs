use cg_api_types::TokenRequest;
use tracing::{debug, warn};

use crate::config::AckPolicy;
use crate::credential::Credential;
use crate::error::StartError;
use crate::transport::{GateTransport, HttpReply};

/// Issues the call-start request.
///
/// The at-most-once guarantee lives in the controller, which moves to
/// `Starting` before this is awaited. The remote service marks the
/// credential consumed, so a duplicate that slipped through would be
/// rejected server-side as well.
pub struct CallStarter {
    url: String,
    event: Option<String>,
    policy: AckPolicy,
}

impl CallStarter {
    pub fn new(url: &str, event: Option<&str>, policy: AckPolicy) -> Self {
        Self {
            url: url.to_owned(),
            event: event.map(str::to_owned),
            policy,
        }
    }

    pub async fn start_call<T>(&self, transport: &T, credential: &Credential) -> Result<(), StartError>
    where
        T: GateTransport + ?Sized,
    {
        let body = TokenRequest::with_event(credential.as_str(), self.event.as_deref());
        let reply = transport
            .post_json(&self.url, &body)
            .await
            .map_err(|err| StartError::Transport(err.to_string()))?;

        let result = interpret_start(&reply, self.policy);
        match &result {
            Ok(()) => debug!(status = reply.status, "call start accepted"),
            Err(err) => warn!(status = reply.status, body = %reply.body, "{err}"),
        }
        result
    }
}

/// Decide whether a call-start reply is an acceptance.
///
/// A non-2xx status always rejects. A 2xx reply with a JSON `ok` field is
/// judged by that field; without one, `policy` decides.
pub fn interpret_start(reply: &HttpReply, policy: AckPolicy) -> Result<(), StartError> {
    let ack = reply.ack();
    let reason = ack.as_ref().and_then(|ack| ack.start_reason());

    if !reply.is_success() {
        return Err(StartError::Rejected {
            status: Some(reply.status),
            reason,
        });
    }

    match (ack.as_ref().and_then(|ack| ack.ok_flag()), policy) {
        (Some(true), _) => Ok(()),
        (Some(false), _) => Err(StartError::Rejected {
            status: Some(reply.status),
            reason,
        }),
        (None, AckPolicy::Lenient) => Ok(()),
        (None, AckPolicy::Strict) => Err(StartError::Rejected {
            status: Some(reply.status),
            reason,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cg_api_types::StartReason;

    #[test]
    fn non_success_status_rejects_even_with_ok_body() {
        let result = interpret_start(&HttpReply::new(500, r#"{ "ok": true }"#), AckPolicy::Lenient);
        assert_eq!(
            result,
            Err(StartError::Rejected {
                status: Some(500),
                reason: None
            })
        );
    }

    #[test]
    fn structured_rejection_carries_reason() {
        let reply = HttpReply::new(200, r#"{ "ok": false, "reason": "invalid_or_used_token" }"#);
        let result = interpret_start(&reply, AckPolicy::Lenient);
        assert_eq!(
            result,
            Err(StartError::Rejected {
                status: Some(200),
                reason: Some(StartReason::InvalidOrUsedToken)
            })
        );
    }

    #[test]
    fn falsy_ok_rejects_whatever_the_reason_type() {
        for body in [
            r#"{ "ok": false, "reason": 409 }"#,
            r#"{ "ok": 0, "reason": { "code": "busy" } }"#,
        ] {
            let reply = HttpReply::new(200, body);
            assert_eq!(
                interpret_start(&reply, AckPolicy::Lenient),
                Err(StartError::Rejected {
                    status: Some(200),
                    reason: None
                }),
                "{body}"
            );
        }
    }

    #[test]
    fn bare_success_depends_on_policy() {
        for body in ["", "Accepted", r#"{ "queued": 1 }"#] {
            let reply = HttpReply::new(200, body);
            assert_eq!(interpret_start(&reply, AckPolicy::Lenient), Ok(()), "{body:?}");
            assert!(interpret_start(&reply, AckPolicy::Strict).is_err(), "{body:?}");
        }
    }

    #[test]
    fn truthy_ack_is_accepted_under_both_policies() {
        let reply = HttpReply::new(201, r#"{ "ok": "true" }"#);
        assert_eq!(interpret_start(&reply, AckPolicy::Lenient), Ok(()));
        assert_eq!(interpret_start(&reply, AckPolicy::Strict), Ok(()));
    }
}
