use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Reason code sent by the call-start service when the credential was already consumed.
pub const REASON_INVALID_OR_USED_TOKEN: &str = "invalid_or_used_token";

/// Event tag used for the best-effort notification after a call starts.
pub const EVENT_CALL_STARTED: &str = "call_started";

/// Body of both the validation and the call-start request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenRequest {
    pub token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,
}

impl TokenRequest {
    pub fn new(token: &str) -> Self {
        Self {
            token: token.to_owned(),
            event: None,
        }
    }

    pub fn with_event(token: &str, event: Option<&str>) -> Self {
        Self {
            token: token.to_owned(),
            event: event.map(str::to_owned),
        }
    }
}

/// Structured acknowledgment returned by the remote services.
///
/// Both fields are kept as raw JSON values because deployments disagree on
/// their types (`true`, `"true"`, `1`; a string code or a numeric status).
/// Use [`GateAck::ok_flag`] and [`GateAck::start_reason`] to read them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GateAck {
    #[serde(default)]
    pub ok: Option<Value>,
    #[serde(default)]
    pub reason: Option<Value>,
}

impl GateAck {
    pub fn ok_flag(&self) -> Option<bool> {
        self.ok.as_ref().and_then(bool_like)
    }

    pub fn start_reason(&self) -> Option<StartReason> {
        self.reason
            .as_ref()
            .and_then(Value::as_str)
            .and_then(StartReason::from_code)
    }
}

/// Machine-readable rejection reason reported by the call-start service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartReason {
    InvalidOrUsedToken,
    Other(String),
}

impl StartReason {
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        if code.is_empty() {
            return None;
        }
        if code == REASON_INVALID_OR_USED_TOKEN {
            return Some(Self::InvalidOrUsedToken);
        }
        Some(Self::Other(code.to_owned()))
    }
}

/// Interpret a JSON value as a boolean the way the hook services emit it.
pub fn bool_like(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(flag) => Some(*flag),
        Value::Number(number) => number.as_f64().map(|n| n != 0.0),
        Value::String(text) => match text.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" => Some(true),
            "false" | "0" | "no" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ok_flag_accepts_bool_like_values() {
        let cases = [
            (json!({ "ok": true }), Some(true)),
            (json!({ "ok": "false" }), Some(false)),
            (json!({ "ok": 1 }), Some(true)),
            (json!({ "ok": null }), None),
            (json!({ "ok": "maybe" }), None),
            (json!({}), None),
        ];

        for (body, expected) in cases {
            let ack: GateAck = serde_json::from_value(body.clone()).expect("ack parses");
            assert_eq!(ack.ok_flag(), expected, "body: {body}");
        }
    }

    #[test]
    fn non_string_reason_keeps_ok_readable() {
        for body in [
            json!({ "ok": false, "reason": 409 }),
            json!({ "ok": false, "reason": { "code": "used" } }),
            json!({ "ok": false, "reason": ["used"] }),
        ] {
            let ack: GateAck = serde_json::from_value(body.clone()).expect("ack parses");
            assert_eq!(ack.ok_flag(), Some(false), "body: {body}");
            assert_eq!(ack.start_reason(), None, "body: {body}");
        }
    }

    #[test]
    fn token_request_omits_missing_event() {
        let body = serde_json::to_value(TokenRequest::new("abc123")).expect("serializes");
        assert_eq!(body, json!({ "token": "abc123" }));

        let tagged = TokenRequest::with_event("abc123", Some("start_call"));
        let body = serde_json::to_value(tagged).expect("serializes");
        assert_eq!(body, json!({ "token": "abc123", "event": "start_call" }));
    }

    #[test]
    fn start_reason_recognizes_used_token() {
        assert_eq!(
            StartReason::from_code("invalid_or_used_token"),
            Some(StartReason::InvalidOrUsedToken)
        );
        assert_eq!(
            StartReason::from_code("agent_busy"),
            Some(StartReason::Other("agent_busy".to_owned()))
        );
        assert_eq!(StartReason::from_code("  "), None);
    }
}
