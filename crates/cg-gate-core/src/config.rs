use serde::{Deserialize, Serialize};

use crate::error::GateError;

pub const DEFAULT_VALIDATE_URL: &str = "/api/validate-token";
pub const DEFAULT_START_URL: &str = "/api/start-call";
pub const DEFAULT_TOKEN_PARAM: &str = "token";
pub const DEFAULT_WIDGET_SCRIPT_URL: &str = "https://unpkg.com/@elevenlabs/convai-widget-embed";
pub const DEFAULT_WIDGET_ELEMENT: &str = "elevenlabs-convai";
pub const DEFAULT_WIDGET_ID_ATTRIBUTE: &str = "agent-id";

/// How much the call-start response must say before it counts as accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AckPolicy {
    /// A 2xx status is enough; a body is only consulted when it parses.
    #[default]
    Lenient,
    /// A 2xx status must carry a JSON body with a truthy `ok`.
    Strict,
}

impl AckPolicy {
    fn parse(raw: &str) -> Result<Self, GateError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "lenient" => Ok(Self::Lenient),
            "strict" => Ok(Self::Strict),
            other => Err(GateError::Config(format!("unknown ack policy '{other}'"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    pub script_url: String,
    pub element: String,
    pub id_attribute: String,
    pub agent_id: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            script_url: DEFAULT_WIDGET_SCRIPT_URL.to_owned(),
            element: DEFAULT_WIDGET_ELEMENT.to_owned(),
            id_attribute: DEFAULT_WIDGET_ID_ATTRIBUTE.to_owned(),
            agent_id: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    pub validate_url: String,
    pub start_url: String,
    pub notify_url: Option<String>,
    pub token_param: String,
    pub start_event: Option<String>,
    pub ack_policy: AckPolicy,
    pub widget: WidgetConfig,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            validate_url: DEFAULT_VALIDATE_URL.to_owned(),
            start_url: DEFAULT_START_URL.to_owned(),
            notify_url: None,
            token_param: DEFAULT_TOKEN_PARAM.to_owned(),
            start_event: None,
            ack_policy: AckPolicy::default(),
            widget: WidgetConfig::default(),
        }
    }
}

impl GateConfig {
    /// Overlay `CALLGATE_*` variables onto the defaults.
    ///
    /// `lookup` is usually `|key| std::env::var(key).ok()`. Blank values are ignored.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, GateError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
        };

        let mut config = Self::default();
        if let Some(value) = get("CALLGATE_VALIDATE_URL") {
            config.validate_url = value;
        }
        if let Some(value) = get("CALLGATE_START_URL") {
            config.start_url = value;
        }
        if let Some(value) = get("CALLGATE_NOTIFY_URL") {
            config.notify_url = Some(value);
        }
        if let Some(value) = get("CALLGATE_TOKEN_PARAM") {
            config.token_param = value;
        }
        if let Some(value) = get("CALLGATE_START_EVENT") {
            config.start_event = Some(value);
        }
        if let Some(value) = get("CALLGATE_ACK_POLICY") {
            config.ack_policy = AckPolicy::parse(&value)?;
        }
        if let Some(value) = get("CALLGATE_AGENT_ID") {
            config.widget.agent_id = value;
        }
        if let Some(value) = get("CALLGATE_WIDGET_SCRIPT_URL") {
            config.widget.script_url = value;
        }

        config.validate()?;
        Ok(config)
    }

    /// Parse a JSON config block. Missing fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, GateError> {
        let config: Self = serde_json::from_str(raw)
            .map_err(|err| GateError::Config(format!("config block parse: {err}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), GateError> {
        let required = [
            ("validate_url", &self.validate_url),
            ("start_url", &self.start_url),
            ("token_param", &self.token_param),
            ("widget.script_url", &self.widget.script_url),
            ("widget.element", &self.widget.element),
            ("widget.id_attribute", &self.widget.id_attribute),
            ("widget.agent_id", &self.widget.agent_id),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(GateError::Config(format!("{name} must not be empty")));
            }
        }
        // Custom element names must contain a hyphen.
        if !self.widget.element.contains('-') {
            return Err(GateError::Config(format!(
                "widget.element '{}' is not a custom element name",
                self.widget.element
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn lookup_overlays_defaults() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("CALLGATE_VALIDATE_URL", "https://hooks.example/validate"),
            ("CALLGATE_ACK_POLICY", "Strict"),
            ("CALLGATE_AGENT_ID", "agent_42"),
            ("CALLGATE_START_EVENT", "   "),
        ]);

        let config = GateConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string()))
            .expect("config should load");

        assert_eq!(config.validate_url, "https://hooks.example/validate");
        assert_eq!(config.start_url, DEFAULT_START_URL);
        assert_eq!(config.ack_policy, AckPolicy::Strict);
        assert_eq!(config.widget.agent_id, "agent_42");
        assert_eq!(config.start_event, None);
    }

    #[test]
    fn unknown_ack_policy_is_a_config_error() {
        let result = GateConfig::from_lookup(|key| {
            (key == "CALLGATE_ACK_POLICY").then(|| "paranoid".to_owned())
        });
        assert!(matches!(result, Err(GateError::Config(_))));
    }

    #[test]
    fn json_block_keeps_defaults_for_missing_fields() {
        let config = GateConfig::from_json(
            r#"{ "start_url": "https://hooks.example/start", "widget": { "agent_id": "a1" } }"#,
        )
        .expect("config should parse");

        assert_eq!(config.start_url, "https://hooks.example/start");
        assert_eq!(config.validate_url, DEFAULT_VALIDATE_URL);
        assert_eq!(config.widget.element, DEFAULT_WIDGET_ELEMENT);
        assert_eq!(config.widget.agent_id, "a1");
    }

    #[test]
    fn empty_urls_are_rejected() {
        let result = GateConfig::from_json(r#"{ "validate_url": "" }"#);
        assert!(matches!(result, Err(GateError::Config(_))));

        let result = GateConfig::from_json(r#"{ "widget": { "element": "div", "agent_id": "a1" } }"#);
        assert!(matches!(result, Err(GateError::Config(_))));
    }

    #[test]
    fn widget_needs_an_agent_id() {
        assert!(matches!(
            GateConfig::default().validate(),
            Err(GateError::Config(msg)) if msg.contains("agent_id")
        ));
        assert!(matches!(
            GateConfig::from_lookup(|_| None),
            Err(GateError::Config(_))
        ));
        assert!(GateConfig::from_json(r#"{ "widget": { "agent_id": "  " } }"#).is_err());
        assert!(GateConfig::from_json(r#"{ "widget": { "agent_id": "agent_santa" } }"#).is_ok());
    }
}
