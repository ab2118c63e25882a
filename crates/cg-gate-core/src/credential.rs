use std::fmt;

use url::{Url, form_urlencoded};

/// One-time credential carried in the page link.
///
/// `Debug` only prints the length so the value never ends up in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap a raw value, unchanged. Only the empty string counts as absent.
    pub fn new(raw: &str) -> Option<Self> {
        if raw.is_empty() {
            None
        } else {
            Some(Self(raw.to_owned()))
        }
    }

    /// Read `param` from a full page URL.
    pub fn from_page_url(page_url: &str, param: &str) -> Option<Self> {
        let url = Url::parse(page_url).ok()?;
        url.query_pairs()
            .find(|(key, _)| key == param)
            .and_then(|(_, value)| Self::new(&value))
    }

    /// Read `param` from a raw query string, with or without the leading `?`.
    pub fn from_query(query: &str, param: &str) -> Option<Self> {
        let query = query.strip_prefix('?').unwrap_or(query);
        form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == param)
            .and_then(|(_, value)| Self::new(&value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Credential(<{} chars>)", self.0.chars().count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_token_from_page_url() {
        let credential =
            Credential::from_page_url("https://calls.example/orientation.html?token=abc123", "token");
        assert_eq!(credential.as_ref().map(Credential::as_str), Some("abc123"));
    }

    #[test]
    fn decodes_percent_encoded_values() {
        let credential = Credential::from_query("?lang=en&token=a%2Bb%3D%3D", "token");
        assert_eq!(credential.as_ref().map(Credential::as_str), Some("a+b=="));
    }

    #[test]
    fn missing_or_blank_token_is_absent() {
        assert!(Credential::from_page_url("https://calls.example/orientation.html", "token").is_none());
        assert!(Credential::from_query("token=", "token").is_none());
        assert!(Credential::from_query("tok=abc", "token").is_none());
        assert!(Credential::from_page_url("not a url", "token").is_none());
    }

    #[test]
    fn value_is_passed_through_opaque() {
        let credential = Credential::from_query("token=%20abc%20", "token");
        assert_eq!(credential.as_ref().map(Credential::as_str), Some(" abc "));

        let credential =
            Credential::from_page_url("https://calls.example/orientation.html?token=+", "token");
        assert_eq!(credential.as_ref().map(Credential::as_str), Some(" "));
    }

    #[test]
    fn debug_output_hides_the_value() {
        let credential = Credential::new("secret-value").expect("non-empty");
        let rendered = format!("{credential:?}");
        assert!(!rendered.contains("secret"));
        assert_eq!(rendered, "Credential(<12 chars>)");
    }
}
