//! Core data structures shared by the sanitizer and the info extractor.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use url::Url;

/// Options controlling [`sanitize_url_with`](crate::sanitize_url_with).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SanitizeOptions {
    /// Permitted URL schemes. A trailing `:` is ignored, so `"ftp"` and `"ftp:"` are equivalent.
    pub allowed_protocols: Vec<String>,
    /// Strip the fragment (`#...`) from the URL.
    pub remove_hash: bool,
}

impl Default for SanitizeOptions {
    fn default() -> Self {
        Self {
            allowed_protocols: vec!["http".to_string(), "https".to_string()],
            remove_hash: true,
        }
    }
}

impl SanitizeOptions {
    /// Create options with the default protocol set (`http`, `https`) and fragment removal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the allowed protocol set.
    pub fn with_protocols<I, S>(mut self, protocols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_protocols = protocols.into_iter().map(Into::into).collect();
        self
    }

    /// Add one protocol to the allowed set.
    pub fn allow_protocol(mut self, protocol: impl Into<String>) -> Self {
        self.allowed_protocols.push(protocol.into());
        self
    }

    /// Keep the fragment instead of stripping it.
    pub fn keep_hash(mut self) -> Self {
        self.remove_hash = false;
        self
    }

    /// Check whether a parsed scheme (without trailing `:`) is allowed.
    pub fn allows(&self, scheme: &str) -> bool {
        self.allowed_protocols
            .iter()
            .any(|p| p.trim_end_matches(':').eq_ignore_ascii_case(scheme))
    }
}

/// A hostname split against the ICANN section of the Public Suffix List.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainParts {
    /// Registrable domain (eTLD+1), e.g. `facebook.com`. Empty when there is none.
    pub domain: String,
    /// Labels left of the registrable domain, e.g. `www`. Empty when there are none.
    pub subdomain: String,
    /// Whether the suffix is an ICANN-recognized public suffix.
    pub is_icann: bool,
}

impl DomainParts {
    /// A hostname is usable only with a registrable domain under an ICANN suffix.
    pub fn is_valid(&self) -> bool {
        !self.domain.is_empty() && self.is_icann
    }
}

/// Structured identity information recovered from a URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlInfo {
    /// The input exactly as given.
    pub original_url: String,
    /// The sanitized, canonical URL.
    pub url: String,
    pub hostname: String,
    pub domain: String,
    pub subdomain: String,
    /// Human-chosen account name, when one was recognized.
    pub handle: Option<String>,
    /// Platform-assigned account id, when one was recognized.
    pub provider_id: Option<String>,
}

impl UrlInfo {
    /// True when either a handle or a provider id was recognized.
    pub fn has_identity(&self) -> bool {
        self.handle.is_some() || self.provider_id.is_some()
    }
}

/// Accepted URL inputs: a raw string or an already parsed [`Url`].
#[derive(Debug, Clone)]
pub enum UrlInput<'a> {
    Raw(Cow<'a, str>),
    Parsed(Cow<'a, Url>),
}

impl UrlInput<'_> {
    /// The input as the caller supplied it, before any coercion.
    pub fn original(&self) -> String {
        match self {
            UrlInput::Raw(raw) => raw.to_string(),
            UrlInput::Parsed(url) => url.as_str().to_string(),
        }
    }
}

impl<'a> From<&'a str> for UrlInput<'a> {
    fn from(raw: &'a str) -> Self {
        UrlInput::Raw(Cow::Borrowed(raw))
    }
}

impl<'a> From<&'a String> for UrlInput<'a> {
    fn from(raw: &'a String) -> Self {
        UrlInput::Raw(Cow::Borrowed(raw.as_str()))
    }
}

impl From<String> for UrlInput<'_> {
    fn from(raw: String) -> Self {
        UrlInput::Raw(Cow::Owned(raw))
    }
}

impl<'a> From<&'a Url> for UrlInput<'a> {
    fn from(url: &'a Url) -> Self {
        UrlInput::Parsed(Cow::Borrowed(url))
    }
}

impl From<Url> for UrlInput<'_> {
    fn from(url: Url) -> Self {
        UrlInput::Parsed(Cow::Owned(url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = SanitizeOptions::default();
        assert!(opts.remove_hash);
        assert!(opts.allows("http"));
        assert!(opts.allows("https"));
        assert!(!opts.allows("ftp"));
    }

    #[test]
    fn test_protocol_names_ignore_trailing_colon() {
        let opts = SanitizeOptions::new().with_protocols(["http:", "https:", "ftp:"]);
        assert!(opts.allows("ftp"));
        assert!(opts.allows("http"));
        assert!(!opts.allows("javascript"));

        let opts = SanitizeOptions::new().allow_protocol("FTP");
        assert!(opts.allows("ftp"));
    }

    #[test]
    fn test_keep_hash() {
        assert!(!SanitizeOptions::new().keep_hash().remove_hash);
    }

    #[test]
    fn test_domain_parts_validity() {
        let valid = DomainParts {
            domain: "example.com".to_string(),
            subdomain: String::new(),
            is_icann: true,
        };
        assert!(valid.is_valid());

        let private = DomainParts { is_icann: false, ..valid.clone() };
        assert!(!private.is_valid());
        assert!(!DomainParts::default().is_valid());
    }

    #[test]
    fn test_url_input_original() {
        assert_eq!(UrlInput::from("google.com").original(), "google.com");

        let parsed = Url::parse("https://example.com/a").unwrap();
        assert_eq!(UrlInput::from(&parsed).original(), "https://example.com/a");
    }

    #[test]
    fn test_url_info_identity() {
        let info = UrlInfo {
            original_url: "https://github.com/rust-lang".to_string(),
            url: "https://github.com/rust-lang".to_string(),
            hostname: "github.com".to_string(),
            domain: "github.com".to_string(),
            subdomain: String::new(),
            handle: Some("rust-lang".to_string()),
            provider_id: None,
        };
        assert!(info.has_identity());
        assert!(!UrlInfo { handle: None, ..info }.has_identity());
    }
}
