//! Turning loose user input into a structured [`Url`].

use log::trace;
use url::Url;

use crate::error::UrlError;
use crate::types::UrlInput;
use crate::url::psl::classify_domain;

/// Coerce a raw string or a parsed URL into a [`Url`].
///
/// Strings are trimmed and parsed as absolute URLs. When that fails, the
/// parse is retried with an `http://` prefix, which lets bare domains such
/// as `google.com` through. The retry is kept only if its host has a
/// registrable domain, so single words like `invalid-url` stay invalid.
///
/// # Examples
///
/// ```
/// use socialurl::url::ensure_url;
///
/// let url = ensure_url("google.com").unwrap();
/// assert_eq!(url.as_str(), "http://google.com/");
///
/// assert!(ensure_url("invalid-url").is_err());
/// ```
pub fn ensure_url<'a>(input: impl Into<UrlInput<'a>>) -> Result<Url, UrlError> {
    match input.into() {
        UrlInput::Parsed(url) => Ok(url.into_owned()),
        UrlInput::Raw(raw) => parse_loose(raw.trim()),
    }
}

fn parse_loose(raw: &str) -> Result<Url, UrlError> {
    if let Ok(url) = Url::parse(raw) {
        return Ok(url);
    }

    let prefixed = Url::parse(&format!("http://{}", raw))?;
    let has_domain = prefixed
        .host_str()
        .map(|host| !classify_domain(host).domain.is_empty())
        .unwrap_or(false);

    if has_domain {
        trace!("Assumed http:// for schemeless input: {}", raw);
        Ok(prefixed)
    } else {
        Err(UrlError::InvalidUrl)
    }
}
