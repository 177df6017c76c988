//! Identity extraction from sanitized URLs.

use log::trace;

use crate::core::sanitizer::sanitize;
use crate::error::UrlError;
use crate::rules::{identify, RuleContext};
use crate::types::{SanitizeOptions, UrlInfo, UrlInput};
use crate::url::psl::validate_domain;
use crate::url::utils::path_segments;

/// Sanitize a URL and recover the platform identity it points at.
///
/// The URL is sanitized with default options, split against the Public
/// Suffix List, and run through the ordered platform rules. `handle` and
/// `provider_id` stay `None` when no rule recognizes the URL.
///
/// # Examples
///
/// ```
/// use socialurl::url_info;
///
/// let info = url_info("https://www.linkedin.com/in/bjimenez23/").unwrap();
/// assert_eq!(info.domain, "linkedin.com");
/// assert_eq!(info.subdomain, "www");
/// assert_eq!(info.handle.as_deref(), Some("bjimenez23"));
/// assert_eq!(info.provider_id, None);
/// ```
pub fn url_info<'a>(input: impl Into<UrlInput<'a>>) -> Result<UrlInfo, UrlError> {
    let input = input.into();
    let original_url = input.original();

    let url = sanitize(input, &SanitizeOptions::default())?;
    let hostname = url.host_str().unwrap_or_default().to_string();
    let parts = validate_domain(&hostname)?;
    let segments = path_segments(&url);

    let identity = identify(&RuleContext {
        url: &url,
        domain: &parts.domain,
        subdomain: &parts.subdomain,
        segments: &segments,
    });
    trace!("Identity for {}: {:?}", url, identity);

    Ok(UrlInfo {
        original_url,
        url: url.to_string(),
        hostname,
        domain: parts.domain,
        subdomain: parts.subdomain,
        handle: identity.handle,
        provider_id: identity.provider_id,
    })
}
