//! URL sanitization.
//!
//! This module provides the main API for turning untrusted, user-submitted
//! URLs into a canonical, tracking-free form.

use log::{debug, trace};
use url::Url;

use crate::error::UrlError;
use crate::rules;
use crate::types::{SanitizeOptions, UrlInput};
use crate::url::coerce::ensure_url;
use crate::url::psl::validate_domain;
use crate::url::utils::{bare_hostname, remove_query_params};

/// Sanitize a URL and return it as a structured [`Url`].
///
/// The steps run in a fixed order:
/// 1. Coerce the input (bare domains get `http://`)
/// 2. Check the scheme against `options.allowed_protocols`
/// 3. Require a registrable ICANN domain
/// 4. Drop the fragment when `options.remove_hash` is set
/// 5. Apply hostname corrections (`facebook.com` becomes `www.facebook.com`)
/// 6. Upgrade `http` to `https` on known secure domains
/// 7. Strip tracking, language and domain-specific query parameters
pub fn sanitize<'a>(
    input: impl Into<UrlInput<'a>>,
    options: &SanitizeOptions,
) -> Result<Url, UrlError> {
    let mut url = ensure_url(input)?;

    if !options.allows(url.scheme()) {
        debug!("Rejecting disallowed protocol {:?}", url.scheme());
        return Err(UrlError::DisallowedProtocol(format!("{}:", url.scheme())));
    }

    let hostname = url.host_str().unwrap_or_default().to_string();
    validate_domain(&hostname)?;

    if options.remove_hash {
        url.set_fragment(None);
    }

    if let Some(rewrite) = rules::hostname_rewrite(&hostname) {
        trace!("Rewriting hostname {} to {}", hostname, rewrite);
        url.set_host(Some(rewrite))?;
    }

    // Rewrites run first so the bare hostname reflects the corrected host
    let bare = bare_hostname(url.host_str().unwrap_or_default()).to_string();

    if url.scheme() == "http" && rules::is_secure_domain(&bare) {
        trace!("Upgrading {} to https", bare);
        url.set_scheme("https").map_err(|_| UrlError::InvalidUrl)?;
    }

    let extra = rules::domain_params(&bare);
    let removed = remove_query_params(&mut url, |name| {
        rules::is_stripped_param(name) || extra.map_or(false, |params| params.contains(name))
    });
    if removed > 0 {
        trace!("Removed {} query parameters from {}", removed, bare);
    }

    Ok(url)
}

/// Sanitize a URL with the given options and return the canonical string.
///
/// # Examples
///
/// ```
/// use socialurl::{sanitize_url_with, SanitizeOptions};
///
/// let opts = SanitizeOptions::new().allow_protocol("ftp");
/// assert_eq!(sanitize_url_with("ftp://ftp.host", &opts).unwrap(), "ftp://ftp.host/");
/// ```
pub fn sanitize_url_with<'a>(
    input: impl Into<UrlInput<'a>>,
    options: &SanitizeOptions,
) -> Result<String, UrlError> {
    sanitize(input, options).map(String::from)
}

/// Sanitize a URL with default options and return the canonical string.
///
/// # Examples
///
/// ```
/// use socialurl::sanitize_url;
///
/// assert_eq!(sanitize_url("google.com").unwrap(), "https://google.com/");
/// assert_eq!(
///     sanitize_url("https://www.facebook.com/oculus/?ref=bookmarks").unwrap(),
///     "https://www.facebook.com/oculus/"
/// );
/// ```
pub fn sanitize_url<'a>(input: impl Into<UrlInput<'a>>) -> Result<String, UrlError> {
    sanitize_url_with(input, &SanitizeOptions::default())
}
