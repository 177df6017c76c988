//! Small URL helpers used by the sanitizer and the info extractor.

use url::Url;

/// Host prefixes dropped when computing the bare hostname for table lookups.
const HOST_PREFIXES: [&str; 3] = ["www.", "mobile.", "m."];

/// Why a hostname failed label validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostnameError {
    /// No characters at all.
    Empty,
    /// Longer than 253 characters.
    TooLong,
    /// A label is empty, too long or uses characters outside `[a-z0-9_-]`.
    BadLabel,
}

/// Validate the labels of a hostname.
///
/// Each label must be 1-63 characters of lowercase letters, digits, `-` or
/// `_`. It must end with a letter or digit and start with one or with `_`,
/// as in `_dmarc`. A single trailing dot (`example.com.`) is allowed.
pub fn validate_hostname(host: &str) -> Result<(), HostnameError> {
    if host.is_empty() {
        return Err(HostnameError::Empty);
    }
    if host.len() > 253 {
        return Err(HostnameError::TooLong);
    }

    let host = host.strip_suffix('.').unwrap_or(host);
    for label in host.split('.') {
        if label.is_empty() || label.len() > 63 {
            return Err(HostnameError::BadLabel);
        }
        if !label
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-' || b == b'_')
        {
            return Err(HostnameError::BadLabel);
        }
        let first = label.as_bytes()[0];
        let last = label.as_bytes()[label.len() - 1];
        if !(first.is_ascii_alphanumeric() || first == b'_') || !last.is_ascii_alphanumeric() {
            return Err(HostnameError::BadLabel);
        }
    }

    Ok(())
}

/// Strip at most one leading `www.`, `mobile.` or `m.` label.
///
/// ```
/// use socialurl::url::bare_hostname;
///
/// assert_eq!(bare_hostname("www.instagram.com"), "instagram.com");
/// assert_eq!(bare_hostname("mobile.twitter.com"), "twitter.com");
/// assert_eq!(bare_hostname("www.m.example.com"), "m.example.com");
/// ```
pub fn bare_hostname(host: &str) -> &str {
    HOST_PREFIXES
        .iter()
        .find_map(|prefix| host.strip_prefix(prefix))
        .unwrap_or(host)
}

/// Non-empty path segments of a URL, still percent-encoded.
pub fn path_segments(url: &Url) -> Vec<String> {
    url.path_segments()
        .map(|segments| {
            segments
                .filter(|s| !s.is_empty())
                .map(|s| s.to_string())
                .collect()
        })
        .unwrap_or_default()
}

/// First value of a query parameter.
pub fn query_value(url: &Url, key: &str) -> Option<String> {
    url.query_pairs()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}

/// Remove every query parameter whose name matches `should_remove`.
///
/// All occurrences of a repeated key are removed. The remaining parameters
/// are re-serialized as `application/x-www-form-urlencoded`, and an empty
/// query is dropped together with its `?`. Returns the number of removed pairs.
pub fn remove_query_params<F>(url: &mut Url, should_remove: F) -> usize
where
    F: Fn(&str) -> bool,
{
    if url.query().is_none() {
        return 0;
    }

    let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
    let total = pairs.len();
    let kept: Vec<(String, String)> = pairs
        .into_iter()
        .filter(|(key, _)| !should_remove(key))
        .collect();

    if kept.is_empty() {
        url.set_query(None);
    } else {
        url.query_pairs_mut()
            .clear()
            .extend_pairs(kept.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    }

    total - kept.len()
}
