//! Public Suffix List integration for domain validation and splitting.

use log::debug;
use psl::{List, Psl, Type};

use crate::error::UrlError;
use crate::types::DomainParts;
use crate::url::utils::validate_hostname;

/// Split a hostname into registrable domain and subdomain.
///
/// Only the ICANN section of the Public Suffix List counts: private
/// suffixes such as `github.io` or `blogspot.com` are treated as ordinary
/// registrable domains, so `alice.github.io` splits into domain `github.io`
/// and subdomain `alice`.
///
/// Hostnames with malformed labels, or without a label left of the public
/// suffix, produce an empty [`DomainParts`]. Hostnames under an unknown
/// suffix keep their split but are flagged as not ICANN.
///
/// # Examples
///
/// ```
/// use socialurl::classify_domain;
///
/// let parts = classify_domain("www.facebook.com");
/// assert_eq!(parts.domain, "facebook.com");
/// assert_eq!(parts.subdomain, "www");
/// assert!(parts.is_icann);
/// ```
pub fn classify_domain(hostname: &str) -> DomainParts {
    // A fully qualified name classifies like its relative form
    let hostname = hostname.strip_suffix('.').unwrap_or(hostname);
    if validate_hostname(hostname).is_err() {
        return DomainParts::default();
    }

    let Some((suffix, is_icann)) = icann_suffix(hostname) else {
        return DomainParts::default();
    };

    // Nothing left of the suffix means there is no registrable domain
    let Some(rest) = hostname
        .strip_suffix(suffix.as_str())
        .and_then(|rest| rest.strip_suffix('.'))
        .filter(|rest| !rest.is_empty())
    else {
        return DomainParts::default();
    };

    let (subdomain, label) = match rest.rsplit_once('.') {
        Some((subdomain, label)) => (subdomain.to_string(), label),
        None => (String::new(), rest),
    };

    DomainParts {
        domain: format!("{}.{}", label, suffix),
        subdomain,
        is_icann,
    }
}

/// Classify a hostname and require a registrable ICANN domain.
pub fn validate_domain(hostname: &str) -> Result<DomainParts, UrlError> {
    let parts = classify_domain(hostname);
    if parts.is_valid() {
        Ok(parts)
    } else {
        debug!("Rejecting hostname without a valid internet domain: {}", hostname);
        Err(UrlError::InvalidDomain(hostname.to_string()))
    }
}

/// Find the public suffix of a hostname, skipping private-section rules.
///
/// A private suffix is shortened one label at a time until the list
/// reports an ICANN (or unknown) suffix for what remains.
fn icann_suffix(hostname: &str) -> Option<(String, bool)> {
    let mut name = hostname;
    loop {
        let suffix = List.suffix(name.as_bytes())?;
        let text = std::str::from_utf8(suffix.as_bytes()).ok()?;
        match suffix.typ() {
            Some(Type::Icann) => return Some((text.to_string(), true)),
            Some(Type::Private) => {
                let (_, shorter) = text.split_once('.')?;
                name = &hostname[hostname.len() - shorter.len()..];
            }
            None => return Some((text.to_string(), false)),
        }
    }
}
