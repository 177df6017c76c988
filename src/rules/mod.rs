//! Static rule tables consulted by the sanitizer and the info extractor.
//!
//! The tables are built once on first use and never mutated, so they can be
//! shared freely between threads.

pub mod platforms;

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;

pub use platforms::{identify, Identity, RuleContext, PLATFORM_RULES};

/// Exact hostname corrections applied before any other lookup.
static HOSTNAME_REWRITES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("instagram.com", "www.instagram.com"),
        ("facebook.com", "www.facebook.com"),
        ("m.facebook.com", "www.facebook.com"),
        ("www.twitter.com", "twitter.com"),
        ("mobile.twitter.com", "twitter.com"),
    ])
});

// TODO: replace with the Chromium HSTS preload list once a vendored copy is available
static SECURE_DOMAINS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "example.com",
        "google.com",
        "twitter.com",
        "facebook.com",
        "instagram.com",
        "tiktok.com",
        "youtube.com",
        "linkedin.com",
        "whatsapp.com",
        "tumblr.com",
    ])
});

/// Query parameters that only select a display language.
pub const LANGUAGE_PARAMS: &[&str] = &["locale", "language", "lang", "Lang", "hl"];

/// Query parameters added by share buttons and analytics.
pub const TRACKING_PARAMS: &[&str] = &[
    "_ga",
    "fbclid", // Meta
    "ref",
    "ref_src",
    "ref_url",
    "referer",
    "ref_",
    "fref",
    "pnref",
    "originalSubdomain", // LinkedIn
    "original_referer",
    "share_app_id",
    "share_author_id",
    "share_link_id",
    "share_id", // Snapchat
    "sid",      // Snapchat
    "utm_campaign",
    "utm_content",
    "utm_medium",
    "utm_source",
    "utm_name",
    "usp",
    "trk",
    "si", // Spotify, YouTube
    "nd", // Spotify
    "pq-origsite",
];

static STRIPPED_PARAMS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    TRACKING_PARAMS
        .iter()
        .chain(LANGUAGE_PARAMS)
        .copied()
        .collect()
});

static DOMAIN_PARAMS: Lazy<HashMap<&'static str, HashSet<&'static str>>> = Lazy::new(|| {
    HashMap::from([
        ("instagram.com", HashSet::from(["igshid", "igsh"])),
        ("twitter.com", HashSet::from(["s", "t"])),
        (
            "tiktok.com",
            HashSet::from([
                "_d",
                "_r",
                "_s",
                "_t",
                "checksum",
                "sec_uid",
                "sec_user_id",
                "tt_from",
                "u_code",
                "user_id",
            ]),
        ),
    ])
});

/// Handle patterns for platforms whose first path segment is the account.
static HANDLE_REGEX_BY_DOMAIN: Lazy<HashMap<&'static str, Regex>> = Lazy::new(|| {
    let twitter = r"^[A-Za-z0-9_]{1,15}$";
    [
        ("github.com", r"(?i)^[a-z0-9-]{2,}$"),
        ("instagram.com", r"^[A-Za-z0-9_.]{2,30}$"),
        ("pinterest.com", r"(?i)^[a-z0-9_]{1,15}$"),
        ("tiktok.com", r"(?i)^@?[a-z0-9_.]{2,30}$"),
        ("twitter.com", twitter),
        ("x.com", twitter),
        ("youtube.com", r"^@?[A-Za-z0-9_.-]{3,30}$"),
    ]
    .into_iter()
    .map(|(domain, pattern)| (domain, Regex::new(pattern).unwrap()))
    .collect()
});

static FACEBOOK_HANDLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^[a-z0-9.]+$").unwrap());

/// Reserved path segments that are never account names.
static FORBIDDEN_HANDLES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "accounts", "add", "c", "channel", "direct", "discover", "embed",
        "events", "explore", "feed", "groups", "hashtag", "home", "i", "ideas",
        "in", "intent", "live", "login", "marketplace", "messages",
        "notifications", "orgs", "p", "pages", "people", "pin", "playlist",
        "profile.php", "reel", "reels", "results", "search", "settings",
        "share", "sharer.php", "shorts", "signup", "sponsors", "stories",
        "tag", "topics", "trending", "tv", "user", "watch",
    ])
});

/// Publishing platforms that give every account its own subdomain.
pub const SUBDOMAIN_HANDLE_DOMAINS: &[&str] = &[
    "tumblr.com",
    "substack.com",
    "github.io",
    "wordpress.com",
    "blogspot.com",
];

/// Corrected hostname for a known typo or alias.
pub fn hostname_rewrite(hostname: &str) -> Option<&'static str> {
    HOSTNAME_REWRITES.get(hostname).copied()
}

/// Whether a bare hostname is known to serve HTTPS.
pub fn is_secure_domain(bare_hostname: &str) -> bool {
    SECURE_DOMAINS.contains(bare_hostname)
}

/// Bare hostnames eligible for the `http` to `https` upgrade.
pub fn secure_domains() -> impl Iterator<Item = &'static str> {
    SECURE_DOMAINS.iter().copied()
}

/// Whether a query parameter is stripped on every domain.
pub fn is_stripped_param(name: &str) -> bool {
    STRIPPED_PARAMS.contains(name)
}

/// Extra parameters stripped only on the given bare hostname.
pub fn domain_params(bare_hostname: &str) -> Option<&'static HashSet<&'static str>> {
    DOMAIN_PARAMS.get(bare_hostname)
}

/// Handle pattern for a registrable domain, if it takes handles from the first path segment.
pub fn handle_regex(domain: &str) -> Option<&'static Regex> {
    HANDLE_REGEX_BY_DOMAIN.get(domain)
}

/// Whether a path segment is a reserved route rather than an account, ignoring case.
pub fn is_forbidden_handle(candidate: &str) -> bool {
    FORBIDDEN_HANDLES.contains(candidate.to_ascii_lowercase().as_str())
}

/// Final acceptance check for any proposed handle.
///
/// Rejects empty and reserved candidates, and on Facebook anything outside
/// `[a-z0-9.]`. The per-domain first-segment patterns are not applied here.
pub fn accept_handle(domain: &str, candidate: &str) -> bool {
    if candidate.is_empty() || is_forbidden_handle(candidate) {
        return false;
    }
    domain != "facebook.com" || FACEBOOK_HANDLE.is_match(candidate)
}
