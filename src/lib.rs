//! socialurl - sanitize user-submitted URLs and recover social identities
//!
//! This crate turns untrusted URLs, such as links pasted into a profile
//! form, into a canonical form without tracking, session or locale
//! parameters, and recognizes account handles and provider ids on common
//! social and publishing platforms.
//!
//! # Quick Start
//!
//! ```
//! use socialurl::{sanitize_url, url_info, get_youtube_video_id};
//!
//! // Canonicalize a shared link
//! let clean = sanitize_url("https://twitter.com/Twitter/status/1601692766257709056?s=20&t=X")?;
//! assert_eq!(clean, "https://twitter.com/Twitter/status/1601692766257709056");
//!
//! // Recover the account behind a profile link
//! let info = url_info("https://www.facebook.com/profile.php?id=100000000000001")?;
//! assert_eq!(info.handle, None);
//! assert_eq!(info.provider_id.as_deref(), Some("100000000000001"));
//!
//! // Pull the id out of a video link
//! assert_eq!(get_youtube_video_id("https://youtu.be/nTeia0mgz5Y")?, "nTeia0mgz5Y");
//! # Ok::<(), socialurl::UrlError>(())
//! ```
//!
//! # Sanitization
//!
//! | Step | Effect |
//! |------|--------|
//! | protocol check | only `http`/`https` by default |
//! | domain check | registrable domain under an ICANN public suffix |
//! | hostname rewrite | `facebook.com` → `www.facebook.com`, `mobile.twitter.com` → `twitter.com` |
//! | protocol upgrade | `http` → `https` on known secure domains |
//! | parameter removal | `utm_*`, `fbclid`, `hl`, ... plus per-domain lists |
//!
//! Sanitizing an already sanitized URL returns it unchanged.
//!
//! # Error Handling
//!
//! All fallible functions return `Result<T, UrlError>`:
//!
//! - Unparseable input (`InvalidUrl`)
//! - Schemes outside the allowed set (`DisallowedProtocol`)
//! - Hostnames without a registrable ICANN domain (`InvalidDomain`)
//! - Non-YouTube hosts or malformed video ids (`NotYouTube`, `InvalidVideoId`)

// Re-export main operations
pub use crate::core::{
    get_youtube_video_id, is_youtube_video_url, sanitize, sanitize_url,
    sanitize_url_with, url_info
};

// Re-export public types
pub use error::UrlError;
pub use types::{DomainParts, SanitizeOptions, UrlInfo, UrlInput};
pub use crate::url::{classify_domain, validate_domain};

// Module declarations
pub mod error;
pub mod types;
pub mod core;
pub mod rules;
pub mod url;
