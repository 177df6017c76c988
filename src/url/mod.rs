//! URL plumbing shared by the sanitizer and the extractors.
//!
//! This module contains:
//! - Coercion of loose user input into a parsed URL
//! - Public Suffix List domain classification
//! - Hostname, path and query helpers

pub mod coerce;
pub mod psl;
pub mod utils;

// Re-export main functionality
pub use self::coerce::ensure_url;
pub use self::psl::{classify_domain, validate_domain};
pub use self::utils::{
    bare_hostname, path_segments, query_value, remove_query_params,
    validate_hostname, HostnameError
};
