//! Error types for URL sanitization and identity extraction.

use thiserror::Error;

/// Errors that can occur while sanitizing a URL or extracting information from it.
///
/// Every variant is a validation failure: nothing is retried and no partial
/// result is produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UrlError {
    /// The input could not be parsed, even with an assumed `http://` prefix.
    #[error("Invalid URL")]
    InvalidUrl,

    /// The URL scheme is not in the allowed protocol set.
    #[error("Invalid URL protocol \"{0}\"")]
    DisallowedProtocol(String),

    /// The hostname has no registrable domain or is not under an ICANN suffix.
    #[error("Not a valid internet domain \"{0}\"")]
    InvalidDomain(String),

    /// The hostname is not one of the known YouTube hosts.
    #[error("Not a YouTube URL \"{0}\"")]
    NotYouTube(String),

    /// No video id could be extracted, or the candidate is not 11 id characters.
    #[error("Invalid YouTube video id")]
    InvalidVideoId,
}

impl From<url::ParseError> for UrlError {
    fn from(_: url::ParseError) -> Self {
        UrlError::InvalidUrl
    }
}
