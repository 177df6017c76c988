//! YouTube video id extraction.

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::UrlError;
use crate::types::UrlInput;
use crate::url::coerce::ensure_url;
use crate::url::utils::query_value;

/// Hosts accepted as YouTube at all.
const YOUTUBE_HOSTS: &[&str] = &[
    "youtu.be",
    "youtube.com",
    "www.youtube.com",
    "m.youtube.com",
    "music.youtube.com",
    "gaming.youtube.com",
    "youtube-nocookie.com",
];

/// Hosts serving `/watch?v=<id>` pages.
const WATCH_HOSTS: &[&str] = &[
    "www.youtube.com",
    "m.youtube.com",
    "music.youtube.com",
    "gaming.youtube.com",
];

static VIDEO_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]{11}$").unwrap());

/// Extract the 11-character video id from a YouTube URL.
///
/// Recognized shapes are `/watch?v=<id>` on the www, m, music and gaming
/// hosts, and `youtu.be/<id>`. Other hosts in the YouTube family pass the
/// host check but yield [`UrlError::InvalidVideoId`].
///
/// # Examples
///
/// ```
/// use socialurl::get_youtube_video_id;
///
/// assert_eq!(get_youtube_video_id("https://youtu.be/nTeia0mgz5Y?si=XYZ").unwrap(), "nTeia0mgz5Y");
/// assert!(get_youtube_video_id("https://www.youtube.com/watch?v=fake").is_err());
/// ```
pub fn get_youtube_video_id<'a>(input: impl Into<UrlInput<'a>>) -> Result<String, UrlError> {
    let url = ensure_url(input)?;
    let host = url.host_str().unwrap_or_default();

    if !YOUTUBE_HOSTS.contains(&host) {
        return Err(UrlError::NotYouTube(host.to_string()));
    }

    let path = url.path();
    let candidate = if WATCH_HOSTS.contains(&host) && path == "/watch" {
        query_value(&url, "v")
    } else if host == "youtu.be" && path.len() == 12 {
        Some(path[1..].to_string())
    } else {
        None
    };

    match candidate {
        Some(id) if VIDEO_ID.is_match(&id) => Ok(id),
        other => {
            debug!("No valid video id in {} (candidate {:?})", url, other);
            Err(UrlError::InvalidVideoId)
        }
    }
}

/// True when [`get_youtube_video_id`] would succeed.
pub fn is_youtube_video_url<'a>(input: impl Into<UrlInput<'a>>) -> bool {
    get_youtube_video_id(input).is_ok()
}
