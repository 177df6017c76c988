//! Core operations.
//!
//! This module contains the main operations of the crate:
//! - Sanitizing URLs into a canonical, tracking-free form
//! - Extracting platform identity (handle or provider id) from URLs
//! - Extracting YouTube video ids

pub mod extractor;
pub mod sanitizer;
pub mod youtube;

// Re-export main functionality
pub use extractor::url_info;
pub use sanitizer::{sanitize, sanitize_url, sanitize_url_with};
pub use youtube::{get_youtube_video_id, is_youtube_video_url};
