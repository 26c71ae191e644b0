//! Core data models for WordPress Reader CLI
//!
//! This module contains the post model matching the WordPress.com REST API
//! wire format, plus helpers for turning HTML fields into displayable text.

pub mod posts;

pub use posts::{PostsClient, PostsError};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single blog post as returned by the WordPress.com v1.1 API
///
/// Field names follow the wire format (`ID`, `URL`, `featured_image`); the
/// `content` and `excerpt` fields may contain HTML markup and are converted
/// to readable text only at the display boundary. Posts are never mutated
/// after deserialization — filtering and sorting borrow from the fetched set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Unique post identifier
    #[serde(rename = "ID")]
    pub id: u64,
    /// Post title
    pub title: String,
    /// Full post body, may contain HTML
    pub content: String,
    /// Short summary, may contain HTML
    pub excerpt: String,
    /// Publication timestamp
    pub date: DateTime<Utc>,
    /// Last-modified timestamp
    pub modified: DateTime<Utc>,
    /// URL-safe identifier
    pub slug: String,
    /// Canonical link to the post
    #[serde(rename = "URL")]
    pub url: String,
    /// Featured image URL, if the post has one
    #[serde(default)]
    pub featured_image: Option<String>,
    /// Category membership keyed by category name; a `true` entry means the
    /// post belongs to that category. Absent on the wire means no categories.
    #[serde(default)]
    pub categories: HashMap<String, bool>,
}

/// Converts an HTML fragment to readable plain text
///
/// Used when rendering excerpts and post bodies in the terminal. Falls back
/// to the raw input if conversion fails, so malformed markup never breaks
/// rendering.
pub fn html_to_text(html: &str) -> String {
    htmd::convert(html).unwrap_or_else(|_| html.to_string())
}

/// Collapses runs of whitespace into single spaces and trims the result
///
/// Excerpts arrive with embedded newlines and indentation from the HTML
/// source; list rows need a single clean line.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// One-line readable excerpt for list rows
pub fn excerpt_line(post: &Post) -> String {
    collapse_whitespace(&html_to_text(&post.excerpt))
}
