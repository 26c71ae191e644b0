//! WordPress.com posts API client
//!
//! Fetches published posts from a site's public REST endpoint and composes
//! the fetch with the disk cache: a fresh cache hit skips the request, a
//! successful fetch is written through, and stale entries are ignored.

use log::{debug, warn};
use reqwest::header::ACCEPT;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

use super::Post;
use crate::cache::CacheManager;

/// WordPress.com public API prefix for per-site endpoints
const WORDPRESS_API_BASE: &str = "https://public-api.wordpress.com/rest/v1.1/sites";

/// Site read when no `--site` override is given
pub const DEFAULT_SITE: &str = "marcellvarga.wordpress.com";

/// Maximum number of posts requested per fetch
const POSTS_PER_FETCH: u32 = 100;

/// Cache key for the serialized post set
pub const POSTS_CACHE_KEY: &str = "wordpress_posts";

/// How long a cached post set stays fresh (300 000 ms)
pub const POSTS_CACHE_TTL: Duration = Duration::from_millis(5 * 60 * 1000);

/// Errors that can occur when fetching posts
///
/// Zero posts is not an error: `fetch_posts` returns `Ok(vec![])` for an
/// empty `posts` array, so callers can always tell "no posts" from "fetch
/// failed".
#[derive(Debug, Error)]
pub enum PostsError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("unexpected response status: {0}")]
    BadStatus(reqwest::StatusCode),

    /// Failed to parse the JSON response
    #[error("failed to parse response: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Success shape of the posts endpoint
#[derive(Debug, Deserialize)]
struct PostsResponse {
    posts: Vec<Post>,
}

/// Client for fetching posts from the WordPress.com public API
#[derive(Debug, Clone)]
pub struct PostsClient {
    /// HTTP client for making requests
    http_client: Client,
    /// Cache manager for persisting responses
    cache_manager: Option<CacheManager>,
    /// Full base URL for the site (allows override for testing)
    base_url: String,
}

impl PostsClient {
    /// Creates a client reading the given WordPress.com site
    ///
    /// `site` is the site's domain, e.g. `example.wordpress.com`.
    pub fn new(site: &str) -> Self {
        Self {
            http_client: Client::new(),
            cache_manager: CacheManager::new(),
            base_url: format!("{}/{}", WORDPRESS_API_BASE, site),
        }
    }

    /// Creates a client with a custom cache manager
    #[allow(dead_code)]
    pub fn with_cache(site: &str, cache_manager: CacheManager) -> Self {
        Self {
            http_client: Client::new(),
            cache_manager: Some(cache_manager),
            base_url: format!("{}/{}", WORDPRESS_API_BASE, site),
        }
    }

    /// Creates a client with a custom base URL (for testing)
    #[cfg(test)]
    pub fn with_base_url(base_url: String, cache_manager: Option<CacheManager>) -> Self {
        Self {
            http_client: Client::new(),
            cache_manager,
            base_url,
        }
    }

    /// Fetches up to 100 published posts from the API
    ///
    /// # Returns
    /// * `Ok(Vec<Post>)` - The published posts, possibly empty
    /// * `Err(PostsError)` - If the request fails, the status is not a
    ///   success, or the payload does not match the expected shape
    pub async fn fetch_posts(&self) -> Result<Vec<Post>, PostsError> {
        let url = format!(
            "{}/posts?number={}&status=publish",
            self.base_url, POSTS_PER_FETCH
        );

        let response = self
            .http_client
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PostsError::BadStatus(status));
        }

        let text = response.text().await?;
        let parsed: PostsResponse = serde_json::from_str(&text)?;

        debug!("fetched {} posts from {}", parsed.posts.len(), self.base_url);
        Ok(parsed.posts)
    }

    /// Loads posts through the cache
    ///
    /// # Behavior
    /// - A cache entry younger than [`POSTS_CACHE_TTL`] is returned without
    ///   a request (unless `force` is set)
    /// - Otherwise posts are fetched and written through; stale entries are
    ///   simply overwritten, never served
    /// - A cache write failure is logged and ignored
    /// - A fetch failure propagates; there is no stale-data fallback
    pub async fn load_posts(&self, force: bool) -> Result<Vec<Post>, PostsError> {
        if !force {
            if let Some(ref cache_manager) = self.cache_manager {
                if let Some(cached) =
                    cache_manager.read::<Vec<Post>>(POSTS_CACHE_KEY, POSTS_CACHE_TTL)
                {
                    if !cached.is_expired {
                        debug!("serving {} posts from cache", cached.data.len());
                        return Ok(cached.data);
                    }
                    debug!("cache entry expired, refetching");
                }
            }
        }

        let posts = self.fetch_posts().await?;

        if let Some(ref cache_manager) = self.cache_manager {
            if let Err(e) = cache_manager.write(POSTS_CACHE_KEY, &posts) {
                warn!("failed to write posts cache: {}", e);
            }
        }

        Ok(posts)
    }
}

impl Default for PostsClient {
    fn default() -> Self {
        Self::new(DEFAULT_SITE)
    }
}
