//! Cache module for storing the fetched post set on disk
//!
//! This module provides a cache manager that persists API responses to the
//! filesystem with a write timestamp. Freshness is checked on read against
//! the caller's TTL; expired entries are ignored (not deleted) and simply
//! overwritten by the next successful fetch.

mod manager;

pub use manager::{CacheManager, CachedData};
