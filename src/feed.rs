//! Filter, sort, and pagination pipeline over the fetched post set
//!
//! Pure functions: the post set is never mutated, every call produces a new
//! derived view. The pipeline shape is fixed — search filter, then category
//! filter, then sort — and pagination reveals leading slices of the result.

use crate::data::Post;

/// Number of posts revealed per page
pub const POSTS_PER_PAGE: usize = 9;

/// Category value that matches every post
pub const ALL_CATEGORIES: &str = "all";

/// Sort order for the post list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Newest first, by publication timestamp
    #[default]
    Date,
    /// Alphabetical by title, case-folded
    Title,
}

impl SortKey {
    /// Parses a sort key from its CLI/UI name
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "date" => Some(SortKey::Date),
            "title" => Some(SortKey::Title),
            _ => None,
        }
    }

    /// The name shown in the status line and accepted on the CLI
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Date => "date",
            SortKey::Title => "title",
        }
    }

    /// The other sort key, for the toggle binding
    pub fn toggled(self) -> Self {
        match self {
            SortKey::Date => SortKey::Title,
            SortKey::Title => SortKey::Date,
        }
    }
}

/// Whether a post matches the search term
///
/// Case-insensitive substring match against title or excerpt (raw text,
/// markup included). An empty term matches everything.
pub fn matches_search(post: &Post, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let term = term.to_lowercase();
    post.title.to_lowercase().contains(&term) || post.excerpt.to_lowercase().contains(&term)
}

/// Whether a post belongs to the given category
///
/// `"all"` matches everything; otherwise the post's categories map must hold
/// a `true` entry for the key.
pub fn matches_category(post: &Post, category: &str) -> bool {
    if category == ALL_CATEGORIES {
        return true;
    }
    post.categories.get(category).copied().unwrap_or(false)
}

/// Applies the full filter/sort pipeline to the post set
///
/// Filters by search term, then by category, then sorts. The sort is stable:
/// posts with equal keys keep their original relative order.
pub fn apply<'a>(posts: &'a [Post], search: &str, category: &str, sort: SortKey) -> Vec<&'a Post> {
    let mut filtered: Vec<&Post> = posts
        .iter()
        .filter(|post| matches_search(post, search))
        .filter(|post| matches_category(post, category))
        .collect();

    match sort {
        SortKey::Date => filtered.sort_by(|a, b| b.date.cmp(&a.date)),
        SortKey::Title => {
            filtered.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()))
        }
    }

    filtered
}

/// The revealed prefix of the filtered set for the given page
///
/// Returns the first `page * POSTS_PER_PAGE` elements, capped at the list
/// length — requesting past the end yields the full list.
pub fn visible<'a, 'b>(filtered: &'b [&'a Post], page: usize) -> &'b [&'a Post] {
    let count = (page * POSTS_PER_PAGE).min(filtered.len());
    &filtered[..count]
}

/// Derives the category selector domain from the post set
///
/// Returns `"all"` followed by every truthy category key, sorted and
/// deduplicated.
pub fn collect_categories(posts: &[Post]) -> Vec<String> {
    let mut keys: Vec<String> = posts
        .iter()
        .flat_map(|post| {
            post.categories
                .iter()
                .filter(|(_, member)| **member)
                .map(|(name, _)| name.clone())
        })
        .collect();
    keys.sort();
    keys.dedup();

    let mut categories = Vec::with_capacity(keys.len() + 1);
    categories.push(ALL_CATEGORIES.to_string());
    categories.extend(keys);
    categories
}
