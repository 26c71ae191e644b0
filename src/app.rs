//! Application state management for WordPress Reader CLI
//!
//! This module contains the main application state, handling keyboard input,
//! post loading, the search/filter/sort controls, and the page counter driven
//! by the scroll sentinel.

use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent};
use log::warn;
use std::time::Instant;

use crate::cli::StartupConfig;
use crate::data::{Post, PostsClient};
use crate::debounce::Debouncer;
use crate::feed::{self, SortKey, POSTS_PER_PAGE};
use crate::theme::{Preferences, Theme};

/// User-facing message shown in the error state
const FETCH_ERROR_MESSAGE: &str = "Failed to fetch posts";

/// Application state enum representing the current view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppState {
    /// Initial loading state while fetching data
    Loading,
    /// List view showing the filtered, paginated posts
    PostList,
    /// Detail view for a specific post
    PostDetail(u64),
    /// Fetch failed; static message shown, no automatic retry
    Error(String),
}

/// Main application struct managing state and data
pub struct App {
    /// Current application state/view
    pub state: AppState,
    /// The fetched post set; never mutated, only re-derived from
    pub posts: Vec<Post>,
    /// Index of the currently selected row within the visible slice
    pub selected_index: usize,
    /// Committed search term the filter pipeline uses
    pub search_term: String,
    /// Live search input buffer while editing
    pub search_draft: String,
    /// Whether the search bar is capturing keystrokes
    pub search_editing: bool,
    /// Selected category ("all" matches everything)
    pub category: String,
    /// Current sort order
    pub sort: SortKey,
    /// Page counter for incremental reveal, starts at 1
    pub page: usize,
    /// Active color theme
    pub theme: Theme,
    /// Flag indicating the application should quit
    pub should_quit: bool,
    /// Flag to show help overlay
    pub show_help: bool,
    /// Flag indicating a manual refresh has been requested
    pub refresh_requested: bool,
    /// Timestamp of last successful load
    pub last_refresh: Option<DateTime<Local>>,
    /// Scroll offset for the post detail view
    pub detail_scroll_offset: u16,
    /// Debouncer coalescing search keystrokes
    pub debouncer: Debouncer,
    /// Posts API client
    posts_client: PostsClient,
    /// Preference store for the persisted theme
    preferences: Option<Preferences>,
}

impl App {
    /// Creates a new App instance with default state
    pub fn new() -> Self {
        Self::with_startup_config(StartupConfig::default())
    }

    /// Creates a new App instance with the given startup configuration.
    ///
    /// Applies CLI arguments (search, category, sort, theme, site) and
    /// resolves the theme: CLI override first, then the saved preference,
    /// then the default.
    pub fn with_startup_config(config: StartupConfig) -> Self {
        let preferences = Preferences::new();
        let theme = config
            .theme_override
            .or_else(|| preferences.as_ref().and_then(Preferences::load_theme))
            .unwrap_or_default();

        Self {
            state: AppState::Loading,
            posts: Vec::new(),
            selected_index: 0,
            search_term: config.initial_search,
            search_draft: String::new(),
            search_editing: false,
            category: config.initial_category,
            sort: config.sort,
            page: 1,
            theme,
            should_quit: false,
            show_help: false,
            refresh_requested: false,
            last_refresh: None,
            detail_scroll_offset: 0,
            debouncer: Debouncer::default(),
            posts_client: PostsClient::new(&config.site),
            preferences,
        }
    }

    /// Creates a new App instance with a custom posts client (for testing)
    #[cfg(test)]
    pub fn with_client(posts_client: PostsClient) -> Self {
        let mut app = Self::new();
        app.posts_client = posts_client;
        app.preferences = None;
        app
    }

    /// Loads posts through the cache and transitions out of Loading
    ///
    /// A fresh cache hit or successful fetch lands in `PostList`; a fetch
    /// failure lands in `Error` with the static message. `force` bypasses
    /// the cache read (manual refresh).
    pub async fn load_posts(&mut self, force: bool) {
        self.state = AppState::Loading;
        match self.posts_client.load_posts(force).await {
            Ok(posts) => {
                self.posts = posts;
                self.last_refresh = Some(Local::now());
                self.state = AppState::PostList;
                self.clamp_selection();
            }
            Err(e) => {
                warn!("post fetch failed: {}", e);
                self.state = AppState::Error(FETCH_ERROR_MESSAGE.to_string());
            }
        }
    }

    /// The filtered, sorted view of the post set
    pub fn filtered(&self) -> Vec<&Post> {
        feed::apply(&self.posts, &self.search_term, &self.category, self.sort)
    }

    /// Number of posts in the filtered view
    pub fn filtered_len(&self) -> usize {
        self.filtered().len()
    }

    /// Number of rows currently revealed by the page counter
    pub fn visible_len(&self) -> usize {
        (self.page * POSTS_PER_PAGE).min(self.filtered_len())
    }

    /// The revealed posts, in display order
    pub fn visible_posts(&self) -> Vec<&Post> {
        let filtered = self.filtered();
        let count = (self.page * POSTS_PER_PAGE).min(filtered.len());
        filtered.into_iter().take(count).collect()
    }

    /// The category selector domain derived from the post set
    pub fn categories(&self) -> Vec<String> {
        feed::collect_categories(&self.posts)
    }

    /// The currently selected post, if any
    pub fn selected_post(&self) -> Option<&Post> {
        self.visible_posts().get(self.selected_index).copied()
    }

    /// Looks up a post by id in the fetched set
    pub fn post_by_id(&self, id: u64) -> Option<&Post> {
        self.posts.iter().find(|post| post.id == id)
    }

    /// Fires the scroll sentinel: reveals one more page
    ///
    /// Each sentinel event increments the page counter by exactly one; there
    /// is no upper bound beyond naturally exhausting the list.
    pub fn reveal_next_page(&mut self) {
        self.page += 1;
    }

    /// Polls time-driven work from the event loop tick
    ///
    /// Commits the debounced search term once its deadline has passed.
    pub fn tick(&mut self, now: Instant) {
        if let Some(term) = self.debouncer.poll(now) {
            self.commit_search(term);
        }
    }

    /// Applies a committed search term to the pipeline
    ///
    /// Does not reset the page counter: scroll depth survives refinement.
    pub fn commit_search(&mut self, term: String) {
        self.search_term = term;
        self.clamp_selection();
    }

    /// Cycles to the next category in the selector domain
    pub fn cycle_category(&mut self) {
        let categories = self.categories();
        if categories.is_empty() {
            return;
        }
        let current = categories
            .iter()
            .position(|c| *c == self.category)
            .unwrap_or(0);
        self.category = categories[(current + 1) % categories.len()].clone();
        self.clamp_selection();
    }

    /// Switches between date and title ordering
    pub fn toggle_sort(&mut self) {
        self.sort = self.sort.toggled();
    }

    /// Switches between dark and light themes and persists the choice
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        if let Some(ref preferences) = self.preferences {
            if let Err(e) = preferences.save_theme(self.theme) {
                warn!("failed to persist theme preference: {}", e);
            }
        }
    }

    /// Keeps the selection inside the visible slice after the view shrinks
    fn clamp_selection(&mut self) {
        let visible = self.visible_len();
        if visible == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= visible {
            self.selected_index = visible - 1;
        }
    }

    /// Moves the selection up, wrapping to the last visible row at the top
    fn move_selection_up(&mut self) {
        let visible = self.visible_len();
        if visible == 0 {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = visible - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Moves the selection down
    ///
    /// Crossing the last visible row while more filtered posts remain is the
    /// sentinel event: it reveals the next page and steps onto it. At the
    /// true end of the list the selection wraps to the top.
    fn move_selection_down(&mut self) {
        let visible = self.visible_len();
        if visible == 0 {
            return;
        }
        if self.selected_index + 1 < visible {
            self.selected_index += 1;
        } else if visible < self.filtered_len() {
            self.reveal_next_page();
            self.selected_index += 1;
        } else {
            self.selected_index = 0;
        }
    }

    /// Scrolls up in the detail view, stopping at 0
    pub fn scroll_up(&mut self) {
        self.detail_scroll_offset = self.detail_scroll_offset.saturating_sub(1);
    }

    /// Scrolls down in the detail view
    ///
    /// The renderer clamps to actual content height; a generous cap keeps the
    /// offset bounded.
    pub fn scroll_down(&mut self) {
        const MAX_SCROLL: u16 = 500;
        if self.detail_scroll_offset < MAX_SCROLL {
            self.detail_scroll_offset += 1;
        }
    }

    /// Handles keyboard input and updates state accordingly
    ///
    /// # Key Bindings
    /// - `q`: Quit (any state); `Esc` also quits from the list
    /// - `Up`/`k`, `Down`/`j`: Move selection / scroll detail
    /// - `Enter`: Open selected post
    /// - `/`: Edit search (typing debounced, `Enter` applies immediately)
    /// - `c`: Cycle category, `s`: Toggle sort, `t`: Toggle theme
    /// - `r`: Refresh, `?`: Help overlay
    /// - `Esc` (in detail): Back to the list
    pub fn handle_key(&mut self, key_event: KeyEvent, now: Instant) {
        // Help overlay intercepts all keys when shown
        if self.show_help {
            match key_event.code {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => {
                    self.show_help = false;
                }
                _ => {}
            }
            return;
        }

        // Search editing captures keystrokes before normal bindings
        if self.search_editing {
            self.handle_search_key(key_event, now);
            return;
        }

        match self.state {
            AppState::Loading => {
                // Only quit is allowed during loading
                if key_event.code == KeyCode::Char('q') {
                    self.should_quit = true;
                }
            }
            AppState::PostList => match key_event.code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.should_quit = true;
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    self.move_selection_up();
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    self.move_selection_down();
                }
                KeyCode::Char('g') => {
                    self.selected_index = 0;
                }
                KeyCode::Char('G') => {
                    let visible = self.visible_len();
                    self.selected_index = visible.saturating_sub(1);
                }
                KeyCode::Enter => {
                    let selected = self.selected_post().map(|post| post.id);
                    if let Some(id) = selected {
                        self.state = AppState::PostDetail(id);
                    }
                }
                KeyCode::Char('/') => {
                    self.search_editing = true;
                    self.search_draft = self.search_term.clone();
                }
                KeyCode::Char('c') => {
                    self.cycle_category();
                }
                KeyCode::Char('s') => {
                    self.toggle_sort();
                }
                KeyCode::Char('t') => {
                    self.toggle_theme();
                }
                KeyCode::Char('r') => {
                    self.refresh_requested = true;
                }
                KeyCode::Char('?') => {
                    self.show_help = true;
                }
                _ => {}
            },
            AppState::PostDetail(_) => match key_event.code {
                KeyCode::Char('q') => {
                    self.should_quit = true;
                }
                KeyCode::Esc => {
                    self.detail_scroll_offset = 0;
                    self.state = AppState::PostList;
                }
                KeyCode::Char('j') | KeyCode::Down => {
                    self.scroll_down();
                }
                KeyCode::Char('k') | KeyCode::Up => {
                    self.scroll_up();
                }
                KeyCode::Char('g') => {
                    self.detail_scroll_offset = 0;
                }
                KeyCode::Char('t') => {
                    self.toggle_theme();
                }
                KeyCode::Char('?') => {
                    self.show_help = true;
                }
                _ => {}
            },
            AppState::Error(_) => match key_event.code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.should_quit = true;
                }
                KeyCode::Char('r') => {
                    self.refresh_requested = true;
                }
                KeyCode::Char('t') => {
                    self.toggle_theme();
                }
                _ => {}
            },
        }
    }

    /// Handles a keystroke while the search bar is active
    ///
    /// Every edit reschedules the debounced commit; Enter applies the draft
    /// immediately, Esc leaves editing with any pending commit still queued.
    fn handle_search_key(&mut self, key_event: KeyEvent, now: Instant) {
        match key_event.code {
            KeyCode::Char(c) => {
                self.search_draft.push(c);
                self.debouncer.input(self.search_draft.clone(), now);
            }
            KeyCode::Backspace => {
                self.search_draft.pop();
                self.debouncer.input(self.search_draft.clone(), now);
            }
            KeyCode::Enter => {
                self.search_editing = false;
                if let Some(term) = self.debouncer.flush() {
                    self.commit_search(term);
                } else {
                    self.commit_search(self.search_draft.clone());
                }
            }
            KeyCode::Esc => {
                self.search_editing = false;
            }
            _ => {}
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::collections::HashMap;
    use std::time::Duration;

    /// Helper to create a KeyEvent for testing
    fn key_event(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(key_event(code), Instant::now());
    }

    fn post(id: u64, title: &str, date: &str) -> Post {
        Post {
            id,
            title: title.to_string(),
            content: String::new(),
            excerpt: format!("excerpt {}", id),
            date: date.parse().expect("valid RFC 3339 date"),
            modified: date.parse().expect("valid RFC 3339 date"),
            slug: format!("post-{}", id),
            url: format!("https://example.wordpress.com/{}", id),
            featured_image: None,
            categories: HashMap::new(),
        }
    }

    fn app_with_posts(count: u64) -> App {
        let mut app = App::new();
        app.preferences = None;
        app.posts = (0..count)
            .map(|i| post(i, &format!("Post {:02}", i), "2024-01-01T00:00:00Z"))
            .collect();
        app.state = AppState::PostList;
        app
    }

    // ========================================================================
    // State machine
    // ========================================================================

    #[test]
    fn test_initial_state_is_loading() {
        let app = App::new();
        assert_eq!(app.state, AppState::Loading);
        assert_eq!(app.selected_index, 0);
        assert_eq!(app.page, 1);
        assert!(!app.should_quit);
        assert!(app.posts.is_empty());
    }

    #[test]
    fn test_keys_ignored_during_loading() {
        let mut app = App::new();
        assert_eq!(app.state, AppState::Loading);

        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected_index, 0);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state, AppState::Loading);

        // But q should still work
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_enter_opens_selected_post_detail() {
        let mut app = app_with_posts(3);
        app.selected_index = 1;

        press(&mut app, KeyCode::Enter);

        assert_eq!(app.state, AppState::PostDetail(1));
    }

    #[test]
    fn test_esc_returns_from_detail_and_resets_scroll() {
        let mut app = app_with_posts(3);
        app.state = AppState::PostDetail(0);
        app.detail_scroll_offset = 7;

        press(&mut app, KeyCode::Esc);

        assert_eq!(app.state, AppState::PostList);
        assert_eq!(app.detail_scroll_offset, 0);
    }

    #[test]
    fn test_q_quits_from_every_state() {
        for state in [
            AppState::PostList,
            AppState::PostDetail(0),
            AppState::Error("Failed to fetch posts".to_string()),
        ] {
            let mut app = app_with_posts(1);
            app.state = state;
            press(&mut app, KeyCode::Char('q'));
            assert!(app.should_quit);
        }
    }

    #[test]
    fn test_r_in_error_state_requests_refresh() {
        let mut app = app_with_posts(0);
        app.state = AppState::Error("Failed to fetch posts".to_string());

        press(&mut app, KeyCode::Char('r'));

        assert!(app.refresh_requested);
    }

    #[tokio::test]
    async fn test_load_failure_enters_error_state_with_static_message() {
        let client =
            PostsClient::with_base_url("http://127.0.0.1:1/unreachable".to_string(), None);
        let mut app = App::with_client(client);

        app.load_posts(false).await;

        assert_eq!(app.state, AppState::Error("Failed to fetch posts".to_string()));
        assert!(app.posts.is_empty(), "no partial data on failure");
    }

    #[tokio::test]
    async fn test_load_empty_result_enters_post_list_not_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/posts")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body(r#"{ "found": 0, "posts": [] }"#)
            .create_async()
            .await;

        let client = PostsClient::with_base_url(server.url(), None);
        let mut app = App::with_client(client);

        app.load_posts(false).await;

        assert_eq!(app.state, AppState::PostList, "empty result is not an error");
        assert!(app.posts.is_empty());
        assert!(app.last_refresh.is_some());
    }

    // ========================================================================
    // Selection and the scroll sentinel
    // ========================================================================

    #[test]
    fn test_navigation_moves_selection() {
        let mut app = app_with_posts(5);

        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected_index, 1);

        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.selected_index, 2);

        press(&mut app, KeyCode::Up);
        assert_eq!(app.selected_index, 1);

        press(&mut app, KeyCode::Char('k'));
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_navigation_wraps_at_top() {
        let mut app = app_with_posts(5);
        app.selected_index = 0;

        press(&mut app, KeyCode::Up);

        assert_eq!(app.selected_index, 4, "should wrap to last visible row");
    }

    #[test]
    fn test_navigation_wraps_at_true_end() {
        let mut app = app_with_posts(5);
        app.selected_index = 4;

        press(&mut app, KeyCode::Down);

        assert_eq!(app.selected_index, 0, "fully revealed list wraps to top");
    }

    #[test]
    fn test_first_page_shows_nine_of_twelve() {
        let app = app_with_posts(12);
        assert_eq!(app.visible_len(), 9);
        assert_eq!(app.filtered_len(), 12);
    }

    #[test]
    fn test_sentinel_reveals_exactly_one_page() {
        let mut app = app_with_posts(12);
        app.selected_index = 8;

        // Crossing the last visible row fires the sentinel once
        press(&mut app, KeyCode::Down);

        assert_eq!(app.page, 2);
        assert_eq!(app.visible_len(), 12, "capped at total, not 18");
        assert_eq!(app.selected_index, 9);
    }

    #[test]
    fn test_reveal_next_page_increments_by_one() {
        let mut app = app_with_posts(30);
        assert_eq!(app.visible_len(), 9);

        app.reveal_next_page();
        assert_eq!(app.page, 2);
        assert_eq!(app.visible_len(), 18);

        app.reveal_next_page();
        assert_eq!(app.visible_len(), 27);
    }

    #[test]
    fn test_page_past_end_yields_full_list() {
        let mut app = app_with_posts(12);
        app.page = 5;
        assert_eq!(app.visible_len(), 12);
    }

    #[test]
    fn test_capital_g_jumps_to_last_visible_row() {
        let mut app = app_with_posts(12);

        press(&mut app, KeyCode::Char('G'));
        assert_eq!(app.selected_index, 8, "last row of the revealed slice");

        press(&mut app, KeyCode::Char('g'));
        assert_eq!(app.selected_index, 0);
    }

    // ========================================================================
    // Filtering controls
    // ========================================================================

    #[test]
    fn test_commit_search_filters_and_clamps_selection() {
        let mut app = app_with_posts(12);
        app.selected_index = 8;

        app.commit_search("Post 03".to_string());

        assert_eq!(app.filtered_len(), 1);
        assert_eq!(app.selected_index, 0, "selection clamped into visible range");
    }

    #[test]
    fn test_refiltering_does_not_reset_page() {
        let mut app = app_with_posts(30);
        app.page = 3;

        app.commit_search("Post".to_string());
        assert_eq!(app.page, 3, "scroll depth survives search refinement");

        app.cycle_category();
        assert_eq!(app.page, 3, "scroll depth survives category change");

        app.toggle_sort();
        assert_eq!(app.page, 3, "scroll depth survives sort change");
    }

    #[test]
    fn test_cycle_category_walks_the_domain() {
        let mut app = app_with_posts(2);
        app.posts[0]
            .categories
            .insert("Travel".to_string(), true);
        app.posts[1].categories.insert("Food".to_string(), true);

        assert_eq!(app.category, "all");

        app.cycle_category();
        assert_eq!(app.category, "Food");

        app.cycle_category();
        assert_eq!(app.category, "Travel");

        app.cycle_category();
        assert_eq!(app.category, "all", "cycles back around");
    }

    #[test]
    fn test_sort_toggle_key() {
        let mut app = app_with_posts(2);
        assert_eq!(app.sort, SortKey::Date);

        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.sort, SortKey::Title);

        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.sort, SortKey::Date);
    }

    #[test]
    fn test_theme_toggle_key() {
        let mut app = app_with_posts(1);
        let before = app.theme;

        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.theme, before.toggled());
    }

    // ========================================================================
    // Search editing and debounce
    // ========================================================================

    #[test]
    fn test_slash_enters_search_editing_with_current_term() {
        let mut app = app_with_posts(3);
        app.search_term = "old".to_string();

        press(&mut app, KeyCode::Char('/'));

        assert!(app.search_editing);
        assert_eq!(app.search_draft, "old");
    }

    #[test]
    fn test_search_keystrokes_commit_after_debounce() {
        let mut app = app_with_posts(12);
        let t0 = Instant::now();

        app.handle_key(key_event(KeyCode::Char('/')), t0);
        app.handle_key(key_event(KeyCode::Char('P')), t0);
        app.handle_key(key_event(KeyCode::Char('o')), t0 + Duration::from_millis(50));

        // Not yet committed: the deadline is 300ms after the last keystroke
        app.tick(t0 + Duration::from_millis(200));
        assert_eq!(app.search_term, "");

        app.tick(t0 + Duration::from_millis(400));
        assert_eq!(app.search_term, "Po", "last draft value commits once");
    }

    #[test]
    fn test_search_enter_commits_immediately() {
        let mut app = app_with_posts(12);
        let t0 = Instant::now();

        app.handle_key(key_event(KeyCode::Char('/')), t0);
        app.handle_key(key_event(KeyCode::Char('x')), t0);
        app.handle_key(key_event(KeyCode::Enter), t0);

        assert!(!app.search_editing);
        assert_eq!(app.search_term, "x", "Enter applies without waiting");
        assert_eq!(app.filtered_len(), 0);
    }

    #[test]
    fn test_search_backspace_edits_draft() {
        let mut app = app_with_posts(3);
        let t0 = Instant::now();

        app.handle_key(key_event(KeyCode::Char('/')), t0);
        app.handle_key(key_event(KeyCode::Char('a')), t0);
        app.handle_key(key_event(KeyCode::Char('b')), t0);
        app.handle_key(key_event(KeyCode::Backspace), t0);
        app.handle_key(key_event(KeyCode::Enter), t0);

        assert_eq!(app.search_term, "a");
    }

    #[test]
    fn test_search_esc_leaves_editing_with_pending_commit() {
        let mut app = app_with_posts(12);
        let t0 = Instant::now();

        app.handle_key(key_event(KeyCode::Char('/')), t0);
        app.handle_key(key_event(KeyCode::Char('z')), t0);
        app.handle_key(key_event(KeyCode::Esc), t0);

        assert!(!app.search_editing);
        assert_eq!(app.search_term, "", "not applied yet");

        // The pending debounced value still lands
        app.tick(t0 + Duration::from_millis(400));
        assert_eq!(app.search_term, "z");
    }

    #[test]
    fn test_normal_keys_suppressed_while_editing() {
        let mut app = app_with_posts(3);
        let t0 = Instant::now();

        app.handle_key(key_event(KeyCode::Char('/')), t0);
        // 'q' is a character for the draft, not quit
        app.handle_key(key_event(KeyCode::Char('q')), t0);

        assert!(!app.should_quit);
        assert_eq!(app.search_draft, "q");
    }

    // ========================================================================
    // Help overlay
    // ========================================================================

    #[test]
    fn test_help_overlay_toggles() {
        let mut app = app_with_posts(1);

        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);

        // Other keys are swallowed while help is shown
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected_index, 0);

        press(&mut app, KeyCode::Esc);
        assert!(!app.show_help);
        assert!(!app.should_quit);
    }

    // ========================================================================
    // Derived views
    // ========================================================================

    #[test]
    fn test_empty_feed_has_no_visible_posts() {
        let app = app_with_posts(0);
        assert_eq!(app.state, AppState::PostList);
        assert!(app.visible_posts().is_empty());
        assert!(app.selected_post().is_none());
    }

    #[test]
    fn test_selected_post_tracks_filter() {
        let mut app = app_with_posts(5);
        app.commit_search("Post 04".to_string());

        let selected = app.selected_post().expect("one match");
        assert_eq!(selected.id, 4);
    }

    #[test]
    fn test_post_by_id() {
        let app = app_with_posts(3);
        assert_eq!(app.post_by_id(2).map(|p| p.id), Some(2));
        assert!(app.post_by_id(99).is_none());
    }

    #[test]
    fn test_default_creates_same_as_new() {
        let app1 = App::new();
        let app2 = App::default();

        assert_eq!(app1.state, app2.state);
        assert_eq!(app1.selected_index, app2.selected_index);
        assert_eq!(app1.page, app2.page);
    }
}
