//! UI rendering module for WordPress Reader CLI
//!
//! This module contains all the rendering logic for the terminal user
//! interface, using the ratatui library for TUI components.

pub mod help_overlay;
pub mod post_detail;
pub mod post_list;

pub use help_overlay::render as render_help_overlay;
pub use post_detail::render as render_post_detail;
pub use post_list::render_post_list;
