//! Consolidated styling module for terminal output.
//!
//! This module uses the anstyle ecosystem:
//! - anstream for auto-detecting color support
//! - anstyle for composable styling
//!
//! ## stdout vs stderr principle
//!
//! - **stdout**: the rendered listing, and the resolved directory for `cdls resolve`
//! - **stderr**: errors, log output, and anything the listing program itself reports
//!
//! Listing output carries color sequences produced by `ls --color`. Those are passed
//! through untouched; this module only measures them (see [`visible_width`]).

mod constants;
mod format;
mod line;

// Re-exports from anstream (auto-detecting output)
pub use anstream::{eprint, eprintln, print, println};

pub use constants::*;
pub use format::{
    DEFAULT_TERMINAL_WIDTH, format_with_gutter, strip_escapes, terminal_width, visible_width,
};
pub use line::StyledLine;
