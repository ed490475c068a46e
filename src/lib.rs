//! cdls: change directory, then list it in as many columns as the terminal allows.
//!
//! The core is [`listing`]: it turns raw `ls -l` text into aligned one- or
//! two-column output. Everything else feeds it or runs around it:
//! [`source`] finds and drives the listing program, [`resolve`] picks the
//! directory to move to, and [`shell`] emits the function that performs the
//! directory change in the user's shell.

pub mod config;
pub mod error;
pub mod listing;
pub mod path;
pub mod resolve;
pub mod shell;
pub mod source;
pub mod styling;

pub use crate::config::{CdlsConfig, ColorWhen};
pub use crate::error::CdlsError;
