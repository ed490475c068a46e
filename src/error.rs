//! cdls error types and formatting
//!
//! - **`CdlsError`** - A typed enum for failures of the collaborators around the
//!   formatter: finding and running the listing program, and resolving the
//!   target directory. Use `.into()` to convert to `anyhow::Error` while keeping
//!   the type for pattern matching. Display produces styled output for users.
//!
//! The formatter itself (`crate::listing`) has no error paths.

use std::path::PathBuf;

use color_print::{cformat, cwrite};

use crate::path::format_path_for_display;
use crate::styling::{ERROR_EMOJI, HINT_EMOJI, WARNING_EMOJI, format_with_gutter};

#[derive(Debug, Clone)]
pub enum CdlsError {
    /// Neither `gls` nor `ls` (nor a configured program) could be found
    NoListingProgram,
    /// The configured `listing-command` is not on `PATH`
    ListingProgramNotFound { program: String },
    /// The listing program ran and exited unsuccessfully
    ListingFailed {
        program: String,
        directory: PathBuf,
        stderr: String,
        exit_code: Option<i32>,
    },
    /// The listing program could not be started
    ListingSpawnFailed { program: String, error: String },
    NotADirectory { path: PathBuf },
    NoHomeDirectory,
}

impl std::error::Error for CdlsError {}

impl std::fmt::Display for CdlsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CdlsError::NoListingProgram => {
                cwrite!(
                    f,
                    "{ERROR_EMOJI} <red>No listing program found</>\n\n{HINT_EMOJI} <dim>Install GNU coreutils (<bright-black>gls</><dim> on macOS) or set <bright-black>listing-command</><dim> in the config</>"
                )
            }

            CdlsError::ListingProgramNotFound { program } => {
                cwrite!(
                    f,
                    "{ERROR_EMOJI} <red>Listing program <bold>{program}</> not found on PATH</>"
                )
            }

            CdlsError::ListingFailed {
                program,
                directory,
                stderr,
                ..
            } => {
                let directory = format_path_for_display(directory);
                let header =
                    cformat!("{ERROR_EMOJI} <red><bold>{program}</> failed to list <bold>{directory}</></>");
                write!(f, "{}", format_error_block(header, stderr))
            }

            CdlsError::ListingSpawnFailed { program, error } => {
                let header = cformat!("{ERROR_EMOJI} <red>Failed to run <bold>{program}</></>");
                write!(f, "{}", format_error_block(header, error))
            }

            CdlsError::NotADirectory { path } => {
                let path = format_path_for_display(path);
                cwrite!(f, "{ERROR_EMOJI} <red>Not a directory: <bold>{path}</></>")
            }

            CdlsError::NoHomeDirectory => {
                cwrite!(
                    f,
                    "{ERROR_EMOJI} <red>Could not determine home directory</>\n\n{HINT_EMOJI} <dim>Pass a directory explicitly</>"
                )
            }
        }
    }
}

/// Extract the exit code a failed listing program reported, if any
pub fn exit_code(err: &anyhow::Error) -> Option<i32> {
    err.downcast_ref::<CdlsError>().and_then(|e| match e {
        CdlsError::ListingFailed { exit_code, .. } => *exit_code,
        _ => None,
    })
}

/// Warnings a listing program printed next to a listing it still produced
pub fn format_listing_warning(program: &str, stderr: &str) -> String {
    let header = cformat!("{WARNING_EMOJI} <yellow><bold>{program}</> reported problems</>");
    format_error_block(header, stderr)
}

/// Format an error with header and gutter content
fn format_error_block(header: String, error: &str) -> String {
    let trimmed = error.trim();
    if trimmed.is_empty() {
        header
    } else {
        format!("{header}\n{}", format_with_gutter(trimmed))
    }
}
