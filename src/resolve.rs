//! Target directory resolution for the shell integration.
//!
//! The directory to change into comes from, in order: the command-line
//! argument, the first non-empty line piped on stdin, or the home directory
//! (the same default as a bare `cd`).

use std::io::BufRead;
use std::path::{Path, PathBuf};

use crate::error::CdlsError;
use crate::path::expand_user_path;

/// Where the target came from, for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum TargetSource {
    Argument,
    Stdin,
    Home,
}

/// Pick the raw target path without touching the filesystem.
///
/// `stdin` is only consulted when there is no argument; pass `None` when
/// stdin is a terminal so an interactive session never blocks waiting for input.
pub fn select_target<R: BufRead>(
    arg: Option<&str>,
    stdin: Option<R>,
) -> Result<(PathBuf, TargetSource), CdlsError> {
    if let Some(arg) = arg.filter(|a| !a.trim().is_empty()) {
        return Ok((expand_user_path(arg), TargetSource::Argument));
    }

    if let Some(reader) = stdin
        && let Some(line) = first_non_empty_line(reader)
    {
        return Ok((expand_user_path(&line), TargetSource::Stdin));
    }

    home::home_dir()
        .map(|home| (home, TargetSource::Home))
        .ok_or(CdlsError::NoHomeDirectory)
}

fn first_non_empty_line<R: BufRead>(reader: R) -> Option<String> {
    reader
        .lines()
        .map_while(Result::ok)
        .map(|line| line.trim().to_string())
        .find(|line| !line.is_empty())
}

/// Resolve the target and check that it is an existing directory.
///
/// The returned path is canonical (symlinks resolved, no `..`).
pub fn resolve_target<R: BufRead>(arg: Option<&str>, stdin: Option<R>) -> Result<PathBuf, CdlsError> {
    let (path, source) = select_target(arg, stdin)?;
    log::debug!("Target {} from {source}", path.display());
    canonical_directory(&path)
}

/// Canonicalize `path`, failing unless it names a directory.
pub fn canonical_directory(path: &Path) -> Result<PathBuf, CdlsError> {
    let not_a_directory = || CdlsError::NotADirectory {
        path: path.to_path_buf(),
    };
    let canonical = dunce::canonicalize(path).map_err(|_| not_a_directory())?;
    if canonical.is_dir() {
        Ok(canonical)
    } else {
        Err(not_a_directory())
    }
}
