use std::path::{Path, PathBuf};

/// Format a path for display, replacing the home directory with `~`.
pub fn format_path_for_display(path: &Path) -> String {
    if let Some(home) = home::home_dir()
        && let Ok(stripped) = path.strip_prefix(&home)
    {
        if stripped.as_os_str().is_empty() {
            return "~".to_string();
        }
        return format!("~{}{}", std::path::MAIN_SEPARATOR, stripped.display());
    }
    path.display().to_string()
}

/// Expand a leading `~` and environment variables in a user-supplied path.
///
/// Falls back to the literal input when expansion fails (for example an
/// unset variable), so the caller reports the path the user actually typed.
pub fn expand_user_path(input: &str) -> PathBuf {
    match shellexpand::full(input) {
        Ok(expanded) => PathBuf::from(expanded.as_ref()),
        Err(e) => {
            log::debug!("Could not expand {input:?}: {e}");
            PathBuf::from(input)
        }
    }
}
