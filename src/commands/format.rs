use std::io::Read;
use std::path::Path;

use anyhow::Context;

use cdls::listing::format_listing;
use cdls::path::format_path_for_display;
use cdls::styling::terminal_width;

use super::write_listing;

/// Run the formatter alone over raw listing text.
pub fn handle_format(width: Option<usize>, input: Option<&Path>) -> anyhow::Result<()> {
    let bytes = match input {
        Some(path) => std::fs::read(path)
            .with_context(|| format!("Failed to read {}", format_path_for_display(path)))?,
        None => {
            let mut buf = Vec::new();
            std::io::stdin()
                .lock()
                .read_to_end(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };
    // File names are not guaranteed UTF-8
    let raw = String::from_utf8_lossy(&bytes);

    let width = width.unwrap_or_else(terminal_width);
    write_listing(&format_listing(&raw, width))
}
