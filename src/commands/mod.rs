mod format;
mod init;
mod list;
mod resolve;

use std::io::{self, Write};

pub use format::handle_format;
pub use init::handle_init;
pub use list::handle_list;
pub use resolve::handle_resolve;

/// Write listing data to stdout unchanged.
///
/// Color in a listing is decided by the listing program (`--color`), so this
/// bypasses anstream's stripping. A closed pipe (`cdls list | head`) is not an error.
fn write_listing(text: &str) -> anyhow::Result<()> {
    let mut stdout = io::stdout().lock();
    match stdout.write_all(text.as_bytes()).and_then(|()| stdout.flush()) {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        result => Ok(result?),
    }
}
