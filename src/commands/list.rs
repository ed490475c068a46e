use anyhow::Context;

use cdls::config::CdlsConfig;
use cdls::error::format_listing_warning;
use cdls::listing::format_listing;
use cdls::path::expand_user_path;
use cdls::resolve::canonical_directory;
use cdls::source::{ListingRequest, Strategy};
use cdls::styling::{eprint, terminal_width};

use super::write_listing;
use crate::cli::ListArgs;

pub fn handle_list(args: ListArgs) -> anyhow::Result<()> {
    let config = CdlsConfig::load().context("Failed to load config")?;

    let directory = canonical_directory(&expand_user_path(args.path.as_deref().unwrap_or(".")))?;

    let strategy = match config.listing_command.as_deref() {
        Some(program) => Strategy::with_program(program)?,
        None => Strategy::detect()?,
    };
    let strategy = if args.plain {
        strategy.into_passthrough()
    } else {
        strategy
    };

    let request = ListingRequest {
        directory,
        show_hidden: args.all || config.show_hidden,
        color: args.color.unwrap_or(config.color),
    };
    let listing = strategy.list(&request)?;

    if strategy.is_adaptive() {
        let width = args.width.unwrap_or_else(terminal_width);
        write_listing(&format_listing(&listing.stdout, width))?;
    } else {
        write_listing(&listing.stdout)?;
    }

    // Partial listing: show what ls could not read, after what it could
    if listing.has_warnings() {
        let program = strategy.program().display().to_string();
        eprint!("{}", format_listing_warning(&program, &listing.stderr));
    }
    Ok(())
}
