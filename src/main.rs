use std::process;

use clap::Parser;

use cdls::error::exit_code;
use cdls::styling::{BOLD, DIM, ERROR, eprintln};

mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::{handle_format, handle_init, handle_list, handle_resolve};

/// Configure logging from `--verbose` or `RUST_LOG`.
fn init_logging(verbose: bool) {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if verbose { "debug" } else { "off" }),
    )
    .format(|buf, record| {
        use std::io::Write;

        let msg = record.args().to_string();
        let level = record.level().as_str().to_ascii_lowercase();

        // Commands start with $, make only the command bold
        if let Some(command) = msg.strip_prefix("$ ") {
            writeln!(buf, "{DIM}[{level}]{DIM:#} $ {BOLD}{command}{BOLD:#}")
        } else if record.level() <= log::Level::Warn {
            writeln!(buf, "{DIM}[{level}]{DIM:#} {ERROR}{msg}{ERROR:#}")
        } else {
            writeln!(buf, "{DIM}[{level}]{DIM:#} {msg}")
        }
    })
    .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command.unwrap_or_else(|| Commands::List(Default::default())) {
        Commands::List(args) => handle_list(args),
        Commands::Format { width, input } => handle_format(width, input.as_deref()),
        Commands::Resolve { path } => handle_resolve(path.as_deref()),
        Commands::Init { shell, name } => handle_init(shell, &name),
    };

    if let Err(e) = result {
        // CdlsError messages are already formatted with emoji and colors
        eprintln!("{:#}", e);

        // Preserve the listing program's exit code when it failed
        process::exit(exit_code(&e).unwrap_or(1));
    }
}
