use std::path::PathBuf;

use clap::builder::styling::{AnsiColor, Color, Styles};
use clap::{Args, Parser, Subcommand};

use cdls::ColorWhen;
use cdls::shell::{DEFAULT_FUNCTION_NAME, Shell, is_valid_function_name};

/// Custom styles for help output
fn help_styles() -> Styles {
    Styles::styled()
        .header(
            anstyle::Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Green))),
        )
        .usage(
            anstyle::Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Green))),
        )
        .literal(
            anstyle::Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Cyan))),
        )
        .placeholder(anstyle::Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan))))
        .error(
            anstyle::Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Red))),
        )
        .valid(
            anstyle::Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Green))),
        )
        .invalid(
            anstyle::Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Yellow))),
        )
}

/// Help template for commands
const HELP_TEMPLATE: &str = "\
{before-help}{name} - {about-with-newline}\
Usage: {usage}

{all-args}{after-help}";

#[derive(Parser)]
#[command(name = "cdls")]
#[command(about = "Change directory and list it, in two columns when the terminal is wide enough", long_about = None)]
#[command(version)]
#[command(disable_help_subcommand = true)]
#[command(styles = help_styles())]
#[command(help_template = HELP_TEMPLATE)]
#[command(
    after_long_help = r#"Without a subcommand, cdls lists the current directory.

Shell integration (adds a `cl` function that changes directory and lists it):
  bash/zsh: eval "$(cdls init bash)"
  fish:     cdls init fish | source"#
)]
pub struct Cli {
    /// Show commands and debug info
    #[arg(long, short = 'v', global = true, help_heading = "Global Options")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List a directory, using two columns on wide terminals
    List(ListArgs),

    /// Format raw `ls -l` output read from a file or stdin
    #[command(after_long_help = r#"The input must use GNU ls long-iso layout:

  ls -l -h --color=always --group-directories-first --time-style=long-iso

The `total` line is dropped; lines that do not have the expected fields are
printed unchanged."#)]
    Format {
        /// Terminal width to lay out for [default: detected]
        #[arg(long, value_name = "COLUMNS", value_parser = parse_width)]
        width: Option<usize>,

        /// Read the listing from this file instead of stdin
        #[arg(long, value_name = "FILE")]
        input: Option<PathBuf>,
    },

    /// Print the directory a `cd` to PATH would land in
    #[command(after_long_help = r#"Resolution order:
  1. PATH, if given
  2. The first non-empty line on stdin, if stdin is not a terminal
  3. The home directory

The printed path is canonical. Fails if the target is not a directory."#)]
    Resolve {
        /// Target directory
        path: Option<String>,
    },

    /// Print shell integration code
    Init {
        /// Shell to generate code for
        #[arg(value_enum)]
        shell: Shell,

        /// Name of the generated function
        #[arg(long, default_value = DEFAULT_FUNCTION_NAME, value_parser = parse_function_name)]
        name: String,
    },
}

#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Directory to list [default: current directory]
    pub path: Option<String>,

    /// Include hidden entries (except `.` and `..`)
    #[arg(short, long)]
    pub all: bool,

    /// Terminal width to lay out for [default: detected]
    #[arg(long, value_name = "COLUMNS", value_parser = parse_width)]
    pub width: Option<usize>,

    /// When the listing program should color names [default: from config]
    #[arg(long, value_enum, value_name = "WHEN")]
    pub color: Option<ColorWhen>,

    /// Print the listing program's output without reformatting
    #[arg(long)]
    pub plain: bool,
}

fn parse_width(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("width must be at least 1".to_string()),
        Ok(width) => Ok(width),
        Err(e) => Err(e.to_string()),
    }
}

fn parse_function_name(s: &str) -> Result<String, String> {
    if is_valid_function_name(s) {
        Ok(s.to_string())
    } else {
        Err(format!(
            "'{s}' is not a valid function name (letters, digits, '_' and '-', not starting with a digit or '-')"
        ))
    }
}
