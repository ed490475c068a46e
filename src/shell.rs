//! Shell integration.
//!
//! A child process cannot change its parent shell's working directory, so the
//! directory change happens in a small shell function: it asks
//! `cdls resolve` for the target, `cd`s there with the shell builtin, and then
//! runs `cdls list`.

use askama::Template;

/// Default name of the generated shell function
pub const DEFAULT_FUNCTION_NAME: &str = "cl";

/// Supported shells
///
/// Currently supported: bash, fish, zsh
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Shell {
    Bash,
    Fish,
    Zsh,
}

impl Shell {
    /// Returns the line to add to the config file for shell integration
    ///
    /// All shells use a conditional wrapper to avoid errors when cdls is not installed.
    pub fn config_line(&self) -> String {
        match self {
            Self::Bash | Self::Zsh => {
                format!(
                    "if command -v cdls >/dev/null 2>&1; then eval \"$(command cdls init {})\"; fi",
                    self
                )
            }
            Self::Fish => {
                format!("if type -q cdls; command cdls init {} | source; end", self)
            }
        }
    }
}

/// Shell integration configuration
pub struct ShellInit {
    pub shell: Shell,
    pub function_name: String,
}

impl ShellInit {
    pub fn new(shell: Shell) -> Self {
        Self {
            shell,
            function_name: DEFAULT_FUNCTION_NAME.to_string(),
        }
    }

    pub fn with_function_name(mut self, name: impl Into<String>) -> Self {
        self.function_name = name.into();
        self
    }

    /// Generate shell integration code
    pub fn generate(&self) -> Result<String, askama::Error> {
        let config_line = self.shell.config_line();
        match self.shell {
            Shell::Bash => BashTemplate {
                shell_name: self.shell.to_string(),
                function_name: &self.function_name,
                config_line: &config_line,
            }
            .render(),
            Shell::Zsh => ZshTemplate {
                function_name: &self.function_name,
                config_line: &config_line,
            }
            .render(),
            Shell::Fish => FishTemplate {
                function_name: &self.function_name,
                config_line: &config_line,
            }
            .render(),
        }
    }
}

/// Whether `name` can be used as a shell function name in every supported shell.
pub fn is_valid_function_name(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Bash shell template
#[derive(Template)]
#[template(path = "bash.sh", escape = "none")]
struct BashTemplate<'a> {
    shell_name: String,
    function_name: &'a str,
    config_line: &'a str,
}

/// Zsh shell template
#[derive(Template)]
#[template(path = "zsh.zsh", escape = "none")]
struct ZshTemplate<'a> {
    function_name: &'a str,
    config_line: &'a str,
}

/// Fish shell template
#[derive(Template)]
#[template(path = "fish.fish", escape = "none")]
struct FishTemplate<'a> {
    function_name: &'a str,
    config_line: &'a str,
}
