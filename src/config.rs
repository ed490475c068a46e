use std::collections::HashMap;
use std::path::{Path, PathBuf};

use config::{Case, Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

#[cfg(not(test))]
use etcetera::base_strategy::{BaseStrategy, choose_base_strategy};

/// When the listing program should emit color sequences.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ColorWhen {
    Auto,
    #[default]
    Always,
    Never,
}

/// User configuration for cdls.
///
/// ```toml
/// # Include dotfiles (same as passing -a)
/// show-hidden = true
///
/// # Passed to the listing program as --color=<when>
/// color = "auto"
///
/// # Skip probing and use this program
/// listing-command = "/opt/homebrew/bin/gls"
/// ```
///
/// Config file location:
/// - Linux: `$XDG_CONFIG_HOME/cdls/config.toml` or `~/.config/cdls/config.toml`
/// - macOS: `$XDG_CONFIG_HOME/cdls/config.toml` or `~/.config/cdls/config.toml`
/// - Windows: `%APPDATA%\cdls\config.toml`
///
/// Environment variables: `CDLS_SHOW_HIDDEN`, `CDLS_COLOR`, `CDLS_LISTING_COMMAND`
///
/// The layout itself (size column width, gutter, two-column threshold) is fixed
/// and deliberately not configurable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CdlsConfig {
    #[serde(default)]
    pub show_hidden: bool,

    #[serde(default)]
    pub color: ColorWhen,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub listing_command: Option<String>,
}

impl Default for CdlsConfig {
    fn default() -> Self {
        Self {
            show_hidden: false,
            color: ColorWhen::Always,
            listing_command: None,
        }
    }
}

impl CdlsConfig {
    /// Load configuration from config file and environment variables.
    ///
    /// Configuration is loaded in the following order (later sources override earlier ones):
    /// 1. Default values
    /// 2. Config file (see struct documentation for platform-specific paths)
    /// 3. Environment variables (CDLS_*)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(get_config_path().as_deref(), None)
    }

    /// Load from an explicit file and, optionally, an explicit environment.
    ///
    /// `env` of `None` reads the process environment.
    pub fn load_from(
        path: Option<&Path>,
        env: Option<HashMap<String, String>>,
    ) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let mut builder = Config::builder()
            .set_default("show-hidden", defaults.show_hidden)?
            .set_default("color", defaults.color.to_string())?;

        if let Some(path) = path
            && path.exists()
        {
            log::debug!("Loading config from {}", path.display());
            builder = builder.add_source(File::from(path));
        }

        builder = builder.add_source(
            Environment::with_prefix("CDLS")
                .prefix_separator("_")
                .separator("__")
                .convert_case(Case::Kebab)
                .try_parsing(true)
                .source(env),
        );

        let config: Self = builder.build()?.try_deserialize()?;

        if let Some(command) = &config.listing_command
            && command.trim().is_empty()
        {
            return Err(ConfigError::Message("listing-command cannot be empty".into()));
        }

        Ok(config)
    }
}

fn get_config_path() -> Option<PathBuf> {
    // Explicit override (used by the integration tests)
    if let Ok(path) = std::env::var("CDLS_CONFIG_PATH") {
        return Some(PathBuf::from(path));
    }

    // In test builds, never read the user's real config
    #[cfg(test)]
    {
        None
    }

    // choose_base_strategy uses:
    // - XDG on Linux (respects XDG_CONFIG_HOME, falls back to ~/.config)
    // - XDG on macOS (~/.config instead of ~/Library/Application Support)
    // - Windows conventions on Windows (%APPDATA%)
    #[cfg(not(test))]
    {
        let strategy = choose_base_strategy().ok()?;
        Some(strategy.config_dir().join("cdls").join("config.toml"))
    }
}
