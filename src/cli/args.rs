//! Shared CLI argument types

use crate::cli::Cli;

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Table format, one row per entry (default)
    #[default]
    Table,
    /// JSON format for scripts
    Json,
}

/// Global CLI options passed to every command handler.
///
/// Precedence for each option: CLI flag > environment variable > config file > default.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    pub format: OutputFormat,

    /// Config file path (defaults to ~/.vendorhub/config.yaml)
    pub config: Option<String>,

    /// API origin override
    pub api_url: Option<String>,

    /// Bypass the response cache
    pub no_cache: bool,
}

impl GlobalOptions {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            config: cli.config.clone(),
            api_url: cli.api_url.clone(),
            no_cache: cli.no_cache,
        }
    }

    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    pub fn api_url_ref(&self) -> Option<&str> {
        self.api_url.as_deref()
    }
}
