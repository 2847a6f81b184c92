//! Command execution context
//!
//! Loads configuration, opens the persisted session and builds the API
//! client once, so individual commands only deal with their own arguments.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::broadcast;

use crate::cache::ResourceCache;
use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::cli::notifier::ConsoleNotifier;
use crate::client::VendorHubClient;
use crate::config::Config;
use crate::error::{ConfigError, Result};
use crate::pipeline::PipelineEvent;
use crate::session::{FileStorage, Session};

/// Session file name, stored next to the config file
pub const SESSION_FILE: &str = "session.yaml";

/// Context for command execution
pub struct CommandContext {
    pub config: Config,
    pub client: VendorHubClient,
    pub format: OutputFormat,
    events: broadcast::Receiver<PipelineEvent>,
}

impl CommandContext {
    /// Build a context for commands that talk to the API.
    ///
    /// # Errors
    /// Returns an error if the config cannot be loaded or nobody is logged in.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let context = Self::open(opts)?;
        if !context.client.session().is_logged_in() {
            return Err(ConfigError::NotLoggedIn.into());
        }
        Ok(context)
    }

    /// Build a context without requiring a session (login, logout).
    pub fn open(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::load_at(opts.config_ref())?;
        let session = open_session(opts.config_ref())?;

        let mut client = VendorHubClient::from_config(
            &config,
            opts.api_url_ref(),
            session,
            Arc::new(ConsoleNotifier),
        )?;
        if opts.no_cache {
            client = client.with_cache(ResourceCache::disabled());
        }
        let events = client.subscribe();

        Ok(Self {
            config,
            client,
            format: opts.format,
            events,
        })
    }

    /// React to pipeline events raised while the command ran.
    ///
    /// Returns `true` if the session was evicted.
    pub fn settle(&mut self) -> bool {
        let mut expired = false;
        while let Ok(event) = self.events.try_recv() {
            match event {
                PipelineEvent::SessionExpired => {
                    self.client.cache().clear();
                    expired = true;
                }
                PipelineEvent::SecurityBlocked { ticket } => {
                    log::debug!("Security block reported to user (support id {})", ticket);
                }
            }
        }
        expired
    }
}

/// Path of the session file for a given config location
pub fn session_path(config_path: Option<&str>) -> Result<PathBuf> {
    let config_path = Config::resolve_path(config_path)?;
    Ok(config_path.with_file_name(SESSION_FILE))
}

/// Open the persisted session for a given config location
pub fn open_session(config_path: Option<&str>) -> Result<Session> {
    let path = session_path(config_path)?;
    Ok(Session::new(Arc::new(FileStorage::new(path))))
}
