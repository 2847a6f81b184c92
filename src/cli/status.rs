//! Status command implementation

use colored::Colorize;

use super::GlobalOptions;
use super::context::{open_session, session_path};
use crate::config::Config;
use crate::error::Result;

/// Show configuration and session state. Never touches the network.
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "VendorHub Status".bold());

    let config_path = Config::resolve_path(opts.config_ref())?;
    let config = Config::load_at(opts.config_ref())?;
    if config_path.exists() {
        println!("Config file: {}", config_path.display().to_string().cyan());
    } else {
        println!(
            "Config file: {} {}",
            config_path.display().to_string().cyan(),
            "(not created, using defaults)".dimmed()
        );
    }

    println!("API URL: {}", config.api_base_url(opts.api_url_ref()));
    println!(
        "Cache: {}",
        if opts.no_cache {
            "disabled".to_string()
        } else {
            format!("stale after {}s", config.stale_time_secs)
        }
    );
    println!();

    let session = open_session(opts.config_ref())?;
    if session.is_logged_in() {
        match session.current_user() {
            Some(user) => println!("{} Logged in as {}", "✓".green(), user.bold()),
            None => println!("{} Logged in", "✓".green()),
        }
        log::debug!("Session file: {}", session_path(opts.config_ref())?.display());
    } else {
        println!("{} Not logged in", "✗".red());
        println!("  → Run 'vendorhub login' to authenticate");
    }

    Ok(())
}
