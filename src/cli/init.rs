//! Init command implementation

use colored::Colorize;
use dialoguer::{Input, theme::ColorfulTheme};

use super::GlobalOptions;
use crate::config::{Config, DEFAULT_API_BASE_URL};
use crate::error::Result;

/// Write a config file. The API origin comes from `--api-url` or a prompt.
pub fn run(opts: &GlobalOptions) -> Result<()> {
    let path = Config::resolve_path(opts.config_ref())?;
    let mut config = Config::load_at(opts.config_ref())?;

    println!("{}", "Welcome to VendorHub!".bold().green());

    let api_base_url = match opts.api_url_ref() {
        Some(url) => url.to_string(),
        None => {
            let current = config
                .api_base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
            Input::<String>::with_theme(&ColorfulTheme::default())
                .with_prompt("VendorHub API URL")
                .default(current)
                .interact_text()?
        }
    };

    config.api_base_url = Some(api_base_url.trim_end_matches('/').to_string());
    config.save_to(path.clone())?;

    println!(
        "{} Configuration saved to {}",
        "✓".green(),
        path.display().to_string().cyan()
    );
    println!("  → Run 'vendorhub login' to authenticate");
    Ok(())
}
