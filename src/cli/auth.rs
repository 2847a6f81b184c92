//! Login and logout

use colored::Colorize;
use dialoguer::{Password, theme::ColorfulTheme};

use super::{CommandContext, GlobalOptions};
use crate::error::{Error, Result};

/// Store a token; prompts for it when not given
pub fn login(opts: &GlobalOptions, token: Option<String>, user: Option<String>) -> Result<()> {
    let token = match token {
        Some(token) => token,
        None => Password::with_theme(&ColorfulTheme::default())
            .with_prompt("Enter your VendorHub access token")
            .interact()?,
    };
    let token = token.trim();
    if token.is_empty() {
        return Err(Error::Other("Access token must not be empty".to_string()));
    }

    let ctx = CommandContext::open(opts)?;
    ctx.client.pipeline().login(token, user.as_deref())?;

    match user {
        Some(user) => println!("{} Logged in as {}", "✓".green(), user.bold()),
        None => println!("{} Logged in", "✓".green()),
    }
    Ok(())
}

pub fn logout(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::open(opts)?;
    if !ctx.client.session().is_logged_in() {
        println!("{}", "Not logged in.".dimmed());
        return Ok(());
    }

    ctx.client.pipeline().logout()?;
    ctx.client.cache().clear();
    println!("{} Logged out", "✓".green());
    Ok(())
}
