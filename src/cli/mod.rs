//! CLI command definitions and handlers

use clap::{Parser, Subcommand};
use colored::Colorize;

pub mod args;
pub mod assessment;
pub mod auth;
pub mod context;
pub mod init;
pub mod notifier;
pub mod product;
pub mod status;
pub mod vendor;

pub use args::{GlobalOptions, OutputFormat};
pub use context::CommandContext;

use crate::error::{Error, Result};

/// VendorHub CLI - vendor, product and assessment management
#[derive(Parser, Debug)]
#[command(name = "vendorhub")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json)
    #[arg(
        long,
        global = true,
        env = "VENDORHUB_FORMAT",
        default_value = "table",
        hide_env = true
    )]
    pub format: OutputFormat,

    /// Override config file location
    #[arg(long, global = true, env = "VENDORHUB_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Override the API origin
    #[arg(long, global = true, env = "VENDORHUB_API_URL", hide_env = true)]
    pub api_url: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "VENDORHUB_DEBUG", hide_env = true)]
    pub debug: bool,

    /// Bypass the response cache
    #[arg(long, global = true, env = "VENDORHUB_NO_CACHE", hide_env = true)]
    pub no_cache: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a configuration file
    Init,

    /// Store an access token for subsequent commands
    Login {
        /// Access token (prompted for if omitted)
        #[arg(long, env = "VENDORHUB_TOKEN", hide_env = true)]
        token: Option<String>,

        /// Display name of the logged-in user
        #[arg(long)]
        user: Option<String>,
    },

    /// Forget the stored session
    Logout,

    /// Show configuration and session status
    Status,

    /// Manage vendors
    #[command(subcommand)]
    Vendor(VendorCommands),

    /// Manage products
    #[command(subcommand)]
    Product(ProductCommands),

    /// Run and inspect assessment analyses
    #[command(subcommand)]
    Assessment(AssessmentCommands),
}

#[derive(Subcommand, Debug)]
pub enum VendorCommands {
    /// List vendors
    List,

    /// Show one vendor
    Get { id: String },

    /// Create a vendor
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        website: Option<String>,
    },

    /// Update a vendor
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        website: Option<String>,
        #[arg(long)]
        status: Option<String>,
    },

    /// Delete a vendor
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum ProductCommands {
    /// List products, optionally for one vendor
    List {
        #[arg(long)]
        vendor: Option<String>,
    },

    /// Show one product
    Get { id: String },

    /// Create a product under a vendor
    Create {
        #[arg(long)]
        vendor: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        version: Option<String>,
    },

    /// Update a product
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        version: Option<String>,
    },

    /// Approve (or reject) a product
    Approve {
        id: String,
        /// Record a rejection instead of an approval
        #[arg(long)]
        reject: bool,
        #[arg(long)]
        comments: Option<String>,
    },

    /// Delete a product
    Delete {
        id: String,
        #[arg(long, short)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum AssessmentCommands {
    /// Run the analysis for an assessment
    Analyze {
        id: String,
        #[arg(long)]
        threshold: Option<u32>,
        /// Include remediation recommendations
        #[arg(long)]
        recommendations: bool,
    },

    /// Show analysis results
    Results { id: String },

    /// List items that are not implemented
    NotImplemented {
        id: String,
        /// Only items scoring at or below this value
        #[arg(long)]
        threshold: Option<u32>,
    },

    /// Change item statuses, e.g. `--item ctrl-1=IMPLEMENTED`
    UpdateStatus {
        id: String,
        #[arg(long = "item", value_name = "ITEM=STATUS", required = true)]
        items: Vec<String>,
    },
}

/// Run a parsed command line.
pub async fn run(cli: Cli) -> Result<()> {
    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Init => init::run(&opts),
        Commands::Login { token, user } => auth::login(&opts, token, user),
        Commands::Logout => auth::logout(&opts),
        Commands::Status => status::run(&opts),
        Commands::Vendor(cmd) => {
            let mut ctx = CommandContext::new(&opts)?;
            let outcome = vendor::run(&ctx, cmd).await;
            finish(&mut ctx, outcome)
        }
        Commands::Product(cmd) => {
            let mut ctx = CommandContext::new(&opts)?;
            let outcome = product::run(&ctx, cmd).await;
            finish(&mut ctx, outcome)
        }
        Commands::Assessment(cmd) => {
            let mut ctx = CommandContext::new(&opts)?;
            let outcome = assessment::run(&ctx, cmd).await;
            finish(&mut ctx, outcome)
        }
    }
}

/// Act on session events an API command produced, then pass its outcome on.
fn finish(ctx: &mut CommandContext, outcome: Result<()>) -> Result<()> {
    if ctx.settle() {
        eprintln!(
            "{} Run `{}` to continue.",
            "Session expired. Please log in again.".yellow(),
            "vendorhub login".bold()
        );
    }
    outcome
}

/// Mark a mutation failure as already shown to the user.
pub(crate) fn notified(err: crate::error::ApiError) -> Error {
    Error::Notified(err)
}
