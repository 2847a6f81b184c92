//! VendorHub CLI

use clap::Parser;
use log::LevelFilter;

use vendorhub::cli::{self, Cli};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(err) = cli::run(cli).await {
        if !err.is_reported() {
            eprintln!("Error: {}", err);
        }
        std::process::exit(1);
    }
}

/// `--debug` forces debug output for this crate; otherwise `RUST_LOG` applies
/// with a `warn` default.
fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_module("vendorhub", LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}
