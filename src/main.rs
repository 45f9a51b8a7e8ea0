// src/main.rs

use anyhow::Result;
use clap::Parser;
use passlift::convert::{self, ConvertOptions};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "passlift")]
#[command(author, version, about = "Convert Chrome saved passwords to Password Exporter XML", long_about = None)]
struct Cli {
    /// Path to Chrome's "Login Data" SQLite file
    #[arg(long, default_value = convert::DEFAULT_STORE)]
    store: PathBuf,

    /// Output file for saved credentials
    #[arg(long, default_value = convert::DEFAULT_PASSLIST)]
    passlist: PathBuf,

    /// Output file for never-save sites
    #[arg(long, default_value = convert::DEFAULT_BLACKLIST)]
    blacklist: PathBuf,
}

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let opts = ConvertOptions {
        store_path: cli.store,
        passlist_path: cli.passlist,
        blacklist_path: cli.blacklist,
    };

    info!("Converting {}", opts.store_path.display());
    convert::run(&opts)?;
    Ok(())
}
