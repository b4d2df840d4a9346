//! Gearbox CLI - site maintenance tools.
//!
//! # Usage
//!
//! ```bash
//! # Verify catalog images and content pages
//! gb-cli check --static-dir crates/site/static --content-dir crates/site/content
//!
//! # Print the sitemap for production
//! gb-cli sitemap --base-url https://gearboxauto.example
//!
//! # Dump catalog data as JSON
//! gb-cli export services
//! ```
//!
//! # Commands
//!
//! - `check` - Verify every catalog image resolves and content pages load
//! - `sitemap` - Print `sitemap.xml`
//! - `export` - Print catalog records as JSON

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use url::Url;

mod commands;

#[derive(Parser)]
#[command(name = "gb-cli")]
#[command(author, version, about = "Gearbox Auto Repair site tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that catalog images exist and content pages load
    Check {
        /// Directory served under `/static`
        #[arg(long, default_value = "crates/site/static")]
        static_dir: PathBuf,

        /// Directory holding `pages/*.md`
        #[arg(long, default_value = "crates/site/content")]
        content_dir: PathBuf,
    },
    /// Print the sitemap XML
    Sitemap {
        /// Public base URL, e.g. `https://gearboxauto.example`
        #[arg(long)]
        base_url: Url,

        /// Directory holding `pages/*.md`
        #[arg(long, default_value = "crates/site/content")]
        content_dir: PathBuf,
    },
    /// Print catalog records as JSON
    Export {
        #[arg(value_enum)]
        target: ExportTarget,
    },
}

/// Catalog collections that can be exported.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportTarget {
    Services,
    Testimonials,
    Slides,
    Profile,
}

fn main() {
    // Logs go to stderr so command output can be piped
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gb_cli=info,gearbox_site=warn".into()),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut out = std::io::stdout().lock();
    match cli.command {
        Commands::Check {
            static_dir,
            content_dir,
        } => commands::check::run(&static_dir, &content_dir, &mut out)?,
        Commands::Sitemap {
            base_url,
            content_dir,
        } => commands::sitemap::run(base_url, &content_dir, &mut out)?,
        Commands::Export { target } => commands::export::run(target, &mut out)?,
    }
    Ok(())
}
