//! InStyle asset pipeline.
//!
//! Offline image tooling for the storefront:
//! - `optimize` resizes and re-encodes catalog images in place
//! - `lqip` writes blurred placeholders for lazy-loaded images

mod imaging;
mod lqip;
mod optimize;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "asset-pipeline")]
#[command(about = "Image optimisation and placeholder generation for the InStyle storefront")]
struct Args {
    /// Verbose logging (ignored when RUST_LOG is set)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert prints and product photos to WebP and build the touch icon
    Optimize {
        /// Source images directory
        #[arg(long, value_name = "DIR", default_value = "images")]
        images: PathBuf,

        /// Public assets directory
        #[arg(long, value_name = "DIR", default_value = "public")]
        public: PathBuf,
    },
    /// Generate low-quality image placeholders
    Lqip {
        /// Source images directory
        #[arg(long, value_name = "DIR", default_value = "images")]
        images: PathBuf,

        /// Output directory for placeholders
        #[arg(long, value_name = "DIR", default_value = "src/assets/lqip")]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(if args.verbose { "debug" } else { "info" })),
        )
        .init();

    match args.command {
        Command::Optimize { images, public } => {
            let summary = optimize::run(&images, &public)?;
            info!(
                prints = summary.prints,
                missing = summary.prints_missing,
                archived = summary.prints_archived,
                products = summary.products,
                jpegs = summary.renamed_jpegs,
                hero = summary.hero,
                touch_icon = summary.touch_icon,
                skipped_avif = summary.skipped_avif,
                "optimize done"
            );
        }
        Command::Lqip { images, out } => {
            let summary = lqip::run(&images, &out)?;
            info!(
                written = summary.written,
                failed = summary.failed,
                "LQIP generation complete"
            );
        }
    }
    Ok(())
}
