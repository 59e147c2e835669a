// src/bin/cli.rs
use clap::Parser;
use jarchive_scrape::cli::{self, Args};
use tracing::Level;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    jarchive_scrape::log::init(args.json, if args.verbose { Level::DEBUG } else { Level::INFO });
    cli::run(args)?;
    Ok(())
}
