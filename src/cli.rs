// src/cli.rs
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;

use crate::config::consts::{BASE_URL, DEFAULT_QUOTA};
use crate::config::options::{
    AppOptions, ExportFormat, MissingElementPolicy, Quota, ScrapeOptions, SeasonRange,
};
use crate::core::net::HttpClient;
use crate::data::GameRef;
use crate::error::Result;
use crate::progress::Progress;
use crate::{file, scrape};

#[derive(Parser, Debug)]
#[command(name = "jarchive_scrape", version, about = "Scrape J! Archive games into a TSV of clues")]
pub struct Args {
    /// Seasons to visit, inclusive: "35" or "30-40"
    #[arg(long, default_value_t = SeasonRange::default())]
    pub seasons: SeasonRange,

    /// Stop starting new games once this many clues are collected (0 or less: no limit)
    #[arg(long, default_value_t = DEFAULT_QUOTA as i64, allow_negative_numbers = true)]
    pub quota: i64,

    /// Output file, or a directory ending in '/'
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Output format: tsv or csv
    #[arg(long, default_value = "tsv")]
    pub format: ExportFormat,

    /// Game pages missing required elements: skip or abort
    #[arg(long, default_value = "skip")]
    pub on_missing: MissingElementPolicy,

    /// Per-request timeout in seconds (default: wait indefinitely)
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    #[arg(long, default_value = BASE_URL)]
    pub base_url: String,

    /// Only list game links for the season range
    #[arg(long)]
    pub list_games: bool,

    /// Debug-level logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit JSON log lines
    #[arg(long)]
    pub json: bool,
}

impl Args {
    pub fn to_options(&self) -> AppOptions {
        let mut opts = AppOptions {
            scrape: ScrapeOptions {
                base_url: self.base_url.clone(),
                seasons: self.seasons,
                quota: Quota::from_signed(self.quota),
                on_missing: self.on_missing,
                timeout: self.timeout_secs.map(Duration::from_secs),
            },
            ..AppOptions::default()
        };
        opts.export.format = self.format;
        if let Some(out) = &self.out {
            opts.export.set_path(&out.to_string_lossy());
        }
        opts
    }
}

/// Prints run status to stdout; diagnostics go to the log on stderr.
struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn begin(&mut self, seasons: usize) {
        println!("Scraping {seasons} season(s)");
    }
    fn season_listed(&mut self, season: u32, games: usize) {
        println!("Season {season}: found {games} games");
    }
    fn game_done(&mut self, game: &GameRef, clues: usize) {
        if clues > 0 {
            println!("Scraped game {game} ({clues} clues)");
        } else {
            println!("Skipped game {game}");
        }
    }
    fn quota_met(&mut self, collected: usize) {
        println!("Quota reached at {collected} clues");
    }
    fn written(&mut self, path: &Path, clues: usize) {
        println!("Wrote {clues} clues to {}", path.display());
    }
}

pub fn run(args: Args) -> Result<()> {
    let opts = args.to_options();
    logd!("Options: {opts:?}");
    let client = HttpClient::new(opts.scrape.timeout)?;

    if args.list_games {
        for (season, game) in scrape::list_games(&client, &opts.scrape) {
            println!("{season}\t{}", game.url(&opts.scrape.base_url));
        }
        return Ok(());
    }

    let mut progress = ConsoleProgress;
    let clues = scrape::collect(&client, &opts.scrape, Some(&mut progress))?;
    let path = file::write_export(&opts.export, &clues)?;
    progress.written(&path, clues.len());
    logf!("Wrote {} clues to {}", clues.len(), path.display());
    Ok(())
}
