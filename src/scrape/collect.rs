// src/scrape/collect.rs
use crate::{
    config::options::ScrapeOptions,
    core::net::Fetch,
    data::{ClueRecord, GameRef},
    error::Result,
    progress::Progress,
    specs,
};

/// Walk the season range in order and gather clue records until the quota is met.
///
/// The quota is checked before each season and each game; a game that has
/// started always contributes all of its records.
pub fn collect(
    fetch: &dyn Fetch,
    scrape: &ScrapeOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Vec<ClueRecord>> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(scrape.seasons.len());
    }

    let mut clues: Vec<ClueRecord> = Vec::new();

    'seasons: for season in scrape.seasons.iter() {
        if scrape.quota.is_met(clues.len()) {
            break;
        }
        logf!("--- Scraping season {season} ---");
        let games = specs::season::list_games(fetch, &scrape.base_url, season);
        logf!("Season {season}: found {} games", games.len());
        if let Some(p) = progress.as_deref_mut() {
            p.season_listed(season, games.len());
        }

        for game in &games {
            if scrape.quota.is_met(clues.len()) {
                break 'seasons;
            }
            let records = match specs::game::parse_game(fetch, &scrape.base_url, game, scrape.on_missing) {
                Ok(records) => records,
                Err(e) => {
                    if let Some(p) = progress.as_deref_mut() {
                        p.finish(clues.len());
                    }
                    return Err(e);
                }
            };
            if let Some(p) = progress.as_deref_mut() {
                p.game_done(game, records.len());
            }
            clues.extend(records);
        }
    }

    if scrape.quota.is_met(clues.len()) {
        logf!("Quota {} met with {} clues", scrape.quota, clues.len());
        if let Some(p) = progress.as_deref_mut() {
            p.quota_met(clues.len());
        }
    }
    if let Some(p) = progress.as_deref_mut() {
        p.finish(clues.len());
    }
    Ok(clues)
}

/// Game links for every season in range, tagged with their season. No game pages are fetched.
pub fn list_games(fetch: &dyn Fetch, scrape: &ScrapeOptions) -> Vec<(u32, GameRef)> {
    scrape
        .seasons
        .iter()
        .flat_map(|season| {
            specs::season::list_games(fetch, &scrape.base_url, season)
                .into_iter()
                .map(move |g| (season, g))
        })
        .collect()
}
