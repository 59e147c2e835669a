// src/specs/season.rs
//! Page parser for a season index (`/showseason.php?season=N`).
//!
//! The page is a single table, one row per game:
//!   `<tr><td><a href="showgame.php?game_id=…">#7001, aired …</a></td><td>…</td><td>…</td></tr>`
//! Rows of any other shape (headers, spacers) are skipped silently.

use scraper::Html;

use crate::core::html::{self, attr, find, find_all};
use crate::core::net::{self, Fetch};
use crate::data::GameRef;
use crate::error::{Result, ScrapeError};

const GAME_ROW_CELLS: usize = 3;

pub fn season_url(base: &str, season: u32) -> String {
    net::resolve(base, &format!("showseason.php?season={season}"))
}

/// Game links for one season, in page order. Empty on fetch failure or odd layout.
pub fn list_games(fetch: &dyn Fetch, base: &str, season: u32) -> Vec<GameRef> {
    let url = season_url(base, season);
    let doc = match net::http_get(fetch, &url) {
        Ok(doc) => doc,
        Err(e) => {
            logw!("Failed to fetch season {season} ({url}): {e}");
            return Vec::new();
        }
    };
    match parse_doc(&doc) {
        Ok(games) => {
            logd!("Season {season}: {} game rows", games.len());
            games
        }
        Err(e) => {
            logw!("Unexpected layout for season {season}, skipping: {e}");
            Vec::new()
        }
    }
}

/// Split out for unit tests.
pub fn parse_doc(doc: &str) -> Result<Vec<GameRef>> {
    let doc = Html::parse_document(doc);
    let table_sel = html::selector("table")?;
    let tr_sel = html::selector("tr")?;
    let td_sel = html::selector("td")?;
    let a_sel = html::selector("a")?;

    let tables = find_all(doc.root_element(), &table_sel);
    if tables.len() != 1 {
        return Err(ScrapeError::Layout(format!("expected 1 table, found {}", tables.len())));
    }

    let games = find_all(tables[0], &tr_sel)
        .into_iter()
        .filter_map(|tr| {
            let tds = find_all(tr, &td_sel);
            if tds.len() != GAME_ROW_CELLS {
                return None;
            }
            let link = find(tds[0], &a_sel)?;
            attr(link, "href").map(GameRef::new)
        })
        .collect();
    Ok(games)
}
