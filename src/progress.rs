// src/progress.rs
use std::path::Path;

use crate::data::GameRef;

/// Lightweight progress reporting for a scrape run.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called once with the number of seasons in range.
    fn begin(&mut self, _seasons: usize) {}

    /// A season index was read.
    fn season_listed(&mut self, _season: u32, _games: usize) {}

    /// A game page produced `_clues` records (zero when it was skipped).
    fn game_done(&mut self, _game: &GameRef, _clues: usize) {}

    /// Collection stopped because the quota was met.
    fn quota_met(&mut self, _collected: usize) {}

    /// Output written.
    fn written(&mut self, _path: &Path, _clues: usize) {}

    /// Called at the end of collection, successful or not.
    fn finish(&mut self, _collected: usize) {}
}
