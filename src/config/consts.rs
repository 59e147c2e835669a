// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://j-archive.com";
pub const USER_AGENT: &str = concat!("jarchive_scrape/", env!("CARGO_PKG_VERSION"));

// Scrape
pub const SEASON_START: u32 = 30;
pub const SEASON_END: u32 = 40;
pub const DEFAULT_QUOTA: usize = 10; // records, checked before each game

// Export
pub const DEFAULT_OUT_FILE: &str = "jeopardy_seasons_30_40";
