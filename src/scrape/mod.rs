// src/scrape/mod.rs
mod collect;

pub use collect::collect;
pub use collect::list_games;
