// src/specs/mod.rs
//! # Page parsers
//!
//! Page-specific parsers for J! Archive. Each one covers one
//! page kind and encodes *where the data lives in the HTML* and *which shapes
//! are accepted*.
//!
//! ## What lives here
//! - **Pure HTML parsing** (`parse_doc`) over `core::html` queries, testable offline.
//! - A thin **fetch wrapper** per page that turns transport and layout failures
//!   into "no results" plus a log line.
//!
//! ## What does **not** live here
//! - Traversal order and the record quota (`scrape::collect`).
//! - Output formatting (`csv`, `file`).
//!
//! ## Typical call chain
//! ```text
//! cli → scrape::collect → specs::season::list_games → specs::game::parse_game
//!                       ↘ Vec<ClueRecord> → file::write_export
//! ```
//!
//! ## Current parsers
//! - `season` – game links from `/showseason.php?season=N`.
//! - `game` – clue records from `/showgame.php?game_id=N`.
pub mod game;
pub mod season;
