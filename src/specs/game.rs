// src/specs/game.rs
//! Page parser for one game page (`/showgame.php?game_id=N`).
//!
//! Layout we rely on:
//! - `#game_title`: "Show #2762 - Monday, September 9, 1996"
//! - two `table.round` (round 1 and 2), each with 6 `td.category_name`,
//!   6 `td.category_comments` and a grid of `td.clue` cells
//! - at most one `table.final_round` in practice (2 are tolerated)
//!
//! A clue cell carries its value in `td.clue_value` (or `td.clue_value_daily_double`)
//! and two `td.clue_text` cells: the prompt, then the hidden response holding
//! `em.correct_response`.
//!
//! Structural surprises (table/category/text counts) are `ScrapeError::Layout` and
//! drop the game or the cell. Missing required elements and unreadable values are
//! hard errors; `parse_game` applies `MissingElementPolicy` to those.

use chrono::NaiveDate;
use scraper::{ElementRef, Html, Selector};

use crate::config::MissingElementPolicy;
use crate::core::html::{self, find, find_all, text};
use crate::core::net::{self, Fetch};
use crate::core::sanitize::{parse_air_date, parse_clue_value};
use crate::data::{ClueRecord, GameRef, ROUND_FINAL};
use crate::error::{Result, ScrapeError};

const CATEGORIES_PER_ROUND: usize = 6;
const ROUND_TABLES: usize = 2;
const MAX_FINAL_TABLES: usize = 2;
const CLUE_TEXT_CELLS: usize = 2;

struct GameSelectors {
    title: Selector,
    round: Selector,
    final_round: Selector,
    category_name: Selector,
    category_comments: Selector,
    clue: Selector,
    clue_value: Selector,
    clue_value_dd: Selector,
    clue_text: Selector,
    correct_response: Selector,
}

impl GameSelectors {
    fn new() -> Result<Self> {
        Ok(Self {
            title: html::selector("#game_title")?,
            round: html::selector("table.round")?,
            final_round: html::selector("table.final_round")?,
            category_name: html::selector("td.category_name")?,
            category_comments: html::selector("td.category_comments")?,
            clue: html::selector("td.clue")?,
            clue_value: html::selector("td.clue_value")?,
            clue_value_dd: html::selector("td.clue_value_daily_double")?,
            clue_text: html::selector("td.clue_text")?,
            correct_response: html::selector("em.correct_response")?,
        })
    }
}

/// Category column for the next clue of a round; moves only when a clue is emitted.
#[derive(Debug, Default)]
struct ColumnCycle {
    col: usize,
}

impl ColumnCycle {
    fn current(&self) -> usize {
        self.col
    }

    fn advance(&mut self) {
        self.col = (self.col + 1) % CATEGORIES_PER_ROUND;
    }
}

/// Prompt/response pair plus value, before it gets a category.
struct ParsedClue {
    value: u32,
    daily_double: bool,
    answer: String,
    question: String,
}

/// Fetch and parse one game.
///
/// Transport failures and layout anomalies are logged and yield no records.
/// Hard page defects do the same under `Skip`, and are returned under `Abort`.
pub fn parse_game(
    fetch: &dyn Fetch,
    base: &str,
    game: &GameRef,
    policy: MissingElementPolicy,
) -> Result<Vec<ClueRecord>> {
    let url = game.url(base);
    let doc = match net::http_get(fetch, &url) {
        Ok(doc) => doc,
        Err(e) if e.is_transport() => {
            logw!("Failed to fetch the game page {url}: {e}");
            return Ok(Vec::new());
        }
        Err(e) => return Err(e),
    };

    let t = std::time::Instant::now();
    match parse_doc(&doc) {
        Ok(records) => {
            let daily_doubles = records.iter().filter(|r| r.is_daily_double()).count();
            logd!("Parsed {url}: {} clues ({daily_doubles} daily doubles) in {:?}", records.len(), t.elapsed());
            Ok(records)
        }
        Err(ScrapeError::Layout(msg)) => {
            logw!("Skipping malformed game {url}: {msg}");
            Ok(Vec::new())
        }
        Err(e) if e.is_hard() => match policy {
            MissingElementPolicy::Skip => {
                logw!("Skipping game {url}: {e}");
                Ok(Vec::new())
            }
            MissingElementPolicy::Abort => {
                loge!("Aborting on game {url}: {e}");
                Err(e)
            }
        },
        Err(e) => Err(e),
    }
}

/// Split out for unit tests.
pub fn parse_doc(doc: &str) -> Result<Vec<ClueRecord>> {
    let doc = Html::parse_document(doc);
    let sels = GameSelectors::new()?;
    let root = doc.root_element();

    let rounds = find_all(root, &sels.round);
    let finals = find_all(root, &sels.final_round);
    if rounds.len() != ROUND_TABLES || finals.len() > MAX_FINAL_TABLES {
        return Err(ScrapeError::Layout(format!(
            "{} round tables, {} final tables", rounds.len(), finals.len()
        )));
    }

    let title = find(root, &sels.title)
        .ok_or_else(|| ScrapeError::MissingElement(s!("#game_title")))?;
    let air_date = parse_air_date(&text(title))?;

    let mut records = Vec::new();
    for (round_no, table) in (1u8..).zip(rounds) {
        parse_round(table, round_no, air_date, &sels, &mut records)?;
    }
    for table in finals {
        if let Some(record) = parse_final(table, air_date, &sels)? {
            records.push(record);
        }
    }
    Ok(records)
}

fn parse_round(
    table: ElementRef<'_>,
    round: u8,
    air_date: NaiveDate,
    sels: &GameSelectors,
    out: &mut Vec<ClueRecord>,
) -> Result<()> {
    let categories: Vec<String> = find_all(table, &sels.category_name).into_iter().map(text).collect();
    let comments: Vec<String> = find_all(table, &sels.category_comments).into_iter().map(text).collect();
    if categories.len() != CATEGORIES_PER_ROUND || comments.len() != CATEGORIES_PER_ROUND {
        return Err(ScrapeError::Layout(format!(
            "round {round}: {} categories, {} comments", categories.len(), comments.len()
        )));
    }

    let mut column = ColumnCycle::default();
    for cell in find_all(table, &sels.clue) {
        let Some(clue) = parse_clue(cell, sels)? else { continue };
        let col = column.current();
        out.push(ClueRecord {
            round,
            clue_value: clue.value,
            daily_double_value: if clue.daily_double { clue.value } else { 0 },
            category: categories[col].clone(),
            comments: comments[col].clone(),
            answer: clue.answer,
            question: clue.question,
            air_date,
            notes: s!(),
        });
        column.advance();
    }
    Ok(())
}

/// `None` for unrevealed slots and cells without exactly two text cells.
fn parse_clue(cell: ElementRef<'_>, sels: &GameSelectors) -> Result<Option<ParsedClue>> {
    let (value_cell, daily_double) = match find(cell, &sels.clue_value) {
        Some(v) => (v, false),
        None => match find(cell, &sels.clue_value_dd) {
            Some(v) => (v, true),
            None => return Ok(None),
        },
    };
    let value = parse_clue_value(&text(value_cell))?;

    let Some((answer, question)) = read_texts(cell, sels)? else { return Ok(None) };
    Ok(Some(ParsedClue { value, daily_double, answer, question }))
}

fn parse_final(
    table: ElementRef<'_>,
    air_date: NaiveDate,
    sels: &GameSelectors,
) -> Result<Option<ClueRecord>> {
    let Some((answer, question)) = read_texts(table, sels)? else {
        logd!("Final round table without {CLUE_TEXT_CELLS} text cells; skipped");
        return Ok(None);
    };
    let category = find(table, &sels.category_name)
        .ok_or_else(|| ScrapeError::MissingElement(s!("final round td.category_name")))?;
    let comments = find(table, &sels.category_comments)
        .ok_or_else(|| ScrapeError::MissingElement(s!("final round td.category_comments")))?;

    Ok(Some(ClueRecord {
        round: ROUND_FINAL,
        clue_value: 0,
        daily_double_value: 0,
        category: text(category),
        comments: text(comments),
        answer,
        question,
        air_date,
        notes: s!(),
    }))
}

/// (prompt, correct response), or `None` when the text cell count is off.
fn read_texts(scope: ElementRef<'_>, sels: &GameSelectors) -> Result<Option<(String, String)>> {
    let texts = find_all(scope, &sels.clue_text);
    if texts.len() != CLUE_TEXT_CELLS {
        return Ok(None);
    }
    let response = find(texts[1], &sels.correct_response)
        .ok_or_else(|| ScrapeError::MissingElement(s!("em.correct_response")))?;
    Ok(Some((text(texts[0]), text(response))))
}
