// src/data.rs
//
// Row types shared by the parsers, the collector and the exporter.
//
// - ClueRecord: one clue of one game; immutable once collected.
// - GameRef:    link to a game page as found on a season index.

use chrono::NaiveDate;

use crate::core::net;
use crate::error::{Result, ScrapeError};

pub const ROUND_FINAL: u8 = 3;
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Output columns, in order.
pub const HEADERS: [&str; 9] = [
    "round",
    "clue_value",
    "daily_double_value",
    "category",
    "comments",
    "answer",
    "question",
    "air_date",
    "notes",
];

pub fn headers() -> Vec<String> {
    HEADERS.iter().map(|h| s!(*h)).collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClueRecord {
    pub round: u8,
    pub clue_value: u32,
    pub daily_double_value: u32,
    pub category: String,
    pub comments: String,
    pub answer: String,
    pub question: String,
    pub air_date: NaiveDate,
    pub notes: String,
}

impl ClueRecord {
    pub fn is_daily_double(&self) -> bool {
        self.daily_double_value != 0
    }

    pub fn to_row(&self) -> Vec<String> {
        row![
            self.round,
            self.clue_value,
            self.daily_double_value,
            self.category,
            self.comments,
            self.answer,
            self.question,
            self.air_date.format(DATE_FORMAT),
            self.notes,
        ]
    }

    /// Inverse of [`ClueRecord::to_row`].
    pub fn from_row(row: &[String]) -> Result<Self> {
        if row.len() != HEADERS.len() {
            return Err(ScrapeError::Layout(format!(
                "expected {} fields, got {}", HEADERS.len(), row.len()
            )));
        }
        let int = |i: usize| -> Result<u32> {
            row[i].parse().map_err(|_| ScrapeError::Layout(format!(
                "{}: not an integer: {:?}", HEADERS[i], row[i]
            )))
        };
        let round = int(0)?;
        let round = u8::try_from(round)
            .map_err(|_| ScrapeError::Layout(format!("round out of range: {round}")))?;
        let air_date = NaiveDate::parse_from_str(&row[7], DATE_FORMAT)
            .map_err(|source| ScrapeError::Date { text: row[7].clone(), source })?;

        Ok(Self {
            round,
            clue_value: int(1)?,
            daily_double_value: int(2)?,
            category: row[3].clone(),
            comments: row[4].clone(),
            answer: row[5].clone(),
            question: row[6].clone(),
            air_date,
            notes: row[8].clone(),
        })
    }
}

/// Link to one game page, kept exactly as the season index wrote it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GameRef(String);

impl GameRef {
    pub fn new(href: impl Into<String>) -> Self {
        Self(href.into())
    }

    pub fn url(&self, base: &str) -> String {
        net::resolve(base, &self.0)
    }
}

impl std::fmt::Display for GameRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
