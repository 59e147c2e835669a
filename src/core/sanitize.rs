// src/core/sanitize.rs

use chrono::format::{self, Parsed, StrftimeItems};
use chrono::NaiveDate;

use crate::error::{ParseError, Result, ScrapeError};

/// Title date format, e.g. "Monday, September 9, 1996".
pub const AIR_DATE_FORMAT: &str = "%A, %B %d, %Y";
/// `AIR_DATE_FORMAT` after the weekday.
const CALENDAR_DATE_FORMAT: &str = "%B %d, %Y";
const TITLE_SEP: &str = " - ";

/// Keep only the digits of a money label ("$1,000", "DD: $2,400") and read them as an integer.
pub fn parse_clue_value(s: &str) -> Result<u32, ParseError> {
    let digits: String = s.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return Err(ParseError::NoDigits(s!(s)));
    }
    digits.parse().map_err(|_| ParseError::Overflow(s!(s)))
}

/// Air date from the game title text: `"<show> - <weekday>, <month> <day>, <year>"`.
///
/// The weekday must be a weekday name but is not checked against the date;
/// some titles carry the wrong one.
pub fn parse_air_date(title: &str) -> Result<NaiveDate> {
    let date_text = title
        .split(TITLE_SEP)
        .nth(1)
        .ok_or_else(|| ScrapeError::MissingElement(format!("date in title {:?}", title.trim())))?;
    let date_text = date_text.trim();
    let date_err = |source: chrono::ParseError| ScrapeError::Date { text: s!(date_text), source };

    // Shape check only: filling `Parsed` does not cross-check fields.
    let mut parsed = Parsed::new();
    format::parse(&mut parsed, date_text, StrftimeItems::new(AIR_DATE_FORMAT)).map_err(date_err)?;

    let calendar = date_text.split_once(", ").map_or(date_text, |(_, rest)| rest);
    NaiveDate::parse_from_str(calendar, CALENDAR_DATE_FORMAT).map_err(date_err)
}
