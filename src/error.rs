// src/error.rs
use thiserror::Error;

/// Failure of the named clue-value parsing step.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("no digits in value text {0:?}")]
    NoDigits(String),

    #[error("value out of range: {0:?}")]
    Overflow(String),
}

#[derive(Error, Debug)]
pub enum ScrapeError {
    /// Connection-level failure (DNS, TLS, reset, body decode).
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    /// Page does not have the shape we expect (table or cell counts).
    #[error("unexpected layout: {0}")]
    Layout(String),

    #[error("missing element: {0}")]
    MissingElement(String),

    #[error("bad air date {text:?}: {source}")]
    Date {
        text: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("bad clue value: {0}")]
    Value(#[from] ParseError),

    #[error("invalid selector {css:?}: {reason}")]
    Selector { css: String, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ScrapeError {
    /// Page defects that `MissingElementPolicy` decides on.
    pub fn is_hard(&self) -> bool {
        matches!(
            self,
            ScrapeError::MissingElement(_) | ScrapeError::Date { .. } | ScrapeError::Value(_)
        )
    }

    /// Transport failures: logged and treated as "nothing from this source".
    pub fn is_transport(&self) -> bool {
        matches!(self, ScrapeError::Http(_) | ScrapeError::Status { .. })
    }
}

pub type Result<T, E = ScrapeError> = std::result::Result<T, E>;
