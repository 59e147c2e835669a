// src/core/html.rs
//! Tree queries over parsed markup.
//!
//! Everything takes an `ElementRef` scope and searches its descendants only,
//! so the same helpers work on a whole document (`doc.root_element()`) or a subtree.

use scraper::{ElementRef, Selector};

use crate::error::{Result, ScrapeError};

/// Compile a CSS selector, e.g. `"td.clue_value"` or `"#game_title"`.
pub fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ScrapeError::Selector { css: s!(css), reason: e.to_string() })
}

pub fn find_all<'a>(scope: ElementRef<'a>, sel: &Selector) -> Vec<ElementRef<'a>> {
    scope.select(sel).collect()
}

pub fn find<'a>(scope: ElementRef<'a>, sel: &Selector) -> Option<ElementRef<'a>> {
    scope.select(sel).next()
}

/// All descendant text, concatenated as-is.
pub fn text(el: ElementRef<'_>) -> String {
    el.text().collect()
}

pub fn attr(el: ElementRef<'_>, name: &str) -> Option<String> {
    el.value().attr(name).map(String::from)
}
