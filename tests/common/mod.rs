// tests/common/mod.rs
//
// Canned J! Archive pages and a fake fetcher for offline tests.
//
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;

use jarchive_scrape::core::net::{Fetch, Page};
use jarchive_scrape::error::Result;

pub const BASE: &str = "http://archive.test";

pub fn url(path: &str) -> String {
    format!("{BASE}/{}", path.trim_start_matches('/'))
}

/// Serves canned bodies; anything unknown is a 404. Remembers every URL requested.
#[derive(Default)]
pub struct FakeSite {
    pages: HashMap<String, String>,
    pub hits: RefCell<Vec<String>>,
}

impl FakeSite {
    pub fn page(mut self, path: &str, body: String) -> Self {
        self.pages.insert(url(path), body);
        self
    }

    pub fn hits(&self) -> Vec<String> {
        self.hits.borrow().clone()
    }
}

impl Fetch for FakeSite {
    fn get(&self, url: &str) -> Result<Page> {
        self.hits.borrow_mut().push(url.to_string());
        Ok(match self.pages.get(url) {
            Some(body) => Page { status: 200, body: body.clone() },
            None => Page { status: 404, body: String::from("Not Found") },
        })
    }
}

/* ---------------- season index ---------------- */

pub fn season_page(paths: &[&str]) -> String {
    let mut rows = String::from(r#"<tr><td colspan="3"><h2>Season games</h2></td></tr>"#);
    for (i, p) in paths.iter().enumerate() {
        rows.push_str(&format!(
            r#"<tr><td align="left"><a href="{p}">#{n}, aired&#160;2013-09-{d:02}</a></td>
                   <td class="left_padded">Ken Jennings vs. Brad Rutter</td>
                   <td class="left_padded"></td></tr>"#,
            n = 6000 + i,
            d = i + 1,
        ));
    }
    format!(
        r#"<html><head><title>J! Archive - Season 30</title></head>
           <body><div id="content"><table>{rows}</table></div></body></html>"#
    )
}

/* ---------------- game page ---------------- */

pub fn clue_cell(value_class: &str, value: &str, answer: &str, question: &str) -> String {
    format!(
        r#"<td class="clue"><table>
             <tr><td><table class="clue_header"><tr>
               <td class="{value_class}">{value}</td>
               <td class="clue_order_number"><a href="suggestcorrection.php">7</a></td>
             </tr></table></td></tr>
             <tr><td class="clue_text" id="clue_J_1_1">{answer}</td></tr>
             <tr><td class="clue_text" id="clue_J_1_1_r" style="display:none;">
               <em class="correct_response">{question}</em><table><tr><td class="right">Ken</td></tr></table>
             </td></tr>
           </table></td>"#
    )
}

pub fn empty_cell() -> String {
    String::from(r#"<td class="clue"></td>"#)
}

fn category_row(round: u8) -> String {
    let mut row = String::from("<tr>");
    for c in 0..6 {
        row.push_str(&format!(
            r#"<td class="category"><table>
                 <tr><td class="category_name">R{round} CATEGORY {c}</td></tr>
                 <tr><td class="category_comments">{comment}</td></tr>
               </table></td>"#,
            comment = if c == 0 { "(Alex: Each response is a color.)" } else { "" },
        ));
    }
    row.push_str("</tr>");
    row
}

/// Category header plus one `<tr>` per entry of `rows`.
pub fn round_table_from(round: u8, rows: &[Vec<String>]) -> String {
    let mut t = format!(r#"<table class="round">{}"#, category_row(round));
    for cells in rows {
        t.push_str("<tr>");
        t.push_str(&cells.concat());
        t.push_str("</tr>");
    }
    t.push_str("</table>");
    t
}

/// A full 6x5 board; `dd` marks (row, col) cells that are daily doubles.
pub fn round_table(round: u8, dd: &[(usize, usize)]) -> String {
    let rows: Vec<Vec<String>> = (0..5)
        .map(|r| {
            (0..6)
                .map(|c| {
                    let answer = format!("R{round} clue {r},{c}");
                    let question = format!("R{round} response {r},{c}");
                    if dd.contains(&(r, c)) {
                        clue_cell("clue_value_daily_double", &format!("DD: ${},000", r + 1), &answer, &question)
                    } else {
                        let value = 200 * u32::from(round) * (r as u32 + 1);
                        clue_cell("clue_value", &format!("${value}"), &answer, &question)
                    }
                })
                .collect()
        })
        .collect();
    round_table_from(round, &rows)
}

/// A board where nothing was revealed.
pub fn blank_round_table(round: u8) -> String {
    let rows: Vec<Vec<String>> = (0..5).map(|_| vec![empty_cell(); 6]).collect();
    round_table_from(round, &rows)
}

pub fn final_table(category: &str, answer: &str, question: &str) -> String {
    format!(
        r#"<table class="final_round">
             <tr><td class="category"><table>
               <tr><td class="category_name">{category}</td></tr>
               <tr><td class="category_comments"></td></tr>
             </table></td></tr>
             <tr><td class="clue"><table>
               <tr><td class="clue_text" id="clue_FJ">{answer}</td></tr>
               <tr><td class="clue_text" id="clue_FJ_r"><em class="correct_response">{question}</em></td></tr>
             </table></td></tr>
           </table>"#
    )
}

pub fn game_page_with(title: &str, tables: &[String]) -> String {
    format!(
        r#"<html><head><title>J! Archive</title></head><body>
           <div id="game_title"><h1>{title}</h1></div>
           <div id="jeopardy_round">{}</div></body></html>"#,
        tables.concat()
    )
}

/// Full game: two 30-clue rounds (one daily double in round 1, two in round 2) and a final.
pub fn full_game(title: &str) -> String {
    game_page_with(title, &[
        round_table(1, &[(3, 2)]),
        round_table(2, &[(1, 0), (4, 5)]),
        final_table("WORLD CAPITALS", "It sits on the Tiber", "Rome"),
    ])
}

/// 30 standard clues (round 2 left unrevealed) plus a final: 31 records in all.
pub fn game_with_31_records(title: &str) -> String {
    game_page_with(title, &[
        round_table(1, &[]),
        blank_round_table(2),
        final_table("FINAL", "answer", "question"),
    ])
}
