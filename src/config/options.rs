// src/config/options.rs
use std::ffi::OsString;
use std::fmt;
use std::path::{ Path, PathBuf };
use std::str::FromStr;
use std::time::Duration;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

/* ---------------- Scrape ---------------- */

/// Inclusive, ascending range of season ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeasonRange {
    start: u32,
    end: u32,
}

impl SeasonRange {
    pub fn new(start: u32, end: u32) -> Result<Self, String> {
        if start > end {
            return Err(format!("Invalid season range: {start}-{end}"));
        }
        Ok(Self { start, end })
    }

    pub fn iter(&self) -> std::ops::RangeInclusive<u32> {
        self.start..=self.end
    }

    pub fn len(&self) -> usize {
        (self.end - self.start) as usize + 1
    }
}

impl Default for SeasonRange {
    fn default() -> Self {
        Self { start: SEASON_START, end: SEASON_END }
    }
}

/// Accepts `"35"` or `"30-40"`.
impl FromStr for SeasonRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let parse = |part: &str| -> Result<u32, String> {
            part.trim().parse().map_err(|_| format!("Invalid season: {:?}", part.trim()))
        };
        match s.find('-') {
            Some(dash) => SeasonRange::new(parse(&s[..dash])?, parse(&s[dash + 1..])?),
            None => {
                let v = parse(s)?;
                SeasonRange::new(v, v)
            }
        }
    }
}

impl fmt::Display for SeasonRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end { write!(f, "{}", self.start) }
        else { write!(f, "{}-{}", self.start, self.end) }
    }
}

/// Cap on the total number of records collected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Quota {
    #[default]
    Unlimited,
    AtMost(usize),
}

impl Quota {
    /// Zero or negative means unlimited.
    pub fn from_signed(n: i64) -> Self {
        if n <= 0 { Quota::Unlimited } else { Quota::AtMost(usize::try_from(n).unwrap_or(usize::MAX)) }
    }

    pub fn is_met(&self, count: usize) -> bool {
        match self {
            Quota::Unlimited => false,
            Quota::AtMost(n) => count >= *n,
        }
    }
}

impl fmt::Display for Quota {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quota::Unlimited => f.write_str("unlimited"),
            Quota::AtMost(n) => write!(f, "{n}"),
        }
    }
}

/// What to do when a game page lacks an element we cannot do without
/// (title/date, correct response, final category) or has an unreadable value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MissingElementPolicy {
    /// Log it and drop the game.
    #[default]
    Skip,
    /// Stop the run with the error.
    Abort,
}

impl FromStr for MissingElementPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "skip" => Ok(MissingElementPolicy::Skip),
            "abort" => Ok(MissingElementPolicy::Abort),
            other => Err(format!("Unknown policy: {other}")),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub base_url: String,
    pub seasons: SeasonRange,
    pub quota: Quota,
    pub on_missing: MissingElementPolicy,
    /// `None` blocks until the server answers.
    pub timeout: Option<Duration>,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            base_url: s!(BASE_URL),
            seasons: SeasonRange::default(),
            quota: Quota::AtMost(DEFAULT_QUOTA),
            on_missing: MissingElementPolicy::default(),
            timeout: None,
        }
    }
}

/* ---------------- Export ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ExportFormat {
    Csv,
    #[default]
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "tsv" => Ok(ExportFormat::Tsv),
            other => Err(format!("Unknown format: {other}")),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    out_path: OutputPath,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::default(),
            out_path: OutputPath::default(),
            include_headers: true,
        }
    }
}

impl ExportOptions {
    /// Final file path. An extension typed by the user is kept; otherwise the format decides.
    pub fn out_path(&self) -> PathBuf {
        let mut name = self.out_path.file_stem.clone();
        name.push(".");
        match &self.out_path.ext {
            Some(ext) => name.push(ext),
            None => name.push(self.format.ext()),
        }
        self.out_path.dir.join(name)
    }

    /// Split user text into dir + stem (+ explicit extension).
    /// A trailing separator or an existing directory means "default file name in there".
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        if s.is_empty() {
            self.out_path = OutputPath::default();
            return;
        }
        let p = PathBuf::from(normalize_separators(s));
        if looks_like_dir_hint(&p) || p.is_dir() {
            self.out_path = OutputPath { dir: p, ..OutputPath::default() };
            return;
        }
        self.out_path.dir = p.parent().map(Path::to_path_buf).unwrap_or_default();
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_os_string();
        }
        self.out_path.ext = p.extension().map(|e| e.to_os_string());
    }

    pub fn delim(&self) -> char {
        self.format.delim()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_stem: OsString,
    ext: Option<OsString>,
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::new(),
            file_stem: OsString::from(DEFAULT_OUT_FILE),
            ext: None,
        }
    }
}

fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c == '/' || c == '\\' { sep } else { c }).collect()
}

fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}
