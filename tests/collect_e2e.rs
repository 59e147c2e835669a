// tests/collect_e2e.rs
//
// Season listing → game parsing → quota → TSV file, against a fake site.
//
mod common;

use std::fs;

use jarchive_scrape::config::options::{
    ExportOptions, MissingElementPolicy, Quota, ScrapeOptions, SeasonRange,
};
use jarchive_scrape::{file, scrape, HEADERS};

use common::*;

fn scrape_opts(seasons: SeasonRange, quota: Quota) -> ScrapeOptions {
    ScrapeOptions {
        base_url: BASE.to_string(),
        seasons,
        quota,
        on_missing: MissingElementPolicy::Skip,
        timeout: None,
    }
}

#[test]
fn quota_of_one_fetches_only_the_first_game() {
    let site = FakeSite::default()
        .page(
            "showseason.php?season=30",
            season_page(&["/boxscore.php?game_id=1", "/boxscore.php?game_id=2"]),
        )
        .page("/boxscore.php?game_id=1", game_with_31_records("Show #6686 - Monday, September 16, 2013"))
        .page("/boxscore.php?game_id=2", full_game("Show #6687 - Tuesday, September 17, 2013"));

    let opts = scrape_opts(SeasonRange::new(30, 30).unwrap(), Quota::AtMost(1));
    let clues = scrape::collect(&site, &opts, None).unwrap();

    assert_eq!(clues.len(), 31);
    assert_eq!(
        site.hits(),
        vec![url("showseason.php?season=30"), url("boxscore.php?game_id=1")]
    );
    assert_eq!(clues.iter().filter(|c| c.round == 1).count(), 30);
    assert_eq!(clues.last().unwrap().round, 3);

    let tmp = tempfile::tempdir().unwrap();
    let mut export = ExportOptions::default();
    export.set_path(tmp.path().join("clues.tsv").to_str().unwrap());
    let path = file::write_export(&export, &clues).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 32);
    assert_eq!(lines[0], HEADERS.join("\t"));
    assert_eq!(
        lines[1],
        "1\t200\t0\tR1 CATEGORY 0\t(Alex: Each response is a color.)\tR1 clue 0,0\tR1 response 0,0\t2013-09-16\t"
    );
    assert_eq!(lines[31], "3\t0\t0\tFINAL\t\tanswer\tquestion\t2013-09-16\t");
}

#[test]
fn full_game_has_61_records_with_daily_doubles() {
    let site = FakeSite::default()
        .page("showseason.php?season=31", season_page(&["showgame.php?game_id=4500"]))
        .page("showgame.php?game_id=4500", full_game("Show #6900 - Friday, September 19, 2014"));

    let opts = scrape_opts(SeasonRange::new(31, 31).unwrap(), Quota::Unlimited);
    let clues = scrape::collect(&site, &opts, None).unwrap();
    assert_eq!(clues.len(), 61);

    let dds: Vec<_> = clues.iter().filter(|c| c.daily_double_value != 0).collect();
    assert_eq!(dds.len(), 3);
    assert!(dds.iter().all(|c| c.daily_double_value == c.clue_value));
    // row 3 of round 1 → "DD: $4,000"
    assert_eq!((dds[0].round, dds[0].clue_value, dds[0].category.as_str()), (1, 4000, "R1 CATEGORY 2"));

    for c in clues.iter().filter(|c| c.round < 3 && c.daily_double_value == 0) {
        assert!(c.clue_value > 0);
    }
    let last = clues.last().unwrap();
    assert_eq!((last.round, last.clue_value, last.daily_double_value), (3, 0, 0));
    assert_eq!(last.category, "WORLD CAPITALS");
    assert_eq!(last.question, "Rome");
    assert!(clues.iter().all(|c| c.air_date.to_string() == "2014-09-19" && c.notes.is_empty()));
}

#[test]
fn broken_seasons_and_games_do_not_stop_the_run() {
    let two_tables = format!("{0}{0}", season_page(&["x"]));
    let site = FakeSite::default()
        // season 1: 404; season 2: two tables; season 3: usable
        .page("showseason.php?season=2", two_tables)
        .page("showseason.php?season=3", season_page(&["bad_layout", "gone", "good"]))
        .page("bad_layout", game_page_with("Show #1 - Monday, September 9, 1996", &[round_table(1, &[])]))
        .page("good", full_game("Show #2 - Tuesday, September 10, 1996"));

    let opts = scrape_opts(SeasonRange::new(1, 3).unwrap(), Quota::Unlimited);
    let clues = scrape::collect(&site, &opts, None).unwrap();
    assert_eq!(clues.len(), 61);
    assert_eq!(site.hits().len(), 6);
}

#[test]
fn abort_policy_surfaces_missing_response() {
    let no_em = full_game("Show #2 - Tuesday, September 10, 1996")
        .replacen(r#"<em class="correct_response">"#, "<em>", 1);
    let site = FakeSite::default()
        .page("showseason.php?season=5", season_page(&["g"]))
        .page("g", no_em);

    let mut opts = scrape_opts(SeasonRange::new(5, 5).unwrap(), Quota::Unlimited);
    assert!(scrape::collect(&site, &opts, None).unwrap().is_empty());

    opts.on_missing = MissingElementPolicy::Abort;
    let err = scrape::collect(&site, &opts, None).unwrap_err();
    assert!(err.is_hard());
}
