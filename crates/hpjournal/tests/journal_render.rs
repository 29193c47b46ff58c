use std::io::Cursor;

use chrono::NaiveDate;
use hpjournal::ingest::TrackerCsvImporter;
use hpjournal::journal::CapacitySchedule;
use hpjournal::render::{render_journal, RenderOptions};

const EXPORT: &str = "\
Thumb,Description,HP,Activity,Names
1001:thumb,First hunt,40,Hunting,Muna
1002:thumb,Long patrol,40,Hunting,Muna
1003:thumb,River crossing,40,Swimming,Muna
";

fn muna_report(options_initial: bool) -> hpjournal::journal::report::CollectionReport {
    let mut registry =
        TrackerCsvImporter::from_reader(Cursor::new(EXPORT)).expect("import succeeds");
    let schedule = CapacitySchedule::standard();
    let muna = registry.find_by_name_mut("Muna").expect("Muna present");
    muna.rebuild_tiers(options_initial, &schedule)
        .expect("rebuild succeeds");
    muna.report()
}

#[test]
fn default_markup_matches_the_journal_format_end_to_end() {
    let report = muna_report(true);
    let html = render_journal(&report, RenderOptions::default(), None);

    assert!(html.starts_with(
        "<div align =\"center\"><h3>Grand Total = 120 HP</h3></div><br/><br/>"
    ));
    assert!(html.contains("<h2>Initial (Total = 75 HP)</h2><br/>"));
    assert!(html.contains("<h2>Average (Total = 45 HP)</h2><br/>"));
    assert!(html.contains("Carried over from previous section: 5 HP<br/>"));
    assert!(html.contains(
        "<div align=\"center\"><da:thumb id=\"1001\"><b><br/>Total = 40 HP</b><br/>First hunt</div><br/><br/>"
    ));

    let initial = html.find("<h2>Initial").expect("initial section");
    let average = html.find("<h2>Average").expect("average section");
    assert!(initial < average);
}

#[test]
fn blockquote_and_heading_options_change_the_body_markup() {
    let report = muna_report(true);
    let options = RenderOptions {
        blockquotes: true,
        subcategory_headings: true,
    };
    let html = render_journal(&report, options, None);

    assert!(html.contains("<h3>Hunting | Total = 80 HP</h3>"));
    assert!(html.contains("<h3>Swimming | Total = 40 HP</h3>"));
    assert!(html.contains(
        "<blockquote><da:thumb id=\"1002\"><b><br/>Total = 40 HP</b><br/>Long patrol</blockquote>"
    ));
    assert!(!html.contains("<div align=\"center\">"));
}

#[test]
fn skipping_the_initial_tier_changes_totals_but_not_the_banner_format() {
    let report = muna_report(false);
    let html = render_journal(&report, RenderOptions::default(), None);

    assert!(html.contains("Grand Total = 120 HP"));
    assert!(html.contains("<h2>Average (Total = 120 HP)</h2><br/>"));
    assert!(!html.contains("<h2>Initial"));
    assert!(!html.contains("Carried over"));
}

#[test]
fn generation_date_lands_in_a_trailing_comment() {
    let report = muna_report(true);
    let date = NaiveDate::from_ymd_opt(2026, 8, 25).expect("valid date");
    let html = render_journal(&report, RenderOptions::default(), Some(date));

    assert!(html.ends_with("<!-- Generated by hpjournal on 2026-08-25 -->"));
}
