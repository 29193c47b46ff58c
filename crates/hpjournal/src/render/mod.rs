use chrono::NaiveDate;

use crate::journal::report::{CollectionReport, RecordView, TierView};

/// The two presentation switches exposed to the journal author.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Wrap each record in `<blockquote>` instead of a centered `<div>`.
    pub blockquotes: bool,
    /// Group records under per-subcategory `<h3>` headings with run subtotals.
    pub subcategory_headings: bool,
}

/// Render a full collection report as journal markup: the grand-total
/// banner, then every tier in order, then an optional provenance comment.
/// The output is one unbroken string, as the journal site expects.
pub fn render_journal(
    report: &CollectionReport,
    options: RenderOptions,
    generated_on: Option<NaiveDate>,
) -> String {
    // The stray space in `align ="center"` is part of the established
    // journal format; keep it byte for byte.
    let mut out = format!(
        "<div align =\"center\"><h3>Grand Total = {} HP</h3></div><br/><br/>",
        report.grand_total
    );

    for tier in &report.tiers {
        out.push_str(&render_tier(tier, options));
    }

    if let Some(date) = generated_on {
        out.push_str(&format!("<!-- Generated by hpjournal on {} -->", date));
    }

    out
}

fn render_tier(tier: &TierView, options: RenderOptions) -> String {
    let mut out = format!(
        "<h2>{} (Total = {} HP)</h2><br/>",
        tier.label, tier.reported_total
    );

    if tier.carried_in > 0.0 {
        out.push_str(&format!(
            "Carried over from previous section: {} HP<br/>",
            tier.carried_in
        ));
    }

    if !options.subcategory_headings {
        for record in &tier.records {
            out.push_str(&render_record(record, options.blockquotes));
        }
        return out;
    }

    // Records arrive subcategory-sorted; each run of an identical
    // subcategory gets one heading with the run's score sum.
    let mut idx = 0;
    while idx < tier.records.len() {
        let subcategory = tier.records[idx].subcategory.as_str();
        let run_end = tier.records[idx..]
            .iter()
            .position(|r| r.subcategory != subcategory)
            .map_or(tier.records.len(), |offset| idx + offset);
        let run = &tier.records[idx..run_end];
        let total: f64 = run.iter().map(|r| r.score).sum();

        out.push_str(&format!("<h3>{} | Total = {} HP</h3>", subcategory, total));
        for record in run {
            out.push_str(&render_record(record, options.blockquotes));
        }
        idx = run_end;
    }

    out
}

fn render_record(record: &RecordView, blockquotes: bool) -> String {
    if blockquotes {
        format!(
            "<blockquote><da:thumb id=\"{}\"><b><br/>Total = {} HP</b><br/>{}</blockquote>",
            record.locator, record.score, record.rationale
        )
    } else {
        format!(
            "<div align=\"center\"><da:thumb id=\"{}\"><b><br/>Total = {} HP</b><br/>{}</div><br/><br/>",
            record.locator, record.score, record.rationale
        )
    }
}
