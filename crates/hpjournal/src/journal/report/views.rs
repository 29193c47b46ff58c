use serde::Serialize;

use crate::journal::record::ArtworkRecord;

#[derive(Debug, Clone, Serialize)]
pub struct RecordView {
    pub locator: String,
    pub rationale: String,
    pub score: f64,
    pub subcategory: String,
}

impl RecordView {
    pub fn from_record(record: &ArtworkRecord) -> Self {
        Self {
            locator: record.locator().to_owned(),
            rationale: record.rationale().to_owned(),
            score: record.score(),
            subcategory: record.subcategory().to_owned(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SubtotalEntry {
    pub subcategory: String,
    pub total: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct TierView {
    pub label: String,
    pub reported_total: f64,
    pub capacity: f64,
    pub carried_in: f64,
    pub overflow: f64,
    pub records: Vec<RecordView>,
    pub subtotals: Vec<SubtotalEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CollectionReport {
    pub name: String,
    pub grand_total: f64,
    pub tiers: Vec<TierView>,
}
