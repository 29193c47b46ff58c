use std::sync::Arc;

use super::allocator::allocate;
use super::record::ArtworkRecord;
use super::report::CollectionReport;
use super::schedule::CapacitySchedule;
use super::tier::{Tier, TierError};

/// A named body of work: every scored record credited to one collection
/// name, held in tracker order, plus the tier layout last built from them.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection {
    name: String,
    records: Vec<Arc<ArtworkRecord>>,
    grand_total: f64,
    tiers: Vec<Tier>,
}

impl Collection {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            records: Vec::new(),
            grand_total: 0.0,
            tiers: Vec::new(),
        }
    }

    /// Append a record in arrival order and fold its score into the grand
    /// total. The tier layout is untouched; call `rebuild_tiers` once the
    /// collection is fully loaded.
    pub fn add_record(&mut self, record: Arc<ArtworkRecord>) {
        self.grand_total += record.score();
        self.records.push(record);
    }

    /// Re-partition every record into tiers, replacing any previous layout
    /// wholesale.
    pub fn rebuild_tiers(
        &mut self,
        include_initial: bool,
        schedule: &CapacitySchedule,
    ) -> Result<(), TierError> {
        self.tiers = allocate(&self.records, include_initial, schedule)?;
        Ok(())
    }

    pub fn report(&self) -> CollectionReport {
        CollectionReport {
            name: self.name.clone(),
            grand_total: self.grand_total,
            tiers: self.tiers.iter().map(Tier::to_view).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn records(&self) -> &[Arc<ArtworkRecord>] {
        &self.records
    }

    pub fn grand_total(&self) -> f64 {
        self.grand_total
    }

    pub fn tiers(&self) -> &[Tier] {
        &self.tiers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(score: f64) -> Arc<ArtworkRecord> {
        ArtworkRecord::shared("code", "desc", score, "").expect("valid record")
    }

    #[test]
    fn grand_total_tracks_every_added_record() {
        let mut collection = Collection::new("Muna");
        collection.add_record(record(40.0));
        collection.add_record(record(12.5));
        collection.add_record(record(7.5));

        assert_eq!(collection.grand_total(), 60.0);
        assert_eq!(collection.records().len(), 3);
        assert_eq!(collection.records()[0].score(), 40.0);
        assert_eq!(collection.records()[2].score(), 7.5);
    }

    #[test]
    fn rebuild_partitions_and_report_reconciles_with_grand_total() {
        let schedule = CapacitySchedule::standard();
        let mut collection = Collection::new("Muna");
        for score in [40.0, 40.0, 40.0] {
            collection.add_record(record(score));
        }
        collection
            .rebuild_tiers(true, &schedule)
            .expect("rebuild succeeds");

        let report = collection.report();
        assert_eq!(report.name, "Muna");
        assert_eq!(report.grand_total, 120.0);
        assert_eq!(report.tiers.len(), 2);

        let reported: f64 = report.tiers.iter().map(|t| t.reported_total).sum();
        let trailing = report.tiers.last().map(|t| t.overflow).unwrap_or(0.0);
        assert_eq!(reported + trailing, collection.grand_total());
    }

    #[test]
    fn rebuild_replaces_the_previous_layout() {
        let schedule = CapacitySchedule::standard();
        let mut collection = Collection::new("Muna");
        for score in [40.0, 40.0, 40.0] {
            collection.add_record(record(score));
        }

        collection
            .rebuild_tiers(true, &schedule)
            .expect("rebuild succeeds");
        assert_eq!(collection.tiers().len(), 2);
        assert_eq!(collection.tiers()[0].label(), "Initial");

        collection
            .rebuild_tiers(false, &schedule)
            .expect("rebuild succeeds");
        assert_eq!(collection.tiers().len(), 1);
        assert_eq!(collection.tiers()[0].label(), "Average");

        collection
            .rebuild_tiers(false, &schedule)
            .expect("rebuild succeeds");
        assert_eq!(collection.tiers().len(), 1);
    }

    #[test]
    fn empty_collection_reports_no_tiers() {
        let schedule = CapacitySchedule::standard();
        let mut collection = Collection::new("Muna");
        collection
            .rebuild_tiers(true, &schedule)
            .expect("rebuild succeeds");

        let report = collection.report();
        assert_eq!(report.grand_total, 0.0);
        assert!(report.tiers.is_empty());
    }
}
