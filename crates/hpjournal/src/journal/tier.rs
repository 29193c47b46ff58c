use std::collections::BTreeMap;
use std::sync::Arc;

use super::record::ArtworkRecord;
use super::report::{RecordView, SubtotalEntry, TierView};

/// One ranked section of the journal: a capacity-bounded bucket of records.
///
/// Capacity is a soft cap checked *after* each addition: the record that
/// pushes the running total to or past capacity still lands in full, and that
/// same addition closes the tier. A tier can therefore exceed its capacity by
/// at most one record's score (or by its carry-in seed), never more. The raw
/// running total is stored; the capped report-facing total and the overflow
/// are derived at read time.
#[derive(Debug, Clone, PartialEq)]
pub struct Tier {
    label: String,
    capacity: f64,
    carried_in: f64,
    carry_in_seeded: bool,
    records: Vec<Arc<ArtworkRecord>>,
    running_total: f64,
    subtotals: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TierError {
    #[error("tier capacity must be a finite, positive number (got {value})")]
    InvalidCapacity { value: f64 },
    #[error("carry-in must be a finite, non-negative amount (got {value})")]
    InvalidCarryIn { value: f64 },
    #[error("carry-in can only be seeded before any record is added")]
    CarryInAfterRecords,
    #[error("carry-in was already seeded for this tier")]
    CarryInAlreadySet,
}

impl Tier {
    pub fn new(label: impl Into<String>, capacity: f64) -> Result<Self, TierError> {
        if !capacity.is_finite() || capacity <= 0.0 {
            return Err(TierError::InvalidCapacity { value: capacity });
        }

        Ok(Self {
            label: label.into(),
            capacity,
            carried_in: 0.0,
            carry_in_seeded: false,
            records: Vec::new(),
            running_total: 0.0,
            subtotals: BTreeMap::new(),
        })
    }

    /// Construct and seed in one step; the allocator's path.
    pub fn with_carry_in(
        label: impl Into<String>,
        capacity: f64,
        carry: f64,
    ) -> Result<Self, TierError> {
        let mut tier = Self::new(label, capacity)?;
        tier.seed_carry_in(carry)?;
        Ok(tier)
    }

    /// Seed the overflow carried from the previous tier.
    ///
    /// Allowed at most once and only before any record is added. A seed that
    /// alone meets or exceeds capacity closes the tier on the spot, so it
    /// will accept zero records and report its own overflow.
    pub fn seed_carry_in(&mut self, amount: f64) -> Result<(), TierError> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(TierError::InvalidCarryIn { value: amount });
        }
        if !self.records.is_empty() {
            return Err(TierError::CarryInAfterRecords);
        }
        if self.carry_in_seeded {
            return Err(TierError::CarryInAlreadySet);
        }

        self.carried_in = amount;
        self.carry_in_seeded = true;
        self.running_total += amount;
        Ok(())
    }

    /// Add a record unless the tier already closed; reports whether it landed.
    pub fn try_add(&mut self, record: &Arc<ArtworkRecord>) -> bool {
        if self.is_closed() {
            return false;
        }

        self.running_total += record.score();
        if !record.subcategory().is_empty() {
            *self
                .subtotals
                .entry(record.subcategory().to_string())
                .or_insert(0.0) += record.score();
        }
        self.records.push(Arc::clone(record));
        true
    }

    /// Stable, case-insensitive ascending sort by subcategory.
    ///
    /// The empty subcategory sorts as the empty string, i.e. first; records
    /// tying on the lowercased key keep their allocation order.
    pub fn sort_by_subcategory(&mut self) {
        self.records
            .sort_by_key(|record| record.subcategory_sort_key());
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    pub fn carried_in(&self) -> f64 {
        self.carried_in
    }

    /// Raw accumulated total: carry-in plus every added record's score.
    pub fn running_total(&self) -> f64 {
        self.running_total
    }

    /// Report-facing total, capped at capacity; the excess is `overflow`.
    pub fn reported_total(&self) -> f64 {
        self.running_total.min(self.capacity)
    }

    pub fn overflow(&self) -> f64 {
        (self.running_total - self.capacity).max(0.0)
    }

    /// Closed once the running total reaches capacity, overflow or not.
    pub fn is_closed(&self) -> bool {
        self.running_total >= self.capacity
    }

    pub fn records(&self) -> &[Arc<ArtworkRecord>] {
        &self.records
    }

    /// Per-subcategory score subtotals, keyed by the exact subcategory
    /// string; records without a subcategory are not represented.
    pub fn subtotals(&self) -> &BTreeMap<String, f64> {
        &self.subtotals
    }

    pub fn to_view(&self) -> TierView {
        TierView {
            label: self.label.clone(),
            reported_total: self.reported_total(),
            capacity: self.capacity,
            carried_in: self.carried_in,
            overflow: self.overflow(),
            records: self.records.iter().map(|r| RecordView::from_record(r)).collect(),
            subtotals: self
                .subtotals
                .iter()
                .map(|(subcategory, total)| SubtotalEntry {
                    subcategory: subcategory.clone(),
                    total: *total,
                })
                .collect(),
        }
    }
}
