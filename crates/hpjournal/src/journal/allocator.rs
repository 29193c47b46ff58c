use std::sync::Arc;

use super::record::ArtworkRecord;
use super::schedule::CapacitySchedule;
use super::tier::{Tier, TierError};

/// Partition an ordered record list into successive capacity-capped tiers.
///
/// Walks the schedule's named tiers in order (skipping the first when
/// `include_initial` is false), filling each from the cursor until the tier
/// closes, and seeds every tier with the overflow of the tier produced just
/// before it. When the named schedule runs out, "Extra Slot k" tiers of the
/// schedule's extra capacity are synthesized for whatever records remain.
///
/// Production stops as soon as the cursor is exhausted: a trailing overflow
/// with no records left behind it yields no further tier and stays
/// informational on the tier that produced it. Zero records yield zero
/// tiers regardless of flags. Each produced tier is subcategory-sorted
/// before the list is returned.
pub fn allocate(
    records: &[Arc<ArtworkRecord>],
    include_initial: bool,
    schedule: &CapacitySchedule,
) -> Result<Vec<Tier>, TierError> {
    if records.is_empty() {
        return Ok(Vec::new());
    }

    let mut tiers: Vec<Tier> = Vec::new();
    let mut cursor = 0usize;
    let mut carry = 0.0f64;

    let skip = usize::from(!include_initial);
    for spec in schedule.named().iter().skip(skip) {
        if cursor >= records.len() {
            break;
        }
        let tier = fill_tier(
            Tier::with_carry_in(spec.label.clone(), spec.capacity, carry)?,
            records,
            &mut cursor,
        );
        carry = tier.overflow();
        tiers.push(tier);
    }

    let mut slot = 1usize;
    while cursor < records.len() {
        let tier = fill_tier(
            Tier::with_carry_in(schedule.extra_label(slot), schedule.extra_capacity(), carry)?,
            records,
            &mut cursor,
        );
        carry = tier.overflow();
        tiers.push(tier);
        slot += 1;
    }

    for tier in &mut tiers {
        tier.sort_by_subcategory();
    }

    Ok(tiers)
}

/// Feed records into the tier until it closes or the cursor runs out. A
/// refused add leaves the cursor in place for the next tier.
fn fill_tier(mut tier: Tier, records: &[Arc<ArtworkRecord>], cursor: &mut usize) -> Tier {
    while *cursor < records.len() && tier.try_add(&records[*cursor]) {
        *cursor += 1;
    }
    tier
}
