mod allocator;
mod collection;
mod record;
mod registry;
mod schedule;
mod tier;

pub mod report;

pub use allocator::allocate;
pub use collection::Collection;
pub use record::{ArtworkRecord, RecordError};
pub use registry::Registry;
pub use schedule::{CapacitySchedule, ScheduleError, TierSpec};
pub use tier::{Tier, TierError};
