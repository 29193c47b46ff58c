mod views;

pub use views::{CollectionReport, RecordView, SubtotalEntry, TierView};
