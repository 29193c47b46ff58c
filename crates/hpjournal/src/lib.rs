//! Turns a tracker CSV export of scored artwork into tiered HP journal
//! reports: records are credited to named collections, partitioned into
//! capacity-capped tiers with overflow carried forward, and rendered as the
//! journal markup the art site expects.

pub mod config;
pub mod error;
pub mod ingest;
pub mod journal;
pub mod render;
pub mod telemetry;
