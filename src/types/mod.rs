// src/types/mod.rs
pub mod job;

pub use job::{JobField, NormalizedJobRecord, RawJobRecord, SummaryStatistics};
pub(crate) use job::NormalizedCsvRow;
