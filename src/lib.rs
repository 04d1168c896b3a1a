// src/lib.rs
pub mod analysis;
pub mod cli;
pub mod collector;
pub mod config;
pub mod demo;
pub mod report;
pub mod types;
pub mod utils;

pub use analysis::JobAnalyzer;
pub use collector::{JobCollector, PageFetcher};
pub use config::{ReportConfig, ScraperConfig};
pub use types::{NormalizedJobRecord, RawJobRecord, SummaryStatistics};

/// Log through `tracing` at the given level: `app_log!(info, "...", args)`
#[macro_export]
macro_rules! app_log {
    ($level:ident, $($arg:tt)+) => {
        ::tracing::$level!($($arg)+)
    };
}
