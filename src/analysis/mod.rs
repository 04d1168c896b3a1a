// src/analysis/mod.rs
//! Batch analysis over scraped job records

pub mod charts;
pub mod counter;
pub mod normalize;

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::path::Path;
use tracing::{info, warn};

use crate::types::{NormalizedCsvRow, NormalizedJobRecord, RawJobRecord, SummaryStatistics};
use crate::utils::ensure_parent_dir;
use counter::FrequencyCounter;

pub use normalize::SKILL_KEYWORDS;

pub struct JobAnalyzer {
    records: Vec<NormalizedJobRecord>,
}

impl JobAnalyzer {
    pub fn new(jobs: Vec<RawJobRecord>) -> Self {
        if jobs.is_empty() {
            warn!("No data to analyze");
        }

        let records = jobs.into_iter().map(normalize::normalize_record).collect();
        Self { records }
    }

    pub fn records(&self) -> &[NormalizedJobRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn generate_summary(&self) -> SummaryStatistics {
        let companies: HashSet<&str> = self.records.iter().map(|r| r.company.as_str()).collect();
        let locations: HashSet<&str> = self.records.iter().map(|r| r.location.as_str()).collect();

        SummaryStatistics {
            total_jobs: self.records.len(),
            unique_companies: companies.len(),
            unique_locations: locations.len(),
            jobs_with_salary: self.records.iter().filter(|r| !r.salary.is_empty()).count(),
        }
    }

    pub fn get_top_locations(&self, top_n: usize) -> Vec<(String, usize)> {
        self.records
            .iter()
            .map(|r| r.city.as_str())
            .collect::<FrequencyCounter>()
            .most_common(top_n)
    }

    pub fn get_top_skills(&self, top_n: usize) -> Vec<(String, usize)> {
        self.records
            .iter()
            .flat_map(|r| r.extracted_skills.iter())
            .collect::<FrequencyCounter>()
            .most_common(top_n)
    }

    pub fn get_top_companies(&self, top_n: usize) -> Vec<(String, usize)> {
        self.records
            .iter()
            .map(|r| r.company.as_str())
            .collect::<FrequencyCounter>()
            .most_common(top_n)
    }

    /// Render the 2x2 chart panel to an SVG file
    pub fn create_visualizations(&self, path: &Path) -> Result<()> {
        ensure_parent_dir(path)?;
        charts::render_report(self, path)?;
        info!("Chart report written to {}", path.display());
        Ok(())
    }

    /// Write the normalized table, derived columns included, as CSV
    pub fn save_data(&self, path: &Path) -> Result<()> {
        ensure_parent_dir(path)?;

        let mut writer = csv::Writer::from_path(path)
            .with_context(|| format!("Failed to create CSV file: {}", path.display()))?;

        if self.records.is_empty() {
            writer
                .write_record([
                    "title",
                    "company",
                    "location",
                    "salary",
                    "skills",
                    "city",
                    "extracted_skills",
                ])
                .context("Failed to write CSV header")?;
        }

        for record in &self.records {
            writer
                .serialize(NormalizedCsvRow::from(record))
                .context("Failed to write CSV row")?;
        }
        writer.flush().context("Failed to flush CSV file")?;

        info!("Data saved to {}", path.display());
        Ok(())
    }
}

/// Load raw records from a CSV with any subset of the raw columns
pub fn load_records(path: &Path) -> Result<Vec<RawJobRecord>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open CSV file: {}", path.display()))?;

    let mut records = Vec::new();
    for (line, result) in reader.deserialize::<RawJobRecord>().enumerate() {
        match result {
            Ok(record) => records.push(record),
            Err(e) => warn!("Skipping unreadable CSV row {}: {}", line + 1, e),
        }
    }

    info!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}
