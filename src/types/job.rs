// src/types/job.rs
//! Job record structures shared by the collector and the analyzer

use serde::{Deserialize, Serialize};

// ===== Raw Records =====

/// One listing as scraped. Missing fields are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawJobRecord {
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: String,
    pub skills: String,
}

impl RawJobRecord {
    pub fn new(title: &str, company: &str, location: &str, salary: &str, skills: &str) -> Self {
        Self {
            title: title.to_string(),
            company: company.to_string(),
            location: location.to_string(),
            salary: salary.to_string(),
            skills: skills.to_string(),
        }
    }

    pub fn set(&mut self, field: JobField, value: String) {
        match field {
            JobField::Title => self.title = value,
            JobField::Company => self.company = value,
            JobField::Location => self.location = value,
            JobField::Salary => self.salary = value,
            JobField::Skills => self.skills = value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobField {
    Title,
    Company,
    Location,
    Salary,
    Skills,
}

impl JobField {
    pub const ALL: [JobField; 5] = [
        JobField::Title,
        JobField::Company,
        JobField::Location,
        JobField::Salary,
        JobField::Skills,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            JobField::Title => "title",
            JobField::Company => "company",
            JobField::Location => "location",
            JobField::Salary => "salary",
            JobField::Skills => "skills",
        }
    }
}

// ===== Normalized Records =====

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedJobRecord {
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: String,
    pub skills: String,
    pub city: String,
    pub extracted_skills: Vec<String>,
}

/// Flat CSV shape of a normalized record
#[derive(Debug, Serialize)]
pub(crate) struct NormalizedCsvRow<'a> {
    pub title: &'a str,
    pub company: &'a str,
    pub location: &'a str,
    pub salary: &'a str,
    pub skills: &'a str,
    pub city: &'a str,
    pub extracted_skills: String,
}

impl<'a> From<&'a NormalizedJobRecord> for NormalizedCsvRow<'a> {
    fn from(record: &'a NormalizedJobRecord) -> Self {
        Self {
            title: &record.title,
            company: &record.company,
            location: &record.location,
            salary: &record.salary,
            skills: &record.skills,
            city: &record.city,
            extracted_skills: record.extracted_skills.join("; "),
        }
    }
}

// ===== Aggregates =====

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SummaryStatistics {
    pub total_jobs: usize,
    pub unique_companies: usize,
    pub unique_locations: usize,
    pub jobs_with_salary: usize,
}
