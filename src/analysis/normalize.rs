// src/analysis/normalize.rs
//! Per-record normalization: location, city and skill keywords

use regex::Regex;
use std::sync::LazyLock;

use crate::types::{NormalizedJobRecord, RawJobRecord};
use crate::utils::title_case;

pub const UNKNOWN: &str = "Unknown";

/// Skill vocabulary, matched as lower-case substrings in this order
pub static SKILL_KEYWORDS: &[&str] = &[
    "python",
    "r",
    "sql",
    "excel",
    "tableau",
    "power bi",
    "powerbi",
    "pandas",
    "numpy",
    "matplotlib",
    "seaborn",
    "plotly",
    "machine learning",
    "data visualization",
    "statistics",
    "business intelligence",
    "etl",
    "data mining",
    "analytics",
    "jupyter",
    "git",
    "hadoop",
    "spark",
    "aws",
    "azure",
    "mysql",
    "postgresql",
    "mongodb",
    "looker",
    "qlik",
];

static LEADING_WORDS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+(?:\s+\w+)?").expect("Failed to compile city regex"));

pub fn normalize_location(location: &str) -> String {
    if location.is_empty() {
        UNKNOWN.to_string()
    } else {
        title_case(location)
    }
}

pub fn normalize_company(company: &str) -> String {
    if company.is_empty() {
        UNKNOWN.to_string()
    } else {
        company.to_string()
    }
}

/// City part of a location: text before the first comma, else the first one or two words
pub fn extract_city(location: &str) -> String {
    let location = location.trim();
    if location.is_empty() || location == UNKNOWN {
        return UNKNOWN.to_string();
    }

    if let Some((head, _)) = location.split_once(',') {
        let head = head.trim();
        if !head.is_empty() {
            return head.to_string();
        }
    }

    match LEADING_WORDS_RE.find(location) {
        Some(m) => m.as_str().trim().to_string(),
        None => location.to_string(),
    }
}

pub fn extract_skills(skills_text: &str) -> Vec<String> {
    if skills_text.is_empty() {
        return Vec::new();
    }

    let lowered = skills_text.to_lowercase();
    SKILL_KEYWORDS
        .iter()
        .filter(|keyword| lowered.contains(*keyword))
        .map(|keyword| title_case(keyword))
        .collect()
}

pub fn normalize_record(raw: RawJobRecord) -> NormalizedJobRecord {
    let location = normalize_location(&raw.location);
    let city = extract_city(&location);
    let extracted_skills = extract_skills(&raw.skills);

    NormalizedJobRecord {
        title: raw.title,
        company: normalize_company(&raw.company),
        location,
        salary: raw.salary,
        skills: raw.skills,
        city,
        extracted_skills,
    }
}
