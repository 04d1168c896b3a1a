// src/collector/cleaning.rs
//! Text cleanup applied to freshly extracted job fields

use regex::Regex;
use std::sync::LazyLock;

use crate::types::RawJobRecord;

static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Failed to compile whitespace regex"));
static EDGE_PUNCT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\W+|\W+$").expect("Failed to compile edge punctuation regex"));
static LOCATION_JUNK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s,.-]").expect("Failed to compile location regex"));
// Ranges such as "6-8 LPA" keep only the leading number.
static SALARY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\d,]+(?:\.\d+)?(?:\s*(?:lakh|LPA|per annum|PA))?")
        .expect("Failed to compile salary regex")
});

pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RE.replace_all(text, " ").trim().to_string()
}

pub fn clean_title(title: &str) -> String {
    collapse_whitespace(title)
}

pub fn clean_company(company: &str) -> String {
    let collapsed = collapse_whitespace(company);
    EDGE_PUNCT_RE.replace_all(&collapsed, "").into_owned()
}

pub fn clean_location(location: &str) -> String {
    let collapsed = collapse_whitespace(location);
    LOCATION_JUNK_RE.replace_all(&collapsed, "").into_owned()
}

pub fn clean_salary(salary: &str) -> String {
    match SALARY_RE.find(salary) {
        Some(m) => m.as_str().to_string(),
        None => salary.to_string(),
    }
}

/// Clean every non-empty field of a scraped record. Skills are left untouched.
pub fn clean_record(mut record: RawJobRecord) -> RawJobRecord {
    if !record.title.is_empty() {
        record.title = clean_title(&record.title);
    }
    if !record.company.is_empty() {
        record.company = clean_company(&record.company);
    }
    if !record.location.is_empty() {
        record.location = clean_location(&record.location);
    }
    if !record.salary.is_empty() {
        record.salary = clean_salary(&record.salary);
    }
    record
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  Data \n\t Analyst  "), "Data Analyst");
        assert_eq!(collapse_whitespace(""), "");
    }

    #[test]
    fn test_clean_company_strips_edge_punctuation() {
        assert_eq!(clean_company("  -- TechCorp   India!! "), "TechCorp India");
        assert_eq!(clean_company("(Acme)"), "Acme");
        assert_eq!(clean_company("***"), "");
    }

    #[test]
    fn test_clean_location_drops_symbols() {
        assert_eq!(clean_location("Bangalore,  Karnataka!"), "Bangalore, Karnataka");
        assert_eq!(clean_location("St. Louis - MO (Remote)"), "St. Louis - MO Remote");
    }

    #[test]
    fn test_clean_salary_keeps_first_numeric_token() {
        assert_eq!(clean_salary("6-8 LPA"), "6");
        assert_eq!(clean_salary("₹ 4.5 LPA"), "4.5 LPA");
        assert_eq!(clean_salary("Rs 50,000 per annum"), "50,000 per annum");
        assert_eq!(clean_salary("12 lakh"), "12 lakh");
    }

    #[test]
    fn test_clean_salary_without_match_is_unchanged() {
        assert_eq!(clean_salary("Not disclosed"), "Not disclosed");
    }

    #[test]
    fn test_clean_record_leaves_skills_and_empty_fields() {
        let record = RawJobRecord::new(" Data   Analyst ", "", " Pune ", "", "  SQL,\n Excel ");
        let cleaned = clean_record(record);
        assert_eq!(cleaned.title, "Data Analyst");
        assert_eq!(cleaned.company, "");
        assert_eq!(cleaned.location, "Pune");
        assert_eq!(cleaned.salary, "");
        assert_eq!(cleaned.skills, "  SQL,\n Excel ");
    }
}
