// src/collector/selectors.rs
//! Selector heuristics for finding job cards and their fields in portal HTML

use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;
use tracing::debug;

use super::cleaning::clean_record;
use crate::types::{JobField, RawJobRecord};

/// Ways of finding the job elements on a page, tried in order
#[derive(Debug)]
pub enum LocateStrategy {
    Css(&'static str, Selector),
    /// Elements matched by `tags` whose `class` attribute contains any keyword
    ClassContains {
        tags: Selector,
        keywords: &'static [&'static str],
    },
}

fn parse_selector(selector_str: &str) -> Selector {
    Selector::parse(selector_str)
        .unwrap_or_else(|_| panic!("Failed to parse selector {selector_str} - this is a bug"))
}

fn parse_selectors(selector_strs: &[&str]) -> Vec<Selector> {
    selector_strs.iter().map(|s| parse_selector(s)).collect()
}

pub static LOCATE_STRATEGIES: LazyLock<Vec<LocateStrategy>> = LazyLock::new(|| {
    let mut strategies: Vec<LocateStrategy> = [
        ".job-listing",
        ".job-card",
        ".job-item",
        ".search-result",
        "[data-job-id]",
    ]
    .into_iter()
    .map(|pattern| LocateStrategy::Css(pattern, parse_selector(pattern)))
    .collect();
    strategies.push(LocateStrategy::ClassContains {
        tags: parse_selector("div, article"),
        keywords: &["job", "card", "listing"],
    });
    strategies
});

static TITLE_SELECTORS: LazyLock<Vec<Selector>> =
    LazyLock::new(|| parse_selectors(&["h2", "h3", ".title", ".job-title", "[data-title]"]));
static COMPANY_SELECTORS: LazyLock<Vec<Selector>> = LazyLock::new(|| {
    parse_selectors(&[".company", ".company-name", ".employer", "[data-company]"])
});
static LOCATION_SELECTORS: LazyLock<Vec<Selector>> = LazyLock::new(|| {
    parse_selectors(&[".location", ".job-location", ".city", "[data-location]"])
});
static SALARY_SELECTORS: LazyLock<Vec<Selector>> =
    LazyLock::new(|| parse_selectors(&[".salary", ".pay", ".compensation", "[data-salary]"]));
static SKILLS_SELECTORS: LazyLock<Vec<Selector>> = LazyLock::new(|| {
    parse_selectors(&[".skills", ".requirements", ".tags", ".job-description"])
});

impl LocateStrategy {
    pub fn locate<'a>(&self, document: &'a Html) -> Vec<ElementRef<'a>> {
        match self {
            LocateStrategy::Css(_, selector) => document.select(selector).collect(),
            LocateStrategy::ClassContains { tags, keywords } => document
                .select(tags)
                .filter(|element| {
                    element
                        .value()
                        .attr("class")
                        .is_some_and(|class| keywords.iter().any(|k| class.contains(k)))
                })
                .collect(),
        }
    }

    fn describe(&self) -> String {
        match self {
            LocateStrategy::Css(pattern, _) => format!("selector '{}'", pattern),
            LocateStrategy::ClassContains { keywords, .. } => {
                format!("class containing {:?}", keywords)
            }
        }
    }
}

pub fn field_selectors(field: JobField) -> &'static [Selector] {
    match field {
        JobField::Title => &TITLE_SELECTORS,
        JobField::Company => &COMPANY_SELECTORS,
        JobField::Location => &LOCATION_SELECTORS,
        JobField::Salary => &SALARY_SELECTORS,
        JobField::Skills => &SKILLS_SELECTORS,
    }
}

/// Elements matched by the first strategy that finds anything
pub fn locate_job_elements(document: &Html) -> Vec<ElementRef<'_>> {
    for strategy in LOCATE_STRATEGIES.iter() {
        let elements = strategy.locate(document);
        if !elements.is_empty() {
            debug!("{} matched {} elements", strategy.describe(), elements.len());
            return elements;
        }
    }
    Vec::new()
}

/// Text of the first descendant matched by any selector, or empty
pub fn extract_field(element: ElementRef<'_>, selectors: &[Selector]) -> String {
    selectors
        .iter()
        .find_map(|selector| element.select(selector).next())
        .map(element_text)
        .unwrap_or_default()
}

/// Trimmed text nodes concatenated without a separator
fn element_text(element: ElementRef<'_>) -> String {
    element.text().map(str::trim).collect()
}

/// Build a cleaned record from one job element. Listings without a title are dropped.
pub fn extract_job(element: ElementRef<'_>) -> Option<RawJobRecord> {
    let mut record = RawJobRecord::default();
    for field in JobField::ALL {
        let text = extract_field(element, field_selectors(field));
        if text.is_empty() {
            debug!("No {} found in job element", field.name());
        }
        record.set(field, text);
    }

    let record = clean_record(record);
    if record.title.is_empty() {
        return None;
    }
    Some(record)
}

pub fn extract_job_listings(document: &Html) -> Vec<RawJobRecord> {
    locate_job_elements(document)
        .into_iter()
        .filter_map(extract_job)
        .collect()
}

pub fn parse_listings_page(html: &str) -> Vec<RawJobRecord> {
    let document = Html::parse_document(html);
    extract_job_listings(&document)
}
