// src/report.rs
//! Console output for analysis results

use crate::analysis::JobAnalyzer;
use crate::types::SummaryStatistics;

pub fn print_summary(summary: &SummaryStatistics) {
    println!("=== JOB SCRAPING SUMMARY ===");
    println!("Total jobs scraped: {}", summary.total_jobs);
    println!("Unique companies: {}", summary.unique_companies);
    println!("Unique locations: {}", summary.unique_locations);
    println!("Jobs with salary info: {}", summary.jobs_with_salary);
    println!();
}

pub fn print_top_locations(top_n: usize, locations: &[(String, usize)]) {
    println!("=== TOP {} JOB LOCATIONS ===", top_n);
    for (location, count) in locations {
        println!("{}: {} jobs", location, count);
    }
    println!();
}

pub fn print_top_skills(top_n: usize, skills: &[(String, usize)]) {
    println!("=== TOP {} IN-DEMAND SKILLS ===", top_n);
    for (skill, count) in skills {
        println!("{}: {} mentions", skill, count);
    }
    println!();
}

/// Print summary, top locations and top skills for an analyzer
pub fn print_analysis(analyzer: &JobAnalyzer, top_locations: usize, top_skills: usize) {
    print_summary(&analyzer.generate_summary());
    print_top_locations(top_locations, &analyzer.get_top_locations(top_locations));
    print_top_skills(top_skills, &analyzer.get_top_skills(top_skills));
}
