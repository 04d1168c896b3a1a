// src/cli.rs
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

use crate::analysis::{load_records, JobAnalyzer};
use crate::app_log;
use crate::collector::JobCollector;
use crate::config::{ReportConfig, ScraperConfig, DEFAULT_CHART_PATH, DEFAULT_CSV_PATH};
use crate::demo::sample_jobs;
use crate::report::print_analysis;
use crate::utils::validate_file_extension;

const DEMO_CSV_PATH: &str = "demo_jobs_data.csv";

#[derive(Parser)]
#[command(name = "jobscope")]
#[command(about = "Scrape job listings and analyze the job market")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Also write JSON logs to this file (truncated on startup)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Scrape a job portal, then analyze the results
    Scrape {
        /// Portal base URL (defaults to $JOB_PORTAL_URL)
        #[arg(long)]
        base_url: Option<String>,
        #[arg(long, default_value = "data analyst")]
        query: String,
        #[arg(long, default_value_t = 5)]
        pages: usize,
        /// Fixed delay between pages, in seconds
        #[arg(long, default_value_t = 2.0)]
        delay: f64,
        /// Upper bound of the random extra delay, in seconds
        #[arg(long, default_value_t = 1.0)]
        jitter: f64,
        /// Per-request timeout, in seconds
        #[arg(long, default_value_t = 10)]
        timeout: u64,
        #[arg(long, default_value = DEFAULT_CSV_PATH)]
        output: PathBuf,
        #[arg(long, default_value = DEFAULT_CHART_PATH)]
        chart: PathBuf,
    },
    /// Analyze the built-in sample dataset
    Demo {
        #[arg(long, default_value = DEMO_CSV_PATH)]
        output: PathBuf,
        #[arg(long, default_value = DEFAULT_CHART_PATH)]
        chart: PathBuf,
    },
    /// Analyze records from a previously exported CSV file
    Analyze {
        csv_file: PathBuf,
        #[arg(long, default_value = DEFAULT_CSV_PATH)]
        output: PathBuf,
        #[arg(long, default_value = DEFAULT_CHART_PATH)]
        chart: PathBuf,
        #[arg(long, default_value_t = 5)]
        top_locations: usize,
        #[arg(long, default_value_t = 10)]
        top_skills: usize,
    },
}

pub async fn handle_command(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Scrape {
            base_url,
            query,
            pages,
            delay,
            jitter,
            timeout,
            output,
            chart,
        } => {
            let mut config = ScraperConfig::from_env()
                .with_delay(seconds(delay)?)
                .with_max_jitter(seconds(jitter)?)
                .with_timeout(Duration::from_secs(timeout));
            if let Some(url) = base_url {
                config = config.with_base_url(url);
            }
            let report = ReportConfig::default()
                .with_csv_path(output)
                .with_chart_path(chart);
            validate_file_extension(&report.chart_path, &["svg"])?;

            app_log!(info, "Scraping {} for '{}' ({} pages)", config.base_url, query, pages);
            let collector = JobCollector::new(config)?;
            let jobs = collector.scrape_jobs(&query, pages).await;

            if jobs.is_empty() {
                println!("No jobs were scraped. Please check the website structure and selectors.");
                return Ok(());
            }

            run_analysis(JobAnalyzer::new(jobs), &report, 5, 10)
        }

        Command::Demo { output, chart } => {
            println!("Running demo with sample job data...");
            let report = ReportConfig::default()
                .with_csv_path(output)
                .with_chart_path(chart);
            validate_file_extension(&report.chart_path, &["svg"])?;

            run_analysis(JobAnalyzer::new(sample_jobs()), &report, 5, 10)
        }

        Command::Analyze {
            csv_file,
            output,
            chart,
            top_locations,
            top_skills,
        } => {
            if !csv_file.exists() {
                anyhow::bail!("CSV file not found: {}", csv_file.display());
            }
            let report = ReportConfig::default()
                .with_csv_path(output)
                .with_chart_path(chart);
            validate_file_extension(&report.chart_path, &["svg"])?;

            let jobs = load_records(&csv_file)?;
            run_analysis(JobAnalyzer::new(jobs), &report, top_locations, top_skills)
        }
    }
}

fn run_analysis(
    analyzer: JobAnalyzer,
    report: &ReportConfig,
    top_locations: usize,
    top_skills: usize,
) -> Result<()> {
    print_analysis(&analyzer, top_locations, top_skills);

    analyzer.create_visualizations(&report.chart_path)?;
    println!("✓ Chart report written to {}", report.chart_path.display());

    analyzer.save_data(&report.csv_path)?;
    println!("✓ Data saved to {}", report.csv_path.display());

    Ok(())
}

fn seconds(value: f64) -> Result<Duration> {
    Duration::try_from_secs_f64(value)
        .map_err(|_| anyhow::anyhow!("Invalid duration: {} seconds", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scrape_defaults() {
        let cli = Cli::try_parse_from(["jobscope", "scrape"]).unwrap();
        match cli.command {
            Command::Scrape {
                base_url,
                query,
                pages,
                delay,
                output,
                ..
            } => {
                assert_eq!(base_url, None);
                assert_eq!(query, "data analyst");
                assert_eq!(pages, 5);
                assert_eq!(delay, 2.0);
                assert_eq!(output, PathBuf::from(DEFAULT_CSV_PATH));
            }
            _ => panic!("expected scrape command"),
        }
        assert!(cli.log_file.is_none());
    }

    #[test]
    fn test_parse_analyze_with_global_log_file() {
        let cli = Cli::try_parse_from([
            "jobscope",
            "analyze",
            "jobs.csv",
            "--top-skills",
            "3",
            "--log-file",
            "run.log",
        ])
        .unwrap();
        assert_eq!(cli.log_file, Some(PathBuf::from("run.log")));
        match cli.command {
            Command::Analyze {
                csv_file,
                top_skills,
                top_locations,
                ..
            } => {
                assert_eq!(csv_file, PathBuf::from("jobs.csv"));
                assert_eq!(top_skills, 3);
                assert_eq!(top_locations, 5);
            }
            _ => panic!("expected analyze command"),
        }
    }

    #[test]
    fn test_seconds_rejects_negative() {
        assert_eq!(seconds(1.5).unwrap(), Duration::from_millis(1500));
        assert!(seconds(-1.0).is_err());
    }

    #[tokio::test]
    async fn test_demo_command_writes_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("demo.csv");
        let chart = dir.path().join("demo.svg");

        handle_command(Cli {
            command: Command::Demo {
                output: output.clone(),
                chart: chart.clone(),
            },
            log_file: None,
        })
        .await
        .unwrap();

        assert!(output.is_file());
        assert!(chart.is_file());
    }

    #[tokio::test]
    async fn test_analyze_missing_file_errors() {
        let result = handle_command(Cli {
            command: Command::Analyze {
                csv_file: PathBuf::from("/nonexistent/jobs.csv"),
                output: PathBuf::from(DEFAULT_CSV_PATH),
                chart: PathBuf::from(DEFAULT_CHART_PATH),
                top_locations: 5,
                top_skills: 10,
            },
            log_file: None,
        })
        .await;
        assert!(result.is_err());
    }
}
