// src/config.rs
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://internshala.com";
pub const DEFAULT_CSV_PATH: &str = "scraped_jobs.csv";
pub const DEFAULT_CHART_PATH: &str = "job_analysis_report.svg";

const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

#[derive(Debug, Clone)]
pub struct ScraperConfig {
    pub base_url: String,
    pub delay: Duration,
    pub max_jitter: Duration,
    pub timeout: Duration,
    pub user_agent: String,
}

impl ScraperConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            delay: Duration::from_secs(2),
            max_jitter: Duration::from_secs(1),
            timeout: Duration::from_secs(10),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Base URL from `JOB_PORTAL_URL`, falling back to the default portal
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("JOB_PORTAL_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(&base_url)
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_max_jitter(mut self, jitter: Duration) -> Self {
        self.max_jitter = jitter;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: String) -> Self {
        self.user_agent = user_agent;
        self
    }
}

#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub csv_path: PathBuf,
    pub chart_path: PathBuf,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from(DEFAULT_CSV_PATH),
            chart_path: PathBuf::from(DEFAULT_CHART_PATH),
        }
    }
}

impl ReportConfig {
    pub fn with_csv_path(mut self, path: PathBuf) -> Self {
        self.csv_path = path;
        self
    }

    pub fn with_chart_path(mut self, path: PathBuf) -> Self {
        self.chart_path = path;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scraper_defaults() {
        let config = ScraperConfig::new("https://jobs.example.com");
        assert_eq!(config.base_url, "https://jobs.example.com");
        assert_eq!(config.delay, Duration::from_secs(2));
        assert_eq!(config.max_jitter, Duration::from_secs(1));
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert!(config.user_agent.starts_with("Mozilla/5.0"));
    }

    #[test]
    fn test_scraper_builders() {
        let config = ScraperConfig::new("a")
            .with_base_url("https://b.example".to_string())
            .with_delay(Duration::ZERO)
            .with_max_jitter(Duration::from_millis(250))
            .with_timeout(Duration::from_secs(3))
            .with_user_agent("jobscope-test".to_string());
        assert_eq!(config.base_url, "https://b.example");
        assert_eq!(config.delay, Duration::ZERO);
        assert_eq!(config.max_jitter, Duration::from_millis(250));
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert_eq!(config.user_agent, "jobscope-test");
    }

    #[test]
    fn test_report_defaults() {
        let report = ReportConfig::default().with_csv_path(PathBuf::from("out/jobs.csv"));
        assert_eq!(report.csv_path, PathBuf::from("out/jobs.csv"));
        assert_eq!(report.chart_path, PathBuf::from(DEFAULT_CHART_PATH));
    }
}
