// src/collector/mod.rs
//! Paginated job-portal scraping

pub mod cleaning;
pub mod selectors;

use anyhow::{Context, Result};
use rand::Rng;
use reqwest::Client;
use std::time::Duration;
use tracing::{info, warn};

use crate::config::ScraperConfig;
use crate::types::RawJobRecord;

pub use selectors::parse_listings_page;

/// Source of listing pages. A failed fetch skips only that page.
#[allow(async_fn_in_trait)]
pub trait PageFetcher {
    async fn fetch(&self, url: &str) -> Result<String>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &ScraperConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }
}

impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .context("Failed to fetch listings page")?
            .error_for_status()
            .context("Portal returned an error status")?;

        response
            .text()
            .await
            .context("Failed to read response body")
    }
}

pub fn search_url(base_url: &str, query: &str, page: usize) -> String {
    format!("{}/search?q={}&page={}", base_url, query.replace(' ', "+"), page)
}

pub struct JobCollector<F: PageFetcher> {
    fetcher: F,
    config: ScraperConfig,
}

impl JobCollector<HttpFetcher> {
    pub fn new(config: ScraperConfig) -> Result<Self> {
        let fetcher = HttpFetcher::new(&config)?;
        Ok(Self { fetcher, config })
    }
}

impl<F: PageFetcher> JobCollector<F> {
    pub fn with_fetcher(fetcher: F, config: ScraperConfig) -> Self {
        Self { fetcher, config }
    }

    /// Scrape pages `1..=num_pages` one after another
    pub async fn scrape_jobs(&self, query: &str, num_pages: usize) -> Vec<RawJobRecord> {
        info!("Starting to scrape jobs for '{}'", query);
        let mut jobs = Vec::new();

        for page in 1..=num_pages {
            if page > 1 {
                tokio::time::sleep(self.page_delay()).await;
            }

            let url = search_url(&self.config.base_url, query, page);
            info!("Scraping page {}: {}", page, url);

            match self.fetcher.fetch(&url).await {
                Ok(html) => {
                    let listings = parse_listings_page(&html);
                    info!("Found {} jobs on page {}", listings.len(), page);
                    jobs.extend(listings);
                }
                Err(e) => {
                    warn!("Error scraping page {}: {:#}", page, e);
                }
            }
        }

        info!("Total jobs scraped: {}", jobs.len());
        jobs
    }

    fn page_delay(&self) -> Duration {
        let max_jitter = self.config.max_jitter.as_secs_f64();
        let jitter = if max_jitter > 0.0 {
            rand::thread_rng().gen_range(0.0..max_jitter)
        } else {
            0.0
        };
        self.config.delay + Duration::from_secs_f64(jitter)
    }
}
