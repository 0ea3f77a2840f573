use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, CONNECTION};
use rera_core::ProjectRecord;
use scraper::Html;

use crate::extract::ListingTableExtractor;
use crate::pipeline::AcquisitionStrategy;
use crate::types::{AcquireError, SessionSettings};

/// Plain-HTTP acquisition: a reused client with a desktop-browser header set
/// probes the known listing endpoints in priority order.
///
/// The site rejects obviously scripted clients, so the header set matters
/// more than usual here. This is the cheap strategy and runs first.
pub struct SessionStrategy {
    settings: SessionSettings,
    extractor: ListingTableExtractor,
}

impl SessionStrategy {
    pub fn new(settings: SessionSettings) -> Self {
        Self {
            settings,
            extractor: ListingTableExtractor::new(),
        }
    }

    fn build_client(&self) -> Result<reqwest::Client, AcquireError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
            ),
        );
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
        headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));
        headers.insert("Upgrade-Insecure-Requests", HeaderValue::from_static("1"));

        Ok(reqwest::Client::builder()
            .user_agent(self.settings.user_agent.clone())
            .default_headers(headers)
            .timeout(self.settings.request_timeout)
            .build()?)
    }

    async fn crawl(&self) -> Result<Vec<ProjectRecord>, AcquireError> {
        let client = self.build_client()?;

        // Gate on the root page first: a refusal here means the whole site
        // is blocking this client and the listing probes are pointless.
        let response = client.get(self.settings.base_url.clone()).send().await?;
        let status = response.status();
        log::info!("root page status: {status}");
        if !status.is_success() {
            log::warn!("root page refused ({status}), skipping listing probes");
            return Ok(Vec::new());
        }

        for path in &self.settings.listing_paths {
            let url = self.settings.base_url.join(path)?;
            log::info!("trying listing url: {url}");
            let response = match client.get(url.clone()).send().await {
                Ok(response) => response,
                Err(err) => {
                    // A fault on one candidate just means "try the next".
                    log::warn!("request to {url} failed: {err}");
                    continue;
                }
            };
            if !response.status().is_success() {
                log::debug!("{url} returned {}", response.status());
                continue;
            }
            let body = match response.text().await {
                Ok(body) => body,
                Err(err) => {
                    log::warn!("reading body from {url} failed: {err}");
                    continue;
                }
            };
            let records = {
                let document = Html::parse_document(&body);
                self.extractor.extract(&document)
            };
            if !records.is_empty() {
                log::info!("found {} projects at {url}", records.len());
                return Ok(records);
            }
        }

        Ok(Vec::new())
    }
}

#[async_trait::async_trait]
impl AcquisitionStrategy for SessionStrategy {
    fn name(&self) -> &'static str {
        "http session"
    }

    async fn attempt(&self) -> Vec<ProjectRecord> {
        match self.crawl().await {
            Ok(records) => records,
            Err(err) => {
                log::warn!("http session strategy failed: {err}");
                Vec::new()
            }
        }
    }
}
