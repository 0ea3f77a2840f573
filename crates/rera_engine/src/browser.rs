use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::page::Page;
use futures_util::StreamExt;
use rera_core::ProjectRecord;
use scraper::Html;
use tokio::task::JoinHandle;
use tokio::time::{sleep, Instant};

use crate::extract::ListingTableExtractor;
use crate::pipeline::AcquisitionStrategy;
use crate::types::{AcquireError, BrowserSettings};

/// Clicks the first anchor whose text mentions "Projects" from inside the
/// page's own scripting context; an in-page click mimics human navigation
/// better than a synthesized input event.
const NAV_CLICK_SCRIPT: &str = r#"(() => {
    const anchors = Array.from(document.querySelectorAll('a'));
    const target = anchors.find(a => (a.textContent || '').includes('Projects'));
    if (!target) { return false; }
    target.click();
    return true;
})()"#;

/// Headless-browser acquisition for the JavaScript-rendered listing page.
///
/// Launches Chromium with automation-detection signals suppressed, lets the
/// site's client-side rendering settle, then hands the serialized page to
/// the table extractor. The heavy strategy; consulted only after the plain
/// session comes back empty.
pub struct BrowserStrategy {
    settings: BrowserSettings,
    extractor: ListingTableExtractor,
}

impl BrowserStrategy {
    pub fn new(settings: BrowserSettings) -> Self {
        Self {
            settings,
            extractor: ListingTableExtractor::new(),
        }
    }

    async fn launch(&self) -> Result<(Browser, JoinHandle<()>), AcquireError> {
        let mut builder = BrowserConfig::builder()
            .window_size(1920, 1080)
            .arg("--no-sandbox")
            .arg("--disable-dev-shm-usage")
            .arg("--disable-gpu")
            .arg("--disable-blink-features=AutomationControlled");
        if let Some(path) = &self.settings.executable {
            builder = builder.chrome_executable(path);
        }
        let config = builder.build().map_err(AcquireError::BrowserConfig)?;

        let (browser, mut handler) = Browser::launch(config).await?;
        // The handler must be pumped for the CDP connection to make progress.
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                let _ = event;
            }
        });

        Ok((browser, handler_task))
    }

    async fn drive(&self, browser: &Browser) -> Result<Vec<ProjectRecord>, AcquireError> {
        let page = browser.new_page(self.settings.base_url.as_str()).await?;
        sleep(self.settings.initial_settle).await;

        self.click_projects_nav(&page).await;

        let listing_url = self.settings.listing_url()?;
        page.goto(listing_url.as_str()).await?;
        sleep(self.settings.listing_settle).await;

        let html = self.await_rendered_content(&page).await?;
        let records = {
            let document = Html::parse_document(&html);
            self.extractor.extract(&document)
        };
        Ok(records)
    }

    /// Best effort: a missing nav link is logged and we navigate directly.
    async fn click_projects_nav(&self, page: &Page) {
        match page.evaluate(NAV_CLICK_SCRIPT).await {
            Ok(result) => match result.into_value::<bool>() {
                Ok(true) => {
                    log::debug!("clicked Projects navigation link");
                    sleep(self.settings.post_click_settle).await;
                }
                _ => log::info!("no Projects link found, navigating directly"),
            },
            Err(err) => log::info!("nav click script failed ({err}), navigating directly"),
        }
    }

    /// Polls the serialized page until it crosses the size threshold used as
    /// a proxy for "dynamic content has loaded". When the bound expires,
    /// control proceeds with whatever content is present.
    async fn await_rendered_content(&self, page: &Page) -> Result<String, AcquireError> {
        let deadline = Instant::now() + self.settings.readiness_timeout;
        loop {
            let html = page.content().await?;
            if html.len() > self.settings.min_content_len {
                return Ok(html);
            }
            if Instant::now() >= deadline {
                log::warn!(
                    "render wait expired with {} chars of content",
                    html.len()
                );
                return Ok(html);
            }
            sleep(self.settings.readiness_poll).await;
        }
    }

    /// Releases the browser process. Runs on every exit path; a Chromium
    /// left behind would leak across invocations.
    async fn teardown(mut browser: Browser, handler_task: JoinHandle<()>) {
        if let Err(err) = browser.close().await {
            log::debug!("browser close failed: {err}");
        }
        let _ = browser.wait().await;
        handler_task.abort();
    }
}

#[async_trait::async_trait]
impl AcquisitionStrategy for BrowserStrategy {
    fn name(&self) -> &'static str {
        "stealth browser"
    }

    async fn attempt(&self) -> Vec<ProjectRecord> {
        let (browser, handler_task) = match self.launch().await {
            Ok(launched) => launched,
            Err(err) => {
                log::warn!("browser launch failed: {err}");
                return Vec::new();
            }
        };

        let outcome = self.drive(&browser).await;
        Self::teardown(browser, handler_task).await;

        match outcome {
            Ok(records) => records,
            Err(err) => {
                log::warn!("stealth browser strategy failed: {err}");
                Vec::new()
            }
        }
    }
}
