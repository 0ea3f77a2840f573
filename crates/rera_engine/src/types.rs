use std::path::PathBuf;
use std::time::Duration;

use url::Url;

/// The regulator's site root. Both strategies start here.
pub const SITE_ROOT: &str = "https://rera.odisha.gov.in";

/// Desktop Chrome fingerprint presented by the session strategy.
const DESKTOP_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Listing endpoints probed by the session strategy, in priority order.
/// The site has shuffled these around between deployments, so all known
/// shapes are tried.
const LISTING_PATHS: [&str; 4] = [
    "/projects/project-list",
    "/projects/registered-projects",
    "/projects/online/registered",
    "/projects/offline/registered",
];

#[derive(Debug, thiserror::Error)]
pub enum AcquireError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
    #[error("browser configuration rejected: {0}")]
    BrowserConfig(String),
    #[error("browser protocol error: {0}")]
    Browser(#[from] chromiumoxide::error::CdpError),
}

/// Knobs for the plain-HTTP strategy. All fields are public so tests can
/// point the strategy at a local mock server.
#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub base_url: Url,
    pub listing_paths: Vec<String>,
    pub request_timeout: Duration,
    pub user_agent: String,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            base_url: Url::parse(SITE_ROOT).expect("static site url"),
            listing_paths: LISTING_PATHS.iter().map(|p| p.to_string()).collect(),
            request_timeout: Duration::from_secs(30),
            user_agent: DESKTOP_USER_AGENT.to_string(),
        }
    }
}

/// Knobs for the headless-browser strategy.
///
/// The settle durations mirror how long the site's client-side rendering
/// takes in practice; the readiness poll treats a serialized page above
/// `min_content_len` characters as "dynamic content has loaded".
#[derive(Debug, Clone)]
pub struct BrowserSettings {
    pub base_url: Url,
    pub listing_path: String,
    /// Explicit Chrome/Chromium binary; system default when `None`.
    pub executable: Option<PathBuf>,
    pub initial_settle: Duration,
    pub post_click_settle: Duration,
    pub listing_settle: Duration,
    pub readiness_timeout: Duration,
    pub readiness_poll: Duration,
    pub min_content_len: usize,
}

impl Default for BrowserSettings {
    fn default() -> Self {
        Self {
            base_url: Url::parse(SITE_ROOT).expect("static site url"),
            listing_path: LISTING_PATHS[0].to_string(),
            executable: None,
            initial_settle: Duration::from_secs(5),
            post_click_settle: Duration::from_secs(3),
            listing_settle: Duration::from_secs(10),
            readiness_timeout: Duration::from_secs(20),
            readiness_poll: Duration::from_millis(500),
            min_content_len: 5000,
        }
    }
}

impl BrowserSettings {
    pub fn listing_url(&self) -> Result<Url, url::ParseError> {
        self.base_url.join(&self.listing_path)
    }
}
