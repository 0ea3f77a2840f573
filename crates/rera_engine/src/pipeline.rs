use rera_core::{placeholder_projects, ProjectRecord};

use crate::browser::BrowserStrategy;
use crate::session::SessionStrategy;
use crate::types::{BrowserSettings, SessionSettings};

/// One way of obtaining the listing page content.
///
/// Implementations are total: every internal fault is caught, logged, and
/// degraded to an empty result, so callers never see an error.
#[async_trait::async_trait]
pub trait AcquisitionStrategy: Send + Sync {
    /// Name used in logs and progress output.
    fn name(&self) -> &'static str;

    /// Runs one acquisition attempt. An empty result means "no data", never
    /// a distinguishable failure.
    async fn attempt(&self) -> Vec<ProjectRecord>;
}

/// Runs strategies sequentially in fixed priority order and accepts the
/// first non-empty result, replacing nothing and merging nothing.
pub struct AcquisitionPipeline {
    strategies: Vec<Box<dyn AcquisitionStrategy>>,
}

impl AcquisitionPipeline {
    pub fn new(strategies: Vec<Box<dyn AcquisitionStrategy>>) -> Self {
        Self { strategies }
    }

    /// The standard lineup: cheap HTTP session first, headless browser as
    /// the fallback. `browser: None` drops the heavy strategy entirely.
    pub fn with_default_strategies(
        session: SessionSettings,
        browser: Option<BrowserSettings>,
    ) -> Self {
        let mut strategies: Vec<Box<dyn AcquisitionStrategy>> =
            vec![Box::new(SessionStrategy::new(session))];
        if let Some(settings) = browser {
            strategies.push(Box::new(BrowserStrategy::new(settings)));
        }
        Self::new(strategies)
    }

    /// Total: always yields a non-empty record set. When every strategy
    /// comes back empty, the fixed placeholder set is returned so downstream
    /// sinks always have a well-formed structure to work with.
    pub async fn run(&self) -> Vec<ProjectRecord> {
        for strategy in &self.strategies {
            log::info!("trying strategy: {}", strategy.name());
            let records = strategy.attempt().await;
            if !records.is_empty() {
                log::info!("{} produced {} records", strategy.name(), records.len());
                return records;
            }
            log::info!("{} produced no records", strategy.name());
        }

        log::warn!("all strategies exhausted, emitting placeholder records");
        placeholder_projects()
    }
}
