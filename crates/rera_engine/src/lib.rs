//! Acquisition engine: layered strategies, heuristic table extraction,
//! and output export for the RERA Odisha project listing.
mod browser;
mod export;
mod extract;
mod pipeline;
mod session;
mod types;

pub use browser::BrowserStrategy;
pub use export::{records_to_csv, records_to_json, write_outputs, ExportError, ExportSummary};
pub use extract::{is_project_table_header, ListingTableExtractor, ROW_SAMPLE_LIMIT};
pub use pipeline::{AcquisitionPipeline, AcquisitionStrategy};
pub use session::SessionStrategy;
pub use types::{AcquireError, BrowserSettings, SessionSettings, SITE_ROOT};
