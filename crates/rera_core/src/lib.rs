//! Core record model shared by the acquisition strategies and output sinks.
mod record;

pub use record::{
    field_names, placeholder_projects, ProjectRecord, DETAIL_PAGE_ONLY,
    MANUAL_VERIFICATION_STATUS, PROMOTER_UNAVAILABLE,
};
