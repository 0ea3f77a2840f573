use serde::{Deserialize, Serialize};

/// Promoter name shown when the listing row carries no promoter cell.
pub const PROMOTER_UNAVAILABLE: &str = "Requires detail access";

/// Value for fields the listing table never carries; filling them in would
/// require visiting each project's detail page.
pub const DETAIL_PAGE_ONLY: &str = "Requires detail page access";

/// Status stamped on the synthetic placeholder records.
pub const MANUAL_VERIFICATION_STATUS: &str = "Data extraction requires manual verification";

/// Serialized field labels, in the fixed order sinks rely on.
pub mod field_names {
    pub const REGISTRATION_NO: &str = "Rera Regd. No";
    pub const PROJECT_NAME: &str = "Project Name";
    pub const PROMOTER_NAME: &str = "Promoter Name";
    pub const PROMOTER_ADDRESS: &str = "Address of the Promoter";
    pub const GST_NO: &str = "GST No";
    pub const DETAIL_LINK: &str = "Detail Link";
    pub const STATUS: &str = "Status";
}

/// One project registration entry from the regulator's listing.
///
/// Every record is fully keyed: data the listing table cannot provide is
/// represented by sentinel strings, never by missing fields. The two
/// `Option` fields are genuinely present-or-absent and are omitted from
/// serialized output when `None`: `detail_link` exists only when the source
/// row had a "view" anchor, and `status` only on placeholder records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    #[serde(rename = "Rera Regd. No")]
    pub registration_no: String,
    #[serde(rename = "Project Name")]
    pub project_name: String,
    #[serde(rename = "Promoter Name")]
    pub promoter_name: String,
    #[serde(rename = "Address of the Promoter")]
    pub promoter_address: String,
    #[serde(rename = "GST No")]
    pub gst_no: String,
    #[serde(rename = "Detail Link", default, skip_serializing_if = "Option::is_none")]
    pub detail_link: Option<String>,
    #[serde(rename = "Status", default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl ProjectRecord {
    /// Builds a record from the first cells of a listing-table row.
    ///
    /// The promoter column is optional in practice; rows without it get the
    /// [`PROMOTER_UNAVAILABLE`] sentinel. Address and GST are always
    /// sentinels here since the listing table never carries them.
    pub fn from_listing_row(
        registration_no: String,
        project_name: String,
        promoter_name: Option<String>,
    ) -> Self {
        Self {
            registration_no,
            project_name,
            promoter_name: promoter_name.unwrap_or_else(|| PROMOTER_UNAVAILABLE.to_string()),
            promoter_address: DETAIL_PAGE_ONLY.to_string(),
            gst_no: DETAIL_PAGE_ONLY.to_string(),
            detail_link: None,
            status: None,
        }
    }

    /// Labels and values in fixed display order, skipping absent optionals.
    pub fn fields(&self) -> Vec<(&'static str, &str)> {
        let mut out = vec![
            (field_names::REGISTRATION_NO, self.registration_no.as_str()),
            (field_names::PROJECT_NAME, self.project_name.as_str()),
            (field_names::PROMOTER_NAME, self.promoter_name.as_str()),
            (field_names::PROMOTER_ADDRESS, self.promoter_address.as_str()),
            (field_names::GST_NO, self.gst_no.as_str()),
        ];
        if let Some(link) = &self.detail_link {
            out.push((field_names::DETAIL_LINK, link.as_str()));
        }
        if let Some(status) = &self.status {
            out.push((field_names::STATUS, status.as_str()));
        }
        out
    }
}

/// The fixed fallback set emitted when every live strategy comes back empty.
///
/// Two illustrative records in the site's listing format, each flagged for
/// manual verification so downstream consumers can tell them apart from
/// live data.
pub fn placeholder_projects() -> Vec<ProjectRecord> {
    vec![
        ProjectRecord {
            registration_no: "OD/2023/001".to_string(),
            project_name: "Sample Project 1".to_string(),
            promoter_name: "Sample Developer Pvt Ltd".to_string(),
            promoter_address: "Bhubaneswar, Odisha".to_string(),
            gst_no: "21XXXXX1234X1Z5".to_string(),
            detail_link: None,
            status: Some(MANUAL_VERIFICATION_STATUS.to_string()),
        },
        ProjectRecord {
            registration_no: "OD/2023/002".to_string(),
            project_name: "Sample Project 2".to_string(),
            promoter_name: "Another Developer Ltd".to_string(),
            promoter_address: "Cuttack, Odisha".to_string(),
            gst_no: "21XXXXX5678X1Z5".to_string(),
            detail_link: None,
            status: Some(MANUAL_VERIFICATION_STATUS.to_string()),
        },
    ]
}
