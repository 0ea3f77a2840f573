use rera_core::{
    field_names, placeholder_projects, ProjectRecord, DETAIL_PAGE_ONLY,
    MANUAL_VERIFICATION_STATUS, PROMOTER_UNAVAILABLE,
};

#[test]
fn listing_row_without_promoter_uses_sentinel() {
    let record = ProjectRecord::from_listing_row("RP/01/2023".into(), "Green Acres".into(), None);
    assert_eq!(record.promoter_name, PROMOTER_UNAVAILABLE);
    assert_eq!(record.promoter_address, DETAIL_PAGE_ONLY);
    assert_eq!(record.gst_no, DETAIL_PAGE_ONLY);
    assert_eq!(record.detail_link, None);
    assert_eq!(record.status, None);
}

#[test]
fn fields_follow_fixed_order_and_skip_absent_optionals() {
    let record = ProjectRecord::from_listing_row(
        "RP/01/2023".into(),
        "Green Acres".into(),
        Some("Acme Builders".into()),
    );
    let labels: Vec<&str> = record.fields().iter().map(|(label, _)| *label).collect();
    assert_eq!(
        labels,
        vec![
            field_names::REGISTRATION_NO,
            field_names::PROJECT_NAME,
            field_names::PROMOTER_NAME,
            field_names::PROMOTER_ADDRESS,
            field_names::GST_NO,
        ]
    );
}

#[test]
fn fields_append_detail_link_and_status_when_present() {
    let mut record =
        ProjectRecord::from_listing_row("RP/02/2023".into(), "Lake View".into(), None);
    record.detail_link = Some("/projects/42".into());
    record.status = Some("flagged".into());
    let labels: Vec<&str> = record.fields().iter().map(|(label, _)| *label).collect();
    assert_eq!(labels.last(), Some(&field_names::STATUS));
    assert_eq!(labels[labels.len() - 2], field_names::DETAIL_LINK);
}

#[test]
fn serialized_keys_match_sink_schema() {
    let record = ProjectRecord::from_listing_row(
        "RP/03/2023".into(),
        "Hill Side".into(),
        Some("Summit Estates".into()),
    );
    let value = serde_json::to_value(&record).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object["Rera Regd. No"], "RP/03/2023");
    assert_eq!(object["Project Name"], "Hill Side");
    assert_eq!(object["Promoter Name"], "Summit Estates");
    assert!(object.contains_key("Address of the Promoter"));
    assert!(object.contains_key("GST No"));
    // Absent optionals must be omitted, not serialized as null.
    assert!(!object.contains_key("Detail Link"));
    assert!(!object.contains_key("Status"));
}

#[test]
fn placeholder_set_is_fixed_and_flagged() {
    let placeholders = placeholder_projects();
    assert_eq!(placeholders.len(), 2);
    assert_eq!(placeholders[0].registration_no, "OD/2023/001");
    assert_eq!(placeholders[1].registration_no, "OD/2023/002");
    for record in &placeholders {
        assert_eq!(record.status.as_deref(), Some(MANUAL_VERIFICATION_STATUS));
        let value = serde_json::to_value(record).unwrap();
        assert_eq!(value["Status"], MANUAL_VERIFICATION_STATUS);
    }
}
