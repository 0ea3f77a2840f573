use std::borrow::Cow;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use rera_core::{field_names, ProjectRecord};
use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("serialization failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub record_count: usize,
    pub json_path: PathBuf,
    pub csv_path: PathBuf,
}

/// Pretty-printed JSON array with the sink's field names as keys.
pub fn records_to_json(records: &[ProjectRecord]) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// CSV in fixed column order. The `Detail Link` and `Status` columns appear
/// only when some record in the set carries them, so live and placeholder
/// outputs each get exactly their own schema.
pub fn records_to_csv(records: &[ProjectRecord]) -> String {
    let mut columns = vec![
        field_names::REGISTRATION_NO,
        field_names::PROJECT_NAME,
        field_names::PROMOTER_NAME,
        field_names::PROMOTER_ADDRESS,
        field_names::GST_NO,
    ];
    if records.iter().any(|r| r.detail_link.is_some()) {
        columns.push(field_names::DETAIL_LINK);
    }
    if records.iter().any(|r| r.status.is_some()) {
        columns.push(field_names::STATUS);
    }

    let mut out = String::new();
    push_row(&mut out, columns.iter().copied());
    for record in records {
        push_row(&mut out, columns.iter().map(|col| column_value(record, col)));
    }
    out
}

/// Writes `<prefix>_projects.json` and `<prefix>_projects.csv` into `dir`,
/// creating the directory if needed. Each file is written to a temp file
/// first and renamed into place so a crash never leaves a half-written
/// output behind.
pub fn write_outputs(
    dir: &Path,
    prefix: &str,
    records: &[ProjectRecord],
) -> Result<ExportSummary, ExportError> {
    let json_path = write_atomic(
        dir,
        &format!("{prefix}_projects.json"),
        &records_to_json(records)?,
    )?;
    let csv_path = write_atomic(
        dir,
        &format!("{prefix}_projects.csv"),
        &records_to_csv(records),
    )?;
    Ok(ExportSummary {
        record_count: records.len(),
        json_path,
        csv_path,
    })
}

fn column_value<'a>(record: &'a ProjectRecord, column: &str) -> &'a str {
    if column == field_names::REGISTRATION_NO {
        &record.registration_no
    } else if column == field_names::PROJECT_NAME {
        &record.project_name
    } else if column == field_names::PROMOTER_NAME {
        &record.promoter_name
    } else if column == field_names::PROMOTER_ADDRESS {
        &record.promoter_address
    } else if column == field_names::GST_NO {
        &record.gst_no
    } else if column == field_names::DETAIL_LINK {
        record.detail_link.as_deref().unwrap_or("")
    } else {
        record.status.as_deref().unwrap_or("")
    }
}

fn push_row<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>) {
    let mut first = true;
    for cell in cells {
        if !first {
            out.push(',');
        }
        first = false;
        out.push_str(&escape_csv(cell));
    }
    out.push_str("\r\n");
}

fn escape_csv(cell: &str) -> Cow<'_, str> {
    if cell.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", cell.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(cell)
    }
}

fn write_atomic(dir: &Path, filename: &str, content: &str) -> Result<PathBuf, ExportError> {
    fs::create_dir_all(dir)?;
    let target = dir.join(filename);
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.flush()?;
    tmp.persist(&target).map_err(|err| ExportError::Io(err.error))?;
    Ok(target)
}
