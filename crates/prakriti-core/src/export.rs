//! JSON and CSV export of saved user records.
//!
//! Export renders a text payload plus a suggested filename and mime type;
//! it never touches the record store. CSV uses a fixed column set with
//! every value quoted and embedded quotes doubled.

use crate::models::UserRecord;

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Pretty-printed structural dump.
    Json,
    /// Fixed-column summary, one row per record.
    Csv,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }

    pub fn mime(&self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json",
            ExportFormat::Csv => "text/csv;charset=utf-8;",
        }
    }
}

/// A rendered export payload.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportPayload {
    /// Suggested download filename
    pub filename: String,
    /// Mime type for the collaborator's save/download plumbing
    pub mime: &'static str,
    /// Text content
    pub content: String,
}

/// CSV header row shared by single-record and collection exports.
pub const CSV_HEADER: &str = "id,name,age,prakriti,answers_count,followups_count,createdAt";

/// Render one record as `{name}_{id}.{ext}`.
pub fn export_record(
    record: &UserRecord,
    format: ExportFormat,
) -> Result<ExportPayload, serde_json::Error> {
    let content = match format {
        ExportFormat::Json => serde_json::to_string_pretty(record)?,
        ExportFormat::Csv => format!("{}\n{}", CSV_HEADER, csv_row(record)),
    };

    Ok(ExportPayload {
        filename: format!(
            "{}_{}.{}",
            record.display_name(),
            record.id,
            format.extension()
        ),
        mime: format.mime(),
        content,
    })
}

/// Render the whole collection as `prakriti_users_{millis}.{ext}`.
pub fn export_collection(
    records: &[UserRecord],
    format: ExportFormat,
) -> Result<ExportPayload, serde_json::Error> {
    let content = match format {
        ExportFormat::Json => serde_json::to_string_pretty(records)?,
        ExportFormat::Csv => {
            let mut csv = String::from(CSV_HEADER);
            for record in records {
                csv.push('\n');
                csv.push_str(&csv_row(record));
            }
            csv
        }
    };

    Ok(ExportPayload {
        filename: format!(
            "prakriti_users_{}.{}",
            chrono::Utc::now().timestamp_millis(),
            format.extension()
        ),
        mime: format.mime(),
        content,
    })
}

fn csv_row(record: &UserRecord) -> String {
    let profile = record.profile.as_ref();
    let result = record.result.as_ref();

    let fields = [
        record.id.clone(),
        profile.map(|p| p.name.clone()).unwrap_or_default(),
        profile.map(|p| p.age.to_string()).unwrap_or_default(),
        result.map(|r| r.prakriti.to_string()).unwrap_or_default(),
        result.map(|r| r.answers.len().to_string()).unwrap_or_default(),
        record
            .followups
            .as_ref()
            .map(|f| f.len().to_string())
            .unwrap_or_default(),
        record.created_at.clone(),
    ];

    fields
        .iter()
        .map(|f| quote_csv(f))
        .collect::<Vec<_>>()
        .join(",")
}

/// Quote a CSV value, doubling embedded quotes.
fn quote_csv(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}
