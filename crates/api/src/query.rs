//! Query parameter types for list endpoints.

use eindex_core::error::CoreError;
use eindex_core::record::RecordType;
use eindex_core::types::DbId;
use eindex_db::models::record::RecordFilter;
use serde::Deserialize;

/// `?subject=&category=&type=` on record listings.
///
/// An empty value or `all` disables that filter, matching the front end's
/// "All subjects" / "All categories" options.
#[derive(Debug, Default, Deserialize)]
pub struct RecordListParams {
    pub subject: Option<String>,
    pub category: Option<String>,
    #[serde(rename = "type")]
    pub record_type: Option<String>,
}

impl RecordListParams {
    pub fn into_filter(self) -> Result<RecordFilter, CoreError> {
        let record_type = active(self.record_type)
            .map(|t| t.parse::<RecordType>())
            .transpose()?;
        Ok(RecordFilter {
            subject: active(self.subject),
            category: active(self.category),
            record_type,
        })
    }
}

/// `?subjectId=` on attendance listings.
#[derive(Debug, Default, Deserialize)]
pub struct AttendanceListParams {
    #[serde(rename = "subjectId")]
    pub subject_id: Option<String>,
}

impl AttendanceListParams {
    pub fn subject_id(&self) -> Result<Option<DbId>, CoreError> {
        active(self.subject_id.clone())
            .map(|id| {
                id.parse::<DbId>()
                    .map_err(|_| CoreError::validation("Subject ID filter must be a number"))
            })
            .transpose()
    }
}

fn active(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case("all"))
}
