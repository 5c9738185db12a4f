//! Student admission form validation.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use validator::{Validate, ValidationErrors};

use crate::error::CoreError;
use crate::validation::{as_integer, is_present, required_text};

/// School-issued student number, e.g. `21-0001`.
static STUDENT_ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{2}-\d{4}$").expect("student id pattern is valid"));

pub const MSG_FIELDS_REQUIRED: &str = "All fields are required";
pub const MSG_STUDENT_ID_FORMAT: &str = "Student ID must be in the format NN-NNNN";
pub const MSG_YEAR_RANGE: &str = "Year must be a number between 1 and 5";
pub const MSG_STUDENT_HAS_DEPENDENTS: &str =
    "Student still has records or attendance and cannot be deleted";

/// Raw student body as submitted by the admission/edit form.
///
/// Every field is optional here so that missing fields surface as a 400
/// validation error rather than a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StudentInput {
    pub student_id: Option<String>,
    pub name: Option<String>,
    pub rfid_tag: Option<String>,
    pub course: Option<String>,
    pub year: Option<Value>,
    pub section: Option<String>,
}

/// A student payload that passed validation. Strings are trimmed.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct StudentFields {
    #[validate(regex(path = *STUDENT_ID_PATTERN, message = "Student ID must be in the format NN-NNNN"))]
    pub student_id: String,
    pub name: String,
    pub rfid_tag: String,
    pub course: String,
    #[validate(range(min = 1, max = 5, message = "Year must be a number between 1 and 5"))]
    pub year: i32,
    pub section: String,
}

impl StudentInput {
    /// Check presence, format and range rules and produce [`StudentFields`].
    pub fn validate(&self) -> Result<StudentFields, CoreError> {
        let (
            Some(student_id),
            Some(name),
            Some(rfid_tag),
            Some(course),
            Some(year),
            Some(section),
        ) = (
            required_text(self.student_id.as_deref()),
            required_text(self.name.as_deref()),
            required_text(self.rfid_tag.as_deref()),
            required_text(self.course.as_deref()),
            self.year.as_ref().filter(|v| is_present(Some(*v))),
            required_text(self.section.as_deref()),
        )
        else {
            return Err(CoreError::validation(MSG_FIELDS_REQUIRED));
        };

        let year = as_integer(year)
            .and_then(|y| i32::try_from(y).ok())
            .ok_or_else(|| CoreError::validation(MSG_YEAR_RANGE))?;

        let fields = StudentFields {
            student_id,
            name,
            rfid_tag,
            course,
            year,
            section,
        };
        Validate::validate(&fields)
            .map_err(|errors| CoreError::Validation(first_message(&errors)))?;
        Ok(fields)
    }
}

/// Pick the message of the first failing field, in form order.
fn first_message(errors: &ValidationErrors) -> String {
    let field_errors = errors.field_errors();
    ["student_id", "year"]
        .iter()
        .filter_map(|field| field_errors.get(*field))
        .filter_map(|errs| errs.first())
        .find_map(|err| err.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| errors.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    fn valid_input() -> StudentInput {
        serde_json::from_value(json!({
            "student_id": "21-0001",
            "name": " Ana Cruz ",
            "rfid_tag": "1234567890",
            "course": "BSIT",
            "year": 1,
            "section": "A"
        }))
        .unwrap()
    }

    #[test]
    fn valid_payload_is_trimmed() {
        let fields = valid_input().validate().unwrap();
        assert_eq!(fields.name, "Ana Cruz");
        assert_eq!(fields.year, 1);
    }

    #[test]
    fn year_accepts_numeric_string() {
        let mut input = valid_input();
        input.year = Some(json!("4"));
        assert_eq!(input.validate().unwrap().year, 4);
    }

    #[test]
    fn missing_field_is_rejected() {
        let mut input = valid_input();
        input.section = Some("  ".into());
        assert_matches!(input.validate(), Err(CoreError::Validation(m)) if m == MSG_FIELDS_REQUIRED);

        let mut input = valid_input();
        input.year = None;
        assert_matches!(input.validate(), Err(CoreError::Validation(m)) if m == MSG_FIELDS_REQUIRED);
    }

    #[test]
    fn malformed_student_id_is_rejected() {
        for bad in ["210001", "2-0001", "21-001", "ab-cdef", "21-00011"] {
            let mut input = valid_input();
            input.student_id = Some(bad.into());
            assert_matches!(
                input.validate(),
                Err(CoreError::Validation(m)) if m == MSG_STUDENT_ID_FORMAT,
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn year_out_of_range_is_rejected() {
        for bad in [json!(0), json!(6), json!("first"), json!(2.5)] {
            let mut input = valid_input();
            input.year = Some(bad);
            assert_matches!(input.validate(), Err(CoreError::Validation(m)) if m == MSG_YEAR_RANGE);
        }
    }

    #[test]
    fn student_id_error_reported_before_year() {
        let mut input = valid_input();
        input.student_id = Some("bad".into());
        input.year = Some(json!(9));
        assert_matches!(input.validate(), Err(CoreError::Validation(m)) if m == MSG_STUDENT_ID_FORMAT);
    }
}
