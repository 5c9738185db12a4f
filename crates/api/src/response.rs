//! Shared response envelope for API handlers.
//!
//! Every API response is `{ "success": bool, "message"?: string, ...payload }`.
//! Payload structs are flattened into the envelope, so their field names
//! become top-level keys (`students`, `record`, `attendanceId`, ...).

use serde::Serialize;

/// Standard `{ success, message?, ...payload }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(Envelope::ok(StudentList { students })))
/// ```
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(flatten)]
    pub payload: T,
}

/// Payload for responses that only carry a message.
#[derive(Debug, Default, Serialize)]
pub struct NoPayload {}

impl<T: Serialize> Envelope<T> {
    /// Successful response with no message.
    pub fn ok(payload: T) -> Self {
        Self {
            success: true,
            message: None,
            payload,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl Envelope<NoPayload> {
    /// Successful response consisting of a message only.
    pub fn message(message: impl Into<String>) -> Self {
        Envelope::ok(NoPayload {}).with_message(message)
    }
}
