/// Errors surfaced by [`ApiClient`](crate::api::ApiClient) and the kiosk session.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, TLS, body decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("API error ({status}): {message}")]
    Api {
        status: u16,
        /// The envelope's `message`, or the raw body when it is not JSON.
        message: String,
    },

    /// The configured base URL cannot carry path segments.
    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),

    /// A check-in was attempted before any badge was scanned.
    #[error("No student selected")]
    NoStudentSelected,
}

impl ClientError {
    /// Whether the server reported the requested resource as missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Api { status: 404, .. })
    }
}
