use eindex_core::types::DbId;

/// Kiosk configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct KioskConfig {
    /// Base URL of the REST API including the `/api` prefix.
    pub api_url: String,
    /// Subject that scans are recorded against. Without it the kiosk only
    /// lists the available subjects.
    pub subject_id: Option<DbId>,
}

impl KioskConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var            | Default                     |
    /// |--------------------|-----------------------------|
    /// | `EINDEX_API_URL`   | `http://localhost:3000/api` |
    /// | `KIOSK_SUBJECT_ID` | unset                       |
    pub fn from_env() -> Self {
        let api_url = std::env::var("EINDEX_API_URL")
            .unwrap_or_else(|_| "http://localhost:3000/api".into())
            .trim_end_matches('/')
            .to_string();

        let subject_id = std::env::var("KIOSK_SUBJECT_ID")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(|v| {
                v.trim()
                    .parse()
                    .expect("KIOSK_SUBJECT_ID must be a valid integer")
            });

        Self {
            api_url,
            subject_id,
        }
    }
}
