//! REST client for the e-index API.
//!
//! One method per route. Every method returns the decoded envelope; non-2xx
//! statuses become [`ClientError::Api`] carrying the server's message.

use eindex_core::types::DbId;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ClientError;
use crate::types::{
    AttendanceList, AttendanceQuery, CreatedAttendance, CreatedRecord, CreatedStudent, Envelope,
    ErrorBody, HealthStatus, NewAttendance, NewRecord, NoPayload, RecordBody, RecordList,
    RecordQuery, StudentBody, StudentForm, StudentList, SubjectList,
};

/// HTTP client bound to one API base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    api_url: String,
}

pub type ClientResult<T> = Result<Envelope<T>, ClientError>;

impl ApiClient {
    /// * `api_url` - Base URL including the `/api` prefix, e.g.
    ///   `http://localhost:3000/api`.
    pub fn new(api_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), api_url)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, api_url: impl Into<String>) -> Self {
        let api_url = api_url.into().trim_end_matches('/').to_string();
        Self { client, api_url }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    // ---- students ----

    pub async fn list_students(&self) -> ClientResult<StudentList> {
        self.get("/students").await
    }

    pub async fn get_student(&self, id: DbId) -> ClientResult<StudentBody> {
        self.get(&format!("/students/{id}")).await
    }

    /// Resolve a scanned badge to its student.
    ///
    /// The tag is sent as a single percent-encoded path segment.
    pub async fn find_by_rfid(&self, tag: &str) -> ClientResult<StudentBody> {
        let url = self.segment_url(&["students", "rfid", tag])?;
        let response = self.client.get(url).send().await?;
        Self::parse_response(response).await
    }

    pub async fn student_records(&self, id: DbId, query: &RecordQuery) -> ClientResult<RecordList> {
        let response = self
            .client
            .get(self.url(&format!("/students/{id}/records")))
            .query(query)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    pub async fn create_student(&self, form: &StudentForm) -> ClientResult<CreatedStudent> {
        self.post("/students", form).await
    }

    pub async fn update_student(&self, id: DbId, form: &StudentForm) -> ClientResult<StudentBody> {
        self.put(&format!("/students/{id}"), form).await
    }

    pub async fn delete_student(&self, id: DbId) -> ClientResult<NoPayload> {
        self.delete(&format!("/students/{id}")).await
    }

    // ---- records ----

    pub async fn list_records(
        &self,
        student_id: DbId,
        query: &RecordQuery,
    ) -> ClientResult<RecordList> {
        let response = self
            .client
            .get(self.url(&format!("/records/{student_id}/records")))
            .query(query)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    pub async fn get_record(&self, student_id: DbId, id: DbId) -> ClientResult<RecordBody> {
        self.get(&format!("/records/{student_id}/records/{id}")).await
    }

    pub async fn create_record(
        &self,
        student_id: DbId,
        record: &NewRecord,
    ) -> ClientResult<CreatedRecord> {
        self.post(&format!("/records/{student_id}/records"), record)
            .await
    }

    pub async fn update_record(
        &self,
        student_id: DbId,
        id: DbId,
        record: &NewRecord,
    ) -> ClientResult<RecordBody> {
        self.put(&format!("/records/{student_id}/records/{id}"), record)
            .await
    }

    pub async fn delete_record(&self, student_id: DbId, id: DbId) -> ClientResult<NoPayload> {
        self.delete(&format!("/records/{student_id}/records/{id}"))
            .await
    }

    // ---- attendance ----

    pub async fn list_subjects(&self) -> ClientResult<SubjectList> {
        self.get("/attendance/subjects").await
    }

    pub async fn list_attendance(
        &self,
        student_id: DbId,
        subject_id: Option<DbId>,
    ) -> ClientResult<AttendanceList> {
        let mut request = self
            .client
            .get(self.url(&format!("/attendance/students/{student_id}")));
        if let Some(subject_id) = subject_id {
            request = request.query(&AttendanceQuery { subject_id });
        }
        Self::parse_response(request.send().await?).await
    }

    /// Record a scan. The server stamps the time.
    pub async fn record_attendance(
        &self,
        student_id: DbId,
        subject_id: DbId,
    ) -> ClientResult<CreatedAttendance> {
        self.post(
            "/attendance",
            &NewAttendance {
                student_id,
                subject_id,
            },
        )
        .await
    }

    pub async fn delete_attendance(&self, id: DbId) -> ClientResult<NoPayload> {
        self.delete(&format!("/attendance/{id}")).await
    }

    /// `GET /health`, served beside (not under) the `/api` prefix.
    pub async fn health(&self) -> ClientResult<HealthStatus> {
        let root = self.api_url.strip_suffix("/api").unwrap_or(&self.api_url);
        let response = self.client.get(format!("{root}/health")).send().await?;
        Self::parse_response(response).await
    }

    // ---- private helpers ----

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }

    /// Append percent-encoded path segments to the base URL.
    fn segment_url(&self, segments: &[&str]) -> Result<reqwest::Url, ClientError> {
        let invalid = || ClientError::InvalidUrl(self.api_url.clone());
        let mut url = reqwest::Url::parse(&self.api_url).map_err(|_| invalid())?;
        url.path_segments_mut()
            .map_err(|()| invalid())?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.client.get(self.url(path)).send().await?;
        Self::parse_response(response).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> ClientResult<T> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::parse_response(response).await
    }

    async fn put<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> ClientResult<T> {
        let response = self.client.put(self.url(path)).json(body).send().await?;
        Self::parse_response(response).await
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.client.delete(self.url(path)).send().await?;
        Self::parse_response(response).await
    }

    /// Return the response unchanged on 2xx, otherwise a
    /// [`ClientError::Api`] with the envelope message (or raw body).
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|e| e.message)
            .unwrap_or(body);
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn parse_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}
