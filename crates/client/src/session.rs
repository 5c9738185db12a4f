//! Kiosk state: the cached roster and whoever scanned last.

use eindex_core::types::DbId;

use crate::api::ApiClient;
use crate::error::ClientError;
use crate::roster::{FilterOptions, RosterFilter};
use crate::types::{Attendance, Student};

#[derive(Debug, Default)]
pub struct KioskSession {
    roster: Vec<Student>,
    current: Option<Student>,
}

impl KioskSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reload the roster from the server.
    pub async fn refresh_roster(&mut self, client: &ApiClient) -> Result<&[Student], ClientError> {
        let envelope = client.list_students().await?;
        self.roster = envelope.payload.students;
        tracing::debug!(count = self.roster.len(), "Roster refreshed");
        Ok(self.roster.as_slice())
    }

    pub fn roster(&self) -> &[Student] {
        &self.roster
    }

    pub fn filtered(&self, filter: &RosterFilter) -> Vec<&Student> {
        filter.apply(&self.roster)
    }

    pub fn filter_options(&self) -> FilterOptions {
        FilterOptions::from_roster(&self.roster)
    }

    pub fn current(&self) -> Option<&Student> {
        self.current.as_ref()
    }

    pub fn select(&mut self, student: Student) {
        self.current = Some(student);
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Resolve a scanned tag and make that student current.
    ///
    /// An unknown tag clears the selection and returns the 404 error.
    pub async fn handle_tag(
        &mut self,
        client: &ApiClient,
        tag: &str,
    ) -> Result<&Student, ClientError> {
        match client.find_by_rfid(tag).await {
            Ok(envelope) => Ok(&*self.current.insert(envelope.payload.student)),
            Err(err) => {
                self.current = None;
                Err(err)
            }
        }
    }

    /// Record attendance for the current student.
    pub async fn check_in(
        &self,
        client: &ApiClient,
        subject_id: DbId,
    ) -> Result<Attendance, ClientError> {
        let student = self.current.as_ref().ok_or(ClientError::NoStudentSelected)?;
        let envelope = client.record_attendance(student.id, subject_id).await?;
        Ok(envelope.payload.attendance)
    }
}
