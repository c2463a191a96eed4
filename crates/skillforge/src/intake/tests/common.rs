use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::response::Response;
use serde_json::Value;

use crate::intake::archive::{ArchiveError, SubmissionArchive, SubmissionRecord};
use crate::intake::domain::{ApplicationSubmission, ProgramMode, QuerySubmission};
use crate::intake::mailer::{EmailPurpose, MailError, MailTransport, OutboundEmail};
use crate::intake::service::SubmissionService;

pub(super) const STAFF: &str = "training-office@example.com";

pub(super) fn application() -> ApplicationSubmission {
    ApplicationSubmission {
        full_name: "Aarav Sharma".to_string(),
        email_address: "aarav.sharma@example.com".to_string(),
        whatsapp_no: "9876543210".to_string(),
        college_name: "JECRC Foundation".to_string(),
        branch: "Computer Science".to_string(),
        current_semester: "6".to_string(),
        applying_for: "Cloud Computing".to_string(),
        other_specification: None,
        tentative_dates: "June 10 - July 20".to_string(),
        source: Some("Instagram".to_string()),
        query: Some("Is accommodation available?".to_string()),
    }
}

pub(super) fn others_application() -> ApplicationSubmission {
    let mut submission = application();
    submission.applying_for = "others".to_string();
    submission.other_specification = Some("Machine Learning Ops".to_string());
    submission
}

pub(super) fn invalid_application() -> ApplicationSubmission {
    let mut submission = application();
    submission.email_address = String::new();
    submission
}

pub(super) fn query() -> QuerySubmission {
    QuerySubmission {
        full_name: "Diya Patel".to_string(),
        email: "diya.patel@example.com".to_string(),
        phone: "9123456780".to_string(),
        college: "MBM Engineering College".to_string(),
        query: "Is hostel accommodation available?".to_string(),
        form_type: ProgramMode::Offline,
    }
}

#[derive(Default, Clone)]
pub(super) struct RecordingMailer {
    sent: Arc<Mutex<Vec<OutboundEmail>>>,
}

impl RecordingMailer {
    pub(super) fn sent(&self) -> Vec<OutboundEmail> {
        self.sent.lock().expect("mailer mutex poisoned").clone()
    }
}

#[async_trait]
impl MailTransport for RecordingMailer {
    async fn deliver(&self, email: &OutboundEmail) -> Result<(), MailError> {
        self.sent
            .lock()
            .expect("mailer mutex poisoned")
            .push(email.clone());
        Ok(())
    }
}

/// Records every attempt but fails the configured purposes, so tests can
/// assert that one relay failure does not abort the rest of the fan-out.
#[derive(Default, Clone)]
pub(super) struct FlakyMailer {
    fail: Arc<Vec<EmailPurpose>>,
    attempted: Arc<Mutex<Vec<OutboundEmail>>>,
}

impl FlakyMailer {
    pub(super) fn failing(purposes: Vec<EmailPurpose>) -> Self {
        Self {
            fail: Arc::new(purposes),
            attempted: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub(super) fn attempted(&self) -> Vec<OutboundEmail> {
        self.attempted.lock().expect("mailer mutex poisoned").clone()
    }
}

#[async_trait]
impl MailTransport for FlakyMailer {
    async fn deliver(&self, email: &OutboundEmail) -> Result<(), MailError> {
        self.attempted
            .lock()
            .expect("mailer mutex poisoned")
            .push(email.clone());
        if self.fail.contains(&email.purpose) {
            return Err(MailError::Unavailable("relay refused connection".to_string()));
        }
        Ok(())
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryArchive {
    records: Arc<Mutex<Vec<SubmissionRecord>>>,
}

impl MemoryArchive {
    pub(super) fn records(&self) -> Vec<SubmissionRecord> {
        self.records.lock().expect("archive mutex poisoned").clone()
    }
}

impl SubmissionArchive for MemoryArchive {
    fn record(&self, record: SubmissionRecord) -> Result<(), ArchiveError> {
        self.records
            .lock()
            .expect("archive mutex poisoned")
            .push(record);
        Ok(())
    }

    fn recent(&self, limit: usize) -> Result<Vec<SubmissionRecord>, ArchiveError> {
        let guard = self.records.lock().expect("archive mutex poisoned");
        Ok(guard.iter().rev().take(limit).cloned().collect())
    }
}

pub(super) struct UnavailableArchive;

impl SubmissionArchive for UnavailableArchive {
    fn record(&self, _record: SubmissionRecord) -> Result<(), ArchiveError> {
        Err(ArchiveError::Unavailable("database offline".to_string()))
    }

    fn recent(&self, _limit: usize) -> Result<Vec<SubmissionRecord>, ArchiveError> {
        Err(ArchiveError::Unavailable("database offline".to_string()))
    }
}

pub(super) fn build_service() -> (
    Arc<SubmissionService<RecordingMailer, MemoryArchive>>,
    RecordingMailer,
    MemoryArchive,
) {
    let mailer = RecordingMailer::default();
    let archive = MemoryArchive::default();
    let service = Arc::new(SubmissionService::new(
        Arc::new(mailer.clone()),
        Arc::new(archive.clone()),
        STAFF,
    ));
    (service, mailer, archive)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
