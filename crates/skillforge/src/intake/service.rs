use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::warn;

use super::archive::{ArchiveError, SubmissionArchive, SubmissionDetails, SubmissionRecord};
use super::domain::{ApplicationSubmission, QuerySubmission, SubmissionReference};
use super::mailer::{EmailPurpose, MailTransport, OutboundEmail};
use super::templates;
use super::validate::{validate_application, validate_query, ValidationErrors};

/// Service composing validation, archival, and the outbound email fan-out.
pub struct SubmissionService<M, A> {
    mailer: Arc<M>,
    archive: Arc<A>,
    staff_recipient: String,
}

static SUBMISSION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_reference(prefix: &str) -> SubmissionReference {
    let id = SUBMISSION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    SubmissionReference(format!("{prefix}-{id:06}"))
}

/// Delivery outcome for a single outbound message.
#[derive(Debug, Clone)]
pub struct SendOutcome {
    pub purpose: EmailPurpose,
    pub recipient: String,
    pub error: Option<String>,
}

impl SendOutcome {
    pub fn delivered(&self) -> bool {
        self.error.is_none()
    }
}

/// Outcome of the whole fan-out for one submission. Each send is attempted
/// and recorded independently; one relay failure does not abort the rest.
#[derive(Debug, Clone, Default)]
pub struct DispatchReport {
    pub outcomes: Vec<SendOutcome>,
}

impl DispatchReport {
    pub fn fully_delivered(&self) -> bool {
        self.outcomes.iter().all(SendOutcome::delivered)
    }

    pub fn failures(&self) -> Vec<&SendOutcome> {
        self.outcomes
            .iter()
            .filter(|outcome| !outcome.delivered())
            .collect()
    }

    pub fn failure_summary(&self) -> String {
        self.failures()
            .iter()
            .map(|outcome| {
                format!(
                    "{}: {}",
                    outcome.purpose.label(),
                    outcome.error.as_deref().unwrap_or("unknown failure")
                )
            })
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Acknowledgement handed back to the HTTP layer.
#[derive(Debug, Clone)]
pub struct SubmissionReceipt {
    pub reference: SubmissionReference,
    pub dispatch: DispatchReport,
}

/// Error raised by the submission service. Failed sends are data in the
/// receipt, not an error; only validation and archival can refuse a
/// submission outright.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error(transparent)]
    Invalid(#[from] ValidationErrors),
    #[error(transparent)]
    Archive(#[from] ArchiveError),
}

impl<M, A> SubmissionService<M, A>
where
    M: MailTransport + 'static,
    A: SubmissionArchive + 'static,
{
    pub fn new(mailer: Arc<M>, archive: Arc<A>, staff_recipient: impl Into<String>) -> Self {
        Self {
            mailer,
            archive,
            staff_recipient: staff_recipient.into(),
        }
    }

    /// Accept an application form payload: validate, archive, then send the
    /// staff notification, the applicant confirmation, and the staff digest
    /// in that order.
    pub async fn submit_application(
        &self,
        submission: ApplicationSubmission,
    ) -> Result<SubmissionReceipt, SubmissionError> {
        validate_application(&submission)?;

        let reference = next_reference("app");
        self.archive.record(SubmissionRecord {
            reference: reference.clone(),
            received_at: Utc::now(),
            details: SubmissionDetails::Application(submission.clone()),
        })?;

        let emails = vec![
            templates::application_staff_notification(&submission, &self.staff_recipient),
            templates::application_confirmation(&submission),
            templates::application_staff_digest(&submission, &self.staff_recipient),
        ];
        let dispatch = self.dispatch(&reference, emails).await;

        Ok(SubmissionReceipt {
            reference,
            dispatch,
        })
    }

    /// Accept a contact/query payload: validate, archive, then send the
    /// staff notification and the confirmation.
    pub async fn submit_query(
        &self,
        submission: QuerySubmission,
    ) -> Result<SubmissionReceipt, SubmissionError> {
        validate_query(&submission)?;

        let reference = next_reference("query");
        self.archive.record(SubmissionRecord {
            reference: reference.clone(),
            received_at: Utc::now(),
            details: SubmissionDetails::Query(submission.clone()),
        })?;

        let emails = vec![
            templates::query_staff_notification(&submission, &self.staff_recipient),
            templates::query_confirmation(&submission),
        ];
        let dispatch = self.dispatch(&reference, emails).await;

        Ok(SubmissionReceipt {
            reference,
            dispatch,
        })
    }

    async fn dispatch(
        &self,
        reference: &SubmissionReference,
        emails: Vec<OutboundEmail>,
    ) -> DispatchReport {
        let mut report = DispatchReport::default();
        for email in emails {
            let error = match self.mailer.deliver(&email).await {
                Ok(()) => None,
                Err(err) => {
                    warn!(
                        reference = %reference.0,
                        purpose = email.purpose.label(),
                        %err,
                        "outbound email failed"
                    );
                    Some(err.to_string())
                }
            };
            report.outcomes.push(SendOutcome {
                purpose: email.purpose,
                recipient: email.to,
                error,
            });
        }
        report
    }
}
