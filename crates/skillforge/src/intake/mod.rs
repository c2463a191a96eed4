//! Submission intake: validation, archival, and outbound email dispatch for
//! the application and contact/query forms.
//!
//! The HTTP binary wires a real SMTP transport and an in-memory archive into
//! [`SubmissionService`]; the tests drive the same service through recording
//! and failing doubles.

pub mod archive;
pub mod domain;
pub mod mailer;
pub mod router;
pub mod service;
pub mod templates;
pub mod validate;

#[cfg(test)]
mod tests;

pub use archive::{ArchiveError, SubmissionArchive, SubmissionDetails, SubmissionRecord};
pub use domain::{ApplicationSubmission, ProgramMode, QuerySubmission, SubmissionReference};
pub use mailer::{EmailPurpose, MailError, MailTransport, OutboundEmail, SmtpMailer};
pub use router::intake_router;
pub use service::{
    DispatchReport, SendOutcome, SubmissionError, SubmissionReceipt, SubmissionService,
};
pub use validate::{FieldError, ValidationErrors};
