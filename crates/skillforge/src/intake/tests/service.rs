use std::sync::Arc;

use super::common::*;
use crate::intake::archive::SubmissionDetails;
use crate::intake::mailer::EmailPurpose;
use crate::intake::service::{SubmissionError, SubmissionService};

#[tokio::test]
async fn application_fan_out_runs_in_the_original_order() {
    let (service, mailer, archive) = build_service();

    let receipt = service
        .submit_application(application())
        .await
        .expect("submission accepted");

    assert!(receipt.reference.0.starts_with("app-"));
    assert!(receipt.dispatch.fully_delivered());

    let sent = mailer.sent();
    let purposes: Vec<_> = sent.iter().map(|email| email.purpose).collect();
    assert_eq!(
        purposes,
        vec![
            EmailPurpose::StaffNotification,
            EmailPurpose::ApplicantConfirmation,
            EmailPurpose::StaffDigest,
        ]
    );
    assert_eq!(sent[0].to, STAFF);
    assert_eq!(sent[1].to, "aarav.sharma@example.com");
    assert_eq!(sent[2].to, STAFF);

    let records = archive.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].reference, receipt.reference);
    assert_eq!(records[0].details.kind(), "application");
}

#[tokio::test]
async fn query_fan_out_is_staff_then_confirmation() {
    let (service, mailer, archive) = build_service();

    let receipt = service.submit_query(query()).await.expect("query accepted");

    assert!(receipt.reference.0.starts_with("query-"));
    let sent = mailer.sent();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0].purpose, EmailPurpose::StaffNotification);
    assert_eq!(sent[1].purpose, EmailPurpose::ApplicantConfirmation);
    assert_eq!(sent[1].to, "diya.patel@example.com");

    assert!(matches!(
        archive.records()[0].details,
        SubmissionDetails::Query(_)
    ));
}

#[tokio::test]
async fn invalid_submission_never_reaches_the_relay() {
    let (service, mailer, archive) = build_service();

    let error = service
        .submit_application(invalid_application())
        .await
        .expect_err("validation refuses the payload");

    match error {
        SubmissionError::Invalid(errors) => {
            assert!(errors
                .fields
                .iter()
                .any(|field| field.field == "emailAddress"));
        }
        other => panic!("expected validation error, got {other:?}"),
    }

    assert!(mailer.sent().is_empty());
    assert!(archive.records().is_empty());
}

#[tokio::test]
async fn first_send_failure_does_not_abort_the_rest() {
    let mailer = FlakyMailer::failing(vec![EmailPurpose::StaffNotification]);
    let archive = MemoryArchive::default();
    let service = SubmissionService::new(
        Arc::new(mailer.clone()),
        Arc::new(archive.clone()),
        STAFF,
    );

    let receipt = service
        .submit_application(application())
        .await
        .expect("submission still accepted");

    assert!(!receipt.dispatch.fully_delivered());
    assert_eq!(mailer.attempted().len(), 3, "later sends still attempted");

    let failures = receipt.dispatch.failures();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].purpose, EmailPurpose::StaffNotification);
    assert!(receipt
        .dispatch
        .failure_summary()
        .contains("staff_notification"));
}

#[tokio::test]
async fn archive_failure_refuses_the_submission() {
    let mailer = RecordingMailer::default();
    let service = SubmissionService::new(
        Arc::new(mailer.clone()),
        Arc::new(UnavailableArchive),
        STAFF,
    );

    let error = service
        .submit_application(application())
        .await
        .expect_err("archive failure bubbles");
    assert!(matches!(error, SubmissionError::Archive(_)));
    assert!(mailer.sent().is_empty(), "no email before the record exists");
}

#[tokio::test]
async fn references_are_distinct_per_submission() {
    let (service, _, _) = build_service();

    let first = service
        .submit_application(application())
        .await
        .expect("first accepted");
    let second = service
        .submit_application(others_application())
        .await
        .expect("second accepted");

    assert_ne!(first.reference, second.reference);
}
