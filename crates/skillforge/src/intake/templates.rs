//! Outbound email bodies for the intake notifications.
//!
//! Bodies are self-contained HTML fragments with inline styling so they
//! survive the common webmail clients. Every user-supplied value is escaped
//! before interpolation.

use super::domain::{ApplicationSubmission, QuerySubmission};
use super::mailer::{EmailPurpose, OutboundEmail};

const PROGRAM_NAME: &str = "Summer Industrial Training Program";

/// Full-detail notification sent to the training office inbox.
pub fn application_staff_notification(
    submission: &ApplicationSubmission,
    staff_recipient: &str,
) -> OutboundEmail {
    let rows = field_rows(&[
        ("Full name", &submission.full_name),
        ("Email address", &submission.email_address),
        ("WhatsApp number", &submission.whatsapp_no),
        ("College", &submission.college_name),
        ("Branch", &submission.branch),
        ("Current semester", &submission.current_semester),
        ("Applying for", submission.program_label()),
        ("Tentative dates", &submission.tentative_dates),
        ("Source", submission.source.as_deref().unwrap_or("-")),
        ("Query", submission.query.as_deref().unwrap_or("-")),
    ]);

    OutboundEmail {
        purpose: EmailPurpose::StaffNotification,
        to: staff_recipient.to_string(),
        subject: format!(
            "New Industrial Training Program Application - {}",
            submission.full_name
        ),
        html_body: format!(
            "{opening}\
             <h2 style=\"color: #dc2626;\">New Application Received</h2>\
             <table cellpadding=\"6\" style=\"border-collapse: collapse;\">{rows}</table>\
             {closing}",
            opening = body_opening(),
            closing = body_closing(),
        ),
    }
}

/// Acknowledgement sent back to the applicant.
pub fn application_confirmation(submission: &ApplicationSubmission) -> OutboundEmail {
    OutboundEmail {
        purpose: EmailPurpose::ApplicantConfirmation,
        to: submission.email_address.clone(),
        subject: format!("Application Received - {PROGRAM_NAME}"),
        html_body: format!(
            "{opening}\
             <h2 style=\"color: #dc2626;\">Thank You for Your Application</h2>\
             <p>Dear {name},</p>\
             <p>We have received your application for the {PROGRAM_NAME}. Our team will \
             review your application and get back to you soon.</p>\
             <p>Application Details:</p>\
             <ul>\
             <li>Program: {program}</li>\
             <li>Tentative Dates: {dates}</li>\
             </ul>\
             <p>If you have any questions, feel free to contact us.</p>\
             <p>Best regards,<br>{PROGRAM_NAME} Team</p>\
             {closing}",
            opening = body_opening(),
            name = escape(&submission.full_name),
            program = escape(submission.program_label()),
            dates = escape(&submission.tentative_dates),
            closing = body_closing(),
        ),
    }
}

/// Second staff copy, a short line-per-field digest for quick triage.
pub fn application_staff_digest(
    submission: &ApplicationSubmission,
    staff_recipient: &str,
) -> OutboundEmail {
    let lines = field_lines(&[
        ("Name", &submission.full_name),
        ("WhatsApp No", &submission.whatsapp_no),
        ("College", &submission.college_name),
        ("Branch", &submission.branch),
        ("Semester", &submission.current_semester),
        ("Applying for", submission.program_label()),
        ("Tentative dates", &submission.tentative_dates),
        ("Source", submission.source.as_deref().unwrap_or("-")),
        ("Query", submission.query.as_deref().unwrap_or("-")),
    ]);

    OutboundEmail {
        purpose: EmailPurpose::StaffDigest,
        to: staff_recipient.to_string(),
        subject: format!("Application Received - {PROGRAM_NAME}"),
        html_body: format!(
            "{opening}\
             <h2 style=\"color: #dc2626;\">New Application Received</h2>\
             {lines}\
             {closing}",
            opening = body_opening(),
            closing = body_closing(),
        ),
    }
}

/// Query-form notification for the training office inbox.
pub fn query_staff_notification(
    submission: &QuerySubmission,
    staff_recipient: &str,
) -> OutboundEmail {
    let rows = field_rows(&[
        ("Full name", &submission.full_name),
        ("Email", &submission.email),
        ("Phone", &submission.phone),
        ("College", &submission.college),
        ("Program mode", submission.form_type.label()),
        ("Query", &submission.query),
    ]);

    OutboundEmail {
        purpose: EmailPurpose::StaffNotification,
        to: staff_recipient.to_string(),
        subject: format!("New Program Query - {}", submission.full_name),
        html_body: format!(
            "{opening}\
             <h2 style=\"color: #dc2626;\">New Query Received</h2>\
             <table cellpadding=\"6\" style=\"border-collapse: collapse;\">{rows}</table>\
             {closing}",
            opening = body_opening(),
            closing = body_closing(),
        ),
    }
}

/// Acknowledgement sent back to whoever raised the query.
pub fn query_confirmation(submission: &QuerySubmission) -> OutboundEmail {
    OutboundEmail {
        purpose: EmailPurpose::ApplicantConfirmation,
        to: submission.email.clone(),
        subject: format!("Query Received - {PROGRAM_NAME}"),
        html_body: format!(
            "{opening}\
             <h2 style=\"color: #dc2626;\">We Have Your Query</h2>\
             <p>Dear {name},</p>\
             <p>Thank you for reaching out about the {mode} {PROGRAM_NAME}. Our team \
             will get back to you shortly.</p>\
             <p>Your query:</p>\
             <blockquote>{query}</blockquote>\
             <p>Best regards,<br>{PROGRAM_NAME} Team</p>\
             {closing}",
            opening = body_opening(),
            name = escape(&submission.full_name),
            mode = submission.form_type.label(),
            query = escape(&submission.query),
            closing = body_closing(),
        ),
    }
}

fn body_opening() -> &'static str {
    "<div style=\"font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto; \
     padding: 20px;\">"
}

fn body_closing() -> &'static str {
    "</div>"
}

fn field_rows(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(label, value)| {
            format!(
                "<tr><th align=\"left\">{label}</th><td>{}</td></tr>",
                escape(value)
            )
        })
        .collect()
}

fn field_lines(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(label, value)| format!("<p>{label}: {}</p>", escape(value)))
        .collect()
}

fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intake::domain::ProgramMode;

    const STAFF: &str = "training-office@example.com";

    fn application() -> ApplicationSubmission {
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
            query: None,
        }
    }

    fn query() -> QuerySubmission {
        QuerySubmission {
            full_name: "Diya Patel".to_string(),
            email: "diya.patel@example.com".to_string(),
            phone: "9123456780".to_string(),
            college: "MBM Engineering College".to_string(),
            query: "Is hostel accommodation available?".to_string(),
            form_type: ProgramMode::Online,
        }
    }

    #[test]
    fn staff_notification_carries_every_field() {
        let email = application_staff_notification(&application(), STAFF);
        assert_eq!(email.to, STAFF);
        assert_eq!(
            email.subject,
            "New Industrial Training Program Application - Aarav Sharma"
        );
        for value in [
            "Aarav Sharma",
            "aarav.sharma@example.com",
            "9876543210",
            "JECRC Foundation",
            "Cloud Computing",
            "June 10 - July 20",
            "Instagram",
        ] {
            assert!(email.html_body.contains(value), "missing {value}");
        }
    }

    #[test]
    fn confirmation_resolves_the_others_program_choice() {
        let mut submission = application();
        submission.applying_for = "others".to_string();
        submission.other_specification = Some("Machine Learning Ops".to_string());

        let email = application_confirmation(&submission);
        assert_eq!(email.to, submission.email_address);
        assert!(email.html_body.contains("Machine Learning Ops"));
        assert!(!email.html_body.contains("Program: others"));
    }

    #[test]
    fn digest_lists_the_triage_fields() {
        let email = application_staff_digest(&application(), STAFF);
        assert_eq!(email.purpose, EmailPurpose::StaffDigest);
        assert!(email.html_body.contains("WhatsApp No: 9876543210"));
        assert!(email.html_body.contains("Semester: 6"));
    }

    #[test]
    fn query_emails_mention_the_program_mode() {
        let staff = query_staff_notification(&query(), STAFF);
        assert!(staff.html_body.contains("online"));

        let confirmation = query_confirmation(&query());
        assert_eq!(confirmation.to, "diya.patel@example.com");
        assert!(confirmation.html_body.contains("online"));
    }

    #[test]
    fn user_text_is_escaped() {
        let mut submission = query();
        submission.query = "<script>alert('hi')</script>".to_string();
        let email = query_staff_notification(&submission, STAFF);
        assert!(!email.html_body.contains("<script>"));
        assert!(email.html_body.contains("&lt;script&gt;"));
    }
}
