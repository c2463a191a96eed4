use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use super::domain::{ApplicationSubmission, QuerySubmission};

/// A single field that failed a presence or format check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Aggregated per-field failures for one submission. A submission that fails
/// validation must never reach the mail relay.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("submission failed validation on {} field(s)", .fields.len())]
pub struct ValidationErrors {
    pub fields: Vec<FieldError>,
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("pattern compiles"))
}

/// True when the address has the `user@domain.tld` shape the forms accept.
pub fn is_valid_email(value: &str) -> bool {
    email_pattern().is_match(value.trim())
}

/// Strip formatting characters so only the digits are counted.
pub fn normalize_phone(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

/// A phone number is acceptable when exactly 10 digits remain after
/// normalization.
pub fn is_ten_digit_phone(value: &str) -> bool {
    normalize_phone(value).len() == 10
}

#[derive(Default)]
struct Checker {
    fields: Vec<FieldError>,
}

impl Checker {
    fn push(&mut self, field: &'static str, message: String) {
        self.fields.push(FieldError { field, message });
    }

    fn require(&mut self, field: &'static str, label: &str, value: &str) {
        if value.trim().is_empty() {
            self.push(field, format!("{label} is required"));
        }
    }

    fn email(&mut self, field: &'static str, value: &str) {
        if value.trim().is_empty() {
            self.push(field, "Email is required".to_string());
        } else if !is_valid_email(value) {
            self.push(field, "Invalid email format".to_string());
        }
    }

    fn phone(&mut self, field: &'static str, value: &str) {
        if value.trim().is_empty() {
            self.push(field, "Phone number is required".to_string());
        } else if !is_ten_digit_phone(value) {
            self.push(field, "Phone number must be 10 digits".to_string());
        }
    }

    fn finish(self) -> Result<(), ValidationErrors> {
        if self.fields.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors {
                fields: self.fields,
            })
        }
    }
}

/// Run the application form's checks server-side: required fields, email
/// shape, and the 10-digit WhatsApp number. `otherSpecification` becomes
/// mandatory once the applicant picks "others".
pub fn validate_application(submission: &ApplicationSubmission) -> Result<(), ValidationErrors> {
    let mut checks = Checker::default();
    checks.require("fullName", "Full Name", &submission.full_name);
    checks.email("emailAddress", &submission.email_address);
    checks.phone("whatsappNo", &submission.whatsapp_no);
    checks.require("collegeName", "College name", &submission.college_name);
    checks.require("branch", "Branch", &submission.branch);
    checks.require("currentSemester", "Current semester", &submission.current_semester);
    checks.require("applyingFor", "Program choice", &submission.applying_for);
    if submission.applying_for.eq_ignore_ascii_case("others") {
        let other = submission.other_specification.as_deref().unwrap_or("");
        checks.require("otherSpecification", "Program specification", other);
    }
    checks.require("tentativeDates", "Tentative dates", &submission.tentative_dates);
    checks.finish()
}

/// Run the contact/query form's checks server-side.
pub fn validate_query(submission: &QuerySubmission) -> Result<(), ValidationErrors> {
    let mut checks = Checker::default();
    checks.require("fullName", "Full Name", &submission.full_name);
    checks.email("email", &submission.email);
    checks.phone("phone", &submission.phone);
    checks.require("college", "College name", &submission.college);
    checks.require("query", "Query", &submission.query);
    checks.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intake::domain::ProgramMode;

    fn query() -> QuerySubmission {
        QuerySubmission {
            full_name: "Diya Patel".to_string(),
            email: "diya.patel@example.com".to_string(),
            phone: "9876543210".to_string(),
            college: "MBM Engineering College".to_string(),
            query: "Is hostel accommodation available?".to_string(),
            form_type: ProgramMode::Offline,
        }
    }

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

    #[test]
    fn accepts_well_formed_addresses() {
        assert!(is_valid_email("user@domain.tld"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn phone_requires_exactly_ten_digits() {
        assert!(is_ten_digit_phone("9876543210"));
        assert!(is_ten_digit_phone("98765-43210"));
        assert!(is_ten_digit_phone("(987) 654 3210"));
        assert!(!is_ten_digit_phone("12345"));
        assert!(!is_ten_digit_phone("12345678901"));
    }

    #[test]
    fn valid_submissions_pass() {
        assert!(validate_application(&application()).is_ok());
        assert!(validate_query(&query()).is_ok());
    }

    #[test]
    fn missing_required_fields_are_reported_per_field() {
        let mut submission = application();
        submission.full_name = "  ".to_string();
        submission.tentative_dates = String::new();

        let errors = validate_application(&submission).expect_err("invalid");
        let fields: Vec<_> = errors.fields.iter().map(|error| error.field).collect();
        assert_eq!(fields, vec!["fullName", "tentativeDates"]);
        assert_eq!(errors.fields[0].message, "Full Name is required");
    }

    #[test]
    fn malformed_email_and_phone_are_flagged() {
        let mut submission = query();
        submission.email = "diya@".to_string();
        submission.phone = "12345".to_string();

        let errors = validate_query(&submission).expect_err("invalid");
        assert!(errors
            .fields
            .iter()
            .any(|error| error.field == "email" && error.message == "Invalid email format"));
        assert!(errors.fields.iter().any(|error| {
            error.field == "phone" && error.message == "Phone number must be 10 digits"
        }));
    }

    #[test]
    fn others_choice_requires_a_specification() {
        let mut submission = application();
        submission.applying_for = "others".to_string();
        submission.other_specification = None;

        let errors = validate_application(&submission).expect_err("invalid");
        assert!(errors
            .fields
            .iter()
            .any(|error| error.field == "otherSpecification"));

        submission.other_specification = Some("Machine Learning Ops".to_string());
        assert!(validate_application(&submission).is_ok());
    }
}
