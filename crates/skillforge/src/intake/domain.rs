use serde::{Deserialize, Serialize};

/// Human-readable reference minted for each accepted submission so staff can
/// correlate archive entries with the notification emails.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubmissionReference(pub String);

/// Whether the sender is asking about the on-campus or the remote edition of
/// the program.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgramMode {
    #[default]
    Offline,
    Online,
}

impl ProgramMode {
    pub const fn label(self) -> &'static str {
        match self {
            ProgramMode::Offline => "offline",
            ProgramMode::Online => "online",
        }
    }
}

/// Payload posted by the application form. Field names stay camelCase on the
/// wire to keep the original browser contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationSubmission {
    pub full_name: String,
    pub email_address: String,
    pub whatsapp_no: String,
    pub college_name: String,
    pub branch: String,
    pub current_semester: String,
    pub applying_for: String,
    #[serde(default)]
    pub other_specification: Option<String>,
    pub tentative_dates: String,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub query: Option<String>,
}

impl ApplicationSubmission {
    /// Program the applicant is actually asking for, resolving the "others"
    /// escape hatch to its free-text specification.
    pub fn program_label(&self) -> &str {
        if self.applying_for.eq_ignore_ascii_case("others") {
            self.other_specification
                .as_deref()
                .unwrap_or(&self.applying_for)
        } else {
            &self.applying_for
        }
    }
}

/// Payload posted by the contact/query form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuerySubmission {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub college: String,
    pub query: String,
    #[serde(default)]
    pub form_type: ProgramMode,
}
