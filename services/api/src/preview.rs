use chrono::Local;
use clap::Args;
use skillforge::error::AppError;
use skillforge::intake::templates;
use skillforge::intake::{ApplicationSubmission, OutboundEmail, ProgramMode, QuerySubmission};

#[derive(Args, Debug, Default)]
pub(crate) struct PreviewArgs {
    /// Render the contact/query emails instead of the application set
    #[arg(long)]
    pub(crate) query: bool,
    /// Print the full HTML bodies, not just the envelopes
    #[arg(long)]
    pub(crate) html: bool,
    /// Staff inbox used for the staff-facing messages
    #[arg(long, default_value = "training-office@example.com")]
    pub(crate) staff: String,
}

/// Render the outbound notification emails for a sample submission so staff
/// can review subjects and copy without touching a relay.
pub(crate) fn run_preview(args: PreviewArgs) -> Result<(), AppError> {
    let emails = if args.query {
        let submission = sample_query();
        vec![
            templates::query_staff_notification(&submission, &args.staff),
            templates::query_confirmation(&submission),
        ]
    } else {
        let submission = sample_application();
        vec![
            templates::application_staff_notification(&submission, &args.staff),
            templates::application_confirmation(&submission),
            templates::application_staff_digest(&submission, &args.staff),
        ]
    };

    for email in &emails {
        render(email, args.html);
    }
    println!(
        "Rendered {} message(s) on {}",
        emails.len(),
        Local::now().date_naive()
    );

    Ok(())
}

fn render(email: &OutboundEmail, include_html: bool) {
    println!("[{}]", email.purpose.label());
    println!("  To:      {}", email.to);
    println!("  Subject: {}", email.subject);
    if include_html {
        println!("  Body:\n{}", email.html_body);
    }
    println!();
}

fn sample_application() -> ApplicationSubmission {
    ApplicationSubmission {
        full_name: "Aarav Sharma".to_string(),
        email_address: "aarav.sharma@example.com".to_string(),
        whatsapp_no: "9876543210".to_string(),
        college_name: "JECRC Foundation".to_string(),
        branch: "Computer Science".to_string(),
        current_semester: "6".to_string(),
        applying_for: "Develop Your Own Cloud".to_string(),
        other_specification: None,
        tentative_dates: "June 10 - July 20".to_string(),
        source: Some("Instagram".to_string()),
        query: Some("Is hostel accommodation available?".to_string()),
    }
}

fn sample_query() -> QuerySubmission {
    QuerySubmission {
        full_name: "Diya Patel".to_string(),
        email: "diya.patel@example.com".to_string(),
        phone: "9123456780".to_string(),
        college: "MBM Engineering College".to_string(),
        query: "Do online students get the same mentor hours?".to_string(),
        form_type: ProgramMode::Online,
    }
}
