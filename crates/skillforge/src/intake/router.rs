use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde_json::json;

use super::archive::SubmissionArchive;
use super::domain::{ApplicationSubmission, QuerySubmission};
use super::mailer::MailTransport;
use super::service::{SubmissionError, SubmissionReceipt, SubmissionService};

/// Router builder exposing the form submission endpoints.
pub fn intake_router<M, A>(service: Arc<SubmissionService<M, A>>) -> Router
where
    M: MailTransport + 'static,
    A: SubmissionArchive + 'static,
{
    Router::new()
        .route("/api/v1/applications", post(application_handler::<M, A>))
        .route("/api/v1/queries", post(query_handler::<M, A>))
        .with_state(service)
}

pub(crate) async fn application_handler<M, A>(
    State(service): State<Arc<SubmissionService<M, A>>>,
    axum::Json(submission): axum::Json<ApplicationSubmission>,
) -> Response
where
    M: MailTransport + 'static,
    A: SubmissionArchive + 'static,
{
    acknowledge(
        service.submit_application(submission).await,
        "Application submitted successfully",
        "Failed to submit application",
    )
}

pub(crate) async fn query_handler<M, A>(
    State(service): State<Arc<SubmissionService<M, A>>>,
    axum::Json(submission): axum::Json<QuerySubmission>,
) -> Response
where
    M: MailTransport + 'static,
    A: SubmissionArchive + 'static,
{
    acknowledge(
        service.submit_query(submission).await,
        "Query submitted successfully",
        "Failed to submit query",
    )
}

fn acknowledge(
    outcome: Result<SubmissionReceipt, SubmissionError>,
    accepted: &str,
    failed: &str,
) -> Response {
    match outcome {
        Ok(receipt) if receipt.dispatch.fully_delivered() => {
            let payload = json!({
                "message": accepted,
                "reference": receipt.reference.0,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Ok(receipt) => {
            let payload = json!({
                "message": failed,
                "error": receipt.dispatch.failure_summary(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
        Err(SubmissionError::Invalid(errors)) => {
            let payload = json!({
                "message": failed,
                "errors": errors.fields,
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(SubmissionError::Archive(error)) => {
            let payload = json!({
                "message": failed,
                "error": error.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
