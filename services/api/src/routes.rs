use crate::infra::AppState;
use crate::pages;
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse};
use axum::Extension;
use axum::Json;
use serde_json::json;
use skillforge::intake::{intake_router, MailTransport, SubmissionArchive, SubmissionService};
use std::sync::Arc;

pub(crate) fn site_router<M, A>(service: Arc<SubmissionService<M, A>>) -> axum::Router
where
    M: MailTransport + 'static,
    A: SubmissionArchive + 'static,
{
    intake_router(service)
        .route("/", axum::routing::get(home_page))
        .route("/projects", axum::routing::get(projects_page))
        .route("/application-form", axum::routing::get(application_page))
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn home_page() -> Html<String> {
    Html(pages::home())
}

pub(crate) async fn projects_page() -> Html<String> {
    Html(pages::projects())
}

pub(crate) async fn application_page() -> Html<String> {
    Html(pages::application())
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
