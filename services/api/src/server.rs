use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemorySubmissionArchive};
use crate::routes::site_router;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use skillforge::config::AppConfig;
use skillforge::error::AppError;
use skillforge::intake::{SmtpMailer, SubmissionService};
use skillforge::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let mailer = Arc::new(SmtpMailer::from_config(&config.mail)?);
    let archive = Arc::new(InMemorySubmissionArchive::default());
    let service = Arc::new(SubmissionService::new(
        mailer,
        archive,
        config.mail.staff_recipient.clone(),
    ));

    let app = site_router(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "training program site ready");

    axum::serve(listener, app).await?;
    Ok(())
}
