mod cli;
mod infra;
mod pages;
mod preview;
mod routes;
mod server;

use skillforge::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
