mod api;
mod app;
mod config;
mod container;
mod domain;
mod infrastructure;
mod opentelemetry;
mod services;

use config::AppConfig;
use container::Container;
use infrastructure::client::ApiClient;

use actix_web::HttpServer;
use std::sync::Arc;
use thiserror::Error;

#[cfg(test)]
mod tests;

#[derive(Error, Debug)]
pub enum StartupError {
    #[error(transparent)]
    Configuration(#[from] figment::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    OTel(#[from] opentelemetry::OTelError),
    #[error("cannot build the upstream client: {0}")]
    Upstream(#[from] reqwest::Error),
    #[error("jsonwebtoken.secret must be set")]
    MissingSecret,
}

async fn run() -> Result<(), StartupError> {
    let config = AppConfig::load()?;

    if config.jsonwebtoken.secret.is_empty() {
        return Err(StartupError::MissingSecret);
    }

    let provider = opentelemetry::configure(&config.service, &config.logging)?;

    let client = ApiClient::new(&config.upstream)?;

    let container = Arc::new(Container::new(client, &config.jsonwebtoken.secret));
    let origins = config.cors.origins.clone();

    tracing::info!(
        upstream = %config.upstream.base_url,
        port = config.service.port,
        "starting {}",
        config.service.name
    );

    HttpServer::new(move || app::create(Arc::clone(&container), origins.clone()))
        .bind((config.service.host.as_str(), config.service.port))?
        .run()
        .await?;

    opentelemetry::shutdown(provider)?;

    Ok(())
}

#[actix_web::main]
async fn main() {
    if let Err(err) = run().await {
        panic!("{err}");
    }
}
