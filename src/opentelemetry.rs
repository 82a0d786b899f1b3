use crate::config::{LoggingConfig, ServiceConfig};

use opentelemetry::trace::{TraceError, TracerProvider};
use opentelemetry::{KeyValue, global};
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::{
    Resource, error::OTelSdkError, propagation::TraceContextPropagator, trace::SdkTracerProvider,
};
use opentelemetry_semantic_conventions::resource;
use thiserror::Error;
use tracing::subscriber::SetGlobalDefaultError;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::{EnvFilter, Registry, filter::LevelFilter, layer::SubscriberExt};

#[derive(Error, Debug)]
pub enum OTelError {
    #[error(transparent)]
    Subscriber(#[from] SetGlobalDefaultError),
    #[error(transparent)]
    OTelSdk(#[from] OTelSdkError),
    #[error(transparent)]
    Trace(#[from] TraceError),
}

/// Installs the global subscriber: bunyan JSON on stdout, plus span export
/// when an OTLP endpoint is configured.
pub fn configure(
    service_config: &ServiceConfig,
    logging_config: &LoggingConfig,
) -> Result<Option<SdkTracerProvider>, OTelError> {
    global::set_text_map_propagator(TraceContextPropagator::new());

    let provider = match &logging_config.otlp_endpoint {
        Some(endpoint) => Some(tracer_provider(&service_config.name, endpoint)?),
        None => None,
    };

    let telemetry = provider.as_ref().map(|provider| {
        tracing_opentelemetry::layer().with_tracer(provider.tracer(service_config.name.to_owned()))
    });

    let env_filter = EnvFilter::new(logging_level(&logging_config.level).to_string());

    let formatting_layer =
        BunyanFormattingLayer::new(service_config.name.to_owned(), std::io::stdout);

    let subscriber = Registry::default()
        .with(env_filter)
        .with(telemetry)
        .with(JsonStorageLayer)
        .with(formatting_layer);

    tracing::subscriber::set_global_default(subscriber)?;

    Ok(provider)
}

fn tracer_provider(service_name: &str, endpoint: &str) -> Result<SdkTracerProvider, OTelError> {
    let otlp_exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(endpoint)
        .build()?;

    let resource = Resource::builder()
        .with_attribute(KeyValue::new(
            resource::SERVICE_NAME,
            service_name.to_owned(),
        ))
        .build();

    Ok(SdkTracerProvider::builder()
        .with_batch_exporter(otlp_exporter)
        .with_resource(resource)
        .build())
}

pub fn shutdown(provider: Option<SdkTracerProvider>) -> Result<(), OTelError> {
    match provider {
        Some(provider) => Ok(provider.shutdown()?),
        None => Ok(()),
    }
}

/// Unknown levels fall back to errors only.
fn logging_level(level: &str) -> LevelFilter {
    level.trim().parse().unwrap_or(LevelFilter::ERROR)
}
