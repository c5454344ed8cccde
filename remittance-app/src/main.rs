//! # Remittance Application
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Initialize the transaction-data client adapter
//! - Create the transaction service
//! - Start the HTTP server

mod config;

use opentelemetry::global;
use opentelemetry_sdk::{propagation::TraceContextPropagator, trace as sdktrace};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use remittance_data_client::build_data_client;
use remittance_hex::{TransactionService, inbound::HttpServer};

fn init_tracer() -> anyhow::Result<(sdktrace::Tracer, sdktrace::SdkTracerProvider)> {
    global::set_text_map_propagator(TraceContextPropagator::new());

    // gRPC exporter with batch processing (non-blocking)
    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .build()?;

    let provider = sdktrace::SdkTracerProvider::builder()
        .with_batch_exporter(exporter)
        .build();

    global::set_tracer_provider(provider.clone());

    use opentelemetry::trace::TracerProvider as _;
    Ok((provider.tracer("remittance-service"), provider))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let (otel_tracer, otel_provider) = init_tracer()?;
    let telemetry = tracing_opentelemetry::layer().with_tracer(otel_tracer);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "info,remittance_app=debug,remittance_hex=debug,remittance_data_client=debug"
                    .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .with(telemetry)
        .init();

    let config = config::Config::from_env()?;

    tracing::info!("Starting remittance server on port {}", config.port);
    tracing::info!("Using transaction data service: {}", config.data_service_url);
    tracing::debug!(properties = ?config.properties, "Transaction limits loaded");

    let client = build_data_client(&config.data_service_url, config.data_service_timeout)?;

    let service = TransactionService::new(client, config.properties);

    let server = HttpServer::new(service);
    let addr = format!("0.0.0.0:{}", config.port);

    server.run(&addr).await?;

    // Flush traces before exit
    let _ = otel_provider.shutdown();
    Ok(())
}
