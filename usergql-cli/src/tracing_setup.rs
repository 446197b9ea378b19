//! Logging for the usergql binary.
//!
//! One `tracing_subscriber` registry with a compact stderr layer, plus an
//! OTLP span exporter layer when built with `telemetry` and run with `--otel`.
//! `RUST_LOG` overrides the default `info` (or `debug` with `--debug`) filter.
//! The exporter reads `OTEL_EXPORTER_OTLP_ENDPOINT` and `OTEL_SERVICE_NAME`.

use anyhow::{anyhow, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    pub debug: bool,
    pub otel: bool,
}

impl TracingConfig {
    fn filter(&self) -> EnvFilter {
        let fallback = if self.debug { "debug" } else { "info" };
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
    }
}

fn console_layer(config: &TracingConfig) -> BoxedLayer {
    // stdout carries command output (print-schema)
    tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(config.debug)
        .compact()
        .with_filter(config.filter())
        .boxed()
}

#[cfg(feature = "telemetry")]
fn otlp_layer(config: &TracingConfig) -> Result<BoxedLayer> {
    use opentelemetry::trace::TracerProvider as _;
    use opentelemetry::KeyValue;
    use opentelemetry_otlp::WithExportConfig;
    use opentelemetry_sdk::trace::TracerProvider;

    let endpoint = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
        .unwrap_or_else(|_| "http://localhost:4317".to_string());
    let service = std::env::var("OTEL_SERVICE_NAME").unwrap_or_else(|_| "usergql".to_string());

    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(&endpoint)
        .build()
        .map_err(|e| anyhow!("OTLP exporter for {endpoint}: {e}"))?;

    let provider = TracerProvider::builder()
        .with_batch_exporter(exporter, opentelemetry_sdk::runtime::Tokio)
        .with_resource(opentelemetry_sdk::Resource::new([KeyValue::new(
            "service.name",
            service,
        )]))
        .build();
    let tracer = provider.tracer("usergql");

    // Registered globally so spans keep flowing until shutdown_otel
    let _ = opentelemetry::global::set_tracer_provider(provider);

    Ok(tracing_opentelemetry::layer()
        .with_tracer(tracer)
        .with_filter(config.filter())
        .boxed())
}

/// Install the global subscriber.
pub fn init(config: &TracingConfig) -> Result<()> {
    #[cfg_attr(not(feature = "telemetry"), allow(unused_mut))]
    let mut layers = vec![console_layer(config)];

    #[cfg(feature = "telemetry")]
    if config.otel {
        layers.push(otlp_layer(config)?);
    }

    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .map_err(|err| anyhow!(err))?;

    if config.otel && !cfg!(feature = "telemetry") {
        tracing::warn!("--otel ignored: built without the `telemetry` feature");
    }
    Ok(())
}

/// Flush spans still buffered in the batch exporter.
pub fn shutdown_otel() {
    #[cfg(feature = "telemetry")]
    opentelemetry::global::shutdown_tracer_provider();
}
