//! Telemetry start-up and teardown.

use opentelemetry::global;
use opentelemetry_sdk::{propagation::TraceContextPropagator, trace::SdkTracerProvider};
use thiserror::Error;
use tracing::{error, info};

use crate::config::ServerConfig;

use super::{logging, otel, settings};

#[derive(Debug, Error)]
pub(crate) enum ObservabilityError {
    #[error("could not build the OTLP span exporter: {0}")]
    Exporter(#[from] opentelemetry_otlp::ExporterBuildError),

    #[error("could not install the tracing subscriber: {0}")]
    Subscriber(#[from] tracing_subscriber::util::TryInitError),
}

/// Keeps the trace pipeline alive until [`Observability::shutdown`].
#[derive(Debug)]
pub(crate) struct Observability {
    tracer_provider: Option<SdkTracerProvider>,
}

impl Observability {
    pub(crate) fn init(config: &ServerConfig) -> Result<Self, ObservabilityError> {
        let otel_config = &config.observability.otel;

        settings::install(&config.observability);

        let tracer_provider = otel_config
            .enabled
            .then(|| otel::build_tracer_provider(otel_config))
            .transpose()?;

        if tracer_provider.is_some() {
            global::set_text_map_propagator(TraceContextPropagator::new());
        }

        logging::init_subscriber(config, tracer_provider.as_ref())?;

        info!(
            log_format = ?config.logging.log_format,
            otel_enabled = otel_config.enabled,
            "observability initialised"
        );

        Ok(Self { tracer_provider })
    }

    /// Flush buffered spans.
    pub(crate) fn shutdown(self) {
        if let Some(provider) = self.tracer_provider
            && let Err(source) = provider.shutdown()
        {
            error!("tracer provider did not shut down cleanly: {source}");
        }
    }
}
