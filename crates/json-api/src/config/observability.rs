//! Logging, tracing export and request diagnostics settings.

use clap::{ArgAction, Args, ValueEnum};

/// How log lines are rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Single-line, human-readable output.
    Compact,

    /// One JSON object per line.
    Json,
}

/// Log output settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` holds no richer filter
    #[arg(short = 'l', long = "log-level", env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    /// Log line format
    #[arg(long = "log-format", env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Diagnostics settings.
#[derive(Debug, Args)]
pub struct ObservabilityConfig {
    /// OpenTelemetry export.
    #[command(flatten)]
    pub otel: OtelConfig,

    /// Requests slower than this many milliseconds are logged as warnings
    #[arg(long = "slow-request-threshold-ms", env = "SLOW_REQUEST_THRESHOLD_MS", default_value_t = 1_000)]
    pub slow_request_threshold_ms: u64,
}

/// OTLP trace export settings. Export is off unless `OTEL_ENABLED=true`.
#[derive(Debug, Args)]
pub struct OtelConfig {
    /// Export spans over OTLP
    #[arg(long = "otel-enabled", env = "OTEL_ENABLED", default_value_t = false, action = ArgAction::Set)]
    pub enabled: bool,

    /// Continue traces from an incoming `traceparent` header
    #[arg(
        long = "otel-parent-propagation-enabled",
        env = "OTEL_PARENT_PROPAGATION_ENABLED",
        default_value_t = false,
        action = ArgAction::Set
    )]
    pub propagate_parent: bool,

    /// Collector gRPC endpoint
    #[arg(long = "otel-endpoint", env = "OTEL_EXPORTER_OTLP_ENDPOINT", default_value = "http://localhost:4317")]
    pub endpoint: String,

    /// Export timeout in seconds
    #[arg(long = "otel-timeout-seconds", env = "OTEL_EXPORTER_OTLP_TIMEOUT_SECONDS", default_value_t = 3)]
    pub timeout_seconds: u64,

    /// `service.name` resource attribute
    #[arg(long = "otel-service-name", env = "OTEL_SERVICE_NAME", default_value = "catalog-json")]
    pub service_name: String,

    /// `service.version` resource attribute
    #[arg(long = "otel-service-version", env = "OTEL_SERVICE_VERSION", default_value = env!("CARGO_PKG_VERSION"))]
    pub service_version: String,

    /// `deployment.environment.name` resource attribute
    #[arg(long = "otel-environment", env = "OTEL_DEPLOYMENT_ENVIRONMENT", default_value = "development")]
    pub environment: String,

    /// Fraction of root traces sampled, clamped to [0, 1]
    #[arg(long = "otel-sample-ratio", env = "OTEL_TRACE_SAMPLE_RATIO", default_value_t = 1.0)]
    pub sample_ratio: f64,
}
