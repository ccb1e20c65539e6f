//! Tracing Export Config

use std::time::Duration;

use clap::Args;

/// OTLP span export and request latency reporting.
///
/// Spans stay in-process unless `OTEL_ENABLED` is set.
#[derive(Debug, Args)]
pub struct ObservabilityConfig {
    /// Export request spans to an OTLP collector
    #[arg(long, env = "OTEL_ENABLED", default_value_t = false)]
    pub otel_enabled: bool,

    /// Collector gRPC endpoint
    #[arg(
        long,
        env = "OTEL_EXPORTER_OTLP_ENDPOINT",
        default_value = "http://localhost:4317"
    )]
    pub otlp_endpoint: String,

    /// Export deadline per batch, in seconds
    #[arg(long, env = "OTEL_EXPORTER_OTLP_TIMEOUT_SECONDS", default_value_t = 3_u64)]
    pub otlp_timeout_seconds: u64,

    /// Share of new traces that are recorded
    #[arg(long, env = "OTEL_TRACE_SAMPLE_RATIO", default_value_t = 1.0_f64)]
    pub trace_sample_ratio: f64,

    /// Join the caller's trace when a `traceparent` header is present
    #[arg(long, env = "OTEL_PARENT_PROPAGATION_ENABLED", default_value_t = false)]
    pub continue_caller_traces: bool,

    /// Order requests slower than this are logged at `warn`
    #[arg(long, env = "SLOW_REQUEST_THRESHOLD_MS", default_value_t = 1_000_u64)]
    pub slow_request_threshold_ms: u64,
}

impl ObservabilityConfig {
    #[must_use]
    pub fn otlp_timeout(&self) -> Duration {
        Duration::from_secs(self.otlp_timeout_seconds)
    }

    /// Sample ratio limited to `0.0..=1.0`.
    #[must_use]
    pub fn sample_ratio(&self) -> f64 {
        self.trace_sample_ratio.clamp(0.0, 1.0)
    }

    /// Caller traces can only be joined when a propagator is installed, which
    /// happens with export on.
    #[must_use]
    pub fn joins_caller_traces(&self) -> bool {
        self.otel_enabled && self.continue_caller_traces
    }
}
