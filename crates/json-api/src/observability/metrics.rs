//! Prometheus HTTP metrics, served in text format on `/metrics`.

use std::{sync::LazyLock, time::Duration};

use prometheus::{
    HistogramOpts, HistogramVec, IntCounterVec, IntGauge, Opts, Registry, TEXT_FORMAT, TextEncoder,
};
use salvo::{
    handler,
    http::{
        StatusCode,
        header::{CONTENT_TYPE, HeaderValue},
    },
    prelude::Response,
};
use tracing::error;

const NAMESPACE: &str = "orders_json";

const LATENCY_BUCKETS_SECONDS: [f64; 12] = [
    0.001, 0.0025, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 10.0,
];

#[derive(Debug)]
struct HttpMetrics {
    registry: Registry,
    requests: IntCounterVec,
    latency: HistogramVec,
    in_flight: IntGauge,
}

impl HttpMetrics {
    fn register() -> Result<Self, prometheus::Error> {
        let registry = Registry::new_custom(Some(NAMESPACE.to_owned()), None)?;

        let requests = IntCounterVec::new(
            Opts::new("http_requests_total", "HTTP requests by method, route and status."),
            &["method", "route", "status"],
        )?;

        let latency = HistogramVec::new(
            HistogramOpts::new(
                "http_request_duration_seconds",
                "Time spent serving HTTP requests, by method and route.",
            )
            .buckets(LATENCY_BUCKETS_SECONDS.to_vec()),
            &["method", "route"],
        )?;

        let in_flight = IntGauge::new(
            "http_requests_in_flight",
            "HTTP requests currently being served.",
        )?;

        registry.register(Box::new(requests.clone()))?;
        registry.register(Box::new(latency.clone()))?;
        registry.register(Box::new(in_flight.clone()))?;

        Ok(Self {
            registry,
            requests,
            latency,
            in_flight,
        })
    }

    fn render(&self) -> Result<String, prometheus::Error> {
        TextEncoder::new().encode_to_string(&self.registry.gather())
    }
}

static HTTP_METRICS: LazyLock<Option<HttpMetrics>> = LazyLock::new(|| {
    HttpMetrics::register()
        .inspect_err(|source| error!("http metrics disabled, registration failed: {source}"))
        .ok()
});

fn http_metrics() -> Option<&'static HttpMetrics> {
    HTTP_METRICS.as_ref()
}

/// Holds the in-flight gauge up until dropped.
#[derive(Debug)]
pub(super) struct InFlight(Option<&'static IntGauge>);

impl InFlight {
    pub(super) fn enter() -> Self {
        let gauge = http_metrics().map(|metrics| &metrics.in_flight);

        if let Some(gauge) = gauge {
            gauge.inc();
        }

        Self(gauge)
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        if let Some(gauge) = self.0 {
            gauge.dec();
        }
    }
}

pub(super) fn observe_request(method: &str, route: &str, status: StatusCode, elapsed: Duration) {
    let Some(metrics) = http_metrics() else {
        return;
    };

    metrics
        .requests
        .with_label_values(&[method, route, status.as_str()])
        .inc();

    metrics
        .latency
        .with_label_values(&[method, route])
        .observe(elapsed.as_secs_f64());
}

#[handler]
pub(crate) async fn metrics_handler(res: &mut Response) {
    let Some(metrics) = http_metrics() else {
        res.status_code(StatusCode::SERVICE_UNAVAILABLE);
        return;
    };

    match metrics.render() {
        Ok(body) => {
            res.headers_mut()
                .insert(CONTENT_TYPE, HeaderValue::from_static(TEXT_FORMAT));
            res.body(body);
        }
        Err(source) => {
            error!("failed to encode metrics: {source}");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
        }
    }
}

#[cfg(test)]
mod tests {
    use salvo::{
        Router, Service,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use super::*;

    #[tokio::test]
    async fn test_metrics_endpoint_lists_observed_routes() -> TestResult {
        observe_request(
            "DELETE",
            "/orders/{id}",
            StatusCode::NOT_FOUND,
            Duration::from_millis(11),
        );

        let service =
            Service::new(Router::new().push(Router::with_path("metrics").get(metrics_handler)));

        let mut res = TestClient::get("http://example.com/metrics")
            .send(&service)
            .await;

        let content_type = res
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(ToOwned::to_owned);

        assert_eq!(content_type.as_deref(), Some(TEXT_FORMAT));

        let body = res.take_string().await?;

        assert!(body.contains("orders_json_http_requests_total"), "{body}");
        assert!(body.contains("orders_json_http_request_duration_seconds"), "{body}");
        assert!(body.contains("orders_json_http_requests_in_flight"), "{body}");
        assert!(
            body.contains(r#"method="DELETE",route="/orders/{id}",status="404""#),
            "{body}"
        );

        Ok(())
    }
}
