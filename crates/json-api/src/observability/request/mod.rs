//! Per-request span, request id, completion log and HTTP metrics.

mod caller;
mod request_id;
mod route;

use std::time::{Duration, Instant};

use salvo::{http::StatusCode, prelude::*};
use tracing::{Instrument as _, Span, error, field, info, info_span, warn};
use tracing_opentelemetry::OpenTelemetrySpanExt as _;

use super::{metrics, settings};

use self::{request_id::RequestId, route::RouteLabel};

#[handler]
pub(crate) async fn request_logging(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    if req.uri().path() == "/metrics" {
        ctrl.call_next(req, depot, res).await;
        return;
    }

    let started = Instant::now();
    let request_id = RequestId::from_headers(req.headers());
    let route = RouteLabel::from_path(req.uri().path());
    let method = req.method().as_str().to_owned();

    request_id.echo(res);

    let span = info_span!(
        parent: None,
        "http.request",
        otel.name = %route.span_name(&method),
        otel.kind = "server",
        request_id = %request_id,
        method = %method,
        path = %req.uri().path(),
        remote_addr = %req.remote_addr(),
        status = field::Empty,
        duration_ms = field::Empty,
    );

    depot.inject(request_id);

    if settings::joins_caller_traces()
        && let Some(parent) = caller::caller_context(req.headers())
        && let Err(source) = span.set_parent(parent)
    {
        warn!("could not attach caller trace to request span: {source}");
    }

    let in_flight = metrics::InFlight::enter();

    ctrl.call_next(req, depot, res)
        .instrument(span.clone())
        .await;

    drop(in_flight);

    let status = res.status_code.unwrap_or(StatusCode::OK);
    let elapsed = started.elapsed();

    metrics::observe_request(&method, route.as_str(), status, elapsed);
    log_completion(&span, status, elapsed);
}

fn log_completion(span: &Span, status: StatusCode, elapsed: Duration) {
    let code = status.as_u16();
    let duration_ms = elapsed.as_millis();
    let threshold_ms = u128::from(settings::slow_request_threshold_ms());

    span.record("status", code);
    span.record("duration_ms", duration_ms);

    span.in_scope(|| {
        if status.is_server_error() {
            error!(status = code, duration_ms, "request.completed");
        } else if status.is_client_error() {
            warn!(status = code, duration_ms, "request.completed");
        } else {
            info!(status = code, duration_ms, "request.completed");
        }

        if duration_ms > threshold_ms {
            warn!(duration_ms, threshold_ms, "request.slow");
        }
    });
}
