//! App Router

use std::{sync::Arc, time::Duration};

use salvo::{affix_state::inject, prelude::*, trailing_slash::remove_slash};

use crate::{
    catcher::plain_text_catcher,
    healthcheck,
    observability::{metrics_handler, request_logging},
    orders,
    state::State,
};

/// Wrap a router in a service whose error responses are plain text.
pub(crate) fn app_service(router: Router) -> Service {
    Service::new(router).catcher(plain_text_catcher())
}

pub(crate) fn app_router(state: Arc<State>, request_timeout: Duration) -> Router {
    Router::new()
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(request_logging)
        .hoop(Timeout::new(request_timeout))
        .hoop(inject(state))
        .push(Router::with_path("health").get(healthcheck::handler))
        .push(Router::with_path("metrics").get(metrics_handler))
        .push(
            Router::with_path("orders")
                .get(orders::index::handler)
                .post(orders::create::handler)
                .push(
                    Router::with_path("{id}")
                        .get(orders::get::handler)
                        .put(orders::update::handler)
                        .delete(orders::delete::handler),
                ),
        )
}
