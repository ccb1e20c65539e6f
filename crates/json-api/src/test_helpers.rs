//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};

use orders_app::{
    context::AppContext,
    domain::orders::{
        MockOrdersService,
        records::{DEFAULT_ORDER_STATUS, OrderId, OrderRecord},
    },
    health::MockHealthService,
};

use crate::{router::app_service, state::State};

/// Orders service operations a test is allowed to set expectations on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OrdersCall {
    List,
    Get,
    Create,
    Update,
    Delete,
}

/// Orders mock that fails on any call outside `allowed`.
///
/// Expectations for the allowed operations are left to the caller, since a
/// `never()` registered first would shadow them.
pub(crate) fn orders_mock_allowing(allowed: &[OrdersCall]) -> MockOrdersService {
    let mut orders = MockOrdersService::new();

    if !allowed.contains(&OrdersCall::List) {
        orders.expect_list_orders().never();
    }

    if !allowed.contains(&OrdersCall::Get) {
        orders.expect_get_order().never();
    }

    if !allowed.contains(&OrdersCall::Create) {
        orders.expect_create_order().never();
    }

    if !allowed.contains(&OrdersCall::Update) {
        orders.expect_update_order().never();
    }

    if !allowed.contains(&OrdersCall::Delete) {
        orders.expect_delete_order().never();
    }

    orders
}

pub(crate) fn strict_orders_mock() -> MockOrdersService {
    orders_mock_allowing(&[])
}

pub(crate) fn strict_health_mock() -> MockHealthService {
    let mut health = MockHealthService::new();

    health.expect_check().never();

    health
}

pub(crate) fn state_with(orders: MockOrdersService, health: MockHealthService) -> Arc<State> {
    State::from_app_context(AppContext {
        orders: Arc::new(orders),
        health: Arc::new(health),
    })
}

pub(crate) fn orders_service(orders: MockOrdersService, route: Router) -> Service {
    app_service(
        Router::new()
            .hoop(inject(state_with(orders, strict_health_mock())))
            .push(route),
    )
}

pub(crate) fn health_service(health: MockHealthService, route: Router) -> Service {
    app_service(
        Router::new()
            .hoop(inject(state_with(strict_orders_mock(), health)))
            .push(route),
    )
}

pub(crate) fn content_type(res: &Response) -> Option<&str> {
    res.headers()
        .get(salvo::http::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
}

pub(crate) fn make_order(id: i32) -> OrderRecord {
    OrderRecord {
        id: OrderId::new(id),
        product_id: format!("sku-{id}"),
        quantity: 2,
        status: DEFAULT_ORDER_STATUS.to_owned(),
        created_at: Timestamp::UNIX_EPOCH,
    }
}
