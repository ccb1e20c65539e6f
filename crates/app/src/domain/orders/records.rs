//! Order Records

use std::fmt::{Display, Formatter, Result as FmtResult};

use jiff::Timestamp;

/// Status assigned to every order on insert.
pub const DEFAULT_ORDER_STATUS: &str = "created";

/// Order ID, assigned by the `orders.id` sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, sqlx::Type)]
#[sqlx(transparent)]
pub struct OrderId(i32);

impl OrderId {
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn into_inner(self) -> i32 {
        self.0
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

impl From<i32> for OrderId {
    fn from(value: i32) -> Self {
        Self::new(value)
    }
}

impl From<OrderId> for i32 {
    fn from(value: OrderId) -> Self {
        value.into_inner()
    }
}

/// Order Record
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRecord {
    pub id: OrderId,
    pub product_id: String,
    pub quantity: i32,
    pub status: String,
    pub created_at: Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_id_displays_as_integer() {
        assert_eq!(OrderId::new(42).to_string(), "42");
    }

    #[test]
    fn test_order_id_orders_numerically() {
        assert!(OrderId::from(3) > OrderId::from(2));
        assert_eq!(i32::from(OrderId::from(7)), 7);
    }
}
