//! Orders Data

use crate::domain::orders::errors::InvalidOrderError;

/// Validated order payload, used for both creates and updates.
///
/// The only way to build one is [`OrderDetails::new`], so anything handed to
/// the orders service already has a product ID and a positive quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDetails {
    product_id: String,
    quantity: i32,
}

impl OrderDetails {
    /// Validate and build an order payload.
    ///
    /// # Errors
    ///
    /// Returns an error when `product_id` is empty or `quantity` is not positive.
    pub fn new(product_id: impl Into<String>, quantity: i32) -> Result<Self, InvalidOrderError> {
        let product_id = product_id.into();

        if product_id.is_empty() {
            return Err(InvalidOrderError::MissingProductId);
        }

        if quantity <= 0 {
            return Err(InvalidOrderError::NonPositiveQuantity(quantity));
        }

        Ok(Self {
            product_id,
            quantity,
        })
    }

    #[must_use]
    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    #[must_use]
    pub fn quantity(&self) -> i32 {
        self.quantity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_product_and_positive_quantity() {
        let details = OrderDetails::new("sku-42", 3);

        assert_eq!(
            details.as_ref().map(OrderDetails::product_id),
            Ok("sku-42")
        );
        assert_eq!(details.map(|d| d.quantity()), Ok(3));
    }

    #[test]
    fn test_rejects_empty_product_id() {
        assert_eq!(
            OrderDetails::new("", 1),
            Err(InvalidOrderError::MissingProductId)
        );
    }

    #[test]
    fn test_rejects_zero_quantity() {
        assert_eq!(
            OrderDetails::new("sku-1", 0),
            Err(InvalidOrderError::NonPositiveQuantity(0))
        );
    }

    #[test]
    fn test_rejects_negative_quantity() {
        assert_eq!(
            OrderDetails::new("sku-1", -5),
            Err(InvalidOrderError::NonPositiveQuantity(-5))
        );
    }

    #[test]
    fn test_empty_product_id_reported_before_quantity() {
        assert_eq!(
            OrderDetails::new("", 0),
            Err(InvalidOrderError::MissingProductId)
        );
    }

    #[test]
    fn test_whitespace_product_id_is_accepted() {
        assert!(OrderDetails::new(" ", 1).is_ok());
    }
}
