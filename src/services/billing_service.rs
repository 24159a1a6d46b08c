use std::{
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
};

use crate::dto::billing::{BillingRequest, BillingResponse, CartItem};

pub const BILL_TIMESTAMP: &str = "2025-01-10T10:30:00Z";

/// Derives a bill id from the cart contents.
///
/// The id is a content hash, so two bills with identical carts share an id.
/// Nothing is persisted, so nothing detects the collision either.
pub fn bill_id(items: &[CartItem]) -> String {
    let mut hasher = DefaultHasher::new();
    items.len().hash(&mut hasher);
    for item in items {
        item.id.hash(&mut hasher);
        item.name.hash(&mut hasher);
        item.price.to_bits().hash(&mut hasher);
        item.quantity.hash(&mut hasher);
        item.unit.hash(&mut hasher);
    }
    let digest = format!("{:016X}", hasher.finish());
    format!("BILL-{}", &digest[..8])
}

pub fn create_bill(payload: BillingRequest) -> BillingResponse {
    let bill_id = bill_id(&payload.items);

    tracing::info!(
        bill_id = %bill_id,
        items = payload.items.len(),
        total = payload.total,
        customer_email = payload.customer_email.as_deref().unwrap_or("-"),
        "bill created"
    );

    BillingResponse {
        success: true,
        bill_id,
        total: payload.total,
        timestamp: BILL_TIMESTAMP.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, quantity: i64) -> CartItem {
        CartItem {
            id: id.to_string(),
            name: "Paracetamol 500mg".to_string(),
            price: 5.0,
            quantity,
            unit: "strip".to_string(),
        }
    }

    fn request(items: Vec<CartItem>, total: f64) -> BillingRequest {
        BillingRequest {
            items,
            customer_email: None,
            subtotal: total,
            gst: 0.0,
            total,
        }
    }

    #[test]
    fn bill_id_is_prefixed_upper_case_eight_chars() {
        let id = bill_id(&[item("med-1", 2)]);
        let suffix = id.strip_prefix("BILL-").expect("prefix");
        assert_eq!(suffix.len(), 8);
        assert!(suffix.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
    }

    #[test]
    fn identical_carts_collide() {
        let first = create_bill(request(vec![item("med-1", 2), item("med-2", 1)], 15.0));
        let second = create_bill(request(vec![item("med-1", 2), item("med-2", 1)], 99.0));
        assert_eq!(first.bill_id, second.bill_id);
    }

    #[test]
    fn different_carts_get_different_ids() {
        assert_ne!(bill_id(&[item("med-1", 2)]), bill_id(&[item("med-1", 3)]));
        assert_ne!(
            bill_id(&[item("med-1", 1), item("med-2", 1)]),
            bill_id(&[item("med-2", 1), item("med-1", 1)])
        );
    }

    #[test]
    fn echoes_total_with_fixed_timestamp() {
        let resp = create_bill(request(vec![item("med-1", 2)], 11.8));
        assert!(resp.success);
        assert_eq!(resp.total, 11.8);
        assert_eq!(resp.timestamp, BILL_TIMESTAMP);
    }

    #[test]
    fn empty_cart_still_succeeds() {
        let resp = create_bill(request(Vec::new(), 0.0));
        assert!(resp.success);
        assert!(resp.bill_id.starts_with("BILL-"));
    }
}
