//! Order Service
//!
//! Order history and shipping lookup. Orders are seeded with sample data at
//! startup (dates relative to process start) the way the original frontend
//! expects them; field names stay camelCase on the wire.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Days until the estimated delivery of a shipped order
const DELIVERY_ESTIMATE_DAYS: i64 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Shipped,
    Delivered,
}

/// One line of an order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: i64,
    pub name: String,
    pub quantity: u32,
    pub price: f64,
    pub image: String,
}

/// Order document
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    pub order_number: String,
    pub date: DateTime<Utc>,
    pub status: OrderStatus,
    pub total: f64,
    pub items: Vec<OrderItem>,
    pub tracking_number: Option<String>,
}

/// Tracking summary for one order
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingInfo {
    pub tracking_number: Option<String>,
    pub status: OrderStatus,
    pub estimated_delivery: DateTime<Utc>,
}

/// Read-only order history
#[derive(Clone)]
pub struct OrderService {
    orders: Arc<Vec<Order>>,
}

impl OrderService {
    pub fn new(orders: Vec<Order>) -> Self {
        Self {
            orders: Arc::new(orders),
        }
    }

    /// Seed the service with the sample history the shop frontend consumes
    pub fn with_sample_data() -> Self {
        let now = Utc::now();
        let image_top =
            "https://images.unsplash.com/photo-1590736969955-71cc94901144?q=80&w=2070".to_string();
        let image_bag =
            "https://images.unsplash.com/photo-1553062407-98eeb64c6a62?q=80&w=2127".to_string();

        Self::new(vec![
            Order {
                id: 1,
                order_number: "YS123456789".to_string(),
                date: now - Duration::days(10),
                status: OrderStatus::Delivered,
                total: 179.98,
                items: vec![
                    OrderItem {
                        id: 1,
                        name: "Lavender Dream Top".to_string(),
                        quantity: 1,
                        price: 89.99,
                        image: image_top.clone(),
                    },
                    OrderItem {
                        id: 2,
                        name: "Sunset Blush Bag".to_string(),
                        quantity: 1,
                        price: 64.99,
                        image: image_bag,
                    },
                ],
                tracking_number: Some("TRACK123456".to_string()),
            },
            Order {
                id: 2,
                order_number: "YS987654321".to_string(),
                date: now - Duration::days(5),
                status: OrderStatus::Shipped,
                total: 89.99,
                items: vec![OrderItem {
                    id: 4,
                    name: "Mint Fresh Top".to_string(),
                    quantity: 1,
                    price: 89.99,
                    image: image_top.clone(),
                }],
                tracking_number: Some("TRACK789012".to_string()),
            },
            Order {
                id: 3,
                order_number: "YS111222333".to_string(),
                date: now - Duration::days(2),
                status: OrderStatus::Pending,
                total: 45.99,
                items: vec![OrderItem {
                    id: 3,
                    name: "Rose Garden Scarf".to_string(),
                    quantity: 1,
                    price: 45.99,
                    image: image_top,
                }],
                tracking_number: None,
            },
        ])
    }

    pub fn list(&self) -> Vec<Order> {
        self.orders.as_ref().clone()
    }

    pub fn get(&self, id: i64) -> Option<Order> {
        self.orders.iter().find(|o| o.id == id).cloned()
    }

    /// Tracking information for one order, `None` when the order is unknown
    pub fn shipping(&self, order_id: i64) -> Option<ShippingInfo> {
        self.get(order_id).map(|order| ShippingInfo {
            tracking_number: order.tracking_number,
            status: order.status,
            estimated_delivery: Utc::now() + Duration::days(DELIVERY_ESTIMATE_DAYS),
        })
    }
}

impl Default for OrderService {
    fn default() -> Self {
        Self::with_sample_data()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_data_has_three_orders() {
        let service = OrderService::with_sample_data();
        let orders = service.list();
        assert_eq!(orders.len(), 3);
        assert_eq!(orders[0].order_number, "YS123456789");
    }

    #[test]
    fn test_get_by_id() {
        let service = OrderService::with_sample_data();
        assert_eq!(service.get(2).unwrap().status, OrderStatus::Shipped);
        assert!(service.get(99).is_none());
    }

    #[test]
    fn test_shipping_for_known_order() {
        let service = OrderService::with_sample_data();
        let info = service.shipping(1).unwrap();
        assert_eq!(info.tracking_number.as_deref(), Some("TRACK123456"));
        assert_eq!(info.status, OrderStatus::Delivered);
        assert!(info.estimated_delivery > Utc::now());
    }

    #[test]
    fn test_shipping_unknown_order_is_none() {
        let service = OrderService::with_sample_data();
        assert!(service.shipping(42).is_none());
    }

    #[test]
    fn test_pending_order_has_no_tracking() {
        let service = OrderService::with_sample_data();
        assert!(service.get(3).unwrap().tracking_number.is_none());
    }

    #[test]
    fn test_order_serializes_camel_case() {
        let service = OrderService::with_sample_data();
        let json = serde_json::to_value(service.get(1).unwrap()).unwrap();
        assert!(json.get("orderNumber").is_some());
        assert!(json.get("trackingNumber").is_some());
        assert_eq!(json["status"], "delivered");
    }
}
