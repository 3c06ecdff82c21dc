//! Cart Service
//!
//! Per-user cart documents held in a concurrent map. Mutations for one user
//! go through the map entry, so concurrent requests on the same user cannot
//! lose updates; different users touch disjoint keys and never contend.

use std::sync::Arc;

use dashmap::DashMap;
use serde::{Deserialize, Serialize};

use crate::catalog::Product;

/// User identifier applied when a request carries none
pub const GUEST_USER: &str = "guest";

/// One line in a cart
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItem {
    pub product_id: i64,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    #[serde(default)]
    pub image: String,
}

/// Cart document for one user
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    pub items: Vec<CartItem>,
    pub total: f64,
}

impl Cart {
    fn recalculate(&mut self) {
        self.total = self
            .items
            .iter()
            .map(|item| item.price * item.quantity as f64)
            .sum();
    }
}

/// Keyed cart upserts, one document per user
#[derive(Clone, Default)]
pub struct CartService {
    carts: Arc<DashMap<String, Cart>>,
}

impl CartService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cart snapshot for one user (empty cart when none exists yet)
    pub fn get(&self, user_id: &str) -> Cart {
        self.carts
            .get(user_id)
            .map(|entry| entry.clone())
            .unwrap_or_default()
    }

    /// Add `quantity` of a product; an existing line for the same product is
    /// incremented instead of duplicated
    pub fn add_item(&self, user_id: &str, product: &Product, quantity: u32) -> Cart {
        let mut entry = self.carts.entry(user_id.to_string()).or_default();

        match entry.items.iter_mut().find(|i| i.product_id == product.id) {
            Some(item) => item.quantity += quantity,
            None => entry.items.push(CartItem {
                product_id: product.id,
                name: product.name.clone(),
                price: product.price,
                quantity,
                image: product.image.clone(),
            }),
        }

        entry.recalculate();
        entry.clone()
    }

    /// Remove one unit of a product; the line disappears when its quantity
    /// reaches zero. Removing an absent product is a no-op.
    pub fn remove_item(&self, user_id: &str, product_id: i64) -> Cart {
        let mut entry = self.carts.entry(user_id.to_string()).or_default();

        if let Some(pos) = entry.items.iter().position(|i| i.product_id == product_id) {
            if entry.items[pos].quantity > 1 {
                entry.items[pos].quantity -= 1;
            } else {
                entry.items.remove(pos);
            }
        }

        entry.recalculate();
        entry.clone()
    }
}
