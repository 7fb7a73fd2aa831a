//! Report queries over a sequence of orders.
//!
//! Every function treats its input as read-only and is deterministic for a
//! fixed input ordering. Ties in the max-style queries go to the first
//! product (in order-traversal order) to hold the winning value.

use std::collections::{HashMap, HashSet};

use orderlens_catalog::{Product, ProductId};
use orderlens_core::{DomainError, DomainResult};
use orderlens_orders::{Order, OrderId};
use orderlens_users::User;

/// Read model: buyers of one distinct product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductBuyers {
    pub product: Product,
    /// In order-traversal order. A buyer appears once per matching order,
    /// so a user with several orders for the product appears several times.
    pub buyers: Vec<User>,
}

/// Read model: shipping weight of one order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderWeight {
    pub order_id: OrderId,
    pub total_weight: u64,
}

fn products_in_traversal_order(orders: &[Order]) -> impl Iterator<Item = &Product> {
    orders.iter().flat_map(|order| order.products().iter())
}

/// The product with the maximum price across all orders.
///
/// On a price tie the first occurrence in traversal order wins. Fails with
/// `NoData` when no order carries any product.
pub fn most_expensive_product(orders: &[Order]) -> DomainResult<&Product> {
    let mut best: Option<&Product> = None;
    for product in products_in_traversal_order(orders) {
        if best.is_none_or(|current| product.price() > current.price()) {
            best = Some(product);
        }
    }
    best.ok_or_else(|| DomainError::no_data("no products in any order"))
}

/// The product with the highest total occurrence count across all orders.
///
/// Each occurrence in an order's product list counts, including repeats
/// within one order. On a count tie the product seen first in traversal
/// order wins. Fails with `NoData` when no order carries any product.
pub fn most_popular_product(orders: &[Order]) -> DomainResult<&Product> {
    let mut counts: HashMap<ProductId, u64> = HashMap::new();
    let mut first_seen: Vec<&Product> = Vec::new();
    for product in products_in_traversal_order(orders) {
        let count = counts.entry(product.id_typed()).or_insert(0);
        if *count == 0 {
            first_seen.push(product);
        }
        *count += 1;
    }

    let mut best: Option<(&Product, u64)> = None;
    for product in first_seen {
        let count = counts[&product.id_typed()];
        if best.is_none_or(|(_, winning)| count > winning) {
            best = Some((product, count));
        }
    }
    best.map(|(product, _)| product)
        .ok_or_else(|| DomainError::no_data("no products in any order"))
}

/// Arithmetic mean of the ages of users whose orders contain the product.
///
/// Containment is by product identity. Each matching order contributes its
/// user's age once, no matter how often the product repeats inside it; a
/// user with several matching orders contributes once per order. Fails with
/// `NoData` when no order contains the product.
pub fn average_age(product: &Product, orders: &[Order]) -> DomainResult<f64> {
    let ages: Vec<u32> = orders
        .iter()
        .filter(|order| order.contains_product(product.id_typed()))
        .map(|order| order.user().age())
        .collect();

    if ages.is_empty() {
        return Err(DomainError::no_data(format!(
            "no order contains product {:?}",
            product.name()
        )));
    }

    let total: u64 = ages.iter().copied().map(u64::from).sum();
    Ok(total as f64 / ages.len() as f64)
}

/// Buyers of each distinct product appearing in any order.
///
/// Entries are keyed by product identity and listed in first-seen traversal
/// order, so iteration is deterministic for a fixed input ordering.
pub fn product_user_map(orders: &[Order]) -> Vec<ProductBuyers> {
    let mut index: HashMap<ProductId, usize> = HashMap::new();
    let mut entries: Vec<ProductBuyers> = Vec::new();

    for order in orders {
        let mut seen_in_order: HashSet<ProductId> = HashSet::new();
        for product in order.products() {
            let id = product.id_typed();
            if !seen_in_order.insert(id) {
                // Repeat within this order; its buyer is already counted.
                continue;
            }
            let slot = *index.entry(id).or_insert_with(|| {
                entries.push(ProductBuyers {
                    product: product.clone(),
                    buyers: Vec::new(),
                });
                entries.len() - 1
            });
            entries[slot].buyers.push(order.user().clone());
        }
    }

    entries
}

/// The same products, stably sorted ascending by price.
///
/// Equal prices keep their input order; applying the sort twice yields the
/// same sequence.
pub fn sort_products_by_price(products: &[Product]) -> Vec<Product> {
    let mut sorted = products.to_vec();
    sorted.sort_by_key(Product::price);
    sorted
}

/// The same orders, stably sorted descending by the owning user's age.
///
/// Equal ages keep their input order; applying the sort twice yields the
/// same sequence.
pub fn sort_orders_by_user_age_desc(orders: &[Order]) -> Vec<Order> {
    let mut sorted = orders.to_vec();
    sorted.sort_by(|a, b| b.user().age().cmp(&a.user().age()));
    sorted
}

/// Shipping weight of each order, in input order.
///
/// Only real products weigh anything; an order with no real products maps
/// to 0.
pub fn weight_per_order(orders: &[Order]) -> Vec<OrderWeight> {
    orders
        .iter()
        .map(|order| OrderWeight {
            order_id: order.id_typed(),
            total_weight: order
                .products()
                .iter()
                .map(|product| u64::from(product.shipping_weight()))
                .sum(),
        })
        .collect()
}
