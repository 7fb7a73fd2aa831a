//! Analytics read side: ad-hoc reports over in-memory orders.
//!
//! Stateless query functions over a sequence of orders. Inputs are
//! read-only; a query with nothing to report fails with
//! [`orderlens_core::DomainError::NoData`] rather than inventing a default.

pub mod reports;

pub use reports::{
    OrderWeight, ProductBuyers, average_age, most_expensive_product, most_popular_product,
    product_user_map, sort_orders_by_user_age_desc, sort_products_by_price, weight_per_order,
};
