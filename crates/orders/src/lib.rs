//! Orders domain module (purchase records).
//!
//! An order links one user to the list of products they bought. Pure domain
//! data (no IO, no HTTP, no storage).

pub mod order;

pub use order::{Order, OrderId};
