//! Users domain module (shoppers placing orders).
//!
//! This crate contains the `User` entity, implemented purely as
//! deterministic domain data (no IO, no HTTP, no storage).

pub mod user;

pub use user::{User, UserId};
