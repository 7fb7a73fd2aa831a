use serde::{Deserialize, Serialize};

use orderlens_catalog::{Product, ProductId};
use orderlens_core::{Entity, EntityId};
use orderlens_users::User;

/// Order identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub EntityId);

impl OrderId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for OrderId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// A purchase record: one user, the products they bought. Immutable after
/// construction; never mutates its products.
///
/// The product list is stored as given — no deduplication, repeats allowed,
/// empty allowed. Products are shared across orders by identity
/// ([`ProductId`]), so the same catalog item may appear in many orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    user: User,
    products: Vec<Product>,
}

impl Order {
    /// Construct a new order for `user` over `products`, kept as given.
    pub fn create(user: User, products: Vec<Product>) -> Self {
        Self {
            id: OrderId::new(EntityId::new()),
            user,
            products,
        }
    }

    pub fn id_typed(&self) -> OrderId {
        self.id
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Whether any occurrence of the product (by identity) is in this order.
    pub fn contains_product(&self, product_id: ProductId) -> bool {
        self.products.iter().any(|p| p.id_typed() == product_id)
    }
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl core::fmt::Display for Order {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "order by {}: [{}]",
            self.user,
            self.products
                .iter()
                .map(|p| p.name())
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
