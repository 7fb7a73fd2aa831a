use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use orderlens_core::{Entity, EntityId};

/// Product identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub EntityId);

impl ProductId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Variant-specific product data. Closed set: physical goods that ship, or
/// virtual goods redeemed by code. Fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductKind {
    Real {
        size: u32,
        /// Shipping weight; feeds the per-order weight aggregation.
        weight: u32,
    },
    Virtual {
        /// Redemption code. Unique per product instance; cross-product
        /// uniqueness is not enforced anywhere.
        code: String,
        expires_on: NaiveDate,
    },
}

/// A catalog item. Immutable after construction.
///
/// The common fields (`name`, `price`) live on the struct; variant data
/// lives behind [`ProductKind`]. Callers that only need the common surface
/// never inspect the variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    /// Price in smallest currency unit (e.g., cents).
    price: u64,
    kind: ProductKind,
}

impl Product {
    /// Construct a physical product.
    pub fn new_real(name: impl Into<String>, price: u64, size: u32, weight: u32) -> Self {
        Self {
            id: ProductId::new(EntityId::new()),
            name: name.into(),
            price,
            kind: ProductKind::Real { size, weight },
        }
    }

    /// Construct a virtual product.
    pub fn new_virtual(
        name: impl Into<String>,
        price: u64,
        code: impl Into<String>,
        expires_on: NaiveDate,
    ) -> Self {
        Self {
            id: ProductId::new(EntityId::new()),
            name: name.into(),
            price,
            kind: ProductKind::Virtual {
                code: code.into(),
                expires_on,
            },
        }
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Price in smallest currency unit (e.g., cents).
    pub fn price(&self) -> u64 {
        self.price
    }

    pub fn kind(&self) -> &ProductKind {
        &self.kind
    }

    /// Weight contributed to an order's shipping total. Virtual products
    /// ship nothing.
    pub fn shipping_weight(&self) -> u32 {
        match &self.kind {
            ProductKind::Real { weight, .. } => *weight,
            ProductKind::Virtual { .. } => 0,
        }
    }

    /// Redemption code, for virtual products.
    pub fn redemption_code(&self) -> Option<&str> {
        match &self.kind {
            ProductKind::Real { .. } => None,
            ProductKind::Virtual { code, .. } => Some(code),
        }
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} ({}.{:02}", self.name, self.price / 100, self.price % 100)?;
        match &self.kind {
            ProductKind::Real { size, weight } => {
                write!(f, ", size {size}, weight {weight})")
            }
            ProductKind::Virtual { code, expires_on } => {
                write!(f, ", code {code:?}, expires {expires_on})")
            }
        }
    }
}
