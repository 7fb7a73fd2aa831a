use serde::{Deserialize, Serialize};

use orderlens_core::{Entity, EntityId};

/// User identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub EntityId);

impl UserId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for UserId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// A shopper. Immutable after construction.
///
/// Identity is the `UserId` assigned by [`User::create`]: two users built
/// from identical fields are distinct entities, while clones share the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: String,
    age: u32,
}

impl User {
    /// Construct a new user. Accepts the given values as-is.
    pub fn create(name: impl Into<String>, age: u32) -> Self {
        Self {
            id: UserId::new(EntityId::new()),
            name: name.into(),
            age,
        }
    }

    pub fn id_typed(&self) -> UserId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }
}

impl Entity for User {
    type Id = UserId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl core::fmt::Display for User {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} (age {})", self.name, self.age)
    }
}
