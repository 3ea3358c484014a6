// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Canonical type identity used as the descriptor cache key.

use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Canonical identifier of a mapped type.
///
/// Wraps the Rust [`TypeId`] plus the name the type was registered under.
/// Equality and hashing consider only the `TypeId`: two requests for the same
/// Rust type always resolve to the same identity, whatever name each
/// registration carried.
#[derive(Debug, Clone, Copy)]
pub struct TypeIdentity {
    id: TypeId,
    name: &'static str,
}

impl TypeIdentity {
    /// Identity of `T` under the given registered name.
    #[must_use]
    pub fn of<T: 'static>(name: &'static str) -> Self {
        Self {
            id: TypeId::of::<T>(),
            name,
        }
    }

    /// The underlying Rust `TypeId`.
    #[must_use]
    pub fn type_id(&self) -> TypeId {
        self.id
    }

    /// The name the type was registered under.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for TypeIdentity {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeIdentity {}

impl Hash for TypeIdentity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for TypeIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
