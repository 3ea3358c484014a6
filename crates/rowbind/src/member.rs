// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Bound get/set capability for one member of one type.

use crate::error::AccessError;
use crate::identity::TypeIdentity;
use crate::type_info::{GetFn, SetFn};
use std::any::Any;

/// Where a member came from during discovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberOrigin {
    /// A publicly visible field or zero-parameter property.
    PublicMember,
    /// A non-public property whose accessors fulfill an interface contract.
    ExplicitInterfaceImplementation,
}

/// One mapped member: name, declared type, origin and the bound accessors.
///
/// Owned by exactly one [`TypeDescriptor`](crate::TypeDescriptor) and
/// immutable after construction. The owner identity is kept for access-time
/// instance validation diagnostics, not ownership.
#[derive(Debug)]
pub struct MemberDescriptor {
    pub(crate) name: &'static str,
    pub(crate) declared_type: &'static str,
    pub(crate) origin: MemberOrigin,
    pub(crate) owner: TypeIdentity,
    pub(crate) getter: Option<GetFn>,
    pub(crate) setter: Option<SetFn>,
}

impl MemberDescriptor {
    /// Member name, unique within the owner except in the undefined
    /// duplicate-name case.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Rust type name of the member's declared type.
    #[must_use]
    pub fn declared_type(&self) -> &'static str {
        self.declared_type
    }

    /// Discovery origin.
    #[must_use]
    pub fn origin(&self) -> MemberOrigin {
        self.origin
    }

    /// Identity of the owning type.
    #[must_use]
    pub fn owner(&self) -> TypeIdentity {
        self.owner
    }

    /// Whether a getter is bound.
    #[must_use]
    pub fn can_read(&self) -> bool {
        self.getter.is_some()
    }

    /// Whether a setter is bound.
    #[must_use]
    pub fn can_write(&self) -> bool {
        self.setter.is_some()
    }

    /// Read the member out of `instance`.
    pub fn get(&self, instance: &dyn Any) -> Result<Box<dyn Any>, AccessError> {
        match self.getter {
            Some(getter) => getter(instance),
            None => Err(AccessError::NotReadable { member: self.name }),
        }
    }

    /// Write `value` into `instance`'s member.
    pub fn set(&self, instance: &mut dyn Any, value: Box<dyn Any>) -> Result<(), AccessError> {
        match self.setter {
            Some(setter) => setter(instance, value),
            None => Err(AccessError::NotWritable { member: self.name }),
        }
    }

    /// Read the member as a concrete `V`.
    pub fn get_as<V: Any>(&self, instance: &dyn Any) -> Result<V, AccessError> {
        self.get(instance)?
            .downcast::<V>()
            .map(|v| *v)
            .map_err(|_| AccessError::ValueTypeMismatch {
                member: self.name,
                expected: std::any::type_name::<V>(),
            })
    }

    /// Write a concrete `V` into the member.
    pub fn set_value<V: Any>(&self, instance: &mut dyn Any, value: V) -> Result<(), AccessError> {
        self.set(instance, Box::new(value))
    }
}
