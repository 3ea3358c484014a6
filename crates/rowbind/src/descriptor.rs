// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Per-type descriptor: ordered members plus one creation strategy.

use crate::discovery;
use crate::error::CreateError;
use crate::identity::TypeIdentity;
use crate::member::MemberDescriptor;
use crate::strategy::InstanceCreationStrategy;
use crate::type_info::{ObjectFactory, TypeInfo};
use std::any::Any;
use std::fmt;

/// Immutable accessor metadata for one type: identity, members in
/// declaration order, the selected creation strategy and the factory
/// override it was built with, if any.
///
/// At most one descriptor exists per identity for the process lifetime;
/// the registry publishes it once and never mutates it afterwards.
pub struct TypeDescriptor {
    identity: TypeIdentity,
    members: Vec<MemberDescriptor>,
    strategy: InstanceCreationStrategy,
    factory: Option<ObjectFactory>,
}

impl TypeDescriptor {
    /// Build a descriptor from a type description and an optionally
    /// pre-registered factory override. Never fails: non-constructible
    /// shapes become deferred-failure strategies.
    pub(crate) fn build(info: TypeInfo, registered_factory: Option<ObjectFactory>) -> Self {
        let members = discovery::discover(&info);
        // A factory declared on the type wins over one registered externally.
        let factory = info.factory.clone().or(registered_factory);
        let strategy = InstanceCreationStrategy::select(info.shape, factory.clone());

        Self {
            identity: info.identity,
            members,
            strategy,
            factory,
        }
    }

    /// Identity this descriptor was built for.
    #[must_use]
    pub fn identity(&self) -> TypeIdentity {
        self.identity
    }

    /// Registered name of the described type.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.identity.name()
    }

    /// Members in declaration order.
    #[must_use]
    pub fn members(&self) -> &[MemberDescriptor] {
        &self.members
    }

    /// First member with the given name, if any. Duplicate names are
    /// undefined behavior upstream; lookup simply returns the first match.
    #[must_use]
    pub fn member(&self, name: &str) -> Option<&MemberDescriptor> {
        self.members.iter().find(|m| m.name == name)
    }

    /// The creation strategy selected at build time.
    #[must_use]
    pub fn strategy(&self) -> &InstanceCreationStrategy {
        &self.strategy
    }

    /// Whether a factory override is attached.
    #[must_use]
    pub fn has_factory(&self) -> bool {
        self.factory.is_some()
    }

    /// Construct a blank instance. This is where deferred construction
    /// failures actually surface.
    pub fn create_instance(&self) -> Result<Box<dyn Any>, CreateError> {
        self.strategy.invoke(self.identity.name())
    }
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("identity", &self.identity)
            .field("members", &self.members.len())
            .field("strategy", &self.strategy)
            .field("factory", &self.factory.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accessor;
    use crate::error::AccessError;
    use crate::type_info::{GetFn, TypeInfo};

    struct Pair {
        first: u32,
        second: u32,
    }

    fn get_first(instance: &dyn Any) -> Result<Box<dyn Any>, AccessError> {
        let p = accessor::owner_ref::<Pair>("value", instance)?;
        Ok(Box::new(p.first))
    }

    fn get_second(instance: &dyn Any) -> Result<Box<dyn Any>, AccessError> {
        let p = accessor::owner_ref::<Pair>("value", instance)?;
        Ok(Box::new(p.second))
    }

    #[test]
    fn duplicate_member_lookup_returns_first_match() {
        // Duplicate names are undefined behavior; the descriptor must still
        // build and answer lookups without crashing.
        let info = TypeInfo::new::<Pair>("Pair")
            .field::<u32>("value", Some(get_first as GetFn), None)
            .field::<u32>("value", Some(get_second as GetFn), None);

        let descriptor = TypeDescriptor::build(info, None);
        assert_eq!(descriptor.members().len(), 2);

        let pair = Pair {
            first: 1,
            second: 2,
        };
        let member = descriptor.member("value").expect("first match");
        assert_eq!(member.get_as::<u32>(&pair), Ok(1));
    }

    #[test]
    fn missing_ctor_descriptor_builds_but_fails_on_create() {
        let info = TypeInfo::new::<Pair>("Pair").field::<u32>("value", Some(get_first as GetFn), None);
        let descriptor = TypeDescriptor::build(info, None);

        assert_eq!(descriptor.strategy().kind(), "missing-ctor");
        assert_eq!(
            descriptor.create_instance().map(|_| ()),
            Err(CreateError::MissingDefaultConstructor { type_name: "Pair" })
        );
    }
}
