// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Process-wide descriptor cache with single-flight construction.
//!
//! The identity-to-descriptor map is the only shared mutable state in the
//! crate. Inserts happen exclusively inside the single-flight build of a
//! not-yet-present entry (the DashMap shard write lock is held for the
//! duration, so concurrent first callers block until the descriptor is
//! fully built); everything afterwards is read-only against immutable
//! published descriptors. Nothing is ever evicted: metadata volume is
//! bounded by the number of distinct mapped types, not by workload size.

use crate::descriptor::TypeDescriptor;
use crate::error::CreateError;
use crate::identity::TypeIdentity;
use crate::type_info::{Mapped, ObjectFactory};
use dashmap::DashMap;
use std::any::{Any, TypeId};
use std::sync::{Arc, OnceLock};

static DESCRIPTORS: OnceLock<DashMap<TypeId, Arc<TypeDescriptor>>> = OnceLock::new();
static FACTORIES: OnceLock<DashMap<TypeId, ObjectFactory>> = OnceLock::new();

fn descriptors() -> &'static DashMap<TypeId, Arc<TypeDescriptor>> {
    DESCRIPTORS.get_or_init(DashMap::new)
}

fn factories() -> &'static DashMap<TypeId, ObjectFactory> {
    FACTORIES.get_or_init(DashMap::new)
}

/// Descriptor of `T`, building and publishing it on first request.
///
/// Repeated calls return the same `Arc` (pointer identity holds, so callers
/// may key derived state by descriptor identity). Never fails: types whose
/// shape cannot be constructed still get a descriptor whose creation
/// strategy fails when invoked.
pub fn descriptor_of<T: Mapped>() -> Arc<TypeDescriptor> {
    let map = descriptors();
    let type_id = TypeId::of::<T>();

    // Hot path: published descriptors need no write lock.
    if let Some(existing) = map.get(&type_id) {
        return existing.value().clone();
    }

    let entry = map.entry(type_id).or_insert_with(|| {
        let info = T::type_info();
        let registered = factories().get(&type_id).map(|f| f.value().clone());
        let descriptor = Arc::new(TypeDescriptor::build(info, registered));
        log::debug!(
            "[registry] built descriptor for '{}' ({} members, strategy {})",
            descriptor.type_name(),
            descriptor.members().len(),
            descriptor.strategy().kind()
        );
        descriptor
    });
    entry.value().clone()
}

/// Published descriptor for an identity, without building. `None` when the
/// type has not been requested through [`descriptor_of`] yet.
pub fn lookup(identity: TypeIdentity) -> Option<Arc<TypeDescriptor>> {
    descriptors()
        .get(&identity.type_id())
        .map(|e| e.value().clone())
}

/// Register a creation-function override for `T`.
///
/// Must happen before the first [`descriptor_of::<T>`](descriptor_of) call:
/// once the descriptor is published its strategy is fixed. Returns `false`
/// (and logs) when registration came too late; a factory declared on the
/// type itself also takes precedence over one registered here.
pub fn register_factory<T: Any>(
    factory: impl Fn() -> Box<dyn Any> + Send + Sync + 'static,
) -> bool {
    let type_id = TypeId::of::<T>();
    if descriptors().contains_key(&type_id) {
        log::warn!(
            "[registry] factory for '{}' registered after first use; ignored",
            std::any::type_name::<T>()
        );
        return false;
    }
    factories().insert(type_id, Arc::new(factory));
    true
}

/// Typed convenience: blank instance of `T` via its descriptor's strategy.
pub fn create<T: Mapped>() -> Result<T, CreateError> {
    let descriptor = descriptor_of::<T>();
    let instance = descriptor.create_instance()?;
    instance
        .downcast::<T>()
        .map(|boxed| *boxed)
        .map_err(|_| CreateError::InstanceTypeMismatch {
            type_name: descriptor.type_name(),
            expected: std::any::type_name::<T>(),
        })
}
