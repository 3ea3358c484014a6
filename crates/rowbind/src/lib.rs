// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # rowbind - runtime type metadata for row-to-object mapping
//!
//! For each mapped type, rowbind builds one cached [`TypeDescriptor`]
//! exposing a reflection-free way to construct a blank instance and bound
//! get/set accessors for every mapped member, so a row mapper can populate
//! arbitrary objects from tabular data without per-row lookup cost.
//!
//! Member enumeration is compile-time: `#[derive(Mapped)]` generates it for
//! named-field structs, and the [`TypeInfo`] builder expresses everything
//! the derive cannot (abstract shapes, interface-backed non-public members).
//!
//! ## Quick Start
//!
//! ```rust
//! use rowbind::{registry, Mapped};
//!
//! #[derive(Default, Mapped)]
//! struct Person {
//!     name: String,
//!     age: u32,
//! }
//!
//! // First request builds and publishes the descriptor; later requests hit
//! // the cache and return the same Arc.
//! let descriptor = registry::descriptor_of::<Person>();
//!
//! let mut blank = descriptor.create_instance().expect("Person has a default ctor");
//! let name = descriptor.member("name").expect("mapped member");
//! name.set_value(&mut *blank, "Ada".to_string()).expect("writable");
//! assert_eq!(name.get_as::<String>(&*blank).expect("readable"), "Ada");
//! ```
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`registry::descriptor_of`] | Entry point: cached descriptor per type, single-flight build |
//! | [`TypeDescriptor`] | Ordered members + one creation strategy for one type |
//! | [`MemberDescriptor`] | Bound get/set capability for one member |
//! | [`InstanceCreationStrategy`] | Zero-argument construction, failures deferred to invocation |
//! | [`TypeInfo`] | Fluent compile-time type description |
//!
//! ## Failure model
//!
//! Descriptor construction never fails. Abstract and constructor-less types
//! get descriptors whose creation strategy raises only when invoked, so
//! descriptors can be built speculatively for types that are only ever read.

pub mod accessor;
mod descriptor;
mod discovery;
mod error;
mod identity;
mod member;
pub mod registry;
mod strategy;
mod type_info;

pub use descriptor::TypeDescriptor;
pub use error::{AccessError, CreateError};
pub use identity::TypeIdentity;
pub use member::{MemberDescriptor, MemberOrigin};
pub use registry::{create, descriptor_of, lookup, register_factory};
pub use strategy::InstanceCreationStrategy;
pub use type_info::{
    CreateFn, FieldSpec, GetFn, Mapped, MethodId, ObjectFactory, PropertySpec, SetFn, TypeInfo,
    TypeShape,
};

/// Derive macro generating a `Mapped` impl for named-field structs.
pub use rowbind_codegen::Mapped;
