// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Compile-time type description: the `Mapped` trait and the `TypeInfo`
//! fluent builder.
//!
//! Rust has no open-ended runtime reflection, so a type's mappable members
//! and construction shape are declared up front: either generated by
//! `#[derive(Mapped)]` or written by hand with the builder. The descriptor
//! registry consumes the resulting [`TypeInfo`] exactly once per type.
//!
//! # Example
//!
//! ```rust
//! use std::any::Any;
//! use rowbind::{accessor, AccessError, Mapped, TypeInfo};
//!
//! #[derive(Default)]
//! struct Point {
//!     x: i64,
//! }
//!
//! fn get_x(instance: &dyn Any) -> Result<Box<dyn Any>, AccessError> {
//!     let p = accessor::owner_ref::<Point>("x", instance)?;
//!     Ok(Box::new(p.x))
//! }
//!
//! fn set_x(instance: &mut dyn Any, value: Box<dyn Any>) -> Result<(), AccessError> {
//!     let p = accessor::owner_mut::<Point>("x", instance)?;
//!     p.x = accessor::value_of::<i64>("x", value)?;
//!     Ok(())
//! }
//!
//! impl Mapped for Point {
//!     fn type_info() -> TypeInfo {
//!         TypeInfo::new::<Point>("Point")
//!             .ctor(|| Box::new(Point::default()) as Box<dyn Any>)
//!             .field::<i64>("x", Some(get_x), Some(set_x))
//!     }
//! }
//! ```

use crate::error::AccessError;
use crate::identity::TypeIdentity;
use std::any::Any;
use std::sync::Arc;

/// Zero-argument constructor returning a boxed blank instance.
pub type CreateFn = fn() -> Box<dyn Any>;

/// Bound member getter: reads the member out of a type-erased instance.
pub type GetFn = fn(&dyn Any) -> Result<Box<dyn Any>, AccessError>;

/// Bound member setter: writes a type-erased value into an instance.
pub type SetFn = fn(&mut dyn Any, Box<dyn Any>) -> Result<(), AccessError>;

/// User-supplied creation-function override, preempting shape-based
/// construction.
pub type ObjectFactory = Arc<dyn Fn() -> Box<dyn Any> + Send + Sync>;

/// Identifier of an accessor method, matched against the owner's
/// interface-implementation method map during discovery. Conventionally
/// `"Trait::method"`.
pub type MethodId = &'static str;

/// Construction shape of a type, driving strategy selection.
#[derive(Clone, Copy, Debug)]
pub enum TypeShape {
    /// Value semantics: blank instances are the type's zero/default value.
    Value { default: CreateFn },
    /// Abstract: cannot be instantiated; descriptors are still built for
    /// read-only member mapping.
    Abstract,
    /// Concrete reference shape, with or without a parameterless constructor.
    Concrete { ctor: Option<CreateFn> },
}

/// One publicly visible field or zero-parameter property.
pub struct FieldSpec {
    pub(crate) name: &'static str,
    pub(crate) declared_type: &'static str,
    pub(crate) getter: Option<GetFn>,
    pub(crate) setter: Option<SetFn>,
}

/// One non-public property candidate for explicit-interface inclusion.
///
/// Each accessor carries the [`MethodId`] of the method that implements it;
/// discovery includes the property only when every defined accessor's id
/// appears in the owner's interface-method map.
pub struct PropertySpec {
    pub(crate) name: &'static str,
    pub(crate) declared_type: &'static str,
    pub(crate) getter: Option<(MethodId, GetFn)>,
    pub(crate) setter: Option<(MethodId, SetFn)>,
}

/// A type's registered description: identity, construction shape, declared
/// factory override, public members, non-public property candidates and the
/// interface-implementation method map.
///
/// Built fluently; consumed once by the registry when the descriptor is
/// first requested.
pub struct TypeInfo {
    pub(crate) identity: TypeIdentity,
    pub(crate) shape: TypeShape,
    pub(crate) factory: Option<ObjectFactory>,
    pub(crate) fields: Vec<FieldSpec>,
    pub(crate) properties: Vec<PropertySpec>,
    pub(crate) interface_methods: Vec<MethodId>,
}

impl TypeInfo {
    /// Start describing type `T` under the given name.
    ///
    /// The initial shape is concrete with no constructor; use
    /// [`ctor`](Self::ctor), [`value_default`](Self::value_default) or
    /// [`abstract_type`](Self::abstract_type) to refine it.
    #[must_use]
    pub fn new<T: 'static>(name: &'static str) -> Self {
        Self {
            identity: TypeIdentity::of::<T>(name),
            shape: TypeShape::Concrete { ctor: None },
            factory: None,
            fields: Vec::new(),
            properties: Vec::new(),
            interface_methods: Vec::new(),
        }
    }

    /// The identity being described.
    #[must_use]
    pub fn identity(&self) -> TypeIdentity {
        self.identity
    }

    /// Concrete shape with a parameterless constructor.
    #[must_use]
    pub fn ctor(mut self, f: CreateFn) -> Self {
        self.shape = TypeShape::Concrete { ctor: Some(f) };
        self
    }

    /// Value semantics: blank instances are the type's default value.
    #[must_use]
    pub fn value_default(mut self, f: CreateFn) -> Self {
        self.shape = TypeShape::Value { default: f };
        self
    }

    /// Abstract shape: instantiation always fails, members remain mappable.
    #[must_use]
    pub fn abstract_type(mut self) -> Self {
        self.shape = TypeShape::Abstract;
        self
    }

    /// Set the shape directly.
    #[must_use]
    pub fn shape(mut self, shape: TypeShape) -> Self {
        self.shape = shape;
        self
    }

    /// Declare a creation-function override on the type itself. Overrides
    /// every shape rule, including value and abstract shapes.
    #[must_use]
    pub fn factory(mut self, f: impl Fn() -> Box<dyn Any> + Send + Sync + 'static) -> Self {
        self.factory = Some(Arc::new(f));
        self
    }

    /// Add a publicly visible member of declared type `F`. Read/write flags
    /// follow from which accessors are supplied.
    #[must_use]
    pub fn field<F: 'static>(
        mut self,
        name: &'static str,
        getter: Option<GetFn>,
        setter: Option<SetFn>,
    ) -> Self {
        self.fields.push(FieldSpec {
            name,
            declared_type: std::any::type_name::<F>(),
            getter,
            setter,
        });
        self
    }

    /// Add a non-public property candidate of declared type `F`. Each
    /// supplied accessor names the method implementing it; inclusion is
    /// decided against the interface-method map during discovery.
    #[must_use]
    pub fn private_property<F: 'static>(
        mut self,
        name: &'static str,
        getter: Option<(MethodId, GetFn)>,
        setter: Option<(MethodId, SetFn)>,
    ) -> Self {
        self.properties.push(PropertySpec {
            name,
            declared_type: std::any::type_name::<F>(),
            getter,
            setter,
        });
        self
    }

    /// Record methods of this type that implement interface contracts.
    /// Extends the map; call once per implemented interface or once with
    /// the union.
    #[must_use]
    pub fn implements(mut self, methods: &[MethodId]) -> Self {
        self.interface_methods.extend_from_slice(methods);
        self
    }
}

/// A type whose members and construction shape are known to the registry.
///
/// Implemented by `#[derive(Mapped)]` or by hand. `type_info` is invoked at
/// most once per process, under the registry's single-flight build lock; it
/// must not call back into the registry for the same type.
pub trait Mapped: Any {
    /// Produce the compile-time description consumed by the registry.
    fn type_info() -> TypeInfo;
}
