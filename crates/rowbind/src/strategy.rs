// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Instance creation strategy: selected once at descriptor build time,
//! invoked per blank instance.
//!
//! Selection never fails. Shapes that cannot be constructed are recorded as
//! failure variants that raise only when invoked, so descriptors can be
//! built speculatively for types that will only ever be read.

use crate::error::CreateError;
use crate::type_info::{CreateFn, ObjectFactory, TypeShape};
use std::any::Any;
use std::fmt;

/// The zero-argument construction strategy attached to one descriptor.
#[derive(Clone)]
pub enum InstanceCreationStrategy {
    /// Value semantics: return the type's zero/default value.
    ValueDefault(CreateFn),
    /// Abstract type: always fails with [`CreateError::AbstractType`].
    AbstractFailure,
    /// User-supplied factory override.
    FactoryCreate(ObjectFactory),
    /// Invoke the parameterless constructor.
    DirectCreate(CreateFn),
    /// No parameterless constructor: always fails with
    /// [`CreateError::MissingDefaultConstructor`].
    MissingCtorFailure,
}

impl InstanceCreationStrategy {
    /// Select the strategy for a shape, first match wins:
    /// factory override, value default, abstract failure, direct
    /// constructor, missing-constructor failure.
    pub(crate) fn select(shape: TypeShape, factory: Option<ObjectFactory>) -> Self {
        if let Some(factory) = factory {
            return Self::FactoryCreate(factory);
        }
        match shape {
            TypeShape::Value { default } => Self::ValueDefault(default),
            TypeShape::Abstract => Self::AbstractFailure,
            TypeShape::Concrete { ctor: Some(ctor) } => Self::DirectCreate(ctor),
            TypeShape::Concrete { ctor: None } => Self::MissingCtorFailure,
        }
    }

    /// Run the strategy. Failure variants surface their recorded error here,
    /// never earlier.
    pub fn invoke(&self, type_name: &'static str) -> Result<Box<dyn Any>, CreateError> {
        match self {
            Self::ValueDefault(create) | Self::DirectCreate(create) => Ok(create()),
            Self::FactoryCreate(factory) => Ok(factory()),
            Self::AbstractFailure => Err(CreateError::AbstractType { type_name }),
            Self::MissingCtorFailure => Err(CreateError::MissingDefaultConstructor { type_name }),
        }
    }

    /// Short tag for logging and diagnostics.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ValueDefault(_) => "value-default",
            Self::AbstractFailure => "abstract-failure",
            Self::FactoryCreate(_) => "factory",
            Self::DirectCreate(_) => "direct",
            Self::MissingCtorFailure => "missing-ctor",
        }
    }
}

impl fmt::Debug for InstanceCreationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind())
    }
}
