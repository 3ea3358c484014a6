// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Error types for instance creation and member access.
//!
//! Descriptor construction never fails; every error here surfaces at the
//! point of use (`create_instance`, `get`, `set`), not at build time.

use std::fmt;

/// Errors raised by [`TypeDescriptor::create_instance`](crate::TypeDescriptor::create_instance)
/// and the typed [`create`](crate::registry::create) convenience.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateError {
    /// The type was registered as abstract and cannot be instantiated.
    AbstractType { type_name: &'static str },
    /// The type declares no parameterless constructor.
    MissingDefaultConstructor { type_name: &'static str },
    /// A factory override produced a value of a different type than requested.
    InstanceTypeMismatch {
        type_name: &'static str,
        expected: &'static str,
    },
}

impl fmt::Display for CreateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AbstractType { type_name } => {
                write!(f, "cannot create an instance of abstract type '{}'", type_name)
            }
            Self::MissingDefaultConstructor { type_name } => {
                write!(f, "the '{}' type must have a default constructor", type_name)
            }
            Self::InstanceTypeMismatch {
                type_name,
                expected,
            } => {
                write!(
                    f,
                    "factory for '{}' produced a value that is not a '{}'",
                    type_name, expected
                )
            }
        }
    }
}

impl std::error::Error for CreateError {}

/// Errors raised by [`MemberDescriptor::get`](crate::MemberDescriptor::get)
/// and [`MemberDescriptor::set`](crate::MemberDescriptor::set).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    /// The member exposes no getter.
    NotReadable { member: &'static str },
    /// The member exposes no setter.
    NotWritable { member: &'static str },
    /// The instance passed to the accessor is not the owner type.
    InstanceTypeMismatch {
        member: &'static str,
        expected: &'static str,
    },
    /// The value passed to the accessor is not the member's declared type.
    ValueTypeMismatch {
        member: &'static str,
        expected: &'static str,
    },
}

impl fmt::Display for AccessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotReadable { member } => write!(f, "member '{}' has no getter", member),
            Self::NotWritable { member } => write!(f, "member '{}' has no setter", member),
            Self::InstanceTypeMismatch { member, expected } => {
                write!(
                    f,
                    "instance passed to member '{}' is not a '{}'",
                    member, expected
                )
            }
            Self::ValueTypeMismatch { member, expected } => {
                write!(f, "value for member '{}' is not a '{}'", member, expected)
            }
        }
    }
}

impl std::error::Error for AccessError {}
