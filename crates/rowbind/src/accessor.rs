// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Downcast helpers shared by generated and hand-written accessor functions.
//!
//! Keeping these in one place lets accessors stay capture-free closures that
//! coerce to plain `fn` pointers: no allocation, no dynamic dispatch beyond
//! the initial `dyn Any` cast.

use crate::error::AccessError;
use std::any::Any;

/// Downcast a type-erased instance to its owner type for reading.
pub fn owner_ref<'a, T: Any>(
    member: &'static str,
    instance: &'a dyn Any,
) -> Result<&'a T, AccessError> {
    instance
        .downcast_ref::<T>()
        .ok_or(AccessError::InstanceTypeMismatch {
            member,
            expected: std::any::type_name::<T>(),
        })
}

/// Downcast a type-erased instance to its owner type for writing.
pub fn owner_mut<'a, T: Any>(
    member: &'static str,
    instance: &'a mut dyn Any,
) -> Result<&'a mut T, AccessError> {
    instance
        .downcast_mut::<T>()
        .ok_or(AccessError::InstanceTypeMismatch {
            member,
            expected: std::any::type_name::<T>(),
        })
}

/// Unbox a type-erased value as the member's declared type.
pub fn value_of<V: Any>(member: &'static str, value: Box<dyn Any>) -> Result<V, AccessError> {
    value
        .downcast::<V>()
        .map(|v| *v)
        .map_err(|_| AccessError::ValueTypeMismatch {
            member,
            expected: std::any::type_name::<V>(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Holder {
        n: u32,
    }

    #[test]
    fn owner_ref_rejects_foreign_instances() {
        let holder = Holder { n: 7 };
        assert_eq!(owner_ref::<Holder>("n", &holder).map(|h| h.n), Ok(7));

        let not_a_holder = 3.5f64;
        let err = owner_ref::<Holder>("n", &not_a_holder).map(|h| h.n);
        assert!(matches!(
            err,
            Err(AccessError::InstanceTypeMismatch { member: "n", .. })
        ));
    }

    #[test]
    fn value_of_rejects_wrong_value_type() {
        let ok = value_of::<u32>("n", Box::new(5u32));
        assert_eq!(ok, Ok(5));

        let err = value_of::<u32>("n", Box::new("five".to_string()));
        assert!(matches!(
            err,
            Err(AccessError::ValueTypeMismatch { member: "n", .. })
        ));
    }
}
