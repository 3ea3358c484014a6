// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Two-pass member discovery.
//!
//! Pass 1 takes every declared public member. Pass 2 runs only when the type
//! implements at least one interface: each non-public property candidate is
//! included iff every accessor method it defines appears in the
//! interface-implementation method map. Declaration order is preserved and
//! no deduplication happens across the passes; duplicate names are left to
//! the consumer (first match wins on lookup).

use crate::member::{MemberDescriptor, MemberOrigin};
use crate::type_info::TypeInfo;

pub(crate) fn discover(info: &TypeInfo) -> Vec<MemberDescriptor> {
    let mut members = Vec::with_capacity(info.fields.len() + info.properties.len());

    for field in &info.fields {
        members.push(MemberDescriptor {
            name: field.name,
            declared_type: field.declared_type,
            origin: MemberOrigin::PublicMember,
            owner: info.identity,
            getter: field.getter,
            setter: field.setter,
        });
    }

    if !info.interface_methods.is_empty() {
        for prop in &info.properties {
            let getter_mapped = prop
                .getter
                .as_ref()
                .is_none_or(|(id, _)| info.interface_methods.contains(id));
            let setter_mapped = prop
                .setter
                .as_ref()
                .is_none_or(|(id, _)| info.interface_methods.contains(id));

            if getter_mapped && setter_mapped {
                members.push(MemberDescriptor {
                    name: prop.name,
                    declared_type: prop.declared_type,
                    origin: MemberOrigin::ExplicitInterfaceImplementation,
                    owner: info.identity,
                    getter: prop.getter.map(|(_, g)| g),
                    setter: prop.setter.map(|(_, s)| s),
                });
            }
        }
    }

    members
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accessor;
    use crate::error::AccessError;
    use crate::type_info::{GetFn, SetFn, TypeInfo};
    use std::any::Any;

    struct Widget {
        title: String,
        tag: String,
    }

    fn get_title(instance: &dyn Any) -> Result<Box<dyn Any>, AccessError> {
        let w = accessor::owner_ref::<Widget>("title", instance)?;
        Ok(Box::new(w.title.clone()))
    }

    fn set_title(instance: &mut dyn Any, value: Box<dyn Any>) -> Result<(), AccessError> {
        let w = accessor::owner_mut::<Widget>("title", instance)?;
        w.title = accessor::value_of::<String>("title", value)?;
        Ok(())
    }

    fn get_tag(instance: &dyn Any) -> Result<Box<dyn Any>, AccessError> {
        let w = accessor::owner_ref::<Widget>("tag", instance)?;
        Ok(Box::new(w.tag.clone()))
    }

    fn set_tag(instance: &mut dyn Any, value: Box<dyn Any>) -> Result<(), AccessError> {
        let w = accessor::owner_mut::<Widget>("tag", instance)?;
        w.tag = accessor::value_of::<String>("tag", value)?;
        Ok(())
    }

    #[test]
    fn public_members_keep_declaration_order() {
        let info = TypeInfo::new::<Widget>("Widget")
            .field::<String>("title", Some(get_title as GetFn), Some(set_title as SetFn))
            .field::<String>("tag", Some(get_tag as GetFn), None);

        let members = discover(&info);
        assert_eq!(members.len(), 2);
        assert_eq!(members[0].name(), "title");
        assert_eq!(members[0].origin(), MemberOrigin::PublicMember);
        assert!(members[0].can_read() && members[0].can_write());
        assert_eq!(members[1].name(), "tag");
        assert!(members[1].can_read() && !members[1].can_write());
    }

    #[test]
    fn interface_backed_property_included_when_all_accessors_mapped() {
        let info = TypeInfo::new::<Widget>("Widget")
            .implements(&["Tagged::tag", "Tagged::set_tag"])
            .private_property::<String>(
                "tag",
                Some(("Tagged::tag", get_tag as GetFn)),
                Some(("Tagged::set_tag", set_tag as SetFn)),
            );

        let members = discover(&info);
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].name(), "tag");
        assert_eq!(
            members[0].origin(),
            MemberOrigin::ExplicitInterfaceImplementation
        );
        assert!(members[0].can_read() && members[0].can_write());
    }

    #[test]
    fn property_with_unmapped_accessor_is_excluded() {
        // Setter exists on the property but is not an interface implementation.
        let info = TypeInfo::new::<Widget>("Widget")
            .implements(&["Tagged::tag"])
            .private_property::<String>(
                "tag",
                Some(("Tagged::tag", get_tag as GetFn)),
                Some(("Widget::set_tag_internal", set_tag as SetFn)),
            );

        assert!(discover(&info).is_empty());
    }

    #[test]
    fn getter_only_property_is_read_only() {
        let info = TypeInfo::new::<Widget>("Widget")
            .implements(&["Tagged::tag"])
            .private_property::<String>("tag", Some(("Tagged::tag", get_tag as GetFn)), None);

        let members = discover(&info);
        assert_eq!(members.len(), 1);
        assert!(members[0].can_read());
        assert!(!members[0].can_write());
    }

    #[test]
    fn pass_two_skipped_without_interface_methods() {
        // Candidate accessors exist but the type implements no interface.
        let info = TypeInfo::new::<Widget>("Widget").private_property::<String>(
            "tag",
            Some(("Tagged::tag", get_tag as GetFn)),
            None,
        );

        assert!(discover(&info).is_empty());
    }

    #[test]
    fn duplicate_names_are_not_deduplicated() {
        let info = TypeInfo::new::<Widget>("Widget")
            .field::<String>("tag", Some(get_tag as GetFn), Some(set_tag as SetFn))
            .implements(&["Tagged::tag"])
            .private_property::<String>("tag", Some(("Tagged::tag", get_tag as GetFn)), None);

        let members = discover(&info);
        assert_eq!(members.len(), 2);
        assert_eq!(members[0].origin(), MemberOrigin::PublicMember);
        assert_eq!(
            members[1].origin(),
            MemberOrigin::ExplicitInterfaceImplementation
        );
    }
}
