// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! End-to-end tests for `#[derive(Mapped)]`: generated member enumeration,
//! attribute handling and generated accessors, exercised through the
//! public registry API.

use rowbind::{registry, AccessError, CreateError, Mapped, MemberOrigin};

#[derive(Default, Mapped)]
struct Person {
    name: String,
    age: u32,
    #[mapped(skip)]
    #[allow(dead_code)]
    scratch: Vec<u8>,
    #[mapped(readonly)]
    id: u64,
}

#[test]
fn derived_members_follow_declaration_order_and_attributes() {
    let descriptor = registry::descriptor_of::<Person>();

    let names: Vec<_> = descriptor.members().iter().map(|m| m.name()).collect();
    assert_eq!(names, ["name", "age", "id"]);
    assert!(descriptor
        .members()
        .iter()
        .all(|m| m.origin() == MemberOrigin::PublicMember));

    let id = descriptor.member("id").expect("id member");
    assert!(id.can_read());
    assert!(!id.can_write());

    let mut person = Person::default();
    assert_eq!(
        id.set_value(&mut person, 1u64),
        Err(AccessError::NotWritable { member: "id" })
    );
}

#[test]
fn derived_accessors_round_trip() {
    let descriptor = registry::descriptor_of::<Person>();
    let mut person = Person::default();

    let name = descriptor.member("name").expect("name member");
    let age = descriptor.member("age").expect("age member");

    name.set_value(&mut person, "Grace".to_string()).expect("set name");
    age.set_value(&mut person, 46u32).expect("set age");

    assert_eq!(person.name, "Grace");
    assert_eq!(person.age, 46);
    assert_eq!(name.get_as::<String>(&person).expect("get name"), "Grace");
    assert_eq!(age.get_as::<u32>(&person).expect("get age"), 46);

    for _ in 0..32 {
        let value = fastrand::u32(..);
        age.set_value(&mut person, value).expect("set age");
        assert_eq!(age.get_as::<u32>(&person).expect("get age"), value);
    }
}

#[test]
fn derived_declared_types_are_recorded() {
    let descriptor = registry::descriptor_of::<Person>();
    let age = descriptor.member("age").expect("age member");
    assert_eq!(age.declared_type(), std::any::type_name::<u32>());
}

#[test]
fn default_shape_creates_blank_instances() {
    let person = registry::create::<Person>().expect("default ctor");
    assert_eq!(person.name, "");
    assert_eq!(person.age, 0);
}

#[derive(Default, Clone, Copy, PartialEq, Debug, Mapped)]
#[mapped(value)]
struct Celsius {
    degrees: f64,
}

#[test]
fn value_attribute_selects_value_default_strategy() {
    let descriptor = registry::descriptor_of::<Celsius>();
    assert_eq!(descriptor.strategy().kind(), "value-default");

    let blank = registry::create::<Celsius>().expect("value default never fails");
    assert_eq!(blank, Celsius { degrees: 0.0 });
}

#[derive(Mapped)]
#[mapped(no_default)]
struct Connection {
    #[mapped(readonly)]
    endpoint: String,
}

#[test]
fn no_default_attribute_defers_failure_to_create() {
    let descriptor = registry::descriptor_of::<Connection>();

    // Descriptor still built; members usable for read-only mapping.
    let conn = Connection {
        endpoint: "db:5432".to_string(),
    };
    assert_eq!(
        descriptor
            .member("endpoint")
            .expect("endpoint")
            .get_as::<String>(&conn)
            .expect("read"),
        "db:5432"
    );

    assert_eq!(
        descriptor.create_instance().map(|_| ()),
        Err(CreateError::MissingDefaultConstructor {
            type_name: "Connection"
        })
    );
}

fn make_session() -> Session {
    Session { token: 7 }
}

#[derive(Mapped)]
#[mapped(no_default, factory = "make_session")]
struct Session {
    token: u64,
}

#[test]
fn factory_attribute_preempts_shape_rules() {
    let descriptor = registry::descriptor_of::<Session>();
    assert_eq!(descriptor.strategy().kind(), "factory");

    let session = registry::create::<Session>().expect("factory creates");
    assert_eq!(session.token, 7);
}

#[derive(Default, Mapped)]
struct Metered {
    count: u32,
}

#[test]
fn factory_registered_before_first_use_wins_over_default_ctor() {
    // Metered has a Default-based ctor shape, but the registered override
    // must take precedence when it arrives before first use.
    assert!(registry::register_factory::<Metered>(|| {
        Box::new(Metered { count: 3 }) as Box<dyn std::any::Any>
    }));

    let descriptor = registry::descriptor_of::<Metered>();
    assert_eq!(descriptor.strategy().kind(), "factory");

    let metered = registry::create::<Metered>().expect("factory creates");
    assert_eq!(metered.count, 3);
}
