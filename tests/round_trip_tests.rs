//! Bean → map → bean round trips over the fixture types.

mod common;

use beanmap::{ConversionMap, ObjectRef, Value, conversion_map};
use common::{Address, Person, Primitive, State, TestBean9, sample_person, sample_primitive};

#[test]
fn person_round_trip() {
    let person = sample_person();
    let map = beanmap::to_map(&person).unwrap();
    let back: Person = beanmap::from_map(map).unwrap();
    assert_eq!(back, person);
}

#[test]
fn nested_maps_are_keyed_by_property() {
    let map = beanmap::to_map(&sample_person()).unwrap();

    let keys: Vec<&str> = map.keys().map(String::as_str).collect();
    assert_eq!(keys, ["name", "age", "address"]);
    assert_eq!(map["age"], Value::Int(36));

    let address = map["address"].as_map().unwrap();
    assert_eq!(address["city"], Value::from("London"));

    let state = address["state"].as_map().unwrap();
    assert_eq!(
        state,
        &conversion_map! { "name" => "Greater London", "abbreviation" => "GL" }
    );
}

#[test]
fn null_properties_are_kept() {
    let person = Person {
        name: Some("Nobody".to_string()),
        ..Person::default()
    };
    let map = beanmap::to_map(&person).unwrap();
    assert_eq!(map.len(), 3);
    assert!(map["age"].is_null());
    assert!(map["address"].is_null());

    let back: Person = beanmap::from_map(map).unwrap();
    assert_eq!(back, person);
}

#[test]
fn primitive_round_trip() {
    let primitive = sample_primitive();
    let map = beanmap::to_map(&primitive).unwrap();
    assert_eq!(map.len(), 18);
    assert_eq!(
        map["nestedIntArray"],
        Value::Seq(vec![
            Value::from(vec![1, 2]),
            Value::Seq(vec![]),
            Value::from(vec![3]),
        ])
    );
    assert_eq!(map["charArray"], Value::from(vec!['a', 'b']));

    let back: Primitive = beanmap::from_map(map).unwrap();
    assert_eq!(back, primitive);
}

#[test]
fn default_primitive_round_trip() {
    let map = beanmap::to_map(&Primitive::default()).unwrap();
    assert!(map["intArray"].is_null());
    assert_eq!(map["charMember"], Value::Char('\0'));

    let back: Primitive = beanmap::from_map(map).unwrap();
    assert_eq!(back, Primitive::default());
}

#[test]
fn bean9_round_trip() {
    let bean = TestBean9 {
        a_bool: true,
        a_boolean: Some(true),
        a_string: Some("x".to_string()),
    };
    let map = beanmap::to_map(&bean).unwrap();
    assert_eq!(map, conversion_map! { "aBool" => true, "aString" => "x" });

    // aBoolean has no reader, so it does not survive the trip
    let back: TestBean9 = beanmap::from_map(map).unwrap();
    assert_eq!(
        back,
        TestBean9 {
            a_boolean: None,
            ..bean
        }
    );
}

#[test]
fn projection_is_stable() {
    let person = sample_person();
    let first: ConversionMap = beanmap::to_map(&person).unwrap();
    let second = beanmap::to_map(&person).unwrap();
    assert_eq!(first, second);
    assert!(first.keys().eq(second.keys()));
}

#[test]
fn nested_bean_from_literal_map() {
    let map = conversion_map! {
        "name" => "Grace",
        "address" => conversion_map! {
            "city" => "Arlington",
            "state" => conversion_map! { "abbreviation" => "VA" },
        },
    };
    let person: Person = beanmap::from_map(map).unwrap();
    assert_eq!(
        person,
        Person {
            name: Some("Grace".to_string()),
            age: None,
            address: Some(Address {
                city: Some("Arlington".to_string()),
                state: Some(State {
                    name: None,
                    abbreviation: Some("VA".to_string()),
                }),
                ..Address::default()
            }),
        }
    );
}

mod catalog {
    use beanmap::{ClassBuilder, Describe, TypeDescriptor};

    #[derive(Debug, Default, PartialEq)]
    pub struct Item {
        pub sku: Option<String>,
    }

    impl Describe for Item {
        fn type_name() -> &'static str {
            "Item"
        }

        fn describe() -> TypeDescriptor {
            ClassBuilder::<Item>::new()
                .constructor(Item::default)
                .reader("getSku", |i: &Item| i.sku.clone())
                .writer("setSku", |i: &mut Item, v: Option<String>| i.sku = v)
                .build()
        }
    }
}

mod ledger {
    use beanmap::{ClassBuilder, Describe, TypeDescriptor};

    #[derive(Debug, Default, PartialEq)]
    pub struct Item {
        pub amount: i64,
        pub settled: bool,
    }

    impl Describe for Item {
        fn type_name() -> &'static str {
            "Item"
        }

        fn describe() -> TypeDescriptor {
            ClassBuilder::<Item>::new()
                .constructor(Item::default)
                .reader("getAmount", |i: &Item| i.amount)
                .writer("setAmount", |i: &mut Item, v: i64| i.amount = v)
                .reader("isSettled", |i: &Item| i.settled)
                .writer("setSettled", |i: &mut Item, v: bool| i.settled = v)
                .build()
        }
    }
}

#[test]
fn same_named_types_keep_their_own_properties() {
    let first = catalog::Item {
        sku: Some("A-1".to_string()),
    };
    let second = ledger::Item {
        amount: 12,
        settled: true,
    };
    assert_ne!(
        ObjectRef::of::<catalog::Item>(),
        ObjectRef::of::<ledger::Item>()
    );

    let first_map = beanmap::to_map(&first).unwrap();
    let second_map = beanmap::to_map(&second).unwrap();
    assert_eq!(first_map, conversion_map! { "sku" => "A-1" });
    assert_eq!(
        second_map,
        conversion_map! { "amount" => 12, "settled" => true }
    );

    let first_back: catalog::Item = beanmap::from_map(first_map).unwrap();
    let second_back: ledger::Item = beanmap::from_map(second_map).unwrap();
    assert_eq!(first_back, first);
    assert_eq!(second_back, second);
}
