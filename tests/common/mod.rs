//! Shared bean fixtures for the integration tests.

#![allow(dead_code)]

use beanmap::{ClassBuilder, Describe, TypeDescriptor, impl_bean_value};

#[derive(Debug, Default, Clone, PartialEq)]
pub struct State {
    pub name: Option<String>,
    pub abbreviation: Option<String>,
}

impl State {
    pub fn new(name: &str, abbreviation: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            abbreviation: Some(abbreviation.to_string()),
        }
    }
}

impl Describe for State {
    fn type_name() -> &'static str {
        "State"
    }

    fn describe() -> TypeDescriptor {
        ClassBuilder::<State>::new()
            .constructor(State::default)
            .reader("getName", |s: &State| s.name.clone())
            .writer("setName", |s: &mut State, v: Option<String>| s.name = v)
            .reader("getAbbreviation", |s: &State| s.abbreviation.clone())
            .writer("setAbbreviation", |s: &mut State, v: Option<String>| {
                s.abbreviation = v
            })
            .build()
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Address {
    pub line1: Option<String>,
    pub city: Option<String>,
    pub state: Option<State>,
    pub zip: Option<String>,
}

impl Describe for Address {
    fn type_name() -> &'static str {
        "Address"
    }

    fn describe() -> TypeDescriptor {
        ClassBuilder::<Address>::new()
            .constructor(Address::default)
            .reader("getLine1", |a: &Address| a.line1.clone())
            .writer("setLine1", |a: &mut Address, v: Option<String>| a.line1 = v)
            .reader("getCity", |a: &Address| a.city.clone())
            .writer("setCity", |a: &mut Address, v: Option<String>| a.city = v)
            .reader("getState", |a: &Address| a.state.clone())
            .writer("setState", |a: &mut Address, v: Option<State>| a.state = v)
            .reader("getZip", |a: &Address| a.zip.clone())
            .writer("setZip", |a: &mut Address, v: Option<String>| a.zip = v)
            .build()
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Person {
    pub name: Option<String>,
    pub age: Option<i64>,
    pub address: Option<Address>,
}

impl Describe for Person {
    fn type_name() -> &'static str {
        "Person"
    }

    fn describe() -> TypeDescriptor {
        ClassBuilder::<Person>::new()
            .constructor(Person::default)
            .reader("getName", |p: &Person| p.name.clone())
            .writer("setName", |p: &mut Person, v: Option<String>| p.name = v)
            .reader("getAge", |p: &Person| p.age)
            .writer("setAge", |p: &mut Person, v: Option<i64>| p.age = v)
            .reader("getAddress", |p: &Person| p.address.clone())
            .writer("setAddress", |p: &mut Person, v: Option<Address>| {
                p.address = v
            })
            .build()
    }
}

impl_bean_value!(State, Address, Person);

pub fn sample_person() -> Person {
    Person {
        name: Some("Ada Lovelace".to_string()),
        age: Some(36),
        address: Some(Address {
            line1: Some("12 St James's Square".to_string()),
            city: Some("London".to_string()),
            state: Some(State::new("Greater London", "GL")),
            zip: Some("SW1Y 4JH".to_string()),
        }),
    }
}

/// Every scalar width, its array form, and a two-dimensional array.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Primitive {
    pub bool_member: bool,
    pub bool_array: Option<Vec<bool>>,
    pub char_member: char,
    pub char_array: Option<Vec<char>>,
    pub byte_member: i8,
    pub byte_array: Option<Vec<i8>>,
    pub short_member: i16,
    pub short_array: Option<Vec<i16>>,
    pub int_member: i32,
    pub int_array: Option<Vec<i32>>,
    pub long_member: i64,
    pub long_array: Option<Vec<i64>>,
    pub float_member: f32,
    pub float_array: Option<Vec<f32>>,
    pub double_member: f64,
    pub double_array: Option<Vec<f64>>,
    pub nested_int_array: Option<Vec<Vec<i32>>>,
    pub string_array: Option<Vec<String>>,
}

macro_rules! accessors {
    ($builder:expr, $( $get:literal / $set:literal => $field:ident : $ty:ty ),+ $(,)?) => {
        $builder
            $(
                .reader($get, |p: &Primitive| p.$field.clone())
                .writer($set, |p: &mut Primitive, v: $ty| p.$field = v)
            )+
    };
}

impl Describe for Primitive {
    fn type_name() -> &'static str {
        "Primitive"
    }

    fn describe() -> TypeDescriptor {
        let builder = ClassBuilder::<Primitive>::new().constructor(Primitive::default);
        accessors!(builder,
            "isBoolMember" / "setBoolMember" => bool_member: bool,
            "getBoolArray" / "setBoolArray" => bool_array: Option<Vec<bool>>,
            "getCharMember" / "setCharMember" => char_member: char,
            "getCharArray" / "setCharArray" => char_array: Option<Vec<char>>,
            "getByteMember" / "setByteMember" => byte_member: i8,
            "getByteArray" / "setByteArray" => byte_array: Option<Vec<i8>>,
            "getShortMember" / "setShortMember" => short_member: i16,
            "getShortArray" / "setShortArray" => short_array: Option<Vec<i16>>,
            "getIntMember" / "setIntMember" => int_member: i32,
            "getIntArray" / "setIntArray" => int_array: Option<Vec<i32>>,
            "getLongMember" / "setLongMember" => long_member: i64,
            "getLongArray" / "setLongArray" => long_array: Option<Vec<i64>>,
            "getFloatMember" / "setFloatMember" => float_member: f32,
            "getFloatArray" / "setFloatArray" => float_array: Option<Vec<f32>>,
            "getDoubleMember" / "setDoubleMember" => double_member: f64,
            "getDoubleArray" / "setDoubleArray" => double_array: Option<Vec<f64>>,
            "getNestedIntArray" / "setNestedIntArray" => nested_int_array: Option<Vec<Vec<i32>>>,
            "getStringArray" / "setStringArray" => string_array: Option<Vec<String>>,
        )
        .build()
    }
}

pub fn sample_primitive() -> Primitive {
    Primitive {
        bool_member: true,
        bool_array: Some(vec![true, false, true]),
        char_member: 'z',
        char_array: Some(vec!['a', 'b']),
        byte_member: -8,
        byte_array: Some(vec![i8::MIN, 0, i8::MAX]),
        short_member: 1024,
        short_array: Some(vec![i16::MIN, i16::MAX]),
        int_member: 42,
        int_array: Some(vec![1, 2, 3]),
        long_member: i64::MAX,
        long_array: Some(vec![i64::MIN, 0]),
        float_member: 1.1,
        float_array: Some(vec![0.5, -2.25, 3.3]),
        double_member: std::f64::consts::PI,
        double_array: Some(vec![1e-10, 1e10]),
        nested_int_array: Some(vec![vec![1, 2], vec![], vec![3]]),
        string_array: Some(vec!["one".to_string(), "two".to_string()]),
    }
}

/// Primitive bool behind `isABool`, boxed bool behind a non-reader `isABoolean`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TestBean9 {
    pub a_bool: bool,
    pub a_boolean: Option<bool>,
    pub a_string: Option<String>,
}

impl Describe for TestBean9 {
    fn type_name() -> &'static str {
        "TestBean9"
    }

    fn describe() -> TypeDescriptor {
        ClassBuilder::<TestBean9>::new()
            .constructor(TestBean9::default)
            .writer("setABool", |b: &mut TestBean9, v: bool| b.a_bool = v)
            .reader("isABool", |b: &TestBean9| b.a_bool)
            .writer("setABoolean", |b: &mut TestBean9, v: Option<bool>| {
                b.a_boolean = v
            })
            .reader("isABoolean", |b: &TestBean9| b.a_boolean)
            .writer("setAString", |b: &mut TestBean9, v: Option<String>| {
                b.a_string = v
            })
            .reader("getAString", |b: &TestBean9| b.a_string.clone())
            .build()
    }
}
