mod common;

use std::cmp::Ordering;

use chainrec_core::adapters::natural_order;
use chainrec_core::prelude::*;
use common::{Fixture, Person};

fn people() -> Vec<Value> {
    vec![
        Person::new("Carol", 50).living_in("Oslo").into_value(),
        Person::new("Alice", 25).living_in("Rome").into_value(),
        Person::new("Dave", 33).into_value(),
        Person::new("Bob", 40).living_in("Athens").into_value(),
    ]
}

fn names(handle: &ArgumentHandle, values: &[Value]) -> Vec<String> {
    values
        .iter()
        .map(|value| {
            extract_value(handle, value)
                .unwrap()
                .as_str()
                .map(str::to_string)
                .unwrap_or_default()
        })
        .collect()
}

#[test]
fn test_compare_by_age() {
    let fixture = Fixture::new();
    let age = fixture.person_handle(&["getAge"]);

    let young = Person::new("Alice", 25).into_value();
    let old = Person::new("Bob", 40).into_value();

    assert_eq!(compare(&age, &young, &old).unwrap(), Ordering::Less);
    assert_eq!(compare(&age, &old, &young).unwrap(), Ordering::Greater);
    assert_eq!(compare(&age, &old, &old).unwrap(), Ordering::Equal);
}

#[test]
fn test_sort_with_comparator() {
    let fixture = Fixture::new();
    let age = fixture.person_handle(&["getAge"]);
    let name = fixture.person_handle(&["getName"]);
    let comparator = ArgumentComparator::new(age);

    let mut sorted = people();
    sorted.sort_by(|a, b| comparator.compare(a, b).unwrap());

    assert_eq!(names(&name, &sorted), ["Alice", "Dave", "Bob", "Carol"]);
}

#[test]
fn test_descending_comparator() {
    let fixture = Fixture::new();
    let age = fixture.person_handle(&["getAge"]);
    let name = fixture.person_handle(&["getName"]);
    let comparator = ArgumentComparator::new(age).descending();

    let mut sorted = people();
    sorted.sort_by(|a, b| comparator.compare(a, b).unwrap());

    assert_eq!(names(&name, &sorted), ["Carol", "Bob", "Dave", "Alice"]);
}

#[test]
fn test_nulls_order_first() {
    let fixture = Fixture::new();
    let city = fixture.person_handle(&["getAddress", "getCity"]);
    let name = fixture.person_handle(&["getName"]);
    let comparator = ArgumentComparator::new(city);

    let mut sorted = people();
    sorted.sort_by(|a, b| comparator.compare(a, b).unwrap());

    assert_eq!(names(&name, &sorted), ["Dave", "Bob", "Carol", "Alice"]);
}

#[test]
fn test_custom_ordering_keeps_nulls_first() {
    let fixture = Fixture::new();
    let city = fixture.person_handle(&["getAddress", "getCity"]);
    let name = fixture.person_handle(&["getName"]);

    // Longest city name first
    let comparator = ArgumentComparator::new(city).with_ordering(|a, b| {
        let len = |v: &Value| v.as_str().map_or(0, str::len);
        len(b).cmp(&len(a))
    });

    let mut sorted = people();
    sorted.sort_by(|a, b| comparator.compare(a, b).unwrap());

    assert_eq!(names(&name, &sorted), ["Dave", "Bob", "Carol", "Alice"]);
}

#[test]
fn test_compare_with_closure() {
    let fixture = Fixture::new();
    let name = fixture.person_handle(&["getName"]);
    let ada = Person::new("ada", 1).into_value();
    let bob = Person::new("BOB", 1).into_value();

    let case_insensitive = |a: &Value, b: &Value| {
        let lower = |v: &Value| v.as_str().unwrap_or_default().to_lowercase();
        lower(a).cmp(&lower(b))
    };

    assert_eq!(compare(&name, &bob, &ada).unwrap(), Ordering::Less);
    assert_eq!(compare_with(&name, &bob, &ada, case_insensitive).unwrap(), Ordering::Greater);
}

#[test]
fn test_objects_compare_by_sort_key() {
    let fixture = Fixture::new();
    let friend = fixture.person_handle(&["getFriend"]);

    let older_friend = Person::new("A", 1).with_friend(Person::new("X", 70)).into_value();
    let younger_friend = Person::new("B", 1).with_friend(Person::new("Y", 20)).into_value();

    assert_eq!(compare(&friend, &older_friend, &younger_friend).unwrap(), Ordering::Greater);
}

#[test]
fn test_uncomparable_values_rejected() {
    let fixture = Fixture::new();
    let salary = fixture.person_handle(&["getSalary"]);

    let a = Person::new("A", 1).earning(100).into_value();
    let b = Person::new("B", 1).earning(200).into_value();

    let err = compare(&salary, &a, &b).unwrap_err();
    assert!(matches!(err, LambdaError::NotComparable { .. }));
}

#[test]
fn test_natural_order_rules() {
    assert_eq!(natural_order(&Value::Null, &Value::Int(1)).unwrap(), Ordering::Less);
    assert_eq!(natural_order(&Value::Int(2), &Value::Float(1.5)).unwrap(), Ordering::Greater);
    assert_eq!(natural_order(&Value::Bool(false), &Value::Bool(true)).unwrap(), Ordering::Less);
    assert_eq!(natural_order(&Value::from("a"), &Value::from("b")).unwrap(), Ordering::Less);

    assert!(natural_order(&Value::from("1"), &Value::Int(1)).is_err());
    assert!(natural_order(&Value::Float(f64::NAN), &Value::Float(1.0)).is_err());
}

#[test]
fn test_convert_projects_collection() {
    let fixture = Fixture::new();
    let city = fixture.person_handle(&["getAddress", "getCity"]);
    let converter = ArgumentConverter::new(city.clone());

    let cities: Vec<Value> = people()
        .iter()
        .map(|person| converter.convert(person).unwrap())
        .collect();

    assert_eq!(
        cities,
        vec![Value::from("Oslo"), Value::from("Rome"), Value::Null, Value::from("Athens")]
    );
    assert_eq!(convert(&city, &people()[0]).unwrap(), Value::from("Oslo"));
}

#[test]
fn test_convert_as_rust_type() {
    let fixture = Fixture::new();
    let age = fixture.person_handle(&["getAge"]);
    let converter = ArgumentConverter::new(age);

    let ada = Person::new("Ada", 36).into_value();
    assert_eq!(converter.convert_as::<i64>(&ada).unwrap(), Some(36));
    assert_eq!(converter.convert_as::<f64>(&ada).unwrap(), Some(36.0));
    assert_eq!(converter.convert_as::<i64>(&Value::Null).unwrap(), None);

    let err = converter.convert_as::<String>(&ada).unwrap_err();
    assert!(matches!(err, LambdaError::NotConvertible { ref actual, .. } if actual == "int"));
}

#[test]
fn test_mixed_numbers_order_exactly_past_float_precision() {
    let two_53 = 1_i64 << 53;
    let above = Value::Int(two_53 + 1);
    let float = Value::Float(2f64.powi(53));
    let exact = Value::Int(two_53);

    assert_eq!(natural_order(&above, &float).unwrap(), Ordering::Greater);
    assert_eq!(natural_order(&float, &above).unwrap(), Ordering::Less);
    assert_eq!(natural_order(&float, &exact).unwrap(), Ordering::Equal);
    assert_eq!(natural_order(&above, &exact).unwrap(), Ordering::Greater);
}

#[test]
fn test_mixed_numbers_fraction_and_range() {
    assert_eq!(natural_order(&Value::Int(2), &Value::Float(2.5)).unwrap(), Ordering::Less);
    assert_eq!(natural_order(&Value::Int(-2), &Value::Float(-2.5)).unwrap(), Ordering::Greater);
    assert_eq!(natural_order(&Value::Int(i64::MAX), &Value::Float(f64::INFINITY)).unwrap(), Ordering::Less);
    assert_eq!(natural_order(&Value::Int(i64::MIN), &Value::Float(-1e19)).unwrap(), Ordering::Greater);
    assert_eq!(natural_order(&Value::Int(i64::MAX), &Value::Float(9.223_372_036_854_775_808e18)).unwrap(), Ordering::Less);
    assert!(natural_order(&Value::Int(1), &Value::Float(f64::NAN)).is_err());
}

#[test]
fn test_descending_keeps_nulls_first() {
    let fixture = Fixture::new();
    let city = fixture.person_handle(&["getAddress", "getCity"]);
    let name = fixture.person_handle(&["getName"]);
    let comparator = ArgumentComparator::new(city).descending();

    let mut sorted = people();
    sorted.sort_by(|a, b| comparator.compare(a, b).unwrap());

    assert_eq!(names(&name, &sorted), ["Dave", "Alice", "Carol", "Bob"]);
    assert_eq!(comparator.compare_extracted(&Value::Null, &Value::from("Rome")).unwrap(), Ordering::Less);
}

#[test]
fn test_into_typed_maps_null_and_mismatch() {
    assert_eq!(into_typed::<String>(Value::from("Rome")).unwrap(), Some("Rome".to_string()));
    assert_eq!(into_typed::<bool>(Value::Null).unwrap(), None);

    let err = into_typed::<bool>(Value::Int(1)).unwrap_err();
    assert!(matches!(err, LambdaError::NotConvertible { expected: "bool", ref actual } if actual == "int"));
}
