mod common;

use chainrec_core::prelude::*;
use common::{Address, Circle, Fixture, Person, Square};

#[test]
fn test_extract_nested_property() {
    let fixture = Fixture::new();
    let city = fixture.person_handle(&["getAddress", "getCity"]);

    let alice = Person::new("Alice", 30).living_in("Rome").into_value();
    assert_eq!(extract_value(&city, &alice).unwrap(), Value::from("Rome"));
}

#[test]
fn test_null_intermediate_short_circuits() {
    let fixture = Fixture::new();
    let city = fixture.person_handle(&["getAddress", "getCity"]);
    let homeless = Person::new("Bob", 40).into_value();

    let outcome = ReplayEngine::evaluate_outcome(city.chain(), &homeless).unwrap();
    assert_eq!(outcome, ReplayOutcome::ShortCircuited { step: 1 });
    assert_eq!(extract_value(&city, &homeless).unwrap(), Value::Null);
}

#[test]
fn test_null_root_yields_null() {
    let fixture = Fixture::new();
    let age = fixture.person_handle(&["getAge"]);

    let outcome = ReplayEngine::evaluate_outcome(age.chain(), &Value::Null).unwrap();
    assert!(outcome.is_short_circuit());
    assert_eq!(outcome.value(), None);
}

#[test]
fn test_identity_chain_returns_root() {
    let fixture = Fixture::new();
    let identity = fixture.registry.close(fixture.person()).unwrap();
    let ada = Person::new("Ada", 36).into_value();

    assert_eq!(extract_value(&identity, &ada).unwrap(), ada);
}

#[test]
fn test_arguments_replayed() {
    let fixture = Fixture::new();
    let person = fixture.person();
    let greeting = person.call("greet", &[Value::from("Hello")]).unwrap();
    let handle = fixture.registry.close(greeting).unwrap();

    let ada = Person::new("Ada", 36).into_value();
    assert_eq!(extract_value(&handle, &ada).unwrap(), Value::from("Hello, Ada"));
}

#[test]
fn test_overloads_replayed_by_arity() {
    let fixture = Fixture::new();
    let ada = Person::new("Ada", 36).into_value();

    let plain = fixture.person_handle(&["score"]);
    assert_eq!(extract_value(&plain, &ada).unwrap(), Value::Int(36));

    let person = fixture.person();
    let bonus = person.call("score", &[Value::Int(4)]).unwrap();
    let bonus = fixture.registry.close(bonus).unwrap();
    assert_eq!(extract_value(&bonus, &ada).unwrap(), Value::Int(40));
}

#[test]
fn test_replay_dispatches_on_runtime_type() {
    let fixture = Fixture::new();
    let shape = fixture.shape();
    let scaled = shape.call("scaled", &[Value::Float(2.0)]).unwrap();
    let area = fixture.registry.close(scaled.get("area").unwrap()).unwrap();

    let square = Value::object(Square { side: 3.0 });
    assert_eq!(extract_value(&area, &square).unwrap(), Value::Float(36.0));

    let circle = Value::object(Circle { radius: 1.0 });
    let circle_area = extract_value(&area, &circle).unwrap().as_f64().unwrap();
    assert!((circle_area - 4.0 * std::f64::consts::PI).abs() < 1e-9);
}

#[test]
fn test_sealed_terminal_returns_real_object() {
    let fixture = Fixture::new();
    let salary = fixture.person_handle(&["getSalary"]);
    let paid = Person::new("Ada", 36).earning(500_000).into_value();

    let money = extract_value(&salary, &paid).unwrap();
    assert_eq!(money.type_name(), "Money");
}

#[test]
fn test_recursive_chain_replay() {
    let fixture = Fixture::new();
    let friend_name = fixture.person_handle(&["getFriend", "getFriend", "getName"]);

    let carol = Person::new("Carol", 50);
    let bob = Person::new("Bob", 40).with_friend(carol);
    let alice = Person::new("Alice", 30).with_friend(bob).into_value();

    assert_eq!(extract_value(&friend_name, &alice).unwrap(), Value::from("Carol"));
}

#[test]
fn test_wrong_root_type_reports_step() {
    let fixture = Fixture::new();
    let age = fixture.person_handle(&["getAge"]);
    let address = Value::object(Address::new("Rome", 100));

    let err = extract_value(&age, &address).unwrap_err();
    match err {
        LambdaError::ChainReplayError {
            step,
            ref method,
            ref declared_type,
            ref actual_type,
            ..
        } => {
            assert_eq!(step, 0);
            assert_eq!(method, "getAge");
            assert_eq!(declared_type, "Person");
            assert_eq!(actual_type, "Address");
        }
        other => panic!("expected ChainReplayError, got {other:?}"),
    }
    assert_eq!(err.kind(), ErrorKind::Replay);
}

#[test]
fn test_leaf_root_cannot_be_replayed() {
    let fixture = Fixture::new();
    let age = fixture.person_handle(&["getAge"]);

    let err = extract_value(&age, &Value::Int(3)).unwrap_err();
    assert!(matches!(err, LambdaError::ChainReplayError { ref actual_type, .. } if actual_type == "int"));
}

#[test]
fn test_replay_leaves_chain_untouched() {
    let fixture = Fixture::new();
    let city = fixture.person_handle(&["getAddress", "getCity"]);
    let before = city.chain().clone();

    for name in ["Rome", "Oslo"] {
        let person = Person::new(name, 1).living_in(name).into_value();
        assert_eq!(extract_value(&city, &person).unwrap(), Value::from(name));
    }

    assert_eq!(city.chain(), &before);
}

#[test]
fn test_extractor_over_collection() {
    let fixture = Fixture::new();
    let name = fixture.person_handle(&["getName"]);
    let extractor = ArgumentExtractor::new(name);

    let people = [
        Person::new("Ada", 36).into_value(),
        Value::Null,
        Person::new("Bob", 40).into_value(),
    ];
    let names = extractor.extract_all(&people).unwrap();

    assert_eq!(names, vec![Value::from("Ada"), Value::Null, Value::from("Bob")]);
}
