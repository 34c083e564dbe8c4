use arraymap::{Array, ArrayLike, ArrayMap, Value, array};

use crate::helpers::*;

#[test]
fn test_new_and_default_are_empty() {
    assert!(ArrayMap::new().is_empty());
    assert_eq!(ArrayMap::default().get_array(), Array::new());
    assert!(ArrayMap::create::<Array>(None).is_empty());
}

#[test]
fn test_construction_round_trips_the_array() {
    let samples = [
        Array::new(),
        array![1, 2, 3],
        array! { 1 => 1, 2 => 2, 3 => 3 },
        array! { "a" => array![1], 0 => "b", 1 => "c" },
        array! { "nested" => array! { "deep" => array![true, Value::Null] } },
    ];
    for sample in samples {
        assert_eq!(ArrayMap::create(Some(&sample)).get_array(), sample);
        assert_eq!(ArrayMap::from(sample.clone()).into_array(), sample);
    }
}

#[test]
fn test_construction_from_engine_takes_a_snapshot() {
    let source = ArrayMap::from(array![1, 2, 3]);
    let mut derived = ArrayMap::from_array_like(&source);

    derived.map(double);
    assert_eq!(derived.get_array(), array![2, 4, 6]);
    assert_eq!(source.get_array(), array![1, 2, 3]);
}

#[test]
fn test_source_mutation_does_not_reach_snapshot() {
    let mut source = ArrayMap::from(array! { "a" => 1 });
    let derived = ArrayMap::create(Some(&source));

    source.merge(&array! { "b" => 2 }).unwrap();
    assert_eq!(derived.get_array(), array! { "a" => 1 });
    assert_eq!(source.get_array(), array! { "a" => 1, "b" => 2 });
}

#[test]
fn test_nested_wrappers_unwrap_transitively() {
    let inner = ArrayMap::from(array! { "k" => "v" });
    let middle = ArrayMap::from_array_like(&inner);
    let outer = ArrayMap::create(Some(&middle));

    assert_eq!(outer.get_array(), array! { "k" => "v" });
    // The engine never wraps another engine, only its array
    assert_eq!(outer.as_array(), inner.as_array());
}

#[test]
fn test_try_from_value() {
    assert!(ArrayMap::try_from(Value::Null).unwrap().is_empty());
    assert_eq!(
        ArrayMap::try_from(Value::from(array![1])).unwrap().get_array(),
        array![1]
    );

    for scalar in [Value::from(1), Value::from("text"), Value::from(false)] {
        let err = ArrayMap::try_from(scalar).unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(err.module(), "map");
    }
}

#[test]
fn test_set_array_replaces_and_chains() {
    let mut map = ArrayMap::from(array![1]);
    map.set_array(array! { "a" => 1, "b" => 5 })
        .filter(|value, _| value.as_int() > Some(2));
    assert_eq!(map.get_array(), array! { "b" => 5 });
}

#[test]
fn test_copy_is_independent_both_ways() {
    let mut original = ArrayMap::from(array! { "a" => array![1] });
    let mut duplicate = original.copy();
    assert_eq!(duplicate, original);

    duplicate.merge(&array! { "a" => array![2] }).unwrap();
    assert_eq!(original.get_array(), array! { "a" => array![1] });

    original.replace(&array! { "b" => 3 });
    assert_eq!(duplicate.get_array(), array! { "a" => array![1, 2] });
    assert_eq!(keys_of(&original), ["a", "b"]);
}

#[test]
fn test_get_array_is_a_snapshot() {
    let map = ArrayMap::from(array![1]);
    let mut snapshot = map.get_array();
    snapshot.push(2);
    assert_eq!(map.len(), 1);
}

#[test]
fn test_display_delegates_to_array() {
    let map = ArrayMap::from(array! { "a" => array![1, 2] });
    assert_eq!(map.to_string(), "{a: [1, 2]}");
}
