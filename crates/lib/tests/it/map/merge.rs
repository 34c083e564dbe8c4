use arraymap::{
    ArrayLike, ArrayMap, Value, array,
    map::{DEFAULT_PRESERVE_KEYS, DEFAULT_RECURSIVE},
};

use crate::helpers::*;

#[test]
fn test_defaults() {
    assert!(DEFAULT_RECURSIVE);
    assert!(!DEFAULT_PRESERVE_KEYS);
}

#[test]
fn test_merge_with() {
    let mut map = engine(&array![1, 2, 3]);
    map.merge_with(&array![4, 5, 6], false).unwrap();
    assert_eq!(map.get_array(), array![1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_recursive_merge_with() {
    let mut map = engine(&array! { "a" => array![1], 0 => "b", 1 => "c" });
    map.merge(&array! { "a" => array![2], 0 => "d", 1 => "e" })
        .unwrap();
    assert_eq!(
        map.get_array(),
        array! { "a" => array![1, 2], 0 => "b", 1 => "c", 2 => "d", 3 => "e" }
    );
}

#[test]
fn test_non_recursive_merge_overwrites_nested() {
    let mut map = engine(&array! { "a" => array![1], 0 => "b" });
    map.merge_with(&array! { "a" => array![2], 0 => "d" }, false)
        .unwrap();
    assert_eq!(map.get_array(), array! { "a" => array![2], 0 => "b", 1 => "d" });
}

#[test]
fn test_merge_string_scalar_collision_overwrites() {
    for recursive in [true, false] {
        let mut map = engine(&array! { "a" => 1, "b" => 2 });
        map.merge_with(&array! { "b" => 20, "c" => 30 }, recursive)
            .unwrap();
        assert_eq!(map.get_array(), array! { "a" => 1, "b" => 20, "c" => 30 });
    }
}

#[test]
fn test_merge_renumbers_receiver_integer_keys() {
    let mut map = engine(&array! { 10 => "x", 20 => "y" });
    map.merge(&arraymap::Array::new()).unwrap();
    assert_eq!(map.get_array(), array!["x", "y"]);
}

#[test]
fn test_merge_deeply_nested() {
    let mut map = engine(&array! {
        "config" => array! { "db" => array! { "host" => "a", "ports" => array![1] } }
    });
    map.merge(&array! {
        "config" => array! { "db" => array! { "host" => "b", "ports" => array![2] } }
    })
    .unwrap();
    assert_eq!(
        map.get_array(),
        array! {
            "config" => array! { "db" => array! { "host" => "b", "ports" => array![1, 2] } }
        }
    );
}

#[test]
fn test_merge_with_another_engine() {
    let other = ArrayMap::from(array! { "k" => "v" });
    let mut map = engine(&array![1]);
    map.merge(&other).unwrap();
    assert_eq!(map.get_array(), array! { 0 => 1, "k" => "v" });
    // The argument is only read
    assert_eq!(other.get_array(), array! { "k" => "v" });
}

#[test]
fn test_merge_into_exhausted_nested_keys_fails_without_mutation() {
    let original = array! { "n" => array! { i64::MAX => "a" } };
    let mut map = engine(&original);

    assert_invalid_argument(map.merge(&array! { "n" => array!["b"] }), "merge_with");
    assert_eq!(map.get_array(), original);

    // String keys and replacement still work on the same nested array
    map.merge(&array! { "n" => array! { "k" => "v" } }).unwrap();
    map.replace(&array! { "n" => array! { 0 => "b" } });
    assert_eq!(
        map.get_array(),
        array! { "n" => array! { i64::MAX => "a", "k" => "v", 0 => "b" } }
    );
}

#[test]
fn test_merge_with_value() {
    let mut map = engine(&array![1]);
    map.merge_with_value(&Value::from(array![2]), true).unwrap();
    assert_eq!(map.get_array(), array![1, 2]);
}

#[test]
fn test_merge_with_non_array_value_fails_without_mutation() {
    let mut map = engine(&array![1]);
    for data in [Value::Null, Value::from(2), Value::from("x")] {
        assert_invalid_argument(map.merge_with_value(&data, true), "merge_with");
    }
    assert_eq!(map.get_array(), array![1]);
}

#[test]
fn test_replace_with() {
    let mut map = engine(&array! { "a" => 1, "b" => 2, "c" => 3 });
    map.replace_with(&array! { "c" => 4, "d" => 5 }, false);
    assert_eq!(map.get_array(), array! { "a" => 1, "b" => 2, "c" => 4, "d" => 5 });
}

#[test]
fn test_replace_integer_keys_overwrite_in_place() {
    let mut map = engine(&array!["a", "b", "c"]);
    map.replace(&array! { 1 => "B", 3 => "d" });
    assert_eq!(map.get_array(), array!["a", "B", "c", "d"]);
}

#[test]
fn test_recursive_replace_with() {
    let mut map = engine(&array! {
        "citrus" => array!["orange"],
        "berries" => array!["blackberry", "raspberry"],
    });
    map.replace(&array! {
        "citrus" => array!["pineapple"],
        "berries" => array! { 1 => "blueberry" },
    });
    assert_eq!(
        map.get_array(),
        array! {
            "citrus" => array!["pineapple"],
            "berries" => array!["blackberry", "blueberry"],
        }
    );
}

#[test]
fn test_non_recursive_replace_swaps_nested_wholesale() {
    let mut map = engine(&array! { "berries" => array!["blackberry", "raspberry"] });
    map.replace_with(&array! { "berries" => array! { 1 => "blueberry" } }, false);
    assert_eq!(
        map.get_array(),
        array! { "berries" => array! { 1 => "blueberry" } }
    );
}

#[test]
fn test_replace_nested_with_scalar() {
    let mut map = engine(&array! { "a" => array![1, 2] });
    map.replace(&array! { "a" => "flat" });
    assert_eq!(map.get_array(), array! { "a" => "flat" });
}

#[test]
fn test_replace_with_non_array_value_fails_without_mutation() {
    let mut map = engine(&array! { "a" => 1 });
    assert_invalid_argument(map.replace_with_value(&Value::from(true), false), "replace_with");
    assert_eq!(map.get_array(), array! { "a" => 1 });

    map.replace_with_value(&Value::from(array! { "a" => 2 }), false)
        .unwrap();
    assert_eq!(map.get_array(), array! { "a" => 2 });
}
