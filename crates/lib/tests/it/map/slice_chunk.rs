use arraymap::{ArrayLike, ArrayMap, Value, array};

use crate::helpers::*;

#[test]
fn test_slice_renumbers_integer_keys() {
    let mut map = engine(&array!["a", "b", "c", "d", "e"]);
    map.slice(1, 3, false).unwrap();
    assert_eq!(map.get_array(), array!["b", "c", "d"]);
}

#[test]
fn test_slice_preserves_keys_when_asked() {
    let mut map = engine(&array!["a", "b", "c", "d", "e"]);
    map.slice(2, Value::Null, true).unwrap();
    assert_eq!(map.get_array(), array! { 2 => "c", 3 => "d", 4 => "e" });
}

#[test]
fn test_slice_keeps_string_keys() {
    let mut map = engine(&array! { 3 => "a", "x" => "b", 7 => "c" });
    map.slice(0, Value::Null, false).unwrap();
    assert_eq!(map.get_array(), array! { 0 => "a", "x" => "b", 1 => "c" });
}

#[test]
fn test_slice_negative_offset_and_length() {
    let mut map = engine(&array!["a", "b", "c", "d", "e"]);
    map.slice(-2, 1, false).unwrap();
    assert_eq!(map.get_array(), array!["d"]);

    let mut map = engine(&array!["a", "b", "c", "d", "e"]);
    map.slice(0, -3, false).unwrap();
    assert_eq!(map.get_array(), array!["a", "b"]);
}

#[test]
fn test_slice_out_of_range_is_empty() {
    let mut map = engine(&array![1, 2]);
    map.slice(5, 1, false).unwrap();
    assert!(map.is_empty());

    let mut map = engine(&array![1, 2]);
    map.slice(1, -5, false).unwrap();
    assert!(map.is_empty());
}

#[test]
fn test_slice_accepts_numeric_text() {
    let mut map = engine(&array![1, 2, 3]);
    map.slice("1", " 1 ", false).unwrap();
    assert_eq!(map.get_array(), array![2]);
}

#[test]
fn test_slice_rejects_non_numeric_without_mutation() {
    let original = array![1, 2, 3];
    let mut map = engine(&original);

    assert_invalid_argument(map.slice("one", 1, false), "slice");
    assert_invalid_argument(map.slice(0, "all", false), "slice");
    assert_invalid_argument(map.slice(true, 1, false), "slice");
    assert_invalid_argument(map.slice(Value::Null, 1, false), "slice");
    assert_invalid_argument(map.slice(0, array![1], false), "slice");

    assert_eq!(map.get_array(), original);
}

#[test]
fn test_chunk() {
    let map = engine(&array!["a", "b", "c", "d", "e"]);
    let chunks = map.chunk(2, false).unwrap();
    assert_eq!(
        chunks.get_array(),
        array![array!["a", "b"], array!["c", "d"], array!["e"]]
    );
    // The receiver is left alone
    assert_eq!(map.get_array(), array!["a", "b", "c", "d", "e"]);
}

#[test]
fn test_chunk_preserve_keys() {
    let map = engine(&array!["a", "b", "c"]);
    let chunks = map.chunk(2, true).unwrap();
    assert_eq!(
        chunks.get_array(),
        array![array! { 0 => "a", 1 => "b" }, array! { 2 => "c" }]
    );
}

#[test]
fn test_chunk_string_keys() {
    let map = engine(&array! { "x" => 1, "y" => 2, "z" => 3 });
    assert_eq!(
        map.chunk(2, false).unwrap().get_array(),
        array![array![1, 2], array![3]]
    );
    assert_eq!(
        map.chunk(2, true).unwrap().get_array(),
        array![array! { "x" => 1, "y" => 2 }, array! { "z" => 3 }]
    );
}

#[test]
fn test_chunk_larger_than_array() {
    let map = engine(&array![1, 2]);
    assert_eq!(map.chunk(10, false).unwrap().get_array(), array![array![1, 2]]);
    assert!(ArrayMap::new().chunk(3, false).unwrap().is_empty());
}

#[test]
fn test_chunk_result_is_chainable() {
    let map = engine(&array![1, 2, 3, 4, 5]);
    let mut chunks = map.chunk("2", false).unwrap();
    chunks.filter(|chunk, _| chunk.as_array().is_some_and(|c| c.len() == 2));
    assert_eq!(chunks.len(), 2);
}

#[test]
fn test_chunk_rejects_invalid_size() {
    let map = engine(&array![1, 2, 3]);
    assert_invalid_argument(map.chunk(0, false), "chunk");
    assert_invalid_argument(map.chunk(-1, false), "chunk");
    assert_invalid_argument(map.chunk("big", false), "chunk");
    assert_invalid_argument(map.chunk(Value::Null, false), "chunk");
    assert_eq!(map.get_array(), array![1, 2, 3]);
}
