//! The ordered associative array.
//!
//! [`Array`] keeps entries in insertion order, maps each [`Key`] to exactly
//! one [`Value`], and remembers the next free integer index so list-style
//! appends continue after the largest integer key seen so far. Once the key
//! `i64::MAX` has been used there is no next free index and appends fail.

use std::{cmp::Ordering, fmt};

use indexmap::IndexMap;
use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de,
    ser::{SerializeMap, SerializeSeq},
};

use super::{Key, Value};

/// An insertion-ordered, key-unique mapping from [`Key`] to [`Value`].
///
/// Equality is order-sensitive: two arrays are equal when they hold the same
/// entries in the same order.
///
/// # Examples
///
/// ```
/// use arraymap::{Array, Key, array};
///
/// let mut array = array![10, 20];
/// array.insert("name", "Alice");
/// assert_eq!(array.push(30), Some(Key::Int(2)));
///
/// let keys: Vec<String> = array.keys().map(|k| k.to_string()).collect();
/// assert_eq!(keys, ["0", "1", "name", "2"]);
/// assert_eq!(array.get("name").and_then(|v| v.as_text()), Some("Alice"));
/// ```
#[derive(Debug, Clone)]
pub struct Array {
    entries: IndexMap<Key, Value>,
    // None once i64::MAX is taken
    next_index: Option<i64>,
}

impl Default for Array {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}

impl Array {
    /// Creates a new empty array
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty array with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
            next_index: Some(0),
        }
    }

    /// Builds a list keyed `0..n` from the given values.
    pub fn from_values<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let mut array = Self::new();
        for value in values {
            array.push(value);
        }
        array
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the array has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The key the next [`push`](Self::push) will use, or `None` when the
    /// integer key space is exhausted.
    pub fn next_index(&self) -> Option<i64> {
        self.next_index
    }

    pub fn get(&self, key: impl Into<Key>) -> Option<&Value> {
        self.entries.get(&key.into())
    }

    pub fn get_mut(&mut self, key: impl Into<Key>) -> Option<&mut Value> {
        self.entries.get_mut(&key.into())
    }

    pub fn contains_key(&self, key: impl Into<Key>) -> bool {
        self.entries.contains_key(&key.into())
    }

    /// Inserts a value under `key`, returning the previous value.
    ///
    /// An existing key keeps its position; a new key goes to the end.
    pub fn insert(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        if let (Key::Int(n), Some(next)) = (&key, self.next_index) {
            if *n >= next {
                self.next_index = n.checked_add(1);
            }
        }
        self.entries.insert(key, value.into())
    }

    /// Appends a value under the next free integer index and returns its key.
    ///
    /// Returns `None` without inserting anything once `i64::MAX` has been
    /// used as a key, since every further index would collide.
    pub fn push(&mut self, value: impl Into<Value>) -> Option<Key> {
        let key = Key::Int(self.next_index?);
        self.insert(key.clone(), value);
        Some(key)
    }

    /// Removes an entry, keeping the order of the remaining ones.
    ///
    /// The next free index is not rewound.
    pub fn remove(&mut self, key: impl Into<Key>) -> Option<Value> {
        self.entries.shift_remove(&key.into())
    }

    /// Returns true if the keys are exactly `0, 1, .., len - 1` in order.
    pub fn is_list(&self) -> bool {
        self.entries
            .keys()
            .enumerate()
            .all(|(i, key)| *key == Key::Int(i as i64))
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, Key, Value> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> indexmap::map::IterMut<'_, Key, Value> {
        self.entries.iter_mut()
    }

    pub fn keys(&self) -> indexmap::map::Keys<'_, Key, Value> {
        self.entries.keys()
    }

    pub fn values(&self) -> indexmap::map::Values<'_, Key, Value> {
        self.entries.values()
    }

    /// Stable in-place sort by entry; keys stay attached to their values.
    pub fn sort_by<F>(&mut self, mut cmp: F)
    where
        F: FnMut(&Key, &Value, &Key, &Value) -> Ordering,
    {
        self.entries.sort_by(|k1, v1, k2, v2| cmp(k1, v1, k2, v2));
    }
}

impl PartialEq for Array {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.entries.iter().eq(other.entries.iter())
    }
}

impl Eq for Array {}

impl fmt::Display for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_list() {
            write!(f, "[")?;
            for (i, value) in self.values().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{value}")?;
            }
            write!(f, "]")
        } else {
            write!(f, "{{")?;
            for (i, (key, value)) in self.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}: {value}")?;
            }
            write!(f, "}}")
        }
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = (&'a Key, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for Array {
    type Item = (Key, Value);
    type IntoIter = indexmap::map::IntoIter<Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K, V> FromIterator<(K, V)> for Array
where
    K: Into<Key>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut array = Self::new();
        for (key, value) in iter {
            array.insert(key, value);
        }
        array
    }
}

impl<K, V> Extend<(K, V)> for Array
where
    K: Into<Key>,
    V: Into<Value>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<T: Into<Value>> From<Vec<T>> for Array {
    fn from(values: Vec<T>) -> Self {
        Self::from_values(values)
    }
}

// Lists serialize as sequences, everything else as an ordered map.
impl Serialize for Array {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_list() {
            let mut seq = serializer.serialize_seq(Some(self.len()))?;
            for value in self.values() {
                seq.serialize_element(value)?;
            }
            seq.end()
        } else {
            let mut map = serializer.serialize_map(Some(self.len()))?;
            for (key, value) in self.iter() {
                map.serialize_entry(key, value)?;
            }
            map.end()
        }
    }
}

struct ArrayVisitor;

impl<'de> de::Visitor<'de> for ArrayVisitor {
    type Value = Array;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map or a sequence")
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<Array, A::Error> {
        let mut array = Array::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(value) = seq.next_element::<Value>()? {
            array.push(value);
        }
        Ok(array)
    }

    fn visit_map<A: de::MapAccess<'de>>(self, mut map: A) -> Result<Array, A::Error> {
        let mut array = Array::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((key, value)) = map.next_entry::<Key, Value>()? {
            array.insert(key, value);
        }
        Ok(array)
    }
}

impl<'de> Deserialize<'de> for Array {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ArrayVisitor)
    }
}
