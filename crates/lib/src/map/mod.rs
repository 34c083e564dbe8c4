//! The fluent transform engine.
//!
//! [`ArrayMap`] owns one [`Array`] and exposes chainable transformations:
//! mapping, filtering, merging, replacing, stable user sorting, slicing and
//! chunking. Every operation computes its result completely and then swaps
//! it in, and every failure is reported before anything is modified.
//!
//! # Usage
//!
//! ```
//! use arraymap::{ArrayLike, ArrayMap, Value, array};
//!
//! let mut map = ArrayMap::from(array! { "a" => 1, "b" => 2, "c" => 3 });
//! map.filter(|value, _| value.as_int() > Some(1))
//!     .map(|value, key| {
//!         let doubled = value.as_int().unwrap_or_default() * 2;
//!         Value::from(array! { format!("{key}{key}") => doubled })
//!     })?
//!     .merge(&array! { "dd" => 8 })?;
//!
//! assert_eq!(map.get_array(), array! { "bb" => 4, "cc" => 6, "dd" => 8 });
//! # Ok::<(), arraymap::Error>(())
//! ```

use std::{cmp::Ordering, convert::Infallible, fmt};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    Result,
    array_like::ArrayLike,
    merge::{self, MergePolicy},
    value::{Array, Key, Value},
};

mod errors;

pub use errors::ArrayMapError;

/// Default `recursive` flag for [`ArrayMap::merge`] and [`ArrayMap::replace`].
pub const DEFAULT_RECURSIVE: bool = true;

/// Default `preserve_keys` flag for slicing and chunking.
pub const DEFAULT_PRESERVE_KEYS: bool = false;

/// A chainable wrapper around an ordered associative [`Array`].
///
/// The wrapper always owns its array. Building one from another
/// [`ArrayLike`] (including another `ArrayMap`) takes a snapshot, so later
/// changes to either side never leak into the other.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArrayMap {
    array: Array,
}

impl ArrayMap {
    /// Creates an engine over an empty array
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine from an optional source.
    ///
    /// `None` gives an empty array; otherwise the source's array is copied.
    ///
    /// ```
    /// use arraymap::{Array, ArrayLike, ArrayMap, array};
    ///
    /// assert!(ArrayMap::create::<Array>(None).is_empty());
    ///
    /// let source = ArrayMap::from(array![1, 2]);
    /// assert_eq!(ArrayMap::create(Some(&source)).get_array(), array![1, 2]);
    /// ```
    pub fn create<S>(source: Option<&S>) -> Self
    where
        S: ArrayLike + ?Sized,
    {
        source.map(Self::from_array_like).unwrap_or_default()
    }

    /// Creates an engine holding a snapshot of `source`'s array.
    pub fn from_array_like<S>(source: &S) -> Self
    where
        S: ArrayLike + ?Sized,
    {
        Self {
            array: source.get_array(),
        }
    }

    pub fn len(&self) -> usize {
        self.array.len()
    }

    pub fn is_empty(&self) -> bool {
        self.array.is_empty()
    }

    /// Consumes the engine and returns its array
    pub fn into_array(self) -> Array {
        self.array
    }

    /// Returns an independent duplicate of this engine.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Applies `callback(value, key)` to every entry in order.
    ///
    /// Each result is turned into an array (a scalar becomes a one-element
    /// list, `Null` an empty array) and merged into the accumulated result
    /// recursively: integer keys are appended under fresh sequential keys,
    /// string keys collide with the later result winning, and nested arrays
    /// under the same string key are merged.
    ///
    /// Fails with [`ArrayMapError::InvalidArgument`], leaving the engine
    /// unchanged, if a nested array that already uses `i64::MAX` as a key
    /// would have to be appended to.
    ///
    /// ```
    /// use arraymap::{ArrayLike, ArrayMap, Value, array};
    ///
    /// let mut map = ArrayMap::from(array![1, 2, 3]);
    /// map.map(|value, _| Value::from(value.as_int().unwrap_or_default() * 2))
    ///     .unwrap();
    /// assert_eq!(map.get_array(), array![2, 4, 6]);
    /// ```
    pub fn map<F>(&mut self, mut callback: F) -> Result<&mut Self>
    where
        F: FnMut(&Value, &Key) -> Value,
    {
        debug!(operation = "map", entries = self.len(), "Mapping entries");
        self.array = self.mapped(|value, key| Ok::<_, Infallible>(callback(value, key)))?;
        Ok(self)
    }

    /// Like [`map`](Self::map), but the callback may fail.
    ///
    /// A callback error aborts the whole operation with
    /// [`ArrayMapError::InvalidCallback`] and leaves the engine unchanged.
    pub fn try_map<F, E>(&mut self, callback: F) -> Result<&mut Self>
    where
        F: FnMut(&Value, &Key) -> std::result::Result<Value, E>,
        E: fmt::Display,
    {
        debug!(operation = "try_map", entries = self.len(), "Mapping entries");
        self.array = self.mapped(callback)?;
        Ok(self)
    }

    fn mapped<F, E>(&self, mut callback: F) -> Result<Array>
    where
        F: FnMut(&Value, &Key) -> std::result::Result<Value, E>,
        E: fmt::Display,
    {
        let mut mapped = Array::with_capacity(self.len());
        for (key, value) in &self.array {
            let result = callback(value, key).map_err(|err| ArrayMapError::InvalidCallback {
                operation: "map".to_string(),
                reason: format!("callback failed at key '{key}': {err}"),
            })?;
            merge::merge_into(&mut mapped, &result.into_array(), true, "map")?;
        }
        Ok(mapped)
    }

    /// Keeps the entries for which `callback(value, key)` returns true.
    ///
    /// Keys and order are preserved.
    pub fn filter<F>(&mut self, mut callback: F) -> &mut Self
    where
        F: FnMut(&Value, &Key) -> bool,
    {
        debug!(operation = "filter", entries = self.len(), "Filtering entries");
        match self.filtered(|value, key| Ok::<_, Infallible>(callback(value, key))) {
            Ok(filtered) => self.array = filtered,
            Err(never) => match never {},
        }
        self
    }

    /// Like [`filter`](Self::filter), but the predicate may fail.
    pub fn try_filter<F, E>(&mut self, callback: F) -> Result<&mut Self>
    where
        F: FnMut(&Value, &Key) -> std::result::Result<bool, E>,
        E: fmt::Display,
    {
        debug!(operation = "try_filter", entries = self.len(), "Filtering entries");
        self.array = self.filtered(callback).map_err(|(key, err)| {
            ArrayMapError::InvalidCallback {
                operation: "filter".to_string(),
                reason: format!("callback failed at key '{key}': {err}"),
            }
        })?;
        Ok(self)
    }

    fn filtered<F, E>(&self, mut callback: F) -> std::result::Result<Array, (Key, E)>
    where
        F: FnMut(&Value, &Key) -> std::result::Result<bool, E>,
    {
        let mut filtered = Array::new();
        for (key, value) in &self.array {
            if callback(value, key).map_err(|err| (key.clone(), err))? {
                filtered.insert(key, value.clone());
            }
        }
        Ok(filtered)
    }

    /// Merges `data` into this engine's array.
    ///
    /// Integer keys from both sides are renumbered and appended. With
    /// `recursive`, two arrays under the same string key are merged;
    /// otherwise (and for every other string collision) `data` wins.
    ///
    /// Appending into a nested array whose keys already reach `i64::MAX`
    /// fails with [`ArrayMapError::InvalidArgument`] and leaves the engine
    /// unchanged.
    ///
    /// ```
    /// use arraymap::{ArrayLike, ArrayMap, array};
    ///
    /// let mut map = ArrayMap::from(array! { "a" => array![1], 0 => "b", 1 => "c" });
    /// map.merge_with(&array! { "a" => array![2], 0 => "d", 1 => "e" }, true)
    ///     .unwrap();
    /// assert_eq!(
    ///     map.get_array(),
    ///     array! { "a" => array![1, 2], 0 => "b", 1 => "c", 2 => "d", 3 => "e" }
    /// );
    /// ```
    pub fn merge_with<S>(&mut self, data: &S, recursive: bool) -> Result<&mut Self>
    where
        S: ArrayLike + ?Sized,
    {
        self.combine_with(data.as_array(), MergePolicy::Merge, recursive)
    }

    /// [`merge_with`](Self::merge_with) using [`DEFAULT_RECURSIVE`].
    pub fn merge<S>(&mut self, data: &S) -> Result<&mut Self>
    where
        S: ArrayLike + ?Sized,
    {
        self.merge_with(data, DEFAULT_RECURSIVE)
    }

    /// [`merge_with`](Self::merge_with) for a dynamically typed value.
    ///
    /// Fails with [`ArrayMapError::InvalidArgument`] unless `data` is an array.
    pub fn merge_with_value(&mut self, data: &Value, recursive: bool) -> Result<&mut Self> {
        let data = array_argument("merge_with", data)?;
        self.merge_with(data, recursive)
    }

    /// Writes every entry of `data` over this engine's array.
    ///
    /// Colliding keys of either kind take `data`'s value in place; new keys
    /// are appended. With `recursive`, two arrays under the same key are
    /// replaced entry by entry instead of wholesale.
    pub fn replace_with<S>(&mut self, data: &S, recursive: bool) -> &mut Self
    where
        S: ArrayLike + ?Sized,
    {
        debug!(
            policy = ?MergePolicy::Replace,
            recursive,
            entries = self.len(),
            incoming = data.as_array().len(),
            "Combining arrays"
        );
        self.array = merge::replace(&self.array, data.as_array(), recursive);
        self
    }

    /// [`replace_with`](Self::replace_with) using [`DEFAULT_RECURSIVE`].
    pub fn replace<S>(&mut self, data: &S) -> &mut Self
    where
        S: ArrayLike + ?Sized,
    {
        self.replace_with(data, DEFAULT_RECURSIVE)
    }

    /// [`replace_with`](Self::replace_with) for a dynamically typed value.
    pub fn replace_with_value(&mut self, data: &Value, recursive: bool) -> Result<&mut Self> {
        let data = array_argument("replace_with", data)?;
        Ok(self.replace_with(data, recursive))
    }

    fn combine_with(
        &mut self,
        data: &Array,
        policy: MergePolicy,
        recursive: bool,
    ) -> Result<&mut Self> {
        debug!(
            ?policy,
            recursive,
            entries = self.len(),
            incoming = data.len(),
            "Combining arrays"
        );
        self.array = merge::combine(&self.array, data, policy, recursive)?;
        Ok(self)
    }

    /// Stable sort by value with a three-way comparator; keys stay attached
    /// to their values and equal values keep their relative order.
    pub fn user_sort_by_value<F>(&mut self, mut cmp: F) -> &mut Self
    where
        F: FnMut(&Value, &Value) -> Ordering,
    {
        debug!(operation = "user_sort_by_value", entries = self.len(), "Sorting entries");
        self.array.sort_by(|_, a, _, b| cmp(a, b));
        self
    }

    /// Stable sort by key with a three-way comparator; values stay attached
    /// to their keys.
    pub fn user_sort_by_key<F>(&mut self, mut cmp: F) -> &mut Self
    where
        F: FnMut(&Key, &Key) -> Ordering,
    {
        debug!(operation = "user_sort_by_key", entries = self.len(), "Sorting entries");
        self.array.sort_by(|a, _, b, _| cmp(a, b));
        self
    }

    /// Keeps a contiguous run of entries.
    ///
    /// `offset` counts from the start, or from the end when negative.
    /// `length` is the number of entries to keep, the number to drop from the
    /// end when negative, or everything up to the end when `Null`. Both must
    /// be numeric (see [`Value::as_numeric`]). Without `preserve_keys`,
    /// integer keys are renumbered from 0; string keys are always kept.
    ///
    /// ```
    /// use arraymap::{ArrayLike, ArrayMap, Value, array};
    ///
    /// let mut map = ArrayMap::from(array! { 5 => "a", "k" => "b", 9 => "c", 10 => "d" });
    /// map.slice(1, -1, false).unwrap();
    /// assert_eq!(map.get_array(), array! { "k" => "b", 0 => "c" });
    ///
    /// let mut map = ArrayMap::from(array![1, 2, 3, 4]);
    /// map.slice(-2, Value::Null, true).unwrap();
    /// assert_eq!(map.get_array(), array! { 2 => 3, 3 => 4 });
    /// ```
    pub fn slice(
        &mut self,
        offset: impl Into<Value>,
        length: impl Into<Value>,
        preserve_keys: bool,
    ) -> Result<&mut Self> {
        let offset = numeric_argument("slice", "offset", &offset.into())?;
        let length = match length.into() {
            Value::Null => None,
            other => Some(numeric_argument("slice", "length", &other)?),
        };
        let (start, end) = slice_bounds(self.len(), offset, length);
        debug!(
            operation = "slice",
            entries = self.len(),
            start,
            end,
            preserve_keys,
            "Slicing entries"
        );

        let mut sliced = Array::with_capacity(end - start);
        for (key, value) in self.array.iter().skip(start).take(end - start) {
            if key.is_int() && !preserve_keys {
                sliced.push(value.clone());
            } else {
                sliced.insert(key, value.clone());
            }
        }
        self.array = sliced;
        Ok(self)
    }

    /// Splits the entries into consecutive groups of `size`.
    ///
    /// Returns a new engine holding a list of the groups; `self` is left
    /// untouched. The last group may be smaller. Without `preserve_keys` each
    /// group is keyed `0..`; with it, the original keys are kept.
    ///
    /// ```
    /// use arraymap::{ArrayLike, ArrayMap, array};
    ///
    /// let map = ArrayMap::from(array! { "a" => 1, "b" => 2, "c" => 3 });
    /// let chunks = map.chunk(2, true).unwrap();
    /// assert_eq!(
    ///     chunks.get_array(),
    ///     array![array! { "a" => 1, "b" => 2 }, array! { "c" => 3 }]
    /// );
    /// ```
    pub fn chunk(&self, size: impl Into<Value>, preserve_keys: bool) -> Result<ArrayMap> {
        let size = numeric_argument("chunk", "size", &size.into())?;
        if size < 1 {
            return Err(ArrayMapError::InvalidArgument {
                operation: "chunk".to_string(),
                reason: format!("size must be greater than 0, got {size}"),
            }
            .into());
        }
        let size = usize::try_from(size).unwrap_or(usize::MAX);
        debug!(operation = "chunk", entries = self.len(), size, preserve_keys, "Chunking entries");

        let mut chunks = Array::with_capacity(self.len().div_ceil(size));
        let mut current = Array::new();
        for (key, value) in &self.array {
            if preserve_keys {
                current.insert(key, value.clone());
            } else {
                current.push(value.clone());
            }
            if current.len() == size {
                chunks.push(std::mem::take(&mut current));
            }
        }
        if !current.is_empty() {
            chunks.push(current);
        }
        Ok(ArrayMap::from(chunks))
    }
}

/// Resolves slice bounds into `start..end` indexes within `0..=len`.
fn slice_bounds(len: usize, offset: i64, length: Option<i64>) -> (usize, usize) {
    let len = i64::try_from(len).unwrap_or(i64::MAX);
    let start = if offset < 0 {
        len.saturating_add(offset).max(0)
    } else {
        offset.min(len)
    };
    let end = match length {
        None => len,
        Some(length) if length < 0 => len.saturating_add(length).max(start),
        Some(length) => start.saturating_add(length).min(len),
    };
    (start as usize, end as usize)
}

fn numeric_argument(
    operation: &str,
    name: &str,
    value: &Value,
) -> std::result::Result<i64, ArrayMapError> {
    value
        .as_numeric()
        .ok_or_else(|| ArrayMapError::InvalidArgument {
            operation: operation.to_string(),
            reason: format!("{name} must be numeric, got {}", value.type_name()),
        })
}

fn array_argument<'a>(
    operation: &str,
    value: &'a Value,
) -> std::result::Result<&'a Array, ArrayMapError> {
    value
        .as_array()
        .ok_or_else(|| ArrayMapError::InvalidArgument {
            operation: operation.to_string(),
            reason: format!("data must be an array, got {}", value.type_name()),
        })
}

impl ArrayLike for ArrayMap {
    fn as_array(&self) -> &Array {
        &self.array
    }

    fn set_array(&mut self, array: Array) -> &mut Self {
        self.array = array;
        self
    }
}

impl From<Array> for ArrayMap {
    fn from(array: Array) -> Self {
        Self { array }
    }
}

impl From<ArrayMap> for Array {
    fn from(map: ArrayMap) -> Self {
        map.array
    }
}

/// `Null` gives an empty engine and an array is taken as-is; any scalar is
/// rejected with [`ArrayMapError::InvalidArgument`].
impl TryFrom<Value> for ArrayMap {
    type Error = crate::Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(Self::new()),
            Value::Array(array) => Ok(Self::from(array)),
            scalar => Err(ArrayMapError::InvalidArgument {
                operation: "create".to_string(),
                reason: format!(
                    "source must be null or an array, got {}",
                    scalar.type_name()
                ),
            }
            .into()),
        }
    }
}

impl fmt::Display for ArrayMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.array)
    }
}
