//! The capability shared by everything that is backed by an [`Array`].
//!
//! [`ArrayMap`](crate::ArrayMap) accepts any `ArrayLike` source at
//! construction and for merge/replace, so a plain [`Array`], an `ArrayMap`,
//! or an `ArrayMap` built from another `ArrayMap` all unwrap to the same
//! backing array.

use crate::value::Array;

/// Types that expose a backing [`Array`] and accept a new one.
///
/// # Examples
///
/// ```
/// use arraymap::{ArrayLike, ArrayMap, array};
///
/// let inner = ArrayMap::from(array![1, 2]);
/// let outer = ArrayMap::from_array_like(&inner);
/// assert_eq!(outer.get_array(), array![1, 2]);
/// ```
pub trait ArrayLike {
    /// Borrows the backing array.
    fn as_array(&self) -> &Array;

    /// Replaces the backing array.
    fn set_array(&mut self, array: Array) -> &mut Self;

    /// Returns a snapshot copy of the backing array.
    fn get_array(&self) -> Array {
        self.as_array().clone()
    }
}

impl ArrayLike for Array {
    fn as_array(&self) -> &Array {
        self
    }

    fn set_array(&mut self, array: Array) -> &mut Self {
        *self = array;
        self
    }
}
