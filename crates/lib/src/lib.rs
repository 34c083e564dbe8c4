//!
//! arraymap: fluent, chainable transformations over ordered associative arrays.
//!
//! ## Core Concepts
//!
//! * **Arrays (`value::Array`)**: Insertion-ordered mappings whose keys are integers or strings (`value::Key`) and whose values (`value::Value`) are scalars or nested arrays.
//! * **ArrayLike (`array_like::ArrayLike`)**: The capability of exposing and accepting a backing array. Implemented by `Array` itself and by `ArrayMap`, so wrappers unwrap transparently.
//! * **Merge engine (`merge`)**: Pure recursive functions that combine two arrays, either merging (integer keys append) or replacing (every key overwrites).
//! * **ArrayMap (`map::ArrayMap`)**: The transform engine. Owns one array and offers map, filter, merge, replace, stable user sorts, slice, chunk and copy, each returning the engine for chaining.
//!
//! ```
//! use arraymap::{ArrayLike, ArrayMap, array};
//!
//! let mut map = ArrayMap::from(array! { "b" => 2, "c" => 3, "a" => 1 });
//! map.user_sort_by_key(|a, b| a.cmp(b))
//!     .replace_with(&array! { "c" => 4, "d" => 5 }, false);
//! assert_eq!(map.get_array(), array! { "a" => 1, "b" => 2, "c" => 4, "d" => 5 });
//! ```

pub mod array_like;
pub mod map;
pub mod merge;
pub mod value;

pub use array_like::ArrayLike;
pub use map::{ArrayMap, ArrayMapError};
pub use value::{Array, Key, Value, ValueError};

/// Result type used throughout the arraymap library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the arraymap library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[cfg(feature = "json")]
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured transform errors from the map module
    #[error(transparent)]
    ArrayMap(map::ArrayMapError),

    /// Structured conversion errors from the value module
    #[error(transparent)]
    Value(value::ValueError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            #[cfg(feature = "json")]
            Error::Serialize(_) => "serialize",
            Error::ArrayMap(_) => "map",
            Error::Value(_) => "value",
        }
    }

    /// Check if this error reports an invalid argument.
    pub fn is_invalid_argument(&self) -> bool {
        match self {
            Error::ArrayMap(map_err) => map_err.is_invalid_argument(),
            _ => false,
        }
    }

    /// Check if this error was raised by a callback.
    pub fn is_invalid_callback(&self) -> bool {
        match self {
            Error::ArrayMap(map_err) => map_err.is_invalid_callback(),
            _ => false,
        }
    }

    /// Check if this error is a value type mismatch.
    pub fn is_type_error(&self) -> bool {
        match self {
            Error::Value(value_err) => value_err.is_type_error(),
            _ => false,
        }
    }

    /// Check if this error is a (de)serialization failure.
    pub fn is_serialization_error(&self) -> bool {
        match self {
            #[cfg(feature = "json")]
            Error::Serialize(_) => true,
            _ => false,
        }
    }
}
