//! Merge and replace logic for combining two arrays.
//!
//! Both operations are pure functions over two [`Array`]s selected by a
//! [`MergePolicy`]:
//!
//! - [`MergePolicy::Merge`]: integer keys from either side are appended
//!   under fresh sequential keys (so nothing stored under an integer key is
//!   ever lost), string keys collide with the incoming value winning, and
//!   when `recursive` is set two nested arrays under the same string key are
//!   merged the same way. Appending to an array that already uses `i64::MAX`
//!   as a key fails instead of overwriting it.
//! - [`MergePolicy::Replace`]: every incoming key overwrites in place, with
//!   no renumbering; when `recursive` is set two nested arrays under the same
//!   key are replaced entry by entry.

use tracing::trace;

use crate::{
    Result,
    map::ArrayMapError,
    value::{Array, Key, Value},
};

/// How colliding keys are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergePolicy {
    /// Append integer-keyed entries, overwrite (or recurse into) string keys
    Merge,
    /// Overwrite (or recurse into) every colliding key
    Replace,
}

/// Combines `base` with `incoming` under `policy`, returning a new array.
///
/// # Examples
/// ```
/// use arraymap::{array, merge::{MergePolicy, combine}};
///
/// let base = array! { "a" => array![1], 0 => "b", 1 => "c" };
/// let incoming = array! { "a" => array![2], 0 => "d", 1 => "e" };
///
/// let merged = combine(&base, &incoming, MergePolicy::Merge, true).unwrap();
/// assert_eq!(
///     merged,
///     array! { "a" => array![1, 2], 0 => "b", 1 => "c", 2 => "d", 3 => "e" }
/// );
///
/// let replaced = combine(&base, &incoming, MergePolicy::Replace, true).unwrap();
/// assert_eq!(replaced, array! { "a" => array![2], 0 => "d", 1 => "e" });
/// ```
///
/// # Errors
///
/// [`ArrayMapError::InvalidArgument`] when a merge has to append to an array
/// whose integer keys already reach `i64::MAX`. Only replacing never fails.
pub fn combine(
    base: &Array,
    incoming: &Array,
    policy: MergePolicy,
    recursive: bool,
) -> Result<Array> {
    match policy {
        MergePolicy::Merge => {
            // The base is re-inserted too, which renumbers its integer keys from 0
            let mut result = Array::with_capacity(base.len() + incoming.len());
            merge_into(&mut result, base, recursive, "merge_with")?;
            merge_into(&mut result, incoming, recursive, "merge_with")?;
            Ok(result)
        }
        MergePolicy::Replace => Ok(replace(base, incoming, recursive)),
    }
}

/// Shorthand for [`combine`] with [`MergePolicy::Merge`].
pub fn merge(base: &Array, incoming: &Array, recursive: bool) -> Result<Array> {
    combine(base, incoming, MergePolicy::Merge, recursive)
}

/// Shorthand for [`combine`] with [`MergePolicy::Replace`].
pub fn replace(base: &Array, incoming: &Array, recursive: bool) -> Array {
    let mut result = base.clone();
    replace_into(&mut result, incoming, recursive);
    result
}

/// Merges `source` into `target` in place.
///
/// `target`'s existing keys are left untouched; only `source`'s integer keys
/// are renumbered. On error `target` may be partially merged, so callers
/// merge into a scratch array.
pub(crate) fn merge_into(
    target: &mut Array,
    source: &Array,
    recursive: bool,
    operation: &str,
) -> std::result::Result<(), ArrayMapError> {
    for (key, value) in source {
        if key.is_int() {
            if target.push(value.clone()).is_none() {
                return Err(ArrayMapError::InvalidArgument {
                    operation: operation.to_string(),
                    reason: format!(
                        "cannot append entry '{key}': next integer key after {} is unavailable",
                        i64::MAX
                    ),
                });
            }
            continue;
        }
        if recursive {
            if let (Some(Value::Array(existing)), Value::Array(nested)) =
                (target.get_mut(key), value)
            {
                trace!(key = %key, "Merging nested arrays");
                merge_into(existing, nested, true, operation)?;
                continue;
            }
        }
        overwrite(target, key, value);
    }
    Ok(())
}

/// Replaces entries of `target` with those of `source` in place.
pub(crate) fn replace_into(target: &mut Array, source: &Array, recursive: bool) {
    for (key, value) in source {
        if recursive {
            if let (Some(Value::Array(existing)), Value::Array(nested)) =
                (target.get_mut(key), value)
            {
                trace!(key = %key, "Replacing nested arrays");
                replace_into(existing, nested, true);
                continue;
            }
        }
        overwrite(target, key, value);
    }
}

fn overwrite(target: &mut Array, key: &Key, value: &Value) {
    if target.insert(key, value.clone()).is_some() {
        trace!(key = %key, "Overwrote colliding key");
    }
}
