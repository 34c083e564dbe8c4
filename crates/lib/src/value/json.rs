//! Conversions between [`Value`]/[`Array`] and `serde_json`.
//!
//! JSON objects become arrays with normalized keys (`"0"` turns into the
//! integer key `0`), JSON arrays become lists, and floats truncate toward
//! zero. In the other direction, lists become JSON arrays and every other
//! array becomes a JSON object with stringified keys.

use super::{Array, Key, Value};

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match (n.as_i64(), n.as_u64()) {
                (Some(i), _) => Value::Int(i),
                (None, Some(u)) => Value::from(u),
                (None, None) => Value::from(n.as_f64().unwrap_or_default()),
            },
            serde_json::Value::String(s) => Value::Text(s),
            serde_json::Value::Array(items) => {
                Value::Array(Array::from_values(items.into_iter().map(Value::from)))
            }
            serde_json::Value::Object(fields) => Value::Array(
                fields
                    .into_iter()
                    .map(|(k, v)| (Key::from(k), Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<&Value> for serde_json::Value {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Int(n) => serde_json::Value::from(*n),
            Value::Text(s) => serde_json::Value::String(s.clone()),
            Value::Array(array) => serde_json::Value::from(array),
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        serde_json::Value::from(&value)
    }
}

impl From<&Array> for serde_json::Value {
    fn from(array: &Array) -> Self {
        if array.is_list() {
            serde_json::Value::Array(array.values().map(serde_json::Value::from).collect())
        } else {
            serde_json::Value::Object(
                array
                    .iter()
                    .map(|(k, v)| (k.to_string(), serde_json::Value::from(v)))
                    .collect(),
            )
        }
    }
}

impl Array {
    /// Parses a JSON object or array into an [`Array`].
    ///
    /// ```
    /// # use arraymap::{Array, array};
    /// let parsed = Array::from_json_str(r#"{"a": [1, 2], "3": "x"}"#).unwrap();
    /// assert_eq!(parsed, array! { "a" => array![1, 2], 3 => "x" });
    /// ```
    pub fn from_json_str(json: &str) -> crate::Result<Array> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the array as compact JSON.
    pub fn to_json_string(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Value {
    /// Serializes the value as compact JSON.
    pub fn to_json_string(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
