//! Typed getters
//!
//! Each getter resolves the path through [`JsonDocument::get`] and narrows the
//! node. A node of the wrong type reads as `Ok(None)`, the same as a missing
//! key; resolution failures still propagate.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::core::JsonDocument;
use crate::error::{DocumentError, DocumentResult};

impl JsonDocument {
    /// Retrieve a string
    ///
    /// # Errors
    ///
    /// Same failures as [`JsonDocument::get`].
    pub fn get_str(&self, path: &str) -> DocumentResult<Option<&str>> {
        Ok(self.get(path)?.and_then(Value::as_str))
    }

    /// Retrieve a signed integer. Floats with no fractional part narrow too.
    ///
    /// # Errors
    ///
    /// Same failures as [`JsonDocument::get`].
    pub fn get_i64(&self, path: &str) -> DocumentResult<Option<i64>> {
        Ok(self.get(path)?.and_then(integral_i64))
    }

    /// Retrieve an unsigned integer
    ///
    /// # Errors
    ///
    /// Same failures as [`JsonDocument::get`].
    pub fn get_u64(&self, path: &str) -> DocumentResult<Option<u64>> {
        Ok(self.get(path)?.and_then(Value::as_u64))
    }

    /// Retrieve a floating-point number. Integers widen.
    ///
    /// # Errors
    ///
    /// Same failures as [`JsonDocument::get`].
    pub fn get_f64(&self, path: &str) -> DocumentResult<Option<f64>> {
        Ok(self.get(path)?.and_then(Value::as_f64))
    }

    /// Retrieve a boolean
    ///
    /// # Errors
    ///
    /// Same failures as [`JsonDocument::get`].
    pub fn get_bool(&self, path: &str) -> DocumentResult<Option<bool>> {
        Ok(self.get(path)?.and_then(Value::as_bool))
    }

    /// Retrieve an array
    ///
    /// # Errors
    ///
    /// Same failures as [`JsonDocument::get`].
    pub fn get_array(&self, path: &str) -> DocumentResult<Option<&Vec<Value>>> {
        Ok(self.get(path)?.and_then(Value::as_array))
    }

    /// Retrieve an object
    ///
    /// # Errors
    ///
    /// Same failures as [`JsonDocument::get`].
    pub fn get_object(&self, path: &str) -> DocumentResult<Option<&Map<String, Value>>> {
        Ok(self.get(path)?.and_then(Value::as_object))
    }

    /// Deserialize the node at `path` into `T`
    ///
    /// ```rust
    /// # use keypath::JsonDocument;
    /// # use serde::Deserialize;
    /// # use serde_json::json;
    /// #[derive(Deserialize, Debug, PartialEq)]
    /// struct Port {
    ///     number: u16,
    /// }
    ///
    /// let doc = JsonDocument::from_value(json!({"service": {"port": {"number": 443}}}));
    /// let port: Option<Port> = doc.get_as("service.port")?;
    /// assert_eq!(port, Some(Port { number: 443 }));
    /// # Ok::<(), keypath::DocumentError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// - Same failures as [`JsonDocument::get`]
    /// - `DocumentError::Deserialize` if the node exists but does not fit `T`
    pub fn get_as<T: DeserializeOwned>(&self, path: &str) -> DocumentResult<Option<T>> {
        let Some(node) = self.get(path)? else {
            return Ok(None);
        };

        <T as serde::Deserialize>::deserialize(node)
            .map(Some)
            .map_err(|source| DocumentError::Deserialize {
                path: path.to_string(),
                target: std::any::type_name::<T>(),
                source,
            })
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn integral_i64(value: &Value) -> Option<i64> {
    if let Some(n) = value.as_i64() {
        return Some(n);
    }

    let f = value.as_f64()?;
    let in_range = f >= i64::MIN as f64 && f < i64::MAX as f64;
    (f.fract() == 0.0 && in_range).then(|| f as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_integral_narrowing() {
        assert_eq!(integral_i64(&json!(5)), Some(5));
        assert_eq!(integral_i64(&json!(5.0)), Some(5));
        assert_eq!(integral_i64(&json!(5.5)), None);
        assert_eq!(integral_i64(&json!("5")), None);
        assert_eq!(integral_i64(&json!(1e300)), None);
        assert_eq!(integral_i64(&json!(u64::MAX)), None);
    }
}
