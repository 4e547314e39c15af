//! serializer/json.rs
//! JSON serializer over serde_json.
use std::fmt;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::serializer::types::{SerializationError, ValueSerializer};

/// Any serde type as JSON text. Empty input decodes to `None`.
pub struct JsonSerializer<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonSerializer<T> {
    pub const fn new() -> Self {
        Self { _marker: PhantomData }
    }
}

impl<T> Default for JsonSerializer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for JsonSerializer<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for JsonSerializer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("JsonSerializer")
    }
}

impl<T> ValueSerializer for JsonSerializer<T>
where
    T: Serialize + DeserializeOwned,
{
    type Value = T;

    fn serialize(&self, value: &T) -> Result<Vec<u8>, SerializationError> {
        Ok(serde_json::to_vec(value)?)
    }

    fn deserialize(&self, bytes: Option<&[u8]>) -> Result<Option<T>, SerializationError> {
        match bytes {
            None => Ok(None),
            Some(b) if b.is_empty() => Ok(None),
            Some(b) => Ok(Some(serde_json::from_slice(b)?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn json_value_roundtrip() {
        let ser = JsonSerializer::<Value>::new();
        let v = json!({ "id": 7, "tags": ["a", "b"], "nested": { "ok": true } });
        let bytes = ser.serialize(&v).unwrap();
        assert_eq!(ser.deserialize(Some(&bytes)).unwrap(), Some(v));
    }

    #[test]
    fn malformed_json_is_an_error() {
        let ser = JsonSerializer::<Value>::new();
        assert!(matches!(ser.deserialize(Some(b"{not json")), Err(SerializationError::Json(_))));
    }
}
