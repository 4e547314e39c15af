//! serializer/string.rs
//! UTF-8 string serializer.
use crate::serializer::types::{SerializationError, ValueSerializer};

/// `String` <-> UTF-8 bytes. An empty byte string decodes to an empty `String`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Utf8Serializer;

impl ValueSerializer for Utf8Serializer {
    type Value = String;

    fn serialize(&self, value: &String) -> Result<Vec<u8>, SerializationError> {
        Ok(value.as_bytes().to_vec())
    }

    fn deserialize(&self, bytes: Option<&[u8]>) -> Result<Option<String>, SerializationError> {
        match bytes {
            None => Ok(None),
            Some(b) => Ok(Some(String::from_utf8(b.to_vec())?)),
        }
    }
}
