//! serializer/bytes.rs
//! Passthrough serializer for values that are already bytes.
use crate::serializer::types::{SerializationError, ValueSerializer};

#[derive(Debug, Default, Clone, Copy)]
pub struct BytesSerializer;

impl ValueSerializer for BytesSerializer {
    type Value = Vec<u8>;

    fn serialize(&self, value: &Vec<u8>) -> Result<Vec<u8>, SerializationError> {
        Ok(value.clone())
    }

    fn deserialize(&self, bytes: Option<&[u8]>) -> Result<Option<Vec<u8>>, SerializationError> {
        Ok(bytes.map(<[u8]>::to_vec))
    }
}
