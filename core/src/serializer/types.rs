//! serializer/types.rs
//! The inner serializer capability wrapped by the codec.
use std::string::FromUtf8Error;

use thiserror::Error;

/// Converts a domain value to and from bytes.
///
/// The codec never looks inside these bytes. `deserialize(None)` is the
/// "no value" path: implementations return their domain's null result
/// (usually `Ok(None)`) without touching any framing.
pub trait ValueSerializer: Send + Sync {
    type Value;

    fn serialize(&self, value: &Self::Value) -> Result<Vec<u8>, SerializationError>;

    fn deserialize(&self, bytes: Option<&[u8]>) -> Result<Option<Self::Value>, SerializationError>;
}

impl<S: ValueSerializer + ?Sized> ValueSerializer for Box<S> {
    type Value = S::Value;

    fn serialize(&self, value: &Self::Value) -> Result<Vec<u8>, SerializationError> {
        (**self).serialize(value)
    }

    fn deserialize(&self, bytes: Option<&[u8]>) -> Result<Option<Self::Value>, SerializationError> {
        (**self).deserialize(bytes)
    }
}

#[derive(Debug, Error)]
pub enum SerializationError {
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("bincode encode: {0}")]
    BincodeEncode(#[from] bincode::error::EncodeError),

    #[error("bincode decode: {0}")]
    BincodeDecode(#[from] bincode::error::DecodeError),

    #[error("invalid utf-8: {0}")]
    Utf8(#[from] FromUtf8Error),

    #[error("{0}")]
    Custom(String),
}

impl SerializationError {
    pub fn custom(msg: impl Into<String>) -> Self {
        SerializationError::Custom(msg.into())
    }
}
