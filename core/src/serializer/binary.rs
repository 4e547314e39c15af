//! serializer/binary.rs
//! Compact binary serializer over bincode's serde bridge.
use std::fmt;
use std::marker::PhantomData;
use std::mem;

use bincode::config::{standard, Configuration};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::serializer::types::{SerializationError, ValueSerializer};

/// Any serde type as bincode (standard config).
///
/// Empty input decodes to `None`, except for zero-sized types (`()`, unit
/// structs), whose bincode encoding is itself empty.
pub struct BincodeSerializer<T> {
    config: Configuration,
    _marker: PhantomData<fn() -> T>,
}

impl<T> BincodeSerializer<T> {
    pub const fn new() -> Self {
        Self { config: standard(), _marker: PhantomData }
    }
}

impl<T> Default for BincodeSerializer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for BincodeSerializer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BincodeSerializer")
    }
}

impl<T> ValueSerializer for BincodeSerializer<T>
where
    T: Serialize + DeserializeOwned,
{
    type Value = T;

    fn serialize(&self, value: &T) -> Result<Vec<u8>, SerializationError> {
        Ok(bincode::serde::encode_to_vec(value, self.config)?)
    }

    fn deserialize(&self, bytes: Option<&[u8]>) -> Result<Option<T>, SerializationError> {
        match bytes {
            None => Ok(None),
            Some(b) if b.is_empty() && mem::size_of::<T>() != 0 => Ok(None),
            Some(b) => {
                let (value, read) = bincode::serde::decode_from_slice(b, self.config)?;
                if read != b.len() {
                    return Err(SerializationError::custom(format!(
                        "trailing bytes after bincode value: read {} of {}",
                        read,
                        b.len()
                    )));
                }
                Ok(Some(value))
            }
        }
    }
}
