//! JSON decoding without a nesting limit
//!
//! Every tree level costs two JSON levels (object plus `children` array), so
//! serde_json's default limit of 128 caps trees at roughly 63 nodes deep.
//! The limit is lifted and the stack grows on demand instead.

use std::io::Read;

use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Decode `T` from a reader with no recursion limit
pub fn from_reader_unbounded<R: Read, T: DeserializeOwned>(reader: R) -> serde_json::Result<T> {
    decode(serde_json::Deserializer::from_reader(reader))
}

/// Decode `T` from a string with no recursion limit
pub fn from_str_unbounded<T: DeserializeOwned>(json: &str) -> serde_json::Result<T> {
    decode(serde_json::Deserializer::from_str(json))
}

fn decode<'de, R, T>(mut de: serde_json::Deserializer<R>) -> serde_json::Result<T>
where
    R: serde_json::de::Read<'de>,
    T: Deserialize<'de>,
{
    de.disable_recursion_limit();
    let value = T::deserialize(serde_stacker::Deserializer::new(&mut de))?;
    de.end()?;
    Ok(value)
}
