//! # Record Codec
//!
//! Block bodies travel as lowercase hex of compact JSON text. Encoding is
//! total over `serde_json::Value`; decoding rejects anything that is not
//! hex-wrapped JSON of the requested shape.

use crate::domain::errors::CodecError;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Encode a JSON value into its transport form.
pub fn encode(value: &Value) -> String {
    hex::encode(value.to_string())
}

/// Decode a transport form back into a JSON value.
pub fn decode(body: &str) -> Result<Value, CodecError> {
    decode_as(body)
}

/// Decode a transport form straight into a typed payload.
pub fn decode_as<T: DeserializeOwned>(body: &str) -> Result<T, CodecError> {
    let bytes = hex::decode(body)?;
    Ok(serde_json::from_slice(&bytes)?)
}
