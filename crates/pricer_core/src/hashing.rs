//! Canonical JSON rendering and SHA-256 content hashes.
//!
//! The canonical form of a value is its `serde_json::Value` tree rendered
//! compactly. Object keys come out sorted because `serde_json::Map` is a
//! `BTreeMap` unless the `preserve_order` feature is enabled, which this
//! workspace never does.

use crate::types::PricingError;
use serde::Serialize;
use serde_json::Value;
use sha2::{Digest, Sha256};

/// Render a JSON value in canonical form (sorted keys, no whitespace).
///
/// # Examples
/// ```
/// use pricer_core::hashing::canonical_json;
/// use serde_json::json;
///
/// let v = json!({"b": 1, "a": {"d": 2.5, "c": null}});
/// assert_eq!(canonical_json(&v), r#"{"a":{"c":null,"d":2.5},"b":1}"#);
/// ```
pub fn canonical_json(value: &Value) -> String {
    value.to_string()
}

/// Lowercase hex SHA-256 digest of `bytes`.
///
/// # Examples
/// ```
/// use pricer_core::hashing::sha256_hex;
///
/// assert_eq!(
///     sha256_hex(b"abc"),
///     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
/// );
/// ```
pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

/// Hash any serialisable value through its canonical JSON form.
///
/// Two values hash equal exactly when their canonical JSON is byte-equal,
/// so field order in the Rust type does not matter.
///
/// # Errors
/// `PricingError::InvalidInput` if the value cannot be represented as JSON
/// (for example a map with non-string keys).
pub fn content_hash<T: Serialize + ?Sized>(value: &T) -> Result<String, PricingError> {
    let tree = serde_json::to_value(value).map_err(|e| {
        PricingError::invalid_input(format!("value is not representable as JSON: {}", e))
    })?;
    Ok(sha256_hex(canonical_json(&tree).as_bytes()))
}
