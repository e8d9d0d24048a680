//! Tolerant field decoders for the provider document.
//!
//! One malformed entry must not cost the rest of the board. Fields decode
//! through a `serde_json::Value` first; a value of the wrong shape becomes
//! `None` (or the field default) and a list entry that cannot be decoded at
//! all is skipped with a warning.

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::warn;

/// Decode the field as `T`, or `None` if it has the wrong shape.
pub fn option<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Like [`option`], but only a JSON object is accepted.
///
/// Keeps serde from reading a struct out of an array, so a to-many
/// relationship (`"data": [...]`) is treated as no link at all.
pub fn object<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        value @ Value::Object(_) => Ok(serde_json::from_value(value).ok()),
        _ => Ok(None),
    }
}

/// Like [`object`], falling back to `T::default()`.
pub fn object_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(object(deserializer)?.unwrap_or_default())
}

/// Resource id: strings as-is, numbers stringified, anything else rejected.
pub fn id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) if !s.trim().is_empty() => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!("invalid resource id: {}", other))),
    }
}

/// Decode a list entry by entry, skipping entries that fail.
///
/// A missing or null list is empty. A list that is not an array at all is
/// still an error: the document is not a feed.
pub fn skip_invalid<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let entries = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();

    Ok(entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value(entry) {
            Ok(decoded) => Some(decoded),
            Err(e) => {
                warn!("Skipping malformed feed entry #{}: {}", index, e);
                None
            }
        })
        .collect())
}
