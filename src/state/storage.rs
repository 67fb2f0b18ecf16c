//! Persisted-Value Store
//!
//! Typed wrapper over `window.localStorage`. Values are serialized as JSON;
//! an absent key or an unparseable value degrades to `None` rather than
//! raising. Writes are synchronous; a full or unavailable storage medium is
//! silently ignored.

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Read a value previously written under `key`.
pub fn read<T: DeserializeOwned>(key: &str) -> Option<T> {
    let raw = local_storage().and_then(|storage| storage.get_item(key).ok().flatten());
    decode(raw)
}

/// Write `value` under `key`, replacing whatever was there.
pub fn write<T: Serialize>(key: &str, value: &T) {
    if let Ok(serialized) = serde_json::to_string(value) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(key, &serialized);
        }
    }
}

/// Clear `key` entirely.
pub fn remove(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

fn decode<T: DeserializeOwned>(raw: Option<String>) -> Option<T> {
    raw.and_then(|serialized| serde_json::from_str(&serialized).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_absent_is_none() {
        assert_eq!(decode::<u32>(None), None);
    }

    #[test]
    fn test_decode_garbage_degrades_to_none() {
        assert_eq!(decode::<u32>(Some("not json".to_string())), None);
        assert_eq!(decode::<u32>(Some("{\"truncated\":".to_string())), None);
    }

    #[test]
    fn test_decode_valid_value() {
        assert_eq!(
            decode::<Vec<String>>(Some("[\"a\",\"b\"]".to_string())),
            Some(vec!["a".to_string(), "b".to_string()])
        );
    }
}
