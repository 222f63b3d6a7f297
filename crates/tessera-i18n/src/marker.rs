//! The `$i18n` translation marker
//!
//! A localized leaf value travels to storage wrapped as `{ "$i18n": value }`.
//! The marker is the engine's only wire-format commitment: transport layers
//! must preserve it byte-for-byte.

use serde_json::{Map, Value};

/// Key of the translation wrapper object.
pub const I18N_KEY: &str = "$i18n";

/// Whether a value is already a translation wrapper.
///
/// A value counts as wrapped iff it is an object with exactly one key named
/// `$i18n`. The exactness distinguishes a wrapper from a coincidental
/// object that happens to carry a `$i18n` property among others; do not
/// loosen it.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use tessera_i18n::is_wrapped;
///
/// assert!(is_wrapped(&json!({ "$i18n": "Hello" })));
/// assert!(!is_wrapped(&json!({ "$i18n": "Hello", "note": "extra" })));
/// assert!(!is_wrapped(&json!("Hello")));
/// ```
pub fn is_wrapped(value: &Value) -> bool {
	match value {
		Value::Object(map) => map.len() == 1 && map.contains_key(I18N_KEY),
		_ => false,
	}
}

/// Wrap a leaf value in the translation marker.
pub fn wrap_value(value: Value) -> Value {
	let mut map = Map::with_capacity(1);
	map.insert(I18N_KEY.to_string(), value);
	Value::Object(map)
}

/// Strip exactly one `$i18n` layer.
///
/// A no-op on values that are not wrapped, so unwrapping twice is safe.
pub fn unwrap_value(value: Value) -> Value {
	match value {
		Value::Object(mut map) if map.len() == 1 => match map.remove(I18N_KEY) {
			Some(inner) => inner,
			None => Value::Object(map),
		},
		other => other,
	}
}
