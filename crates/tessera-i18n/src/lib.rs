//! # tessera-i18n
//!
//! Localization wrapping for nested block content.
//!
//! Translatable leaf values inside `object`, `array` and `blocks` fields
//! are opaque to the server's flat-field localization pass, so the client
//! marks them with the `{ "$i18n": value }` wrapper before submit
//! ([`wrap_localized`], [`wrap_block_content`]) and strips the markers
//! again after retrieval ([`unwrap_localized`], [`unwrap_block_content`]).
//! Both directions are the same walk over the field definitions, which
//! keeps the round trip lossless.

pub mod marker;
pub mod wrap;

pub use marker::{I18N_KEY, is_wrapped, unwrap_value, wrap_value};
pub use wrap::{
	I18nError, I18nResult, MAX_NESTING_DEPTH, unwrap_block_content, unwrap_localized,
	wrap_block_content, wrap_localized,
};
