//! Localization wrapping for nested block content
//!
//! Re-exports `tessera-i18n`: the `$i18n` marker helpers and the
//! wrap/unwrap transforms applied around storage.

pub use tessera_i18n::*;
