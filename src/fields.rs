//! Field and block definition model
//!
//! Re-exports `tessera-fields`: definitions ([`FieldDefinition`],
//! [`FieldOptions`], [`NestedFields`]), the registries backing named
//! nested sets and block types, and the recursive
//! [`contains_localized_fields`] predicate.

pub use tessera_fields::*;
