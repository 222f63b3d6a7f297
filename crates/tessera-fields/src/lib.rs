//! # tessera-fields
//!
//! Field and block definition model for the Tessera admin toolkit.
//!
//! The transform engine (localization wrapping, expansion planning, block
//! rendering) never owns schema information; it consults the read-only
//! registries defined here:
//!
//! - [`FieldDefinition`] / [`FieldMap`]: per-field metadata keyed by type
//!   name, with nested sets for `object` and `array` fields
//! - [`FieldRegistry`]: named field sets backing [`NestedFields::Named`]
//!   references, resolved eagerly at the point of use
//! - [`BlockDefinition`] / [`BlockRegistry`]: per-block-type field sets and
//!   child-allowance rules
//! - [`contains_localized_fields`]: the recursive predicate deciding
//!   whether a nested structure can hold translations at all

pub mod definition;
pub mod localized;
pub mod registry;

pub use definition::{
	FieldDefinition, FieldMap, FieldOptions, ListCell, NestedFields, RelationKind,
	builtin_constructors, type_names,
};
pub use localized::{MAX_SCHEMA_DEPTH, contains_localized_fields};
pub use registry::{BlockDefinition, BlockRegistry, FieldRegistry};
