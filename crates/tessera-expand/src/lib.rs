//! # tessera-expand
//!
//! Expansion planning for the Tessera admin toolkit: given a collection's
//! field definitions and its list view configuration, decide which relation
//! and upload references a fetch must resolve inline ([`plan_expansions`])
//! and which relation fields are multi-valued and need explicit join-table
//! loading ([`detect_many_relations`]).

pub mod many;
pub mod plan;

pub use many::{
	CollectionSchema, RelationType, SchemaField, SchemaFieldMetadata, detect_many_relations,
};
pub use plan::{Expansion, ListViewConfig, plan_expansions};
