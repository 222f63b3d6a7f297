//! # Tessera
//!
//! A content-management admin toolkit built around a localized
//! block-content engine.
//!
//! Authored page content is a tree of typed blocks with per-node field
//! values. Tessera's engine handles the transform pipeline around that
//! tree: marking per-locale leaf values before storage, stripping the
//! markers again for editing, planning which relation and upload
//! references a fetch must expand, and exposing the tree to a rendering
//! layer through a narrow, crash-free contract.
//!
//! Every operation is a pure, synchronous function over the supplied data
//! and registries; the engine owns no state and performs no I/O.
//!
//! ## Feature Flags
//!
//! Each member crate sits behind an additive feature, all enabled by the
//! default `full` preset:
//!
//! - `fields` - field/block definition model and registries
//! - `blocks` - block tree model and renderer contract
//! - `i18n` - localization wrapping for nested content
//! - `expand` - relation/upload expansion planning
//!
//! ## Quick Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use serde_json::json;
//! use tessera::prelude::*;
//!
//! // Block registry, normally assembled by the admin config layer.
//! let mut blocks = BlockRegistry::new();
//! blocks.register(
//! 	"hero",
//! 	BlockDefinition::new(HashMap::from([
//! 		("title".to_string(), FieldDefinition::text().localized()),
//! 	])),
//! );
//!
//! // Authored content: one hero block with a translatable title.
//! let content = BlockContent::new(vec![BlockNode::new("b1", "hero")])
//! 	.with_values("b1", json!({ "title": "Hello" }).as_object().unwrap().clone());
//!
//! // Mark translations before submit; strip them again after retrieval.
//! let stored = wrap_block_content(&content, &blocks, None).unwrap();
//! assert_eq!(
//! 	serde_json::Value::Object(stored.values["b1"].clone()),
//! 	json!({ "title": { "$i18n": "Hello" } })
//! );
//! let edited = unwrap_block_content(&stored, &blocks, None).unwrap();
//! assert_eq!(edited, content);
//! ```

#[cfg(feature = "blocks")]
pub mod blocks;
#[cfg(feature = "expand")]
pub mod expand;
#[cfg(feature = "fields")]
pub mod fields;
#[cfg(feature = "i18n")]
pub mod i18n;

pub mod prelude;
