//! Convenience re-exports for the common case
//!
//! ```
//! use tessera::prelude::*;
//! ```

#[cfg(feature = "blocks")]
pub use tessera_blocks::{
	BlockContent, BlockNode, BlockRenderer, RenderNode, RenderOptions, render_tree,
};
#[cfg(feature = "expand")]
pub use tessera_expand::{
	Expansion, ListViewConfig, detect_many_relations, plan_expansions,
};
#[cfg(feature = "fields")]
pub use tessera_fields::{
	BlockDefinition, BlockRegistry, FieldDefinition, FieldMap, FieldRegistry,
	contains_localized_fields,
};
#[cfg(feature = "i18n")]
pub use tessera_i18n::{
	unwrap_block_content, unwrap_localized, wrap_block_content, wrap_localized,
};
