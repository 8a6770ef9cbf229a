//! NAS Block System - block type registry and search-space composer
//!
//! This crate catalogs the block kinds available to an architecture search,
//! dispatches construction by stable block type identity, and assembles the
//! hyperparameters every kind declares into one namespaced search space.

pub mod core;
pub mod categories;
pub mod runtime;
mod tests;

// Re-export commonly used types
pub use crate::core::block::{Block, BlockBuilder, BlockId, BlockMetadata};
pub use crate::core::block_type::{BlockType, BlockTypes, EMPTY_BLOCK, FLATTEN_TYPES};
pub use crate::core::hparams::{HParamSpec, Hyperparameters, ParameterValue};
pub use crate::core::registry::{BlockRegistry, BlockSource};
pub use crate::categories::BlockCategory;
pub use crate::runtime::{BlockCatalog, BlockSelection, Blocks, BlocksError, SearchSpaceConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
