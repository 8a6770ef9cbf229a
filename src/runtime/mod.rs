//! Block factory and search-space aggregation
//!
//! This module provides the runtime side of the block system: the catalog
//! that resolves block type identities to builders exactly once, the
//! factory handed to callers, and the aggregation of every kind's declared
//! hyperparameters into one namespaced search space.

pub mod blocks;
pub mod config;
pub mod search_space;

pub use blocks::{BlockCatalog, Blocks};
pub use config::{ConfigError, SearchSpaceConfig};
pub use search_space::BlockSelection;

use crate::core::hparams::HParamError;
use crate::core::registry::RegistryError;

/// Factory and aggregation errors
#[derive(Debug, thiserror::Error)]
pub enum BlocksError {
    /// The reserved empty identity was used where a real block is needed
    #[error("EMPTY_BLOCK has no builder")]
    EmptyBlockType,

    /// The identity is not part of the constructed builder cache
    #[error("Unknown block type: {0}")]
    UnknownBlockType(String),

    /// Builders were looked up before the cache was constructed
    #[error("Block builders have not been constructed")]
    Uninitialized,

    /// A strict selection named kinds that are not registered
    #[error("Selection names unregistered block kinds: {0:?}")]
    UnknownSelection(Vec<String>),

    /// Name resolution failed in the registry
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Two declarations collided in the merged namespace; the registration
    /// set contains names whose prefixes overlap
    #[error(transparent)]
    HParams(#[from] HParamError),
}
