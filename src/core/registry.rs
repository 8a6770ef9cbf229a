//! Block Registry - Central catalog of available block kinds
//!
//! This module provides a thread-safe registry mapping block names to their
//! builders. It supports:
//! - Registration with name validation and duplicate rejection
//! - Resolution by name
//! - Enumeration of names with stable small-integer identities
//! - Discovery by category or search query

use crate::categories::BlockCategory;
use crate::core::block::BlockBuilder;
use crate::core::block_type::EMPTY_BLOCK;
use indexmap::IndexMap;
use parking_lot::RwLock;
use std::sync::Arc;

/// Source of block builders consumed by the factory
///
/// [`BlockRegistry`] is the production implementation; anything that can
/// resolve names and list them in a stable order can stand in for it.
pub trait BlockSource: Send + Sync {
    /// Resolve a registered name to its builder
    fn resolve(&self, name: &str) -> Result<Arc<dyn BlockBuilder>, RegistryError>;

    /// Registered names with their identity values, in registration order
    ///
    /// Values start at 1; 0 is reserved for the empty block.
    fn base_enum(&self) -> Vec<(String, u32)>;
}

/// Block registry for managing all available block kinds
///
/// Entries are kept in an `IndexMap` behind a parking_lot `RwLock`, so
/// registration order is preserved and reads can proceed concurrently.
#[derive(Clone)]
pub struct BlockRegistry {
    blocks: Arc<RwLock<IndexMap<String, Arc<dyn BlockBuilder>>>>,
}

impl BlockRegistry {
    /// Create a new empty block registry
    ///
    /// # Example
    /// ```
    /// use nas_block_system::core::registry::BlockRegistry;
    ///
    /// let registry = BlockRegistry::new();
    /// assert_eq!(registry.count(), 0);
    /// ```
    pub fn new() -> Self {
        Self {
            blocks: Arc::new(RwLock::new(IndexMap::new())),
        }
    }

    /// Create a registry holding every built-in block kind
    pub fn builtin() -> Result<Self, RegistryError> {
        let registry = Self::new();
        crate::categories::register_builtins(&registry)?;
        Ok(registry)
    }

    /// Register a block kind under its metadata name
    ///
    /// # Returns
    /// * `Ok(value)` - the identity value assigned to the name
    /// * `Err(RegistryError)` if the name is invalid or already registered
    ///
    /// # Example
    /// ```ignore
    /// let value = registry.register(Arc::new(FlattenBlock::new()))?;
    /// ```
    pub fn register(&self, builder: Arc<dyn BlockBuilder>) -> Result<u32, RegistryError> {
        let name = builder.metadata().name.clone();
        validate_name(&name)?;

        let mut blocks = self.blocks.write();

        if blocks.contains_key(&name) {
            return Err(RegistryError::DuplicateBlock(name));
        }

        blocks.insert(name, builder);
        Ok(blocks.len() as u32)
    }

    /// Get a builder by name
    pub fn lookup(&self, name: &str) -> Result<Arc<dyn BlockBuilder>, RegistryError> {
        let blocks = self.blocks.read();

        blocks
            .get(name)
            .cloned()
            .ok_or_else(|| RegistryError::BlockNotFound(name.to_string()))
    }

    /// Registered names in registration order
    pub fn names(&self) -> Vec<String> {
        self.blocks.read().keys().cloned().collect()
    }

    /// Get builders filtered by category
    pub fn blocks_by_category(&self, category: &BlockCategory) -> Vec<Arc<dyn BlockBuilder>> {
        let blocks = self.blocks.read();

        blocks
            .values()
            .filter(|b| &b.metadata().category == category)
            .cloned()
            .collect()
    }

    /// Search for builders by query string
    ///
    /// Case-insensitive match against name and description.
    pub fn search_blocks(&self, query: &str) -> Vec<Arc<dyn BlockBuilder>> {
        let blocks = self.blocks.read();
        let query = query.to_lowercase();

        blocks
            .values()
            .filter(|b| {
                let meta = b.metadata();
                meta.name.to_lowercase().contains(&query)
                    || meta.description.to_lowercase().contains(&query)
            })
            .cloned()
            .collect()
    }

    /// Get the number of registered block kinds
    pub fn count(&self) -> usize {
        self.blocks.read().len()
    }

    /// Check if a name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.blocks.read().contains_key(name)
    }
}

impl BlockSource for BlockRegistry {
    fn resolve(&self, name: &str) -> Result<Arc<dyn BlockBuilder>, RegistryError> {
        self.lookup(name)
    }

    fn base_enum(&self) -> Vec<(String, u32)> {
        let blocks = self.blocks.read();
        blocks
            .keys()
            .enumerate()
            .map(|(i, name)| (name.clone(), i as u32 + 1))
            .collect()
    }
}

impl Default for BlockRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Block names become identifiers and search-space prefixes, so they are
/// restricted to upper-case ASCII letters, digits and underscores.
fn validate_name(name: &str) -> Result<(), RegistryError> {
    if name.is_empty() {
        return Err(RegistryError::ValidationError(
            "Block name cannot be empty".into(),
        ));
    }

    if name == EMPTY_BLOCK {
        return Err(RegistryError::ValidationError(format!(
            "{} is reserved",
            EMPTY_BLOCK
        )));
    }

    if !name
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
    {
        return Err(RegistryError::ValidationError(format!(
            "Block name '{}' must consist of A-Z, 0-9 and '_'",
            name
        )));
    }

    Ok(())
}

/// Registry error types
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegistryError {
    /// No block registered under the given name
    #[error("Block not found: {0}")]
    BlockNotFound(String),

    /// Attempted to register a name twice
    #[error("Duplicate block name: {0}")]
    DuplicateBlock(String),

    /// Block validation failed
    #[error("Validation error: {0}")]
    ValidationError(String),
}
