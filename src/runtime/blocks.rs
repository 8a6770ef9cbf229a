//! Block factory
//!
//! A [`BlockCatalog`] pairs a [`BlockSource`] with the [`BlockTypes`]
//! enumeration snapshotted from it and a builder cache that is populated at
//! most once. [`Blocks`] is the handle callers use: constructing one
//! populates the cache of its catalog if nobody has yet.
//!
//! ## Cache population
//!
//! The cache sits behind a parking_lot `RwLock`. Population holds an
//! upgradable read guard while it checks for an existing cache, so two
//! threads racing on first construction are serialized: the loser sees the
//! winner's cache and resolves nothing. The cache is swapped in as a whole,
//! so readers see either no cache or a complete one.

use indexmap::IndexMap;
use parking_lot::{RwLock, RwLockUpgradableReadGuard};
use std::sync::{Arc, LazyLock};
use tracing::{debug, trace, warn};

use crate::core::block::{Block, BlockBuilder};
use crate::core::block_type::{BlockType, BlockTypes};
use crate::core::hparams::Hyperparameters;
use crate::core::registry::{BlockRegistry, BlockSource, RegistryError};

use super::config::SearchSpaceConfig;
use super::search_space::{aggregate, BlockSelection};
use super::BlocksError;

type BuilderCache = IndexMap<BlockType, Arc<dyn BlockBuilder>>;

/// Process-wide catalog over the built-in registry
static GLOBAL_CATALOG: LazyLock<Result<Arc<BlockCatalog>, RegistryError>> = LazyLock::new(|| {
    let registry = BlockRegistry::builtin()?;
    Ok(Arc::new(BlockCatalog::new(Arc::new(registry))))
});

/// Block source, its type enumeration and the lazily built builder cache
pub struct BlockCatalog {
    source: Arc<dyn BlockSource>,
    types: BlockTypes,
    builders: RwLock<Option<Arc<BuilderCache>>>,
}

impl BlockCatalog {
    /// Snapshot the enumeration of `source`; the cache starts empty
    pub fn new(source: Arc<dyn BlockSource>) -> Self {
        let types = BlockTypes::from_source(source.as_ref());
        Self {
            source,
            types,
            builders: RwLock::new(None),
        }
    }

    /// The shared catalog over every built-in block kind
    pub fn global() -> Result<Arc<Self>, BlocksError> {
        (*GLOBAL_CATALOG).clone().map_err(BlocksError::from)
    }

    /// The type enumeration of this catalog
    pub fn types(&self) -> &BlockTypes {
        &self.types
    }

    /// Whether the builder cache has been populated
    pub fn is_constructed(&self) -> bool {
        self.builders.read().is_some()
    }

    /// Populate the builder cache unless it already is
    ///
    /// Every non-empty identity is resolved in enumeration order. If any
    /// resolution fails, the error is returned and the cache stays empty.
    pub fn construct(&self) -> Result<(), BlocksError> {
        let guard = self.builders.upgradable_read();
        if guard.is_some() {
            return Ok(());
        }

        let mut cache = BuilderCache::with_capacity(self.types.len());
        for block_type in self.types.iter().filter(|t| !t.is_empty()) {
            trace!(block_type = %block_type, "resolving block builder");
            let builder = self.source.resolve(block_type.name())?;
            cache.insert(block_type.clone(), builder);
        }

        debug!(count = cache.len(), "block builder cache populated");
        let mut builders = RwLockUpgradableReadGuard::upgrade(guard);
        *builders = Some(Arc::new(cache));
        Ok(())
    }

    /// Cached builder for `block_type`
    pub fn lookup(&self, block_type: &BlockType) -> Result<Arc<dyn BlockBuilder>, BlocksError> {
        if block_type.is_empty() {
            return Err(BlocksError::EmptyBlockType);
        }

        let builders = self.builders.read();
        let cache = builders.as_deref().ok_or(BlocksError::Uninitialized)?;

        cache
            .get(block_type)
            .cloned()
            .ok_or_else(|| BlocksError::UnknownBlockType(block_type.name().to_string()))
    }

    /// Build a fresh instance, resolving the name in the source rather than
    /// through the cache
    pub fn new_instance(
        &self,
        block_type: &BlockType,
        override_name: Option<&str>,
    ) -> Result<Box<dyn Block>, BlocksError> {
        if block_type.is_empty() {
            return Err(BlocksError::EmptyBlockType);
        }

        let builder = self.source.resolve(block_type.name())?;
        Ok(builder.build(override_name.unwrap_or(block_type.name())))
    }

    /// Namespaced search space over the selected kinds
    ///
    /// Works whether or not the cache has been constructed.
    pub fn search_space(&self, selection: &BlockSelection) -> Result<Hyperparameters, BlocksError> {
        let unknown = selection.unknown_names(&self.types);
        if !unknown.is_empty() {
            warn!(?unknown, "selection names unregistered block kinds");
        }

        aggregate(self.source.as_ref(), &self.types, selection)
    }

    /// Search space as described by `config`
    ///
    /// In strict mode a selection naming unregistered kinds is an error.
    pub fn search_space_with_config(&self, config: &SearchSpaceConfig) -> Result<Hyperparameters, BlocksError> {
        let selection = config.selection();
        if config.strict {
            let unknown = selection.unknown_names(&self.types);
            if !unknown.is_empty() {
                return Err(BlocksError::UnknownSelection(unknown));
            }
        }

        self.search_space(&selection)
    }
}

/// Factory for block builders and instances
///
/// # Example
/// ```
/// use nas_block_system::{Block, BlockSelection, Blocks};
///
/// let blocks = Blocks::new().unwrap();
/// let conv = blocks.types().by_name("TUNABLE_CONVOLUTION").unwrap();
///
/// let instance = blocks.get_new(conv, Some("stem_conv")).unwrap();
/// assert_eq!(instance.name(), "stem_conv");
///
/// let space = blocks.search_space(&BlockSelection::All).unwrap();
/// assert!(space.contains_key("TUNABLE_CONVOLUTION_kernel_size"));
/// ```
#[derive(Clone)]
pub struct Blocks {
    catalog: Arc<BlockCatalog>,
}

impl Blocks {
    /// Factory over the process-wide built-in catalog
    pub fn new() -> Result<Self, BlocksError> {
        Self::with_catalog(BlockCatalog::global()?)
    }

    /// Factory over an explicitly provided catalog
    pub fn with_catalog(catalog: Arc<BlockCatalog>) -> Result<Self, BlocksError> {
        catalog.construct()?;
        Ok(Self { catalog })
    }

    pub fn catalog(&self) -> &Arc<BlockCatalog> {
        &self.catalog
    }

    pub fn types(&self) -> &BlockTypes {
        self.catalog.types()
    }

    /// The shared builder for `block_type`
    pub fn get(&self, block_type: &BlockType) -> Result<Arc<dyn BlockBuilder>, BlocksError> {
        self.catalog.lookup(block_type)
    }

    /// A new instance of `block_type`, named `override_name` if given
    pub fn get_new(
        &self,
        block_type: &BlockType,
        override_name: Option<&str>,
    ) -> Result<Box<dyn Block>, BlocksError> {
        self.catalog.new_instance(block_type, override_name)
    }

    pub fn search_space(&self, selection: &BlockSelection) -> Result<Hyperparameters, BlocksError> {
        self.catalog.search_space(selection)
    }

    pub fn search_space_with_config(&self, config: &SearchSpaceConfig) -> Result<Hyperparameters, BlocksError> {
        self.catalog.search_space_with_config(config)
    }
}
