//! Shared test doubles

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::categories::BlockCategory;
use crate::core::block::{BlockBuilder, BlockMetadata};
use crate::core::hparams::Hyperparameters;
use crate::core::registry::{BlockRegistry, BlockSource, RegistryError};

/// Builder declaring a fixed set of hyperparameters
pub struct DeclaringBlock {
    metadata: BlockMetadata,
    hparams: Option<Hyperparameters>,
}

impl DeclaringBlock {
    pub fn new(name: &str, hparams: Option<Hyperparameters>) -> Arc<Self> {
        Arc::new(Self {
            metadata: BlockMetadata::new(name, BlockCategory::Custom("Test".into()), "test block"),
            hparams,
        })
    }
}

impl BlockBuilder for DeclaringBlock {
    fn metadata(&self) -> &BlockMetadata {
        &self.metadata
    }

    fn requires_hparams(&self) -> Option<Hyperparameters> {
        self.hparams.clone()
    }
}

/// Registry wrapper counting how often names are resolved
pub struct CountingSource {
    inner: BlockRegistry,
    resolutions: AtomicUsize,
}

impl CountingSource {
    pub fn new(inner: BlockRegistry) -> Arc<Self> {
        Arc::new(Self {
            inner,
            resolutions: AtomicUsize::new(0),
        })
    }

    pub fn resolutions(&self) -> usize {
        self.resolutions.load(Ordering::SeqCst)
    }
}

impl BlockSource for CountingSource {
    fn resolve(&self, name: &str) -> Result<Arc<dyn BlockBuilder>, RegistryError> {
        self.resolutions.fetch_add(1, Ordering::SeqCst);
        self.inner.resolve(name)
    }

    fn base_enum(&self) -> Vec<(String, u32)> {
        self.inner.base_enum()
    }
}

/// Registry holding one `DeclaringBlock` per entry, in order
pub fn registry_of(blocks: &[(&str, Option<Hyperparameters>)]) -> BlockRegistry {
    let registry = BlockRegistry::new();
    for (name, hparams) in blocks {
        registry
            .register(DeclaringBlock::new(name, hparams.clone()))
            .expect("test block names are valid and distinct");
    }
    registry
}
