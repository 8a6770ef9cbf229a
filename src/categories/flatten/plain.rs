//! Flatten Block
//!
//! Reshapes its input to `[batch, features]` without reducing anything.

use crate::categories::BlockCategory;
use crate::core::block::{BlockBuilder, BlockMetadata};

pub struct FlattenBlock {
    metadata: BlockMetadata,
}

impl FlattenBlock {
    pub fn new() -> Self {
        Self {
            metadata: BlockMetadata::new(
                "FLATTEN",
                BlockCategory::Flatten,
                "Reshape to a flat feature vector",
            ),
        }
    }
}

impl Default for FlattenBlock {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockBuilder for FlattenBlock {
    fn metadata(&self) -> &BlockMetadata {
        &self.metadata
    }
}
