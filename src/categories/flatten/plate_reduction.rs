//! Plate Reduction Flatten Block
//!
//! Averages over the plate (channel-group) axis and flattens the result.

use crate::categories::BlockCategory;
use crate::core::block::{BlockBuilder, BlockMetadata};

pub struct PlateReductionFlattenBlock {
    metadata: BlockMetadata,
}

impl PlateReductionFlattenBlock {
    pub fn new() -> Self {
        Self {
            metadata: BlockMetadata::new(
                "PLATE_REDUCTION_FLATTEN",
                BlockCategory::Flatten,
                "Reduce over the plate axis, then flatten",
            ),
        }
    }
}

impl Default for PlateReductionFlattenBlock {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockBuilder for PlateReductionFlattenBlock {
    fn metadata(&self) -> &BlockMetadata {
        &self.metadata
    }
}
