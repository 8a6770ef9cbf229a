//! Downsample Flatten Block
//!
//! Max-pools the spatial dimensions before flattening, trading resolution
//! for a smaller flat representation. The pooling window is searched over.

use crate::categories::BlockCategory;
use crate::core::block::{BlockBuilder, BlockMetadata};
use crate::core::hparams::{HParamSpec, Hyperparameters};

pub struct DownsampleFlattenBlock {
    metadata: BlockMetadata,
}

impl DownsampleFlattenBlock {
    pub fn new() -> Self {
        Self {
            metadata: BlockMetadata::new(
                "DOWNSAMPLE_FLATTEN",
                BlockCategory::Flatten,
                "Pool spatial dimensions, then flatten",
            ),
        }
    }
}

impl Default for DownsampleFlattenBlock {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockBuilder for DownsampleFlattenBlock {
    fn metadata(&self) -> &BlockMetadata {
        &self.metadata
    }

    fn requires_hparams(&self) -> Option<Hyperparameters> {
        Some(Hyperparameters::new().with("pool_size", HParamSpec::choice([2i64, 4, 8])))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::block::Block;
    use crate::core::hparams::ParameterValue;

    #[test]
    fn test_default_pool_size() {
        let block = DownsampleFlattenBlock::new().build("DOWNSAMPLE_FLATTEN");
        assert_eq!(block.parameters()["pool_size"], ParameterValue::Integer(2));
    }
}
