//! Fully Connected Block
//!
//! Dense layer in two flavours: `FULLY_CONNECTED`, which keeps the width of
//! its input, and `FIXED_OUTPUT_FULLY_CONNECTED_<units>`, which projects to a
//! fixed width. Neither declares hyperparameters.

use crate::categories::BlockCategory;
use crate::core::block::{BlockBuilder, BlockMetadata};

/// Output widths registered as built-in kinds
pub const FIXED_OUTPUT_SIZES: [u32; 2] = [128, 256];

pub struct FullyConnectedBlock {
    metadata: BlockMetadata,
    output_size: Option<u32>,
}

impl FullyConnectedBlock {
    /// Width-preserving dense layer
    pub fn new() -> Self {
        Self {
            metadata: BlockMetadata::new(
                "FULLY_CONNECTED",
                BlockCategory::Dense,
                "Dense layer keeping the input width",
            ),
            output_size: None,
        }
    }

    /// Dense layer projecting to `units` outputs
    pub fn fixed_output(units: u32) -> Self {
        Self {
            metadata: BlockMetadata::new(
                format!("FIXED_OUTPUT_FULLY_CONNECTED_{}", units),
                BlockCategory::Dense,
                format!("Dense layer with {} outputs", units),
            ),
            output_size: Some(units),
        }
    }

    /// `None` when the layer keeps its input width
    pub fn output_size(&self) -> Option<u32> {
        self.output_size
    }
}

impl Default for FullyConnectedBlock {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockBuilder for FullyConnectedBlock {
    fn metadata(&self) -> &BlockMetadata {
        &self.metadata
    }
}
