//! Fixed Channel Convolution Block
//!
//! A 3x3 convolution whose output channel count is baked into the block kind,
//! e.g. `FIXED_CHANNEL_CONVOLUTION_32`. It declares no hyperparameters: the
//! search chooses between channel counts by choosing between kinds.

use crate::categories::BlockCategory;
use crate::core::block::{BlockBuilder, BlockMetadata};

/// Channel counts registered as built-in kinds
pub const FIXED_CHANNELS: [u32; 3] = [16, 32, 64];

pub struct FixedChannelConvolutionBlock {
    metadata: BlockMetadata,
    channels: u32,
}

impl FixedChannelConvolutionBlock {
    pub fn new(channels: u32) -> Self {
        Self {
            metadata: BlockMetadata::new(
                format!("FIXED_CHANNEL_CONVOLUTION_{}", channels),
                BlockCategory::Convolution,
                format!("3x3 convolution with {} output channels", channels),
            ),
            channels,
        }
    }

    pub fn channels(&self) -> u32 {
        self.channels
    }
}

impl BlockBuilder for FixedChannelConvolutionBlock {
    fn metadata(&self) -> &BlockMetadata {
        &self.metadata
    }
}
