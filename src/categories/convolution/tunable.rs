//! Tunable Convolution Block
//!
//! A convolution followed by an activation where kernel size, channel count
//! and activation are all left to the search.
//!
//! ## Hyperparameters
//!
//! | Key | Space |
//! |-----|-------|
//! | `kernel_size` | choice of 1, 3, 5, 7 |
//! | `output_channels` | 16..=256 in steps of 16 |
//! | `activation` | choice of `relu`, `swish`, `gelu` |

use crate::categories::BlockCategory;
use crate::core::block::{BlockBuilder, BlockMetadata};
use crate::core::hparams::{HParamSpec, Hyperparameters};

pub struct TunableConvolutionBlock {
    metadata: BlockMetadata,
}

impl TunableConvolutionBlock {
    pub fn new() -> Self {
        Self {
            metadata: BlockMetadata::new(
                "TUNABLE_CONVOLUTION",
                BlockCategory::Convolution,
                "Convolution with searchable kernel size, width and activation",
            ),
        }
    }
}

impl Default for TunableConvolutionBlock {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockBuilder for TunableConvolutionBlock {
    fn metadata(&self) -> &BlockMetadata {
        &self.metadata
    }

    fn requires_hparams(&self) -> Option<Hyperparameters> {
        Some(
            Hyperparameters::new()
                .with("kernel_size", HParamSpec::choice([1i64, 3, 5, 7]))
                .with(
                    "output_channels",
                    HParamSpec::IntRange {
                        min: 16,
                        max: 256,
                        step: 16,
                    },
                )
                .with("activation", HParamSpec::choice(["relu", "swish", "gelu"])),
        )
    }
}
