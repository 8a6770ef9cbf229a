//! Block categories and built-in block kinds
//!
//! Built-in kinds are grouped by the kind of sub-graph they construct. Each
//! category module exposes its builders; [`register_builtins`] registers all
//! of them in a fixed order.

pub mod convolution;
pub mod dense;
pub mod flatten;
pub mod recurrent;

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::core::registry::{BlockRegistry, RegistryError};

/// Block category enumeration
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockCategory {
    /// Convolutional blocks
    Convolution,
    /// Fully connected blocks
    Dense,
    /// Recurrent and sequence-memory blocks
    Recurrent,
    /// Blocks collapsing a multi-dimensional input into a flat one
    Flatten,
    /// Custom user-defined blocks
    Custom(String),
}

impl BlockCategory {
    /// Get a human-readable name for the category
    pub fn display_name(&self) -> &str {
        match self {
            BlockCategory::Convolution => "Convolution",
            BlockCategory::Dense => "Dense",
            BlockCategory::Recurrent => "Recurrent",
            BlockCategory::Flatten => "Flatten",
            BlockCategory::Custom(name) => name,
        }
    }
}

impl std::fmt::Display for BlockCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Register every built-in block kind
///
/// The order here is the enumeration order of the built-in catalog and so
/// also the key order of its search spaces.
pub fn register_builtins(registry: &BlockRegistry) -> Result<(), RegistryError> {
    for channels in convolution::FIXED_CHANNELS {
        registry.register(Arc::new(convolution::FixedChannelConvolutionBlock::new(channels)))?;
    }
    registry.register(Arc::new(convolution::TunableConvolutionBlock::new()))?;

    registry.register(Arc::new(dense::FullyConnectedBlock::new()))?;
    for units in dense::FIXED_OUTPUT_SIZES {
        registry.register(Arc::new(dense::FullyConnectedBlock::fixed_output(units)))?;
    }
    registry.register(Arc::new(dense::TunableFullyConnectedBlock::new()))?;

    for units in recurrent::LSTM_SIZES {
        registry.register(Arc::new(recurrent::LstmBlock::new(units)))?;
    }
    registry.register(Arc::new(recurrent::TunableSvdfBlock::new()))?;

    registry.register(Arc::new(flatten::FlattenBlock::new()))?;
    registry.register(Arc::new(flatten::DownsampleFlattenBlock::new()))?;
    registry.register(Arc::new(flatten::PlateReductionFlattenBlock::new()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::block_type::FLATTEN_TYPES;

    #[test]
    fn test_builtin_registration_order() {
        let registry = BlockRegistry::new();
        register_builtins(&registry).unwrap();

        assert_eq!(
            registry.names(),
            vec![
                "FIXED_CHANNEL_CONVOLUTION_16",
                "FIXED_CHANNEL_CONVOLUTION_32",
                "FIXED_CHANNEL_CONVOLUTION_64",
                "TUNABLE_CONVOLUTION",
                "FULLY_CONNECTED",
                "FIXED_OUTPUT_FULLY_CONNECTED_128",
                "FIXED_OUTPUT_FULLY_CONNECTED_256",
                "TUNABLE_FULLY_CONNECTED",
                "LSTM_64",
                "LSTM_128",
                "TUNABLE_SVDF",
                "FLATTEN",
                "DOWNSAMPLE_FLATTEN",
                "PLATE_REDUCTION_FLATTEN",
            ]
        );
    }

    #[test]
    fn test_builtins_cover_flatten_subset() {
        let registry = BlockRegistry::builtin().unwrap();
        for name in FLATTEN_TYPES {
            let builder = registry.lookup(name).unwrap();
            assert_eq!(builder.metadata().category, BlockCategory::Flatten);
        }
    }

    #[test]
    fn test_registering_builtins_twice_fails() {
        let registry = BlockRegistry::builtin().unwrap();
        assert!(matches!(
            register_builtins(&registry),
            Err(RegistryError::DuplicateBlock(_))
        ));
    }

    #[test]
    fn test_category_display() {
        assert_eq!(BlockCategory::Flatten.to_string(), "Flatten");
        assert_eq!(BlockCategory::Custom("Pooling".into()).to_string(), "Pooling");
    }
}
