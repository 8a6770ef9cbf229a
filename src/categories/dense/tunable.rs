//! Tunable Fully Connected Block
//!
//! Dense layer with dropout whose width and dropout rate are searched over.

use crate::categories::BlockCategory;
use crate::core::block::{BlockBuilder, BlockMetadata};
use crate::core::hparams::{HParamSpec, Hyperparameters};

pub struct TunableFullyConnectedBlock {
    metadata: BlockMetadata,
}

impl TunableFullyConnectedBlock {
    pub fn new() -> Self {
        Self {
            metadata: BlockMetadata::new(
                "TUNABLE_FULLY_CONNECTED",
                BlockCategory::Dense,
                "Dense layer with searchable width and dropout",
            ),
        }
    }
}

impl Default for TunableFullyConnectedBlock {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockBuilder for TunableFullyConnectedBlock {
    fn metadata(&self) -> &BlockMetadata {
        &self.metadata
    }

    fn requires_hparams(&self) -> Option<Hyperparameters> {
        Some(
            Hyperparameters::new()
                .with("output_size", HParamSpec::choice([32i64, 64, 128, 256, 512, 1024]))
                .with("dropout_rate", HParamSpec::float_range(0.0, 0.5)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::hparams::ParameterValue;

    #[test]
    fn test_declared_space() {
        let hp = TunableFullyConnectedBlock::new().requires_hparams().unwrap();
        assert_eq!(hp.len(), 2);
        assert!(hp.get("dropout_rate").unwrap().contains(&ParameterValue::Number(0.25)));
        assert!(!hp.get("output_size").unwrap().contains(&ParameterValue::Integer(100)));
    }
}
