//! Tunable SVDF Block
//!
//! Singular value decomposition filter: a low-rank approximation of a dense
//! layer over a sliding memory of past frames. Rank, memory length and unit
//! count are searched over.

use crate::categories::BlockCategory;
use crate::core::block::{BlockBuilder, BlockMetadata};
use crate::core::hparams::{HParamSpec, Hyperparameters};

pub struct TunableSvdfBlock {
    metadata: BlockMetadata,
}

impl TunableSvdfBlock {
    pub fn new() -> Self {
        Self {
            metadata: BlockMetadata::new(
                "TUNABLE_SVDF",
                BlockCategory::Recurrent,
                "Low-rank SVDF layer with searchable rank, memory and units",
            ),
        }
    }
}

impl Default for TunableSvdfBlock {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockBuilder for TunableSvdfBlock {
    fn metadata(&self) -> &BlockMetadata {
        &self.metadata
    }

    fn requires_hparams(&self) -> Option<Hyperparameters> {
        Some(
            Hyperparameters::new()
                .with("rank", HParamSpec::int_range(1, 4))
                .with("memory_size", HParamSpec::choice([4i64, 8, 16, 32]))
                .with("units", HParamSpec::choice([64i64, 128, 256])),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_space() {
        let hp = TunableSvdfBlock::new().requires_hparams().unwrap();
        let keys: Vec<_> = hp.keys().collect();
        assert_eq!(keys, vec!["rank", "memory_size", "units"]);
    }
}
